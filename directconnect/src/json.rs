/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `awsJson1_1` document bodies for operation inputs, outputs and errors.
//!
//! Only the payload is handled here. Building the HTTP request (the `X-Amz-Target` header comes
//! from [`OperationShape::TARGET`]), signing and dispatch happen elsewhere.

use crate::error::Error;
use crate::operation::OperationShape;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Failure to encode or decode a JSON document.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// The input could not be serialized.
    #[error("failed to serialize the input of {operation}")]
    Serialize {
        /// The operation the input belongs to.
        operation: &'static str,
        /// The underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
    /// The response body was not a valid output document.
    #[error("failed to deserialize the output of {operation}")]
    Deserialize {
        /// The operation the output belongs to.
        operation: &'static str,
        /// The underlying deserializer error.
        #[source]
        source: serde_json::Error,
    },
    /// The error response body was not a valid JSON object.
    #[error("failed to parse the error response")]
    ErrorResponse {
        /// The underlying deserializer error.
        #[source]
        source: serde_json::Error,
    },
}

impl JsonError {
    /// The operation being encoded or decoded, when known.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            JsonError::Serialize { operation, .. } | JsonError::Deserialize { operation, .. } => {
                Some(*operation)
            }
            JsonError::ErrorResponse { .. } => None,
        }
    }
}

/// Serializes the input of `O` into a request body.
pub fn serialize_input<O>(input: &O::Input) -> Result<String, JsonError>
where
    O: OperationShape,
    O::Input: Serialize,
{
    match serde_json::to_string(input) {
        Ok(body) => {
            trace!(operation = O::NAME, bytes = body.len(), "serialized input");
            Ok(body)
        }
        Err(source) => {
            debug!(operation = O::NAME, error = %source, "failed to serialize input");
            Err(JsonError::Serialize {
                operation: O::NAME,
                source,
            })
        }
    }
}

/// Deserializes a successful response body into the output of `O`.
///
/// An empty body is read as `{}`, which yields an output with every member unset.
pub fn deserialize_output<O>(body: &[u8]) -> Result<O::Output, JsonError>
where
    O: OperationShape,
    O::Output: DeserializeOwned,
{
    trace!(operation = O::NAME, bytes = body.len(), "deserializing output");
    serde_json::from_slice(or_empty_object(body)).map_err(|source| {
        debug!(operation = O::NAME, error = %source, "failed to deserialize output");
        JsonError::Deserialize {
            operation: O::NAME,
            source,
        }
    })
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "Message", default)]
    capitalized_message: Option<String>,
}

/// Parses an error response body into the modeled [`Error`].
///
/// The code is read from `__type`; the message from `message` or `Message`. Codes not modeled
/// by the service become [`Error::Unhandled`].
pub fn parse_error(body: &[u8]) -> Result<Error, JsonError> {
    let parsed: ErrorBody = serde_json::from_slice(or_empty_object(body)).map_err(|source| {
        debug!(error = %source, "failed to parse error response");
        JsonError::ErrorResponse { source }
    })?;
    let code = parsed.code.as_deref().map(sanitize_error_code);
    debug!(code = ?code, "parsed service error");
    Ok(Error::from_code(code, parsed.message.or(parsed.capitalized_message)))
}

fn or_empty_object(body: &[u8]) -> &[u8] {
    if body.iter().all(u8::is_ascii_whitespace) {
        &b"{}"[..]
    } else {
        body
    }
}

/// Strips the `:`-delimited suffix and the `namespace#` prefix some services add to error
/// codes, e.g. `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/...`.
pub(crate) fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}
