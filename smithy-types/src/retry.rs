/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of service errors.
//!
//! This module only describes what kind of failure an error represents. Deciding whether and
//! when to retry belongs to the transport layer that dispatches requests.

/// Broad category of a failed request.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level error such as a socket timeout or TLS negotiation failure.
    TransientError,

    /// The server explicitly asked the client to back off.
    ThrottlingError,

    /// The service failed while processing an otherwise valid request.
    ServerError,

    /// The request itself was rejected, for example because a parameter was invalid.
    ClientError,
}

/// Implemented by error types that know their [`ErrorKind`] and service error code.
pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`, or `None` when it cannot be determined from the error alone.
    fn error_kind(&self) -> Option<ErrorKind>;

    /// Returns the service error `code` for this error if one exists.
    fn code(&self) -> Option<&str>;
}
