/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors modeled by the service.
//!
//! Every operation shares the same error set, so a single [`Error`] enum is used as the
//! `Error` type of each [`OperationShape`](crate::operation::OperationShape).

use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;

macro_rules! exception {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(
            std::clone::Clone,
            std::cmp::PartialEq,
            std::cmp::Eq,
            std::hash::Hash,
            std::default::Default,
            std::fmt::Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name {
            /// A human readable description of the failure.
            #[serde(alias = "Message", default, skip_serializing_if = "Option::is_none")]
            pub message: std::option::Option<std::string::String>,
        }

        impl $name {
            /// Creates the exception with an optional message.
            pub fn new(message: std::option::Option<std::string::String>) -> Self {
                $name { message }
            }

            /// Returns the error message.
            pub fn message(&self) -> std::option::Option<&str> {
                self.message.as_deref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))?;
                if let Some(inner) = &self.message {
                    write!(f, ": {}", inner)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}
    };
}

exception! {
    /// One or more parameters are not valid.
    DirectConnectClientException
}

exception! {
    /// A server-side error occurred.
    DirectConnectServerException
}

exception! {
    /// A tag key was specified more than once.
    DuplicateTagKeysException
}

exception! {
    /// You have reached the limit on the number of tags that can be assigned.
    TooManyTagsException
}

/// Any error returned by an AWS Direct Connect operation.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more parameters are not valid.
    #[error(transparent)]
    DirectConnectClientException(#[from] DirectConnectClientException),
    /// A server-side error occurred.
    #[error(transparent)]
    DirectConnectServerException(#[from] DirectConnectServerException),
    /// A tag key was specified more than once.
    #[error(transparent)]
    DuplicateTagKeysException(#[from] DuplicateTagKeysException),
    /// You have reached the limit on the number of tags that can be assigned.
    #[error(transparent)]
    TooManyTagsException(#[from] TooManyTagsException),
    /// An error code this version of the model does not know about.
    #[error("unhandled service error (code: {})", .code.as_deref().unwrap_or("unknown"))]
    Unhandled {
        /// The sanitized error code, when the response carried one.
        code: Option<String>,
        /// The error message, when the response carried one.
        message: Option<String>,
    },
}

impl Error {
    /// Maps an error code and message to the matching modeled error.
    ///
    /// `code` must already be sanitized, e.g. `DirectConnectClientException`.
    pub fn from_code(code: Option<&str>, message: Option<String>) -> Self {
        match code {
            Some("DirectConnectClientException") => DirectConnectClientException::new(message).into(),
            Some("DirectConnectServerException") => DirectConnectServerException::new(message).into(),
            Some("DuplicateTagKeysException") => DuplicateTagKeysException::new(message).into(),
            Some("TooManyTagsException") => TooManyTagsException::new(message).into(),
            other => Error::Unhandled {
                code: other.map(str::to_owned),
                message,
            },
        }
    }

    /// Returns the error message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::DirectConnectClientException(inner) => inner.message(),
            Error::DirectConnectServerException(inner) => inner.message(),
            Error::DuplicateTagKeysException(inner) => inner.message(),
            Error::TooManyTagsException(inner) => inner.message(),
            Error::Unhandled { message, .. } => message.as_deref(),
        }
    }

    /// Returns true if the error is a `DirectConnectClientException`.
    pub fn is_direct_connect_client_exception(&self) -> bool {
        matches!(self, Error::DirectConnectClientException(_))
    }

    /// Returns true if the error is a `DirectConnectServerException`.
    pub fn is_direct_connect_server_exception(&self) -> bool {
        matches!(self, Error::DirectConnectServerException(_))
    }

    /// Returns true if the error is a `DuplicateTagKeysException`.
    pub fn is_duplicate_tag_keys_exception(&self) -> bool {
        matches!(self, Error::DuplicateTagKeysException(_))
    }

    /// Returns true if the error is a `TooManyTagsException`.
    pub fn is_too_many_tags_exception(&self) -> bool {
        matches!(self, Error::TooManyTagsException(_))
    }
}

impl ProvideErrorKind for Error {
    fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Error::DirectConnectClientException(_)
            | Error::DuplicateTagKeysException(_)
            | Error::TooManyTagsException(_) => Some(ErrorKind::ClientError),
            Error::DirectConnectServerException(_) => Some(ErrorKind::ServerError),
            Error::Unhandled { .. } => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            Error::DirectConnectClientException(_) => Some("DirectConnectClientException"),
            Error::DirectConnectServerException(_) => Some("DirectConnectServerException"),
            Error::DuplicateTagKeysException(_) => Some("DuplicateTagKeysException"),
            Error::TooManyTagsException(_) => Some("TooManyTagsException"),
            Error::Unhandled { code, .. } => code.as_deref(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn modeled_codes_map_to_variants() {
        let err = Error::from_code(
            Some("DirectConnectClientException"),
            Some("Connection dxcon-1 does not exist".to_owned()),
        );
        assert!(err.is_direct_connect_client_exception());
        assert_eq!(err.code(), Some("DirectConnectClientException"));
        assert_eq!(err.error_kind(), Some(ErrorKind::ClientError));
        assert_eq!(
            err.to_string(),
            "DirectConnectClientException: Connection dxcon-1 does not exist"
        );
    }

    #[test]
    fn server_errors_are_classified() {
        let err = Error::from(DirectConnectServerException::new(None));
        assert_eq!(err.error_kind(), Some(ErrorKind::ServerError));
        assert_eq!(err.message(), None);
        assert_eq!(err.to_string(), "DirectConnectServerException");
    }

    #[test]
    fn tag_errors_are_client_errors() {
        for code in ["DuplicateTagKeysException", "TooManyTagsException"] {
            let err = Error::from_code(Some(code), None);
            assert_eq!(err.error_kind(), Some(ErrorKind::ClientError));
            assert_eq!(err.code(), Some(code));
        }
    }

    #[test]
    fn unknown_codes_are_unhandled() {
        let err = Error::from_code(Some("ThrottlingException"), Some("slow down".to_owned()));
        assert!(matches!(err, Error::Unhandled { .. }));
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.error_kind(), None);
        assert_eq!(err.message(), Some("slow down"));
        assert_eq!(
            err.to_string(),
            "unhandled service error (code: ThrottlingException)"
        );

        let err = Error::from_code(None, None);
        assert_eq!(err.code(), None);
        assert_eq!(err.to_string(), "unhandled service error (code: unknown)");
    }
}
