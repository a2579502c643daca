/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic primitives shared by generated service models.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod instant;
pub mod retry;
mod shape_id;

use std::fmt;

pub use crate::instant::Instant;
pub use crate::shape_id::ShapeId;

/// Binary data, such as an LOA document, as carried by a service shape.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    /// Creates a new blob from the given input.
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    /// Consumes the blob and returns the raw bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    /// Number of bytes held by the blob.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the blob holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob::new(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Blob::new(bytes)
    }
}

// Only the size is rendered; LOA documents are whole PDFs.
impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.inner.len())
    }
}

#[cfg(feature = "serde-serialize")]
impl serde::Serialize for Blob {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&base64::encode(&self.inner))
        } else {
            serializer.serialize_bytes(&self.inner)
        }
    }
}

#[cfg(feature = "serde-deserialize")]
mod blob_de {
    use super::Blob;
    use serde::de::{Error, Visitor};
    use std::fmt;

    struct BlobVisitor;

    impl<'de> Visitor<'de> for BlobVisitor {
        type Value = Blob;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a base64 encoded string or a byte array")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            base64::decode(v).map(Blob::new).map_err(Error::custom)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(Blob::new(v))
        }

        fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(Blob::new(v))
        }
    }

    impl<'de> serde::Deserialize<'de> for Blob {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(BlobVisitor)
            } else {
                deserializer.deserialize_byte_buf(BlobVisitor)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Blob, Instant};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn blob_display_hides_content() {
        let blob = Blob::new(&b"%PDF-1.4"[..]);
        assert_eq!(blob.to_string(), "Blob(8 bytes)");
        assert_eq!(blob.len(), 8);
        assert!(!blob.is_empty());
    }

    #[cfg(all(feature = "serde-serialize", feature = "serde-deserialize"))]
    #[test]
    fn blob_json_is_base64() {
        let blob = Blob::new(&b"hello"[..]);
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, "\"aGVsbG8=\"");
        assert_eq!(serde_json::from_str::<Blob>(&json).unwrap(), blob);
        assert!(serde_json::from_str::<Blob>("\"not base64!\"").is_err());
    }
}
