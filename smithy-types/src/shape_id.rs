/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt;

/// A [Smithy Shape ID](https://smithy.io/2.0/spec/model.html#shape-id), e.g.
/// `com.amazonaws.directconnect#CreateBGPPeer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId {
    absolute: &'static str,

    namespace: &'static str,
    name: &'static str,
}

impl ShapeId {
    /// Constructs a new [`ShapeId`]. Callers are responsible for `absolute` being
    /// `namespace#name`.
    #[doc(hidden)]
    pub const fn new(absolute: &'static str, namespace: &'static str, name: &'static str) -> Self {
        Self {
            absolute,
            namespace,
            name,
        }
    }

    /// Returns the namespace, e.g. `com.amazonaws.directconnect`.
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Returns the shape name, e.g. `CreateBGPPeer`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the absolute shape ID.
    pub fn absolute(&self) -> &'static str {
        self.absolute
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.absolute)
    }
}

#[cfg(test)]
mod test {
    use super::ShapeId;

    #[test]
    fn parts() {
        const ID: ShapeId = ShapeId::new(
            "com.amazonaws.directconnect#DescribeLags",
            "com.amazonaws.directconnect",
            "DescribeLags",
        );
        assert_eq!(ID.namespace(), "com.amazonaws.directconnect");
        assert_eq!(ID.name(), "DescribeLags");
        assert_eq!(ID.to_string(), "com.amazonaws.directconnect#DescribeLags");
    }
}
