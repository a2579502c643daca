/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `Display` rendering for shapes: `{memberName: value, memberName: value}` with unset
//! members left out.

use smithy_types::{Blob, Instant};
use std::fmt;

/// A value that can appear on the right-hand side of a rendered member.
pub(crate) trait DisplayValue {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl DisplayValue for String {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! display_value_via_display {
    ($($t:ty),+) => {
        $(
            impl DisplayValue for $t {
                fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

display_value_via_display!(i32, i64, bool, Instant, Blob);

impl<T: DisplayValue> DisplayValue for Vec<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_value(f)?;
        }
        f.write_str("]")
    }
}

/// Writes the members of one shape, in the spirit of `Formatter::debug_struct`.
pub(crate) struct ShapeFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        ShapeFormatter {
            f,
            result,
            has_fields: false,
        }
    }

    /// Renders `name: value` when the member is set; unset members are skipped.
    pub(crate) fn field<T: DisplayValue>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            if self.result.is_ok() {
                self.result = self.entry(name, value);
            }
        }
        self
    }

    fn entry(&mut self, name: &str, value: &dyn DisplayValue) -> fmt::Result {
        if self.has_fields {
            self.f.write_str(", ")?;
        }
        self.has_fields = true;
        self.f.write_str(name)?;
        self.f.write_str(": ")?;
        value.fmt_value(self.f)
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}
