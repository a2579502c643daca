/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Macros that stamp out service shapes and string enumerations.
//!
//! Every member is declared as `"wireName" => field / set_field: kind`, where `kind` is one of
//! `string`, `primitive(T)` (copied out by the accessor), `value(T)` (borrowed by the accessor)
//! or `list(T)`.

/// The Rust type stored in a member of the given kind.
macro_rules! member_type {
    (string) => {
        std::string::String
    };
    (primitive($t:ty)) => {
        $t
    };
    (value($t:ty)) => {
        $t
    };
    (list($t:ty)) => {
        std::vec::Vec<$t>
    };
}

/// Read accessor for one member. Must be called from within an `impl` block.
macro_rules! member_accessor {
    ($(#[$fmeta:meta])* $field:ident : string) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> std::option::Option<&str> {
            self.$field.as_deref()
        }
    };
    ($(#[$fmeta:meta])* $field:ident : primitive($t:ty)) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> std::option::Option<$t> {
            self.$field
        }
    };
    ($(#[$fmeta:meta])* $field:ident : value($t:ty)) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> std::option::Option<&$t> {
            self.$field.as_ref()
        }
    };
    ($(#[$fmeta:meta])* $field:ident : list($t:ty)) => {
        $(#[$fmeta])*
        pub fn $field(&self) -> std::option::Option<&[$t]> {
            self.$field.as_deref()
        }
    };
}

/// Builder setters for one member. Must be called from within an `impl` block.
macro_rules! member_setters {
    ($(#[$fmeta:meta])* $field:ident / $setter:ident : list($t:ty)) => {
        /// Appends an item to the list, creating the list if it is unset.
        ///
        /// To replace the list wholesale use the matching `set_` method.
        $(#[$fmeta])*
        pub fn $field(mut self, input: impl Into<$t>) -> Self {
            let mut v = self.$field.unwrap_or_default();
            v.push(input.into());
            self.$field = Some(v);
            self
        }
        /// Replaces the whole list, or clears it with `None`.
        $(#[$fmeta])*
        pub fn $setter(mut self, input: std::option::Option<std::vec::Vec<$t>>) -> Self {
            self.$field = input;
            self
        }
    };
    ($(#[$fmeta:meta])* $field:ident / $setter:ident : $kind:ident $(($inner:ty))?) => {
        $(#[$fmeta])*
        pub fn $field(mut self, input: impl Into<member_type!($kind $(($inner))?)>) -> Self {
            self.$field = Some(input.into());
            self
        }
        $(#[$fmeta])*
        pub fn $setter(mut self, input: std::option::Option<member_type!($kind $(($inner))?)>) -> Self {
            self.$field = input;
            self
        }
    };
}

/// Defines a structure shape, its builder, accessors and `Display` rendering.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $wire:literal => $field:ident / $setter:ident : $kind:ident $(($inner:ty))?,
            )*
        }
    ) => {
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
        )]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                pub $field: std::option::Option<member_type!($kind $(($inner))?)>,
            )*
        }

        impl $name {
            /// Creates a new builder-style object to manufacture this shape.
            pub fn builder() -> $builder {
                $builder::default()
            }

            $(
                member_accessor! { $(#[$fmeta])* $field : $kind $(($inner))? }
            )*
        }

        #[doc = concat!("A builder for [`", stringify!($name), "`].")]
        #[non_exhaustive]
        #[derive(
            std::clone::Clone,
            std::cmp::PartialEq,
            std::default::Default,
            std::fmt::Debug,
        )]
        pub struct $builder {
            $(
                pub(crate) $field: std::option::Option<member_type!($kind $(($inner))?)>,
            )*
        }

        impl $builder {
            $(
                member_setters! { $(#[$fmeta])* $field / $setter : $kind $(($inner))? }
            )*

            #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`].")]
            pub fn build(self) -> $name {
                $name {
                    $(
                        $field: self.$field,
                    )*
                }
            }
        }

        impl std::convert::From<$name> for $builder {
            #[allow(unused_variables)]
            fn from(shape: $name) -> Self {
                $builder {
                    $(
                        $field: shape.$field,
                    )*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                #[allow(unused_mut)]
                let mut formatter = $crate::display::ShapeFormatter::new(f);
                $(
                    formatter.field($wire, &self.$field);
                )*
                formatter.finish()
            }
        }

        impl $crate::display::DisplayValue for $name {
            fn fmt_value(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }

        // Only objects are accepted; positional sequences are rejected.
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                #[derive(serde::Deserialize)]
                struct Members {
                    $(
                        #[serde(rename = $wire, default)]
                        $field: std::option::Option<member_type!($kind $(($inner))?)>,
                    )*
                }

                struct MembersVisitor;

                impl<'de> serde::de::Visitor<'de> for MembersVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        f.write_str(concat!("a ", stringify!($name), " object"))
                    }

                    #[allow(unused_variables)]
                    fn visit_map<A>(self, map: A) -> std::result::Result<Self::Value, A::Error>
                    where
                        A: serde::de::MapAccess<'de>,
                    {
                        let members = <Members as serde::Deserialize>::deserialize(
                            serde::de::value::MapAccessDeserializer::new(map),
                        )?;
                        Ok($name {
                            $(
                                $field: members.$field,
                            )*
                        })
                    }
                }

                deserializer.deserialize_map(MembersVisitor)
            }
        }
    };
}

/// Defines a string-backed enumeration with an `Unknown` variant that keeps values this
/// version of the model does not recognize.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(std::clone::Clone, std::fmt::Debug)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value the service returned that is not one of the known variants.
            Unknown(std::string::String),
        }

        impl $name {
            /// Returns the `&str` value of the enum member.
            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        $name::$variant => $value,
                    )+
                    $name::Unknown(s) => s.as_str(),
                }
            }

            /// Returns all the known `&str` values of the enum members.
            pub const fn values() -> &'static [&'static str] {
                &[$($value,)+]
            }
        }

        // Equality, ordering and hashing follow the wire string, so `Unknown("up")` equals `Up`.
        impl std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl std::cmp::Eq for $name {}

        impl std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> std::option::Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self.as_str(), state)
            }
        }

        impl<'a> std::convert::From<&'a str> for $name {
            fn from(s: &'a str) -> Self {
                match s {
                    $(
                        $value => $name::$variant,
                    )+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl std::convert::From<std::string::String> for $name {
            fn from(s: std::string::String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::display::DisplayValue for $name {
            fn fmt_value(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(s))
            }
        }
    };
}
