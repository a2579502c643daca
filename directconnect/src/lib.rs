/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data model for AWS Direct Connect.
//!
//! AWS Direct Connect links your internal network to an AWS Direct Connect location over a
//! standard Ethernet fiber-optic cable. This crate holds the shapes exchanged with the service:
//!
//! * [`model`]: structures and enumerations shared between operations, such as
//!   [`BgpPeer`](model::BgpPeer) or [`ConnectionState`](model::ConnectionState).
//! * [`input`] and [`output`]: request and response shapes, one pair per operation.
//! * [`operation`]: metadata tying each operation to its shapes.
//! * [`error`]: errors modeled by the service.
//! * [`json`]: `awsJson1_1` bodies for inputs, outputs and errors.
//!
//! Every member of every shape is optional. Shapes are built with a fluent builder:
//!
//! ```
//! use directconnect::model::{BgpPeer, BgpStatus};
//!
//! let peer = BgpPeer::builder()
//!     .bgp_peer_id("bp-123")
//!     .asn(65000)
//!     .bgp_status(BgpStatus::Up)
//!     .build();
//! assert_eq!(peer.to_string(), "{bgpPeerId: bp-123, asn: 65000, bgpStatus: up}");
//! ```

#![warn(rust_2018_idioms)]

#[macro_use]
mod macros;

mod display;
pub mod error;
pub mod input;
pub mod json;
pub mod model;
pub mod operation;
pub mod output;

pub use error::Error;
pub use smithy_types::{Blob, Instant};

/// Version of this crate.
pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name used for endpoint resolution and signing.
pub const SERVICE_NAME: &str = "directconnect";

/// The API version this model was generated from.
pub const API_VERSION: &str = "2012-10-25";

/// Prefix of the `X-Amz-Target` header value.
pub const TARGET_PREFIX: &str = "OvertureService";

/// `awsJson` protocol version, sent as `application/x-amz-json-1.1`.
pub const JSON_VERSION: &str = "1.1";
