/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::{assert_json_matches_no_panic, CompareMode, Config};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("body was not valid JSON: {reason}\n{body}")]
    InvalidJson { body: String, reason: String },

    #[error("body did not match\n{diff}")]
    BodyDidNotMatch { diff: String },

    #[error("expected member `{member}` to be absent, found {found}")]
    ForbiddenMember { member: String, found: String },

    #[error("required member `{member}` is missing")]
    MissingMember { member: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        panic!("Protocol test failed: {}", e);
    }
}

fn parse(body: &str) -> Result<Value, ProtocolTestFailure> {
    serde_json::from_str(body).map_err(|err| ProtocolTestFailure::InvalidJson {
        body: body.to_owned(),
        reason: err.to_string(),
    })
}

/// Compares two JSON documents structurally. Member order and whitespace are ignored,
/// numbers compare by value.
pub fn validate_json_body(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual = parse(actual)?;
    let expected = parse(expected)?;
    assert_json_matches_no_panic(&actual, &expected, Config::new(CompareMode::Strict))
        .map_err(|diff| ProtocolTestFailure::BodyDidNotMatch { diff })
}

/// Asserts that none of `members` appear at the top level of the JSON object in `body`.
pub fn forbid_members(body: &str, members: &[&str]) -> Result<(), ProtocolTestFailure> {
    let doc = parse(body)?;
    for member in members {
        if let Some(found) = doc.get(*member) {
            return Err(ProtocolTestFailure::ForbiddenMember {
                member: member.to_string(),
                found: found.to_string(),
            });
        }
    }
    Ok(())
}

/// Asserts that all of `members` appear at the top level of the JSON object in `body`.
pub fn require_members(body: &str, members: &[&str]) -> Result<(), ProtocolTestFailure> {
    let doc = parse(body)?;
    for member in members {
        if doc.get(*member).is_none() {
            return Err(ProtocolTestFailure::MissingMember {
                member: member.to_string(),
            });
        }
    }
    Ok(())
}

/// Like `assert_eq!` but renders a line diff of the two pretty-printed documents on failure.
#[track_caller]
pub fn assert_json_eq(actual: &str, expected: &str) {
    if let Err(failure) = validate_json_body(actual, expected) {
        let pretty = |body: &str| match serde_json::from_str::<Value>(body) {
            Ok(doc) => serde_json::to_string_pretty(&doc).unwrap_or_else(|_| body.to_owned()),
            Err(_) => body.to_owned(),
        };
        pretty_assertions::assert_eq!(pretty(actual), pretty(expected), "{}", failure);
        panic!("{}", failure);
    }
}
