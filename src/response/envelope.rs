// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generic response envelope.

use serde::Deserialize;

use crate::error::ProtocolError;

/// Envelope wrapping every cBox response.
///
/// The cBox answers every command with the same outer shape:
///
/// ```json
/// {"SUCCESS": true, "INFO": {"RSP": "OK", "CMD": "SET POWR", "TS": 1729331226}, "DATA": {}}
/// ```
///
/// Only `SUCCESS` is required to accept a response; a missing flag counts as
/// a failure.
///
/// # Examples
///
/// ```
/// use connbox::response::Envelope;
///
/// let envelope = Envelope::parse(r#"{"SUCCESS": true}"#).unwrap();
/// assert!(envelope.is_success());
/// assert!(Envelope::check(r#"{"SUCCESS": false}"#).is_err());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(rename = "SUCCESS", default)]
    success: bool,

    #[serde(rename = "INFO", default)]
    info: Option<EnvelopeInfo>,

    #[serde(rename = "DATA", default)]
    data: Option<serde_json::Value>,
}

/// Command echo carried in the `INFO` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct EnvelopeInfo {
    /// Response code, `"OK"` or `"ERROR"`.
    pub rsp: Option<String>,

    /// The command keyword the device executed.
    pub cmd: Option<String>,

    /// Device time as Unix epoch seconds.
    pub ts: Option<i64>,
}

impl Envelope {
    /// Decodes an envelope without checking its success flag.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Malformed` if the body is not a JSON envelope.
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(body).map_err(|source| ProtocolError::Malformed {
            source,
            body: body.to_string(),
        })
    }

    /// Decodes an envelope and requires `SUCCESS` to be true.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Malformed` if the body cannot be decoded, or
    /// `ProtocolError::Rejected` if the device reported a failure.
    pub fn check(body: &str) -> Result<Self, ProtocolError> {
        let envelope = Self::parse(body)?;
        if !envelope.success {
            tracing::warn!(body = %body, "Device rejected command");
            return Err(ProtocolError::Rejected {
                body: body.to_string(),
            });
        }
        Ok(envelope)
    }

    /// Returns whether the device reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the `INFO` block, if present.
    #[must_use]
    pub fn info(&self) -> Option<&EnvelopeInfo> {
        self.info.as_ref()
    }

    /// Returns the raw `DATA` block, if present.
    #[must_use]
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }
}
