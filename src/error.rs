// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `connbox` library.
//!
//! Failures fall into three families:
//!
//! - [`ValueError`]: a caller-supplied value was rejected locally, before any
//!   request left the process.
//! - [`CommunicationError`]: the request could not be delivered or the device
//!   answered with a non-200 HTTP status.
//! - [`ProtocolError`]: the device answered, but the envelope reported a
//!   failure or could not be decoded. The raw body is always kept.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A setpoint was outside its accepted range.
    #[error("validation error: {0}")]
    Validation(#[from] ValueError),

    /// The request failed at the transport or HTTP level.
    #[error("communication error: {0}")]
    Communication(#[from] CommunicationError),

    /// The device response was rejected or malformed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// A code does not map to any known stove state.
    #[error("unknown stove state code: {0}")]
    UnknownStoveState(u8),

    /// A code does not map to any known fan speed.
    #[error("unknown fan speed code: {0}")]
    UnknownFanSpeed(u8),

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// Errors raised while talking to the device over HTTP.
#[derive(Debug, Error)]
pub enum CommunicationError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a status other than 200.
    #[error("unexpected HTTP status {status} - {reason}")]
    UnexpectedStatus {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors raised when the device response cannot be accepted.
///
/// Every variant carries the raw response body for diagnostics.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The envelope's `SUCCESS` flag was false or missing.
    #[error("request response is not SUCCESS => {body}")]
    Rejected {
        /// The raw response body.
        body: String,
    },

    /// The response could not be decoded into the expected envelope.
    #[error("malformed response ({source}) => {body}")]
    Malformed {
        /// The underlying decoding failure.
        source: serde_json::Error,
        /// The raw response body.
        body: String,
    },
}

impl ProtocolError {
    /// Returns the raw response body that caused the error.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Rejected { body } | Self::Malformed { body, .. } => body,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
