// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `GET ALLS` response parsing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, de};

use crate::error::ProtocolError;
use crate::response::Envelope;
use crate::types::{FanSpeed, PowerSetpoint, StoveState, TemperatureSetpoint};

/// Response from `GET ALLS`.
///
/// The device sends many more `DATA` fields than are modelled here
/// (fan RPM, pellet counters, I/O bitmaps); unknown fields are ignored.
///
/// # Examples
///
/// ```
/// use connbox::response::AllsResponse;
/// use connbox::types::StoveState;
///
/// let json = r#"{
///     "SUCCESS": true,
///     "INFO": {"RSP": "OK", "CMD": "GET ALLS", "TS": 1728725454},
///     "DATA": {
///         "STATUS": 6, "F2L": 7, "PWR": 3, "SETP": 21,
///         "T1": 22.5, "T2": 0, "T3": 140, "T4": 0, "T5": 51,
///         "VER": "48", "FWDATE": "2023-07-26"
///     }
/// }"#;
/// let response = AllsResponse::from_body(json).unwrap();
/// assert_eq!(response.data.status, StoveState::Burning);
/// assert_eq!(response.data.firmware_version, 48);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct AllsResponse {
    /// Command echo and device time.
    #[serde(rename = "INFO")]
    pub info: AllsInfo,

    /// Readings and setpoints.
    #[serde(rename = "DATA")]
    pub data: AllsData,
}

impl AllsResponse {
    /// Decodes a `GET ALLS` body after checking its success flag.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Rejected` if `SUCCESS` is not true, or
    /// `ProtocolError::Malformed` if any field is missing or invalid
    /// (including unknown state or fan codes).
    pub fn from_body(body: &str) -> Result<Self, ProtocolError> {
        Envelope::check(body)?;
        serde_json::from_str(body).map_err(|source| ProtocolError::Malformed {
            source,
            body: body.to_string(),
        })
    }
}

/// `INFO` block of a `GET ALLS` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AllsInfo {
    /// Snapshot time, sent as Unix epoch seconds.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub ts: DateTime<Utc>,

    /// Response code.
    pub rsp: Option<String>,

    /// Echoed command.
    pub cmd: Option<String>,
}

/// `DATA` block of a `GET ALLS` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AllsData {
    /// Controller MAC address.
    pub mac: Option<String>,

    /// Stove state code.
    pub status: StoveState,

    /// Room fan setpoint code.
    #[serde(rename = "F2L")]
    pub fan_setpoint: FanSpeed,

    /// Power level setpoint.
    #[serde(rename = "PWR")]
    pub power_setpoint: PowerSetpoint,

    /// Temperature setpoint.
    #[serde(rename = "SETP")]
    pub temperature_setpoint: TemperatureSetpoint,

    /// Temperature sensor 1.
    pub t1: f64,

    /// Temperature sensor 2.
    pub t2: f64,

    /// Temperature sensor 3.
    pub t3: f64,

    /// Temperature sensor 4.
    pub t4: f64,

    /// Temperature sensor 5.
    pub t5: f64,

    /// Firmware version, sent as a numeric string.
    #[serde(rename = "VER", deserialize_with = "numeric_string")]
    pub firmware_version: u32,

    /// Firmware release date.
    #[serde(rename = "FWDATE")]
    pub firmware_date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u32),
    Text(String),
}

fn numeric_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid numeric string: {s:?}"))),
    }
}
