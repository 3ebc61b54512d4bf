// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot of the stove state.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::ProtocolError;
use crate::response::AllsResponse;
use crate::types::{FanSpeed, PowerSetpoint, StoveState, TemperatureSetpoint};

/// Everything the cBox reports in one `GET ALLS` call.
///
/// A `DeviceInfo` is built fresh from each successful
/// [`fetch_info()`](crate::Cbox::fetch_info) and never changes afterwards.
///
/// `Display` renders the snapshot as a JSON object.
///
/// # Examples
///
/// ```
/// use connbox::DeviceInfo;
/// use connbox::types::{FanSpeed, StoveState};
///
/// let body = r#"{
///     "SUCCESS": true,
///     "INFO": {"TS": 1728725454},
///     "DATA": {
///         "STATUS": 0, "F2L": 0, "PWR": 1, "SETP": 19,
///         "T1": 24.8, "T2": 0, "T3": 133, "T4": 0, "T5": 49,
///         "VER": "48", "FWDATE": "2023-07-26"
///     }
/// }"#;
/// let info = DeviceInfo::from_body(body).unwrap();
/// assert_eq!(info.status(), StoveState::Off);
/// assert_eq!(info.fan_setpoint(), FanSpeed::Off);
/// assert_eq!(info.temperature_setpoint().value(), 19);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mac: Option<String>,
    #[serde(rename = "globalStatus")]
    status: StoveState,
    fan_setpoint: FanSpeed,
    power_setpoint: PowerSetpoint,
    temperature_setpoint: TemperatureSetpoint,
    temperatures: [f64; 5],
    firmware_version: u32,
    firmware_date: NaiveDate,
}

impl DeviceInfo {
    /// Decodes a snapshot from a raw `GET ALLS` response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the envelope reports a failure or the body
    /// cannot be decoded.
    pub fn from_body(body: &str) -> Result<Self, ProtocolError> {
        AllsResponse::from_body(body).map(Self::from)
    }

    /// Returns the device time at which the snapshot was taken.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the controller MAC address, if reported.
    #[must_use]
    pub fn mac(&self) -> Option<&str> {
        self.mac.as_deref()
    }

    /// Returns the stove operating state.
    #[must_use]
    pub fn status(&self) -> StoveState {
        self.status
    }

    /// Returns the room fan setpoint.
    #[must_use]
    pub fn fan_setpoint(&self) -> FanSpeed {
        self.fan_setpoint
    }

    /// Returns the power level setpoint.
    #[must_use]
    pub fn power_setpoint(&self) -> PowerSetpoint {
        self.power_setpoint
    }

    /// Returns the temperature setpoint.
    #[must_use]
    pub fn temperature_setpoint(&self) -> TemperatureSetpoint {
        self.temperature_setpoint
    }

    /// Returns the five raw temperature readings, sensor 1 first.
    #[must_use]
    pub fn temperatures(&self) -> [f64; 5] {
        self.temperatures
    }

    /// Returns one temperature reading by sensor number (1-5).
    #[must_use]
    pub fn temperature(&self, sensor: usize) -> Option<f64> {
        sensor
            .checked_sub(1)
            .and_then(|i| self.temperatures.get(i))
            .copied()
    }

    /// Returns the firmware version.
    #[must_use]
    pub fn firmware_version(&self) -> u32 {
        self.firmware_version
    }

    /// Returns the firmware release date.
    #[must_use]
    pub fn firmware_date(&self) -> NaiveDate {
        self.firmware_date
    }
}

impl From<AllsResponse> for DeviceInfo {
    fn from(response: AllsResponse) -> Self {
        let data = response.data;
        Self {
            timestamp: response.info.ts,
            mac: data.mac,
            status: data.status,
            fan_setpoint: data.fan_setpoint,
            power_setpoint: data.power_setpoint,
            temperature_setpoint: data.temperature_setpoint,
            temperatures: [data.t1, data.t2, data.t3, data.t4, data.t5],
            firmware_version: data.firmware_version,
            firmware_date: data.firmware_date,
        }
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
