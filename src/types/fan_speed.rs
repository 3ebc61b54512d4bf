// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room fan speed.
//!
//! # Device Methods
//!
//! Use [`FanSpeed`] with [`set_fan_setpoint()`](crate::Cbox::set_fan_setpoint)
//! and read it back from [`DeviceInfo::fan_setpoint()`](crate::DeviceInfo::fan_setpoint).

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValueError;

/// Room fan speed setpoint (codes 0-7).
///
/// # Examples
///
/// ```
/// use connbox::types::FanSpeed;
///
/// assert_eq!(FanSpeed::Speed3.code(), 3);
/// assert_eq!(FanSpeed::try_from(7).unwrap(), FanSpeed::Auto);
/// assert!(FanSpeed::try_from(8).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize,
)]
#[serde(try_from = "u8")]
pub enum FanSpeed {
    /// Fan stopped.
    #[default]
    Off,
    /// Speed 1 (slowest).
    Speed1,
    /// Speed 2.
    Speed2,
    /// Speed 3.
    Speed3,
    /// Speed 4.
    Speed4,
    /// Speed 5.
    Speed5,
    /// Maximum speed.
    High,
    /// Speed driven by the controller.
    Auto,
}

impl FanSpeed {
    /// Every fan speed, in code order.
    pub const ALL: [Self; 8] = [
        Self::Off,
        Self::Speed1,
        Self::Speed2,
        Self::Speed3,
        Self::Speed4,
        Self::Speed5,
        Self::High,
        Self::Auto,
    ];

    /// Returns the firmware code of this speed.
    #[must_use]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Returns the firmware name of this speed.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Speed1 => "SPEED_1",
            Self::Speed2 => "SPEED_2",
            Self::Speed3 => "SPEED_3",
            Self::Speed4 => "SPEED_4",
            Self::Speed5 => "SPEED_5",
            Self::High => "HIGH",
            Self::Auto => "AUTO",
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for FanSpeed {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(ValueError::UnknownFanSpeed(code))
    }
}

impl Serialize for FanSpeed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_declaration_order() {
        for (code, speed) in (0u8..).zip(FanSpeed::ALL) {
            assert_eq!(speed.code(), code);
            assert_eq!(FanSpeed::try_from(code).unwrap(), speed);
        }
    }

    #[test]
    fn unknown_code_rejected() {
        assert_eq!(FanSpeed::try_from(8), Err(ValueError::UnknownFanSpeed(8)));
        assert!(serde_json::from_str::<FanSpeed>("42").is_err());
    }

    #[test]
    fn ordering() {
        assert!(FanSpeed::Off < FanSpeed::Speed1);
        assert!(FanSpeed::Speed5 < FanSpeed::High);
    }

    #[test]
    fn display() {
        assert_eq!(FanSpeed::Speed2.to_string(), "SPEED_2");
        assert_eq!(FanSpeed::Auto.to_string(), "AUTO");
    }
}
