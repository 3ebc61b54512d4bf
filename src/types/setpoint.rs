// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated setpoint types.
//!
//! The cBox accepts temperature setpoints between 12 and 50 °C and power
//! levels between 1 and 5. Both types check their range at construction, so
//! an out-of-range value never reaches the network.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Target room temperature in degrees Celsius (12-50).
///
/// # Examples
///
/// ```
/// use connbox::types::TemperatureSetpoint;
///
/// let setp = TemperatureSetpoint::new(19).unwrap();
/// assert_eq!(setp.value(), 19);
///
/// assert!(TemperatureSetpoint::new(11).is_err());
/// assert!(TemperatureSetpoint::new(51).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct TemperatureSetpoint(u8);

impl TemperatureSetpoint {
    /// Minimum accepted temperature.
    pub const MIN: u8 = 12;

    /// Maximum accepted temperature.
    pub const MAX: u8 = 50;

    /// Creates a new temperature setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [12, 50].
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the temperature value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for TemperatureSetpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl TryFrom<u8> for TemperatureSetpoint {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TemperatureSetpoint> for u8 {
    fn from(setpoint: TemperatureSetpoint) -> Self {
        setpoint.0
    }
}

/// Heating power level (1-5).
///
/// # Examples
///
/// ```
/// use connbox::types::PowerSetpoint;
///
/// assert_eq!(PowerSetpoint::MAX_POWER.value(), 5);
/// assert!(PowerSetpoint::new(0).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct PowerSetpoint(u8);

impl PowerSetpoint {
    /// Minimum power level.
    pub const MIN: u8 = 1;

    /// Maximum power level.
    pub const MAX: u8 = 5;

    /// Lowest power level.
    pub const MIN_POWER: Self = Self(Self::MIN);

    /// Highest power level.
    pub const MAX_POWER: Self = Self(Self::MAX);

    /// Creates a new power setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [1, 5].
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the power level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PowerSetpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for PowerSetpoint {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PowerSetpoint> for u8 {
    fn from(setpoint: PowerSetpoint) -> Self {
        setpoint.0
    }
}
