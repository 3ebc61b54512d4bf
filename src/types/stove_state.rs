// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stove operating state.
//!
//! The cBox firmware reports the stove state as a numeric code in the
//! `STATUS` field of the `GET ALLS` response. Codes from 240 upward are
//! alarms.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValueError;

/// Operating or alarm state of the stove.
///
/// | Code | State |
/// |------|-------|
/// | 0 | Off |
/// | 1 | Off (timer) |
/// | 2 | Test fire |
/// | 3 | Heat up |
/// | 4 | Fuel ignition |
/// | 5 | Ignition test |
/// | 6 | Burning |
/// | 9 | Cool fluid |
/// | 10 | Fire stop |
/// | 11 | Clean fire |
/// | 12 | Cool |
/// | 241-253 | Alarms |
///
/// # Examples
///
/// ```
/// use connbox::types::StoveState;
///
/// let state = StoveState::try_from(6).unwrap();
/// assert_eq!(state, StoveState::Burning);
/// assert_eq!(state.code(), 6);
///
/// // Unknown codes are rejected
/// assert!(StoveState::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum StoveState {
    /// Stove is off.
    #[default]
    Off,
    /// Stove is off, waiting for a timer.
    OffTimer,
    /// Fire test.
    TestFire,
    /// Heating up.
    HeatUp,
    /// Fuel ignition.
    FuelIgnition,
    /// Ignition test.
    IgnitionTest,
    /// Burning normally.
    Burning,
    /// Cooling the fluid.
    CoolFluid,
    /// Fire stopping.
    FireStop,
    /// Cleaning the fire pot.
    CleanFire,
    /// Cooling down.
    Cool,
    /// Chimney alarm.
    ChimneyAlarm,
    /// Grate error.
    GrateError,
    /// NTC2 sensor alarm.
    Ntc2Alarm,
    /// NTC3 sensor alarm.
    Ntc3Alarm,
    /// Door open alarm.
    DoorAlarm,
    /// Pressure alarm.
    PressAlarm,
    /// NTC1 sensor alarm.
    Ntc1Alarm,
    /// TC1 thermocouple alarm.
    Tc1Alarm,
    /// Exhaust gas alarm.
    GasAlarm,
    /// Pellet tank empty.
    NoPelletAlarm,
}

impl StoveState {
    /// Every known state, in code order.
    pub const ALL: [Self; 21] = [
        Self::Off,
        Self::OffTimer,
        Self::TestFire,
        Self::HeatUp,
        Self::FuelIgnition,
        Self::IgnitionTest,
        Self::Burning,
        Self::CoolFluid,
        Self::FireStop,
        Self::CleanFire,
        Self::Cool,
        Self::ChimneyAlarm,
        Self::GrateError,
        Self::Ntc2Alarm,
        Self::Ntc3Alarm,
        Self::DoorAlarm,
        Self::PressAlarm,
        Self::Ntc1Alarm,
        Self::Tc1Alarm,
        Self::GasAlarm,
        Self::NoPelletAlarm,
    ];

    /// Returns the firmware code of this state.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::OffTimer => 1,
            Self::TestFire => 2,
            Self::HeatUp => 3,
            Self::FuelIgnition => 4,
            Self::IgnitionTest => 5,
            Self::Burning => 6,
            Self::CoolFluid => 9,
            Self::FireStop => 10,
            Self::CleanFire => 11,
            Self::Cool => 12,
            Self::ChimneyAlarm => 241,
            Self::GrateError => 243,
            Self::Ntc2Alarm => 244,
            Self::Ntc3Alarm => 245,
            Self::DoorAlarm => 247,
            Self::PressAlarm => 248,
            Self::Ntc1Alarm => 249,
            Self::Tc1Alarm => 250,
            Self::GasAlarm => 252,
            Self::NoPelletAlarm => 253,
        }
    }

    /// Returns the firmware name of this state.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::OffTimer => "OFF_TIMER",
            Self::TestFire => "TESTFIRE",
            Self::HeatUp => "HEATUP",
            Self::FuelIgnition => "FUELIGN",
            Self::IgnitionTest => "IGNTEST",
            Self::Burning => "BURNING",
            Self::CoolFluid => "COOLFLUID",
            Self::FireStop => "FIRESTOP",
            Self::CleanFire => "CLEANFIRE",
            Self::Cool => "COOL",
            Self::ChimneyAlarm => "CHIMNEY_ALARM",
            Self::GrateError => "GRATE_ERROR",
            Self::Ntc2Alarm => "NTC2_ALARM",
            Self::Ntc3Alarm => "NTC3_ALARM",
            Self::DoorAlarm => "DOOR_ALARM",
            Self::PressAlarm => "PRESS_ALARM",
            Self::Ntc1Alarm => "NTC1_ALARM",
            Self::Tc1Alarm => "TC1_ALARM",
            Self::GasAlarm => "GAS_ALARM",
            Self::NoPelletAlarm => "NOPELLET_ALARM",
        }
    }

    /// Returns whether this state is an alarm.
    #[must_use]
    pub const fn is_alarm(&self) -> bool {
        self.code() >= 240
    }
}

impl fmt::Display for StoveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for StoveState {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or(ValueError::UnknownStoveState(code))
    }
}

impl Serialize for StoveState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
