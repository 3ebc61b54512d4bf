// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for cBox device control.
//!
//! This module provides type-safe representations of values used in cBox
//! commands and responses. Each type ensures values are within their valid
//! ranges at construction time.
//!
//! # Types
//!
//! - [`StoveState`] - Operating and alarm states reported by the firmware
//! - [`FanSpeed`] - Room fan speed (off, 1-5, high, auto)
//! - [`TemperatureSetpoint`] - Target temperature (12-50 °C)
//! - [`PowerSetpoint`] - Heating power level (1-5)
//! - [`PowerState`] - On/Off switch

mod fan_speed;
mod power;
mod setpoint;
mod stove_state;

pub use fan_speed::FanSpeed;
pub use power::PowerState;
pub use setpoint::{PowerSetpoint, TemperatureSetpoint};
pub use stove_state::StoveState;
