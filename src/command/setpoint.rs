// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Setpoint commands.
//!
//! All setpoint changes share the `SET <register> <value>` form. Values are
//! carried by validated types, so building a command cannot produce an
//! out-of-range request.

use crate::command::Command;
use crate::types::{FanSpeed, PowerSetpoint, TemperatureSetpoint};

/// Command to change one of the stove setpoints.
///
/// # Examples
///
/// ```
/// use connbox::command::{Command, SetpointCommand};
/// use connbox::types::{FanSpeed, PowerSetpoint};
///
/// let power = SetpointCommand::Power(PowerSetpoint::new(3).unwrap());
/// assert_eq!(power.to_http_command(), "SET POWR 3");
///
/// let fan = SetpointCommand::Fan(FanSpeed::High);
/// assert_eq!(fan.to_http_command(), "SET RFAN 6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetpointCommand {
    /// Target room temperature (`SETP` register).
    Temperature(TemperatureSetpoint),
    /// Heating power level (`POWR` register).
    Power(PowerSetpoint),
    /// Room fan speed (`RFAN` register).
    Fan(FanSpeed),
}

impl SetpointCommand {
    /// Returns the device register this command writes.
    #[must_use]
    pub const fn register(&self) -> &'static str {
        match self {
            Self::Temperature(_) => "SETP",
            Self::Power(_) => "POWR",
            Self::Fan(_) => "RFAN",
        }
    }

    /// Returns the raw value written to the register.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Temperature(t) => t.value(),
            Self::Power(p) => p.value(),
            Self::Fan(f) => f.code(),
        }
    }
}

impl Command for SetpointCommand {
    fn name(&self) -> String {
        format!("SET {}", self.register())
    }

    fn payload(&self) -> Option<String> {
        Some(self.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_command() {
        let cmd = SetpointCommand::Temperature(TemperatureSetpoint::new(16).unwrap());
        assert_eq!(cmd.register(), "SETP");
        assert_eq!(cmd.to_http_command(), "SET SETP 16");
    }

    #[test]
    fn fan_command_uses_code() {
        for fan in FanSpeed::ALL {
            let cmd = SetpointCommand::Fan(fan);
            assert_eq!(cmd.to_http_command(), format!("SET RFAN {}", fan.code()));
        }
    }
}
