// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! cBox command definitions.
//!
//! Every request to the cBox is a single command string passed in the `cmd`
//! query parameter of `/cgi-bin/sendmsg.lua`.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Wire form |
//! |-------------|---------|-----------|
//! | [`StatusCommand`] | Fetch every reading at once | `GET ALLS` |
//! | [`PowerCommand`] | Switch the stove on or off | `CMD on` |
//! | [`SetpointCommand`] | Change temperature, power or fan | `SET SETP 19` |
//!
//! # Examples
//!
//! ```
//! use connbox::command::{Command, PowerCommand, SetpointCommand};
//! use connbox::types::{PowerState, TemperatureSetpoint};
//!
//! let cmd = PowerCommand::new(PowerState::On);
//! assert_eq!(cmd.to_http_command(), "CMD on");
//!
//! let setp = SetpointCommand::Temperature(TemperatureSetpoint::new(19).unwrap());
//! assert_eq!(setp.name(), "SET SETP");
//! assert_eq!(setp.payload(), Some("19".to_string()));
//! ```

mod power;
mod setpoint;
mod status;

pub use power::PowerCommand;
pub use setpoint::SetpointCommand;
pub use status::StatusCommand;

/// A command that can be sent to a cBox device.
pub trait Command {
    /// Returns the command keyword, e.g. `"GET"`, `"CMD"`, `"SET POWR"`.
    fn name(&self) -> String;

    /// Returns the command argument, if any.
    fn payload(&self) -> Option<String>;

    /// Returns the full command string for the `cmd` query parameter.
    ///
    /// Format: `<name> <payload>` or just `<name>` if no payload.
    fn to_http_command(&self) -> String {
        match self.payload() {
            Some(p) => format!("{} {}", self.name(), p),
            None => self.name(),
        }
    }
}
