// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power control commands.

use crate::command::Command;
use crate::types::PowerState;

/// Command to switch the stove on or off.
///
/// # Examples
///
/// ```
/// use connbox::command::{Command, PowerCommand};
///
/// let cmd = PowerCommand::on();
/// assert_eq!(cmd.name(), "CMD");
/// assert_eq!(cmd.payload(), Some("on".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerCommand {
    state: PowerState,
}

impl PowerCommand {
    /// Creates a command setting the given power state.
    #[must_use]
    pub const fn new(state: PowerState) -> Self {
        Self { state }
    }

    /// Creates a command to turn the stove on.
    #[must_use]
    pub const fn on() -> Self {
        Self::new(PowerState::On)
    }

    /// Creates a command to turn the stove off.
    #[must_use]
    pub const fn off() -> Self {
        Self::new(PowerState::Off)
    }

    /// Returns the requested power state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.state
    }
}

impl Command for PowerCommand {
    fn name(&self) -> String {
        "CMD".to_string()
    }

    fn payload(&self) -> Option<String> {
        Some(self.state.as_str().to_string())
    }
}
