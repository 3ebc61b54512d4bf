// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status query commands.

use crate::command::Command;

/// Command to query the device state.
///
/// The cBox only exposes one aggregated query, `GET ALLS`, which returns
/// every reading and setpoint in a single response.
///
/// # Examples
///
/// ```
/// use connbox::command::{Command, StatusCommand};
///
/// assert_eq!(StatusCommand::All.name(), "GET");
/// assert_eq!(StatusCommand::All.payload(), Some("ALLS".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusCommand {
    /// Query all readings and setpoints.
    #[default]
    All,
}

impl StatusCommand {
    /// Returns the query keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALLS",
        }
    }
}

impl Command for StatusCommand {
    fn name(&self) -> String {
        "GET".to_string()
    }

    fn payload(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}
