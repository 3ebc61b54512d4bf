// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for sending commands to a cBox.
//!
//! The cBox speaks a single HTTP endpoint, `GET /cgi-bin/sendmsg.lua`, with
//! the command string in the `cmd` query parameter. [`HttpClient`] implements
//! it; the [`Protocol`] trait lets the device client run over any other
//! transport that returns the raw response body.

mod http;

pub use http::{HttpClient, HttpConfig};

use crate::command::Command;
use crate::error::CommunicationError;

/// Response from a cBox command.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    /// The raw JSON response body.
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response and returns the body.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}

/// Trait for protocol implementations that can send commands to a cBox.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a command to the device and returns the response.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command fails to send or the
    /// device answers with a non-200 status.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, CommunicationError> {
        self.send_raw(&command.to_http_command()).await
    }

    /// Sends a raw command string to the device.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command fails.
    async fn send_raw(&self, command: &str) -> Result<CommandResponse, CommunicationError>;
}
