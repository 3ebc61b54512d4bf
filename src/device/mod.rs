// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for a cBox-controlled stove.
//!
//! [`Cbox`] turns intents (switch on, change a setpoint, read the state)
//! into cBox commands and validates every answer. Each operation performs
//! exactly one request, or none when a setpoint is rejected locally.
//!
//! # Session lifetime
//!
//! A `Cbox` owns its HTTP session. The session is released when the client
//! is dropped, on every exit path including early returns through `?`.
//! [`Cbox::close`] makes the release explicit.
//!
//! ```no_run
//! use connbox::Cbox;
//! use connbox::types::FanSpeed;
//!
//! # async fn example() -> connbox::Result<()> {
//! let cbox = Cbox::connect("192.168.0.14")?;
//!
//! cbox.set_power_state(true).await?;
//! cbox.set_fan_setpoint(FanSpeed::Auto).await?;
//! println!("{}", cbox.fetch_info().await?);
//!
//! cbox.close();
//! # Ok(())
//! # }
//! ```

use crate::command::{Command, PowerCommand, SetpointCommand, StatusCommand};
use crate::error::{Error, Result, ValueError};
use crate::info::DeviceInfo;
use crate::protocol::{HttpClient, HttpConfig, Protocol};
use crate::response::Envelope;
use crate::types::{FanSpeed, PowerSetpoint, PowerState, TemperatureSetpoint};

/// A pellet stove reached through its cBox controller.
///
/// The type parameter `P` is the transport; it defaults to [`HttpClient`].
///
/// # Examples
///
/// ```no_run
/// use connbox::Cbox;
///
/// # async fn example() -> connbox::Result<()> {
/// let cbox = Cbox::connect("connbox")?;
/// let info = cbox.fetch_info().await?;
/// println!("stove is {}", info.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cbox<P: Protocol = HttpClient> {
    protocol: P,
}

impl Cbox<HttpClient> {
    /// Creates a client bound to `http://<host>/cgi-bin/sendmsg.lua`.
    ///
    /// No request is made; connections are opened lazily per command.
    ///
    /// # Errors
    ///
    /// Returns `Error::Communication` if the HTTP session cannot be created.
    pub fn connect(host: impl Into<String>) -> Result<Self> {
        Self::with_config(HttpConfig::new(host))
    }

    /// Creates a client from a full HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Communication` if the HTTP session cannot be created.
    pub fn with_config(config: HttpConfig) -> Result<Self> {
        let client = config.into_client()?;
        tracing::debug!(base_url = %client.base_url(), "Opened cBox session");
        Ok(Self::new(client))
    }
}

impl<P: Protocol> Cbox<P> {
    /// Creates a client over an existing transport.
    #[must_use]
    pub fn new(protocol: P) -> Self {
        Self { protocol }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Sends a command and checks the response envelope.
    ///
    /// # Errors
    ///
    /// Returns `Error::Communication` on transport failure or non-200
    /// status, `Error::Protocol` if `SUCCESS` is not true.
    pub async fn send_command<C: Command + Sync>(&self, command: &C) -> Result<Envelope> {
        let response = self.protocol.send_command(command).await?;
        Ok(Envelope::check(response.body())?)
    }

    // ========== Status ==========

    /// Fetches every reading and setpoint in one call.
    ///
    /// # Errors
    ///
    /// Returns `Error::Communication` on transport failure or non-200
    /// status, `Error::Protocol` if the device reports a failure or the
    /// payload cannot be decoded.
    pub async fn fetch_info(&self) -> Result<DeviceInfo> {
        tracing::debug!("Fetch infos");
        let response = self.protocol.send_command(&StatusCommand::All).await?;
        Ok(DeviceInfo::from_body(response.body())?)
    }

    // ========== Power ==========

    /// Turns the stove on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails or is rejected.
    pub async fn set_power_state(&self, on: bool) -> Result<()> {
        let state = PowerState::from(on);
        tracing::debug!(state = %state, "Change power state");
        self.send_command(&PowerCommand::new(state)).await?;
        Ok(())
    }

    /// Turns the stove on.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails or is rejected.
    pub async fn power_on(&self) -> Result<()> {
        self.set_power_state(true).await
    }

    /// Turns the stove off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails or is rejected.
    pub async fn power_off(&self) -> Result<()> {
        self.set_power_state(false).await
    }

    // ========== Setpoints ==========

    /// Changes the temperature setpoint.
    ///
    /// The value is checked against [12, 50] before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for an out-of-range value (no request is
    /// made), otherwise any error from the request.
    pub async fn set_temperature_setpoint(&self, value: u8) -> Result<()> {
        tracing::debug!(value, "Change temperature setpoint");
        let setpoint = TemperatureSetpoint::new(value).map_err(reject)?;
        self.send_command(&SetpointCommand::Temperature(setpoint))
            .await?;
        Ok(())
    }

    /// Changes the power level setpoint.
    ///
    /// The value is checked against [1, 5] before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for an out-of-range value (no request is
    /// made), otherwise any error from the request.
    pub async fn set_power_setpoint(&self, value: u8) -> Result<()> {
        tracing::debug!(value, "Change power setpoint");
        let setpoint = PowerSetpoint::new(value).map_err(reject)?;
        self.send_command(&SetpointCommand::Power(setpoint)).await?;
        Ok(())
    }

    /// Changes the room fan setpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails or is rejected.
    pub async fn set_fan_setpoint(&self, fan: FanSpeed) -> Result<()> {
        tracing::debug!(fan = %fan, "Change fan setpoint");
        self.send_command(&SetpointCommand::Fan(fan)).await?;
        Ok(())
    }

    // ========== Lifecycle ==========

    /// Closes the session, releasing pooled connections.
    pub fn close(self) {
        tracing::debug!("Closing cBox session");
        drop(self);
    }
}

fn reject(err: ValueError) -> Error {
    tracing::warn!(error = %err, "Invalid setpoint");
    Error::Validation(err)
}
