// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `connbox` - A Rust library to control pellet stoves through a cBox.
//!
//! The cBox controller exposes a single HTTP endpoint,
//! `/cgi-bin/sendmsg.lua`, taking a command string in its `cmd` query
//! parameter and answering with a JSON envelope. This library wraps it in
//! an async, typed API.
//!
//! # Supported Features
//!
//! - **Status**: stove state, setpoints, temperature sensors, firmware info
//! - **Power control**: switch the stove on and off
//! - **Setpoints**: target temperature (12-50 °C), power level (1-5), fan speed
//!
//! # Quick Start
//!
//! ```no_run
//! use connbox::Cbox;
//! use connbox::types::FanSpeed;
//!
//! #[tokio::main]
//! async fn main() -> connbox::Result<()> {
//!     let cbox = Cbox::connect("192.168.0.14")?;
//!
//!     let info = cbox.fetch_info().await?;
//!     println!("{info}");
//!
//!     cbox.set_power_state(true).await?;
//!     cbox.set_temperature_setpoint(21).await?;
//!     cbox.set_power_setpoint(3).await?;
//!     cbox.set_fan_setpoint(FanSpeed::Auto).await?;
//!
//!     cbox.close();
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Out-of-range setpoints fail with [`Error::Validation`] before any request
//! is sent. Transport failures and non-200 answers surface as
//! [`Error::Communication`]. A response whose `SUCCESS` flag is not true, or
//! which cannot be decoded, surfaces as [`Error::Protocol`] and keeps the raw
//! body for diagnosis. Nothing is retried.
//!
//! # Logging
//!
//! Requests and responses are traced at `debug` level through the
//! [`tracing`] crate; rejected setpoints and commands are traced at `warn`.

pub mod command;
mod device;
pub mod error;
mod info;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{Command, PowerCommand, SetpointCommand, StatusCommand};
pub use device::Cbox;
pub use error::{CommunicationError, Error, ProtocolError, Result, ValueError};
pub use info::DeviceInfo;
pub use protocol::{HttpClient, HttpConfig, Protocol};
pub use response::{AllsResponse, Envelope};
pub use types::{FanSpeed, PowerSetpoint, PowerState, StoveState, TemperatureSetpoint};
