// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-process cBox simulator built on wiremock.
//!
//! Serves `GET /cgi-bin/sendmsg.lua`, keeps one mutable stove state and
//! interprets the `cmd` query parameter the way the real controller does.

use std::sync::Arc;

use connbox::types::{FanSpeed, StoveState};
use parking_lot::Mutex;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Device time reported by the `GET ALLS` fixture.
pub const FIXTURE_TS: i64 = 1_728_725_454;

/// Device time reported by error envelopes.
const ERROR_TS: i64 = 1_729_331_226;

/// Mutable part of the simulated device.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedState {
    pub status: StoveState,
    pub fan: FanSpeed,
    pub power: u8,
    pub temperature: u8,
}

impl Default for SimulatedState {
    fn default() -> Self {
        Self {
            status: StoveState::Off,
            fan: FanSpeed::Off,
            power: 1,
            temperature: 19,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: SimulatedState,
    requests: usize,
}

/// Stateful responder mimicking a cBox.
#[derive(Debug, Clone, Default)]
pub struct CboxSimulator {
    inner: Arc<Mutex<Inner>>,
}

impl CboxSimulator {
    /// Starts a mock server with the simulator mounted on the cBox endpoint.
    pub async fn start() -> (MockServer, Self) {
        let server = MockServer::start().await;
        let simulator = Self::default();

        Mock::given(method("GET"))
            .and(path("/cgi-bin/sendmsg.lua"))
            .respond_with(simulator.clone())
            .mount(&server)
            .await;

        (server, simulator)
    }

    /// Returns a copy of the current device state.
    pub fn state(&self) -> SimulatedState {
        self.inner.lock().state.clone()
    }

    /// Returns how many requests reached the endpoint.
    pub fn requests(&self) -> usize {
        self.inner.lock().requests
    }

    fn handle(&self, command: &str) -> ResponseTemplate {
        if command == "GET ALLS" {
            return self.get_alls_response();
        }
        if let Some(switch) = command.strip_prefix("CMD ") {
            return match switch {
                "on" => self.simulate_power(true),
                "off" => self.simulate_power(false),
                _ => ResponseTemplate::new(400),
            };
        }
        if let Some(value) = argument(command, "SET SETP ") {
            return self.simulate_temperature_setpoint(value);
        }
        if let Some(value) = argument(command, "SET POWR ") {
            return self.simulate_power_setpoint(value);
        }
        if let Some(value) = argument(command, "SET RFAN ") {
            return self.simulate_fan_setpoint(value);
        }
        ResponseTemplate::new(400)
    }

    fn get_alls_response(&self) -> ResponseTemplate {
        let state = self.state();
        ResponseTemplate::new(200).set_body_json(json!({
            "INFO": {
                "RSP": "OK",
                "CMD": "GET ALLS",
                "TS": FIXTURE_TS
            },
            "SUCCESS": true,
            "DATA": {
                "T2": 0,
                "F2LF": 2,
                "PQT": 42,
                "PWR": state.power,
                "CHRSTATUS": 0,
                "SECO": 1.2,
                "FDR": 2,
                "F2V": 120,
                "MOD": 646,
                "DPT": 0,
                "APLWDAY": 6,
                "MAC": "FF:FF:FF:FF:FF:FF",
                "SETP": state.temperature,
                "APLTS": "2024-10-12 11:31:48",
                "BECO": 0,
                "STATUS": state.status.code(),
                "T3": 133,
                "T1": 24.8,
                "PUMP": 0,
                "T5": 49,
                "F1RPM": 1130,
                "OUT": 6,
                "F1V": 1130,
                "EFLAGS": 0,
                "LSTATUS": 6,
                "T4": 0,
                "F2L": state.fan.code(),
                "CORE": 20,
                "DP": 0,
                "FANLMINMAX": [2, 5, 0, 1, 0, 1],
                "IN": 7,
                "VER": "48",
                "MBTYPE": 0,
                "FWDATE": "2023-07-26"
            }
        }))
    }

    // The simulated stove jumps straight between OFF and BURNING.
    fn simulate_power(&self, on: bool) -> ResponseTemplate {
        self.inner.lock().state.status = if on {
            StoveState::Burning
        } else {
            StoveState::Off
        };
        success()
    }

    fn simulate_temperature_setpoint(&self, value: u8) -> ResponseTemplate {
        self.inner.lock().state.temperature = value.clamp(12, 50);
        success()
    }

    fn simulate_power_setpoint(&self, value: u8) -> ResponseTemplate {
        if !(1..=5).contains(&value) {
            return error("SET POWR");
        }
        self.inner.lock().state.power = value;
        success()
    }

    fn simulate_fan_setpoint(&self, value: u8) -> ResponseTemplate {
        match FanSpeed::try_from(value) {
            Ok(fan) => {
                self.inner.lock().state.fan = fan;
                success()
            }
            Err(_) => error("SET RFAN"),
        }
    }
}

impl Respond for CboxSimulator {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.inner.lock().requests += 1;

        let command = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "cmd")
            .map(|(_, value)| value.into_owned());

        match command {
            Some(command) => self.handle(&command),
            None => ResponseTemplate::new(400),
        }
    }
}

fn argument(command: &str, prefix: &str) -> Option<u8> {
    command.strip_prefix(prefix)?.parse().ok()
}

fn success() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"SUCCESS": true}))
}

fn error(command: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "INFO": {"RSP": "ERROR", "CMD": command, "TS": ERROR_TS},
        "SUCCESS": false,
        "DATA": {"NODATA": true}
    }))
}
