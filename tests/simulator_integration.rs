// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests of the device client against the cBox simulator.

mod simulator;

use chrono::{FixedOffset, NaiveDate, TimeZone};
use connbox::types::{FanSpeed, StoveState};
use connbox::{Cbox, Command, CommunicationError, Error, ProtocolError, ValueError};
use wiremock::MockServer;

use simulator::{CboxSimulator, FIXTURE_TS, SimulatedState};

async fn connect() -> (MockServer, CboxSimulator, Cbox) {
    let (server, simulator) = CboxSimulator::start().await;
    let cbox = Cbox::connect(server.uri().replace("http://", "")).unwrap();
    (server, simulator, cbox)
}

// ============================================================================
// Status
// ============================================================================

#[tokio::test]
async fn fetch_info_returns_fixture() {
    let (_server, _simulator, cbox) = connect().await;

    let info = cbox.fetch_info().await.unwrap();

    let paris_summer = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(
        info.timestamp(),
        paris_summer
            .with_ymd_and_hms(2024, 10, 12, 11, 30, 54)
            .unwrap()
    );
    assert_eq!(info.timestamp().timestamp(), FIXTURE_TS);
    assert_eq!(info.mac(), Some("FF:FF:FF:FF:FF:FF"));
    assert_eq!(info.status(), StoveState::Off);
    assert_eq!(info.fan_setpoint(), FanSpeed::Off);
    assert_eq!(info.power_setpoint().value(), 1);
    assert_eq!(info.temperature_setpoint().value(), 19);
    assert_eq!(info.temperatures(), [24.8, 0.0, 133.0, 0.0, 49.0]);
    assert_eq!(info.firmware_version(), 48);
    assert_eq!(
        info.firmware_date(),
        NaiveDate::from_ymd_opt(2023, 7, 26).unwrap()
    );
}

// ============================================================================
// Power
// ============================================================================

#[tokio::test]
async fn power_state_switches_between_off_and_burning() {
    let (_server, _simulator, cbox) = connect().await;
    assert_eq!(cbox.fetch_info().await.unwrap().status(), StoveState::Off);

    cbox.set_power_state(true).await.unwrap();
    assert_eq!(
        cbox.fetch_info().await.unwrap().status(),
        StoveState::Burning
    );

    cbox.set_power_state(false).await.unwrap();
    assert_eq!(cbox.fetch_info().await.unwrap().status(), StoveState::Off);
}

// ============================================================================
// Setpoints
// ============================================================================

#[tokio::test]
async fn every_valid_temperature_round_trips() {
    let (_server, _simulator, cbox) = connect().await;

    for t in 12..=50 {
        cbox.set_temperature_setpoint(t).await.unwrap();
        let info = cbox.fetch_info().await.unwrap();
        assert_eq!(info.temperature_setpoint().value(), t);
    }
}

#[tokio::test]
async fn every_valid_power_round_trips() {
    let (_server, _simulator, cbox) = connect().await;

    for p in [5, 1, 2, 3, 4] {
        cbox.set_power_setpoint(p).await.unwrap();
        let info = cbox.fetch_info().await.unwrap();
        assert_eq!(info.power_setpoint().value(), p);
    }
}

#[tokio::test]
async fn every_fan_speed_round_trips() {
    let (_server, _simulator, cbox) = connect().await;

    for fan in [FanSpeed::High, FanSpeed::Speed3]
        .into_iter()
        .chain(FanSpeed::ALL)
    {
        cbox.set_fan_setpoint(fan).await.unwrap();
        assert_eq!(cbox.fetch_info().await.unwrap().fan_setpoint(), fan);
    }
}

#[tokio::test]
async fn out_of_range_temperature_never_reaches_device() {
    let (_server, simulator, cbox) = connect().await;

    for t in [11, 51] {
        let err = cbox.set_temperature_setpoint(t).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValueError::OutOfRange {
                min: 12,
                max: 50,
                ..
            })
        ));
    }

    assert_eq!(simulator.requests(), 0);
    assert_eq!(simulator.state(), SimulatedState::default());
}

#[tokio::test]
async fn out_of_range_power_never_reaches_device() {
    let (_server, simulator, cbox) = connect().await;

    for p in [0, 6] {
        let err = cbox.set_power_setpoint(p).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValueError::OutOfRange { min: 1, max: 5, .. })
        ));
    }

    assert_eq!(simulator.requests(), 0);
    assert_eq!(simulator.state(), SimulatedState::default());
}

// ============================================================================
// Device-side rejection
// ============================================================================

/// Command string sent verbatim, bypassing local validation.
struct Raw(&'static str);

impl Command for Raw {
    fn name(&self) -> String {
        self.0.to_string()
    }

    fn payload(&self) -> Option<String> {
        None
    }
}

#[tokio::test]
async fn device_rejects_out_of_range_power_and_fan() {
    let (_server, simulator, cbox) = connect().await;

    for command in ["SET POWR 9", "SET RFAN 8"] {
        let err = cbox.send_command(&Raw(command)).await.unwrap_err();
        match err {
            Error::Protocol(e @ ProtocolError::Rejected { .. }) => {
                assert!(e.body().contains("\"RSP\":\"ERROR\""));
            }
            other => panic!("unexpected error for {command}: {other:?}"),
        }
    }

    assert_eq!(simulator.state(), SimulatedState::default());
}

#[tokio::test]
async fn device_clamps_temperature() {
    let (_server, simulator, cbox) = connect().await;

    cbox.send_command(&Raw("SET SETP 80")).await.unwrap();
    assert_eq!(simulator.state().temperature, 50);

    cbox.send_command(&Raw("SET SETP 3")).await.unwrap();
    assert_eq!(simulator.state().temperature, 12);
}

#[tokio::test]
async fn unknown_command_is_a_communication_error() {
    let (_server, _simulator, cbox) = connect().await;

    let err = cbox.send_command(&Raw("SET XXXX 1")).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Communication(CommunicationError::UnexpectedStatus { status: 400, .. })
    ));
}

// ============================================================================
// Session
// ============================================================================

#[tokio::test]
async fn session_survives_failed_operation_and_closes() {
    let (_server, simulator, cbox) = connect().await;

    assert!(cbox.set_power_setpoint(9).await.is_err());
    cbox.set_power_setpoint(3).await.unwrap();
    assert_eq!(simulator.state().power, 3);

    cbox.close();
    assert_eq!(simulator.requests(), 1);
}
