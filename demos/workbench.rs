// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Workbench program: read a stove, change every setpoint, read it again.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example workbench -- <host>
//! ```
//!
//! # Example
//!
//! ```bash
//! RUST_LOG=connbox=debug cargo run --example workbench -- 192.168.0.14
//! ```

use std::env;

use connbox::Cbox;
use connbox::types::FanSpeed;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,connbox=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <host>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example workbench -- 192.168.0.14");
        std::process::exit(1);
    }

    let host = &args[1];
    println!("Connecting to cBox at {host}...");

    let cbox = Cbox::connect(host.as_str())?;

    let info = cbox.fetch_info().await?;
    println!("Before: {info}");

    cbox.set_power_state(false).await?;
    cbox.set_fan_setpoint(FanSpeed::Auto).await?;
    cbox.set_temperature_setpoint(19).await?;
    cbox.set_power_setpoint(4).await?;

    let info = cbox.fetch_info().await?;
    println!("After: {info}");
    println!(
        "Stove is {} at power {}, target {}",
        info.status(),
        info.power_setpoint(),
        info.temperature_setpoint()
    );

    cbox.close();
    println!("Done!");

    Ok(())
}
