// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for the cBox.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::CommunicationError;
use crate::protocol::{CommandResponse, Protocol};

/// Path of the cBox command endpoint.
const COMMAND_PATH: &str = "/cgi-bin/sendmsg.lua";

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for an HTTP connection to a cBox.
///
/// Each command is an independent request; the underlying session only
/// pools connections.
///
/// No request timeout is applied unless one is set explicitly.
///
/// # Examples
///
/// ```
/// use connbox::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.0.14");
/// assert_eq!(config.base_url(), "http://192.168.0.14");
///
/// // With all options
/// let config = HttpConfig::new("connbox")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://connbox:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Option<Duration>,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// The host may be a bare hostname or IP address, or a full base URL
    /// such as `http://127.0.0.1:8080`, in which case the port setting is
    /// ignored.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: None,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            return self.host.trim_end_matches('/').to_string();
        }
        if self.port == Self::DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, CommunicationError> {
        if self.host.trim().is_empty() {
            return Err(CommunicationError::InvalidAddress(
                "host is required".to_string(),
            ));
        }

        let base_url = self.base_url();

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(CommunicationError::Http)?;

        Ok(HttpClient { base_url, client })
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for communicating with a cBox.
///
/// Uses the cBox endpoint `/cgi-bin/sendmsg.lua?cmd=<command>`. The client
/// owns its connection pool, which is released when the client is dropped.
///
/// # Examples
///
/// ```no_run
/// use connbox::protocol::{HttpClient, Protocol};
/// use connbox::command::StatusCommand;
///
/// # async fn example() -> connbox::Result<()> {
/// let client = HttpClient::new("192.168.0.14")?;
/// let response = client.send_command(&StatusCommand::All).await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, CommunicationError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{COMMAND_PATH}", self.base_url)
    }

    /// Builds the URL for a command.
    fn build_url(&self, command: &str) -> String {
        format!("{}?cmd={}", self.endpoint(), urlencoding::encode(command))
    }
}

impl Protocol for HttpClient {
    async fn send_raw(&self, command: &str) -> Result<CommandResponse, CommunicationError> {
        let url = self.build_url(command);

        tracing::debug!(url = %url, command = %command, "Sending HTTP command");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(CommunicationError::Http)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CommunicationError::UnexpectedStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(CommunicationError::Http)?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(CommandResponse::new(body))
    }
}
