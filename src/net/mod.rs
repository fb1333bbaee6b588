//
//  hangar-cli
//  net/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Network Probing
//!
//! Polls an HTTP endpoint on a fixed interval until it answers with an
//! expected status code or a timeout elapses. Used after provisioning a
//! deploy to wait for it to come up.
//!
//! Redirects are not followed: a 3xx answer is a non-match, never an
//! accidental success through the redirect target.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use hangar_cli::net::{ensure_http_status, ProbeOptions};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let opts = ProbeOptions::new("https://staging.acme.io")
//!     .expect_status(200)
//!     .timeout(Duration::from_secs(120))
//!     .interval(Duration::from_secs(10));
//! ensure_http_status(&opts).await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Options for [`ensure_http_status`].
///
/// Defaults mirror what deploy verification wants: expect 200, poll every
/// 20 seconds, give up after 60 seconds.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// URL to probe.
    pub url: String,

    /// Basic-auth username, if the endpoint is guarded.
    pub username: Option<String>,

    /// Basic-auth password.
    pub password: Option<String>,

    /// Total time to keep polling before giving up.
    pub timeout: Duration,

    /// Delay between probe attempts.
    pub interval: Duration,

    /// Status code that counts as a match.
    pub expected_status: u16,

    /// Extra headers sent with every probe.
    pub headers: Vec<(String, String)>,
}

impl ProbeOptions {
    /// Creates options with the default timeout, interval, and status.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
            timeout: Duration::from_secs(60),
            interval: Duration::from_secs(20),
            expected_status: 200,
            headers: Vec::new(),
        }
    }

    /// Sets the status code that counts as a match.
    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Sets the total polling budget.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the delay between attempts.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets basic-auth credentials for guarded endpoints.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Adds a header sent with every probe.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Polls `opts.url` until it answers with the expected status or the
/// timeout elapses.
///
/// Each tick issues one GET; transport errors during a tick are logged and
/// polling continues, since the endpoint may simply not be up yet. The
/// returned future is cancellable: dropping it stops the polling.
///
/// # Errors
///
/// Returns an error naming the URL and the elapsed budget when no matching
/// response arrives in time.
pub async fn ensure_http_status(opts: &ProbeOptions) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(format!("hangar/{}", crate::VERSION))
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .context("failed to create HTTP client")?;

    let poll = async {
        let mut ticker = tokio::time::interval(opts.interval);
        loop {
            ticker.tick().await;
            match probe_once(&client, opts).await {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(err) => {
                    tracing::debug!(url = %opts.url, error = %err, "probe attempt failed");
                }
            }
        }
    };

    match tokio::time::timeout(opts.timeout, poll).await {
        Ok(result) => result,
        Err(_) => bail!(
            "no matching response from {} after {} seconds",
            opts.url,
            opts.timeout.as_secs()
        ),
    }
}

/// Issues a single probe and reports whether the status matched.
async fn probe_once(client: &reqwest::Client, opts: &ProbeOptions) -> Result<bool> {
    let mut request = client.get(&opts.url);
    if let (Some(username), Some(password)) = (&opts.username, &opts.password) {
        request = request.basic_auth(username, Some(password));
    }
    for (name, value) in &opts.headers {
        request = request.header(name, value);
    }

    let response = request.send().await?;
    let got = response.status().as_u16();

    if got == opts.expected_status {
        tracing::info!(url = %opts.url, expected = opts.expected_status, got, "status matched");
        Ok(true)
    } else {
        tracing::info!(url = %opts.url, expected = opts.expected_status, got, "status not matched yet");
        Ok(false)
    }
}

/// Reports whether anything is already listening on a local TCP port.
///
/// Binds `127.0.0.1:<port>` and immediately releases it; a failed bind
/// means the port is taken.
pub fn is_tcp_port_available(port: u16) -> bool {
    std::net::TcpListener::bind(("127.0.0.1", port)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matching_status_resolves_immediately() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/healthz")
            .with_status(200)
            .create_async()
            .await;

        let opts = ProbeOptions::new(format!("{}/healthz", server.url()))
            .interval(Duration::from_millis(10))
            .timeout(Duration::from_secs(5));
        ensure_http_status(&opts).await.unwrap();
    }

    #[tokio::test]
    async fn wrong_status_times_out_with_url_in_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/healthz")
            .with_status(503)
            .expect_at_least(1)
            .create_async()
            .await;

        let opts = ProbeOptions::new(format!("{}/healthz", server.url()))
            .interval(Duration::from_millis(10))
            .timeout(Duration::from_millis(80));
        let err = ensure_http_status(&opts).await.unwrap_err();
        assert!(err.to_string().contains("/healthz"));
    }

    #[tokio::test]
    async fn redirect_is_not_a_match() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/healthz")
            .with_status(302)
            .with_header("Location", "/elsewhere")
            .create_async()
            .await;

        let opts = ProbeOptions::new(format!("{}/healthz", server.url()))
            .interval(Duration::from_millis(10))
            .timeout(Duration::from_millis(80));
        assert!(ensure_http_status(&opts).await.is_err());
    }

    #[tokio::test]
    async fn probe_sends_basic_auth_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/healthz")
            .match_header("Authorization", "Basic ZHJldzpodW50ZXIy")
            .match_header("X-Probe", "hangar")
            .with_status(200)
            .create_async()
            .await;

        let opts = ProbeOptions::new(format!("{}/healthz", server.url()))
            .basic_auth("drew", "hunter2")
            .header("X-Probe", "hangar")
            .interval(Duration::from_millis(10))
            .timeout(Duration::from_secs(5));
        ensure_http_status(&opts).await.unwrap();
        mock.assert_async().await;
    }

    #[test]
    fn bound_port_reports_unavailable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        assert!(!is_tcp_port_available(port));
        drop(listener);
    }
}
