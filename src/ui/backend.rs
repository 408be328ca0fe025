//! Client side of the `/check` and `/generate` contract.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::api::types::CheckRequest;
use crate::models::{GeneratedPassword, StrengthResult};

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// The strength service as seen by the meter.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn check(&self, password: &str) -> Result<StrengthResult>;
    async fn generate(&self) -> Result<String>;
}

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Builds a client whose requests give up after `timeout`.
    ///
    /// A request that times out surfaces as [`BackendError::Transport`].
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::Status(status.as_u16()))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn check(&self, password: &str) -> Result<StrengthResult> {
        let body = CheckRequest {
            password: password.to_string(),
        };
        let response = self.client.post(self.url("/check")).json(&body).send().await?;
        Ok(ensure_success(response)?.json::<StrengthResult>().await?)
    }

    async fn generate(&self) -> Result<String> {
        let response = self.client.get(self.url("/generate")).send().await?;
        let generated = ensure_success(response)?.json::<GeneratedPassword>().await?;
        Ok(generated.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::time::Instant;

    const TIMEOUT: Duration = Duration::from_millis(300);

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:5000/", TIMEOUT).unwrap();
        assert_eq!(backend.url("/check"), "http://localhost:5000/check");
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to run an HTTP server.
        let backend = HttpBackend::new("http://127.0.0.1:9", TIMEOUT).unwrap();
        let result = backend.check("abc").await;
        assert!(matches!(result, Err(BackendError::Transport(_))));
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        // Accepted by the kernel backlog, never answered.
        let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        let backend = HttpBackend::new(format!("http://127.0.0.1:{}", port), TIMEOUT).unwrap();

        let started = Instant::now();
        let outcome = tokio::time::timeout(Duration::from_secs(5), backend.check("abc")).await;

        let result = outcome.expect("request should give up before the outer deadline");
        match result {
            Err(BackendError::Transport(e)) => assert!(e.is_timeout(), "{}", e),
            other => panic!("expected a timeout, got {:?}", other),
        }
        assert!(started.elapsed() < Duration::from_secs(5));

        let generated = tokio::time::timeout(Duration::from_secs(5), backend.generate()).await;
        assert!(matches!(generated, Ok(Err(BackendError::Transport(_)))));
        drop(listener);
    }
}
