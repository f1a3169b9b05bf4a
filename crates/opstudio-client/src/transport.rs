use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Status code and raw body of one solver exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts a JSON body and hands back whatever the server answered.
///
/// Implementations return `Err` only when no answer arrived; HTTP error statuses are replies.
pub trait SolverTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<RawReply>;
}

impl<T: SolverTransport + ?Sized> SolverTransport for &T {
    fn post_json(&self, url: &str, body: &Value) -> Result<RawReply> {
        (**self).post_json(url, body)
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Solves can run for a long time, so the request timeout is disabled. `connect_timeout`
    /// bounds only connection setup.
    pub fn new(connect_timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().timeout(None::<Duration>);
        if let Some(timeout) = connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl SolverTransport for HttpTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<RawReply> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .map_err(|err| ClientError::unavailable(url, err))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| ClientError::unavailable(url, err))?;
        tracing::debug!(url, status, bytes = body.len(), "solver replied");
        Ok(RawReply { status, body })
    }
}
