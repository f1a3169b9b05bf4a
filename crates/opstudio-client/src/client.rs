use std::time::Duration;

use opstudio_core::wire::{
    LpSolveRequest, LpSolveResponse, NetworkSolveRequest, NetworkSolveResponse,
    TransportSolveRequest, TransportSolveResponse,
};
use opstudio_core::{
    Completion, DisplayResult, ModelKind, Session, SolveRequest, SolverResponse, StudioConfig,
};
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::transport::{HttpTransport, RawReply, SolverTransport};

/// Posts solve requests to the endpoint configured for their kind.
#[derive(Debug, Clone)]
pub struct SolverClient<T = HttpTransport> {
    config: StudioConfig,
    transport: T,
}

impl SolverClient<HttpTransport> {
    /// HTTP client honoring `http.connectTimeoutMs`.
    pub fn from_config(config: StudioConfig) -> Result<Self> {
        let connect_timeout = config.connect_timeout_ms().map(Duration::from_millis);
        let transport = HttpTransport::new(connect_timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: SolverTransport> SolverClient<T> {
    pub fn with_transport(config: StudioConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn endpoint(&self, kind: ModelKind) -> Result<&str> {
        self.config
            .endpoint(kind)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ClientError::MissingEndpoint { kind })
    }

    pub fn solve(&self, request: &SolveRequest) -> Result<SolverResponse> {
        let kind = request.kind();
        let url = self.endpoint(kind)?;
        let span = tracing::info_span!("solve", kind = %kind, url);
        let _enter = span.enter();

        let reply = self.transport.post_json(url, &request.to_value())?;
        let response = decode_reply(kind, reply)?;
        tracing::debug!("solver response decoded");
        Ok(response)
    }

    pub fn solve_lp(&self, request: &LpSolveRequest) -> Result<LpSolveResponse> {
        match self.solve(&SolveRequest::Lp(request.clone()))? {
            SolverResponse::Lp(res) => Ok(res),
            other => Err(mismatch(ModelKind::Lp, &other)),
        }
    }

    pub fn solve_transport(
        &self,
        request: &TransportSolveRequest,
    ) -> Result<TransportSolveResponse> {
        match self.solve(&SolveRequest::Transport(request.clone()))? {
            SolverResponse::Transport(res) => Ok(res),
            other => Err(mismatch(ModelKind::Transport, &other)),
        }
    }

    pub fn solve_network(&self, request: &NetworkSolveRequest) -> Result<NetworkSolveResponse> {
        match self.solve(&SolveRequest::Network(request.clone()))? {
            SolverResponse::Network(res) => Ok(res),
            other => Err(mismatch(ModelKind::Network, &other)),
        }
    }

    pub fn solve_and_project(&self, request: &SolveRequest) -> Result<DisplayResult> {
        let response = self.solve(request)?;
        Ok(opstudio_core::project(request, &response)?)
    }

    /// Runs one solve against `session`'s page for the request kind.
    ///
    /// The page is cleared before the call; the outcome is dropped when a newer solve for the same
    /// kind began in the meantime.
    pub fn solve_page(
        &self,
        session: &mut Session<ClientError>,
        request: &SolveRequest,
    ) -> Completion {
        let ticket = session.begin(request.kind());
        let outcome = self.solve_and_project(request);
        session.complete(ticket, outcome)
    }
}

fn mismatch(request: ModelKind, response: &SolverResponse) -> ClientError {
    ClientError::Core(opstudio_core::Error::KindMismatch {
        request,
        response: response.kind(),
    })
}

/// Turns a raw reply into a typed response, or into the solver's rejection.
///
/// An `error` field means failure even on a 2xx status. Network bodies may carry it inside a
/// `{"result": ...}` envelope.
fn decode_reply(kind: ModelKind, reply: RawReply) -> Result<SolverResponse> {
    let parsed: Option<Value> = serde_json::from_str(&reply.body).ok();

    if !reply.is_success() {
        let (error, message) = match &parsed {
            Some(value) => match error_fields(value) {
                (None, None) => (None, text_field(value, "detail")),
                fields => fields,
            },
            None => (None, non_blank(&reply.body)),
        };
        tracing::warn!(status = reply.status, ?error, "solver rejected request");
        return Err(ClientError::Solver {
            status: reply.status,
            error,
            message,
        });
    }

    let Some(value) = parsed else {
        return Ok(SolverResponse::parse(kind, &reply.body)?);
    };
    if let (Some(error), message) = error_fields(&value) {
        tracing::warn!(status = reply.status, %error, "solver reported an error");
        return Err(ClientError::Solver {
            status: reply.status,
            error: Some(error),
            message,
        });
    }
    Ok(SolverResponse::from_value(kind, value)?)
}

fn error_fields(value: &Value) -> (Option<String>, Option<String>) {
    let top = (text_field(value, "error"), text_field(value, "message"));
    if top.0.is_some() {
        return top;
    }
    match value.get("result") {
        Some(inner) if inner.is_object() => {
            let nested = (text_field(inner, "error"), text_field(inner, "message"));
            if nested.0.is_some() {
                nested
            } else {
                (None, top.1.or(nested.1))
            }
        }
        _ => top,
    }
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
