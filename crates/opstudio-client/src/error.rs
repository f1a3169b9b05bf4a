use opstudio_core::ModelKind;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The solver could not be reached (refused, DNS, TLS, connect timeout, reset).
    #[error("solver at {endpoint} is unavailable: {source}")]
    TransportUnavailable {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The solver answered but rejected the request. `error` and `message` are the solver's own
    /// text, unmodified.
    #[error("solver rejected the request (HTTP {status}): {}", solver_detail(.error, .message))]
    Solver {
        status: u16,
        error: Option<String>,
        message: Option<String>,
    },

    #[error("no endpoint configured for {kind} requests")]
    MissingEndpoint { kind: ModelKind },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Core(#[from] opstudio_core::Error),
}

impl ClientError {
    pub fn unavailable(
        endpoint: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::TransportUnavailable {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }

    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::TransportUnavailable { .. })
    }

    #[must_use]
    pub fn is_solver_rejection(&self) -> bool {
        matches!(self, Self::Solver { .. })
    }

    /// The text a result page shows for this failure: the solver's `error`, else its `message`,
    /// else the error's own description.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Solver {
                error: Some(text), ..
            } => text.clone(),
            Self::Solver {
                error: None,
                message: Some(text),
                ..
            } => text.clone(),
            other => other.to_string(),
        }
    }
}

fn solver_detail(error: &Option<String>, message: &Option<String>) -> String {
    match (error.as_deref(), message.as_deref()) {
        (Some(e), Some(m)) if e != m => format!("{e} ({m})"),
        (Some(e), _) => e.to_string(),
        (None, Some(m)) => m.to_string(),
        (None, None) => "no detail".to_string(),
    }
}
