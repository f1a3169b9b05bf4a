//! Solver request and response bodies.
//!
//! Requests are built from model snapshots; responses are decoded once into [`SolverResponse`],
//! with the variant picked by the endpoint that was called.

pub mod lp;
pub mod network;
pub mod transport;

use serde::Serialize;
use serde_json::Value;

use crate::ModelKind;
use crate::error::{Error, Result};

pub use lp::{LpSolveRequest, LpSolveResponse};
pub use network::{NetworkSolveRequest, NetworkSolveResponse};
pub use transport::{TransportSolveRequest, TransportSolveResponse};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolveRequest {
    Lp(LpSolveRequest),
    Transport(TransportSolveRequest),
    Network(NetworkSolveRequest),
}

impl SolveRequest {
    pub fn kind(&self) -> ModelKind {
        match self {
            SolveRequest::Lp(_) => ModelKind::Lp,
            SolveRequest::Transport(_) => ModelKind::Transport,
            SolveRequest::Network(_) => ModelKind::Network,
        }
    }

    /// Decodes a request body of a known kind.
    pub fn from_value(kind: ModelKind, value: Value) -> Result<Self> {
        let decoded = match kind {
            ModelKind::Lp => serde_json::from_value(value).map(SolveRequest::Lp),
            ModelKind::Transport => serde_json::from_value(value).map(SolveRequest::Transport),
            ModelKind::Network => serde_json::from_value(value).map(SolveRequest::Network),
        };
        decoded.map_err(|source| Error::Decode {
            kind: kind.as_str(),
            source,
        })
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl From<LpSolveRequest> for SolveRequest {
    fn from(value: LpSolveRequest) -> Self {
        SolveRequest::Lp(value)
    }
}

impl From<TransportSolveRequest> for SolveRequest {
    fn from(value: TransportSolveRequest) -> Self {
        SolveRequest::Transport(value)
    }
}

impl From<NetworkSolveRequest> for SolveRequest {
    fn from(value: NetworkSolveRequest) -> Self {
        SolveRequest::Network(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolverResponse {
    Lp(LpSolveResponse),
    Transport(TransportSolveResponse),
    Network(NetworkSolveResponse),
}

impl SolverResponse {
    pub fn from_value(kind: ModelKind, value: Value) -> Result<Self> {
        let decoded = match kind {
            ModelKind::Lp => serde_json::from_value(value).map(SolverResponse::Lp),
            ModelKind::Transport => serde_json::from_value(value).map(SolverResponse::Transport),
            ModelKind::Network => {
                NetworkSolveResponse::from_value(value).map(SolverResponse::Network)
            }
        };
        decoded.map_err(|source| Error::Decode {
            kind: kind.as_str(),
            source,
        })
    }

    pub fn parse(kind: ModelKind, body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body).map_err(|source| Error::Decode {
            kind: kind.as_str(),
            source,
        })?;
        Self::from_value(kind, value)
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            SolverResponse::Lp(_) => ModelKind::Lp,
            SolverResponse::Transport(_) => ModelKind::Transport,
            SolverResponse::Network(_) => ModelKind::Network,
        }
    }

    /// The solver-reported `error` field, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            SolverResponse::Lp(r) => r.error.as_deref(),
            SolverResponse::Transport(r) => r.error.as_deref(),
            SolverResponse::Network(r) => r.error.as_deref(),
        }
    }
}
