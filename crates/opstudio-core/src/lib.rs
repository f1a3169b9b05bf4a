#![forbid(unsafe_code)]

//! Optimization model authoring + solver result projection (headless).
//!
//! - `models`: editable LP and transportation state with shape-preserving resizes
//! - `network`: canonical network model construction, validation and path reconstruction
//! - `wire`: solver request/response bodies
//! - `project`: solver responses normalized into a [`DisplayResult`]
//! - `session`: per-kind request sequencing so superseded responses are dropped

pub mod config;
pub mod error;
pub mod grid;
pub mod models;
pub mod network;
pub mod project;
pub mod session;
pub mod wire;

pub use config::StudioConfig;
pub use error::{Error, Result};
pub use grid::Grid;
pub use models::lp::{LpDraft, LpMethod, LpModel, Relation, Sense};
pub use models::transport::{CostCell, TransportDraft, TransportModel, TransportOptions};
pub use network::path::{PathDisplay, reconstruct_path};
pub use network::{EdgeDraft, NetworkDraft, NetworkMethod, NetworkModel};
pub use opstudio_graphlib::EdgeKey;
pub use project::{DisplayResult, project};
pub use session::{Completion, PageState, RequestTicket, Session};
pub use wire::{SolveRequest, SolverResponse};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three solver families. Each has its own endpoint, request body and result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Lp,
    Transport,
    Network,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Lp, ModelKind::Transport, ModelKind::Network];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Lp => "lp",
            ModelKind::Transport => "transport",
            ModelKind::Network => "network",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ModelKind::Lp => 0,
            ModelKind::Transport => 1,
            ModelKind::Network => 2,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lp" | "linear" => Ok(ModelKind::Lp),
            "transport" | "transportation" => Ok(ModelKind::Transport),
            "network" | "networks" => Ok(ModelKind::Network),
            _ => Err(Error::UnknownName {
                kind: "model kind",
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
