//! Normalizes solver responses into one display model.

pub mod lp;
pub mod network;
pub mod transport;

use serde::Serialize;

use crate::ModelKind;
use crate::error::{Error, Result};
use crate::wire::{SolveRequest, SolverResponse};

pub use lp::{
    HistoryGroupView, HistoryStepView, TableauRowView, TableauView, project_lp, project_tableau,
    row_label, slack_label,
};
pub use network::{NetworkView, RouteView, project_network};
pub use transport::{
    AllocationView, CellRef, CycleCell, HeuristicView, TraceStepView, TransportView,
    project_transport,
};

/// A labeled scalar. `None` stands for a value the solver reported as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedValue {
    pub key: String,
    pub value: Option<f64>,
}

impl NamedValue {
    pub fn new(key: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Labels `values` as `{prefix}1`, `{prefix}2`, ...
pub fn named_values(prefix: &str, values: &[Option<f64>]) -> Vec<NamedValue> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| NamedValue::new(format!("{prefix}{}", i + 1), *v))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayResult {
    pub kind: ModelKind,
    pub status: String,
    pub method_used: String,
    pub objective: Option<f64>,
    pub solution: Vec<NamedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slacks: Option<Vec<NamedValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dual_prices: Option<Vec<NamedValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_vars: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonbasic_vars: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_tableau: Option<TableauView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryGroupView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DisplayResult {
    pub(crate) fn new(kind: ModelKind, status: impl Into<String>) -> Self {
        Self {
            kind,
            status: status.into(),
            method_used: String::new(),
            objective: None,
            solution: Vec::new(),
            slacks: None,
            dual_prices: None,
            basic_vars: None,
            nonbasic_vars: None,
            final_tableau: None,
            history: Vec::new(),
            transport: None,
            network: None,
            message: None,
        }
    }
}

/// Projects `response` using the request it answers for labels and context.
pub fn project(request: &SolveRequest, response: &SolverResponse) -> Result<DisplayResult> {
    match (request, response) {
        (SolveRequest::Lp(req), SolverResponse::Lp(res)) => Ok(project_lp(req, res)),
        (SolveRequest::Transport(req), SolverResponse::Transport(res)) => {
            Ok(project_transport(Some(req), res))
        }
        (SolveRequest::Network(req), SolverResponse::Network(res)) => {
            Ok(project_network(req, res))
        }
        _ => Err(Error::KindMismatch {
            request: request.kind(),
            response: response.kind(),
        }),
    }
}
