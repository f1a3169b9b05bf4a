use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::transport::{CostCell, TransportOptions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMethod {
    /// All three initial heuristics, then stepping-stone from the cheapest.
    #[default]
    Compare,
    Auto,
    Northwest,
    MinCost,
    Vogel,
    Optimize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportSolveRequest {
    #[serde(default)]
    pub method: TransportMethod,
    pub model: TransportWireModel,
    #[serde(default)]
    pub options: TransportOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportWireModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub supply: Vec<f64>,
    pub demand: Vec<f64>,
    pub costs: Vec<Vec<CostCell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origins: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<String>>,
}

/// Body returned by the transportation solver.
///
/// Compare mode fills `initials` and `optimal`; single-method mode fills the top-level
/// `method_used`/`total_cost`/`allocation`/`trace` fields instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportSolveResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub compare: bool,
    #[serde(default)]
    pub initials: Option<IndexMap<String, TransportSolution>>,
    #[serde(default)]
    pub optimal: Option<TransportSolution>,
    #[serde(default)]
    pub method_used: Option<String>,
    #[serde(default)]
    pub iterations: Option<u64>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default, rename = "has_M")]
    pub has_m: Option<bool>,
    #[serde(default)]
    pub allocation: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub trace: Option<Vec<TraceStep>>,
    #[serde(default)]
    pub extra: Option<TransportExtra>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportSolution {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default, rename = "has_M")]
    pub has_m: bool,
    #[serde(default)]
    pub cost_pretty: Option<String>,
    #[serde(default)]
    pub m_coeff: Option<f64>,
    #[serde(default)]
    pub constant_cost: Option<f64>,
    #[serde(default)]
    pub allocation: Vec<Vec<f64>>,
    #[serde(default)]
    pub iterations: Option<u64>,
    #[serde(default)]
    pub started_from: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub trace: Vec<TraceStep>,
}

/// One stepping-stone pivot. Cells are `[row, col]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    #[serde(default)]
    pub iter: u64,
    #[serde(default)]
    pub total_cost: Option<f64>,
    pub enter: (usize, usize),
    #[serde(default)]
    pub delta: Option<f64>,
    #[serde(default)]
    pub theta: Option<f64>,
    #[serde(default)]
    pub leaving: Option<(usize, usize)>,
    #[serde(default)]
    pub cycle: Vec<(usize, usize)>,
    #[serde(default)]
    pub allocation: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportExtra {
    #[serde(default)]
    pub balanced: Option<Balancing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balancing {
    #[serde(default)]
    pub added_dummy_origin: bool,
    #[serde(default)]
    pub added_dummy_destination: bool,
    #[serde(default)]
    pub rows: usize,
    #[serde(default)]
    pub cols: usize,
}
