use serde::{Deserialize, Serialize};

use crate::models::lp::{LpMethod, Relation, Sense};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpSolveRequest {
    pub model: LpWireModel,
    #[serde(default)]
    pub method: LpMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpWireModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sense: Sense,
    pub c: Vec<f64>,
    pub constraints: Vec<LpWireConstraint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpWireConstraint {
    pub a: Vec<f64>,
    #[serde(default)]
    pub op: Relation,
    pub b: f64,
}

/// Body returned by the LP solver.
///
/// Every numeric slot is nullable: unbounded and infeasible solves report `null` objectives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LpSolveResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub method_used: Option<String>,
    #[serde(default)]
    pub objective_value: Option<f64>,
    #[serde(default)]
    pub x: Vec<Option<f64>>,
    #[serde(default)]
    pub iterations: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub slacks: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub dual: Option<DualInfo>,
    #[serde(default)]
    pub basic_vars: Option<Vec<String>>,
    #[serde(default)]
    pub nonbasic_vars: Option<Vec<String>>,
    #[serde(default, alias = "final_tableau")]
    pub tableau: Option<Vec<Vec<Option<f64>>>>,
    #[serde(default)]
    pub basis: Option<Vec<i64>>,
    #[serde(default)]
    pub var_names: Option<Vec<String>>,
    #[serde(default)]
    pub row0: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub tableau_history: Option<TableauHistory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DualInfo {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub x: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub objective_value: Option<f64>,
    #[serde(default)]
    pub method_used: Option<String>,
    #[serde(default)]
    pub shadow_prices: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableauHistory {
    Groups(Vec<TableauHistoryGroup>),
    Single(TableauHistoryGroup),
}

impl TableauHistory {
    pub fn groups(&self) -> &[TableauHistoryGroup] {
        match self {
            TableauHistory::Groups(groups) => groups,
            TableauHistory::Single(group) => std::slice::from_ref(group),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableauHistoryGroup {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub var_names: Option<Vec<String>>,
    #[serde(default)]
    pub items: Vec<TableauHistoryItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableauHistoryItem {
    #[serde(default, alias = "iteration")]
    pub iter: u64,
    #[serde(default, alias = "enter", alias = "entering_var")]
    pub entering: Option<VarRef>,
    #[serde(default, alias = "leave", alias = "leaving_var")]
    pub leaving: Option<VarRef>,
    #[serde(default)]
    pub tableau: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    pub basis: Option<Vec<i64>>,
    #[serde(default)]
    pub basic_vars: Option<Vec<String>>,
    #[serde(default, alias = "row_operations")]
    pub row_ops: Option<Vec<String>>,
}

/// A pivot variable, reported either as a tableau column index or by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarRef {
    Index(i64),
    Name(String),
}
