//! Network models: drafts as typed by the user, the canonical model sent to the solver, and
//! path reconstruction over solver-highlighted edges.

pub mod build;
pub mod path;

use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::cells::{text_field, value_text};

pub use build::{build_network, split_node_text};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkMethod {
    #[default]
    #[serde(alias = "shortest")]
    ShortestPath,
    #[serde(alias = "mst")]
    MinimumSpanningTree,
    MaxFlow,
    #[serde(alias = "min_cost")]
    MinCostFlow,
}

impl NetworkMethod {
    pub const ALL: [NetworkMethod; 4] = [
        NetworkMethod::ShortestPath,
        NetworkMethod::MinimumSpanningTree,
        NetworkMethod::MaxFlow,
        NetworkMethod::MinCostFlow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NetworkMethod::ShortestPath => "shortest_path",
            NetworkMethod::MinimumSpanningTree => "minimum_spanning_tree",
            NetworkMethod::MaxFlow => "max_flow",
            NetworkMethod::MinCostFlow => "min_cost_flow",
        }
    }

    pub fn uses_weight(self) -> bool {
        matches!(
            self,
            NetworkMethod::ShortestPath | NetworkMethod::MinimumSpanningTree
        )
    }

    pub fn uses_capacity(self) -> bool {
        matches!(self, NetworkMethod::MaxFlow | NetworkMethod::MinCostFlow)
    }

    pub fn uses_cost(self) -> bool {
        matches!(self, NetworkMethod::MinCostFlow)
    }
}

impl fmt::Display for NetworkMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shortest_path" | "shortest" => Ok(NetworkMethod::ShortestPath),
            "minimum_spanning_tree" | "mst" => Ok(NetworkMethod::MinimumSpanningTree),
            "max_flow" => Ok(NetworkMethod::MaxFlow),
            "min_cost_flow" | "min_cost" => Ok(NetworkMethod::MinCostFlow),
            _ => Err(Error::UnknownName {
                kind: "network method",
                name: s.to_string(),
            }),
        }
    }
}

/// One edge row as typed: every field is free text and may be blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeDraft {
    #[serde(default, deserialize_with = "text_field")]
    pub u: String,
    #[serde(default, deserialize_with = "text_field")]
    pub v: String,
    #[serde(default, alias = "w", deserialize_with = "text_field")]
    pub weight: String,
    #[serde(default, deserialize_with = "text_field")]
    pub capacity: String,
    #[serde(default, deserialize_with = "text_field")]
    pub cost: String,
}

impl EdgeDraft {
    pub fn new(u: impl Into<String>, v: impl Into<String>) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            ..Self::default()
        }
    }

    pub fn weight(mut self, text: impl Into<String>) -> Self {
        self.weight = text.into();
        self
    }

    pub fn capacity(mut self, text: impl Into<String>) -> Self {
        self.capacity = text.into();
        self
    }

    pub fn cost(mut self, text: impl Into<String>) -> Self {
        self.cost = text.into();
        self
    }
}

/// Network page inputs before validation.
///
/// `nodes` is the raw node text (comma or newline separated). Drafts loaded from JSON may give
/// `nodes` as an array and numeric fields as numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDraft {
    #[serde(default, deserialize_with = "node_text_field")]
    pub nodes: String,
    #[serde(default)]
    pub edges: Vec<EdgeDraft>,
    #[serde(default)]
    pub method: NetworkMethod,
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default, deserialize_with = "text_field")]
    pub source: String,
    #[serde(default, deserialize_with = "text_field")]
    pub target: String,
    #[serde(default, deserialize_with = "text_field")]
    pub sink: String,
    #[serde(default, deserialize_with = "text_field")]
    pub demand: String,
}

fn default_directed() -> bool {
    true
}

impl Default for NetworkDraft {
    fn default() -> Self {
        Self {
            nodes: String::new(),
            edges: Vec::new(),
            method: NetworkMethod::ShortestPath,
            directed: true,
            source: String::new(),
            target: String::new(),
            sink: String::new(),
            demand: String::new(),
        }
    }
}

impl NetworkDraft {
    pub fn build(&self) -> Result<NetworkSolveRequest> {
        build_network(self)
    }
}

/// Canonical edge. Absent optional fields are omitted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub u: String,
    pub v: String,
    #[serde(rename = "w", alias = "weight", default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Canonical network model: only the fields the chosen method reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkModel {
    pub nodes: Vec<String>,
    pub edges: Vec<NetworkEdge>,
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand: Option<f64>,
}

impl NetworkModel {
    /// Problems the solver will reject that do not block submission here.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.nodes.is_empty() {
            out.push("no nodes listed".to_string());
        }
        if self.edges.is_empty() {
            out.push("no edges listed".to_string());
        }
        let mut seen: Vec<&str> = Vec::new();
        for node in &self.nodes {
            if seen.contains(&node.as_str()) {
                out.push(format!("duplicate node {node:?}"));
            } else {
                seen.push(node);
            }
        }
        for (idx, edge) in self.edges.iter().enumerate() {
            for end in [&edge.u, &edge.v] {
                if !seen.contains(&end.as_str()) {
                    out.push(format!(
                        "edge {} ({}->{}) references unknown node {end:?}",
                        idx + 1,
                        edge.u,
                        edge.v
                    ));
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSolveRequest {
    pub method: NetworkMethod,
    pub model: NetworkModel,
}

fn node_text_field<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(value_text)
            .collect::<Vec<_>>()
            .join("\n")),
        other => Ok(value_text(other)),
    }
}
