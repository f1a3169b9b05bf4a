use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use crate::network::{NetworkEdge, NetworkModel, NetworkSolveRequest};

/// Body returned by the network solver, after unwrapping an optional `{"result": ...}` envelope.
///
/// The metric keys vary per method and per solver version, so all of them are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSolveResponse {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub sink: Option<String>,
    #[serde(default)]
    pub summary: Option<Vec<Value>>,
    #[serde(default)]
    pub highlight: Option<Highlight>,
    #[serde(default)]
    pub flow_map: Option<IndexMap<String, f64>>,
    #[serde(default)]
    pub flows: Option<Vec<FlowEntry>>,
    #[serde(default)]
    pub path_nodes: Option<Vec<String>>,
    #[serde(default)]
    pub edges: Option<Vec<TreeEdge>>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub total_weight: Option<f64>,
    #[serde(default)]
    pub max_flow: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub sent: Option<f64>,
    #[serde(default)]
    pub total_flow: Option<f64>,
    #[serde(default)]
    pub demand: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEntry {
    pub u: String,
    pub v: String,
    #[serde(default)]
    pub flow: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEdge {
    pub u: String,
    pub v: String,
    #[serde(default, alias = "w")]
    pub weight: Option<f64>,
}

impl NetworkSolveResponse {
    /// Decodes a response value, unwrapping a `{"result": {...}}` envelope when present.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        let inner = match value {
            Value::Object(mut map) if map.get("result").is_some_and(Value::is_object) => {
                map.remove("result").unwrap_or_default()
            }
            other => other,
        };
        serde_json::from_value(inner)
    }

    /// Flow per edge key: `flow_map` as given, or rebuilt from the `flows` list.
    pub fn flow_map(&self) -> IndexMap<String, f64> {
        if let Some(map) = &self.flow_map {
            return map.clone();
        }
        self.flows
            .iter()
            .flatten()
            .map(|f| (format!("{}->{}", f.u, f.v), f.flow))
            .collect()
    }

    pub fn highlighted_edges(&self) -> &[String] {
        self.highlight.as_ref().map_or(&[], |h| h.edges.as_slice())
    }
}
