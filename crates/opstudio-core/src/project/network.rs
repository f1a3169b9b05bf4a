use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::ModelKind;
use crate::network::path::{PathDisplay, parse_edge_keys};
use crate::network::{NetworkMethod, NetworkSolveRequest};
use crate::project::{DisplayResult, NamedValue};
use crate::wire::network::NetworkSolveResponse;

/// Reconstructed route, or the raw edge keys when no path could be walked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum RouteView {
    Path(Vec<String>),
    RawEdges(Vec<String>),
}

impl From<PathDisplay> for RouteView {
    fn from(value: PathDisplay) -> Self {
        match value {
            PathDisplay::Path(nodes) => RouteView::Path(nodes),
            PathDisplay::RawEdges(keys) => {
                RouteView::RawEdges(keys.iter().map(ToString::to_string).collect())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkView {
    pub method: NetworkMethod,
    pub metric: Option<NamedValue>,
    /// Every metric-like field the response carried, in a fixed order.
    pub metrics: Vec<NamedValue>,
    pub highlighted_nodes: Vec<String>,
    pub highlighted_edges: Vec<String>,
    pub flows: IndexMap<String, f64>,
    pub route: Option<RouteView>,
    pub summary: Vec<String>,
}

/// The headline metric for `method`: primary key first, then the alternate spelling.
pub fn resolve_metric(
    method: NetworkMethod,
    response: &NetworkSolveResponse,
) -> Option<NamedValue> {
    let (key, value) = match method {
        NetworkMethod::ShortestPath => ("distance", response.distance.or(response.cost)),
        NetworkMethod::MinimumSpanningTree => {
            ("total_weight", response.total_weight.or(response.cost))
        }
        NetworkMethod::MaxFlow => ("max_flow", response.max_flow.or(response.value)),
        NetworkMethod::MinCostFlow => ("total_cost", response.total_cost.or(response.cost)),
    };
    value.map(|v| NamedValue::new(key, Some(v)))
}

fn collect_metrics(response: &NetworkSolveResponse) -> Vec<NamedValue> {
    [
        ("distance", response.distance),
        ("total_weight", response.total_weight),
        ("max_flow", response.max_flow),
        ("value", response.value),
        ("total_cost", response.total_cost),
        ("cost", response.cost),
        ("sent", response.sent.or(response.total_flow)),
        ("demand", response.demand),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|v| NamedValue::new(key, Some(v))))
    .collect()
}

fn summary_line(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn project_network(
    request: &NetworkSolveRequest,
    response: &NetworkSolveResponse,
) -> DisplayResult {
    let method = request.method;
    let model = &request.model;
    let highlighted_edges = response.highlighted_edges().to_vec();
    let flows = response.flow_map();

    let route = match method {
        NetworkMethod::ShortestPath => {
            let source = model
                .source
                .as_deref()
                .or(response.source.as_deref())
                .unwrap_or_default();
            let target = model
                .target
                .as_deref()
                .or(response.target.as_deref())
                .unwrap_or_default();
            match &response.path_nodes {
                Some(nodes) if !nodes.is_empty() => Some(RouteView::Path(nodes.clone())),
                _ if highlighted_edges.is_empty() => None,
                _ => Some(
                    PathDisplay::from_edges(
                        parse_edge_keys(&highlighted_edges),
                        source,
                        target,
                        model.directed,
                    )
                    .into(),
                ),
            }
        }
        _ => None,
    };

    let solution = match method {
        NetworkMethod::MinimumSpanningTree => response
            .edges
            .iter()
            .flatten()
            .map(|e| NamedValue::new(format!("{}->{}", e.u, e.v), e.weight))
            .collect(),
        NetworkMethod::MaxFlow | NetworkMethod::MinCostFlow => flows
            .iter()
            .map(|(k, v)| NamedValue::new(k.clone(), Some(*v)))
            .collect(),
        NetworkMethod::ShortestPath => Vec::new(),
    };

    let metric = resolve_metric(method, response);
    let status = if response.error.is_some() { "ERROR" } else { "OK" };

    let mut out = DisplayResult::new(ModelKind::Network, status);
    out.method_used = response
        .method
        .clone()
        .unwrap_or_else(|| method.as_str().to_string());
    out.objective = metric.as_ref().and_then(|m| m.value);
    out.solution = solution;
    out.message = response.error.clone().or_else(|| response.message.clone());
    out.network = Some(NetworkView {
        method,
        metric,
        metrics: collect_metrics(response),
        highlighted_nodes: response
            .highlight
            .as_ref()
            .map(|h| h.nodes.clone())
            .unwrap_or_default(),
        highlighted_edges,
        flows,
        route,
        summary: response.summary.iter().flatten().map(summary_line).collect(),
    });
    out
}
