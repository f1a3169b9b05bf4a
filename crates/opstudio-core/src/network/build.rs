use crate::error::{Error, Result};
use crate::network::{
    EdgeDraft, NetworkDraft, NetworkEdge, NetworkMethod, NetworkModel, NetworkSolveRequest,
};

/// Splits node text on commas and newlines. Entries are trimmed, blanks dropped, duplicates and
/// order kept.
pub fn split_node_text(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_optional(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

struct ParsedEdge {
    /// 1-based position among the draft rows.
    position: usize,
    u: String,
    v: String,
    weight: Option<f64>,
    capacity: Option<f64>,
    cost: Option<f64>,
}

impl ParsedEdge {
    fn parse(position: usize, draft: &EdgeDraft) -> Option<Self> {
        let u = non_empty(&draft.u)?;
        let v = non_empty(&draft.v)?;
        Some(Self {
            position,
            u,
            v,
            weight: parse_optional(&draft.weight),
            capacity: parse_optional(&draft.capacity),
            cost: parse_optional(&draft.cost),
        })
    }

    fn describe(&self) -> String {
        format!("edge {} ({}->{})", self.position, self.u, self.v)
    }

    fn positive_capacity(&self) -> Option<f64> {
        self.capacity.filter(|c| *c > 0.0)
    }
}

/// Turns a network draft into the canonical solver request.
///
/// Rows missing either endpoint are dropped. Validation failures name the violated rule and block
/// the request; nothing is coerced. The resulting model carries only the fields `draft.method`
/// reads.
pub fn build_network(draft: &NetworkDraft) -> Result<NetworkSolveRequest> {
    let method = draft.method;
    let nodes = split_node_text(&draft.nodes);

    let mut parsed = Vec::with_capacity(draft.edges.len());
    for (idx, record) in draft.edges.iter().enumerate() {
        match ParsedEdge::parse(idx + 1, record) {
            Some(edge) => parsed.push(edge),
            None => tracing::debug!(row = idx + 1, "dropping edge row without both endpoints"),
        }
    }

    let mut model = NetworkModel {
        nodes,
        edges: Vec::with_capacity(parsed.len()),
        directed: draft.directed,
        source: None,
        target: None,
        sink: None,
        demand: None,
    };

    match method {
        NetworkMethod::ShortestPath => {
            model.source = Some(required(method, "source", &draft.source)?);
            model.target = Some(required(method, "target", &draft.target)?);
        }
        NetworkMethod::MinimumSpanningTree => {}
        NetworkMethod::MaxFlow => {
            model.source = Some(required(method, "source", &draft.source)?);
            model.sink = Some(required(method, "sink", &draft.sink)?);
        }
        NetworkMethod::MinCostFlow => {
            model.source = Some(required(method, "source", &draft.source)?);
            model.sink = Some(required(method, "sink", &draft.sink)?);
            let demand = parse_optional(&draft.demand)
                .filter(|d| *d > 0.0)
                .ok_or_else(|| Error::method(method, "demand", "demand must be a number > 0"))?;
            model.demand = Some(demand);
        }
    }

    for edge in &parsed {
        validate_edge(method, edge)?;
        model.edges.push(NetworkEdge {
            u: edge.u.clone(),
            v: edge.v.clone(),
            weight: edge.weight.filter(|_| method.uses_weight()),
            capacity: edge.positive_capacity().filter(|_| method.uses_capacity()),
            cost: edge
                .cost
                .filter(|c| *c != 0.0)
                .filter(|_| method.uses_cost()),
        });
    }

    for diagnostic in model.diagnostics() {
        tracing::warn!(method = %method, "{diagnostic}");
    }

    Ok(NetworkSolveRequest { method, model })
}

fn required(method: NetworkMethod, field: &'static str, text: &str) -> Result<String> {
    non_empty(text).ok_or_else(|| Error::method(method, field, format!("{field} is required")))
}

fn validate_edge(method: NetworkMethod, edge: &ParsedEdge) -> Result<()> {
    let field = format!("edges[{}]", edge.position - 1);
    if method.uses_weight() && edge.weight.is_none() {
        return Err(Error::method(
            method,
            field,
            format!("{} needs a numeric weight", edge.describe()),
        ));
    }
    if method.uses_capacity() && edge.positive_capacity().is_none() {
        return Err(Error::method(
            method,
            field,
            format!("{} needs a capacity > 0", edge.describe()),
        ));
    }
    if method.uses_cost() && edge.cost.is_none() {
        return Err(Error::method(
            method,
            field,
            format!("{} needs an explicit cost (0 is allowed)", edge.describe()),
        ));
    }
    Ok(())
}
