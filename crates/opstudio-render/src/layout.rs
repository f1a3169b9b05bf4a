use std::collections::HashSet;
use std::f64::consts::PI;

use indexmap::IndexMap;
use opstudio_core::network::NetworkModel;
use opstudio_core::project::NetworkView;

use crate::model::{EdgeLayout, LayoutPoint, NetworkLayout, NodeLayout};

/// Share of the smaller canvas side used as circle radius.
pub const RADIUS_FACTOR: f64 = 0.35;

/// Node positions on a circle, one slot per input entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularLayout {
    slots: Vec<(String, LayoutPoint)>,
    by_id: IndexMap<String, LayoutPoint>,
}

impl CircularLayout {
    /// Position of `id`. With duplicate ids the last slot wins.
    pub fn get(&self, id: &str) -> Option<LayoutPoint> {
        self.by_id.get(id).copied()
    }

    /// Slots in input order, duplicates included.
    pub fn slots(&self) -> &[(String, LayoutPoint)] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Places node `i` of `n` at angle `2πi/n - π/2` on a circle centered in the canvas, so the first
/// node sits at twelve o'clock.
pub fn layout_circular(nodes: &[String], width: f64, height: f64) -> CircularLayout {
    let n = nodes.len().max(1) as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let r = RADIUS_FACTOR * width.min(height);

    let mut slots = Vec::with_capacity(nodes.len());
    let mut by_id = IndexMap::with_capacity(nodes.len());
    for (i, id) in nodes.iter().enumerate() {
        let angle = 2.0 * PI * (i as f64) / n - PI / 2.0;
        let p = LayoutPoint {
            x: cx + r * angle.cos(),
            y: cy + r * angle.sin(),
        };
        slots.push((id.clone(), p));
        by_id.insert(id.clone(), p);
    }
    CircularLayout { slots, by_id }
}

fn reversed_key(u: &str, v: &str) -> String {
    format!("{v}->{u}")
}

/// Lays out a network model and overlays a solved result.
///
/// An edge is highlighted when its key is in the result's highlight set, or, for undirected
/// models, when its reversed key is. Flow values attach the same way. Edges whose endpoints are not
/// listed nodes are left out.
pub fn layout_network(
    model: &NetworkModel,
    result: Option<&NetworkView>,
    width: f64,
    height: f64,
) -> NetworkLayout {
    let circle = layout_circular(&model.nodes, width, height);

    let highlighted_edges: HashSet<&str> = result
        .map(|r| r.highlighted_edges.iter().map(String::as_str).collect())
        .unwrap_or_default();
    let mut highlighted_nodes: HashSet<&str> = result
        .map(|r| r.highlighted_nodes.iter().map(String::as_str).collect())
        .unwrap_or_default();
    if let Some(opstudio_core::project::RouteView::Path(path)) =
        result.and_then(|r| r.route.as_ref())
    {
        highlighted_nodes.extend(path.iter().map(String::as_str));
    }
    let flows = result.map(|r| &r.flows);

    let nodes = circle
        .slots()
        .iter()
        .map(|(id, p)| NodeLayout {
            id: id.clone(),
            x: p.x,
            y: p.y,
            highlighted: highlighted_nodes.contains(id.as_str()),
        })
        .collect();

    let mut edges = Vec::with_capacity(model.edges.len());
    for edge in &model.edges {
        let (Some(from), Some(to)) = (circle.get(&edge.u), circle.get(&edge.v)) else {
            tracing::debug!(u = %edge.u, v = %edge.v, "edge endpoint not laid out");
            continue;
        };
        let key = format!("{}->{}", edge.u, edge.v);
        let reverse = reversed_key(&edge.u, &edge.v);
        let highlighted = highlighted_edges.contains(key.as_str())
            || (!model.directed && highlighted_edges.contains(reverse.as_str()));
        let flow = flows.and_then(|f| {
            f.get(&key)
                .or_else(|| (!model.directed).then(|| f.get(&reverse)).flatten())
                .copied()
        });
        edges.push(EdgeLayout {
            key,
            u: edge.u.clone(),
            v: edge.v.clone(),
            from,
            to,
            highlighted,
            weight: edge.weight,
            capacity: edge.capacity,
            cost: edge.cost,
            flow,
        });
    }

    NetworkLayout {
        width,
        height,
        directed: model.directed,
        nodes,
        edges,
    }
}
