use opstudio_core::network::{NetworkEdge, NetworkModel};
use opstudio_core::project::{NetworkView, RouteView};
use opstudio_core::NetworkMethod;
use opstudio_render::{layout_circular, layout_network};

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn four_nodes_sit_on_the_circle() {
    let layout = layout_circular(&ids(&["A", "B", "C", "D"]), 720.0, 420.0);
    let radius = 0.35 * 420.0;
    let points: Vec<_> = layout.slots().iter().map(|(_, p)| *p).collect();
    assert_eq!(points.len(), 4);

    for p in &points {
        assert!(p.x >= 0.0 && p.x <= 720.0 && p.y >= 0.0 && p.y <= 420.0);
        let d = (p.x - 360.0).hypot(p.y - 210.0);
        assert!((d - radius).abs() < 1e-9);
    }
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            assert!(points[i].distance_to(&points[j]) > 1.0);
        }
    }

    // first node at twelve o'clock, second at three
    let a = layout.get("A").unwrap();
    assert!((a.x - 360.0).abs() < 1e-9);
    assert!((a.y - (210.0 - radius)).abs() < 1e-9);
    let b = layout.get("B").unwrap();
    assert!((b.x - (360.0 + radius)).abs() < 1e-9);
}

#[test]
fn layout_is_deterministic_and_handles_empty_input() {
    let nodes = ids(&["x", "y", "z"]);
    assert_eq!(
        layout_circular(&nodes, 300.0, 300.0),
        layout_circular(&nodes, 300.0, 300.0)
    );
    let empty = layout_circular(&[], 300.0, 300.0);
    assert!(empty.is_empty());
    assert_eq!(empty.get("x"), None);

    let single = layout_circular(&ids(&["only"]), 200.0, 100.0);
    let p = single.get("only").unwrap();
    assert!((p.x - 100.0).abs() < 1e-9);
    assert!((p.y - (50.0 - 35.0)).abs() < 1e-9);
}

#[test]
fn duplicate_ids_keep_their_slots_and_resolve_to_the_last() {
    let layout = layout_circular(&ids(&["A", "B", "A", "C"]), 400.0, 400.0);
    assert_eq!(layout.len(), 4);
    assert_eq!(layout.get("A"), Some(layout.slots()[2].1));
    assert_ne!(layout.slots()[0].1, layout.slots()[2].1);
}

fn model(directed: bool) -> NetworkModel {
    NetworkModel {
        nodes: ids(&["s", "a", "t"]),
        edges: vec![
            NetworkEdge {
                u: "s".into(),
                v: "a".into(),
                weight: None,
                capacity: Some(4.0),
                cost: None,
            },
            NetworkEdge {
                u: "a".into(),
                v: "t".into(),
                weight: None,
                capacity: Some(2.0),
                cost: None,
            },
            NetworkEdge {
                u: "a".into(),
                v: "ghost".into(),
                weight: None,
                capacity: Some(1.0),
                cost: None,
            },
        ],
        directed,
        source: Some("s".into()),
        target: None,
        sink: Some("t".into()),
        demand: None,
    }
}

fn view(edges: &[&str]) -> NetworkView {
    NetworkView {
        method: NetworkMethod::MaxFlow,
        metric: None,
        metrics: Vec::new(),
        highlighted_nodes: Vec::new(),
        highlighted_edges: ids(edges),
        flows: [("t->a".to_string(), 2.0), ("s->a".to_string(), 2.0)]
            .into_iter()
            .collect(),
        route: Some(RouteView::Path(ids(&["s", "a"]))),
        summary: Vec::new(),
    }
}

#[test]
fn highlight_and_flow_correlate_by_edge_key() {
    let overlay = view(&["s->a", "t->a"]);

    let directed = layout_network(&model(true), Some(&overlay), 720.0, 420.0);
    assert_eq!(directed.edges.len(), 2);
    assert!(directed.edges[0].highlighted);
    assert_eq!(directed.edges[0].flow, Some(2.0));
    assert!(!directed.edges[1].highlighted);
    assert_eq!(directed.edges[1].flow, None);

    let undirected = layout_network(&model(false), Some(&overlay), 720.0, 420.0);
    assert!(undirected.edges[1].highlighted);
    assert_eq!(undirected.edges[1].flow, Some(2.0));

    let highlighted: Vec<_> = directed
        .nodes
        .iter()
        .filter(|n| n.highlighted)
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(highlighted, vec!["s", "a"]);
}

#[test]
fn layout_without_a_result_has_no_highlights() {
    let layout = layout_network(&model(true), None, 720.0, 420.0);
    assert!(layout.edges.iter().all(|e| !e.highlighted && e.flow.is_none()));
    assert!(layout.nodes.iter().all(|n| !n.highlighted));
    assert_eq!(layout.edges[0].from.x, layout.nodes[0].x);
}
