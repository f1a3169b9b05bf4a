use opstudio_core::network::{NetworkEdge, NetworkModel};
use opstudio_render::svg::{edge_label, id_token, node_element_id};
use opstudio_render::{Error, SvgRenderOptions, layout_network, render_network_svg};

fn model(directed: bool) -> NetworkModel {
    NetworkModel {
        nodes: vec!["A".into(), "B & C".into()],
        edges: vec![NetworkEdge {
            u: "A".into(),
            v: "B & C".into(),
            weight: Some(2.5),
            capacity: None,
            cost: None,
        }],
        directed,
        source: None,
        target: None,
        sink: None,
        demand: None,
    }
}

#[test]
fn directed_networks_get_arrow_markers() {
    let layout = layout_network(&model(true), None, 400.0, 300.0);
    let svg = render_network_svg(&layout, &SvgRenderOptions::default()).unwrap();
    assert!(svg.starts_with("<svg id=\"opstudio\""));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"<marker id="opstudio-arrow""#));
    assert!(svg.contains(r#"marker-end="url(#opstudio-arrow)""#));
    assert!(svg.contains(r#"viewBox="0 0 400 300""#));
    assert!(svg.contains("B &amp; C"));
    assert!(svg.contains(r#">2.5</text>"#));
}

#[test]
fn undirected_networks_have_no_markers() {
    let layout = layout_network(&model(false), None, 400.0, 300.0);
    let options = SvgRenderOptions {
        diagram_id: Some("net".to_string()),
        edge_labels: false,
        ..SvgRenderOptions::default()
    };
    let svg = render_network_svg(&layout, &options).unwrap();
    assert!(!svg.contains("<marker"));
    assert!(!svg.contains("edge-label\" x"));
    assert!(svg.contains(r#"<svg id="net""#));
}

#[test]
fn node_groups_carry_element_ids() {
    let layout = layout_network(&model(true), None, 400.0, 300.0);
    let svg = render_network_svg(&layout, &SvgRenderOptions::default()).unwrap();
    assert!(svg.contains(r#"<g id="opstudio-node-A" class="node" data-node="A""#));
    assert!(svg.contains(r#"id="opstudio-node-B-C""#));
    assert!(svg.contains(r#"data-node="B &amp; C""#));
}

#[test]
fn id_tokens_keep_word_characters() {
    assert_eq!(id_token("max flow #1", "net"), "max-flow-1");
    assert_eq!(id_token("--s->t--", "net"), "s-t");
    assert_eq!(id_token("node_1", "net"), "node_1");
    assert_eq!(id_token("42", "n"), "n-42");
    assert_eq!(id_token("_x", "n"), "n-_x");
    assert_eq!(id_token(" & ", "n"), "n-untitled");
    assert_eq!(node_element_id("flow", "Depot 3"), "flow-node-Depot-3");
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let layout = layout_network(&model(true), None, 0.0, 300.0);
    assert!(matches!(
        render_network_svg(&layout, &SvgRenderOptions::default()),
        Err(Error::InvalidCanvas { .. })
    ));
}

#[test]
fn edge_labels_prefer_flow_over_capacity() {
    let mut layout = layout_network(&model(true), None, 400.0, 300.0);
    let edge = &mut layout.edges[0];
    edge.weight = None;
    edge.capacity = Some(5.0);
    assert_eq!(edge_label(edge).as_deref(), Some("cap 5"));
    edge.flow = Some(3.0);
    edge.cost = Some(1.25);
    assert_eq!(edge_label(edge).as_deref(), Some("3/5 @1.25"));
    edge.capacity = None;
    edge.flow = None;
    edge.cost = None;
    assert_eq!(edge_label(edge), None);
}
