use crate::network::split_node_text;
use crate::*;
use serde_json::json;

fn flow_draft(capacity: &str) -> NetworkDraft {
    NetworkDraft {
        nodes: "s, a\nt".to_string(),
        edges: vec![
            EdgeDraft::new("s", "a").capacity(capacity),
            EdgeDraft::new("a", "t").capacity("5"),
        ],
        method: NetworkMethod::MaxFlow,
        source: "s".to_string(),
        sink: "t".to_string(),
        ..NetworkDraft::default()
    }
}

#[test]
fn node_text_splits_on_commas_and_newlines() {
    assert_eq!(
        split_node_text(" A, B\n\nC ,, A "),
        vec!["A", "B", "C", "A"]
    );
    assert!(split_node_text(" \n , ").is_empty());
}

#[test]
fn max_flow_rejects_zero_capacity() {
    let err = flow_draft("0").build().unwrap_err();
    match err {
        Error::MethodValidation {
            method,
            field,
            rule,
        } => {
            assert_eq!(method, NetworkMethod::MaxFlow);
            assert_eq!(field, "edges[0]");
            assert_eq!(rule, "edge 1 (s->a) needs a capacity > 0");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn max_flow_with_positive_capacity_builds() {
    let req = flow_draft("5").build().unwrap();
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({
            "method": "max_flow",
            "model": {
                "nodes": ["s", "a", "t"],
                "edges": [
                    { "u": "s", "v": "a", "capacity": 5.0 },
                    { "u": "a", "v": "t", "capacity": 5.0 }
                ],
                "directed": true,
                "source": "s",
                "sink": "t"
            }
        })
    );
}

#[test]
fn identical_drafts_serialize_identically() {
    let a = serde_json::to_string(&flow_draft("3").build().unwrap()).unwrap();
    let b = serde_json::to_string(&flow_draft("3").build().unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shortest_path_needs_endpoints_and_weights() {
    let mut draft = NetworkDraft {
        nodes: "A,B".to_string(),
        edges: vec![EdgeDraft::new("A", "B").weight("2")],
        target: "B".to_string(),
        ..NetworkDraft::default()
    };
    let err = draft.build().unwrap_err();
    assert_eq!(err.to_string(), "shortest_path: source is required");

    draft.source = " A ".to_string();
    draft.edges.push(EdgeDraft::new("B", "A").weight("abc"));
    let err = draft.build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "shortest_path: edge 2 (B->A) needs a numeric weight"
    );

    draft.edges.pop();
    let req = draft.build().unwrap();
    assert_eq!(req.model.source.as_deref(), Some("A"));
    assert_eq!(req.model.target.as_deref(), Some("B"));
    assert_eq!(req.model.sink, None);
}

#[test]
fn rows_without_endpoints_are_dropped_before_validation() {
    let draft = NetworkDraft {
        nodes: "A,B".to_string(),
        edges: vec![
            EdgeDraft::new("A", "B").weight("1"),
            EdgeDraft::new("  ", "B"),
            EdgeDraft::new("A", ""),
        ],
        method: NetworkMethod::MinimumSpanningTree,
        directed: false,
        ..NetworkDraft::default()
    };
    let req = draft.build().unwrap();
    assert_eq!(req.model.edges.len(), 1);
    assert_eq!(
        serde_json::to_value(&req.model).unwrap(),
        json!({
            "nodes": ["A", "B"],
            "edges": [{ "u": "A", "v": "B", "w": 1.0 }],
            "directed": false
        })
    );
}

#[test]
fn min_cost_flow_needs_demand_and_explicit_costs() {
    let mut draft = NetworkDraft {
        nodes: "s,t".to_string(),
        edges: vec![EdgeDraft::new("s", "t").capacity("4").cost("0")],
        method: NetworkMethod::MinCostFlow,
        source: "s".to_string(),
        sink: "t".to_string(),
        demand: "0".to_string(),
        ..NetworkDraft::default()
    };
    assert!(matches!(
        draft.build(),
        Err(Error::MethodValidation { ref field, .. }) if field == "demand"
    ));

    draft.demand = "3".to_string();
    let req = draft.build().unwrap();
    // a zero cost passes validation and is left to the solver default
    assert_eq!(
        serde_json::to_value(&req.model.edges).unwrap(),
        json!([{ "u": "s", "v": "t", "capacity": 4.0 }])
    );
    assert_eq!(req.model.demand, Some(3.0));

    draft.edges[0].cost = String::new();
    let err = draft.build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "min_cost_flow: edge 1 (s->t) needs an explicit cost (0 is allowed)"
    );
}

#[test]
fn fields_irrelevant_to_the_method_are_omitted() {
    let draft = NetworkDraft {
        nodes: "a,b".to_string(),
        edges: vec![EdgeDraft::new("a", "b").weight("2").capacity("9").cost("1")],
        method: NetworkMethod::ShortestPath,
        source: "a".to_string(),
        target: "b".to_string(),
        sink: "b".to_string(),
        demand: "4".to_string(),
        ..NetworkDraft::default()
    };
    let value = serde_json::to_value(draft.build().unwrap().model).unwrap();
    assert_eq!(value["edges"], json!([{ "u": "a", "v": "b", "w": 2.0 }]));
    assert!(value.get("sink").is_none());
    assert!(value.get("demand").is_none());
}

#[test]
fn diagnostics_flag_duplicates_and_unknown_endpoints() {
    let draft = NetworkDraft {
        nodes: "A,B,A".to_string(),
        edges: vec![EdgeDraft::new("A", "Z").weight("1")],
        method: NetworkMethod::MinimumSpanningTree,
        ..NetworkDraft::default()
    };
    let req = draft.build().unwrap();
    assert_eq!(req.model.nodes, vec!["A", "B", "A"]);
    assert_eq!(
        req.model.diagnostics(),
        vec![
            "duplicate node \"A\"".to_string(),
            "edge 1 (A->Z) references unknown node \"Z\"".to_string(),
        ]
    );
}

#[test]
fn drafts_load_from_json_with_numbers_or_text() {
    let draft: NetworkDraft = serde_json::from_value(json!({
        "nodes": ["s", "t"],
        "edges": [{ "u": "s", "v": "t", "w": 3, "capacity": "7" }],
        "method": "mst"
    }))
    .unwrap();
    assert_eq!(draft.nodes, "s\nt");
    assert_eq!(draft.edges[0].weight, "3");
    assert_eq!(draft.edges[0].capacity, "7");
    assert_eq!(draft.method, NetworkMethod::MinimumSpanningTree);
    assert!(draft.directed);
}

#[test]
fn method_names_accept_aliases() {
    assert_eq!(
        "MST".parse::<NetworkMethod>().unwrap(),
        NetworkMethod::MinimumSpanningTree
    );
    assert_eq!(
        "shortest".parse::<NetworkMethod>().unwrap(),
        NetworkMethod::ShortestPath
    );
    assert!("dijkstra".parse::<NetworkMethod>().is_err());
}

#[test]
fn spanning_tree_needs_a_numeric_weight_on_every_edge() {
    let mut draft = NetworkDraft {
        nodes: "A,B,C".to_string(),
        edges: vec![
            EdgeDraft::new("A", "B").weight("1"),
            EdgeDraft::new("B", "C").weight("abc"),
        ],
        method: NetworkMethod::MinimumSpanningTree,
        directed: false,
        ..NetworkDraft::default()
    };
    match draft.build().unwrap_err() {
        Error::MethodValidation {
            method,
            field,
            rule,
        } => {
            assert_eq!(method, NetworkMethod::MinimumSpanningTree);
            assert_eq!(field, "edges[1]");
            assert_eq!(rule, "edge 2 (B->C) needs a numeric weight");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    draft.edges[1] = EdgeDraft::new("B", "C").weight(" ");
    assert!(matches!(
        draft.build(),
        Err(Error::MethodValidation { ref field, .. }) if field == "edges[1]"
    ));

    draft.edges[1] = EdgeDraft::new("B", "C").weight("2.5");
    let req = draft.build().unwrap();
    assert_eq!(req.model.edges[1].weight, Some(2.5));
}
