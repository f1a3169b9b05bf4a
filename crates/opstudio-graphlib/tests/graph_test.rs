use opstudio_graphlib::{EdgeKey, Graph, GraphOptions};

#[test]
fn directed_successors_follow_insertion_order() {
    let mut g: Graph<(), ()> = Graph::new(GraphOptions::default());
    g.set_edge("a", "c");
    g.set_edge("a", "b");
    g.set_edge("b", "a");

    assert_eq!(g.successors("a"), vec!["c", "b"]);
    assert_eq!(g.predecessors("a"), vec!["b"]);
    assert_eq!(g.successors("c"), Vec::<&str>::new());
    assert!(g.has_edge("a", "b"));
    assert!(g.has_edge("b", "a"));
    assert!(!g.has_edge("c", "a"));
}

#[test]
fn undirected_edges_are_symmetric() {
    let mut g: Graph<(), i32> = Graph::new(GraphOptions { directed: false });
    g.set_edge_with_label("b", "a", 7);

    assert!(g.has_edge("a", "b"));
    assert!(g.has_edge("b", "a"));
    assert_eq!(g.edge("a", "b"), Some(&7));
    assert_eq!(g.edge("b", "a"), Some(&7));
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn undirected_successors_include_both_directions_in_insertion_order() {
    let mut g: Graph<(), ()> = Graph::new(GraphOptions { directed: false });
    g.set_edge("b", "c");
    g.set_edge("a", "b");

    assert_eq!(g.successors("b"), vec!["c", "a"]);
    assert_eq!(g.successors("a"), vec!["b"]);
    assert_eq!(g.neighbors("b"), vec!["c", "a"]);
}

#[test]
fn setting_an_existing_edge_replaces_its_label() {
    let mut g: Graph<(), f64> = Graph::new(GraphOptions::default());
    g.set_edge_with_label("s", "t", 1.0);
    g.set_edge_with_label("s", "t", 4.5);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge("s", "t"), Some(&4.5));

    if let Some(flow) = g.edge_mut("s", "t") {
        *flow += 1.0;
    }
    assert_eq!(g.edge("s", "t"), Some(&5.5));
}

#[test]
fn nodes_keep_first_insertion_position() {
    let mut g: Graph<u32, ()> = Graph::new(GraphOptions::default());
    g.set_node("x", 1);
    g.set_path(&["a", "x", "b"]);
    g.set_node("x", 2);

    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["x", "a", "b"]);
    assert_eq!(g.node("x"), Some(&2));
    assert_eq!(g.node_count(), 3);
}

#[test]
fn collects_from_edge_keys() {
    let g: Graph<(), ()> = ["A->B", "B->C"]
        .iter()
        .map(|s| s.parse::<EdgeKey>().unwrap())
        .collect();
    assert!(g.is_directed());
    assert_eq!(g.successors("B"), vec!["C"]);
    assert_eq!(
        g.edges().map(|k| k.to_string()).collect::<Vec<_>>(),
        vec!["A->B", "B->C"]
    );
}
