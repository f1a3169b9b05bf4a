use crate::network::path::parse_edge_keys;
use crate::*;

fn keys(raw: &[&str]) -> Vec<EdgeKey> {
    parse_edge_keys(raw)
}

#[test]
fn walks_a_directed_chain() {
    let edges = keys(&["A->B", "B->C", "C->D"]);
    assert_eq!(
        reconstruct_path(&edges, "A", "D", true),
        vec!["A", "B", "C", "D"]
    );
}

#[test]
fn disconnected_edges_yield_nothing() {
    let edges = keys(&["A->B", "C->D"]);
    assert!(reconstruct_path(&edges, "A", "D", true).is_empty());
}

#[test]
fn edge_order_does_not_matter_for_a_simple_chain() {
    let edges = keys(&["C->D", "A->B", "B->C"]);
    assert_eq!(
        reconstruct_path(&edges, "A", "D", true),
        vec!["A", "B", "C", "D"]
    );
}

#[test]
fn undirected_walk_follows_reversed_keys() {
    let edges = keys(&["B->A", "C->B"]);
    assert!(reconstruct_path(&edges, "A", "C", true).is_empty());
    assert_eq!(reconstruct_path(&edges, "A", "C", false), vec!["A", "B", "C"]);
}

#[test]
fn greedy_choice_can_miss_the_target() {
    // first neighbor of A is the dead end X
    let edges = keys(&["A->X", "A->B", "B->T"]);
    assert!(reconstruct_path(&edges, "A", "T", true).is_empty());
}

#[test]
fn source_equal_to_target_is_a_single_node_path() {
    assert_eq!(reconstruct_path(&Vec::<EdgeKey>::new(), "A", "A", true), vec!["A"]);
    assert!(reconstruct_path(&keys(&["A->B"]), "", "B", true).is_empty());
}

#[test]
fn malformed_keys_are_skipped() {
    assert_eq!(keys(&["A->B", "oops", "->C", "B→C"]).len(), 2);
}

#[test]
fn display_falls_back_to_raw_edges() {
    let edges = keys(&["A->B", "C->D"]);
    assert_eq!(
        PathDisplay::from_edges(edges.clone(), "A", "D", true),
        PathDisplay::RawEdges(edges)
    );
    assert_eq!(
        PathDisplay::from_edges(keys(&["A->B"]), "A", "B", true),
        PathDisplay::Path(vec!["A".to_string(), "B".to_string()])
    );
}
