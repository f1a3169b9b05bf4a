use std::collections::HashSet;

use opstudio_graphlib::{EdgeKey, Graph, GraphOptions};

/// Greedy source-to-target walk over a set of highlighted edges.
///
/// At each step the walk takes the first not-yet-visited neighbor in edge insertion order. It
/// stops at `target`, at a dead end, or once the path is longer than `edges.len() + 2` nodes.
/// Returns the node sequence when the walk ends exactly at `target`, otherwise an empty vector.
/// This is a heuristic: edge sets that branch before reaching the target can yield an empty path
/// even when some path exists.
pub fn reconstruct_path<'a, I>(edges: I, source: &str, target: &str, directed: bool) -> Vec<String>
where
    I: IntoIterator<Item = &'a EdgeKey>,
{
    if source.is_empty() || target.is_empty() {
        return Vec::new();
    }

    let mut g: Graph<(), ()> = Graph::new(GraphOptions { directed });
    let mut edge_count = 0usize;
    for key in edges {
        g.set_edge(key.v.as_str(), key.w.as_str());
        edge_count += 1;
    }

    let limit = edge_count + 2;
    let mut path = vec![source.to_string()];
    let mut visited: HashSet<&str> = HashSet::from([source]);
    let mut current = source;
    while current != target && path.len() <= limit {
        let Some(next) = g
            .successors(current)
            .into_iter()
            .find(|n| !visited.contains(n))
        else {
            break;
        };
        visited.insert(next);
        path.push(next.to_string());
        current = next;
    }

    if current == target {
        path
    } else {
        Vec::new()
    }
}

/// Parses `"u->v"` strings, skipping malformed ones.
pub fn parse_edge_keys<S: AsRef<str>>(raw: &[S]) -> Vec<EdgeKey> {
    raw.iter()
        .filter_map(|s| match s.as_ref().parse::<EdgeKey>() {
            Ok(key) => Some(key),
            Err(err) => {
                tracing::debug!(%err, "skipping highlighted edge");
                None
            }
        })
        .collect()
}

/// How a highlighted route is shown: as an ordered node path when one can be reconstructed,
/// otherwise as the raw edge list.
#[derive(Debug, Clone, PartialEq)]
pub enum PathDisplay {
    Path(Vec<String>),
    RawEdges(Vec<EdgeKey>),
}

impl PathDisplay {
    pub fn from_edges(edges: Vec<EdgeKey>, source: &str, target: &str, directed: bool) -> Self {
        let path = reconstruct_path(&edges, source, target, directed);
        if path.is_empty() {
            PathDisplay::RawEdges(edges)
        } else {
            PathDisplay::Path(path)
        }
    }
}
