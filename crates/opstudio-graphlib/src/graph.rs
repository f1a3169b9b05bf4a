use crate::EdgeKey;
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy)]
pub struct GraphOptions {
    pub directed: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { directed: true }
    }
}

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: EdgeKey,
    label: E,
}

/// Insertion-ordered graph with one edge per endpoint pair.
///
/// For undirected graphs the edge index stores a canonical (sorted) key, so `v -> w` and `w -> v`
/// address the same edge. Each node keeps the indices of its incident edges in insertion order.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    options: GraphOptions,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,

    out_adj: Vec<Vec<usize>>,
    in_adj: Vec<Vec<usize>>,
}

impl<N, E> Graph<N, E> {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            out_adj: Vec::new(),
            in_adj: Vec::new(),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    fn canonical_key(&self, v: &str, w: &str) -> EdgeKey {
        if self.options.directed || v <= w {
            EdgeKey::new(v, w)
        } else {
            EdgeKey::new(w, v)
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        self.node_index.insert(id, idx);
        self
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge keys in insertion order. Undirected graphs report the canonical orientation.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_index.contains_key(&self.canonical_key(v, w))
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&E> {
        self.edge_index
            .get(&self.canonical_key(v, w))
            .map(|&idx| &self.edges[idx].label)
    }

    pub fn edge_mut(&mut self, v: &str, w: &str) -> Option<&mut E> {
        let key = self.canonical_key(v, w);
        self.edge_index
            .get(&key)
            .copied()
            .map(move |idx| &mut self.edges[idx].label)
    }

    fn node_idx(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    fn other_end<'a>(&'a self, edge_idx: usize, from: &str) -> &'a str {
        let key = &self.edges[edge_idx].key;
        if key.v == from { &key.w } else { &key.v }
    }

    /// Nodes reachable over one edge from `v`, in edge insertion order.
    ///
    /// Undirected graphs treat every incident edge as outgoing.
    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(idx) = self.node_idx(v) else {
            return Vec::new();
        };
        self.out_adj[idx]
            .iter()
            .map(|&e| self.other_end(e, v))
            .collect()
    }

    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(idx) = self.node_idx(v) else {
            return Vec::new();
        };
        self.in_adj[idx]
            .iter()
            .map(|&e| self.other_end(e, v))
            .collect()
    }

    pub fn neighbors(&self, v: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for n in self.successors(v).into_iter().chain(self.predecessors(v)) {
            if !out.contains(&n) {
                out.push(n);
            }
        }
        out
    }
}

impl<N: Default, E> Graph<N, E> {
    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        self.set_node(id, N::default())
    }

    /// Inserts `v -> w`, or replaces the label of the existing edge between them.
    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        let v = v.into();
        let w = w.into();
        self.ensure_node(v.clone());
        self.ensure_node(w.clone());

        let key = self.canonical_key(&v, &w);
        if let Some(&idx) = self.edge_index.get(&key) {
            self.edges[idx].label = label;
            return self;
        }

        let idx = self.edges.len();
        let (Some(v_idx), Some(w_idx)) = (self.node_idx(&v), self.node_idx(&w)) else {
            return self;
        };
        self.out_adj[v_idx].push(idx);
        self.in_adj[w_idx].push(idx);
        if !self.options.directed && v_idx != w_idx {
            self.out_adj[w_idx].push(idx);
            self.in_adj[v_idx].push(idx);
        }
        self.edges.push(EdgeEntry {
            key: key.clone(),
            label,
        });
        self.edge_index.insert(key, idx);
        self
    }
}

impl<N: Default, E: Default> Graph<N, E> {
    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_with_label(v, w, E::default())
    }

    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn extend_keys<I: IntoIterator<Item = EdgeKey>>(&mut self, keys: I) -> &mut Self {
        for key in keys {
            self.set_edge(key.v, key.w);
        }
        self
    }
}

impl<N: Default, E: Default> FromIterator<EdgeKey> for Graph<N, E> {
    /// Builds a directed graph from edge keys. Use [`Graph::extend_keys`] for undirected graphs.
    fn from_iter<I: IntoIterator<Item = EdgeKey>>(iter: I) -> Self {
        let mut g = Graph::new(GraphOptions::default());
        g.extend_keys(iter);
        g
    }
}
