use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn distance_to(&self, other: &LayoutPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLayout {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLayout {
    /// Wire key `u->v`.
    pub key: String,
    pub u: String,
    pub v: String,
    pub from: LayoutPoint,
    pub to: LayoutPoint,
    pub highlighted: bool,
    pub weight: Option<f64>,
    pub capacity: Option<f64>,
    pub cost: Option<f64>,
    pub flow: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkLayout {
    pub width: f64,
    pub height: f64,
    pub directed: bool,
    pub nodes: Vec<NodeLayout>,
    pub edges: Vec<EdgeLayout>,
}
