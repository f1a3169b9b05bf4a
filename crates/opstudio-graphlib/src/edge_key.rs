use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A directed edge instance `v -> w`.
///
/// Solvers report highlighted edges as `"u->v"` strings even when the model is undirected; the
/// key always records the direction it was reported with.
#[derive(Debug, Clone)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
}

impl EdgeKey {
    pub fn new(v: impl Into<String>, w: impl Into<String>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            v: self.w.clone(),
            w: self.v.clone(),
        }
    }
}

impl PartialEq for EdgeKey {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v && self.w == other.w
    }
}

impl Eq for EdgeKey {}

impl Hash for EdgeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.v.hash(state);
        self.w.hash(state);
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.v, self.w)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeKeyParseError {
    pub raw: String,
}

impl fmt::Display for EdgeKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid edge key: {:?} (expected \"u->v\")", self.raw)
    }
}

impl std::error::Error for EdgeKeyParseError {}

impl FromStr for EdgeKey {
    type Err = EdgeKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || EdgeKeyParseError { raw: s.to_string() };
        let (v, w) = s
            .split_once("->")
            .or_else(|| s.split_once('→'))
            .ok_or_else(err)?;
        let (v, w) = (v.trim(), w.trim());
        if v.is_empty() || w.is_empty() {
            return Err(err());
        }
        Ok(Self::new(v, w))
    }
}
