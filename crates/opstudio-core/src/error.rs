use crate::network::NetworkMethod;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{dimension} must be at least 1 (requested {requested})")]
    ShapeInvariant {
        dimension: &'static str,
        requested: usize,
    },

    #[error("ragged {dimension}: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        dimension: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{dimension} index {index} is out of bounds (len {len})")]
    OutOfBounds {
        dimension: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{method}: {rule}")]
    MethodValidation {
        method: NetworkMethod,
        field: String,
        rule: String,
    },

    #[error("cannot parse {field} value {text:?}{}", cell_suffix(.row, .col))]
    CellParse {
        field: &'static str,
        row: Option<usize>,
        col: Option<usize>,
        text: String,
    },

    #[error("unknown {kind} {name:?}")]
    UnknownName { kind: &'static str, name: String },

    #[error("cannot project a {response} response against a {request} request")]
    KindMismatch {
        request: crate::ModelKind,
        response: crate::ModelKind,
    },

    #[error("malformed {kind} body: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn method(
        method: NetworkMethod,
        field: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self::MethodValidation {
            method,
            field: field.into(),
            rule: rule.into(),
        }
    }
}

fn cell_suffix(row: &Option<usize>, col: &Option<usize>) -> String {
    match (*row, *col) {
        (Some(r), Some(c)) => format!(" at row {}, column {}", r + 1, c + 1),
        (Some(r), None) => format!(" at position {}", r + 1),
        (None, Some(c)) => format!(" at position {}", c + 1),
        (None, None) => String::new(),
    }
}
