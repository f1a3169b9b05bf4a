//! Rectangular cell storage with shape-preserving resizes.

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A row-major grid whose rows always share one length.
///
/// Both dimensions are at least 1. Resizing keeps the overlapping top-left block untouched, fills
/// new cells with `T::default()`, and drops cells that fall outside the new shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
    cols: usize,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimension("rows", rows)?;
        check_dimension("columns", cols)?;
        Ok(Self {
            rows: vec![vec![T::default(); cols]; rows],
            cols,
        })
    }

    /// Zero-filled grid of a shape the caller has already checked.
    pub(crate) fn filled(rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        Self {
            rows: vec![vec![T::default(); cols]; rows],
            cols,
        }
    }

    /// Builds a grid from explicit rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        check_dimension("rows", rows.len())?;
        let cols = rows[0].len();
        check_dimension("columns", cols)?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(Error::RaggedRows {
                    dimension: "grid",
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
        }
        Ok(Self { rows, cols })
    }

    pub fn resize_rows(&mut self, n: usize) -> Result<()> {
        check_dimension("rows", n)?;
        if n < self.rows.len() {
            tracing::debug!(from = self.rows.len(), to = n, "truncating grid rows");
        }
        let cols = self.cols;
        self.rows.resize_with(n, || vec![T::default(); cols]);
        Ok(())
    }

    pub fn resize_cols(&mut self, m: usize) -> Result<()> {
        check_dimension("columns", m)?;
        if m < self.cols {
            tracing::debug!(from = self.cols, to = m, "truncating grid columns");
        }
        for row in &mut self.rows {
            row.resize(m, T::default());
        }
        self.cols = m;
        Ok(())
    }
}

impl<T> Grid<T> {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> Option<&[T]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.rows.get(i)?.get(j)
    }

    pub fn set_cell(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        let rows = self.rows.len();
        let cols = self.cols;
        let row = self.rows.get_mut(i).ok_or(Error::OutOfBounds {
            dimension: "row",
            index: i,
            len: rows,
        })?;
        let cell = row.get_mut(j).ok_or(Error::OutOfBounds {
            dimension: "column",
            index: j,
            len: cols,
        })?;
        *cell = value;
        Ok(())
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
            cols: self.cols,
        }
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }
}

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

/// Resizes a companion vector that shares a dimension with a grid.
pub fn resize_vector<T: Clone>(
    values: &mut Vec<T>,
    n: usize,
    fill: T,
    dimension: &'static str,
) -> Result<()> {
    check_dimension(dimension, n)?;
    values.resize(n, fill);
    Ok(())
}

pub fn set_vector<T>(values: &mut [T], k: usize, value: T, dimension: &'static str) -> Result<()> {
    let len = values.len();
    let slot = values.get_mut(k).ok_or(Error::OutOfBounds {
        dimension,
        index: k,
        len,
    })?;
    *slot = value;
    Ok(())
}

pub(crate) fn check_dimension(dimension: &'static str, requested: usize) -> Result<()> {
    if requested < 1 {
        return Err(Error::ShapeInvariant {
            dimension,
            requested,
        });
    }
    Ok(())
}

/// Parses a numeric cell as typed by a user. Blank text is zero.
pub fn parse_number(
    text: &str,
    field: &'static str,
    row: Option<usize>,
    col: Option<usize>,
) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::CellParse {
            field,
            row,
            col,
            text: text.to_string(),
        }),
    }
}
