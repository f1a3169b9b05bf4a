use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::grid::{self, Grid, parse_number};
use crate::models::cells::{text_list, text_rows};
use crate::wire::transport::{TransportMethod, TransportSolveRequest, TransportWireModel};

/// Text of the big-M penalty symbol on the wire.
pub const PENALTY_SYMBOL: &str = "M";

/// A unit shipping cost: a number, or the big-M penalty that forbids the route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostCell {
    Value(f64),
    Penalty,
}

impl Default for CostCell {
    fn default() -> Self {
        CostCell::Value(0.0)
    }
}

impl CostCell {
    pub fn is_penalty(self) -> bool {
        matches!(self, CostCell::Penalty)
    }

    /// Parses user text: a finite number, or `M` in either case. Blank text is zero.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case(PENALTY_SYMBOL) {
            return Some(CostCell::Penalty);
        }
        if trimmed.is_empty() {
            return Some(CostCell::Value(0.0));
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(CostCell::Value)
    }
}

impl fmt::Display for CostCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostCell::Value(v) => write!(f, "{v}"),
            CostCell::Penalty => f.write_str(PENALTY_SYMBOL),
        }
    }
}

impl Serialize for CostCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CostCell::Value(v) => serializer.serialize_f64(*v),
            CostCell::Penalty => serializer.serialize_str(PENALTY_SYMBOL),
        }
    }
}

impl<'de> Deserialize<'de> for CostCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CostCellVisitor;

        impl Visitor<'_> for CostCellVisitor {
            type Value = CostCell;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or \"M\"")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<CostCell, E> {
                Ok(CostCell::Value(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<CostCell, E> {
                Ok(CostCell::Value(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<CostCell, E> {
                Ok(CostCell::Value(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<CostCell, E> {
                CostCell::parse(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(CostCellVisitor)
    }
}

pub fn parse_cost_cell(text: &str, row: usize, col: usize) -> Result<CostCell> {
    CostCell::parse(text).ok_or_else(|| Error::CellParse {
        field: "cost",
        row: Some(row),
        col: Some(col),
        text: text.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportOptions {
    #[serde(default = "yes")]
    pub optimize: bool,
    #[serde(default = "yes")]
    pub compare_all: bool,
    #[serde(default = "yes")]
    pub trace: bool,
    #[serde(default = "default_trace_limit")]
    pub trace_limit: u32,
}

fn yes() -> bool {
    true
}

fn default_trace_limit() -> u32 {
    50
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            optimize: true,
            compare_all: true,
            trace: true,
            trace_limit: default_trace_limit(),
        }
    }
}

pub const DEFAULT_ORIGINS: usize = 3;
pub const DEFAULT_DESTINATIONS: usize = 3;

/// Transportation problem under edit: `supply` follows the cost rows (origins) and `demand`
/// follows the cost columns (destinations).
#[derive(Debug, Clone, PartialEq)]
pub struct TransportModel {
    costs: Grid<CostCell>,
    supply: Vec<f64>,
    demand: Vec<f64>,
    options: TransportOptions,
}

impl Default for TransportModel {
    fn default() -> Self {
        Self {
            costs: Grid::filled(DEFAULT_ORIGINS, DEFAULT_DESTINATIONS),
            supply: vec![0.0; DEFAULT_ORIGINS],
            demand: vec![0.0; DEFAULT_DESTINATIONS],
            options: TransportOptions::default(),
        }
    }
}

impl TransportModel {
    pub fn new(origins: usize, destinations: usize) -> Result<Self> {
        grid::check_dimension("origins", origins)?;
        grid::check_dimension("destinations", destinations)?;
        Ok(Self {
            costs: Grid::filled(origins, destinations),
            supply: vec![0.0; origins],
            demand: vec![0.0; destinations],
            options: TransportOptions::default(),
        })
    }

    pub fn from_wire(model: TransportWireModel, options: TransportOptions) -> Result<Self> {
        grid::check_dimension("origins", model.supply.len())?;
        grid::check_dimension("destinations", model.demand.len())?;
        if model.costs.len() != model.supply.len() {
            return Err(Error::RaggedRows {
                dimension: "cost rows",
                row: model.costs.len().min(model.supply.len()),
                expected: model.supply.len(),
                found: model.costs.len(),
            });
        }
        for (row, cells) in model.costs.iter().enumerate() {
            if cells.len() != model.demand.len() {
                return Err(Error::RaggedRows {
                    dimension: "cost columns",
                    row,
                    expected: model.demand.len(),
                    found: cells.len(),
                });
            }
        }
        Ok(Self {
            costs: Grid::from_rows(model.costs)?,
            supply: model.supply,
            demand: model.demand,
            options,
        })
    }

    pub fn costs(&self) -> &Grid<CostCell> {
        &self.costs
    }

    pub fn supply(&self) -> &[f64] {
        &self.supply
    }

    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    pub fn options(&self) -> TransportOptions {
        self.options
    }

    pub fn origin_count(&self) -> usize {
        self.supply.len()
    }

    pub fn destination_count(&self) -> usize {
        self.demand.len()
    }

    pub fn total_supply(&self) -> f64 {
        self.supply.iter().sum()
    }

    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }

    /// Whether supply equals demand; otherwise the solver adds a dummy origin or destination.
    pub fn is_balanced(&self) -> bool {
        (self.total_supply() - self.total_demand()).abs() < 1e-8
    }

    pub fn resize_origins(&mut self, n: usize) -> Result<()> {
        grid::check_dimension("origins", n)?;
        self.costs.resize_rows(n)?;
        grid::resize_vector(&mut self.supply, n, 0.0, "origins")
    }

    pub fn resize_destinations(&mut self, m: usize) -> Result<()> {
        grid::check_dimension("destinations", m)?;
        self.costs.resize_cols(m)?;
        grid::resize_vector(&mut self.demand, m, 0.0, "destinations")
    }

    pub fn set_cost(&mut self, i: usize, j: usize, cell: CostCell) -> Result<()> {
        self.costs.set_cell(i, j, cell)
    }

    pub fn set_cost_text(&mut self, i: usize, j: usize, text: &str) -> Result<()> {
        let cell = parse_cost_cell(text, i, j)?;
        self.set_cost(i, j, cell)
    }

    pub fn set_supply(&mut self, i: usize, value: f64) -> Result<()> {
        grid::set_vector(&mut self.supply, i, value, "origin")
    }

    pub fn set_demand(&mut self, j: usize, value: f64) -> Result<()> {
        grid::set_vector(&mut self.demand, j, value, "destination")
    }

    pub fn set_supply_text(&mut self, i: usize, text: &str) -> Result<()> {
        let value = parse_number(text, "supply", Some(i), None)?;
        self.set_supply(i, value)
    }

    pub fn set_demand_text(&mut self, j: usize, text: &str) -> Result<()> {
        let value = parse_number(text, "demand", None, Some(j))?;
        self.set_demand(j, value)
    }

    pub fn set_optimize(&mut self, optimize: bool) {
        self.options.optimize = optimize;
    }

    pub fn set_options(&mut self, options: TransportOptions) {
        self.options = options;
    }

    /// Snapshot in the compare-all request shape.
    pub fn to_request(&self) -> TransportSolveRequest {
        TransportSolveRequest {
            method: TransportMethod::Compare,
            model: TransportWireModel {
                name: None,
                supply: self.supply.clone(),
                demand: self.demand.clone(),
                costs: self.costs.rows().to_vec(),
                origins: None,
                destinations: None,
            },
            options: self.options,
        }
    }
}

/// Transportation inputs as typed. Cells stay text until [`TransportDraft::build`] parses them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransportDraft {
    #[serde(default)]
    pub model: TransportDraftModel,
    /// When absent, the options passed to `build` apply.
    #[serde(default)]
    pub options: Option<TransportOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransportDraftModel {
    #[serde(default, deserialize_with = "text_list")]
    pub supply: Vec<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub demand: Vec<String>,
    #[serde(default, deserialize_with = "text_rows")]
    pub costs: Vec<Vec<String>>,
}

impl TransportDraft {
    pub fn build(&self, default_options: TransportOptions) -> Result<TransportModel> {
        let TransportDraftModel {
            supply,
            demand,
            costs,
        } = &self.model;
        let mut model = TransportModel::new(supply.len(), demand.len())?;
        if costs.len() != supply.len() {
            return Err(Error::RaggedRows {
                dimension: "cost rows",
                row: costs.len().min(supply.len()),
                expected: supply.len(),
                found: costs.len(),
            });
        }
        for (i, row) in costs.iter().enumerate() {
            if row.len() != demand.len() {
                return Err(Error::RaggedRows {
                    dimension: "cost columns",
                    row: i,
                    expected: demand.len(),
                    found: row.len(),
                });
            }
            for (j, text) in row.iter().enumerate() {
                model.set_cost_text(i, j, text)?;
            }
        }
        for (i, text) in supply.iter().enumerate() {
            model.set_supply_text(i, text)?;
        }
        for (j, text) in demand.iter().enumerate() {
            model.set_demand_text(j, text)?;
        }
        model.set_options(self.options.unwrap_or(default_options));
        Ok(model)
    }
}
