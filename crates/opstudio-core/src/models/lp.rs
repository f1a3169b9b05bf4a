use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::{self, Grid, parse_number};
use crate::models::cells::{text_field, text_list};
use crate::wire::lp::{LpSolveRequest, LpWireConstraint, LpWireModel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    #[default]
    #[serde(rename = "max", alias = "maximize", alias = "MAX")]
    Max,
    #[serde(rename = "min", alias = "minimize", alias = "MIN")]
    Min,
}

/// Constraint relation. Serialized with the ASCII spellings the solver expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    #[default]
    #[serde(rename = "<=", alias = "≤")]
    Le,
    #[serde(rename = ">=", alias = "≥")]
    Ge,
    #[serde(rename = "=", alias = "==")]
    Eq,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Le => "<=",
            Relation::Ge => ">=",
            Relation::Eq => "=",
        }
    }

    /// Prefix of the auxiliary column this relation introduces: slack, excess (surplus) or
    /// artificial.
    pub fn auxiliary_prefix(self) -> char {
        match self {
            Relation::Le => 's',
            Relation::Ge => 'e',
            Relation::Eq => 'r',
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LpMethod {
    #[default]
    Auto,
    Simplex,
    TwoPhase,
    BigM,
    Dual,
}

/// Linear program under edit.
///
/// `objective` has one entry per variable (matrix column); `operators` and `rhs` have one entry per
/// constraint (matrix row). Every resize moves the companion vectors together with the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct LpModel {
    name: String,
    sense: Sense,
    method: LpMethod,
    objective: Vec<f64>,
    coefficients: Grid<f64>,
    operators: Vec<Relation>,
    rhs: Vec<f64>,
}

pub const DEFAULT_NAME: &str = "LP_demo";
pub const DEFAULT_VARIABLES: usize = 2;
pub const DEFAULT_CONSTRAINTS: usize = 3;

impl Default for LpModel {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            sense: Sense::Max,
            method: LpMethod::Auto,
            objective: vec![0.0; DEFAULT_VARIABLES],
            coefficients: Grid::filled(DEFAULT_CONSTRAINTS, DEFAULT_VARIABLES),
            operators: vec![Relation::Le; DEFAULT_CONSTRAINTS],
            rhs: vec![0.0; DEFAULT_CONSTRAINTS],
        }
    }
}

impl LpModel {
    pub fn new(variables: usize, constraints: usize) -> Result<Self> {
        grid::check_dimension("variables", variables)?;
        grid::check_dimension("constraints", constraints)?;
        Ok(Self {
            name: DEFAULT_NAME.to_string(),
            sense: Sense::Max,
            method: LpMethod::Auto,
            objective: vec![0.0; variables],
            coefficients: Grid::filled(constraints, variables),
            operators: vec![Relation::Le; constraints],
            rhs: vec![0.0; constraints],
        })
    }

    /// Rebuilds editable state from a request body, e.g. a saved draft.
    pub fn from_request(request: LpSolveRequest) -> Result<Self> {
        let LpSolveRequest { model, method } = request;
        let variables = model.c.len();
        grid::check_dimension("variables", variables)?;
        grid::check_dimension("constraints", model.constraints.len())?;

        let mut rows = Vec::with_capacity(model.constraints.len());
        let mut operators = Vec::with_capacity(model.constraints.len());
        let mut rhs = Vec::with_capacity(model.constraints.len());
        for (row, constraint) in model.constraints.into_iter().enumerate() {
            if constraint.a.len() != variables {
                return Err(Error::RaggedRows {
                    dimension: "constraint coefficients",
                    row,
                    expected: variables,
                    found: constraint.a.len(),
                });
            }
            rows.push(constraint.a);
            operators.push(constraint.op);
            rhs.push(constraint.b);
        }

        Ok(Self {
            name: model.name,
            sense: model.sense,
            method,
            objective: model.c,
            coefficients: Grid::from_rows(rows)?,
            operators,
            rhs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn method(&self) -> LpMethod {
        self.method
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn coefficients(&self) -> &Grid<f64> {
        &self.coefficients
    }

    pub fn operators(&self) -> &[Relation] {
        &self.operators
    }

    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    pub fn variable_count(&self) -> usize {
        self.objective.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.rhs.len()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_sense(&mut self, sense: Sense) {
        self.sense = sense;
    }

    pub fn set_method(&mut self, method: LpMethod) {
        self.method = method;
    }

    /// Resizes the variable dimension: objective and every coefficient row.
    pub fn resize_variables(&mut self, n: usize) -> Result<()> {
        grid::check_dimension("variables", n)?;
        self.coefficients.resize_cols(n)?;
        grid::resize_vector(&mut self.objective, n, 0.0, "variables")
    }

    /// Resizes the constraint dimension: coefficient rows, operators (new ones `<=`) and rhs.
    pub fn resize_constraints(&mut self, m: usize) -> Result<()> {
        grid::check_dimension("constraints", m)?;
        self.coefficients.resize_rows(m)?;
        grid::resize_vector(&mut self.operators, m, Relation::Le, "constraints")?;
        grid::resize_vector(&mut self.rhs, m, 0.0, "constraints")
    }

    pub fn set_objective(&mut self, j: usize, value: f64) -> Result<()> {
        grid::set_vector(&mut self.objective, j, value, "variable")
    }

    pub fn set_coefficient(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        self.coefficients.set_cell(i, j, value)
    }

    pub fn set_operator(&mut self, i: usize, op: Relation) -> Result<()> {
        grid::set_vector(&mut self.operators, i, op, "constraint")
    }

    pub fn set_rhs(&mut self, i: usize, value: f64) -> Result<()> {
        grid::set_vector(&mut self.rhs, i, value, "constraint")
    }

    pub fn set_objective_text(&mut self, j: usize, text: &str) -> Result<()> {
        let value = parse_number(text, "objective", None, Some(j))?;
        self.set_objective(j, value)
    }

    pub fn set_coefficient_text(&mut self, i: usize, j: usize, text: &str) -> Result<()> {
        let value = parse_number(text, "coefficient", Some(i), Some(j))?;
        self.set_coefficient(i, j, value)
    }

    pub fn set_rhs_text(&mut self, i: usize, text: &str) -> Result<()> {
        let value = parse_number(text, "rhs", Some(i), None)?;
        self.set_rhs(i, value)
    }

    /// Snapshot of the current state in the solver's request shape.
    pub fn to_request(&self) -> LpSolveRequest {
        let constraints = self
            .coefficients
            .rows()
            .iter()
            .zip(&self.operators)
            .zip(&self.rhs)
            .map(|((a, op), b)| LpWireConstraint {
                a: a.clone(),
                op: *op,
                b: *b,
            })
            .collect();
        LpSolveRequest {
            model: LpWireModel {
                name: self.name.clone(),
                sense: self.sense,
                c: self.objective.clone(),
                constraints,
            },
            method: self.method,
        }
    }
}

/// LP inputs as typed, in the request shape. Numeric cells stay text until [`LpDraft::build`]
/// parses them, so a bad cell is reported by position.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LpDraft {
    #[serde(default)]
    pub model: LpDraftModel,
    #[serde(default)]
    pub method: LpMethod,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LpDraftModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sense: Sense,
    #[serde(default, deserialize_with = "text_list")]
    pub c: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<LpDraftConstraint>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LpDraftConstraint {
    #[serde(default, deserialize_with = "text_list")]
    pub a: Vec<String>,
    #[serde(default)]
    pub op: Relation,
    #[serde(default, deserialize_with = "text_field")]
    pub b: String,
}

impl LpDraft {
    pub fn build(&self) -> Result<LpModel> {
        let variables = self.model.c.len();
        let mut model = LpModel::new(variables, self.model.constraints.len())?;
        if !self.model.name.trim().is_empty() {
            model.set_name(self.model.name.trim());
        }
        model.set_sense(self.model.sense);
        model.set_method(self.method);

        for (j, text) in self.model.c.iter().enumerate() {
            model.set_objective_text(j, text)?;
        }
        for (i, constraint) in self.model.constraints.iter().enumerate() {
            if constraint.a.len() != variables {
                return Err(Error::RaggedRows {
                    dimension: "constraint coefficients",
                    row: i,
                    expected: variables,
                    found: constraint.a.len(),
                });
            }
            for (j, text) in constraint.a.iter().enumerate() {
                model.set_coefficient_text(i, j, text)?;
            }
            model.set_operator(i, constraint.op)?;
            model.set_rhs_text(i, &constraint.b)?;
        }
        Ok(model)
    }
}
