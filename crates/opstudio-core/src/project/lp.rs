use serde::Serialize;

use crate::ModelKind;
use crate::models::lp::Relation;
use crate::project::{DisplayResult, NamedValue, named_values};
use crate::wire::lp::{
    LpSolveRequest, LpSolveResponse, TableauHistoryGroup, TableauHistoryItem, VarRef,
};

pub const OBJECTIVE_ROW_LABEL: &str = "Z";
pub const PHASE_TWO_PREP_LABEL: &str = "Phase-II preparation";
const DEFAULT_HISTORY_LABEL: &str = "Iterations";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableauView {
    /// Headers of the coefficient columns; the trailing right-hand side column is implicit.
    pub columns: Vec<String>,
    pub rows: Vec<TableauRowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableauRowView {
    pub label: String,
    pub cells: Vec<Option<f64>>,
    pub rhs: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryGroupView {
    pub label: String,
    pub steps: Vec<HistoryStepView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryStepView {
    pub label: String,
    pub iteration: u64,
    pub entering: Option<String>,
    pub leaving: Option<String>,
    pub row_ops: Vec<String>,
    pub tableau: TableauView,
}

/// Auxiliary variable name for constraint `i` (0-based): `s{i+1}`, `e{i+1}` or `r{i+1}`.
pub fn slack_label(i: usize, op: Relation) -> String {
    format!("{}{}", op.auxiliary_prefix(), i + 1)
}

/// Label of tableau row `row`.
///
/// Row 0 is the objective. Other rows look up their basis column in `var_names`; without basis
/// indices the basic-variable list is read by position. Anything unresolved is `R{row}`.
pub fn row_label(
    row: usize,
    var_names: &[String],
    basis: Option<&[i64]>,
    basic_vars: Option<&[String]>,
) -> String {
    if row == 0 {
        return OBJECTIVE_ROW_LABEL.to_string();
    }
    let fallback = || format!("R{row}");
    match basis {
        Some(basis) => basis
            .get(row - 1)
            .and_then(|&idx| usize::try_from(idx).ok())
            .and_then(|idx| var_names.get(idx))
            .cloned()
            .unwrap_or_else(fallback),
        None => basic_vars
            .and_then(|names| names.get(row - 1))
            .filter(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(fallback),
    }
}

/// Splits raw tableau rows into labeled cells and right-hand side. The objective row's
/// right-hand side is shown negated.
pub fn project_tableau(
    rows: &[Vec<Option<f64>>],
    var_names: &[String],
    basis: Option<&[i64]>,
    basic_vars: Option<&[String]>,
) -> TableauView {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let columns = (0..width.saturating_sub(1))
        .map(|j| {
            var_names
                .get(j)
                .cloned()
                .unwrap_or_else(|| format!("c{}", j + 1))
        })
        .collect();

    let rows = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let (cells, rhs) = match row.split_last() {
                Some((last, rest)) => (rest.to_vec(), *last),
                None => (Vec::new(), None),
            };
            TableauRowView {
                label: row_label(i, var_names, basis, basic_vars),
                cells,
                rhs: if i == 0 { rhs.map(|v| -v) } else { rhs },
            }
        })
        .collect();

    TableauView { columns, rows }
}

fn step_label(item: &TableauHistoryItem) -> String {
    let has_row_ops = item.row_ops.as_ref().is_some_and(|ops| !ops.is_empty());
    if item.iter == 0 && has_row_ops {
        PHASE_TWO_PREP_LABEL.to_string()
    } else {
        format!("Iteration {}", item.iter)
    }
}

fn var_ref_name(var: &VarRef, var_names: &[String]) -> String {
    match var {
        VarRef::Name(name) => name.clone(),
        VarRef::Index(idx) => usize::try_from(*idx)
            .ok()
            .and_then(|i| var_names.get(i))
            .cloned()
            .unwrap_or_else(|| format!("#{idx}")),
    }
}

fn project_group(group: &TableauHistoryGroup, fallback_names: &[String]) -> HistoryGroupView {
    let var_names = group.var_names.as_deref().unwrap_or(fallback_names);
    let steps = group
        .items
        .iter()
        .map(|item| HistoryStepView {
            label: step_label(item),
            iteration: item.iter,
            entering: item.entering.as_ref().map(|v| var_ref_name(v, var_names)),
            leaving: item.leaving.as_ref().map(|v| var_ref_name(v, var_names)),
            row_ops: item.row_ops.clone().unwrap_or_default(),
            tableau: project_tableau(
                &item.tableau,
                var_names,
                item.basis.as_deref(),
                item.basic_vars.as_deref(),
            ),
        })
        .collect();
    HistoryGroupView {
        label: group
            .label
            .clone()
            .unwrap_or_else(|| DEFAULT_HISTORY_LABEL.to_string()),
        steps,
    }
}

pub fn project_lp(request: &LpSolveRequest, response: &LpSolveResponse) -> DisplayResult {
    let ops: Vec<Relation> = request.model.constraints.iter().map(|c| c.op).collect();
    let var_names = response.var_names.clone().unwrap_or_default();

    let slacks = response.slacks.as_ref().map(|values| {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let key = ops
                    .get(i)
                    .map_or_else(|| format!("s{}", i + 1), |op| slack_label(i, *op));
                NamedValue::new(key, *v)
            })
            .collect()
    });

    let dual_prices = response
        .dual
        .as_ref()
        .and_then(|d| d.shadow_prices.as_deref())
        .map(|prices| named_values("R", prices));

    let final_tableau = response.tableau.as_ref().map(|t| {
        project_tableau(
            t,
            &var_names,
            response.basis.as_deref(),
            response.basic_vars.as_deref(),
        )
    });

    let history = response
        .tableau_history
        .iter()
        .flat_map(|h| h.groups())
        .filter(|g| !g.items.is_empty())
        .map(|g| project_group(g, &var_names))
        .collect();

    let mut out = DisplayResult::new(ModelKind::Lp, response.status.clone());
    out.method_used = response.method_used.clone().unwrap_or_default();
    out.objective = response.objective_value;
    out.solution = named_values("V", &response.x);
    out.slacks = slacks;
    out.dual_prices = dual_prices;
    out.basic_vars = response.basic_vars.clone();
    out.nonbasic_vars = response.nonbasic_vars.clone();
    out.final_tableau = final_tableau;
    out.history = history;
    out.message = response.message.clone().or_else(|| response.error.clone());
    out
}
