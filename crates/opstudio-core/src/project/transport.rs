use serde::Serialize;

use crate::ModelKind;
use crate::project::{DisplayResult, NamedValue};
use crate::wire::transport::{
    Balancing, TraceStep, TransportSolution, TransportSolveRequest, TransportSolveResponse,
};

pub const DUMMY_LABEL: &str = "Dummy";

/// Initial heuristics in display order, with their labels.
const HEURISTICS: [(&str, &str); 3] = [
    ("northwest", "Northwest corner"),
    ("min_cost", "Minimum cost"),
    ("vogel", "Vogel approximation"),
];

fn heuristic_label(key: &str) -> String {
    HEURISTICS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or_else(|| key.to_string(), |(_, label)| label.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl From<(usize, usize)> for CellRef {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A stepping-stone cycle cell; signs alternate `+`, `-`, `+`, ... from the entering cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleCell {
    pub row: usize,
    pub col: usize,
    pub sign: char,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceStepView {
    pub iteration: u64,
    pub total_cost: Option<f64>,
    pub entering: CellRef,
    pub delta: Option<f64>,
    pub theta: Option<f64>,
    pub leaving: Option<CellRef>,
    pub cycle: Vec<CycleCell>,
    pub allocation: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeuristicView {
    pub key: String,
    pub label: String,
    pub total_cost: Option<f64>,
    pub cost_pretty: Option<String>,
    pub has_penalty: bool,
    pub allocation: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationView {
    pub method: String,
    pub status: Option<String>,
    pub total_cost: Option<f64>,
    pub cost_pretty: Option<String>,
    pub has_penalty: bool,
    pub iterations: Option<u64>,
    /// Label of the heuristic the optimization started from.
    pub started_from: Option<String>,
    pub allocation: Vec<Vec<f64>>,
    pub trace: Vec<TraceStepView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportView {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    pub added_dummy_origin: bool,
    pub added_dummy_destination: bool,
    pub initials: Vec<HeuristicView>,
    pub optimal: Option<AllocationView>,
}

fn project_step(step: &TraceStep) -> TraceStepView {
    TraceStepView {
        iteration: step.iter,
        total_cost: step.total_cost,
        entering: step.enter.into(),
        delta: step.delta,
        theta: step.theta,
        leaving: step.leaving.map(CellRef::from),
        cycle: step
            .cycle
            .iter()
            .enumerate()
            .map(|(i, &(row, col))| CycleCell {
                row,
                col,
                sign: if i % 2 == 0 { '+' } else { '-' },
            })
            .collect(),
        allocation: step.allocation.clone(),
    }
}

fn project_solution(method: String, solution: &TransportSolution) -> AllocationView {
    AllocationView {
        method,
        status: solution.status.clone(),
        total_cost: solution.total_cost,
        cost_pretty: solution.cost_pretty.clone(),
        has_penalty: solution.has_m,
        iterations: solution.iterations,
        started_from: solution.started_from.as_deref().map(heuristic_label),
        allocation: solution.allocation.clone(),
        trace: solution.trace.iter().map(project_step).collect(),
    }
}

fn axis_labels(
    count: usize,
    prefix: char,
    names: Option<&[String]>,
    dummy_last: bool,
) -> Vec<String> {
    (0..count)
        .map(|i| {
            if dummy_last && i + 1 == count {
                return DUMMY_LABEL.to_string();
            }
            names
                .and_then(|n| n.get(i))
                .filter(|n| !n.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| format!("{prefix}{}", i + 1))
        })
        .collect()
}

/// Projects either the compare-all shape (`initials` + `optimal`) or the single-method shape.
pub fn project_transport(
    request: Option<&TransportSolveRequest>,
    response: &TransportSolveResponse,
) -> DisplayResult {
    let initials: Vec<HeuristicView> = match &response.initials {
        Some(map) => {
            let known = HEURISTICS.iter().map(|(k, _)| *k);
            let extra = map
                .keys()
                .map(String::as_str)
                .filter(|k| !HEURISTICS.iter().any(|(known, _)| known == k));
            known
                .chain(extra)
                .filter_map(|key| {
                    map.get(key).map(|s| HeuristicView {
                        key: key.to_string(),
                        label: heuristic_label(key),
                        total_cost: s.total_cost,
                        cost_pretty: s.cost_pretty.clone(),
                        has_penalty: s.has_m,
                        allocation: s.allocation.clone(),
                    })
                })
                .collect()
        }
        None => Vec::new(),
    };

    let optimal = match (&response.optimal, &response.allocation) {
        (Some(solution), _) => Some(project_solution(
            solution
                .method
                .clone()
                .unwrap_or_else(|| "optimal".to_string()),
            solution,
        )),
        (None, Some(allocation)) => Some(AllocationView {
            method: response.method_used.clone().unwrap_or_default(),
            status: Some(response.status.clone()).filter(|s| !s.is_empty()),
            total_cost: response.total_cost,
            cost_pretty: None,
            has_penalty: response.has_m.unwrap_or(false),
            iterations: response.iterations,
            started_from: None,
            allocation: allocation.clone(),
            trace: response.trace.iter().flatten().map(project_step).collect(),
        }),
        (None, None) => None,
    };

    let balancing = response
        .extra
        .as_ref()
        .and_then(|e| e.balanced.clone())
        .unwrap_or_default();
    let shape_source = optimal
        .as_ref()
        .map(|o| o.allocation.as_slice())
        .or_else(|| initials.first().map(|h| h.allocation.as_slice()))
        .unwrap_or(&[]);
    let Balancing {
        added_dummy_origin,
        added_dummy_destination,
        rows,
        cols,
    } = balancing;
    let rows = if rows > 0 { rows } else { shape_source.len() };
    let cols = if cols > 0 {
        cols
    } else {
        shape_source.first().map_or(0, Vec::len)
    };

    let model = request.map(|r| &r.model);
    let origins = axis_labels(
        rows,
        'O',
        model.and_then(|m| m.origins.as_deref()),
        added_dummy_origin,
    );
    let destinations = axis_labels(
        cols,
        'D',
        model.and_then(|m| m.destinations.as_deref()),
        added_dummy_destination,
    );

    let mut solution = Vec::new();
    if let Some(opt) = &optimal {
        for (i, row) in opt.allocation.iter().enumerate() {
            for (j, &qty) in row.iter().enumerate() {
                if qty.abs() > 1e-12 {
                    let from = origins.get(i).cloned().unwrap_or_else(|| format!("O{}", i + 1));
                    let to = destinations
                        .get(j)
                        .cloned()
                        .unwrap_or_else(|| format!("D{}", j + 1));
                    solution.push(NamedValue::new(format!("{from}->{to}"), Some(qty)));
                }
            }
        }
    }

    let mut out = DisplayResult::new(ModelKind::Transport, response.status.clone());
    out.method_used = response.method_used.clone().unwrap_or_else(|| {
        if response.compare {
            "compare".to_string()
        } else {
            String::new()
        }
    });
    out.objective = optimal.as_ref().and_then(|o| o.total_cost);
    out.solution = solution;
    out.message = response.message.clone().or_else(|| response.error.clone());
    out.transport = Some(TransportView {
        origins,
        destinations,
        added_dummy_origin,
        added_dummy_destination,
        initials,
        optimal,
    });
    out
}
