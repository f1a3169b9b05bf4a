//! Plain-text report of a [`DisplayResult`].

use std::fmt::Write as _;

use opstudio_core::project::{
    DisplayResult, NamedValue, NetworkView, RouteView, TableauView, TransportView,
};

/// Placeholder for values the solver reported as null or NaN.
pub const MISSING: &str = "—";

/// Formats a display number with at most six fraction digits and no trailing zeros.
pub fn fmt_number(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| !v.is_nan()) else {
        return MISSING.to_string();
    };
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let mut s = format!("{v:.6}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn named_list(values: &[NamedValue]) -> String {
    values
        .iter()
        .map(|v| format!("{} = {}", v.key, fmt_number(v.value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_table(out: &mut String, headers: &[String], rows: &[Vec<String>]) {
    let cols = headers
        .len()
        .max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let mut widths = vec![0usize; cols];
    for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (j, cell) in row.iter().enumerate() {
            widths[j] = widths[j].max(cell.chars().count());
        }
    }
    for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        let line = row
            .iter()
            .enumerate()
            .map(|(j, cell)| format!("{cell:>width$}", width = widths[j]))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "  {}", line.trim_end());
    }
}

fn write_tableau(out: &mut String, tableau: &TableauView) {
    let headers: Vec<String> = std::iter::once("Row".to_string())
        .chain(tableau.columns.iter().cloned())
        .chain(std::iter::once("RHS".to_string()))
        .collect();
    let rows: Vec<Vec<String>> = tableau
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.label.clone())
                .chain(row.cells.iter().map(|c| fmt_number(*c)))
                .chain(std::iter::once(fmt_number(row.rhs)))
                .collect()
        })
        .collect();
    write_table(out, &headers, &rows);
}

fn write_allocation(out: &mut String, view: &TransportView, allocation: &[Vec<f64>]) {
    let headers: Vec<String> = std::iter::once(String::new())
        .chain(view.destinations.iter().cloned())
        .collect();
    let rows: Vec<Vec<String>> = allocation
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let label = view
                .origins
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("O{}", i + 1));
            std::iter::once(label)
                .chain(row.iter().map(|v| fmt_number(Some(*v))))
                .collect()
        })
        .collect();
    write_table(out, &headers, &rows);
}

fn write_transport(out: &mut String, view: &TransportView) {
    if view.added_dummy_origin {
        out.push_str("Balanced with a dummy origin\n");
    }
    if view.added_dummy_destination {
        out.push_str("Balanced with a dummy destination\n");
    }
    for h in &view.initials {
        let cost = h
            .cost_pretty
            .clone()
            .filter(|_| h.has_penalty)
            .unwrap_or_else(|| fmt_number(h.total_cost));
        let _ = writeln!(out, "\n{} (cost {cost})", h.label);
        write_allocation(out, view, &h.allocation);
    }
    let Some(opt) = &view.optimal else {
        return;
    };
    let _ = write!(out, "\nOptimal allocation (cost {}", fmt_number(opt.total_cost));
    if let Some(it) = opt.iterations {
        let _ = write!(out, ", {it} iterations");
    }
    if let Some(from) = &opt.started_from {
        let _ = write!(out, ", from {from}");
    }
    out.push_str(")\n");
    write_allocation(out, view, &opt.allocation);
    for step in &opt.trace {
        let cycle = step
            .cycle
            .iter()
            .map(|c| format!("{}({},{})", c.sign, c.row + 1, c.col + 1))
            .collect::<Vec<_>>()
            .join(" ");
        let leaving = step
            .leaving
            .map(|c| format!("({},{})", c.row + 1, c.col + 1))
            .unwrap_or_else(|| MISSING.to_string());
        let _ = writeln!(
            out,
            "  step {}: enter ({},{}) delta {} theta {} leave {leaving} cost {} cycle {cycle}",
            step.iteration,
            step.entering.row + 1,
            step.entering.col + 1,
            fmt_number(step.delta),
            fmt_number(step.theta),
            fmt_number(step.total_cost),
        );
    }
}

fn write_network(out: &mut String, view: &NetworkView) {
    if let Some(metric) = &view.metric {
        let _ = writeln!(out, "{}: {}", metric.key, fmt_number(metric.value));
    }
    match &view.route {
        Some(RouteView::Path(nodes)) => {
            let _ = writeln!(out, "Path: {}", nodes.join(" -> "));
        }
        Some(RouteView::RawEdges(edges)) => {
            let _ = writeln!(out, "Edges: {}", edges.join(", "));
        }
        None if !view.highlighted_edges.is_empty() => {
            let _ = writeln!(out, "Highlighted: {}", view.highlighted_edges.join(", "));
        }
        None => {}
    }
    if !view.flows.is_empty() {
        out.push_str("Flows:\n");
        for (key, flow) in &view.flows {
            let _ = writeln!(out, "  {key} = {}", fmt_number(Some(*flow)));
        }
    }
    for line in &view.summary {
        let _ = writeln!(out, "  {line}");
    }
}

pub fn render_display_text(result: &DisplayResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Status: {}", result.status);
    if !result.method_used.is_empty() {
        let _ = writeln!(out, "Method: {}", result.method_used);
    }
    let _ = writeln!(out, "Objective: {}", fmt_number(result.objective));
    if !result.solution.is_empty() {
        let _ = writeln!(out, "Solution: {}", named_list(&result.solution));
    }
    if let Some(slacks) = &result.slacks {
        let _ = writeln!(out, "Slack/surplus: {}", named_list(slacks));
    }
    if let Some(prices) = &result.dual_prices {
        let _ = writeln!(out, "Dual prices: {}", named_list(prices));
    }
    if let Some(basic) = &result.basic_vars {
        let _ = writeln!(out, "Basic: {}", basic.join(", "));
    }
    if let Some(nonbasic) = &result.nonbasic_vars {
        let _ = writeln!(out, "Non-basic: {}", nonbasic.join(", "));
    }
    if let Some(message) = &result.message {
        let _ = writeln!(out, "Message: {message}");
    }

    if let Some(tableau) = &result.final_tableau {
        out.push_str("\nFinal tableau\n");
        write_tableau(&mut out, tableau);
    }
    for group in &result.history {
        let _ = writeln!(out, "\n{}", group.label);
        for step in &group.steps {
            let _ = write!(out, "{}", step.label);
            if let Some(enter) = &step.entering {
                let _ = write!(out, " (enter {enter}");
                if let Some(leave) = &step.leaving {
                    let _ = write!(out, ", leave {leave}");
                }
                out.push(')');
            }
            out.push('\n');
            for op in &step.row_ops {
                let _ = writeln!(out, "  {op}");
            }
            write_tableau(&mut out, &step.tableau);
        }
    }
    if let Some(view) = &result.transport {
        write_transport(&mut out, view);
    }
    if let Some(view) = &result.network {
        write_network(&mut out, view);
    }
    out
}
