use opstudio_core::project::project_lp;
use opstudio_core::wire::lp::LpSolveResponse;
use opstudio_core::LpModel;
use opstudio_render::text::MISSING;
use opstudio_render::{fmt_number, render_display_text};
use serde_json::json;

#[test]
fn numbers_use_at_most_six_fraction_digits() {
    assert_eq!(fmt_number(Some(36.0)), "36");
    assert_eq!(fmt_number(Some(1.0 / 3.0)), "0.333333");
    assert_eq!(fmt_number(Some(-2.5)), "-2.5");
    assert_eq!(fmt_number(Some(-0.0)), "0");
    assert_eq!(fmt_number(Some(-1e-9)), "0");
    assert_eq!(fmt_number(None), MISSING);
    assert_eq!(fmt_number(Some(f64::NAN)), MISSING);
    assert_eq!(fmt_number(Some(f64::INFINITY)), "∞");
}

#[test]
fn lp_report_lists_vectors_and_the_final_tableau() {
    let request = LpModel::new(2, 1).unwrap().to_request();
    let response: LpSolveResponse = serde_json::from_value(json!({
        "status": "OPTIMAL",
        "method_used": "simplex",
        "objective_value": 12.0,
        "x": [4.0, null],
        "slacks": [0.0],
        "var_names": ["x1", "x2", "s1"],
        "basis": [0],
        "tableau": [[0, 1, 3, -12], [1, 0, 1, 4]]
    }))
    .unwrap();
    let text = render_display_text(&project_lp(&request, &response));

    assert!(text.starts_with("Status: OPTIMAL\nMethod: simplex\nObjective: 12\n"));
    assert!(text.contains("Solution: V1 = 4, V2 = —\n"));
    assert!(text.contains("Slack/surplus: s1 = 0\n"));
    assert!(text.contains("Final tableau\n"));
    let lines: Vec<&str> = text.lines().collect();
    let header = lines
        .iter()
        .position(|l| l.trim_start().starts_with("Row"))
        .unwrap();
    assert_eq!(
        lines[header].split_whitespace().collect::<Vec<_>>(),
        vec!["Row", "x1", "x2", "s1", "RHS"]
    );
    assert_eq!(
        lines[header + 1].split_whitespace().collect::<Vec<_>>(),
        vec!["Z", "0", "1", "3", "12"]
    );
    assert_eq!(
        lines[header + 2].split_whitespace().collect::<Vec<_>>(),
        vec!["x1", "1", "0", "1", "4"]
    );
}
