use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use opstudio_client::{ClientError, RawReply, Result, SolverClient, SolverTransport};
use opstudio_core::{
    Completion, EdgeDraft, LpModel, ModelKind, NetworkDraft, NetworkMethod, Session,
    SolveRequest, SolverResponse, StudioConfig,
};
use serde_json::{Value, json};

#[derive(Default)]
struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<RawReply>>>,
    seen: RefCell<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    fn replying(status: u16, body: impl Into<String>) -> Self {
        let t = Self::default();
        t.push(Ok(RawReply::new(status, body)));
        t
    }

    fn push(&self, reply: Result<RawReply>) {
        self.replies.borrow_mut().push_back(reply);
    }
}

impl SolverTransport for ScriptedTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<RawReply> {
        self.seen.borrow_mut().push((url.to_string(), body.clone()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(RawReply::new(500, "no scripted reply")))
    }
}

fn lp_request() -> SolveRequest {
    let mut model = LpModel::new(2, 1).unwrap();
    model.set_objective(0, 3.0).unwrap();
    model.set_objective(1, 5.0).unwrap();
    model.set_coefficient(0, 0, 1.0).unwrap();
    model.set_rhs(0, 4.0).unwrap();
    model.to_request().into()
}

fn shortest_path_request() -> SolveRequest {
    let draft = NetworkDraft {
        nodes: "A, B, C".to_string(),
        edges: vec![
            EdgeDraft::new("A", "B").weight("1"),
            EdgeDraft::new("B", "C").weight("2"),
        ],
        method: NetworkMethod::ShortestPath,
        source: "A".to_string(),
        target: "C".to_string(),
        ..NetworkDraft::default()
    };
    draft.build().unwrap().into()
}

#[test]
fn posts_to_the_endpoint_for_the_request_kind() {
    let transport = ScriptedTransport::replying(
        200,
        r#"{"status":"OPTIMAL","method_used":"simplex","objective_value":12,"x":[4,0]}"#,
    );
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);

    let result = client.solve_and_project(&lp_request()).unwrap();
    assert_eq!(result.kind, ModelKind::Lp);
    assert_eq!(result.status, "OPTIMAL");
    assert_eq!(result.objective, Some(12.0));
    assert_eq!(result.solution[0].key, "V1");
    assert_eq!(result.solution[0].value, Some(4.0));

    let seen = transport.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "http://127.0.0.1:8000/solve");
    assert_eq!(seen[0].1["model"]["c"], json!([3.0, 5.0]));
    assert_eq!(seen[0].1["model"]["constraints"][0]["op"], json!("<="));
}

#[test]
fn config_overrides_pick_the_url() {
    let transport = ScriptedTransport::replying(200, r#"{"distance": 3}"#);
    let config =
        StudioConfig::with_overrides(&json!({"endpoints": {"network": "http://solver/net"}}));
    let client = SolverClient::with_transport(config, &transport);

    client.solve(&shortest_path_request()).unwrap();
    assert_eq!(transport.seen.borrow()[0].0, "http://solver/net");
}

#[test]
fn unwraps_network_result_envelope() {
    let transport = ScriptedTransport::replying(
        200,
        json!({
            "result": {
                "distance": 3,
                "highlight": { "edges": ["A->B", "B->C"] }
            }
        })
        .to_string(),
    );
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);

    let result = client.solve_and_project(&shortest_path_request()).unwrap();
    assert_eq!(result.status, "OK");
    let network = result.network.unwrap();
    assert_eq!(network.metric.unwrap().value, Some(3.0));
    assert_eq!(network.highlighted_edges, vec!["A->B", "B->C"]);
}

#[test]
fn rejection_keeps_solver_text_verbatim() {
    let transport =
        ScriptedTransport::replying(400, r#"{"error":"Infeasible: row 2","message":"phase I"}"#);
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);

    let err = client.solve(&lp_request()).unwrap_err();
    match &err {
        ClientError::Solver {
            status,
            error,
            message,
        } => {
            assert_eq!(*status, 400);
            assert_eq!(error.as_deref(), Some("Infeasible: row 2"));
            assert_eq!(message.as_deref(), Some("phase I"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_solver_rejection());
    assert!(!err.is_unavailable());
    assert_eq!(err.display_text(), "Infeasible: row 2");
}

#[test]
fn rejection_with_plain_text_body_becomes_the_message() {
    let transport = ScriptedTransport::replying(502, "  Bad Gateway\n");
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);

    let err = client.solve(&lp_request()).unwrap_err();
    assert!(matches!(
        &err,
        ClientError::Solver { status: 502, error: None, message: Some(m) } if m == "Bad Gateway"
    ));
    assert_eq!(err.display_text(), "Bad Gateway");
}

#[test]
fn rejection_falls_back_to_detail() {
    let transport = ScriptedTransport::replying(422, r#"{"detail":"field required"}"#);
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);

    let err = client.solve(&lp_request()).unwrap_err();
    assert_eq!(err.display_text(), "field required");
}

#[test]
fn error_field_fails_even_on_success_status() {
    let transport =
        ScriptedTransport::replying(200, r#"{"result":{"error":"source not in nodes"}}"#);
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);

    let err = client.solve(&shortest_path_request()).unwrap_err();
    assert!(matches!(
        &err,
        ClientError::Solver { status: 200, error: Some(e), .. } if e == "source not in nodes"
    ));
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let transport = ScriptedTransport::replying(200, "<html>");
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);

    let err = client.solve(&lp_request()).unwrap_err();
    assert!(matches!(
        err,
        ClientError::Core(opstudio_core::Error::Decode { kind: "lp", .. })
    ));
}

#[test]
fn connection_failure_is_distinct_from_rejection() {
    let transport = ScriptedTransport::default();
    transport.push(Err(ClientError::unavailable(
        "http://127.0.0.1:8000/solve",
        io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
    )));
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);

    let err = client.solve(&lp_request()).unwrap_err();
    assert!(err.is_unavailable());
    assert!(err.to_string().contains("http://127.0.0.1:8000/solve"));
}

#[test]
fn blank_endpoint_is_reported_before_posting() {
    let transport = ScriptedTransport::default();
    let config = StudioConfig::with_overrides(&json!({"endpoints": {"lp": ""}}));
    let client = SolverClient::with_transport(config, &transport);

    let err = client.solve(&lp_request()).unwrap_err();
    assert!(matches!(
        err,
        ClientError::MissingEndpoint {
            kind: ModelKind::Lp
        }
    ));
    assert!(transport.seen.borrow().is_empty());
}

#[test]
fn typed_helpers_return_the_matching_response() {
    let transport = ScriptedTransport::replying(200, r#"{"status":"OPTIMAL","x":[1,2]}"#);
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);
    let SolveRequest::Lp(request) = lp_request() else {
        panic!("expected an lp request");
    };

    let response = client.solve_lp(&request).unwrap();
    assert_eq!(response.x, vec![Some(1.0), Some(2.0)]);
}

#[test]
fn solve_page_clears_the_previous_result_on_failure() {
    let transport = ScriptedTransport::default();
    transport.push(Ok(RawReply::new(
        200,
        r#"{"status":"OPTIMAL","objective_value":12,"x":[4,0]}"#,
    )));
    transport.push(Ok(RawReply::new(500, r#"{"error":"solver crashed"}"#)));
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);
    let mut session: Session<ClientError> = Session::new();

    assert_eq!(client.solve_page(&mut session, &lp_request()), Completion::Applied);
    assert!(session.page(ModelKind::Lp).result.is_some());

    assert_eq!(client.solve_page(&mut session, &lp_request()), Completion::Applied);
    let page = session.page(ModelKind::Lp);
    assert!(!page.loading);
    assert!(page.result.is_none());
    assert_eq!(
        page.error.as_ref().map(ClientError::display_text).as_deref(),
        Some("solver crashed")
    );
}

#[test]
fn http_transport_maps_refused_connections() {
    let config = StudioConfig::with_overrides(&json!({
        "endpoints": { "lp": "http://127.0.0.1:1/solve" },
        "http": { "connectTimeoutMs": 500 }
    }));
    let client = SolverClient::from_config(config).unwrap();

    let err = client.solve(&lp_request()).unwrap_err();
    assert!(err.is_unavailable(), "unexpected error: {err:?}");
}

#[test]
fn parsed_response_kind_matches_endpoint() {
    let transport = ScriptedTransport::replying(200, r#"{"status":"optimal"}"#);
    let client = SolverClient::with_transport(StudioConfig::default(), &transport);

    let response = client.solve(&lp_request()).unwrap();
    assert!(matches!(response, SolverResponse::Lp(_)));
}
