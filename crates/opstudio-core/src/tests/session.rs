use crate::project::DisplayResult;
use crate::*;

fn result(status: &str) -> DisplayResult {
    let mut r = DisplayResult::new(ModelKind::Lp, status);
    r.method_used = "simplex".to_string();
    r
}

#[test]
fn superseded_responses_are_discarded() {
    let mut session: Session<String> = Session::new();
    let first = session.begin(ModelKind::Lp);
    let second = session.begin(ModelKind::Lp);
    assert!(!session.is_current(&first));

    assert_eq!(session.complete(first, Ok(result("OLD"))), Completion::Stale);
    assert!(session.page(ModelKind::Lp).result.is_none());
    assert!(session.page(ModelKind::Lp).loading);

    assert_eq!(
        session.complete(second, Ok(result("OPTIMAL"))),
        Completion::Applied
    );
    let page = session.page(ModelKind::Lp);
    assert!(!page.loading);
    assert_eq!(page.result.as_ref().map(|r| r.status.as_str()), Some("OPTIMAL"));
}

#[test]
fn kinds_are_sequenced_independently() {
    let mut session: Session<String> = Session::new();
    let lp = session.begin(ModelKind::Lp);
    let net = session.begin(ModelKind::Network);
    assert_eq!(lp.seq(), 1);
    assert_eq!(net.seq(), 1);
    assert_eq!(session.complete(lp, Ok(result("OPTIMAL"))), Completion::Applied);
    assert!(session.page(ModelKind::Network).loading);
}

#[test]
fn failure_clears_the_previous_result() {
    let mut session: Session<String> = Session::new();
    let t = session.begin(ModelKind::Transport);
    session.complete(t, Ok(result("OPTIMAL")));

    let t = session.begin(ModelKind::Transport);
    assert!(session.page(ModelKind::Transport).result.is_none());
    session.complete(t, Err("solver unavailable".to_string()));

    let page = session.page(ModelKind::Transport);
    assert!(page.result.is_none());
    assert_eq!(page.error.as_deref(), Some("solver unavailable"));

    let t = session.begin(ModelKind::Transport);
    assert!(session.page(ModelKind::Transport).error.is_none());
    session.complete(t, Ok(result("OPTIMAL")));
    assert!(session.page(ModelKind::Transport).error.is_none());
}
