//! Per-page solve state with superseded-response fencing.

use std::fmt;

use crate::ModelKind;
use crate::project::DisplayResult;

/// Issued when a solve starts; only the latest ticket per kind may deliver a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    kind: ModelKind,
    seq: u64,
}

impl RequestTicket {
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// What one result page shows. A result and an error are never held together.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<E> {
    pub loading: bool,
    pub result: Option<DisplayResult>,
    pub error: Option<E>,
}

impl<E> Default for PageState<E> {
    fn default() -> Self {
        Self {
            loading: false,
            result: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session<E> {
    latest: [u64; 3],
    pages: [PageState<E>; 3],
}

impl<E> Default for Session<E> {
    fn default() -> Self {
        Self {
            latest: [0; 3],
            pages: [
                PageState::default(),
                PageState::default(),
                PageState::default(),
            ],
        }
    }
}

impl<E: fmt::Display> Session<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a solve for `kind`: the page's previous result and error are dropped.
    pub fn begin(&mut self, kind: ModelKind) -> RequestTicket {
        let slot = kind.index();
        self.latest[slot] += 1;
        let page = &mut self.pages[slot];
        page.loading = true;
        page.result = None;
        page.error = None;
        RequestTicket {
            kind,
            seq: self.latest[slot],
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest[ticket.kind.index()] == ticket.seq
    }

    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<DisplayResult, E>,
    ) -> Completion {
        if !self.is_current(&ticket) {
            tracing::warn!(
                kind = %ticket.kind,
                seq = ticket.seq,
                latest = self.latest[ticket.kind.index()],
                "discarding superseded solver response"
            );
            return Completion::Stale;
        }

        let page = &mut self.pages[ticket.kind.index()];
        page.loading = false;
        match outcome {
            Ok(result) => {
                page.result = Some(result);
                page.error = None;
            }
            Err(err) => {
                tracing::debug!(kind = %ticket.kind, %err, "solve failed");
                page.result = None;
                page.error = Some(err);
            }
        }
        Completion::Applied
    }

    pub fn page(&self, kind: ModelKind) -> &PageState<E> {
        &self.pages[kind.index()]
    }
}
