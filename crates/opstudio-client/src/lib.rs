#![forbid(unsafe_code)]

//! Blocking HTTP client for the opstudio solver services.
//!
//! The client only moves bodies: requests come from `opstudio_core` builders and successful
//! bodies are decoded into `opstudio_core::SolverResponse`. Network I/O sits behind
//! [`SolverTransport`] so callers (and tests) can swap the HTTP stack out.

mod client;
mod error;
mod transport;

pub use client::SolverClient;
pub use error::{ClientError, Result};
pub use transport::{HttpTransport, RawReply, SolverTransport};
