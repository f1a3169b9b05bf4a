//! Editable per-page model state.

pub(crate) mod cells;
pub mod lp;
pub mod transport;
