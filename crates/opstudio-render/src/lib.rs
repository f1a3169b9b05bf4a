#![forbid(unsafe_code)]

//! Headless layout + rendering for opstudio results.

pub mod layout;
pub mod model;
pub mod svg;
pub mod text;

pub use layout::{CircularLayout, layout_circular, layout_network};
pub use model::{EdgeLayout, LayoutPoint, NetworkLayout, NodeLayout};
pub use svg::{SvgRenderOptions, render_network_svg};
pub use text::{fmt_number, render_display_text};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
