#![forbid(unsafe_code)]

//! `opstudio` is a headless front end for LP, transportation and network-flow solver services.
//!
//! # Features
//!
//! - `render`: network layout + SVG/text rendering (`opstudio::render`)
//! - `http`: blocking solver client (`opstudio::client`)

pub use opstudio_core::*;

#[cfg(feature = "http")]
pub use opstudio_client as client;

#[cfg(feature = "render")]
pub mod render {
    pub use opstudio_render::model::{EdgeLayout, LayoutPoint, NetworkLayout, NodeLayout};
    pub use opstudio_render::svg::{SvgRenderOptions, id_token, node_element_id};
    pub use opstudio_render::text::{fmt_number, render_display_text};
    pub use opstudio_render::{layout_circular, layout_network};

    use opstudio_core::network::NetworkSolveRequest;
    use opstudio_core::project::network::{NetworkView, project_network};
    use opstudio_core::wire::NetworkSolveResponse;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Core(#[from] opstudio_core::Error),
        #[error(transparent)]
        Render(#[from] opstudio_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Turns a user-supplied label (e.g. `--id "max flow #1"`) into the diagram id prefix, so
    /// several network drawings can be inlined in one document without id collisions.
    pub fn sanitize_svg_id(raw: &str) -> String {
        id_token(raw.trim(), "net")
    }

    /// Projects the network part of a solver response, if any.
    pub fn network_view(
        request: &NetworkSolveRequest,
        response: &NetworkSolveResponse,
    ) -> Option<NetworkView> {
        project_network(request, response).network
    }

    /// Lays out `request`'s model on a `width` x `height` canvas and renders it, overlaying
    /// `response` highlights and flows when given.
    pub fn render_network(
        request: &NetworkSolveRequest,
        response: Option<&NetworkSolveResponse>,
        width: f64,
        height: f64,
        options: &SvgRenderOptions,
    ) -> Result<String> {
        let view = response.and_then(|r| network_view(request, r));
        let layout = layout_network(&request.model, view.as_ref(), width, height);
        Ok(opstudio_render::render_network_svg(&layout, options)?)
    }
}
