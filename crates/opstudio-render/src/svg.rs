use std::fmt::Write as _;

use crate::model::{EdgeLayout, NetworkLayout};
use crate::text::fmt_number;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Prefix for element ids (arrow marker, node groups).
    pub diagram_id: Option<String>,
    pub node_radius: f64,
    /// When true, edges carry a text label built from weight/capacity/cost/flow.
    pub edge_labels: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            node_radius: 18.0,
            edge_labels: true,
        }
    }
}

pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
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

/// Reduces `raw` to an SVG id token of ASCII letters, digits and `_`, with each other run
/// collapsed to a single `-`. Tokens that would not start with a letter get `prefix-` in front;
/// a blank token becomes `prefix-untitled`.
pub fn id_token(raw: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut gap = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if gap && !out.is_empty() {
                out.push('-');
            }
            out.push(ch);
            gap = false;
        } else {
            gap = true;
        }
    }

    if out.is_empty() {
        return format!("{prefix}-untitled");
    }
    if !out.starts_with(|c: char| c.is_ascii_alphabetic()) {
        out.insert(0, '-');
        out.insert_str(0, prefix);
    }
    out
}

/// Element id of a node group: `<diagram>-node-<token>`.
pub fn node_element_id(diagram_id: &str, node: &str) -> String {
    format!("{diagram_id}-node-{}", id_token(node, "n"))
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Label shown next to an edge: `flow/capacity` when a flow is known, otherwise the fields the
/// model carries.
pub fn edge_label(edge: &EdgeLayout) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    match (edge.flow, edge.capacity) {
        (Some(flow), Some(cap)) => parts.push(format!(
            "{}/{}",
            fmt_number(Some(flow)),
            fmt_number(Some(cap))
        )),
        (Some(flow), None) => parts.push(fmt_number(Some(flow))),
        (None, Some(cap)) => parts.push(format!("cap {}", fmt_number(Some(cap)))),
        (None, None) => {}
    }
    if let Some(w) = edge.weight {
        parts.push(fmt_number(Some(w)));
    }
    if let Some(c) = edge.cost {
        parts.push(format!("@{}", fmt_number(Some(c))));
    }
    (!parts.is_empty()).then(|| parts.join(" "))
}

fn shortened(edge: &EdgeLayout, r: f64) -> ((f64, f64), (f64, f64)) {
    let (x1, y1, x2, y2) = (edge.from.x, edge.from.y, edge.to.x, edge.to.y);
    let len = (x2 - x1).hypot(y2 - y1);
    if len <= 2.0 * r {
        return ((x1, y1), (x2, y2));
    }
    let (ux, uy) = ((x2 - x1) / len, (y2 - y1) / len);
    ((x1 + ux * r, y1 + uy * r), (x2 - ux * r, y2 - uy * r))
}

pub fn render_network_svg(layout: &NetworkLayout, options: &SvgRenderOptions) -> Result<String> {
    let (w, h) = (layout.width, layout.height);
    if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
        return Err(Error::InvalidCanvas {
            width: w,
            height: h,
        });
    }

    let diagram_id = escape_xml(options.diagram_id.as_deref().unwrap_or("opstudio"));
    let marker_id = format!("{diagram_id}-arrow");
    let r = options.node_radius.max(1.0);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{diagram_id}" xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="graphics-document document" aria-roledescription="network">"#,
        w = fmt(w),
        h = fmt(h),
    );
    out.push_str(
        "<style>.edge{stroke:#94a3b8;stroke-width:1.5;fill:none}.edge.highlighted{stroke:#2563eb;stroke-width:3}.node circle{fill:#f8fafc;stroke:#334155;stroke-width:1.5}.node.highlighted circle{fill:#dbeafe;stroke:#2563eb}.node text,.edge-label{font-family:sans-serif;font-size:12px;fill:#0f172a}</style>",
    );

    if layout.directed {
        let _ = write!(
            &mut out,
            r#"<defs><marker id="{marker_id}" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="8" markerHeight="8" orient="auto-start-reverse"><path d="M0,0L10,5L0,10Z" fill="context-stroke"/></marker></defs>"#
        );
    }

    out.push_str(r#"<g class="edges">"#);
    for edge in &layout.edges {
        let class = if edge.highlighted {
            "edge highlighted"
        } else {
            "edge"
        };
        let marker = if layout.directed {
            format!(r#" marker-end="url(#{marker_id})""#)
        } else {
            String::new()
        };
        let ((x1, y1), (x2, y2)) = shortened(edge, r);
        let _ = write!(
            &mut out,
            r#"<line class="{class}" data-edge="{key}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"{marker}/>"#,
            key = escape_xml(&edge.key),
            x1 = fmt(x1),
            y1 = fmt(y1),
            x2 = fmt(x2),
            y2 = fmt(y2),
        );
        if options.edge_labels {
            if let Some(label) = edge_label(edge) {
                let _ = write!(
                    &mut out,
                    r#"<text class="edge-label" x="{x}" y="{y}" text-anchor="middle">{text}</text>"#,
                    x = fmt((edge.from.x + edge.to.x) / 2.0),
                    y = fmt((edge.from.y + edge.to.y) / 2.0 - 4.0),
                    text = escape_xml(&label),
                );
            }
        }
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="nodes">"#);
    for node in &layout.nodes {
        let class = if node.highlighted {
            "node highlighted"
        } else {
            "node"
        };
        let id = escape_xml(&node.id);
        let _ = write!(
            &mut out,
            r#"<g id="{element_id}" class="{class}" data-node="{id}" transform="translate({x},{y})"><circle r="{r}"/><text text-anchor="middle" dominant-baseline="central">{id}</text></g>"#,
            element_id = node_element_id(&diagram_id, &node.id),
            x = fmt(node.x),
            y = fmt(node.y),
            r = fmt(r),
        );
    }
    out.push_str("</g></svg>");

    tracing::debug!(
        nodes = layout.nodes.len(),
        edges = layout.edges.len(),
        bytes = out.len(),
        "rendered network svg"
    );
    Ok(out)
}
