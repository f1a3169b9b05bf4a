use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use opstudio::client::SolverClient;
use opstudio::network::path::parse_edge_keys;
use opstudio::project::RouteView;
use opstudio::render::{SvgRenderOptions, render_display_text, render_network, sanitize_svg_id};
use opstudio::wire::NetworkSolveResponse;
use opstudio::{
    DisplayResult, ModelKind, NetworkDraft, PathDisplay, SolveRequest, SolverResponse, project,
};
use serde_json::Value;

use crate::error::{CliError, Result};
use crate::input::{load_config, load_request, read_input, read_json, to_json, write_output};

#[derive(Debug, Parser)]
#[command(
    name = "opstudio",
    about = "Build, solve, project and render LP, transportation and network models",
    version
)]
pub struct Cli {
    /// JSON config file deep-merged over the defaults.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a draft and print the canonical solver request.
    Build(BuildArgs),

    /// Post a draft to its solver and print the projected result.
    Solve(SolveArgs),

    /// Project a saved solver response against its request.
    Project(ProjectArgs),

    /// Order highlighted edge keys into a source-to-target path.
    Path(PathArgs),

    /// Draw a network draft, optionally overlaid with a solved response, as SVG.
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[arg(value_parser = parse_kind)]
    pub kind: ModelKind,
    /// Draft JSON file, or `-` for stdin.
    pub draft: PathBuf,
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    #[arg(value_parser = parse_kind)]
    pub kind: ModelKind,
    pub draft: PathBuf,
    /// Print the display result as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[arg(value_parser = parse_kind)]
    pub kind: ModelKind,
    #[arg(long, value_name = "FILE")]
    pub request: PathBuf,
    #[arg(long, value_name = "FILE")]
    pub response: PathBuf,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Comma-separated edge keys, e.g. `A->B,B->C`.
    #[arg(long)]
    pub edges: String,
    #[arg(long)]
    pub source: String,
    #[arg(long)]
    pub target: String,
    #[arg(long)]
    pub undirected: bool,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Network draft JSON file.
    pub draft: PathBuf,
    /// Saved network solver response to overlay.
    #[arg(long, value_name = "FILE")]
    pub response: Option<PathBuf>,
    #[arg(long)]
    pub width: Option<f64>,
    #[arg(long)]
    pub height: Option<f64>,
    /// SVG element id prefix.
    #[arg(long)]
    pub id: Option<String>,
    /// Output file; stdout when omitted or `-`.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

fn parse_kind(raw: &str) -> std::result::Result<ModelKind, String> {
    raw.parse::<ModelKind>().map_err(|err| err.to_string())
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Build(args) => run_build(args, config_path),
        Commands::Solve(args) => run_solve(args, config_path),
        Commands::Project(args) => run_project(args),
        Commands::Path(args) => run_path(args),
        Commands::Render(args) => run_render(args, config_path),
    }
}

fn run_build(args: BuildArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let request = load_request(args.kind, &args.draft, &config)?;
    write_output(None, &to_json(&request, args.pretty)?)
}

fn run_solve(args: SolveArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let request = load_request(args.kind, &args.draft, &config)?;
    let client = SolverClient::from_config(config)?;
    let result = client.solve_and_project(&request)?;
    print_result(&result, args.json)
}

fn run_project(args: ProjectArgs) -> Result<()> {
    let request_value: Value = read_json(&args.request)?;
    let request = SolveRequest::from_value(args.kind, request_value)?;
    let body = read_input(&args.response)?;
    let response = SolverResponse::parse(args.kind, &body)?;
    let result = project(&request, &response)?;
    print_result(&result, args.json)
}

fn run_path(args: PathArgs) -> Result<()> {
    let raw: Vec<&str> = args
        .edges
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let display = PathDisplay::from_edges(
        parse_edge_keys(&raw),
        args.source.trim(),
        args.target.trim(),
        !args.undirected,
    );
    let route = RouteView::from(display);
    if args.json {
        return write_output(None, &to_json(&route, false)?);
    }
    let text = match &route {
        RouteView::Path(nodes) => nodes.join(" -> "),
        RouteView::RawEdges(edges) => format!("no path; edges: {}", edges.join(", ")),
    };
    write_output(None, &text)
}

fn run_render(args: RenderArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let draft: NetworkDraft = read_json(&args.draft)?;
    let request = draft.build()?;
    let response = match &args.response {
        Some(path) => {
            let value: Value = read_json(path)?;
            let response = NetworkSolveResponse::from_value(value)
                .map_err(|err| CliError::json(path.display().to_string(), err))?;
            Some(response)
        }
        None => None,
    };

    let (default_w, default_h) = config.canvas_size();
    let options = SvgRenderOptions {
        diagram_id: args.id.as_deref().map(sanitize_svg_id),
        ..SvgRenderOptions::default()
    };
    let svg = render_network(
        &request,
        response.as_ref(),
        args.width.unwrap_or(default_w),
        args.height.unwrap_or(default_h),
        &options,
    )?;
    write_output(args.out.as_deref(), &svg)
}

fn print_result(result: &DisplayResult, json: bool) -> Result<()> {
    if json {
        write_output(None, &to_json(result, true)?)
    } else {
        write_output(None, &render_display_text(result))
    }
}
