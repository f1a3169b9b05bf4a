use std::io::{Read, Write};
use std::path::Path;

use opstudio::{LpDraft, ModelKind, NetworkDraft, SolveRequest, StudioConfig, TransportDraft};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CliError, Result};

/// Reads `path`, or stdin when it is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes to `out`, or stdout when it is absent or `-`.
pub fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) if path != Path::new("-") => {
            std::fs::write(path, text).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_input(path)?;
    serde_json::from_str(&text).map_err(|err| CliError::json(path.display().to_string(), err))
}

/// Defaults, then the JSON file at `path`, then `OPSTUDIO_*_URL` variables.
pub fn load_config(path: Option<&Path>) -> Result<StudioConfig> {
    let mut config = match path {
        Some(path) => {
            let overrides: Value = read_json(path)?;
            StudioConfig::with_overrides(&overrides)
        }
        None => StudioConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

/// Validates a draft file and returns the canonical request for `kind`.
///
/// Drafts use the request shape with cells as numbers or text. Transportation drafts take their
/// options from the config when they carry none.
pub fn load_request(kind: ModelKind, path: &Path, config: &StudioConfig) -> Result<SolveRequest> {
    let request = match kind {
        ModelKind::Lp => {
            let draft: LpDraft = read_json(path)?;
            draft.build()?.to_request().into()
        }
        ModelKind::Transport => {
            let draft: TransportDraft = read_json(path)?;
            draft.build(config.transport_options())?.to_request().into()
        }
        ModelKind::Network => {
            let draft: NetworkDraft = read_json(path)?;
            draft.build()?.into()
        }
    };
    tracing::debug!(%kind, path = %path.display(), "draft validated");
    Ok(request)
}

pub fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(|err| CliError::json("output", err))
}
