use serde_json::{Map, Value, json};

use crate::ModelKind;
use crate::models::transport::TransportOptions;

pub const LP_URL_ENV: &str = "OPSTUDIO_LP_URL";
pub const TRANSPORT_URL_ENV: &str = "OPSTUDIO_TRANSPORT_URL";
pub const NETWORK_URL_ENV: &str = "OPSTUDIO_NETWORK_URL";

/// JSON-backed studio settings: solver endpoints, transport solve options, canvas size and HTTP
/// connect timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig(Value);

impl Default for StudioConfig {
    fn default() -> Self {
        Self(json!({
            "endpoints": {
                "lp": "http://127.0.0.1:8000/solve",
                "network": "http://127.0.0.1:8001/solve/networks",
                "transport": "http://127.0.0.1:8002/solve"
            },
            "transport": {
                "optimize": true,
                "compareAll": true,
                "trace": true,
                "traceLimit": 50
            },
            "canvas": { "width": 720, "height": 420 },
            "http": { "connectTimeoutMs": null }
        }))
    }
}

impl StudioConfig {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Defaults with `overrides` deep-merged on top.
    pub fn with_overrides(overrides: &Value) -> Self {
        let mut cfg = Self::default();
        cfg.deep_merge(overrides);
        cfg
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn lookup(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.lookup(dotted_path)?.as_str()
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.lookup(dotted_path)?.as_bool()
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        self.lookup(dotted_path)?.as_f64()
    }

    pub fn get_u64(&self, dotted_path: &str) -> Option<u64> {
        self.lookup(dotted_path)?.as_u64()
    }

    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }

        let Value::Object(ref mut root) = self.0 else {
            return;
        };
        let mut cur: &mut Map<String, Value> = root;
        let mut segments = dotted_path.split('.').peekable();
        while let Some(seg) = segments.next() {
            if segments.peek().is_none() {
                cur.insert(seg.to_string(), value);
                return;
            }
            let slot = cur.entry(seg).or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Some(next) = slot.as_object_mut() else {
                return;
            };
            cur = next;
        }
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }

    /// Applies `OPSTUDIO_*_URL` endpoint overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Same as [`StudioConfig::apply_env`], reading variables through `lookup`.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for kind in ModelKind::ALL {
            let var = endpoint_env(kind);
            let Some(url) = lookup(var).filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            tracing::debug!(var, url = %url, "endpoint override from environment");
            self.set_value(&format!("endpoints.{}", kind.as_str()), Value::String(url));
        }
    }

    pub fn endpoint(&self, kind: ModelKind) -> Option<&str> {
        self.get_str(&format!("endpoints.{}", kind.as_str()))
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (
            self.get_f64("canvas.width").unwrap_or(720.0),
            self.get_f64("canvas.height").unwrap_or(420.0),
        )
    }

    pub fn connect_timeout_ms(&self) -> Option<u64> {
        self.get_u64("http.connectTimeoutMs")
    }

    pub fn transport_options(&self) -> TransportOptions {
        let defaults = TransportOptions::default();
        TransportOptions {
            optimize: self.get_bool("transport.optimize").unwrap_or(defaults.optimize),
            compare_all: self
                .get_bool("transport.compareAll")
                .unwrap_or(defaults.compare_all),
            trace: self.get_bool("transport.trace").unwrap_or(defaults.trace),
            trace_limit: self
                .get_u64("transport.traceLimit")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(defaults.trace_limit),
        }
    }
}

pub fn endpoint_env(kind: ModelKind) -> &'static str {
    match kind {
        ModelKind::Lp => LP_URL_ENV,
        ModelKind::Transport => TRANSPORT_URL_ENV,
        ModelKind::Network => NETWORK_URL_ENV,
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}
