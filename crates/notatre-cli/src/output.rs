//! Rendering of resolved configurations

use anyhow::{Context, Result};
use notatre_core::ConfigurationMap;

use crate::cli::OutputFormat;

pub fn render(configs: &ConfigurationMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Params => Ok(render_params(configs)),
        OutputFormat::Json => render_json(configs),
    }
}

/// `protocol=<p>` followed by one `key=value` line per parameter, per config
fn render_params(configs: &ConfigurationMap) -> String {
    let mut lines = Vec::new();
    for config in configs.values() {
        lines.push(format!("protocol={}", config.protocol()));
        for (name, value) in config.parameters() {
            lines.push(format!("{}={}", name, value));
        }
    }
    lines.join("\n")
}

fn render_json(configs: &ConfigurationMap) -> Result<String> {
    serde_json::to_string_pretty(configs).context("Failed to encode configuration as JSON")
}
