//! codebrief — heuristic codebase summarizer.
//!
//! Scans a directory of source files, splits each file into top-level
//! function/class blocks with line-by-line heuristics (no parser), asks a
//! language model for a natural-language summary per block, and writes a
//! structured JSON report.
//!
//! # Modules
//!
//! - [`extract`] — The block-extraction core: indentation-based and
//!   brace-based segmenters dispatched by extension
//! - [`scan`] — Non-recursive directory scan and extractor dispatch
//! - [`summarize`] — The `Summarizer` trait and its OpenAI-compatible backend
//! - [`report`] — Summary attachment and JSON report output
//! - [`types`] — Core types shared across the crate

pub mod extract;
pub mod report;
pub mod scan;
pub mod summarize;
pub mod types;

use std::path::Path;
use tracing::{debug, warn};
use types::Config;

// ---------------------------------------------------------------------------
// .codebrief.toml config loading
// ---------------------------------------------------------------------------

/// Known keys in `.codebrief.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["model", "base_url", "temperature", "max_tokens"];

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Load summarizer configuration from `.codebrief.toml` in the scanned
/// directory, merged over defaults.
///
/// If the file doesn't exist or can't be parsed, returns defaults with a
/// warning. Unknown keys trigger a warning with a typo suggestion.
pub fn load_config(dir: &Path) -> Config {
    let mut config = Config::default();
    let config_path = dir.join(".codebrief.toml");

    if !config_path.exists() {
        return config;
    }

    debug!("Loading .codebrief.toml");
    let Ok(content) = std::fs::read_to_string(&config_path) else {
        warn!("Could not read .codebrief.toml");
        return config;
    };
    let table: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(_) => {
            warn!("Failed to parse .codebrief.toml");
            return config;
        }
    };

    // Validate keys — warn on unknown
    for key in table.keys() {
        if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            let suggestion =
                KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k)).unwrap();
            if edit_distance(key, suggestion) <= 3 {
                warn!(
                    key = key.as_str(),
                    suggestion = *suggestion,
                    "Unknown key in .codebrief.toml — did you mean '{suggestion}'?"
                );
            } else {
                warn!(
                    key = key.as_str(),
                    "Unknown key in .codebrief.toml (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                );
            }
        }
    }

    if let Some(model) = table.get("model").and_then(|v| v.as_str()) {
        config.model = model.to_string();
    }
    if let Some(url) = table.get("base_url").and_then(|v| v.as_str()) {
        config.base_url = url.to_string();
    }
    if let Some(t) = table.get("temperature").and_then(|v| v.as_float()) {
        config.temperature = t as f32;
    }
    if let Some(m) = table.get("max_tokens").and_then(|v| v.as_integer()) {
        config.max_tokens = m as u32;
    }

    config
}
