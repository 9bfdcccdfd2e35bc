use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BenchToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Worker counts to benchmark the parallel engine at.
    #[serde(default = "default_workers")]
    pub workers: Vec<usize>,
    /// Where to write the JSON timing report; skipped when absent.
    #[serde(default)]
    pub report: Option<PathBuf>,
    /// Where to write the filtered image; skipped when absent.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_workers() -> Vec<usize> {
    vec![1, 2, 4, 8]
}

pub fn load_config(path: &Path) -> Result<BenchToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
