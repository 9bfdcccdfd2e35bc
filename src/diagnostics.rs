//! Timing report types emitted by the benchmark tool.
use serde::{Deserialize, Serialize};

/// One timed filter pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRun {
    pub label: String,
    /// Worker threads used by the pass (1 for the serial reference).
    pub workers: usize,
    pub elapsed_ms: f64,
    /// Whether the pass produced the same bytes as the serial reference.
    pub matches_reference: bool,
}

impl FilterRun {
    pub fn new(label: impl Into<String>, workers: usize, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            workers,
            elapsed_ms,
            matches_reference: true,
        }
    }
}

/// Aggregated timings for one input image.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    pub width: usize,
    pub height: usize,
    pub runs: Vec<FilterRun>,
}

impl FilterReport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            runs: Vec::new(),
        }
    }

    pub fn push(&mut self, run: FilterRun) {
        self.runs.push(run);
    }
}
