use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::advisor::Correction;
use crate::observation::Observation;
use crate::scoring::Assessment;

/// Machine-readable result for one observation file
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub assessed_at: DateTime<Utc>,
    pub source: String,
    /// The record that was scored, after any estimate was merged
    pub observation: Observation,
    /// `None` when the scoring function reported no result
    pub assessment: Option<Assessment>,
    pub corrections: Vec<Correction>,
}

impl Report {
    pub fn new(
        source: impl Into<String>,
        observation: Observation,
        assessment: Option<Assessment>,
        corrections: Vec<Correction>,
    ) -> Self {
        Self {
            assessed_at: Utc::now(),
            source: source.into(),
            observation,
            assessment,
            corrections,
        }
    }
}

/// Render reports as a pretty JSON array
pub fn render_json(reports: &[Report]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("Failed to serialize report")
}

/// Write reports to a file atomically
///
/// Uses atomic-write-file so a reader never sees a half-written report.
pub fn write_reports(path: &Path, reports: &[Report]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, reports).context("Failed to serialize report")?;
    file.write_all(b"\n").context("Failed to write report")?;

    file.commit()
        .with_context(|| format!("Failed to save report to {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = reports.len(), "wrote report");
    Ok(())
}
