//! Point-count reporting for the generation pipelines.
//!
//! Every pipeline reports how many points it holds before and after each
//! deduplication step. Counts go through the [`Diagnostics`] trait so the
//! CLI can log them while tests record and assert on them.

use std::fmt;

/// A reporting point in a generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Continuous samples before voxelisation.
    Sampled,
    /// Unique voxels after voxelisation.
    Unique,
    /// Brush points stamped along a trajectory, before deduplication.
    Swept,
    /// Unique voxels of the thickened body.
    Final,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Sampled => "sampled points",
            Stage::Unique => "unique voxels",
            Stage::Swept => "swept points",
            Stage::Final => "final voxels",
        };
        f.write_str(label)
    }
}

/// Receives point counts from the generation pipelines.
pub trait Diagnostics {
    /// Report `count` points for `subject` at `stage`.
    ///
    /// `subject` names the pipeline, e.g. `"cylinder"` or
    /// `"helix trajectory"`.
    fn record(&mut self, subject: &str, stage: Stage, count: usize);
}

/// Forwards counts to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn record(&mut self, subject: &str, stage: Stage, count: usize) {
        log::info!("{}: {} {}", subject, count, stage);
    }
}

/// Keeps every reported count in order of arrival.
#[derive(Debug, Clone, Default)]
pub struct RecordedCounts {
    pub entries: Vec<(String, Stage, usize)>,
}

impl RecordedCounts {
    /// The most recent count reported for `subject` at `stage`.
    pub fn get(&self, subject: &str, stage: Stage) -> Option<usize> {
        self.entries
            .iter()
            .rev()
            .find(|(s, st, _)| s == subject && *st == stage)
            .map(|&(_, _, count)| count)
    }
}

impl Diagnostics for RecordedCounts {
    fn record(&mut self, subject: &str, stage: Stage, count: usize) {
        self.entries.push((subject.to_string(), stage, count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_counts_latest_wins() {
        let mut counts = RecordedCounts::default();
        counts.record("sphere", Stage::Sampled, 10);
        counts.record("cylinder", Stage::Sampled, 20);
        counts.record("sphere", Stage::Sampled, 30);

        assert_eq!(counts.get("sphere", Stage::Sampled), Some(30));
        assert_eq!(counts.get("cylinder", Stage::Sampled), Some(20));
        assert_eq!(counts.get("cylinder", Stage::Unique), None);
        assert_eq!(counts.entries.len(), 3);
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::Unique.to_string(), "unique voxels");
        assert_eq!(Stage::Swept.to_string(), "swept points");
    }
}
