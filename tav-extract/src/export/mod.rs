//! JSON export of pipeline results
//!
//! Writes one pretty-printed JSON file per result set into the output
//! directory, creating it if needed:
//! - `task_hierarchies.json`
//! - `action_sequences.json`
//! - `vocabulary_stats.json`
//! - `action_categories.json`
//! - `batch_report.json` (when a report is supplied)

pub mod summary;

pub use summary::SummaryFormatter;

use crate::models::{ActionSequence, Annotation};
use crate::workflow::{BatchReport, Stage1Pipeline};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const HIERARCHIES_FILE: &str = "task_hierarchies.json";
pub const SEQUENCES_FILE: &str = "action_sequences.json";
pub const VOCABULARY_FILE: &str = "vocabulary_stats.json";
pub const CATEGORIES_FILE: &str = "action_categories.json";
pub const REPORT_FILE: &str = "batch_report.json";

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// Directory creation or file write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Exported form of one annotation segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub value: String,
    pub start: i64,
    pub end: i64,
    pub duration: i64,
}

impl From<&Annotation> for SegmentRecord {
    fn from(ann: &Annotation) -> Self {
        Self {
            value: ann.value.clone(),
            start: ann.start_time,
            end: ann.end_time,
            duration: ann.duration,
        }
    }
}

/// Exported form of one action sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub ot_id: String,
    pub task_name: String,
    pub video_file: String,
    pub total_duration: i64,
    pub num_subtasks: usize,
    pub num_components: usize,
    pub subtasks: Vec<SegmentRecord>,
    pub components: Vec<SegmentRecord>,
}

impl From<&ActionSequence> for SequenceRecord {
    fn from(seq: &ActionSequence) -> Self {
        Self {
            ot_id: seq.ot_id.clone(),
            task_name: seq.task_name.clone(),
            video_file: seq.video_file.clone(),
            total_duration: seq.total_duration,
            num_subtasks: seq.num_subtasks(),
            num_components: seq.num_components(),
            subtasks: seq.subtask_annotations.iter().map(SegmentRecord::from).collect(),
            components: seq.component_annotations.iter().map(SegmentRecord::from).collect(),
        }
    }
}

/// What an export run wrote
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub task_count: usize,
    pub sequence_count: usize,
    pub unique_actions: usize,
    pub total_occurrences: usize,
}

impl ExportSummary {
    pub fn display_lines(&self) -> Vec<String> {
        vec![
            format!("Exported results to {}", self.output_dir.display()),
            format!("  - Task hierarchies: {} tasks", self.task_count),
            format!("  - Action sequences: {} videos", self.sequence_count),
            format!("  - Unique actions: {}", self.unique_actions),
            format!("  - Total occurrences: {}", self.total_occurrences),
        ]
    }
}

/// Result exporter
pub struct ResultExporter;

impl ResultExporter {
    /// Write all result files for a finished pipeline
    pub fn export(
        pipeline: &Stage1Pipeline,
        report: Option<&BatchReport>,
        output_dir: &Path,
    ) -> Result<ExportSummary, ExportError> {
        fs::create_dir_all(output_dir)?;

        let stats = pipeline.vocabulary().vocabulary_stats();
        let categories = pipeline.vocabulary().categorize_actions();
        let sequences: Vec<SequenceRecord> =
            pipeline.sequences().iter().map(SequenceRecord::from).collect();

        let mut files = vec![
            write_json(&output_dir.join(HIERARCHIES_FILE), pipeline.hierarchies())?,
            write_json(&output_dir.join(SEQUENCES_FILE), &sequences)?,
            write_json(&output_dir.join(VOCABULARY_FILE), &stats)?,
            write_json(&output_dir.join(CATEGORIES_FILE), &categories)?,
        ];

        if let Some(report) = report {
            files.push(write_json(&output_dir.join(REPORT_FILE), report)?);
        }

        tracing::info!(
            files = files.len(),
            "Exported results to {}",
            output_dir.display()
        );

        Ok(ExportSummary {
            output_dir: output_dir.to_path_buf(),
            files,
            task_count: pipeline.hierarchies().len(),
            sequence_count: sequences.len(),
            unique_actions: stats.total_unique_actions,
            total_occurrences: stats.total_action_occurrences,
        })
    }
}

/// Pretty-print a value to `path`, returning the path written
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf, ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_record_counts() {
        let seq = ActionSequence {
            ot_id: "OT19".to_string(),
            task_name: "TShirt_Off".to_string(),
            video_file: "GH010406.MP4".to_string(),
            task_annotations: vec![Annotation::new("Task", "TShirt_Off", 0, 900, "a1", None)],
            subtask_annotations: vec![Annotation::new(
                "Subtask",
                "Lift shirt",
                100,
                400,
                "a2",
                Some("Task".to_string()),
            )],
            component_annotations: Vec::new(),
            total_duration: 900,
        };

        let record = SequenceRecord::from(&seq);
        assert_eq!(record.num_subtasks, 1);
        assert_eq!(record.num_components, 0);
        assert_eq!(
            record.subtasks[0],
            SegmentRecord {
                value: "Lift shirt".to_string(),
                start: 100,
                end: 400,
                duration: 300,
            }
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["video_file"], "GH010406.MP4");
        assert!(json.get("task_annotations").is_none());
    }
}
