//! Console summary formatting
//!
//! Renders pipeline results and batch outcome as plain text for the CLI.

use crate::workflow::{BatchReport, Stage1Pipeline};
use std::collections::HashSet;
use tav_common::human_time::format_millis;

/// How many tasks to list under the hierarchy heading
const HIERARCHY_PREVIEW: usize = 3;
/// How many actions to list in the frequency ranking
const TOP_ACTIONS: usize = 10;

/// CLI formatter for extraction results
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Format the full extraction summary
    pub fn format_summary(pipeline: &Stage1Pipeline) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", "=".repeat(60)));
        output.push_str("STAGE 1: PARSE & EXTRACT - SUMMARY\n");
        output.push_str(&format!("{}\n", "=".repeat(60)));

        let hierarchies = pipeline.hierarchies();
        output.push_str(&format!("\nTask Hierarchies: {}\n", hierarchies.len()));
        for (task_name, hierarchy) in hierarchies.iter().take(HIERARCHY_PREVIEW) {
            output.push_str(&format!(
                "  • {}: {} subtasks\n",
                task_name,
                hierarchy.subtask_count()
            ));
        }

        let sequences = pipeline.sequences();
        let operators: HashSet<&str> = sequences.iter().map(|s| s.ot_id.as_str()).collect();
        let tasks: HashSet<&str> = sequences.iter().map(|s| s.task_name.as_str()).collect();
        let annotated_ms = sequences
            .iter()
            .fold(0i64, |total, s| total.saturating_add(s.total_duration));

        output.push_str(&format!("\nAction Sequences: {}\n", sequences.len()));
        output.push_str(&format!("  • Unique OTs: {}\n", operators.len()));
        output.push_str(&format!("  • Unique tasks: {}\n", tasks.len()));
        output.push_str(&format!("  • Annotated time: {}\n", format_millis(annotated_ms)));

        let stats = pipeline.vocabulary().vocabulary_stats();
        output.push_str("\nAction Vocabulary:\n");
        output.push_str(&format!("  • Unique actions: {}\n", stats.total_unique_actions));
        output.push_str(&format!(
            "  • Total occurrences: {}\n",
            stats.total_action_occurrences
        ));

        output.push_str(&format!("\nTop {} Most Frequent Actions:\n", TOP_ACTIONS));
        for (action, count) in stats.actions_by_frequency.iter().take(TOP_ACTIONS) {
            output.push_str(&format!("  • {}: {} times\n", action, count));
        }

        output.push_str("\nAction Categories:\n");
        for (category, actions) in pipeline.vocabulary().categorize_actions() {
            if !actions.is_empty() {
                output.push_str(&format!(
                    "  • {}: {} actions\n",
                    category.as_str(),
                    actions.len()
                ));
            }
        }

        output
    }

    /// Format processed/failed counts and one line per failure
    pub fn format_batch_report(report: &BatchReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\nDocuments: {} discovered, {} processed, {} failed\n",
            report.documents_discovered,
            report.processed.len(),
            report.failures.len()
        ));

        if let Some(elapsed) = report.elapsed_ms() {
            output.push_str(&format!("Elapsed: {}\n", format_millis(elapsed)));
        }

        for failure in &report.failures {
            output.push_str(&format!("  ✗ {}: {}\n", failure.file_name(), failure.message));
        }

        output
    }
}
