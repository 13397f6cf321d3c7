//! Per-document sequence assembly
//!
//! Splits one document's annotations into the Task / Subtask /
//! subtask_Component tiers, derives task name and total duration, and feeds
//! the full annotation list into the vocabulary. This is the only place the
//! vocabulary is updated for a document, so each document counts once.

use crate::error::ExtractResult;
use crate::models::{ActionSequence, Annotation, COMPONENT_TIER, SUBTASK_TIER, TASK_TIER, UNKNOWN};
use crate::services::eaf_parser::EafDocument;
use crate::services::vocabulary::VocabularyBuilder;

/// Sequence assembler
pub struct SequenceAssembler;

impl SequenceAssembler {
    /// Extract and assemble one parsed document
    ///
    /// # Errors
    /// Propagates extraction errors; the vocabulary is untouched when
    /// extraction fails.
    pub fn assemble(
        document: &EafDocument,
        vocabulary: &mut VocabularyBuilder,
    ) -> ExtractResult<ActionSequence> {
        let annotations = document.annotations()?;
        Ok(Self::assemble_annotations(
            document.participant_id(),
            document.media_filename(),
            annotations,
            vocabulary,
        ))
    }

    /// Assemble already-extracted annotations
    ///
    /// Annotations on other tiers are in no group but still count toward
    /// total duration and the vocabulary.
    pub fn assemble_annotations(
        ot_id: String,
        video_file: String,
        annotations: Vec<Annotation>,
        vocabulary: &mut VocabularyBuilder,
    ) -> ActionSequence {
        let on_tier = |tier: &str| -> Vec<Annotation> {
            annotations
                .iter()
                .filter(|a| a.is_on_tier(tier))
                .cloned()
                .collect()
        };

        let task_annotations = on_tier(TASK_TIER);
        let subtask_annotations = on_tier(SUBTASK_TIER);
        let component_annotations = on_tier(COMPONENT_TIER);

        let task_name = task_annotations
            .first()
            .map(|a| a.value.clone())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let total_duration = annotations.iter().map(|a| a.end_time).max().unwrap_or(0);

        vocabulary.add_annotations(&task_name, &annotations);

        tracing::debug!(
            ot_id = %ot_id,
            task = %task_name,
            annotations = annotations.len(),
            subtasks = subtask_annotations.len(),
            components = component_annotations.len(),
            total_duration_ms = total_duration,
            "Assembled action sequence"
        );

        ActionSequence {
            ot_id,
            task_name,
            video_file,
            task_annotations,
            subtask_annotations,
            component_annotations,
            total_duration,
        }
    }
}
