//! Action vocabulary aggregation
//!
//! Accumulates, across every processed document:
//! - action value → occurrence count
//! - task name → distinct action values observed
//! - action value → occurrence contexts (task, tier, start, duration)
//!
//! All maps keep discovery order, which is the tie-break when ranking
//! actions by frequency.
//!
//! Categorization is a lexical heuristic: a case-insensitive substring scan
//! over a fixed keyword table where the first keyword *in table order* wins.
//! It is approximate and order-dependent ("PullAndLean" is `pull`, never
//! `lean`).

use crate::models::Annotation;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Lexical action category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Orient,
    Adjust,
    Thread,
    Pull,
    Roll,
    Lift,
    Lower,
    Lean,
    Unsleeve,
    /// Matches no keyword
    Other,
}

impl ActionCategory {
    /// Every category in output order
    pub const ALL: [ActionCategory; 10] = [
        ActionCategory::Orient,
        ActionCategory::Adjust,
        ActionCategory::Thread,
        ActionCategory::Pull,
        ActionCategory::Roll,
        ActionCategory::Lift,
        ActionCategory::Lower,
        ActionCategory::Lean,
        ActionCategory::Unsleeve,
        ActionCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCategory::Orient => "orient",
            ActionCategory::Adjust => "adjust",
            ActionCategory::Thread => "thread",
            ActionCategory::Pull => "pull",
            ActionCategory::Roll => "roll",
            ActionCategory::Lift => "lift",
            ActionCategory::Lower => "lower",
            ActionCategory::Lean => "lean",
            ActionCategory::Unsleeve => "unsleeve",
            ActionCategory::Other => "other",
        }
    }
}

/// Keyword table, scanned in order; first match wins
pub const CATEGORY_KEYWORDS: [(&str, ActionCategory); 9] = [
    ("orient", ActionCategory::Orient),
    ("adjust", ActionCategory::Adjust),
    ("thread", ActionCategory::Thread),
    ("pull", ActionCategory::Pull),
    ("roll", ActionCategory::Roll),
    ("lift", ActionCategory::Lift),
    ("lower", ActionCategory::Lower),
    ("lean", ActionCategory::Lean),
    ("unsleeve", ActionCategory::Unsleeve),
];

/// Category of a single action value
pub fn categorize(action: &str) -> ActionCategory {
    let action_lower = action.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| action_lower.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(ActionCategory::Other)
}

/// Where one occurrence of an action was observed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionContext {
    pub task: String,
    pub tier: String,
    pub start_time: i64,
    pub duration: i64,
}

/// Read-only snapshot of vocabulary statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub total_unique_actions: usize,
    pub total_action_occurrences: usize,
    /// (action, count), descending count, ties in discovery order
    pub actions_by_frequency: Vec<(String, usize)>,
    /// Task → number of distinct actions observed
    pub tasks_coverage: IndexMap<String, usize>,
}

/// Categorized actions, every category present in `ActionCategory::ALL` order
pub type CategorizedActions = IndexMap<ActionCategory, Vec<String>>;

/// Action vocabulary accumulated across documents
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    actions: IndexMap<String, usize>,
    task_actions: IndexMap<String, IndexSet<String>>,
    action_contexts: IndexMap<String, Vec<ActionContext>>,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's annotations under its task name
    ///
    /// No deduplication: adding the same annotations twice doubles their
    /// counts and contexts.
    pub fn add_annotations(&mut self, task_name: &str, annotations: &[Annotation]) {
        for ann in annotations {
            *self.actions.entry(ann.value.clone()).or_insert(0) += 1;
            self.task_actions
                .entry(task_name.to_string())
                .or_default()
                .insert(ann.value.clone());
            self.action_contexts
                .entry(ann.value.clone())
                .or_default()
                .push(ActionContext {
                    task: task_name.to_string(),
                    tier: ann.tier.clone(),
                    start_time: ann.start_time,
                    duration: ann.duration,
                });
        }
    }

    pub fn vocabulary_stats(&self) -> VocabularyStats {
        let mut actions_by_frequency: Vec<(String, usize)> = self
            .actions
            .iter()
            .map(|(action, count)| (action.clone(), *count))
            .collect();
        // sort_by is stable, so equal counts keep discovery order
        actions_by_frequency.sort_by(|a, b| b.1.cmp(&a.1));

        VocabularyStats {
            total_unique_actions: self.actions.len(),
            total_action_occurrences: self.actions.values().sum(),
            actions_by_frequency,
            tasks_coverage: self
                .task_actions
                .iter()
                .map(|(task, actions)| (task.clone(), actions.len()))
                .collect(),
        }
    }

    /// Partition every distinct action into exactly one category
    pub fn categorize_actions(&self) -> CategorizedActions {
        let mut categories: CategorizedActions = ActionCategory::ALL
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();

        for action in self.actions.keys() {
            categories
                .entry(categorize(action))
                .or_default()
                .push(action.clone());
        }

        categories
    }

    /// Occurrence count of an action (0 if never seen)
    pub fn action_count(&self, action: &str) -> usize {
        self.actions.get(action).copied().unwrap_or(0)
    }

    /// Occurrence contexts of an action, in insertion order
    pub fn contexts(&self, action: &str) -> &[ActionContext] {
        self.action_contexts
            .get(action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct actions observed for a task
    pub fn task_actions(&self, task: &str) -> Option<&IndexSet<String>> {
        self.task_actions.get(task)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
