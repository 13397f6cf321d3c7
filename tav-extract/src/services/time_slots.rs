//! Time slot resolution
//!
//! Maps TIME_SLOT_ID values to millisecond offsets from one document's
//! TIME_ORDER table. A table is scoped to the document it was read from.

use crate::error::{ExtractError, ExtractResult};
use roxmltree::Node;
use std::collections::HashMap;

/// Slot id → millisecond lookup for one document
#[derive(Debug, Clone, Default)]
pub struct TimeSlotTable {
    slots: HashMap<String, i64>,
}

impl TimeSlotTable {
    /// Build table from (id, value) pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self {
            slots: pairs.into_iter().map(|(id, ms)| (id.into(), ms)).collect(),
        }
    }

    /// Read TIME_SLOT children of a TIME_ORDER element
    ///
    /// Every slot must carry an integer TIME_VALUE; a missing or non-integer
    /// value makes the document malformed.
    pub fn from_time_order(time_order: Node<'_, '_>) -> ExtractResult<Self> {
        let mut slots = HashMap::new();

        for slot in time_order
            .children()
            .filter(|n| n.has_tag_name("TIME_SLOT"))
        {
            let Some(slot_id) = slot.attribute("TIME_SLOT_ID") else {
                continue;
            };
            let raw_value = slot.attribute("TIME_VALUE").ok_or_else(|| {
                ExtractError::malformed(format!("TIME_SLOT {} has no TIME_VALUE", slot_id))
            })?;

            let value = raw_value.trim().parse::<i64>().map_err(|e| {
                ExtractError::malformed(format!(
                    "TIME_SLOT {} has invalid TIME_VALUE {:?}: {}",
                    slot_id, raw_value, e
                ))
            })?;

            slots.insert(slot_id.to_string(), value);
        }

        Ok(Self { slots })
    }

    /// Millisecond value of a slot, or 0 if the slot is unknown
    pub fn resolve(&self, slot_id: &str) -> i64 {
        self.slots.get(slot_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
