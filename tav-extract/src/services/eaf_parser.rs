//! ELAN Annotation Format (EAF) parsing
//!
//! Reads one EAF document into an owned tier list plus its time slot table,
//! then resolves alignable annotations against that table.
//!
//! Extracts:
//! - Alignable annotations per tier, in document order
//! - Operator id (first non-empty PARTICIPANT attribute)
//! - Linked media filename (first MEDIA_DESCRIPTOR)

use crate::error::{ExtractError, ExtractResult};
use crate::models::{Annotation, UNKNOWN};
use crate::services::time_slots::TimeSlotTable;
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;

/// Root element of every EAF file
const ROOT_TAG: &str = "ANNOTATION_DOCUMENT";

/// Alignable annotation as written in the file, before slot resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnnotation {
    pub annotation_id: String,
    pub start_slot: String,
    pub end_slot: String,
    /// ANNOTATION_VALUE text; `None` when the node itself is absent
    pub value: Option<String>,
}

/// One TIER element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub tier_id: String,
    pub parent_ref: Option<String>,
    pub participant: Option<String>,
    pub annotations: Vec<RawAnnotation>,
}

/// Parsed EAF document
#[derive(Debug, Clone)]
pub struct EafDocument {
    time_slots: TimeSlotTable,
    tiers: Vec<Tier>,
    /// RELATIVE_MEDIA_URL of the first MEDIA_DESCRIPTOR, if any descriptor exists
    media_url: Option<String>,
}

impl EafDocument {
    /// Read and parse an EAF file
    pub fn from_path(path: &Path) -> ExtractResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse EAF XML text
    pub fn parse(xml: &str) -> ExtractResult<Self> {
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)?;
        let root = doc.root_element();

        if !root.has_tag_name(ROOT_TAG) {
            return Err(ExtractError::malformed(format!(
                "expected root element {}, found {}",
                ROOT_TAG,
                root.tag_name().name()
            )));
        }

        let time_order = child_element(root, "TIME_ORDER")
            .ok_or_else(|| ExtractError::malformed("missing TIME_ORDER element"))?;
        let time_slots = TimeSlotTable::from_time_order(time_order)?;

        let tiers: Vec<Tier> = root
            .children()
            .filter(|n| n.has_tag_name("TIER"))
            .map(read_tier)
            .collect();

        let media_url = root
            .descendants()
            .find(|n| n.has_tag_name("MEDIA_DESCRIPTOR"))
            .map(|n| n.attribute("RELATIVE_MEDIA_URL").unwrap_or("").to_string());

        tracing::debug!(
            time_slots = time_slots.len(),
            tiers = tiers.len(),
            "Parsed EAF document"
        );

        Ok(Self {
            time_slots,
            tiers,
            media_url,
        })
    }

    /// Build a document directly from its parts
    pub fn from_parts(
        time_slots: TimeSlotTable,
        tiers: Vec<Tier>,
        media_url: Option<String>,
    ) -> Self {
        Self {
            time_slots,
            tiers,
            media_url,
        }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn time_slots(&self) -> &TimeSlotTable {
        &self.time_slots
    }

    /// Resolve every alignable annotation, tier by tier
    ///
    /// Output follows document order (tier order, then annotation order),
    /// which is not temporal order across tiers.
    ///
    /// # Errors
    /// `MissingAnnotationValue` if any annotation lacks its value node. The
    /// whole document fails; no partial list is returned.
    pub fn annotations(&self) -> ExtractResult<Vec<Annotation>> {
        let mut annotations = Vec::new();

        for tier in &self.tiers {
            for raw in &tier.annotations {
                let value = raw.value.as_ref().ok_or_else(|| {
                    ExtractError::MissingAnnotationValue {
                        annotation_id: raw.annotation_id.clone(),
                        tier: tier.tier_id.clone(),
                    }
                })?;

                let start_time = self.time_slots.resolve(&raw.start_slot);
                let end_time = self.time_slots.resolve(&raw.end_slot);

                annotations.push(Annotation::new(
                    tier.tier_id.clone(),
                    value.clone(),
                    start_time,
                    end_time,
                    raw.annotation_id.clone(),
                    tier.parent_ref.clone(),
                ));
            }
        }

        Ok(annotations)
    }

    /// Base filename of the linked media, or "" if none is linked
    pub fn media_filename(&self) -> String {
        self.media_url
            .as_deref()
            .map(base_filename)
            .unwrap_or_default()
    }

    /// First non-empty PARTICIPANT across tiers, or "Unknown"
    pub fn participant_id(&self) -> String {
        self.tiers
            .iter()
            .filter_map(|t| t.participant.as_deref())
            .find(|p| !p.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string()
    }
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

fn read_tier(tier: Node<'_, '_>) -> Tier {
    let annotations = tier
        .descendants()
        .filter(|n| n.has_tag_name("ALIGNABLE_ANNOTATION"))
        .map(|ann| RawAnnotation {
            annotation_id: ann.attribute("ANNOTATION_ID").unwrap_or("").to_string(),
            start_slot: ann.attribute("TIME_SLOT_REF1").unwrap_or("").to_string(),
            end_slot: ann.attribute("TIME_SLOT_REF2").unwrap_or("").to_string(),
            value: child_element(ann, "ANNOTATION_VALUE")
                .map(|v| v.text().unwrap_or("").to_string()),
        })
        .collect();

    Tier {
        tier_id: tier.attribute("TIER_ID").unwrap_or("").to_string(),
        parent_ref: tier.attribute("PARENT_REF").map(str::to_string),
        participant: tier.attribute("PARTICIPANT").map(str::to_string),
        annotations,
    }
}

/// Last path component of a media URL
///
/// URLs use forward slashes (`file:///C:/videos/GH010406.MP4`,
/// `./GH010406.MP4`), so the split is done on `/` regardless of platform.
fn base_filename(url: &str) -> String {
    let name = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");
    if name == "." {
        String::new()
    } else {
        name.to_string()
    }
}
