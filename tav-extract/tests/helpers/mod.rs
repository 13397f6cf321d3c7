//! Test Helper Utilities
//!
//! Builds EAF documents on disk for integration tests

#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// One annotation to place on a tier: (id, start ms, end ms, value)
pub type TestAnnotation<'a> = (&'a str, i64, i64, &'a str);

/// One tier: (tier id, participant, annotations)
pub type TestTier<'a> = (&'a str, Option<&'a str>, Vec<TestAnnotation<'a>>);

/// Render an EAF document with one time slot per annotation boundary
pub fn eaf_xml(media_url: Option<&str>, tiers: &[TestTier<'_>]) -> String {
    let mut slots = String::new();
    let mut body = String::new();
    let mut slot_index = 0;

    for (tier_id, participant, annotations) in tiers {
        let participant_attr = participant
            .map(|p| format!(" PARTICIPANT=\"{}\"", p))
            .unwrap_or_default();
        let parent_attr = if *tier_id == "Task" {
            String::new()
        } else {
            " PARENT_REF=\"Task\"".to_string()
        };
        writeln!(
            body,
            "  <TIER LINGUISTIC_TYPE_REF=\"default-lt\" TIER_ID=\"{}\"{}{}>",
            tier_id, participant_attr, parent_attr
        )
        .unwrap();

        for (ann_id, start, end, value) in annotations {
            slot_index += 1;
            let start_slot = format!("ts{}", slot_index);
            writeln!(slots, "    <TIME_SLOT TIME_SLOT_ID=\"{}\" TIME_VALUE=\"{}\"/>", start_slot, start).unwrap();
            slot_index += 1;
            let end_slot = format!("ts{}", slot_index);
            writeln!(slots, "    <TIME_SLOT TIME_SLOT_ID=\"{}\" TIME_VALUE=\"{}\"/>", end_slot, end).unwrap();

            writeln!(
                body,
                "    <ANNOTATION><ALIGNABLE_ANNOTATION ANNOTATION_ID=\"{}\" TIME_SLOT_REF1=\"{}\" TIME_SLOT_REF2=\"{}\"><ANNOTATION_VALUE>{}</ANNOTATION_VALUE></ALIGNABLE_ANNOTATION></ANNOTATION>",
                ann_id, start_slot, end_slot, value
            )
            .unwrap();
        }

        body.push_str("  </TIER>\n");
    }

    let header = media_url
        .map(|url| {
            format!(
                "  <HEADER MEDIA_FILE=\"\" TIME_UNITS=\"milliseconds\"><MEDIA_DESCRIPTOR MIME_TYPE=\"video/mp4\" RELATIVE_MEDIA_URL=\"{}\"/></HEADER>\n",
                url
            )
        })
        .unwrap_or_default();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ANNOTATION_DOCUMENT FORMAT=\"3.0\" VERSION=\"3.0\">\n{}  <TIME_ORDER>\n{}  </TIME_ORDER>\n{}</ANNOTATION_DOCUMENT>\n",
        header, slots, body
    )
}

/// Write content to `dir/name`, creating parent directories
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
