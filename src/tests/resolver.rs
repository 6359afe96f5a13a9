use super::{resolve_explicit, resolve_from_cursor};
use crate::document::Document;
use crate::scanner::scan;
use crate::section::HeadingRecord;

// The same Unit Operation performed twice
const REPEATED: &str = "---
title: Repeated
---
### [UHW100] A
#### Method
- (first)
### [UHW100] A
#### Method
- (second)";

const SHARED_PREFIX: &str = "### [UHW400] X
#### Method
- (a)
### [UHW4001] Y
#### Method
- (b)";

#[test]
fn test_explicit_returns_first_occurrence() {
    let doc = Document::new(REPEATED);
    let records = scan(&doc);
    let found = resolve_explicit(&doc, &records, "UHW100", "Method").unwrap();
    assert_eq!(found, HeadingRecord::new("UHW100", "Method", 4));
}

#[test]
fn test_cursor_is_position_sensitive() {
    let doc = Document::new(REPEATED);
    let records = scan(&doc);

    let first = resolve_from_cursor(&doc, &records, 5).unwrap();
    assert_eq!(first.heading_line, 4);

    let second = resolve_from_cursor(&doc, &records, 8).unwrap();
    assert_eq!(second, HeadingRecord::new("UHW100", "Method", 7));
}

#[test]
fn test_cursor_on_heading_resolves_to_itself() {
    let doc = Document::new(REPEATED);
    let records = scan(&doc);
    assert_eq!(
        resolve_from_cursor(&doc, &records, 7).map(|r| r.heading_line),
        Some(7)
    );
}

#[test]
fn test_cursor_outside_any_section() {
    let doc = Document::new(REPEATED);
    let records = scan(&doc);
    // Front matter
    assert_eq!(resolve_from_cursor(&doc, &records, 0), None);
    // UO heading lines belong to no section
    assert_eq!(resolve_from_cursor(&doc, &records, 3), None);
    assert_eq!(resolve_from_cursor(&doc, &records, 6), None);
}

#[test]
fn test_cursor_past_end_uses_last_line() {
    let doc = Document::new(REPEATED);
    let records = scan(&doc);
    assert_eq!(
        resolve_from_cursor(&doc, &records, 100).map(|r| r.heading_line),
        Some(7)
    );
}

#[test]
fn test_shared_prefix_ids_do_not_collide() {
    let doc = Document::new(SHARED_PREFIX);
    let records = scan(&doc);

    let short = resolve_explicit(&doc, &records, "UHW400", "Method").unwrap();
    assert_eq!(short.heading_line, 1);

    let long = resolve_explicit(&doc, &records, "UHW4001", "Method").unwrap();
    assert_eq!(long.heading_line, 4);

    assert_eq!(resolve_explicit(&doc, &records, "UHW40", "Method"), None);
}

#[test]
fn test_explicit_section_must_match_exactly() {
    let doc = Document::new(SHARED_PREFIX);
    let records = scan(&doc);
    assert_eq!(resolve_explicit(&doc, &records, "UHW400", "method"), None);
    assert_eq!(resolve_explicit(&doc, &records, "UHW400", "Meth"), None);
}

#[test]
fn test_cursor_and_explicit_agree() {
    let doc = Document::new(
        "---\ntitle: \"My Experiment\"\n---\n### [UHW100] Transformation\n#### Method\n- (method used in this step)\n\n#### Output\n- (samples to next step)\n### Notes\nextra",
    );
    let records = scan(&doc);
    assert_eq!(records.len(), 2);

    let body_lines = [(4, 4..=6), (7, 7..=10)];
    for (record, (heading_line, lines)) in records.iter().zip(body_lines) {
        assert_eq!(record.heading_line, heading_line);
        let explicit = resolve_explicit(&doc, &records, &record.uo_id, &record.section).unwrap();
        for line in lines {
            let cursor = resolve_from_cursor(&doc, &records, line).unwrap();
            assert_eq!(cursor, explicit, "cursor on line {line} disagrees");
        }
    }
}

#[test]
fn test_records_from_another_snapshot_do_not_resolve() {
    let doc = Document::new(REPEATED);
    assert_eq!(resolve_explicit(&doc, &[], "UHW100", "Method"), None);
    assert_eq!(resolve_from_cursor(&doc, &[], 5), None);
}

#[test]
fn test_empty_document() {
    let doc = Document::new("");
    assert_eq!(resolve_from_cursor(&doc, &[], 0), None);
    assert_eq!(resolve_explicit(&doc, &[], "UHW100", "Method"), None);
}
