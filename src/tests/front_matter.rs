use super::{extract_query, extract_query_with, parse_front_matter, QueryStyle, FALLBACK_QUERY};

#[test]
fn test_no_front_matter_falls_back() {
    assert_eq!(extract_query("### [UHW100] A\n#### Method"), FALLBACK_QUERY);
    assert_eq!(extract_query(""), "Untitled Experiment");
}

#[test]
fn test_generated_tag_and_quotes_are_stripped() {
    assert_eq!(
        extract_query("---\ntitle: \"[AI Generated] Foo\"\n---\n"),
        "Foo"
    );
    assert_eq!(extract_query("---\ntitle: 'Bar'\n---\n"), "Bar");
    assert_eq!(extract_query("---\ntitle: My Experiment  \n---\n"), "My Experiment");
}

#[test]
fn test_tag_inside_title() {
    assert_eq!(
        extract_query("---\ntitle: Foo [AI Generated] Bar\n---\n"),
        "Foo Bar"
    );
}

#[test]
fn test_crlf_front_matter() {
    assert_eq!(extract_query("---\r\ntitle: \"X\"\r\n---\r\n"), "X");
}

#[test]
fn test_title_must_be_first_key() {
    assert_eq!(
        extract_query("---\nauthor: Kim\ntitle: Late\n---\n"),
        FALLBACK_QUERY
    );
    assert_eq!(extract_query("\n---\ntitle: Indented\n---\n"), FALLBACK_QUERY);
}

#[test]
fn test_empty_title_falls_back() {
    assert_eq!(extract_query("---\ntitle: \"\"\n---\n"), FALLBACK_QUERY);
    assert_eq!(
        extract_query("---\ntitle: [AI Generated]\n---\n"),
        FALLBACK_QUERY
    );
}

#[test]
fn test_malformed_yaml_still_yields_query() {
    let content = "---\ntitle: Foo: bar: [\n---\n";
    assert_eq!(extract_query(content), "Foo: bar: [");
    assert_eq!(parse_front_matter(content), None);
}

#[test]
fn test_custom_style() {
    let style = QueryStyle {
        fallback: "none".to_string(),
        generated_tag: "[Draft]".to_string(),
    };
    assert_eq!(
        extract_query_with("---\ntitle: [Draft] Bar\n---\n", &style),
        "Bar"
    );
    assert_eq!(extract_query_with("no front matter", &style), "none");
}

#[test]
fn test_parse_readme_front_matter() {
    let content = "---
title: Transformation
author: Kim
experiment_type: labnote
created_date: '2025-01-02'
last_updated_date: '2025-01-03'
---

## Goal
";
    let front_matter = parse_front_matter(content).unwrap();
    assert_eq!(front_matter.title, "Transformation");
    assert_eq!(front_matter.author.as_deref(), Some("Kim"));
    assert_eq!(front_matter.experiment_type.as_deref(), Some("labnote"));
    assert_eq!(front_matter.created_date.as_deref(), Some("2025-01-02"));
    assert_eq!(front_matter.last_updated_date.as_deref(), Some("2025-01-03"));
    assert_eq!(front_matter.experimenter, None);
}

#[test]
fn test_parse_workflow_front_matter_with_empty_experimenter() {
    let content = "---\ntitle: WD070 Vector Construction\nexperimenter:\nunknown_key: 1\n---\n## [WD070 Vector Construction]\n";
    let front_matter = parse_front_matter(content).unwrap();
    assert_eq!(front_matter.title, "WD070 Vector Construction");
    assert_eq!(front_matter.experimenter, None);
}

#[test]
fn test_parse_requires_title() {
    assert_eq!(parse_front_matter("---\nauthor: Kim\n---\n"), None);
    assert_eq!(parse_front_matter("no front matter"), None);
}
