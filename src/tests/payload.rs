use super::{PopulateRequest, PopulateResponse, PreferenceRecord};
use crate::document::Document;
use crate::error::Error;
use crate::locate::{locate, SectionContext, Target};

fn method_context() -> SectionContext {
    let doc = Document::new(
        "---\ntitle: Cloning\n---\n### [UHW100] Transformation\n#### Method\n- (method used in this step)\n",
    );
    locate(&doc, &Target::explicit("UHW100", "Method")).unwrap()
}

fn response() -> PopulateResponse {
    serde_json::from_str(
        r#"{"uo_id": "UHW100", "section": "Method", "options": ["- Heat shock", "- Electroporation"]}"#,
    )
    .unwrap()
}

#[test]
fn test_request_wire_format() {
    let context = method_context();
    let request = PopulateRequest::from(&context);
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["uo_id"], "UHW100");
    assert_eq!(json["section"], "Method");
    assert_eq!(json["query"], "Cloning");
    assert_eq!(json["file_content"], context.file_content.as_str());
}

#[test]
fn test_response_without_evaluations() {
    let response = response();
    assert!(response.supervisor_evaluations.is_empty());
    assert_eq!(response.choose(1).unwrap(), "- Electroporation");
}

#[test]
fn test_choose_out_of_range() {
    let err = response().choose(5).unwrap_err();
    assert!(matches!(
        err,
        Error::OptionOutOfRange {
            index: 5,
            available: 2
        }
    ));
}

#[test]
fn test_choose_from_empty_response() {
    let empty: PopulateResponse =
        serde_json::from_str(r#"{"uo_id": "UHW100", "section": "Method"}"#).unwrap();
    assert!(matches!(empty.choose(0), Err(Error::NoOptions)));
}

#[test]
fn test_preference_record_rejects_other_options() {
    let context = method_context();
    let record = PreferenceRecord::new(
        &context,
        &response(),
        0,
        "- Heat shock at 42C",
        "labnote/001_Cloning/001_WD070.md",
        "updated",
    )
    .unwrap();

    assert_eq!(record.chosen_original, "- Heat shock");
    assert_eq!(record.chosen_edited, "- Heat shock at 42C");
    assert_eq!(record.rejected, vec!["- Electroporation".to_string()]);
    assert_eq!(record.query, "Cloning");
    assert_eq!(record.file_content, "updated");
}
