//! The JSON shape of assessment documents is a compatibility contract:
//! documents written by other tooling must read back identically.

use example_assessments::engineering_screen;
use proctor::{Assessment, Condition, NumericConstraints, QuestionKind, QuestionType};
use serde_json::json;

#[test]
fn document_round_trips_losslessly() {
    let assessment = engineering_screen();
    let value = serde_json::to_value(&assessment).unwrap();
    let back: Assessment = serde_json::from_value(value).unwrap();
    assert_eq!(back, assessment);
}

#[test]
fn top_level_fields_are_camel_case() {
    let value = serde_json::to_value(engineering_screen()).unwrap();
    for key in [
        "id",
        "jobId",
        "title",
        "description",
        "sections",
        "timeLimit",
        "passingScore",
        "createdAt",
        "updatedAt",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["timeLimit"], json!(45));
    assert_eq!(value["passingScore"], json!(70));
}

#[test]
fn timestamps_are_iso_8601_strings() {
    let value = serde_json::to_value(engineering_screen()).unwrap();
    let created = value["createdAt"].as_str().unwrap();
    assert!(created.contains('T'), "not a timestamp: {created}");
    let updated = value["updatedAt"].as_str().unwrap();
    assert!(updated.contains('T'), "not a timestamp: {updated}");
}

#[test]
fn questions_carry_a_type_tag_and_only_their_constraints() {
    let value = serde_json::to_value(engineering_screen()).unwrap();
    let questions = &value["sections"][0]["questions"];

    let job_title = &questions[0];
    assert_eq!(job_title["type"], json!("short-text"));
    assert_eq!(job_title["maxLength"], json!(250));
    assert!(job_title.get("minLength").is_none());
    assert!(job_title.get("options").is_none());
    assert_eq!(job_title["required"], json!(true));
    assert_eq!(job_title["order"], json!(0));

    let years = &questions[1];
    assert_eq!(years["type"], json!("numeric"));
    assert_eq!(years["min"], json!(0));
    assert_eq!(years["max"], json!(50));
    assert!(years.get("step").is_none());

    let rust_choice = &questions[2];
    assert_eq!(rust_choice["type"], json!("single-choice"));
    assert_eq!(rust_choice["options"], json!(["Yes", "No"]));

    let resume = &questions[4];
    assert_eq!(resume["type"], json!("file-upload"));
    assert_eq!(resume["acceptedFormats"], json!([".pdf", ".doc", ".docx"]));
    assert_eq!(resume["maxSizeMB"], json!(10));
    assert_eq!(resume["maxFiles"], json!(1));
}

#[test]
fn conditional_logic_wire_shape() {
    let assessment = engineering_screen();
    let value = serde_json::to_value(&assessment).unwrap();
    let questions = &value["sections"][0]["questions"];

    // The gated follow-up names its prerequisite by id.
    let details = &questions[3];
    let rule = &details["conditionalLogic"];
    assert_eq!(
        rule["dependsOn"],
        json!(assessment.question(0, 2).unwrap().id().as_str())
    );
    assert_eq!(rule["condition"], json!("equals"));
    assert_eq!(rule["value"], json!("Yes"));

    // Ungated questions have no conditionalLogic key at all.
    assert!(questions[0].get("conditionalLogic").is_none());
}

#[test]
fn unknown_conditions_survive_a_round_trip() {
    let raw = json!({
        "id": "a-1",
        "jobId": "job-9",
        "title": "Imported",
        "sections": [{
            "id": "s-1",
            "title": "Main",
            "questions": [
                {"id": "q-1", "type": "short-text", "text": "Lead"},
                {
                    "id": "q-2",
                    "type": "short-text",
                    "text": "Follow",
                    "conditionalLogic": {
                        "dependsOn": "q-1",
                        "condition": "matchesRegex",
                        "value": "^a"
                    }
                }
            ]
        }]
    });

    let assessment: Assessment = serde_json::from_value(raw).unwrap();
    let rule = assessment.question(0, 1).unwrap().rule().unwrap();
    assert_eq!(*rule.condition(), Condition::Other("matchesRegex".into()));

    let out = serde_json::to_value(&assessment).unwrap();
    assert_eq!(
        out["sections"][0]["questions"][1]["conditionalLogic"]["condition"],
        json!("matchesRegex")
    );
}

#[test]
fn sparse_documents_deserialize_with_defaults() {
    // Stores may return documents with optional fields absent; the
    // reader fills workable defaults instead of refusing the document.
    let raw = json!({
        "id": "a-2",
        "jobId": "job-3",
        "sections": [{
            "id": "s-1",
            "questions": [{"id": "q-1", "type": "numeric"}]
        }]
    });

    let assessment: Assessment = serde_json::from_value(raw).unwrap();
    assert_eq!(assessment.title(), "");
    assert_eq!(assessment.time_limit(), None);
    assert_eq!(assessment.passing_score(), None);

    let question = assessment.question(0, 0).unwrap();
    assert_eq!(question.text(), "");
    assert!(!question.required());
    assert_eq!(question.order(), 0);
    assert!(question.rule().is_none());
    assert_eq!(
        question.kind(),
        &QuestionKind::Numeric(NumericConstraints::default())
    );
}

#[test]
fn kebab_case_type_tags_cover_all_six_types() {
    let expected = [
        (QuestionType::ShortText, "short-text"),
        (QuestionType::LongText, "long-text"),
        (QuestionType::Numeric, "numeric"),
        (QuestionType::SingleChoice, "single-choice"),
        (QuestionType::MultiChoice, "multi-choice"),
        (QuestionType::FileUpload, "file-upload"),
    ];
    for (question_type, tag) in expected {
        let value = serde_json::to_value(proctor::Question::new(question_type)).unwrap();
        assert_eq!(value["type"], json!(tag), "{question_type}");
        assert_eq!(value["type"], json!(question_type.to_string()));
    }
}

#[test]
fn answers_use_bare_json_shapes() {
    use proctor::{Answer, FileRef};

    let text = serde_json::to_value(Answer::from("Yes")).unwrap();
    assert_eq!(text, json!("Yes"));

    let picks = serde_json::to_value(Answer::from(vec!["Rust", "Go"])).unwrap();
    assert_eq!(picks, json!(["Rust", "Go"]));

    let file = serde_json::to_value(Answer::from(
        FileRef::new("resume.pdf").with_size_mb(1.5),
    ))
    .unwrap();
    assert_eq!(file, json!({"name": "resume.pdf", "sizeMb": 1.5}));

    let back: Answer = serde_json::from_value(json!(["A"])).unwrap();
    assert_eq!(back, Answer::from(vec!["A"]));
}
