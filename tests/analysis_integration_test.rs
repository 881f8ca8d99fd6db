//! Integration tests for the end-to-end analysis pipeline

use privlens::analysis::recognizer::ModelHandle;
use privlens::analysis::{
    AnalysisEngine, AnalysisOptions, Category, ComplianceStatus, DetectionMethod, Label,
};
use privlens::config::load_config_str;
use privlens::domain::PrivlensError;
use std::sync::Arc;
use tempfile::TempDir;

fn engine() -> AnalysisEngine {
    AnalysisEngine::new(AnalysisOptions::default()).unwrap()
}

fn write_model(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("gazetteer.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_contact_line_scores() {
    let result = engine()
        .analyze("Contact: john@example.com or 9876543210")
        .unwrap();

    let entities = result.detected_entities.unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].label, Label::Email);
    assert_eq!(entities[0].value, "john@example.com");
    assert_eq!(entities[1].label, Label::Phone);
    assert_eq!(entities[1].value, "9876543210");

    assert_eq!(result.risk_score, 8);
    assert_eq!(result.safety_score, 92);
    assert_eq!(result.compliance_status, ComplianceStatus::SafeForPublicRelease);
}

#[test]
fn test_name_introduction_is_redacted() {
    let result = engine()
        .analyze("My name is Alice Kumar and my email is alice@x.com")
        .unwrap();

    assert_eq!(
        result.redacted_text.as_deref(),
        Some("My name is [PERSON] and my email is [EMAIL]")
    );
    let entities = result.detected_entities.unwrap();
    assert_eq!(entities[0].value, "Alice Kumar");
    assert_eq!(entities[0].detection_method, DetectionMethod::Rule);
}

#[test]
fn test_empty_text_is_fully_safe() {
    let result = engine().analyze("").unwrap();
    assert_eq!(result.risk_score, 0);
    assert_eq!(result.safety_score, 100);
    assert_eq!(result.entity_count(), 0);
    assert_eq!(result.redacted_text.as_deref(), Some(""));
}

#[test]
fn test_indian_mobile_in_international_form_is_a_phone() {
    for text in ["Call +919876543210 now", "Call 919876543210 now"] {
        let result = engine().analyze(text).unwrap();
        assert_eq!(result.redacted_text.as_deref(), Some("Call [PHONE] now"), "{text}");
        assert_eq!(result.label_distribution.get(&Label::Phone), Some(&1));
        assert_eq!(result.label_distribution.get(&Label::Aadhaar), None);
        assert_eq!(result.risk_score, 5);
    }
}

#[test]
fn test_greeting_title_stays_visible() {
    let result = engine().analyze("Dear Mr. Sharma, your card is ready").unwrap();
    assert_eq!(
        result.redacted_text.as_deref(),
        Some("Dear Mr. [PERSON], your card is ready")
    );
}

#[test]
fn test_government_identifiers_reach_moderate_risk() {
    let text = "Card 4111 1111 1111 1111, Aadhaar 2345 6789 0123, PAN ABCDE1234F";
    let result = engine().analyze(text).unwrap();

    assert_eq!(result.label_distribution.get(&Label::CreditCard), Some(&1));
    assert_eq!(result.label_distribution.get(&Label::Aadhaar), Some(&1));
    assert_eq!(result.label_distribution.get(&Label::Pan), Some(&1));
    assert_eq!(result.risk_score, 28);
    assert_eq!(result.compliance_status, ComplianceStatus::ModerateRisk);
    assert_eq!(result.category_distribution.get(&Category::Government), Some(&2));
    assert_eq!(result.category_distribution.get(&Category::Financial), Some(&1));
}

#[test]
fn test_many_identifiers_are_critical() {
    let text = "4111 1111 1111 1111, 5500 0000 0000 0004, 3400 0000 0000 0009, \
                2345 6789 0123, 3456 7890 1234, 4567 8901 2345, \
                ABCDE1234F, FGHIJ5678K, KLMNO9012P";
    let result = engine().analyze(text).unwrap();

    assert_eq!(result.risk_score, 84);
    assert_eq!(result.safety_score, 16);
    assert_eq!(result.compliance_status, ComplianceStatus::Critical);
    assert!(result.compliance_status.requires_review());
}

#[test]
fn test_gazetteer_model_from_config() {
    let dir = TempDir::new().unwrap();
    let model = write_model(
        &dir,
        r#"
model_id = "test-gazetteer"
persons = ["Rahul Mehta"]
organizations = ["Acme Technologies Ltd", "Globex"]
locations = ["Mumbai"]
"#,
    );
    let config = load_config_str(&format!(
        "[detection.contextual]\nenabled = true\nmodel_path = \"{}\"\n",
        model.display()
    ))
    .unwrap();
    let engine = AnalysisEngine::from_config(&config).unwrap();

    let result = engine
        .analyze("Rahul Mehta works at Acme Technologies Ltd in Mumbai")
        .unwrap();
    assert_eq!(
        result.redacted_text.as_deref(),
        Some("[PERSON] works at [ORG] in [GPE]")
    );
    assert_eq!(result.risk_score, 4);
    assert_eq!(result.category_distribution.get(&Category::Personal), Some(&3));

    // Short organization names without a legal suffix read as personal names
    let result = engine.analyze("Meeting with Globex tomorrow").unwrap();
    let entities = result.detected_entities.unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].label, Label::Person);
    assert_eq!(entities[0].detection_method, DetectionMethod::Contextual);
}

#[test]
fn test_pattern_beats_contextual_guess() {
    let dir = TempDir::new().unwrap();
    // The recognizer tags part of the card number as a place
    let model = write_model(&dir, "locations = [\"1111\"]\n");
    let engine = AnalysisEngine::new(AnalysisOptions::default())
        .unwrap()
        .with_recognizer(Arc::new(ModelHandle::gazetteer(model)));

    let result = engine.analyze("Paid with 4111-1111-1111-1111 today").unwrap();
    let entities = result.detected_entities.unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].label, Label::CreditCard);
    assert_eq!(result.redacted_text.as_deref(), Some("Paid with [CREDIT_CARD] today"));
}

#[test]
fn test_missing_model_aborts_request() {
    let engine = AnalysisEngine::new(AnalysisOptions::default())
        .unwrap()
        .with_recognizer(Arc::new(ModelHandle::gazetteer("/nonexistent/model.toml")));

    let err = engine.analyze("Alice").unwrap_err();
    assert!(matches!(err, PrivlensError::ModelUnavailable(_)));
    assert!(!err.is_input_error());
}

#[test]
fn test_sensitive_output_can_be_withheld() {
    let engine = AnalysisEngine::new(AnalysisOptions {
        include_sensitive_output: false,
        ..AnalysisOptions::default()
    })
    .unwrap();

    let result = engine.analyze("Mail me at john@example.com").unwrap();
    assert!(result.redacted_text.is_none());
    assert!(result.detected_entities.is_none());
    assert_eq!(result.risk_score, 3);

    let json = serde_json::to_string(&result).unwrap();
    assert!(!json.contains("john@example.com"));
    assert!(!json.contains("redacted_text"));
}

#[test]
fn test_audit_log_never_stores_plaintext() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("audit").join("privlens_audit.log");
    let config = load_config_str(&format!(
        "[audit]\nenabled = true\nlog_path = \"{}\"\n",
        log_path.display()
    ))
    .unwrap();
    let engine = AnalysisEngine::from_config(&config).unwrap();

    let result = engine
        .analyze("Contact: john@example.com or 9876543210")
        .unwrap();
    let analysis_id = result.analysis_id.expect("audit id");

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains(&analysis_id));
    assert!(!log.contains("john@example.com"));
    assert!(!log.contains("9876543210"));
}

#[test]
fn test_parallel_detection_matches_sequential() {
    let dir = TempDir::new().unwrap();
    let model = write_model(&dir, "persons = [\"Rahul Mehta\"]\nlocations = [\"Pune\"]\n");
    let text = "Hi Rahul, Name: Rahul Mehta, Pune, rahul@mail.in, +91 98765 43210";

    let build = |parallel| {
        AnalysisEngine::new(AnalysisOptions {
            parallel,
            ..AnalysisOptions::default()
        })
        .unwrap()
        .with_recognizer(Arc::new(ModelHandle::gazetteer(model.clone())))
    };

    let sequential = build(false).analyze(text).unwrap();
    let parallel = build(true).analyze(text).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_bundled_sample_model() {
    let model = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("models/gazetteer.toml");
    let engine = AnalysisEngine::new(AnalysisOptions::default())
        .unwrap()
        .with_recognizer(Arc::new(ModelHandle::gazetteer(model)));

    let result = engine.analyze("Priya Sharma moved to Bengaluru").unwrap();
    assert_eq!(
        result.redacted_text.as_deref(),
        Some("[PERSON] moved to [GPE]")
    );
}
