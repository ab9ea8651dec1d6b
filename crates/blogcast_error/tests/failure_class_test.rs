//! Tests for attempt failure classification.

use blogcast_error::{
    BlogcastError, BlogcastErrorKind, BuilderError, ClassifyFailure, ConfigError, FailureClass,
    GroqErrorKind,
    ModelsError, ModelsErrorKind, NarrationError, NarrationErrorKind, SpeechError,
    SpeechErrorKind,
};

fn groq(kind: GroqErrorKind) -> BlogcastError {
    ModelsError::new(ModelsErrorKind::Groq(kind)).into()
}

#[test]
fn test_groq_limits_are_rate_or_size() {
    let rate = groq(GroqErrorKind::RateLimit("rate_limit_exceeded".to_string()));
    assert_eq!(rate.failure_class(), FailureClass::RateOrSizeLimit);

    let size = groq(GroqErrorKind::RequestTooLarge("Request too large".to_string()));
    assert_eq!(size.failure_class(), FailureClass::RateOrSizeLimit);
}

#[test]
fn test_other_groq_errors_are_other() {
    let cases = vec![
        GroqErrorKind::Http("connection reset".to_string()),
        GroqErrorKind::Api {
            status: 500,
            message: "internal".to_string(),
        },
        GroqErrorKind::ModelNotFound("llama-9".to_string()),
        GroqErrorKind::InvalidRequest("bad tool call".to_string()),
        GroqErrorKind::Timeout(120),
        GroqErrorKind::ResponseConversion("missing choices".to_string()),
    ];

    for kind in cases {
        let err = groq(kind.clone());
        assert_eq!(err.failure_class(), FailureClass::Other, "{}", kind);
        assert!(!err.is_rate_or_size_limit());
    }
}

#[test]
fn test_non_model_errors_are_other() {
    let errors: Vec<BlogcastError> = vec![
        BuilderError::new("synthesis request", "`text` must be initialized").into(),
        ConfigError::new("missing key").into(),
        SpeechError::new(SpeechErrorKind::Api {
            status: 429,
            message: "quota_exceeded".to_string(),
        })
        .into(),
        NarrationError::new(NarrationErrorKind::ContentUnavailable(
            "Error: Request failed - timeout".to_string(),
        ))
        .into(),
        ModelsError::new(ModelsErrorKind::EmptyResponse("groq".to_string())).into(),
    ];

    for err in errors {
        assert_eq!(err.failure_class(), FailureClass::Other, "{}", err);
    }
}

#[test]
fn test_error_location_is_recorded() {
    let err = NarrationError::new(NarrationErrorKind::EmptySummary("m".to_string()));
    assert!(err.file.ends_with("failure_class_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_builder_failure_keeps_target() {
    let err: BlogcastError =
        BuilderError::new("generation request", "`messages` must be initialized").into();

    match err.kind() {
        BlogcastErrorKind::Builder(inner) => {
            assert_eq!(inner.target, "generation request");
            assert!(inner.reason.contains("messages"));
        }
        other => panic!("unexpected kind: {other}"),
    }
    assert_eq!(err.failure_class(), FailureClass::Other);
}
