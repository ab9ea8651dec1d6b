//! Tests for the narration agent's fixed call sequence.

mod test_utils;

use blogcast_core::{BackendCandidate, FetchResult, Role};
use blogcast_error::{BlogcastErrorKind, ClassifyFailure, FailureClass, NarrationErrorKind};
use blogcast_interface::{DriverFactory, RunEvent, RunPhase};
use blogcast_narrative::{AgentTools, NarrationAgent, NarrationSettings};
use std::sync::Arc;
use test_utils::{CallLog, MockDriverFactory, MockFetcher, MockResponse, MockSynthesizer, RecordingReporter};

const URL: &str = "https://example.com/post";

fn candidate() -> BackendCandidate {
    BackendCandidate::new("model-a", "Model A")
}

fn agent(
    factory: &MockDriverFactory,
    fetch: FetchResult,
    synthesizer: Arc<MockSynthesizer>,
    log: &CallLog,
) -> anyhow::Result<NarrationAgent> {
    let driver = factory.build(&candidate())?;
    Ok(NarrationAgent::new(
        candidate(),
        driver,
        AgentTools::new(Arc::new(MockFetcher::new(fetch, log.clone())), synthesizer),
        NarrationSettings::default(),
    ))
}

#[tokio::test]
async fn test_fetch_then_generate_then_synthesize() -> anyhow::Result<()> {
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone())
        .with("model-a", MockResponse::Success("Hello listeners!".to_string()));
    let synth = Arc::new(MockSynthesizer::new(log.clone()));
    let reporter = RecordingReporter::default();

    let outcome = agent(&factory, FetchResult::content("# Title\n\nBody"), synth.clone(), &log)?
        .run(URL, &reporter)
        .await?;

    assert_eq!(
        log.entries(),
        vec![
            "build:model-a".to_string(),
            format!("fetch:{}", URL),
            "generate:model-a".to_string(),
            "synthesize".to_string(),
        ]
    );
    assert_eq!(outcome.content().as_deref(), Some("Hello listeners!"));
    assert_eq!(outcome.audio().len(), 1);
    assert_eq!(outcome.candidate(), &candidate());
    assert_eq!(synth.texts(), vec!["Hello listeners!".to_string()]);
    assert_eq!(
        reporter.events(),
        vec![
            RunEvent::Phase(RunPhase::Fetching),
            RunEvent::Phase(RunPhase::Summarizing),
            RunEvent::Phase(RunPhase::Synthesizing),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_prompt_carries_instructions_and_content() -> anyhow::Result<()> {
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone());
    let synth = Arc::new(MockSynthesizer::new(log.clone()));

    agent(&factory, FetchResult::content("Article body here"), synth, &log)?
        .run(URL, &RecordingReporter::default())
        .await?;

    let requests = factory.requests();
    assert_eq!(requests.len(), 1);
    let messages = requests[0].messages();
    assert_eq!(messages[0].role(), &Role::System);
    assert!(messages[0].content().contains("2000 characters"));
    assert_eq!(messages[1].role(), &Role::User);
    assert!(messages[1].content().contains("Article body here"));
    assert!(messages[1].content().contains(URL));
    Ok(())
}

#[tokio::test]
async fn test_fetch_error_never_reaches_backend() -> anyhow::Result<()> {
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone());
    let synth = Arc::new(MockSynthesizer::new(log.clone()));

    let err = agent(
        &factory,
        FetchResult::error("No content found in response"),
        synth.clone(),
        &log,
    )?
    .run(URL, &RecordingReporter::default())
    .await
    .unwrap_err();

    match err.kind() {
        BlogcastErrorKind::Narration(e) => match &e.kind {
            NarrationErrorKind::ContentUnavailable(msg) => {
                assert_eq!(msg, "Error: No content found in response")
            }
            other => panic!("unexpected narration error: {}", other),
        },
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(err.failure_class(), FailureClass::Other);
    assert_eq!(log.count_prefix("generate"), 0);
    assert!(synth.texts().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_long_summary_cut_to_budget() -> anyhow::Result<()> {
    let log = CallLog::default();
    let long = "This article is fascinating. ".repeat(200);
    let factory =
        MockDriverFactory::new(log.clone()).with("model-a", MockResponse::Success(long));
    let synth = Arc::new(MockSynthesizer::new(log.clone()));

    let outcome = agent(&factory, FetchResult::content("body"), synth.clone(), &log)?
        .run(URL, &RecordingReporter::default())
        .await?;

    let summary = outcome.content().clone().unwrap_or_default();
    assert!(summary.chars().count() <= 2000);
    assert!(!summary.is_empty());
    assert_eq!(synth.texts(), vec![summary]);
    Ok(())
}

#[tokio::test]
async fn test_blank_summary_rejected() -> anyhow::Result<()> {
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone())
        .with("model-a", MockResponse::Success("   \n ".to_string()));
    let synth = Arc::new(MockSynthesizer::new(log.clone()));

    let err = agent(&factory, FetchResult::content("body"), synth.clone(), &log)?
        .run(URL, &RecordingReporter::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        BlogcastErrorKind::Narration(e) if matches!(e.kind, NarrationErrorKind::EmptySummary(_))
    ));
    assert!(synth.texts().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_speech_failure_is_other() -> anyhow::Result<()> {
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone());
    let synth = Arc::new(MockSynthesizer::failing(log.clone()));

    let err = agent(&factory, FetchResult::content("body"), synth, &log)?
        .run(URL, &RecordingReporter::default())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), BlogcastErrorKind::Speech(_)));
    assert_eq!(err.failure_class(), FailureClass::Other);
    Ok(())
}
