//! Tests for the fallback state machine.

mod test_utils;

use blogcast_core::{BackendCandidate, FetchResult};
use blogcast_error::{FailureClass, GroqErrorKind};
use blogcast_interface::RunEvent;
use blogcast_narrative::{
    AgentTools, FallbackOrchestrator, FallbackState, NarrationSettings, OrchestratorFailure,
};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{
    CallLog, MockDriverFactory, MockFetcher, MockResponse, MockSynthesizer, RecordingReporter,
    candidates, catalog,
};
use tokio_util::sync::CancellationToken;

const URL: &str = "https://example.com/post";

fn orchestrator(factory: &MockDriverFactory, log: &CallLog) -> FallbackOrchestrator {
    orchestrator_with(factory, log, NarrationSettings::default())
}

fn orchestrator_with(
    factory: &MockDriverFactory,
    log: &CallLog,
    settings: NarrationSettings,
) -> FallbackOrchestrator {
    FallbackOrchestrator::new(
        Arc::new(factory.clone()),
        AgentTools::new(
            Arc::new(MockFetcher::new(
                FetchResult::content("# Title\n\nBody text"),
                log.clone(),
            )),
            Arc::new(MockSynthesizer::new(log.clone())),
        ),
        settings,
    )
}

fn ids(list: &[BackendCandidate]) -> Vec<String> {
    list.iter().map(|c| c.id().clone()).collect()
}

#[tokio::test]
async fn test_first_n_minus_one_rate_limited_nth_succeeds() -> anyhow::Result<()> {
    for n in 1..=4 {
        let list = candidates(n);
        let log = CallLog::default();
        let mut factory = MockDriverFactory::new(log.clone());
        for c in &list[..n - 1] {
            factory = factory.rate_limited(c.id().clone());
        }
        let reporter = RecordingReporter::default();

        let success = orchestrator(&factory, &log)
            .run_with_fallback(&list, URL, true, &reporter, &CancellationToken::new())
            .await?;

        assert_eq!(factory.built(), ids(&list));
        assert_eq!(reporter.tried(), ids(&list));
        assert_eq!(success.outcome().candidate(), &list[n - 1]);
        assert_eq!(success.attempts_made(), n);
        assert!(
            success
                .failed_attempts()
                .iter()
                .all(|a| *a.class() == FailureClass::RateOrSizeLimit)
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_all_rate_limited_is_exhausted() -> anyhow::Result<()> {
    let list = catalog().ordered_for("llama-3.3-70b-versatile", true)?;
    let log = CallLog::default();
    let mut factory = MockDriverFactory::new(log.clone());
    for c in &list {
        factory = factory.rate_limited(c.id().clone());
    }
    let reporter = RecordingReporter::default();

    let failure = orchestrator(&factory, &log)
        .run_with_fallback(&list, URL, true, &reporter, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(failure, OrchestratorFailure::ExhaustedRateLimited { .. }));
    assert_eq!(failure.state(), Some(FallbackState::ExhaustedRateLimited));
    assert_eq!(failure.attempts().len(), list.len());
    // Each candidate exactly once, in order
    assert_eq!(factory.built(), ids(&list));
    assert_eq!(log.count_prefix("synthesize"), 0);
    assert_eq!(reporter.events().last(), Some(&RunEvent::Exhausted(4)));
    Ok(())
}

#[tokio::test]
async fn test_request_too_large_counts_as_limit() -> anyhow::Result<()> {
    let list = candidates(2);
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone()).with(
        "model-0",
        MockResponse::Error(GroqErrorKind::RequestTooLarge("TPM 6000".to_string())),
    );

    let success = orchestrator(&factory, &log)
        .run_with_fallback(
            &list,
            URL,
            true,
            &RecordingReporter::default(),
            &CancellationToken::new(),
        )
        .await?;

    assert_eq!(success.outcome().candidate().id(), "model-1");
    Ok(())
}

#[tokio::test]
async fn test_fallback_disabled_any_failure_is_fatal() -> anyhow::Result<()> {
    for rate_limited in [true, false] {
        let list = catalog().ordered_for("openai/gpt-oss-20b", false)?;
        let log = CallLog::default();
        let factory = if rate_limited {
            MockDriverFactory::new(log.clone()).rate_limited("openai/gpt-oss-20b")
        } else {
            MockDriverFactory::new(log.clone()).failing("openai/gpt-oss-20b")
        };

        let failure = orchestrator(&factory, &log)
            .run_with_fallback(
                &list,
                URL,
                false,
                &RecordingReporter::default(),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();

        match &failure {
            OrchestratorFailure::FailedFatal {
                candidate, class, ..
            } => {
                assert_eq!(candidate.id(), "openai/gpt-oss-20b");
                let expected = if rate_limited {
                    FailureClass::RateOrSizeLimit
                } else {
                    FailureClass::Other
                };
                assert_eq!(*class, expected);
            }
            other => panic!("unexpected failure: {}", other),
        }
        assert_eq!(factory.built(), vec!["openai/gpt-oss-20b".to_string()]);
    }
    Ok(())
}

#[tokio::test]
async fn test_fallback_disabled_never_tries_alternates() -> anyhow::Result<()> {
    let list = candidates(3);
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone()).rate_limited("model-0");

    let failure = orchestrator(&factory, &log)
        .run_with_fallback(
            &list,
            URL,
            false,
            &RecordingReporter::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(failure.state(), Some(FallbackState::FailedFatal));
    assert_eq!(factory.built(), vec!["model-0".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_other_failure_advances_when_fallback_enabled() -> anyhow::Result<()> {
    let list = candidates(3);
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone()).failing("model-0");
    let reporter = RecordingReporter::default();

    let success = orchestrator(&factory, &log)
        .run_with_fallback(&list, URL, true, &reporter, &CancellationToken::new())
        .await?;

    assert_eq!(success.outcome().candidate().id(), "model-1");
    assert_eq!(*success.failed_attempts()[0].class(), FailureClass::Other);
    assert!(reporter.events().iter().any(|e| matches!(
        e,
        RunEvent::CandidateFailed { class: FailureClass::Other, .. }
    )));
    Ok(())
}

#[tokio::test]
async fn test_failure_detail_is_one_line_and_diagnostic_keeps_location() -> anyhow::Result<()> {
    let list = candidates(1);
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone()).failing("model-0");
    let reporter = RecordingReporter::default();

    let failure = orchestrator(&factory, &log)
        .run_with_fallback(&list, URL, true, &reporter, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(
        failure.to_string(),
        "Error with model-0: Groq: API error 500: internal error"
    );
    let attempt = &failure.attempts()[0];
    assert!(!attempt.detail().contains(" at line "));
    assert!(attempt.diagnostic().contains(" at line "));
    assert!(reporter.events().iter().any(|e| matches!(
        e,
        RunEvent::CandidateFailed { detail, .. } if detail == attempt.detail()
    )));
    Ok(())
}

#[tokio::test]
async fn test_last_failure_class_decides_terminal_state() -> anyhow::Result<()> {
    let list = candidates(2);

    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone())
        .rate_limited("model-0")
        .failing("model-1");
    let failure = orchestrator(&factory, &log)
        .run_with_fallback(
            &list,
            URL,
            true,
            &RecordingReporter::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(failure.state(), Some(FallbackState::FailedFatal));
    assert_eq!(failure.attempts().len(), 2);

    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone())
        .failing("model-0")
        .rate_limited("model-1");
    let failure = orchestrator(&factory, &log)
        .run_with_fallback(
            &list,
            URL,
            true,
            &RecordingReporter::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(failure.state(), Some(FallbackState::ExhaustedRateLimited));
    assert_eq!(failure.attempts().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_stops_at_first_success() -> anyhow::Result<()> {
    let list = candidates(4);
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone()).rate_limited("model-0");

    let success = orchestrator(&factory, &log)
        .run_with_fallback(
            &list,
            URL,
            true,
            &RecordingReporter::default(),
            &CancellationToken::new(),
        )
        .await?;

    assert_eq!(success.outcome().candidate().id(), "model-1");
    assert_eq!(factory.built(), vec!["model-0".to_string(), "model-1".to_string()]);
    assert_eq!(log.count_prefix("synthesize"), 1);
    Ok(())
}

#[tokio::test]
async fn test_selected_candidate_is_attempt_zero() -> anyhow::Result<()> {
    for selected in catalog().candidates() {
        let list = catalog().ordered_for(selected.id(), true)?;
        let log = CallLog::default();
        let factory = MockDriverFactory::new(log.clone());
        let reporter = RecordingReporter::default();

        orchestrator(&factory, &log)
            .run_with_fallback(&list, URL, true, &reporter, &CancellationToken::new())
            .await?;

        assert_eq!(reporter.tried(), vec![selected.id().clone()]);
        assert!(matches!(
            reporter.events().first(),
            Some(RunEvent::Trying { index: 0, total: 4, .. })
        ));
    }
    Ok(())
}

#[tokio::test]
async fn test_fetch_failure_advances_without_backend_call() -> anyhow::Result<()> {
    let list = candidates(2);
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone());
    let orchestrator = FallbackOrchestrator::new(
        Arc::new(factory.clone()),
        AgentTools::new(
            Arc::new(MockFetcher::new(
                FetchResult::error("Request failed - connection refused"),
                log.clone(),
            )),
            Arc::new(MockSynthesizer::new(log.clone())),
        ),
        NarrationSettings::default(),
    );

    let failure = orchestrator
        .run_with_fallback(
            &list,
            URL,
            true,
            &RecordingReporter::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(failure.state(), Some(FallbackState::FailedFatal));
    assert_eq!(factory.built(), ids(&list));
    assert_eq!(log.count_prefix("generate"), 0);
    assert!(format!("{}", failure).contains("connection refused"));
    Ok(())
}

#[tokio::test]
async fn test_empty_candidate_list() {
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone());

    let failure = orchestrator(&factory, &log)
        .run_with_fallback(
            &[],
            URL,
            true,
            &RecordingReporter::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(failure, OrchestratorFailure::NoCandidates);
    assert!(log.entries().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_attempt_timeout_is_other_and_advances() -> anyhow::Result<()> {
    let list = candidates(2);
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone()).with(
        "model-0",
        MockResponse::Delayed(Duration::from_secs(600), "too late".to_string()),
    );
    let settings = NarrationSettings::builder()
        .attempt_timeout(Duration::from_secs(5))
        .build()?;

    let success = orchestrator_with(&factory, &log, settings)
        .run_with_fallback(
            &list,
            URL,
            true,
            &RecordingReporter::default(),
            &CancellationToken::new(),
        )
        .await?;

    assert_eq!(success.outcome().candidate().id(), "model-1");
    let timed_out = &success.failed_attempts()[0];
    assert_eq!(*timed_out.class(), FailureClass::Other);
    assert!(timed_out.detail().contains("timed out"));
    Ok(())
}

#[tokio::test]
async fn test_cancelled_before_start() {
    let list = candidates(3);
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let failure = orchestrator(&factory, &log)
        .run_with_fallback(&list, URL, true, &RecordingReporter::default(), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(failure, OrchestratorFailure::Cancelled { .. }));
    assert!(failure.attempts().is_empty());
    assert!(factory.built().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_during_attempt() {
    let list = candidates(3);
    let log = CallLog::default();
    let factory = MockDriverFactory::new(log.clone()).with(
        "model-0",
        MockResponse::Delayed(Duration::from_secs(60), "slow".to_string()),
    );
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(1)).await;
        trigger.cancel();
    });

    let failure = orchestrator(&factory, &log)
        .run_with_fallback(&list, URL, true, &RecordingReporter::default(), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(failure, OrchestratorFailure::Cancelled { .. }));
    assert_eq!(factory.built(), vec!["model-0".to_string()]);
    assert_eq!(log.count_prefix("synthesize"), 0);
}
