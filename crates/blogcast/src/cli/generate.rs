//! Podcast generation command handler.

use super::{GenerateArgs, load_config};
use blogcast::{ConsoleReporter, Credentials, PodcastFailure, PodcastRequest, Podcaster};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;

/// Run one podcast generation, printing progress as it goes.
///
/// Ctrl-C cancels the attempt in flight.
pub async fn run_generate(
    args: GenerateArgs,
    verbose: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(dir) = args.output_dir {
        config = config.with_output_dir(dir);
    }

    let credentials = Credentials::new(
        args.groq_api_key,
        args.elevenlabs_api_key,
        args.firecrawl_api_key,
    );
    let podcaster = match Podcaster::new(config, &credentials) {
        Ok(podcaster) => podcaster,
        Err(e) => {
            eprintln!("❌ {}", PodcastFailure::InvalidRequest(e).user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut builder = PodcastRequest::builder();
    builder.url(args.url);
    if let Some(model) = args.model {
        builder.model(Some(model));
    }
    if args.no_fallback {
        builder.fallback(Some(false));
    }
    let request = builder.build()?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling");
            on_interrupt.cancel();
        }
    });

    match podcaster
        .generate(&request, &ConsoleReporter, &cancel)
        .await
    {
        Ok(podcast) => {
            println!();
            println!("Model:   {}", podcast.model());
            if let Some(summary) = podcast.summary() {
                println!("Summary:\n{}", summary);
            }
            println!("Audio:   {}", podcast.audio().path().display());
            if let Some(dir) = args.export {
                let exported = podcaster.export(&podcast, dir).await?;
                println!("Copied:  {}", exported.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("❌ {}", failure.user_message());
            if verbose {
                eprintln!("{:#?}", failure);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
