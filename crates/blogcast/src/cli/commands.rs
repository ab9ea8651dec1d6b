//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Blogcast - turn a blog post into a short narrated podcast
#[derive(Parser, Debug)]
#[command(name = "blogcast")]
#[command(about = "Turn a blog post into a short narrated podcast", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging and detailed failure reports
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a blog post and narrate it to a WAV file
    Generate(GenerateArgs),

    /// List the models that can write the summary
    Models {
        /// Configuration file to read instead of the standard locations
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Arguments for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Blog post URL
    #[arg(long)]
    pub url: String,

    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true, default_value = "")]
    pub groq_api_key: String,

    /// ElevenLabs API key
    #[arg(
        long,
        env = "ELEVEN_LABS_API_KEY",
        hide_env_values = true,
        default_value = ""
    )]
    pub elevenlabs_api_key: String,

    /// Firecrawl API key
    #[arg(
        long,
        env = "FIRECRAWL_API_KEY",
        hide_env_values = true,
        default_value = ""
    )]
    pub firecrawl_api_key: String,

    /// Model to try first (see `blogcast models`)
    #[arg(long)]
    pub model: Option<String>,

    /// Only try the selected model
    #[arg(long)]
    pub no_fallback: bool,

    /// Directory for generated audio
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Also copy the podcast into this directory under the download name
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Configuration file to read instead of the standard locations
    #[arg(long)]
    pub config: Option<PathBuf>,
}
