//! Remote tools used by the narration agent.
//!
//! - [`FirecrawlFetcher`] extracts the main content of a web page as markdown
//! - [`ElevenLabsSynthesizer`] turns a summary into spoken audio
//!
//! Raw PCM returned by the synthesizer is framed as WAV by [`pcm_to_wav`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod elevenlabs;
mod firecrawl;
mod wav;

pub use elevenlabs::{ElevenLabsSynthesizer, SynthesisRequest};
pub use firecrawl::{FirecrawlFetcher, ScrapeRequest, TRUNCATION_MARKER};
pub use wav::{pcm_sample_rate, pcm_to_wav};
