//! ElevenLabs text-to-speech.

use crate::wav::{pcm_sample_rate, pcm_to_wav};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use blogcast_core::{AudioPayload, SpeechConfig};
use blogcast_error::{BlogcastResult, BuilderError, SpeechError, SpeechErrorKind};
use blogcast_interface::SpeechSynthesizer;
use derive_builder::Builder;
use derive_getters::Getters;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Text-to-speech request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct SynthesisRequest {
    /// Text to speak
    text: String,
    /// Synthesis model identifier
    model_id: String,
}

impl SynthesisRequest {
    /// Creates a new builder for `SynthesisRequest`.
    pub fn builder() -> SynthesisRequestBuilder {
        SynthesisRequestBuilder::default()
    }
}

/// Synthesizes speech through the ElevenLabs API.
#[derive(Clone)]
pub struct ElevenLabsSynthesizer {
    client: Client,
    api_key: String,
    endpoint: String,
    voice_id: String,
    model_id: String,
    output_format: String,
    timeout: Duration,
}

impl std::fmt::Debug for ElevenLabsSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsSynthesizer")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("voice_id", &self.voice_id)
            .field("model_id", &self.model_id)
            .field("output_format", &self.output_format)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ElevenLabsSynthesizer {
    /// Creates a synthesizer from an API key and speech settings.
    pub fn new(api_key: impl Into<String>, config: &SpeechConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: config.endpoint().trim_end_matches('/').to_string(),
            voice_id: config.voice_id().clone(),
            model_id: config.model_id().clone(),
            output_format: config.output_format().clone(),
            timeout: config.timeout(),
        }
    }

    /// MIME type of the payload produced for the configured output format.
    pub fn mime_type(&self) -> &'static str {
        if pcm_sample_rate(&self.output_format).is_some() {
            "audio/wav"
        } else if self.output_format.starts_with("mp3") {
            "audio/mpeg"
        } else if self.output_format.starts_with("ulaw") {
            "audio/basic"
        } else {
            "application/octet-stream"
        }
    }

    fn encode(&self, audio: &[u8]) -> Result<AudioPayload, SpeechError> {
        let bytes = match pcm_sample_rate(&self.output_format) {
            Some(rate) => pcm_to_wav(audio, rate)?,
            None => audio.to_vec(),
        };
        Ok(AudioPayload::new(STANDARD.encode(bytes), self.mime_type()))
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    #[instrument(skip(self, text), fields(voice = %self.voice_id, chars = text.chars().count()))]
    async fn synthesize(&self, text: &str) -> BlogcastResult<Vec<AudioPayload>> {
        if text.trim().is_empty() {
            return Err(SpeechError::new(SpeechErrorKind::EmptyText).into());
        }

        let body = SynthesisRequest::builder()
            .text(text)
            .model_id(self.model_id.clone())
            .build()
            .map_err(|e| BuilderError::new("synthesis request", e.to_string()))?;

        let url = format!("{}/{}", self.endpoint, self.voice_id);
        debug!(url = %url, format = %self.output_format, "Requesting speech synthesis");

        let response = self
            .client
            .post(&url)
            .query(&[("output_format", self.output_format.as_str())])
            .header("xi-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::new(SpeechErrorKind::Timeout(self.timeout.as_secs()))
                } else {
                    error!(error = ?e, "Failed to send synthesis request");
                    SpeechError::new(SpeechErrorKind::Http(format!("Request failed: {}", e)))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, body = %message, "ElevenLabs returned error");
            return Err(SpeechError::new(SpeechErrorKind::Api {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        let audio = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                SpeechError::new(SpeechErrorKind::Timeout(self.timeout.as_secs()))
            } else {
                SpeechError::new(SpeechErrorKind::Http(format!("Failed to read audio: {}", e)))
            }
        })?;

        if audio.is_empty() {
            return Err(SpeechError::new(SpeechErrorKind::EmptyAudio).into());
        }

        debug!(bytes = audio.len(), "Received synthesized audio");
        Ok(vec![self.encode(&audio)?])
    }

    fn voice_id(&self) -> &str {
        &self.voice_id
    }
}
