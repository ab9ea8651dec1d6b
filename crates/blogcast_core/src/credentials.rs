//! API credentials for one run.

use blogcast_error::{BlogcastResult, ConfigError};

/// Credentials for the three remote services.
///
/// Constructed by the surface and passed into each component's constructor;
/// nothing in the library reads them from the process environment.
///
/// # Examples
///
/// ```
/// use blogcast_core::Credentials;
///
/// let creds = Credentials::new("gsk_123", "el_456", "fc_789");
/// assert!(creds.validate().is_ok());
/// assert!(!format!("{:?}", creds).contains("gsk_123"));
///
/// let missing = Credentials::new("gsk_123", "  ", "");
/// let err = missing.validate().unwrap_err();
/// assert!(format!("{}", err).contains("ElevenLabs"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    groq: String,
    elevenlabs: String,
    firecrawl: String,
}

impl Credentials {
    /// Create credentials from the three API keys.
    pub fn new(
        groq: impl Into<String>,
        elevenlabs: impl Into<String>,
        firecrawl: impl Into<String>,
    ) -> Self {
        Self {
            groq: groq.into(),
            elevenlabs: elevenlabs.into(),
            firecrawl: firecrawl.into(),
        }
    }

    /// Groq API key.
    pub fn groq(&self) -> &str {
        &self.groq
    }

    /// ElevenLabs API key.
    pub fn elevenlabs(&self) -> &str {
        &self.elevenlabs
    }

    /// Firecrawl API key.
    pub fn firecrawl(&self) -> &str {
        &self.firecrawl
    }

    /// Check that every key is present and non-blank.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming every missing key.
    pub fn validate(&self) -> BlogcastResult<()> {
        let missing: Vec<&str> = [
            ("Groq", &self.groq),
            ("ElevenLabs", &self.elevenlabs),
            ("Firecrawl", &self.firecrawl),
        ]
        .into_iter()
        .filter(|(_, key)| key.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::new(format!(
                "Please enter all required API keys (missing: {})",
                missing.join(", ")
            ))
            .into())
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(key: &str) -> &'static str {
            if key.trim().is_empty() { "<missing>" } else { "<redacted>" }
        }
        f.debug_struct("Credentials")
            .field("groq", &redact(&self.groq))
            .field("elevenlabs", &redact(&self.elevenlabs))
            .field("firecrawl", &redact(&self.firecrawl))
            .finish()
    }
}
