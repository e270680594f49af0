//! Machine-translation interface and DeepL-style client.
//!
//! The pipeline never calls this directly; the bot layer translates first and
//! annotates the Japanese side of the result.

use serde::Deserialize;

/// Translation direction target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLang {
    Japanese,
    Vietnamese,
}

impl TargetLang {
    pub fn code(self) -> &'static str {
        match self {
            TargetLang::Japanese => "JA",
            TargetLang::Vietnamese => "VI",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),
    #[error("translation API error: {0}")]
    Api(String),
    #[error("translation response contained no translations")]
    EmptyResponse,
}

/// A pluggable translation backend.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, target: TargetLang) -> Result<String, TranslateError>;
}

pub const DEEPL_FREE_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

/// Client for a DeepL-compatible form endpoint.
pub struct DeepLClient {
    api_key: String,
    endpoint: String,
}

#[derive(Deserialize)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Deserialize)]
struct DeepLTranslation {
    text: String,
}

impl DeepLClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEEPL_FREE_ENDPOINT)
    }

    /// Point at a non-default endpoint (paid tier, test server).
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }
}

impl Translator for DeepLClient {
    fn translate(&self, text: &str, target: TargetLang) -> Result<String, TranslateError> {
        let mut response = ureq::post(self.endpoint.as_str()).send_form([
            ("auth_key", self.api_key.as_str()),
            ("text", text),
            ("target_lang", target.code()),
        ])?;
        let body: DeepLResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| TranslateError::Api(e.to_string()))?;
        body.translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or(TranslateError::EmptyResponse)
    }
}
