//! Translation client for the public Google translate endpoint.
//!
//! One blocking HTTPS round trip per fragment, no batching. The agent uses
//! native-tls with the platform root store, which works in environments
//! where rustls/ring have issues.

use serde_json::Value;
use thiserror::Error;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};
use ureq::Agent;

const GTX_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("could not read translation response: {0}")]
    Read(String),
    #[error("unexpected translation response: {0}")]
    Malformed(String),
}

pub trait Translator {
    /// Translates `text` for the language pair fixed at construction.
    fn translate(&self, text: &str) -> Result<String, TranslateError>;
}

/// Client for the unauthenticated `client=gtx` endpoint. Rate and quota
/// limits are the provider's; their errors surface as [`TranslateError`].
pub struct GoogleTranslator {
    agent: Agent,
    source: String,
    target: String,
}

impl GoogleTranslator {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            agent: agent(),
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder().tls_config(tls_config).build().into()
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let mut response = self
            .agent
            .get(GTX_ENDPOINT)
            .query("client", "gtx")
            .query("sl", &self.source)
            .query("tl", &self.target)
            .query("dt", "t")
            .query("q", text)
            .call()?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TranslateError::Read(e.to_string()))?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| TranslateError::Malformed(e.to_string()))?;
        parse_gtx_response(&value)
    }
}

/// The endpoint answers with nested arrays; the translation is split over
/// `[0][i][0]` segments which are concatenated here.
fn parse_gtx_response(value: &Value) -> Result<String, TranslateError> {
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Malformed(value.to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(piece) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(piece);
        }
    }

    if translated.is_empty() {
        return Err(TranslateError::Malformed(value.to_string()));
    }
    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_segment_response() {
        let value = json!([[["Bonjour", "Hello", null, null, 10]], null, "en"]);
        assert_eq!(parse_gtx_response(&value).unwrap(), "Bonjour");
    }

    #[test]
    fn test_multi_segment_response_concatenated() {
        let value = json!([
            [
                ["Bonjour le monde. ", "Hello world. ", null, null, 10],
                ["Au revoir.", "Goodbye.", null, null, 10]
            ],
            null,
            "en"
        ]);
        assert_eq!(
            parse_gtx_response(&value).unwrap(),
            "Bonjour le monde. Au revoir."
        );
    }

    #[test]
    fn test_malformed_response_rejected() {
        assert!(parse_gtx_response(&json!({"error": "quota"})).is_err());
        assert!(parse_gtx_response(&json!([[]])).is_err());
    }
}
