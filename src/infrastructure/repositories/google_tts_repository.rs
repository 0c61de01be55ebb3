use super::tts_repository::TtsRepository;
use crate::domain::tts::{ProviderRequest, TtsServiceError};
use crate::infrastructure::config::ApiKey;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::error::Error as _;

const SYNTHESIZE_PATH: &str = "/v1/text:synthesize";

/// Google Cloud Text-to-Speech implementation of the TTS repository
pub struct GoogleTtsRepository {
    client: Client,
    base_url: String,
}

impl GoogleTtsRepository {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        // No idle connections are kept: every synthesis opens its own connection
        let client = Client::builder().pool_max_idle_per_host(0).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn synthesize_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SYNTHESIZE_PATH)
    }
}

/// Flattens a reqwest error and its causes into one message.
///
/// The URL is stripped first because its query string carries the API key.
fn transport_error(err: reqwest::Error) -> TtsServiceError {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    TtsServiceError::Transport(message)
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(
        &self,
        api_key: &ApiKey,
        request: &ProviderRequest,
    ) -> Result<Value, TtsServiceError> {
        tracing::debug!(
            url = %self.synthesize_url(),
            voice = %request.voice.name,
            "Calling Google TTS API"
        );

        let response = self
            .client
            .post(self.synthesize_url())
            .query(&[("key", api_key.expose())])
            // Sets Content-Type; the buffered body gives an exact Content-Length
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;

        if status != StatusCode::OK {
            tracing::error!(
                status = status.as_u16(),
                body_preview = %String::from_utf8_lossy(&bytes[..bytes.len().min(200)]),
                "Google TTS API returned an error status"
            );
            return Err(TtsServiceError::Provider {
                status: status.as_u16(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(error = %e, body_length = bytes.len(), "Google TTS API returned invalid JSON");
            TtsServiceError::InvalidResponse(e.to_string())
        })
    }
}
