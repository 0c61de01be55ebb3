use super::dto::{ProviderRequest, SynthesisRequest};
use super::error::TtsServiceError;
use crate::infrastructure::config::ApiKey;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    api_key: Option<ApiKey>,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, api_key: Option<ApiKey>) -> Self {
        Self { tts_repo, api_key }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize a validated request
    ///
    /// This operation:
    /// - Fails with `MissingApiKey` before any network call if no key is configured
    /// - Projects the request onto the provider payload
    /// - Performs one provider round trip, without retries
    ///
    /// Returns the provider's JSON body unchanged
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Value, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Value, TtsServiceError> {
        let Some(api_key) = &self.api_key else {
            tracing::error!("GOOGLE_API_KEY is not configured");
            return Err(TtsServiceError::MissingApiKey);
        };

        tracing::info!(
            voice = %request.voice,
            speed = %request.speed,
            text_length = request.text_length(),
            "TTS synthesis request"
        );

        let provider_request = ProviderRequest::from(&request);
        let start_time = std::time::Instant::now();

        let result = self.tts_repo.synthesize(api_key, &provider_request).await;
        let duration = start_time.elapsed();

        match &result {
            Ok(response) => {
                let audio_content_length = response
                    .get("audioContent")
                    .and_then(Value::as_str)
                    .map(str::len)
                    .unwrap_or(0);

                tracing::info!(
                    provider = "google",
                    voice = %request.voice,
                    latency_ms = duration.as_millis(),
                    audio_content_length,
                    "TTS synthesis completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    provider = "google",
                    voice = %request.voice,
                    latency_ms = duration.as_millis(),
                    error = %e,
                    "TTS synthesis failed"
                );
            }
        }

        result
    }
}
