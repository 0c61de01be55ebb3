use crate::domain::tts::{ProviderRequest, TtsServiceError};
use crate::infrastructure::config::ApiKey;
use async_trait::async_trait;
use serde_json::Value;

/// Repository for the outbound synthesis call.
///
/// Implementations perform exactly one round trip per call and never retry.
/// The provider's JSON body is returned as-is so it can be relayed verbatim.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `request` with the provider
    ///
    /// # Errors
    /// * `Transport` if the provider could not be reached or the body could not be read
    /// * `Provider` if the provider answered with anything other than 200
    /// * `InvalidResponse` if a 200 body is not JSON
    async fn synthesize(
        &self,
        api_key: &ApiKey,
        request: &ProviderRequest,
    ) -> Result<Value, TtsServiceError>;
}
