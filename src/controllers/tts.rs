use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{TtsRequest, TtsService, TtsServiceApi, ValidationError},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// ANY /api/tts - Proxy a synthesis request to the provider
    ///
    /// OPTIONS is answered as a preflight, any other method but POST is a 405.
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        method: Method,
        body: Bytes,
    ) -> AppResult<Response> {
        if method == Method::OPTIONS {
            return Ok(StatusCode::OK.into_response());
        }

        if method != Method::POST {
            return Err(AppError::MethodNotAllowed);
        }

        // A body we cannot read the fields from is treated like one without them
        let request: TtsRequest = serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!(error = %e, "Unreadable TTS request body");
            ValidationError::MissingFields
        })?;
        let request = request.validate()?;

        let response = controller.tts_service.synthesize(request).await?;

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
