use crate::error::AppError;

/// Rejections of the inbound body, answered with 400
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("テキストは5000文字以下にしてください")]
    TextTooLong { length: usize },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("API キーが設定されていません")]
    MissingApiKey,
    #[error("API Error: {status}")]
    Provider { status: u16 },
    #[error("{0}")]
    Transport(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::MissingApiKey => AppError::Configuration(err.to_string()),
            TtsServiceError::Provider { .. }
            | TtsServiceError::Transport(_)
            | TtsServiceError::InvalidResponse(_) => AppError::ExternalService(err.to_string()),
        }
    }
}
