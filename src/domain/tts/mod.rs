pub mod dto;
pub mod error;
pub mod service;

pub use dto::{ProviderRequest, SynthesisRequest, TtsRequest, MAX_TEXT_LENGTH};
pub use error::{TtsServiceError, ValidationError};
pub use service::{TtsService, TtsServiceApi};
