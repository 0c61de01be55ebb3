use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::ValidationError;

/// Locale sent with every synthesis request
pub const LANGUAGE_CODE: &str = "ja-JP";
pub const AUDIO_ENCODING: &str = "MP3";
pub const PITCH: i32 = 0;

/// Upper bound on `text`, counted in UTF-16 code units
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Body of POST /api/tts as sent by the caller.
///
/// Every field is optional here so that a missing field becomes a 400 with a
/// fixed message instead of an extractor rejection. `voice` and `speed` are
/// kept as raw JSON and forwarded to the provider untouched.
#[derive(Debug, Default, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<Value>,
    /// `None` only when the key is absent; an explicit `null` is `Some(Value::Null)`
    #[serde(default, deserialize_with = "present")]
    pub speed: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// JavaScript truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl TtsRequest {
    /// Checks required fields first, then the text length.
    ///
    /// `text` and `voice` must be truthy; `speed` only has to be present, so a
    /// speed of 0 or `null` is accepted.
    pub fn validate(self) -> Result<SynthesisRequest, ValidationError> {
        let (text, voice, speed) = match (self.text, self.voice, self.speed) {
            (Some(text), Some(voice), Some(speed)) if !text.is_empty() && is_truthy(&voice) => {
                (text, voice, speed)
            }
            _ => return Err(ValidationError::MissingFields),
        };

        let request = SynthesisRequest { text, voice, speed };
        let length = request.text_length();
        if length > MAX_TEXT_LENGTH {
            return Err(ValidationError::TextTooLong { length });
        }

        Ok(request)
    }
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: Value,
    pub speed: Value,
}

impl SynthesisRequest {
    /// Length as the browser client measures it (`String.prototype.length`)
    pub fn text_length(&self) -> usize {
        self.text.encode_utf16().count()
    }
}

/// Payload of `POST /v1/text:synthesize`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderRequest {
    pub input: SynthesisInput,
    pub voice: VoiceSelection,
    #[serde(rename = "audioConfig")]
    pub audio_config: AudioConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceSelection {
    #[serde(rename = "languageCode")]
    pub language_code: String,
    pub name: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioConfig {
    #[serde(rename = "audioEncoding")]
    pub audio_encoding: String,
    pub pitch: i32,
    #[serde(rename = "speakingRate")]
    pub speaking_rate: Value,
}

impl From<&SynthesisRequest> for ProviderRequest {
    fn from(request: &SynthesisRequest) -> Self {
        Self {
            input: SynthesisInput {
                text: request.text.clone(),
            },
            voice: VoiceSelection {
                language_code: LANGUAGE_CODE.to_string(),
                name: request.voice.clone(),
            },
            audio_config: AudioConfig {
                audio_encoding: AUDIO_ENCODING.to_string(),
                pitch: PITCH,
                speaking_rate: request.speed.clone(),
            },
        }
    }
}
