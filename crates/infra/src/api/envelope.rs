//! Response envelope handling
//!
//! The backend wraps every payload as `{ "data": <payload>, "message"?: .. }`
//! and reports failures as `{ "message": .., "errors"?: .. }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ApiError;

const BODY_PREVIEW_CHARS: usize = 256;

/// Successful response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Decode a 2xx body and return the `data` payload.
///
/// An empty body (or an object without a `data` key) decodes as JSON
/// `null`, so unit and `Option` payloads work for 204 responses. Anything
/// other than a JSON object is rejected.
pub fn unwrap_data<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let data = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut map)) => map.remove("data").unwrap_or(Value::Null),
            Ok(_) => {
                return Err(ApiError::Decode(format!(
                    "response is not an envelope object; body: {}",
                    preview(body)
                )))
            }
            Err(err) => {
                return Err(ApiError::Decode(format!(
                    "invalid response envelope: {err}; body: {}",
                    preview(body)
                )))
            }
        }
    };

    serde_json::from_value(data).map_err(|err| {
        ApiError::Decode(format!("unexpected payload shape: {err}; body: {}", preview(body)))
    })
}

/// Pull the `message` out of an error body, if there is one.
///
/// A blank message counts as absent; any other message is returned verbatim.
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}

fn preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() > BODY_PREVIEW_CHARS {
        let cut: String = text.chars().take(BODY_PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        text.into_owned()
    }
}
