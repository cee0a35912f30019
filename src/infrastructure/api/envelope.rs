use crate::shared::error::AppError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Wire shape of API responses. The backend answers either with a
/// `{success, data}` envelope or with the bare payload; both are decoded
/// here, once, so nothing downstream branches on response shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
enum ApiEnvelope<T> {
    Tagged {
        success: bool,
        #[serde(default)]
        data: Option<T>,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        error: Option<String>,
    },
    Bare(T),
}

/// Decode a response body into the expected payload. A tagged envelope
/// with `success = false` is a failure even under a 2xx status.
pub fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    let envelope: ApiEnvelope<T> =
        serde_json::from_str(body).map_err(|err| AppError::DeserializationError(err.to_string()))?;

    match envelope {
        ApiEnvelope::Bare(payload) => Ok(payload),
        ApiEnvelope::Tagged {
            success: true,
            data: Some(payload),
            ..
        } => Ok(payload),
        ApiEnvelope::Tagged {
            success: true,
            data: None,
            ..
        } => Err(AppError::DeserializationError(
            "API envelope is missing its data field".to_string(),
        )),
        ApiEnvelope::Tagged {
            success: false,
            message,
            error,
            ..
        } => Err(AppError::Api(rejection_message(message, error))),
    }
}

/// Decode a response body that carries no payload the caller needs. An
/// empty body is fine; a tagged `success = false` envelope is not.
pub fn decode_ack(body: &str) -> Result<(), AppError> {
    if body.trim().is_empty() {
        return Ok(());
    }

    let envelope: ApiEnvelope<serde_json::Value> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        // mutation endpoints sometimes answer with non-JSON bodies; the
        // status line already said success
        Err(_) => return Ok(()),
    };

    match envelope {
        ApiEnvelope::Tagged {
            success: false,
            message,
            error,
            ..
        } => Err(AppError::Api(rejection_message(message, error))),
        _ => Ok(()),
    }
}

fn rejection_message(message: Option<String>, error: Option<String>) -> String {
    message
        .or(error)
        .unwrap_or_else(|| "Request rejected by the API".to_string())
}
