//! Status-aware body decoding

use super::types::ErrorResponse;
use crate::error::{Error, Result};
use crate::http::TransportResponse;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Decode a response body according to its HTTP status.
///
/// A 200 body must match `T`, else [`Error::MalformedResponse`]. Any other
/// status is an error: [`Error::Api`] when the body is a `{success, msg}`
/// object, [`Error::UnstructuredApi`] otherwise.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    if status == 200 {
        return serde_json::from_slice(body)
            .map_err(|e| Error::malformed(format!("Failed to decode response body: {e}")));
    }
    Err(decode_error_body(status, body))
}

/// Decode a [`TransportResponse`]
pub fn decode_response<T: DeserializeOwned>(response: &TransportResponse) -> Result<T> {
    decode_envelope(response.status, &response.body)
}

/// Classify a non-200 body
pub fn decode_error_body(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            success: false,
            msg,
        }) => Error::api(msg),
        Ok(ErrorResponse { success: true, .. }) => {
            debug!("Error status {status} with a success body");
            Error::api(status_text(status))
        }
        Err(_) => Error::unstructured(status, String::from_utf8_lossy(body)),
    }
}

/// Canonical status line text, e.g. `403 Forbidden`
pub fn status_text(status: u16) -> String {
    match StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
    {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}
