//! Request helper shared by all endpoints.
//!
//! This module sends a prepared request and maps non-2xx responses to
//! [`ClientError::ApiError`]. Exactly one attempt is made per call; failed
//! requests are surfaced to the user for a manual retry rather than retried
//! automatically.

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Structured error body, when the backend provides one.
///
/// FastAPI-style backends use `detail`; others use `message`. Neither is
/// guaranteed, so the raw body is the fallback.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

/// Send an HTTP request and return the response if it is 2xx.
///
/// # Errors
///
/// Returns [`ClientError::HttpError`] for transport failures (including
/// timeouts) and [`ClientError::ApiError`] for non-2xx responses, with the
/// best available message extracted from the body.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::ApiError {
        status,
        url,
        message: extract_error_message(body),
    })
}

fn extract_error_message(body: String) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body)
        && let Some(message) = parsed.message.or(parsed.detail)
    {
        return message;
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_message_field() {
        let body = r#"{"message": "nope"}"#.to_string();
        assert_eq!(extract_error_message(body), "nope");
    }

    #[test]
    fn test_extracts_detail_field() {
        let body = r#"{"detail": "Format must be 'json' or 'csv'"}"#.to_string();
        assert_eq!(
            extract_error_message(body),
            "Format must be 'json' or 'csv'"
        );
    }

    #[test]
    fn test_falls_back_to_raw_body() {
        let body = "Internal Server Error".to_string();
        assert_eq!(extract_error_message(body), "Internal Server Error");
    }
}
