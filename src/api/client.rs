use crate::error::{ApiError, Result};
use reqwest::Response;

pub(crate) async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http {
        status,
        message: error_message_from_body(status, &body),
    }
    .into())
}

pub(crate) fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error")?.as_str().map(String::from))
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}
