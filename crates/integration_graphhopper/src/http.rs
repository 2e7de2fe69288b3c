//! Shared request handling for the GraphHopper clients

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::GraphHopperError;

/// Error body returned by GraphHopper on non-success responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Build an HTTP client with the given timeout
pub(crate) fn build_client(timeout_secs: u64) -> Result<Client, GraphHopperError> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent(concat!("Link/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GraphHopperError::ConnectionFailed(e.to_string()))
}

/// Issue a GET request and return the body of a successful response
pub(crate) async fn get_body(
    client: &Client,
    url: &str,
    params: &[(&str, String)],
    timeout_secs: u64,
) -> Result<String, GraphHopperError> {
    let response = client
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                GraphHopperError::Timeout { timeout_secs }
            } else {
                GraphHopperError::ConnectionFailed(e.to_string())
            }
        })?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(GraphHopperError::RateLimitExceeded {
            retry_after_secs: response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
        });
    }

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            GraphHopperError::Timeout { timeout_secs }
        } else {
            GraphHopperError::ParseError(e.to_string())
        }
    })?;

    if !status.is_success() {
        debug!(%status, "GraphHopper request rejected");
        return Err(GraphHopperError::RequestFailed {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }

    Ok(body)
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string())
}
