//! Shared HTTP construction and request policy for the protocol sessions.
//!
//! Centralizes the networking defaults so the lookup and sync sessions
//! stay consistent on timeouts, user-agent, and compression, and share
//! one POST/decode/error-envelope path.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::protocol::ApiErrorBody;

/// Builds the shared protocol HTTP client.
///
/// # Errors
///
/// Returns [`ClientError::HttpClient`] when client construction fails.
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<Client, ClientError> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.read_timeout)
        .user_agent(user_agent())
        .gzip(true)
        .build()
        .map_err(|source| ClientError::HttpClient { source })
}

/// Single shared user-agent for all protocol traffic.
fn user_agent() -> String {
    format!("safebrowse/{}", env!("CARGO_PKG_VERSION"))
}

/// POSTs a JSON body and decodes the JSON response.
///
/// Returns `Ok(None)` for a 200 with an empty body (the service omits
/// the body when there is nothing to report). Non-200 responses are
/// decoded as the structured `{error: {code, message}}` envelope,
/// degrading to a status-only [`ClientError::Api`] when the envelope
/// itself is undecodable.
///
/// # Errors
///
/// [`ClientError::Timeout`] / [`ClientError::Network`] for transport
/// failures, [`ClientError::Api`] for non-200 responses, and
/// [`ClientError::Decode`] for malformed 200 bodies.
pub(crate) async fn post_json<B, R>(
    http: &Client,
    url: &str,
    body: &B,
) -> Result<Option<R>, ClientError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = http.post(url).json(body).send().await.map_err(|error| {
        if error.is_timeout() {
            ClientError::timeout(url)
        } else {
            ClientError::network(url, error)
        }
    })?;

    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|error| ClientError::network(url, error))?;

    if !status.is_success() {
        debug!(status = status.as_u16(), url, "protocol request rejected");
        return Err(match serde_json::from_slice::<ApiErrorBody>(&bytes) {
            Ok(envelope) => ClientError::api(url, envelope.error.code, envelope.error.message),
            Err(_) => ClientError::api(url, i64::from(status.as_u16()), format!("HTTP {status}")),
        });
    }

    if bytes.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|error| ClientError::decode(url, error.to_string()))
}
