// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::Client;

use crate::error::{NoticeError, Result};
use crate::models::CrawlerConfig;

/// Create a configured asynchronous HTTP client.
///
/// Certificate validation stays on unless `accept_invalid_certs` is set.
pub fn create_client(config: &CrawlerConfig) -> Result<Client> {
    if config.accept_invalid_certs {
        log::warn!(
            "TLS certificate validation is disabled; responses may come from an impersonated host"
        );
    }

    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()?;
    Ok(client)
}

/// Fetch a page body as text, classifying failures.
///
/// The body is decoded as UTF-8; invalid sequences are replaced.
pub async fn fetch_text(client: &Client, url: &str) -> std::result::Result<String, NoticeError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| classify(url, e))?;

    let bytes = response.bytes().await.map_err(|e| classify(url, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Map a transport error onto the board's error kinds.
fn classify(url: &str, error: reqwest::Error) -> NoticeError {
    if error.is_timeout() {
        log::warn!("Request to {} timed out", url);
        NoticeError::Timeout
    } else {
        log::warn!("Request to {} failed: {}", url, error);
        NoticeError::InvalidUrl
    }
}
