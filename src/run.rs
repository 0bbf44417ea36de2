//! Application execution logic.
//!
//! Turns a validated configuration into one request and renders the
//! response for printing.

use serde_json::Value;
use thiserror::Error;

use simple_http::config::ValidatedConfig;
use simple_http::request::{Method, ResponseResult, SimpleHttp};
use simple_http::transport::{HttpClient, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The request could not be built, sent, or its response parsed.
    #[error("Request failed: {0}")]
    Request(#[from] simple_http::request::Error),

    /// The parsed response could not be rendered.
    #[error("Failed to render JSON response: {0}")]
    Render(#[source] serde_json::Error),
}

/// Executes the configured request with the production client.
///
/// # Errors
///
/// Returns [`RunError`] if the request fails.
pub async fn execute(config: ValidatedConfig) -> Result<String, RunError> {
    let api: SimpleHttp = SimpleHttp::new(ReqwestClient::new());
    execute_with(&api, &config).await
}

/// Executes the configured request and returns the text to print.
///
/// With `parse_json` the body is parsed and pretty-printed; otherwise the
/// raw body is returned unchanged.
pub async fn execute_with<H: HttpClient>(
    api: &SimpleHttp<H>,
    config: &ValidatedConfig,
) -> Result<String, RunError> {
    let input = config.request_input()?;

    if config.body.is_some() && !config.method.sends_body() {
        tracing::warn!("Ignoring request body for {} request", config.method);
    }

    if config.parse_json {
        let value: Value = match config.method {
            Method::Get => api.get_json(input).await?,
            Method::Post => api.post_json(input).await?,
            Method::Put => api.put_json(input).await?,
        };
        return serde_json::to_string_pretty(&value).map_err(RunError::Render);
    }

    let response = match config.method {
        Method::Get => api.get(input).await?,
        Method::Post => api.post(input).await?,
        Method::Put => api.put(input).await?,
    };
    log_status(&response);

    Ok(response.body)
}

fn log_status(response: &ResponseResult) {
    if (200..300).contains(&response.status_code) {
        tracing::info!("Response status {}", response.status_code);
    } else {
        tracing::warn!("Response status {}", response.status_code);
    }
}
