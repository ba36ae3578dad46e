use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Sends the request and decodes a JSON body, mapping every failure to an `ApiError`.
    pub(crate) async fn send_json<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let method = request.method().to_string();
        let path = request.url().path().to_string();
        let response = self.execute(request).await.map_err(|err| {
            log::error!("{} {} transport failure: {}", method, path, err);
            err
        })?;
        Self::map_json_response(response, &method, &path).await
    }

    async fn execute(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(mocked) = mock::respond(&request) {
            return mocked;
        }
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    async fn map_json_response<T>(response: Response, method: &str, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
            // 204 and empty 200s decode as JSON null.
            let body = if body.trim().is_empty() { "null" } else { body.as_str() };
            return serde_json::from_str(body)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
        }
        log::warn!("{} {} returned {}", method, path, status);
        let body = response.text().await.unwrap_or_default();
        Err(Self::map_error_payload(&body, status.as_u16(), method, path))
    }

    fn map_error_payload(body: &str, status: u16, method: &str, path: &str) -> ApiError {
        match serde_json::from_str::<ApiError>(body) {
            Ok(mut error) if !error.error.trim().is_empty() => {
                if error.code.is_empty() {
                    error.code = format!("HTTP_{}", status);
                }
                error
            }
            _ => ApiError::http_status(status, method, path),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock::{register_mock, MockResponse, TestResponder};
