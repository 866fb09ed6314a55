use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::models::{ApiError, Connection, PaymentRequest, Transaction, TransactionPage};

/// Backend API surface used by the coordinator and the send-money form.
///
/// Kept as a trait so the UI layer can be exercised against a mock client
/// without a running backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentsApi {
    /// GET /api/v1/transactions/my-transactions
    async fn my_transactions(&self) -> Result<Vec<Transaction>, ApiError>;

    /// GET /api/v1/transactions/my-transactions-paginated?page=N
    async fn my_transactions_page(&self, page: usize) -> Result<TransactionPage, ApiError>;

    /// GET /api/v1/users/my-connections
    async fn my_connections(&self) -> Result<Vec<Connection>, ApiError>;

    /// GET /api/v1/transactions/{id}
    async fn transaction(&self, id: u64) -> Result<Transaction, ApiError>;

    /// POST /api/v1/transactions/make-payment
    ///
    /// The backend answers with a plain-text body ("Payment successful"),
    /// not JSON.
    async fn make_payment(&self, request: &PaymentRequest) -> Result<String, ApiError>;
}

/// PayMyBuddy API client.
///
/// Exactly one network attempt per call: no retries, no timeout beyond
/// reqwest's defaults, no caching.
pub struct PayBuddyClient {
    http_client: HttpClient,
    base_url: String,
}

impl PayBuddyClient {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";

    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (from config, or a test
    /// server).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Map a non-2xx response to the matching error variant, consuming the
    /// body for the error message.
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let body_text = response.text().await.unwrap_or_default();
        classify_status(status.as_u16(), body_text)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .get(&url)
            .headers(Self::create_headers())
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl PaymentsApi for PayBuddyClient {
    async fn my_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("/api/v1/transactions/my-transactions").await
    }

    async fn my_transactions_page(&self, page: usize) -> Result<TransactionPage, ApiError> {
        let path = format!("/api/v1/transactions/my-transactions-paginated?page={}", page);
        self.get_json(&path).await
    }

    async fn my_connections(&self) -> Result<Vec<Connection>, ApiError> {
        self.get_json("/api/v1/users/my-connections").await
    }

    async fn transaction(&self, id: u64) -> Result<Transaction, ApiError> {
        let path = format!("/api/v1/transactions/{}", id);
        self.get_json(&path).await
    }

    async fn make_payment(&self, request: &PaymentRequest) -> Result<String, ApiError> {
        let url = format!("{}/api/v1/transactions/make-payment", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .headers(Self::create_headers())
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        // Success body is plain text, e.g. "Payment successful".
        response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response body: {}", e)))
    }
}

/// Classify an HTTP status into an error variant.
fn classify_status(status_code: u16, body_text: String) -> ApiError {
    match status_code {
        400 => {
            // The backend sometimes wraps the message in a JSON envelope.
            if let Ok(err_json) = serde_json::from_str::<serde_json::Value>(&body_text) {
                let message = err_json
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or(&body_text);
                ApiError::BadRequest(message.to_string())
            } else {
                ApiError::BadRequest(body_text)
            }
        }
        401 => ApiError::Unauthorized(body_text),
        403 => ApiError::Forbidden(body_text),
        404 => ApiError::NotFound(body_text),
        500..=599 => {
            warn!("Server error {}: {}", status_code, body_text);
            ApiError::ServerError(status_code, body_text)
        }
        _ => ApiError::Http(status_code, body_text),
    }
}
