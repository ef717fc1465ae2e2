//! HTTP plumbing shared by every endpoint method.
//!
//! One request path builds the URL, attaches the JSON body and credentials,
//! and normalizes the outcome: transport failures, non-2xx envelopes, and
//! undecodable bodies all collapse into [`ApiError`]. The parsing half is a
//! pure function so it can be tested without a network.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{ApiError, FieldError};

/// Response envelope used by every endpoint:
/// `{ success, data?, message?, errors? }`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<FieldError>>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the `data` payload, treating a missing payload as a decode
    /// failure.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::Decode("response is missing its data payload".to_string()))
    }
}

/// HTTP client for the ToDoPro API.
///
/// Cheap to clone; the underlying connection pool is shared. The session
/// cookie rides along automatically: natively through a client-level cookie
/// store, in the browser by opting every request into fetch credentials.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let http = Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("falling back to a cookie-less http client: {e}");
                Client::new()
            });
        #[cfg(target_arch = "wasm32")]
        let http = Client::new();

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub(crate) async fn post_empty<T>(&self, path: &str) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::POST, path, &[], None).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    pub(crate) async fn patch_empty<T>(&self, path: &str) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::PATCH, path, &[], None).await
    }

    pub(crate) async fn delete<T>(&self, path: &str) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::DELETE, path, &[], None).await
    }

    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        #[cfg(target_arch = "wasm32")]
        {
            request = request.fetch_credentials_include();
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_envelope(status, &body)
    }
}

/// Turn a raw status + body into the typed envelope or a normalized error.
pub(crate) fn parse_envelope<T>(status: u16, body: &str) -> Result<ApiResponse<T>, ApiError>
where
    T: DeserializeOwned,
{
    if (200..300).contains(&status) {
        if body.trim().is_empty() {
            // 204-style responses carry no envelope
            return Ok(ApiResponse {
                success: true,
                data: None,
                message: None,
                errors: None,
            });
        }
        return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    // Error bodies share the envelope shape, but tolerate anything
    match serde_json::from_str::<ApiResponse<serde_json::Value>>(body) {
        Ok(envelope) => Err(ApiError::Http {
            status,
            message: envelope
                .message
                .unwrap_or_else(|| default_message(status)),
            errors: envelope.errors.unwrap_or_default(),
        }),
        Err(_) => Err(ApiError::Http {
            status,
            message: if body.trim().is_empty() {
                default_message(status)
            } else {
                body.trim().to_string()
            },
            errors: Vec::new(),
        }),
    }
}

fn default_message(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::todo::Todo;

    #[test]
    fn trailing_slash_is_stripped_from_the_base() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:4000/api/v1/"));
        assert_eq!(client.base_url(), "http://localhost:4000/api/v1");
    }

    #[test]
    fn success_envelope_is_decoded() {
        let body = r#"{
            "success": true,
            "data": [{
                "_id": "t1",
                "title": "Buy milk",
                "status": "pending",
                "priority": "high",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-01T00:00:00.000Z"
            }]
        }"#;
        let envelope: ApiResponse<Vec<Todo>> = parse_envelope(200, body).unwrap();
        assert!(envelope.success);
        let todos = envelope.into_data().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, "t1");
    }

    #[test]
    fn empty_success_body_yields_an_empty_envelope() {
        let envelope: ApiResponse<serde_json::Value> = parse_envelope(204, "").unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn error_envelope_carries_message_and_field_errors() {
        let body = r#"{
            "success": false,
            "message": "Validation failed",
            "errors": [{"field": "title", "message": "Title is required", "value": ""}]
        }"#;
        let err = parse_envelope::<serde_json::Value>(400, body).unwrap_err();
        match err {
            ApiError::Http {
                status,
                message,
                errors,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Validation failed");
                assert_eq!(errors[0].field, "title");
            }
            other => panic!("expected http error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_falls_back_to_the_raw_text() {
        let err = parse_envelope::<serde_json::Value>(502, "Bad Gateway\n").unwrap_err();
        match err {
            ApiError::Http {
                status, message, ..
            } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected http error, got {other:?}"),
        }
    }

    #[test]
    fn empty_error_body_uses_the_status_reason() {
        let err = parse_envelope::<serde_json::Value>(401, "").unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized");
        assert!(err.is_auth_error());
    }

    #[test]
    fn undecodable_success_body_is_a_decode_error() {
        let err = parse_envelope::<Vec<Todo>>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn missing_data_payload_is_a_decode_error() {
        let envelope: ApiResponse<Vec<Todo>> =
            parse_envelope(200, r#"{"success": true}"#).unwrap();
        assert!(matches!(
            envelope.into_data(),
            Err(ApiError::Decode(_))
        ));
    }
}
