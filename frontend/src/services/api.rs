use gloo::net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::ClientConfig;
use thiserror::Error;
use yew::Callback;

use crate::services::logging::Logger;

/// Errors surfaced by every API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("{}", status_message(.status, .body))]
    Status { status: u16, body: String },
    #[error("Invalid response: {0}")]
    Parse(String),
    #[error("Invalid request: {0}")]
    Request(String),
}

fn status_message(status: &u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("HTTP error! status: {}", status)
    } else {
        body.trim().to_string()
    }
}

/// What a request was trying to do, used to word the failure alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Load,
    Save,
    Update,
    Delete,
}

impl RequestKind {
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            RequestKind::Load => "Gagal memuat data: ",
            RequestKind::Save => "Gagal menyimpan data: ",
            RequestKind::Update => "Gagal mengupdate data: ",
            RequestKind::Delete => "Gagal menghapus data: ",
        }
    }
}

/// Request lifecycle notifications for the loading overlay and alerts
#[derive(Debug, Clone, PartialEq)]
pub enum ApiActivity {
    Started,
    Finished,
    Failed { kind: RequestKind, message: String },
}

impl ApiActivity {
    /// Alert text for a failed request
    pub fn alert_message(&self) -> Option<String> {
        match self {
            ApiActivity::Failed { kind, message } => {
                Some(format!("{}{}", kind.failure_prefix(), message))
            }
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// API client for communicating with the inventory backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    auth_header: Option<String>,
    on_activity: Option<Callback<ApiActivity>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base.clone(),
            auth_header: config.auth_header(),
            on_activity: None,
        }
    }

    /// Report request activity to the given callback
    pub fn with_activity(mut self, on_activity: Callback<ApiActivity>) -> Self {
        self.on_activity = Some(on_activity);
        self
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let builder = self.request(Verb::Get, &self.url(endpoint));
        self.execute(RequestKind::Load, builder, None).await
    }

    /// GET for endpoints that answer 200 with an empty body instead of a value
    pub async fn get_optional<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>, ApiError> {
        let builder = self.request(Verb::Get, &self.url(endpoint));
        self.notify(ApiActivity::Started);
        let result = match Self::send(builder, None).await {
            Ok(response) => match response.text().await {
                Ok(text) => decode_body(&text),
                Err(e) => Err(ApiError::Parse(e.to_string())),
            },
            Err(e) => Err(e),
        };
        self.report(RequestKind::Load, &result);
        result
    }

    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = self.request(Verb::Get, &self.url(&with_query(endpoint, params)));
        self.execute(RequestKind::Load, builder, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        let builder = self.request(Verb::Post, &self.url(endpoint));
        self.execute(RequestKind::Save, builder, Some(body)).await
    }

    /// POST with query parameters and no body
    pub async fn post_with_params<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = self.request(Verb::Post, &self.url(&with_query(endpoint, params)));
        self.execute(RequestKind::Save, builder, None).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        let builder = self.request(Verb::Put, &self.url(endpoint));
        self.execute(RequestKind::Update, builder, Some(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        let builder = self.request(Verb::Delete, &self.url(endpoint));
        self.notify(ApiActivity::Started);
        let result = Self::send(builder, None).await.map(|_| ());
        self.report(RequestKind::Delete, &result);
        result
    }

    fn request(&self, verb: Verb, url: &str) -> RequestBuilder {
        let builder = match verb {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Delete => Request::delete(url),
        }
        .header("Content-Type", "application/json");

        match &self.auth_header {
            Some(value) => builder.header("Authorization", value),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        kind: RequestKind,
        builder: RequestBuilder,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        self.notify(ApiActivity::Started);
        let result = match Self::send(builder, body).await {
            Ok(response) => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string())),
            Err(e) => Err(e),
        };
        self.report(kind, &result);
        result
    }

    async fn send(builder: RequestBuilder, body: Option<String>) -> Result<Response, ApiError> {
        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response)
    }

    fn report<T>(&self, kind: RequestKind, result: &Result<T, ApiError>) {
        match result {
            Ok(_) => self.notify(ApiActivity::Finished),
            Err(e) => {
                Logger::error_with_component("api", &format!("{:?} request failed: {}", kind, e));
                self.notify(ApiActivity::Failed {
                    kind,
                    message: e.to_string(),
                });
            }
        }
    }

    fn notify(&self, activity: ApiActivity) {
        if let Some(on_activity) = &self.on_activity {
            on_activity.emit(activity);
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Request(e.to_string()))
}

/// Decode a response body; an empty body or `null` is `None`.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<Option<T>, ApiError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(text).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Append percent-encoded query parameters to an endpoint
pub fn with_query(endpoint: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", endpoint, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_with_query_encodes_values() {
        assert_eq!(with_query("/products", &[]), "/products");
        assert_eq!(
            with_query("/products/search", &[("name", "kopi & teh".to_string())]),
            "/products/search?name=kopi%20%26%20teh"
        );
        assert_eq!(
            with_query(
                "/products/price-range",
                &[("minPrice", "1000".to_string()), ("maxPrice", "5000".to_string())]
            ),
            "/products/price-range?minPrice=1000&maxPrice=5000"
        );
    }

    #[wasm_bindgen_test]
    fn test_decode_body_empty_and_null() {
        assert_eq!(decode_body::<f64>(""), Ok(None));
        assert_eq!(decode_body::<f64>("  \n"), Ok(None));
        assert_eq!(decode_body::<f64>("null"), Ok(None));
        assert_eq!(decode_body::<f64>("123.45"), Ok(Some(123.45)));
        assert!(matches!(decode_body::<f64>("{not json"), Err(ApiError::Parse(_))));
    }

    #[wasm_bindgen_test]
    fn test_url_uses_configured_base() {
        let config = ClientConfig::from_values(Some("http://localhost:8080/api"), None, None);
        let client = ApiClient::new(&config);
        assert_eq!(client.url("/products/1"), "http://localhost:8080/api/products/1");
        assert_eq!(ApiClient::default().url("/transactions"), "/api/transactions");
    }

    #[wasm_bindgen_test]
    fn test_error_messages() {
        let error = ApiError::Status {
            status: 404,
            body: String::new(),
        };
        assert_eq!(error.to_string(), "HTTP error! status: 404");

        let error = ApiError::Status {
            status: 400,
            body: "Insufficient stock".to_string(),
        };
        assert_eq!(error.to_string(), "Insufficient stock");
    }

    #[wasm_bindgen_test]
    fn test_failure_alert_messages() {
        let activity = ApiActivity::Failed {
            kind: RequestKind::Delete,
            message: "HTTP error! status: 404".to_string(),
        };
        assert_eq!(
            activity.alert_message().as_deref(),
            Some("Gagal menghapus data: HTTP error! status: 404")
        );
        assert_eq!(RequestKind::Load.failure_prefix(), "Gagal memuat data: ");
        assert_eq!(ApiActivity::Finished.alert_message(), None);
    }
}
