//! Homework review API
//!
//! Polls the review service for homework statuses changed since a given
//! moment. The body is returned untouched; shape checks belong to the caller.

use crate::error::Result;
use crate::handle_response;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;

/// HTTP client for the homework review API
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// Sends exactly one `GET <endpoint>?from_date=<from_date>` with an
    /// `Authorization: OAuth <token>` header.
    ///
    /// # Arguments
    /// * `from_date` - Lower time bound, Unix epoch seconds
    ///
    /// # Returns
    /// The parsed JSON body of a 2xx response
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        handle_response(response).await
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const STATUSES_PATH: &str = "/api/user_api/homework_statuses/";

    async fn client_for(server: &MockServer) -> PracticumClient {
        PracticumClient::new(format!("{}{}", server.uri(), STATUSES_PATH), "secret")
    }

    #[tokio::test]
    async fn test_sends_token_and_from_date() {
        let server = MockServer::start().await;
        let body = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1700000600,
        });
        Mock::given(method("GET"))
            .and(path(STATUSES_PATH))
            .and(header("Authorization", "OAuth secret"))
            .and(query_param("from_date", "1700000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.homework_statuses(1_700_000_000).await.unwrap();
        assert_eq!(response, body);
    }

    #[tokio::test]
    async fn test_body_is_not_schema_checked() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": 1})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.homework_statuses(0).await.unwrap(), json!({"foo": 1}));
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.homework_statuses(0).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::ApiError { status: 500, ref message } if message == "boom"
        ));
    }

    #[tokio::test]
    async fn test_large_error_page_is_truncated() {
        let server = MockServer::start().await;
        let page = format!("<html>{}</html>", "x".repeat(10_000));
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string(page))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        match client.homework_statuses(0).await.unwrap_err() {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 502);
                assert!(message.starts_with("<html>xxx"));
                assert_eq!(message.chars().count(), crate::MAX_ERROR_BODY_CHARS + 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.homework_statuses(0).await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let client = PracticumClient::new("http://127.0.0.1:9/statuses/", "secret");
        let err = client.homework_statuses(0).await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = PracticumClient::new("http://localhost/statuses/", "secret");
        let debug = format!("{:?}", client);
        assert!(debug.contains("http://localhost/statuses/"));
        assert!(!debug.contains("secret"));
    }
}
