//! HTTP client for the Readwise highlights API

use super::error::ReadwiseError;
use super::models::{HighlightDraft, SubmitHighlights};

/// Readwise API client
pub struct Client {
    /// HTTP client
    http: reqwest::Client,
    /// API token for authentication
    api_token: String,
    /// Endpoint to POST highlights to
    base_url: String,
}

impl Client {
    /// Readwise highlights endpoint
    const API_URL: &'static str = "https://readwise.io/api/v2/highlights/";

    /// Create a new client with the given API token
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, Self::API_URL)
    }

    /// Create a client against a different endpoint (used by tests)
    pub fn with_base_url(api_token: String, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { http, api_token, base_url: base_url.into() }
    }

    /// Submit one highlight
    ///
    /// Exactly one request per call, no retries. Any success-class response
    /// is success; everything else collapses into `ReadwiseError` and the
    /// caller shows a single generic failure notice.
    pub async fn send(&self, draft: HighlightDraft) -> Result<(), ReadwiseError> {
        let response = self
            .http
            .post(&self.base_url)
            .header("Authorization", format!("Token {}", self.api_token))
            .header("Content-Type", "application/json")
            .json(&SubmitHighlights::single(draft))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Readwise rejected highlight");
            return Err(ReadwiseError::Rejected { status: status.as_u16() });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    fn draft(text: &str, title: &str, author: &str, category: &str) -> HighlightDraft {
        HighlightDraft {
            text: text.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn sends_expected_body_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Token abc123")
            .match_header("content-type", "application/json")
            .match_body(Matcher::JsonString(
                r#"{"highlights":[{"text":"Great quote.","title":"My Book","author":"Jane Doe","category":"books"}]}"#
                    .to_string(),
            ))
            .with_status(200)
            .create_async()
            .await;

        let client = Client::with_base_url("abc123".to_string(), server.url());
        let result = client.send(draft("Great quote.", "My Book", "Jane Doe", "books")).await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn empty_token_still_sends_token_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Token ")
            .with_status(200)
            .create_async()
            .await;

        let client = Client::with_base_url(String::new(), server.url());
        client.send(draft("Quote", "", "", "")).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn auth_failure_maps_to_rejected() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/").with_status(401).expect(1).create_async().await;

        let client = Client::with_base_url("bad".to_string(), server.url());
        let err = client.send(draft("Quote", "", "", "")).await.unwrap_err();

        // One request and one only; no retry after the rejection
        mock.assert_async().await;
        assert!(matches!(err, ReadwiseError::Rejected { status: 401 }));
    }

    #[tokio::test]
    async fn server_error_maps_to_rejected() {
        let mut server = mockito::Server::new_async().await;
        server.mock("POST", "/").with_status(500).create_async().await;

        let client = Client::with_base_url("t".to_string(), server.url());
        let err = client.send(draft("Quote", "", "", "")).await.unwrap_err();

        assert!(matches!(err, ReadwiseError::Rejected { status: 500 }));
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_transport() {
        // Grab a port that nothing is listening on once the server is gone
        let url = {
            let server = mockito::Server::new_async().await;
            server.url()
        };

        let client = Client::with_base_url("t".to_string(), url);
        let err = client.send(draft("Quote", "", "", "")).await.unwrap_err();

        assert!(matches!(err, ReadwiseError::Transport(_)));
    }
}
