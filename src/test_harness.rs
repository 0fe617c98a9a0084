//! Integration test harness for mock upload endpoints
//!
//! This module provides utilities for running upload tests against a mock
//! server instead of requiring real infrastructure to be running.

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

/// A test harness that sets up a mock upload server
pub struct TestHarness {
    pub server: ServerGuard,
}

impl TestHarness {
    /// Create a new test harness with a mock server
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        Self { server }
    }

    /// Get the mock server URL
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Mock a POST upload endpoint that accepts any multipart body
    pub async fn mock_upload_ok(&mut self, path: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_header(
                "content-type",
                Matcher::Regex(r"multipart/form-data.*".to_string()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true }).to_string())
            .create_async()
            .await
    }

    /// Mock a POST upload endpoint that requires the given multipart field
    pub async fn mock_upload_ok_for_field(&mut self, path: &str, field: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_body(Matcher::Regex(format!("name=\"{}\"", field)))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true }).to_string())
            .create_async()
            .await
    }

    /// Mock a POST upload endpoint that rejects with the given status
    pub async fn mock_upload_failure(
        &mut self,
        path: &str,
        status: usize,
        error_message: &str,
    ) -> Mock {
        self.server
            .mock("POST", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": error_message }).to_string())
            .create_async()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_harness_url_is_local_http() {
        let harness = TestHarness::new().await;
        assert!(harness.url().starts_with("http://127.0.0.1"));
    }

    #[tokio::test]
    async fn test_failure_mock_serves_status_and_body() {
        let mut harness = TestHarness::new().await;
        let _mock = harness.mock_upload_failure("/upload", 503, "try later").await;

        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/upload", harness.url()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 503);
        let body = response.text().await.unwrap();
        assert!(body.contains("try later"));
    }
}
