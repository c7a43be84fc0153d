/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for mytasks-adapter tests

use mytasks_adapter::{ClientConfig, TaskClient};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with a short deadline
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> TaskClient {
    let config = ClientConfig {
        timeout: Duration::from_millis(500),
        ..ClientConfig::default()
    };
    TaskClient::with_config_and_base_url(config, &server.uri()).expect("client init")
}

/// A wire task as the service returns it
#[allow(dead_code)]
pub fn wire_task(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "status": "in_progress",
        "priority": "high",
        "dueDate": "tomorrow",
        "category": "work",
        "tags": ["x", "y"],
        "assignedTo": "dana",
        "createdBy": "user123",
        "estimatedMinutes": 45,
        "isRecurring": false,
        "recurrencePattern": "",
        "createdAt": "2024-03-05T12:00:00.000Z",
        "updatedAt": "2024-03-06T09:15:00.000Z"
    })
}
