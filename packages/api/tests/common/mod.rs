//! Mock server helpers shared by the contract tests.

#![allow(dead_code)]

use api::{ApiConfig, SchedulerClient};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Start a mock API and a client pointed at it.
pub async fn setup() -> (MockServer, SchedulerClient) {
    let server = MockServer::start().await;
    let client = SchedulerClient::new(ApiConfig::new(server.uri()).with_user_agent("scheduler-tests"));
    (server, client)
}

pub fn job_json(id: i64, assigned_to: Option<(i64, &str)>) -> Value {
    json!({
        "id": id,
        "title": "Audit",
        "index": 1,
        "index_name": "SPX",
        "start_time": "2024-01-01T09:00:00Z",
        "end_time": "2024-01-01T11:00:00Z",
        "assigned_to": assigned_to.map(|(id, _)| id),
        "assigned_to_name": assigned_to.map(|(_, name)| name),
        "color": "#3174ad",
        "notes": ""
    })
}

pub fn member_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "email": format!("{}@example.com", name.to_lowercase()), "user": null })
}

pub fn index_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "description": "" })
}
