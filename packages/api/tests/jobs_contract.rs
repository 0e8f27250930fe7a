#![allow(clippy::disallowed_methods)]

mod common;

use std::error::Error;

use api::{ApiError, IDEMPOTENCY_HEADER, JobFilter};
use chrono::{TimeZone, Utc};
use scheduler_core::submit::IdempotencyKey;
use scheduler_core::view::{SchedulerData, SchedulerState};
use scheduler_core::{AssignJobRequest, IndexId, JobId, NewJob, TeamMemberId};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn lists_jobs() -> Result<(), Box<dyn Error>> {
    let (server, client) = common::setup().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([common::job_json(42, None)])))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = client.list_jobs(&JobFilter::default()).await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, JobId(42));
    assert_eq!(jobs[0].assignee_label(), "Unassigned");
    Ok(())
}

#[tokio::test]
async fn job_filter_becomes_query_params() -> Result<(), Box<dyn Error>> {
    let (server, client) = common::setup().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/"))
        .and(query_param("index_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = JobFilter::default().with_index(IndexId(3));
    assert!(client.list_jobs(&filter).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn create_posts_rfc3339_with_idempotency_key() -> Result<(), Box<dyn Error>> {
    let (server, client) = common::setup().await;
    let key = IdempotencyKey::new();

    Mock::given(method("POST"))
        .and(path("/api/jobs/"))
        .and(header(IDEMPOTENCY_HEADER, key.to_string().as_str()))
        .and(body_json(json!({
            "title": "Audit",
            "index": 1,
            "start_time": "2024-01-01T09:00:00Z",
            "end_time": "2024-01-01T11:00:00Z",
            "assigned_to": null,
            "notes": "",
            "color": "#3174ad"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::job_json(42, None)))
        .expect(1)
        .mount(&server)
        .await;

    let new_job = NewJob {
        title: "Audit".to_string(),
        index: IndexId(1),
        start_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap(),
        assigned_to: None,
        notes: String::new(),
        color: "#3174ad".to_string(),
    };
    let created = client.create_job(&new_job, key).await?;
    assert_eq!(created.id, JobId(42));
    Ok(())
}

#[tokio::test]
async fn assign_puts_member_id() -> Result<(), Box<dyn Error>> {
    let (server, client) = common::setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/assign-job/42/"))
        .and(header_exists(IDEMPOTENCY_HEADER))
        .and(body_json(json!({ "team_member_id": 7 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::job_json(42, Some((7, "Dana")))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = AssignJobRequest {
        team_member_id: Some(TeamMemberId(7)),
    };
    let job = client.assign_job(JobId(42), &request, IdempotencyKey::new()).await?;
    assert_eq!(job.assigned_to, Some(TeamMemberId(7)));
    assert_eq!(job.assignee_label(), "Dana");
    Ok(())
}

#[tokio::test]
async fn unassign_sends_null() -> Result<(), Box<dyn Error>> {
    let (server, client) = common::setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/assign-job/42/"))
        .and(body_json(json!({ "team_member_id": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::job_json(42, None)))
        .expect(1)
        .mount(&server)
        .await;

    let request = AssignJobRequest { team_member_id: None };
    let job = client.assign_job(JobId(42), &request, IdempotencyKey::new()).await?;
    assert_eq!(job.assigned_to, None);
    Ok(())
}

#[tokio::test]
async fn server_error_keeps_status_and_body() -> Result<(), Box<dyn Error>> {
    let (server, client) = common::setup().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    match client.list_jobs(&JobFilter::default()).await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() -> Result<(), Box<dyn Error>> {
    let (server, client) = common::setup().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = client.list_jobs(&JobFilter::default()).await;
    assert!(matches!(result, Err(ApiError::Decode(_))), "got {result:?}");
    Ok(())
}

async fn mount_list(server: &wiremock::MockServer, route: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn scheduler_load_fetches_all_three_lists() -> Result<(), Box<dyn Error>> {
    let (server, client) = common::setup().await;
    mount_list(&server, "/api/jobs/", 200, json!([common::job_json(42, Some((7, "Dana")))])).await;
    mount_list(&server, "/api/team-members/", 200, json!([common::member_json(7, "Dana")])).await;
    mount_list(&server, "/api/indexes/", 200, json!([common::index_json(1, "SPX")])).await;

    let data = client.load_scheduler().await?;
    assert_eq!(data.jobs.len(), 1);
    assert_eq!(data.team_members[0].name, "Dana");
    assert_eq!(data.indexes[0].name, "SPX");
    Ok(())
}

#[tokio::test]
async fn scheduler_load_is_all_or_nothing() -> Result<(), Box<dyn Error>> {
    let (server, client) = common::setup().await;
    mount_list(&server, "/api/jobs/", 200, json!([common::job_json(42, None)])).await;
    mount_list(&server, "/api/team-members/", 500, json!({ "detail": "boom" })).await;
    mount_list(&server, "/api/indexes/", 200, json!([common::index_json(1, "SPX")])).await;

    let result = client.load_scheduler().await;
    assert!(matches!(result, Err(ApiError::Status { status: 500, .. })), "got {result:?}");

    let mut state = SchedulerState::new(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    match result {
        Ok(data) => state.load_succeeded(data),
        Err(e) => state.load_failed(&e),
    }
    assert!(state.jobs.is_empty(), "no jobs from a failed load");
    assert!(state.indexes.is_empty(), "no indexes from a failed load");
    assert_eq!(
        SchedulerData {
            jobs: state.jobs.clone(),
            team_members: state.team_members.clone(),
            indexes: state.indexes.clone(),
        },
        SchedulerData::default()
    );
    Ok(())
}
