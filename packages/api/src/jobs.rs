//! Job endpoints.

use chrono::{DateTime, Utc};
use reqwest::Method;
use scheduler_core::submit::IdempotencyKey;
use scheduler_core::{AssignJobRequest, IndexId, Job, JobId, NewJob};
use serde::Serialize;

use crate::client::SchedulerClient;
use crate::error::ApiError;

/// Optional filters for the job list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_id: Option<IndexId>,
}

impl JobFilter {
    /// Jobs that lie entirely within the range: starting at or after `start`
    /// and ending at or before `end`. Jobs straddling either bound are left out.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }

    pub fn with_index(mut self, index: IndexId) -> Self {
        self.index_id = Some(index);
        self
    }
}

impl SchedulerClient {
    /// `GET /api/jobs/`
    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, ApiError> {
        self.get_with_query("/api/jobs/", filter).await
    }

    /// `POST /api/jobs/`
    pub async fn create_job(&self, job: &NewJob, key: IdempotencyKey) -> Result<Job, ApiError> {
        let created: Job = self
            .fetch(self.write(Method::POST, "/api/jobs/", job, key))
            .await?;
        tracing::debug!(job_id = %created.id, "job stored");
        Ok(created)
    }

    /// `PUT /api/assign-job/{id}/`
    pub async fn assign_job(
        &self,
        id: JobId,
        request: &AssignJobRequest,
        key: IdempotencyKey,
    ) -> Result<Job, ApiError> {
        let path = format!("/api/assign-job/{id}/");
        self.fetch(self.write(Method::PUT, &path, request, key)).await
    }
}
