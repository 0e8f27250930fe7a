//! Task dashboard endpoints.

use reqwest::Method;
use scheduler_core::submit::IdempotencyKey;
use scheduler_core::view::TaskQuery;
use scheduler_core::{Company, SignOff, SignOffRequest, TimeSlot};

use crate::client::SchedulerClient;
use crate::error::ApiError;

impl SchedulerClient {
    pub async fn list_time_slots(&self) -> Result<Vec<TimeSlot>, ApiError> {
        self.get("/api/time-slots/").await
    }

    /// Recent sign-offs, newest first.
    pub async fn task_history(&self) -> Result<Vec<SignOff>, ApiError> {
        self.get("/api/task-history/").await
    }

    /// `GET /api/companies/with_tasks/?time_slot=&date=`
    pub async fn companies_with_tasks(&self, query: &TaskQuery) -> Result<Vec<Company>, ApiError> {
        let params = [
            ("time_slot", query.time_slot.to_string()),
            ("date", query.date_param()),
        ];
        self.get_with_query("/api/companies/with_tasks/", &params).await
    }

    /// `POST /api/task-signoffs/sign_off/`. The response body is not used.
    pub async fn sign_off(&self, request: &SignOffRequest, key: IdempotencyKey) -> Result<(), ApiError> {
        self.send(self.write(Method::POST, "/api/task-signoffs/sign_off/", request, key))
            .await?;
        tracing::info!(task_group_id = %request.task_group_id, "sign-off recorded");
        Ok(())
    }
}
