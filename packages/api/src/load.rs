//! Combined initial loads. Each is all-or-nothing.

use futures_util::future::try_join3;
use scheduler_core::view::{DashboardData, SchedulerData};

use crate::client::SchedulerClient;
use crate::error::ApiError;
use crate::jobs::JobFilter;

impl SchedulerClient {
    /// Jobs, team members and indexes for the calendar.
    pub async fn load_scheduler(&self) -> Result<SchedulerData, ApiError> {
        let filter = JobFilter::default();
        let (jobs, team_members, indexes) = try_join3(
            self.list_jobs(&filter),
            self.list_team_members(),
            self.list_indexes(),
        )
        .await?;
        Ok(SchedulerData {
            jobs,
            team_members,
            indexes,
        })
    }

    /// Time slots, team members and sign-off history for the dashboard.
    pub async fn load_dashboard(&self) -> Result<DashboardData, ApiError> {
        let (time_slots, team_members, history) = try_join3(
            self.list_time_slots(),
            self.list_team_members(),
            self.task_history(),
        )
        .await?;
        Ok(DashboardData {
            time_slots,
            team_members,
            history,
        })
    }
}
