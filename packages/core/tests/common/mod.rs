//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use scheduler_core::{
    Company, CompanyId, Index, IndexId, Job, JobId, LatestSignOff, SignOff, SignOffId, Task,
    TaskGroup, TaskGroupId, TaskId, TeamMember, TeamMemberId, TimeSlot, TimeSlotId,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn job(id: i64, title: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Job {
    Job {
        id: JobId(id),
        title: title.to_string(),
        index: IndexId(1),
        index_name: "SPX".to_string(),
        start_time: start,
        end_time: end,
        assigned_to: None,
        assigned_to_name: None,
        color: String::new(),
        notes: String::new(),
    }
}

pub fn member(id: i64, name: &str) -> TeamMember {
    TeamMember {
        id: TeamMemberId(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        user: None,
    }
}

pub fn index(id: i64, name: &str) -> Index {
    Index {
        id: IndexId(id),
        name: name.to_string(),
        description: String::new(),
    }
}

pub fn time_slot(id: i64, name: &str, order: i32) -> TimeSlot {
    TimeSlot {
        id: TimeSlotId(id),
        name: name.to_string(),
        order,
    }
}

pub fn task_group(id: i64, company: i64, name: &str, signed_off_by: Option<&str>) -> TaskGroup {
    TaskGroup {
        id: TaskGroupId(id),
        name: name.to_string(),
        company: CompanyId(company),
        company_name: format!("Company {company}"),
        time_slot: TimeSlotId(1),
        time_slot_name: "Morning".to_string(),
        dallas_time: None,
        tasks: vec![Task {
            id: TaskId(id * 10),
            description: "Check feeds".to_string(),
            order: 1,
        }],
        latest_signoff: signed_off_by.map(|name| LatestSignOff {
            id: SignOffId(id * 100),
            team_member_name: name.to_string(),
            sign_off_date: utc(2024, 3, 4, 9, 0),
        }),
    }
}

pub fn company(id: i64, groups: Vec<TaskGroup>) -> Company {
    Company {
        id: CompanyId(id),
        name: format!("Company {id}"),
        description: None,
        task_groups: groups,
    }
}

pub fn sign_off(id: i64) -> SignOff {
    SignOff {
        id: SignOffId(id),
        task_group: TaskGroupId(1),
        task_group_name: "Opening".to_string(),
        team_member: TeamMemberId(7),
        team_member_name: "Dana".to_string(),
        sign_off_date: utc(2024, 3, 4, 9, 0),
        completed_date: date(2024, 3, 4),
        notes: None,
        company_name: "Company 1".to_string(),
        time_slot_name: "Morning".to_string(),
    }
}
