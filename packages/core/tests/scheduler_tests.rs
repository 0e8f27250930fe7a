#![allow(clippy::disallowed_methods)]

mod common;

use chrono::{Duration, Utc};
use common::{date, job, member, utc};
use scheduler_core::calendar::{CalendarNav, CalendarView, events_on};
use scheduler_core::view::{JobFormChange, SchedulerData, SchedulerDialog, SchedulerState};
use scheduler_core::{IndexId, Job, JobId, TeamMemberId, ValidationError};

fn loaded_state() -> SchedulerState {
    let mut state = SchedulerState::new(date(2024, 1, 1));
    state.load_succeeded(SchedulerData {
        jobs: vec![
            job(41, "Rebalance", utc(2024, 1, 2, 14, 0), utc(2024, 1, 2, 15, 0)),
            job(42, "Audit", utc(2024, 1, 1, 9, 0), utc(2024, 1, 1, 11, 0)),
        ],
        team_members: vec![member(7, "Dana")],
        indexes: vec![common::index(1, "SPX")],
    });
    state
}

#[test]
fn audit_job_shows_on_its_day_as_unassigned() {
    let state = loaded_state();
    let events = state.events(&Utc);

    let on_day = events_on(&events, date(2024, 1, 1));
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].title, "Audit");
    assert_eq!(on_day[0].assignee, "Unassigned");
    assert_eq!(on_day[0].color, "#3174ad");
    assert_eq!(on_day[0].time_label(), "09:00 - 11:00");

    let segment = on_day[0].segment_on(date(2024, 1, 1)).unwrap();
    assert!((segment.top - 9.0 / 24.0).abs() < 1e-9);
    assert!((segment.height - 2.0 / 24.0).abs() < 1e-9);
}

#[test]
fn assignment_patches_only_the_matching_job() {
    let mut state = loaded_state();
    let before_other = state.job(JobId(41)).cloned().unwrap();

    assert!(state.select_event(JobId(42)));
    let form = state.assign_form_mut().unwrap();
    form.select(Some(TeamMemberId(7)));
    let submission = form.begin_submit().unwrap();
    assert_eq!(submission.body.team_member_id, Some(TeamMemberId(7)));

    let mut response = state.job(JobId(42)).cloned().unwrap();
    response.assigned_to = Some(TeamMemberId(7));
    response.assigned_to_name = Some("Dana".to_string());
    response.title = "renamed by server".to_string();
    state.job_assigned(submission.key, &response);

    let patched = state.job(JobId(42)).unwrap();
    assert_eq!(patched.assigned_to, Some(TeamMemberId(7)));
    assert_eq!(patched.assignee_label(), "Dana");
    assert_eq!(patched.title, "Audit");
    assert_eq!(state.job(JobId(41)), Some(&before_other));
    assert_eq!(state.jobs.len(), 2);
    assert!(state.dialog.is_none());
}

#[test]
fn selecting_a_slot_prefills_a_two_hour_job() {
    let mut state = loaded_state();
    let start = utc(2024, 1, 3, 13, 0);
    state.select_slot(start);

    let Some(SchedulerDialog::Create(form)) = &state.dialog else {
        panic!("create dialog should be open");
    };
    assert_eq!(form.start, start);
    assert_eq!(form.end, start + Duration::hours(2));
    assert_eq!(form.color, "#3174ad");
}

#[test]
fn create_without_index_never_reaches_the_network() {
    let mut state = loaded_state();
    state.select_slot(utc(2024, 1, 3, 13, 0));
    let form = state.create_form_mut().unwrap();
    form.update(JobFormChange::Title("Close".to_string()));

    assert!(form.begin_submit().is_none());
    assert_eq!(form.error, Some(ValidationError::MissingField("Index")));
    assert!(!form.is_submitting());
}

#[test]
fn failed_create_keeps_the_form_and_reuses_the_key() {
    let mut state = loaded_state();
    state.select_slot(utc(2024, 1, 3, 13, 0));
    let form = state.create_form_mut().unwrap();
    form.update(JobFormChange::Title("Close".to_string()));
    form.update(JobFormChange::Index(Some(IndexId(1))));

    let first = form.begin_submit().unwrap();
    assert!(form.begin_submit().is_none(), "second submit while in flight");
    state.create_failed(first.key, &"connection refused");

    let form = state.create_form_mut().unwrap();
    assert_eq!(form.alert.as_deref(), Some("Failed to create job. Please try again."));
    assert_eq!(form.title, "Close");

    let retry = form.begin_submit().unwrap();
    assert_eq!(first.key, retry.key);
}

#[test]
fn editing_after_a_failed_create_sends_a_new_key() {
    let mut state = loaded_state();
    state.select_slot(utc(2024, 1, 3, 13, 0));
    let form = state.create_form_mut().unwrap();
    form.update(JobFormChange::Title("Bad".to_string()));
    form.update(JobFormChange::Index(Some(IndexId(1))));
    let first = form.begin_submit().unwrap();
    state.create_failed(first.key, &"400 Bad Request");

    let form = state.create_form_mut().unwrap();
    form.update(JobFormChange::Title("Fixed".to_string()));
    let retry = form.begin_submit().unwrap();
    assert_ne!(first.body, retry.body);
    assert_ne!(first.key, retry.key);
}

#[test]
fn created_job_is_appended_and_dialog_closes() {
    let mut state = loaded_state();
    state.select_slot(utc(2024, 1, 3, 13, 0));
    let form = state.create_form_mut().unwrap();
    form.update(JobFormChange::Title("Close".to_string()));
    form.update(JobFormChange::Index(Some(IndexId(1))));
    let submission = form.begin_submit().unwrap();

    let created: Job = job(43, "Close", utc(2024, 1, 3, 13, 0), utc(2024, 1, 3, 15, 0));
    state.job_created(submission.key, created.clone());

    assert_eq!(state.jobs.last(), Some(&created));
    assert!(state.dialog.is_none());
}

#[test]
fn late_create_response_leaves_a_newer_assign_dialog_open() {
    let mut state = loaded_state();
    state.select_slot(utc(2024, 1, 3, 13, 0));
    let form = state.create_form_mut().unwrap();
    form.update(JobFormChange::Title("Close".to_string()));
    form.update(JobFormChange::Index(Some(IndexId(1))));
    let submission = form.begin_submit().unwrap();

    state.close_dialog();
    assert!(state.select_event(JobId(42)));
    state.assign_form_mut().unwrap().select(Some(TeamMemberId(7)));

    let created = job(43, "Close", utc(2024, 1, 3, 13, 0), utc(2024, 1, 3, 15, 0));
    state.job_created(submission.key, created);

    assert_eq!(state.jobs.len(), 3);
    let Some(SchedulerDialog::Assign(form)) = &state.dialog else {
        panic!("assign dialog should stay open");
    };
    assert_eq!(form.selected, Some(TeamMemberId(7)));
}

#[test]
fn late_assign_failure_does_not_alert_the_next_dialog() {
    let mut state = loaded_state();
    assert!(state.select_event(JobId(42)));
    let stale = state.assign_form_mut().unwrap().begin_submit().unwrap();

    state.close_dialog();
    assert!(state.select_event(JobId(41)));
    state.assign_failed(stale.key, &"502 Bad Gateway");

    let form = state.assign_form_mut().unwrap();
    assert_eq!(form.job.id, JobId(41));
    assert_eq!(form.alert, None);
    assert!(form.begin_submit().is_some());
}

#[test]
fn failed_load_leaves_lists_untouched() {
    let mut state = SchedulerState::new(date(2024, 1, 1));
    state.load_failed(&"timeout");
    assert!(state.jobs.is_empty());
    assert!(state.team_members.is_empty());
    assert!(state.indexes.is_empty());
}

#[test]
fn toolbar_navigation_follows_the_view() {
    let mut state = loaded_state();
    state.set_view(CalendarView::Week);
    state.navigate(CalendarNav::Next);
    assert_eq!(state.anchor, date(2024, 1, 8));

    state.set_view(CalendarView::Day);
    state.navigate(CalendarNav::Back);
    assert_eq!(state.anchor, date(2024, 1, 7));

    state.navigate(CalendarNav::Today(date(2024, 1, 1)));
    assert_eq!(state.anchor, date(2024, 1, 1));
}

#[test]
fn inverted_job_is_drawn_with_zero_height() {
    let mut state = SchedulerState::new(date(2024, 1, 1));
    state.load_succeeded(SchedulerData {
        jobs: vec![job(1, "Backwards", utc(2024, 1, 1, 12, 0), utc(2024, 1, 1, 10, 0))],
        ..SchedulerData::default()
    });
    let events = state.events(&Utc);
    let segment = events[0].segment_on(date(2024, 1, 1)).unwrap();
    assert_eq!(segment.height, 0.0);
}

#[test]
fn created_audit_job_is_listed_as_unassigned() {
    let mut state = SchedulerState::new(date(2024, 1, 1));
    state.select_slot(utc(2024, 1, 1, 9, 0));
    let form = state.create_form_mut().unwrap();
    form.update(JobFormChange::Title("Audit".to_string()));
    form.update(JobFormChange::Index(Some(IndexId(1))));
    form.update(JobFormChange::End(utc(2024, 1, 1, 11, 0)));
    let submission = form.begin_submit().unwrap();
    assert_eq!(submission.body.assigned_to, None);

    // Server echoes the job back with its id
    let mut created = job(42, "Audit", submission.body.start_time, submission.body.end_time);
    created.index = submission.body.index;
    state.job_created(submission.key, created);

    let events = state.events(&Utc);
    assert_eq!(events_on(&events, date(2024, 1, 1)).len(), 1);
    assert!(state.select_event(JobId(42)));
    let Some(SchedulerDialog::Assign(form)) = &state.dialog else {
        panic!("assign dialog should be open");
    };
    assert_eq!(form.job.assignee_label(), "Unassigned");
    assert_eq!(form.selected, None);
}

#[test]
fn multi_day_segments_never_end_above_their_start() {
    let mut state = SchedulerState::new(date(2024, 1, 1));
    state.load_succeeded(SchedulerData {
        jobs: vec![
            job(1, "Overnight", utc(2024, 1, 1, 22, 0), utc(2024, 1, 3, 2, 0)),
            job(2, "Midnight", utc(2024, 1, 2, 23, 0), utc(2024, 1, 3, 0, 0)),
        ],
        ..SchedulerData::default()
    });
    let events = state.events(&Utc);

    for day in CalendarView::Week.visible_days(date(2024, 1, 1)) {
        for event in events_on(&events, day) {
            let segment = event.segment_on(day).unwrap();
            assert!(segment.height >= 0.0);
            assert!(segment.top + segment.height <= 1.0 + 1e-9);
        }
    }
    let midnight = &events[1];
    assert!(!midnight.occurs_on(date(2024, 1, 3)));
}
