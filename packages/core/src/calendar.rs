//! Calendar projection and layout for scheduled jobs.
//!
//! Jobs are projected into [`CalendarEvent`]s in the viewer's time zone.
//! The month grid and the per-day placement used by week and day views are
//! computed here so the rendering layer only maps numbers to styles.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::{Job, JobId};

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Calendar granularity. Pure client state, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    pub const ALL: [CalendarView; 3] = [CalendarView::Month, CalendarView::Week, CalendarView::Day];

    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Month => "Month",
            CalendarView::Week => "Week",
            CalendarView::Day => "Day",
        }
    }

    /// Move the anchor date one page forward or back.
    pub fn step(&self, anchor: NaiveDate, forward: bool) -> NaiveDate {
        match self {
            CalendarView::Month => {
                let months = Months::new(1);
                let moved = if forward {
                    anchor.checked_add_months(months)
                } else {
                    anchor.checked_sub_months(months)
                };
                moved.unwrap_or(anchor)
            }
            CalendarView::Week => anchor + Duration::days(if forward { 7 } else { -7 }),
            CalendarView::Day => anchor + Duration::days(if forward { 1 } else { -1 }),
        }
    }

    /// Days shown as columns (week/day) or cells (month) for this anchor.
    pub fn visible_days(&self, anchor: NaiveDate) -> Vec<NaiveDate> {
        match self {
            CalendarView::Month => month_grid(anchor).into_iter().flatten().collect(),
            CalendarView::Week => week_of(anchor).to_vec(),
            CalendarView::Day => vec![anchor],
        }
    }

    /// Heading for the toolbar, e.g. "January 2024".
    pub fn title(&self, anchor: NaiveDate) -> String {
        match self {
            CalendarView::Month => anchor.format("%B %Y").to_string(),
            CalendarView::Week => {
                let days = week_of(anchor);
                format!("{} - {}", days[0].format("%b %-d"), days[6].format("%b %-d, %Y"))
            }
            CalendarView::Day => anchor.format("%A %b %-d, %Y").to_string(),
        }
    }
}

/// Toolbar navigation for the calendar anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarNav {
    Back,
    Next,
    Today(NaiveDate),
}

/// A job as drawn on the calendar, in local wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub job_id: JobId,
    pub title: String,
    pub start: NaiveDateTime,
    /// Never earlier than `start`.
    pub end: NaiveDateTime,
    pub color: String,
    pub index_name: String,
    pub assignee: String,
}

/// Vertical placement of an event within one day column, as fractions of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySegment {
    pub top: f64,
    pub height: f64,
    pub continues_before: bool,
    pub continues_after: bool,
}

impl CalendarEvent {
    pub fn from_job<Tz: TimeZone>(job: &Job, tz: &Tz) -> Self {
        let start = job.start_time.with_timezone(tz).naive_local();
        let end = job.end_time.with_timezone(tz).naive_local().max(start);
        Self {
            job_id: job.id,
            title: job.title.clone(),
            start,
            end,
            color: job.display_color().to_string(),
            index_name: job.index_name.clone(),
            assignee: job.assignee_label().to_string(),
        }
    }

    /// Last calendar day the event covers. An event ending exactly at
    /// midnight does not spill into the next day.
    pub fn last_day(&self) -> NaiveDate {
        if self.end > self.start && self.end.time() == NaiveTime::MIN {
            self.end.date() - Duration::days(1)
        } else {
            self.end.date()
        }
    }

    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        self.start.date() <= day && day <= self.last_day()
    }

    /// Placement within `day`'s column, or `None` if the event is not on that day.
    pub fn segment_on(&self, day: NaiveDate) -> Option<DaySegment> {
        if !self.occurs_on(day) {
            return None;
        }
        let day_start = day.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);
        let from = self.start.max(day_start);
        let to = self.end.min(day_end).max(from);

        Some(DaySegment {
            top: (from - day_start).num_minutes() as f64 / MINUTES_PER_DAY,
            height: (to - from).num_minutes() as f64 / MINUTES_PER_DAY,
            continues_before: self.start < day_start,
            continues_after: self.end > day_end,
        })
    }

    /// "09:00 - 11:00" style label for the event body.
    pub fn time_label(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// Project every job into a calendar event.
pub fn project_events<Tz: TimeZone>(jobs: &[Job], tz: &Tz) -> Vec<CalendarEvent> {
    jobs.iter().map(|job| CalendarEvent::from_job(job, tz)).collect()
}

/// Events covering `day`, earliest first.
pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<&CalendarEvent> {
    let mut found: Vec<&CalendarEvent> = events.iter().filter(|e| e.occurs_on(day)).collect();
    found.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.title.cmp(&b.title)));
    found
}

/// The Sunday-first week containing `anchor`.
pub fn week_of(anchor: NaiveDate) -> [NaiveDate; 7] {
    let sunday = anchor - Duration::days(i64::from(anchor.weekday().num_days_from_sunday()));
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// Whole weeks covering the month that contains `anchor`.
pub fn month_grid(anchor: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let first = anchor - Duration::days(i64::from(anchor.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .map(|next| next - Duration::days(1))
        .unwrap_or(first);

    let mut weeks = Vec::with_capacity(6);
    let mut week_start = week_of(first)[0];
    while week_start <= last {
        weeks.push(week_of(week_start));
        week_start += Duration::days(7);
    }
    weeks
}
