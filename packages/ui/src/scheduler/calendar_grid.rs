//! Month, week and day renderings of calendar events.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use dioxus::prelude::*;
use scheduler_core::JobId;
use scheduler_core::calendar::{CalendarEvent, CalendarView, events_on, month_grid};

use crate::time::local_to_utc;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Props for CalendarGrid component.
#[derive(Props, Clone, PartialEq)]
pub struct CalendarGridProps {
    pub events: Vec<CalendarEvent>,
    pub view: CalendarView,
    pub anchor: NaiveDate,
    pub today: NaiveDate,
    /// Called with the job behind a clicked event.
    pub on_select_event: EventHandler<JobId>,
    /// Called with the start of a clicked empty slot.
    pub on_select_slot: EventHandler<DateTime<Utc>>,
}

#[component]
pub fn CalendarGrid(props: CalendarGridProps) -> Element {
    match props.view {
        CalendarView::Month => month_view(&props),
        CalendarView::Week | CalendarView::Day => time_view(&props),
    }
}

fn slot_start(day: NaiveDate, hour: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
    local_to_utc(day.and_time(time))
}

fn month_view(props: &CalendarGridProps) -> Element {
    let weeks = month_grid(props.anchor);
    let month = props.anchor.month();
    let on_select_event = props.on_select_event;
    let on_select_slot = props.on_select_slot;

    rsx! {
        table { class: "calendar-month",
            thead {
                tr {
                    for label in WEEKDAY_LABELS {
                        th { "{label}" }
                    }
                }
            }
            tbody {
                for week in weeks {
                    tr {
                        for day in week {
                            {
                                let mut class = String::from("month-cell");
                                if day.month() != month {
                                    class.push_str(" off-range");
                                }
                                if day == props.today {
                                    class.push_str(" today");
                                }
                                let day_events: Vec<CalendarEvent> =
                                    events_on(&props.events, day).into_iter().cloned().collect();

                                rsx! {
                                    td {
                                        class: "{class}",
                                        onclick: move |_| on_select_slot.call(slot_start(day, 0)),
                                        div { class: "month-cell-date", "{day.day()}" }
                                        for event in day_events {
                                            EventChip { event, on_select: on_select_event }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Hour rows with events placed by their share of the day.
fn time_view(props: &CalendarGridProps) -> Element {
    let days = props.view.visible_days(props.anchor);
    let on_select_event = props.on_select_event;
    let on_select_slot = props.on_select_slot;

    rsx! {
        div { class: "calendar-time-grid",
            div { class: "time-gutter",
                div { class: "time-gutter-header" }
                for hour in 0..24u32 {
                    div { class: "time-gutter-label", "{hour:02}:00" }
                }
            }
            for day in days {
                {
                    let day_events: Vec<CalendarEvent> =
                        events_on(&props.events, day).into_iter().cloned().collect();
                    let header_class = if day == props.today { "day-column-header today" } else { "day-column-header" };

                    rsx! {
                        div { class: "day-column",
                            div { class: "{header_class}", {day.format("%a %-m/%-d").to_string()} }
                            div { class: "day-column-body",
                                for hour in 0..24u32 {
                                    div {
                                        class: "hour-slot",
                                        onclick: move |_| on_select_slot.call(slot_start(day, hour)),
                                    }
                                }
                                for event in day_events {
                                    {
                                        match event.segment_on(day) {
                                            Some(segment) => {
                                                let id = event.job_id;
                                                let style = format!(
                                                    "top: {:.4}%; height: max({:.4}%, 1.2em); background-color: {};",
                                                    segment.top * 100.0,
                                                    segment.height * 100.0,
                                                    event.color
                                                );
                                                rsx! {
                                                    div {
                                                        class: "calendar-event timed",
                                                        style: "{style}",
                                                        title: "{event.index_name} - {event.assignee}",
                                                        onclick: move |e: MouseEvent| {
                                                            e.stop_propagation();
                                                            on_select_event.call(id);
                                                        },
                                                        div { class: "event-time", {event.time_label()} }
                                                        div { class: "event-title", "{event.title}" }
                                                    }
                                                }
                                            }
                                            None => rsx! {},
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One event inside a month cell.
#[component]
fn EventChip(event: CalendarEvent, on_select: EventHandler<JobId>) -> Element {
    let id = event.job_id;
    rsx! {
        div {
            class: "calendar-event",
            style: "background-color: {event.color};",
            title: "{event.index_name} - {event.assignee}",
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                on_select.call(id);
            },
            "{event.title}"
        }
    }
}
