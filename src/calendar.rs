//! Calendar export of a generated plan.
//!
//! Each schedule item becomes one UTC event starting at `<date> <time>`
//! (`%Y-%m-%d`, `%H:%M`) and lasting `duration` hours, titled `Study: <subject>`.

use std::path::Path;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::models::{ScheduleItem, StudyPlan};
use crate::AppResult;

const PRODID: &str = "-//study-planner-client//EN";
const ICS_TIMESTAMP: &str = "%Y%m%dT%H%M%SZ";
const MAX_LINE_OCTETS: usize = 75;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyEvent {
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct CalendarExport {
    pub events: Vec<StudyEvent>,
    /// Items whose date, time or duration could not be interpreted
    pub skipped: usize,
}

pub fn plan_to_events(plan: &StudyPlan) -> CalendarExport {
    let mut export = CalendarExport::default();

    for day in &plan.days {
        let date = match NaiveDate::parse_from_str(&day.date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!(date = %day.date, error = %e, "Skipping day with unparseable date");
                export.skipped += day.schedule.len();
                continue;
            }
        };

        for item in &day.schedule {
            match item_to_event(date, item) {
                Some(event) => export.events.push(event),
                None => {
                    tracing::warn!(
                        date = %day.date,
                        time = %item.time,
                        duration = %item.duration,
                        "Skipping schedule item that cannot be placed on a calendar"
                    );
                    export.skipped += 1;
                }
            }
        }
    }

    export
}

fn item_to_event(date: NaiveDate, item: &ScheduleItem) -> Option<StudyEvent> {
    let time = NaiveTime::parse_from_str(item.time.trim(), "%H:%M").ok()?;
    let hours = item.duration.as_f64().filter(|h| h.is_finite() && *h >= 0.0)?;

    let millis = (hours * 3_600_000.0).round();
    // i64::MAX as f64 rounds up to 2^63, so equality is already out of range
    if millis >= i64::MAX as f64 {
        return None;
    }

    let start = date.and_time(time).and_utc();
    let end = start.checked_add_signed(Duration::try_milliseconds(millis as i64)?)?;

    Some(StudyEvent {
        summary: format!("Study: {}", item.subject),
        start,
        end,
    })
}

/// Render events as an iCalendar (RFC 5545) document with CRLF line endings.
/// UIDs carry a fresh export id so separate exports never replace each other's events.
pub fn to_ics(events: &[StudyEvent], stamp: DateTime<Utc>) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
    ];

    let export_id = Uuid::new_v4();
    for (index, event) in events.iter().enumerate() {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!(
            "UID:{}-{}-{}@study-planner",
            export_id,
            event.start.format(ICS_TIMESTAMP),
            index
        ));
        lines.push(format!("DTSTAMP:{}", stamp.format(ICS_TIMESTAMP)));
        lines.push(format!("DTSTART:{}", event.start.format(ICS_TIMESTAMP)));
        lines.push(format!("DTEND:{}", event.end.format(ICS_TIMESTAMP)));
        lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());

    let mut out = String::new();
    for line in &lines {
        out.push_str(&fold_line(line));
        out.push_str("\r\n");
    }
    out
}

pub async fn write_ics(path: &Path, events: &[StudyEvent]) -> AppResult<()> {
    tokio::fs::write(path, to_ics(events, Utc::now())).await?;
    tracing::info!(path = %path.display(), events = events.len(), "Calendar export written");
    Ok(())
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

// continuation lines start with a single space, which counts toward their length
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(ch);
        width += len;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn plan(value: serde_json::Value) -> StudyPlan {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_events_span_item_duration() {
        let export = plan_to_events(&plan(json!([
            {"date": "2024-05-01", "schedule": [
                {"time": "09:00", "subject": "Math", "duration": 2},
                {"time": "11:00", "subject": "Physics", "duration": "1.5"}
            ]}
        ])));

        assert_eq!(export.skipped, 0);
        assert_eq!(
            export.events,
            vec![
                StudyEvent {
                    summary: "Study: Math".to_string(),
                    start: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
                    end: Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap(),
                },
                StudyEvent {
                    summary: "Study: Physics".to_string(),
                    start: Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap(),
                    end: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
                },
            ]
        );
    }

    #[test]
    fn test_unplaceable_items_are_skipped() {
        let export = plan_to_events(&plan(json!([
            {"date": "May 1st", "schedule": [
                {"time": "09:00", "subject": "Math", "duration": 2}
            ]},
            {"date": "2024-05-02", "schedule": [
                {"time": "morning", "subject": "Math", "duration": 2},
                {"time": "09:00", "subject": "Physics", "duration": "soon"},
                {"time": "10:00", "subject": "Biology", "duration": 1}
            ]}
        ])));

        assert_eq!(export.skipped, 3);
        assert_eq!(export.events.len(), 1);
        assert_eq!(export.events[0].summary, "Study: Biology");
    }

    #[test]
    fn test_negative_duration_is_skipped() {
        let export = plan_to_events(&plan(json!([
            {"date": "2024-05-01", "schedule": [
                {"time": "09:00", "subject": "Math", "duration": -1},
                {"time": "10:00", "subject": "Physics", "duration": "-0.5"}
            ]}
        ])));

        assert_eq!(export.skipped, 2);
        assert!(export.events.is_empty());
    }

    #[test]
    fn test_out_of_range_duration_is_skipped() {
        let export = plan_to_events(&plan(json!([
            {"date": "2024-05-01", "schedule": [
                {"time": "09:00", "subject": "Math", "duration": 1e12},
                {"time": "09:00", "subject": "Math", "duration": 1e300},
                {"time": "09:00", "subject": "Math", "duration": "1e16"},
                {"time": "11:00", "subject": "Physics", "duration": 1}
            ]}
        ])));

        assert_eq!(export.skipped, 3);
        assert_eq!(export.events.len(), 1);
        assert_eq!(export.events[0].summary, "Study: Physics");
    }

    #[test]
    fn test_uids_differ_between_exports() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let events = vec![StudyEvent {
            summary: "Study: Math".to_string(),
            start,
            end: start + Duration::hours(1),
        }];

        let uid = |ics: &str| {
            ics.split("\r\n")
                .find(|line| line.starts_with("UID:"))
                .map(str::to_string)
                .unwrap()
        };
        let first = uid(&to_ics(&events, start));
        let second = uid(&to_ics(&events, start));

        assert_ne!(first, second);
        assert!(first.ends_with("-20240501T090000Z-0@study-planner"));
    }

    #[test]
    fn test_ics_document() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let events = vec![StudyEvent {
            summary: "Study: Math, Physics; Review".to_string(),
            start,
            end: start + Duration::hours(2),
        }];
        let stamp = Utc.with_ymd_and_hms(2024, 4, 30, 12, 0, 0).unwrap();

        let ics = to_ics(&events, stamp);

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("DTSTART:20240501T090000Z\r\n"));
        assert!(ics.contains("DTEND:20240501T110000Z\r\n"));
        assert!(ics.contains("DTSTAMP:20240430T120000Z\r\n"));
        assert!(ics.contains("SUMMARY:Study: Math\\, Physics\\; Review\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test]
    fn test_long_lines_are_folded() {
        let folded = fold_line(&format!("SUMMARY:{}", "x".repeat(100)));

        for line in folded.split("\r\n") {
            assert!(line.len() <= MAX_LINE_OCTETS);
        }
        assert_eq!(folded.replace("\r\n ", ""), format!("SUMMARY:{}", "x".repeat(100)));
    }
}
