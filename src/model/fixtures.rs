use crate::model::{Assignee, ChangelogEvent, Issue, Timestamp};
use chrono::DateTime;

/// `2024-01-02` is read as midnight UTC, anything longer as RFC 3339.
pub fn ts(value: &str) -> Timestamp {
    let value = if value.len() == 10 {
        format!("{value}T00:00:00+00:00")
    } else {
        value.to_string()
    };
    DateTime::parse_from_rfc3339(&value).unwrap()
}

pub fn sprint_move(at: &str, from: &str, to: &str) -> ChangelogEvent {
    ChangelogEvent::new(ts(at), "Sprint", Some(from), Some(to))
}

pub fn status_change(at: &str, from: &str, to: &str) -> ChangelogEvent {
    ChangelogEvent::new(ts(at), "status", Some(from), Some(to))
}

pub fn issue(key: &str, created: &str, points: Option<f64>, assignee: Option<(&str, &str)>) -> Issue {
    Issue::new(key, ts(created))
        .with_summary(format!("Summary of {key}"))
        .with_story_points(points)
        .with_status("Open")
        .with_assignee(assignee.map(|(key, name)| Assignee::new(key, name)))
}
