use super::*;
use crate::model::fixtures::ts;
use yare::parameterized;

fn closed(id: u64, name: &str, start: Option<&str>, end: Option<&str>) -> Sprint {
    Sprint::new(id, name, SprintState::Closed).with_period(start.map(ts), end.map(ts))
}

#[parameterized(
    active = { "active", SprintState::Active },
    closed = { "closed", SprintState::Closed },
    future = { "future", SprintState::Future },
)]
fn sprint_state_from_str_valid(input: &str, expected: SprintState) {
    assert_eq!(input.parse::<SprintState>().unwrap(), expected);
    assert_eq!(expected.as_str(), input);
}

#[parameterized(
    upper = { "CLOSED" },
    empty = { "" },
    unknown = { "archived" },
)]
fn sprint_state_from_str_invalid(input: &str) {
    assert!(matches!(
        input.parse::<SprintState>(),
        Err(Error::InvalidSprintState(_))
    ));
}

#[test]
fn closed_sprint_with_elapsed_dates_is_real() {
    let sprint = closed(1, "Sprint 1", Some("2024-01-01"), Some("2024-01-14"));
    assert!(sprint.is_real(&ts("2024-02-01")));
}

#[test]
fn sprint_ending_exactly_now_is_real() {
    let sprint = closed(1, "Sprint 1", Some("2024-01-01"), Some("2024-01-14"));
    assert!(sprint.is_real(&ts("2024-01-14")));
}

#[test]
fn sprint_ending_after_now_is_not_real() {
    let sprint = closed(1, "Sprint 1", Some("2024-01-01"), Some("2024-01-14"));
    assert!(!sprint.is_real(&ts("2024-01-10")));
}

#[parameterized(
    no_start = { None, Some("2024-01-14") },
    no_end = { Some("2024-01-01"), None },
    no_dates = { None, None },
)]
fn sprint_without_dates_is_not_real(start: Option<&str>, end: Option<&str>) {
    let sprint = closed(1, "Backlog", start, end);
    assert!(!sprint.is_real(&ts("2024-02-01")));
}

#[parameterized(
    active = { SprintState::Active },
    future = { SprintState::Future },
)]
fn open_sprint_is_not_real(state: SprintState) {
    let sprint = Sprint::new(1, "Sprint 1", state)
        .with_period(Some(ts("2024-01-01")), Some(ts("2024-01-14")));
    assert!(!sprint.is_real(&ts("2024-02-01")));
}

#[test]
fn real_sprint_names_keeps_only_real_sprints() {
    let sprints = vec![
        closed(1, "Sprint 1", Some("2024-01-01"), Some("2024-01-14")),
        closed(2, "Backlog", None, None),
        closed(3, "Sprint 2", Some("2024-01-15"), Some("2024-01-28")),
        Sprint::new(4, "Sprint 3", SprintState::Active)
            .with_period(Some(ts("2024-01-29")), Some(ts("2024-02-11"))),
    ];

    let names = real_sprint_names(&sprints, &ts("2024-02-01"));

    assert_eq!(
        names.into_iter().collect::<Vec<_>>(),
        vec!["Sprint 1".to_string(), "Sprint 2".to_string()]
    );
}

#[test]
fn previous_sprint_picks_latest_closed_before_active() {
    let sprints = vec![
        closed(10, "Sprint 1", Some("2024-01-01"), Some("2024-01-14")),
        closed(12, "Sprint 2", Some("2024-01-15"), Some("2024-01-28")),
        Sprint::new(13, "Sprint 3", SprintState::Active),
        closed(14, "Closed later", None, None),
        Sprint::new(15, "Sprint 4", SprintState::Future),
    ];

    let (target, active) = previous_sprint(&sprints).unwrap();

    assert_eq!(target.id, 12);
    assert_eq!(active.id, 13);
}

#[test]
fn previous_sprint_requires_active_sprint() {
    let sprints = vec![closed(1, "Sprint 1", None, None)];
    assert!(matches!(
        previous_sprint(&sprints),
        Err(Error::NoActiveSprint)
    ));
}

#[test]
fn previous_sprint_requires_closed_sprint_before_active() {
    let sprints = vec![
        Sprint::new(1, "Sprint 1", SprintState::Active),
        closed(2, "Sprint 2", None, None),
    ];
    match previous_sprint(&sprints) {
        Err(Error::NoPreviousSprint { active }) => assert_eq!(active, "Sprint 1"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn period_formats_missing_dates_as_na() {
    let sprint = closed(1, "Sprint 1", Some("2024-01-01"), None);
    assert_eq!(sprint.period(), "2024-01-01 - N/A");
}
