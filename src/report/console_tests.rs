use super::*;
use crate::jira::dto::BoardDto;
use crate::model::fixtures::ts;

fn board() -> Vec<Sprint> {
    let mut sprints = (1..=25)
        .map(|id| {
            Sprint::new(id, format!("Sprint {id}"), SprintState::Closed)
                .with_period(Some(ts("2024-01-01")), Some(ts("2024-01-14")))
        })
        .collect::<Vec<_>>();
    sprints.push(
        Sprint::new(26, "Sprint 26", SprintState::Active)
            .with_period(Some(ts("2024-02-01")), Some(ts("2024-02-14"))),
    );
    sprints.push(Sprint::new(27, "Sprint 27", SprintState::Future));
    sprints
}

#[test]
fn listing_groups_by_state_newest_closed_first() {
    let sprints = board();
    let listing = SprintListing::new(&sprints);

    assert_eq!(listing.len(), 27);
    assert_eq!(listing.active.len(), 1);
    assert_eq!(listing.future.len(), 1);
    assert_eq!(listing.closed.first().unwrap().id, 25);
    assert_eq!(listing.closed.last().unwrap().id, 1);
}

#[test]
fn listing_shows_only_recent_closed_sprints() {
    let sprints = board();
    let rendered = SprintListing::new(&sprints).render();

    assert!(rendered.contains("Active: 1, Closed: 25, Future: 1"));
    assert!(rendered.contains("Sprint 25"));
    assert!(rendered.contains("Sprint 6 "));
    assert!(!rendered.contains("Sprint 5 "));
    assert!(rendered.contains("2024-02-01 - 2024-02-14"));
}

#[test]
fn listing_without_active_or_future_omits_sections() {
    let sprints = vec![Sprint::new(1, "Sprint 1", SprintState::Closed)];
    let rendered = SprintListing::new(&sprints).render();

    assert!(!rendered.contains("ACTIVE SPRINTS"));
    assert!(!rendered.contains("FUTURE SPRINTS"));
    assert!(rendered.contains("N/A - N/A"));
}

#[test]
fn connection_renders_missing_values_as_na() {
    let server = ServerInfo {
        version: Some("9.12.2".to_string()),
        build_number: Some(912002),
        deployment_type: None,
        base_url: Some("https://jira.example.com".to_string()),
    };
    let user = CurrentUser {
        name: Some("anna".to_string()),
        display_name: Some("Anna".to_string()),
        email_address: None,
        time_zone: None,
        active: Some(true),
    };

    let rendered = render_connection(&server, &user);

    assert!(rendered.contains("Version: 9.12.2"));
    assert!(rendered.contains("Build: 912002"));
    assert!(rendered.contains("Deployment: N/A"));
    assert!(rendered.contains("Email: N/A"));
    assert!(rendered.contains("Active: true"));
}

#[test]
fn team_totals_use_one_decimal() {
    let totals = CategoryTotals {
        original: 8.0,
        added_later: 11.5,
        carried_over: 0.0,
        closed_planned: 3.26,
        closed_unplanned: 3.0,
    };

    let rendered = render_team_totals(&totals);

    assert!(rendered.contains("original 8.0 SP"));
    assert!(rendered.contains("added later 11.5 SP"));
    assert!(rendered.contains("closed planned 3.3 SP"));
}

#[test]
fn empty_board_lists_nothing() {
    let listing = SprintListing::new(&[]);

    assert!(listing.is_empty());
    assert!(!SprintListing::new(&board()).is_empty());
    assert!(listing.render().contains("Sprints on the board: 0"));
}

fn field(id: &str, name: &str, custom: bool) -> FieldDto {
    FieldDto {
        id: id.to_string(),
        name: name.to_string(),
        custom,
    }
}

#[test]
fn fields_count_standard_and_custom() {
    let mut fields = vec![field("summary", "Summary", false), field("status", "Status", false)];
    fields.extend((1..=7).map(|n| field(&format!("customfield_1008{n}"), &format!("Custom {n}"), true)));

    let rendered = render_fields(&fields);

    assert!(rendered.contains("Standard: 2"));
    assert!(rendered.contains("Custom: 7"));
    assert!(rendered.contains("    - customfield_10081: Custom 1"));
    assert!(rendered.contains("customfield_10085: Custom 5"));
    assert!(!rendered.contains("customfield_10086"));
    assert!(!rendered.contains("summary"));
}

#[test]
fn boards_show_first_board_sprints() {
    let boards = BoardPage {
        total: None,
        values: vec![
            BoardDto {
                id: 7,
                name: "DM board".to_string(),
                kind: Some("scrum".to_string()),
            },
            BoardDto {
                id: 8,
                name: "Ops".to_string(),
                kind: None,
            },
        ],
    };

    let rendered = render_boards(&boards, &board());

    assert!(rendered.contains("Total: 2"));
    assert!(rendered.contains("    - DM board (scrum) id 7"));
    assert!(rendered.contains("    - Ops (N/A) id 8"));
    assert!(rendered.contains("Sprints of 'DM board': 27"));
    assert!(rendered.contains("    - Sprint 1 [closed]"));
    assert!(rendered.contains("    - Sprint 5 [closed]"));
    assert!(!rendered.contains("Sprint 6 "));
}

#[test]
fn no_boards_skip_sprint_sample() {
    let boards = BoardPage {
        total: Some(0),
        values: vec![],
    };

    let rendered = render_boards(&boards, &[]);

    assert!(rendered.contains("Total: 0"));
    assert!(!rendered.contains("Sprints of"));
}
