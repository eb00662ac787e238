use crate::analyze::CategoryTotals;
use crate::jira::{BoardPage, CurrentUser, FieldDto, ServerInfo};
use crate::model::{format_date, Sprint, SprintState};
use itertools::Itertools;

const CLOSED_LIMIT: usize = 20;
const FUTURE_LIMIT: usize = 10;
const RULE_WIDTH: usize = 70;
const SAMPLE_LIMIT: usize = 5;

/// Board sprints grouped the way the listing prints them.
#[derive(Debug, Default)]
pub struct SprintListing<'a> {
    pub active: Vec<&'a Sprint>,
    /// Newest first.
    pub closed: Vec<&'a Sprint>,
    pub future: Vec<&'a Sprint>,
}

impl<'a> SprintListing<'a> {
    pub fn new(sprints: &'a [Sprint]) -> Self {
        let by_state = |state: SprintState| {
            sprints
                .iter()
                .filter(move |s| s.state == state)
                .collect::<Vec<_>>()
        };
        Self {
            active: by_state(SprintState::Active),
            closed: by_state(SprintState::Closed)
                .into_iter()
                .sorted_by(|a, b| b.id.cmp(&a.id))
                .collect(),
            future: by_state(SprintState::Future),
        }
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.closed.len() + self.future.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("Sprints on the board: {}", self.len()),
            format!(
                "  Active: {}, Closed: {}, Future: {}",
                self.active.len(),
                self.closed.len(),
                self.future.len()
            ),
        ];
        if !self.active.is_empty() {
            lines.extend(section("ACTIVE SPRINTS", &self.active, true));
        }
        lines.extend(section(
            &format!("CLOSED SPRINTS (last {CLOSED_LIMIT})"),
            &self.closed[..self.closed.len().min(CLOSED_LIMIT)],
            true,
        ));
        if !self.future.is_empty() {
            lines.extend(section(
                "FUTURE SPRINTS",
                &self.future[..self.future.len().min(FUTURE_LIMIT)],
                false,
            ));
        }
        lines.join("\n")
    }
}

fn section(title: &str, sprints: &[&Sprint], with_period: bool) -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![String::new(), rule.clone(), title.to_string(), rule];
    if with_period {
        lines.push(format!("{:<8} {:<40} Period", "ID", "Name"));
    } else {
        lines.push(format!("{:<8} {:<40}", "ID", "Name"));
    }
    lines.push("-".repeat(RULE_WIDTH));
    for sprint in sprints {
        if with_period {
            lines.push(format!(
                "{:<8} {:<40} {} - {}",
                sprint.id,
                sprint.name,
                format_date(sprint.start.as_ref()),
                format_date(sprint.end.as_ref())
            ));
        } else {
            lines.push(format!("{:<8} {:<40}", sprint.id, sprint.name));
        }
    }
    lines
}

pub fn render_connection(server: &ServerInfo, user: &CurrentUser) -> String {
    fn or_na(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or("N/A")
    }

    [
        "Server".to_string(),
        format!("  Version: {}", or_na(&server.version)),
        format!(
            "  Build: {}",
            server
                .build_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        ),
        format!("  Deployment: {}", or_na(&server.deployment_type)),
        format!("  Base URL: {}", or_na(&server.base_url)),
        "Current user".to_string(),
        format!("  Name: {}", or_na(&user.display_name)),
        format!("  Email: {}", or_na(&user.email_address)),
        format!("  Username: {}", or_na(&user.name)),
        format!(
            "  Active: {}",
            user.active
                .map(|a| a.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        ),
        format!("  Timezone: {}", or_na(&user.time_zone)),
    ]
    .join("\n")
}

pub fn render_fields(fields: &[FieldDto]) -> String {
    let (custom, standard): (Vec<_>, Vec<_>) = fields.iter().partition(|field| field.custom);
    let mut lines = vec![
        "Fields".to_string(),
        format!("  Standard: {}", standard.len()),
        format!("  Custom: {}", custom.len()),
    ];
    lines.extend(
        custom
            .iter()
            .take(SAMPLE_LIMIT)
            .map(|field| format!("    - {}: {}", field.id, field.name)),
    );
    lines.join("\n")
}

/// Visible boards, and a sample of the first board's sprints when it has any.
pub fn render_boards(boards: &BoardPage, first_board_sprints: &[Sprint]) -> String {
    let mut lines = vec![
        "Agile boards".to_string(),
        format!("  Total: {}", boards.total()),
    ];
    lines.extend(boards.values.iter().take(SAMPLE_LIMIT).map(|board| {
        format!(
            "    - {} ({}) id {}",
            board.name,
            board.kind.as_deref().unwrap_or("N/A"),
            board.id
        )
    }));
    if let Some(first) = boards.values.first() {
        lines.push(format!(
            "Sprints of '{}': {}",
            first.name,
            first_board_sprints.len()
        ));
        lines.extend(
            first_board_sprints
                .iter()
                .take(SAMPLE_LIMIT)
                .map(|sprint| format!("    - {} [{}]", sprint.name, sprint.state.as_str())),
        );
    }
    lines.join("\n")
}

pub fn render_team_totals(totals: &CategoryTotals) -> String {
    format!(
        "original {:.1} SP, added later {:.1} SP, carried over {:.1} SP, closed planned {:.1} SP, closed unplanned {:.1} SP",
        totals.original,
        totals.added_later,
        totals.carried_over,
        totals.closed_planned,
        totals.closed_unplanned
    )
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
