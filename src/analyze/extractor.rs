use crate::model::{Issue, Timestamp};
use indexmap::IndexSet;

const CLOSED_STATUS: &str = "closed";

/// Point-in-time questions answered from an issue's changelog.
///
/// Changelog events come in no particular order, so every answer is a min or
/// max reduction over the matching events rather than a replay.
///
/// Sprint names are matched by substring against the `to` side, the way Jira
/// joins several sprint names into one value. A sprint whose name is contained
/// in another sprint's name ("Sprint 1" in "Sprint 12") therefore matches both.
pub trait ChangelogExtractor {
    /// First time the issue entered `sprint_name`, or its creation time when
    /// no changelog entry mentions the sprint.
    fn sprint_add_date(&self, sprint_name: &str) -> Timestamp;

    /// Last transition into the closed status.
    fn status_closed_date(&self) -> Option<Timestamp>;

    /// Real sprints the issue was moved out of on its way into `target_sprint_name`.
    fn previous_real_sprints(
        &self,
        target_sprint_name: &str,
        real_sprint_names: &IndexSet<String>,
    ) -> IndexSet<String>;
}

impl ChangelogExtractor for Issue {
    fn sprint_add_date(&self, sprint_name: &str) -> Timestamp {
        self.changelog
            .iter()
            .filter(|event| event.is_sprint() && event.to.contains(sprint_name))
            .map(|event| event.at)
            .min()
            .unwrap_or(self.created)
    }

    fn status_closed_date(&self) -> Option<Timestamp> {
        self.changelog
            .iter()
            .filter(|event| event.is_status() && event.to.eq_ignore_ascii_case(CLOSED_STATUS))
            .map(|event| event.at)
            .max()
    }

    fn previous_real_sprints(
        &self,
        target_sprint_name: &str,
        real_sprint_names: &IndexSet<String>,
    ) -> IndexSet<String> {
        self.changelog
            .iter()
            .filter(|event| event.is_sprint() && event.to.contains(target_sprint_name))
            .flat_map(|event| event.from_sprints())
            .filter(|name| *name != target_sprint_name && real_sprint_names.contains(*name))
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
