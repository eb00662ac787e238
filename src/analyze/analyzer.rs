use crate::analyze::extractor::ChangelogExtractor;
use crate::analyze::{DeveloperStats, DevelopersAnalyzed, SprintAnalysis, SprintAnalyzed};
use crate::error::{Error, Result};
use crate::model::{Issue, Timestamp};
use indexmap::IndexSet;

pub trait Analyzer {
    fn analyze_sprint(&self) -> Result<SprintAnalyzed>;
}

impl Analyzer for SprintAnalysis {
    fn analyze_sprint(&self) -> Result<SprintAnalyzed> {
        let developers = categorize(
            &self.issues,
            &self.sprint.name,
            self.sprint.start.as_ref(),
            self.sprint.end.as_ref(),
            &self.real_sprint_names,
        )?;
        tracing::debug!(
            sprint = %self.sprint.name,
            issues = self.issues.len(),
            developers = developers.len(),
            "categorized sprint issues"
        );
        Ok(SprintAnalyzed::new(self.sprint.clone(), developers))
    }
}

/// Where one issue stands relative to the analyzed sprint.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct IssueCategories {
    pub original: bool,
    pub added_later: bool,
    pub carried_over: bool,
    pub closed_in_sprint: bool,
}

impl IssueCategories {
    pub fn of(
        issue: &Issue,
        sprint_name: &str,
        sprint_start: &Timestamp,
        sprint_end: &Timestamp,
        real_sprint_names: &IndexSet<String>,
    ) -> Self {
        let add_date = issue.sprint_add_date(sprint_name);
        let previous_sprints = issue.previous_real_sprints(sprint_name, real_sprint_names);
        let closed_date = issue.status_closed_date();

        Self {
            original: add_date <= *sprint_start,
            added_later: add_date > *sprint_start,
            carried_over: !previous_sprints.is_empty(),
            closed_in_sprint: closed_date.is_some_and(|closed| closed <= *sprint_end),
        }
    }

    pub fn closed_planned(&self) -> bool {
        self.original && self.closed_in_sprint
    }

    pub fn closed_unplanned(&self) -> bool {
        self.added_later && self.closed_in_sprint
    }
}

/// Splits the sprint's issues per assignee into the five categories.
///
/// Both sprint bounds are required; without them nothing is categorized.
pub fn categorize(
    issues: &[Issue],
    sprint_name: &str,
    sprint_start: Option<&Timestamp>,
    sprint_end: Option<&Timestamp>,
    real_sprint_names: &IndexSet<String>,
) -> Result<DevelopersAnalyzed> {
    let Some(sprint_start) = sprint_start else {
        return Err(missing_bound(sprint_name, "start"));
    };
    let Some(sprint_end) = sprint_end else {
        return Err(missing_bound(sprint_name, "end"));
    };

    let mut developers = DevelopersAnalyzed::new();
    for issue in issues {
        let stats = developers
            .entry(issue.assignee_key().to_string())
            .or_insert_with_key(|key| DeveloperStats::new(key));
        if stats.name.is_empty() {
            stats.name = issue.assignee_name().to_string();
        }

        let categories = IssueCategories::of(
            issue,
            sprint_name,
            sprint_start,
            sprint_end,
            real_sprint_names,
        );
        tracing::trace!(issue = %issue.key, ?categories, "categorized issue");

        if categories.original {
            stats.original.push(issue.clone());
        }
        if categories.added_later {
            stats.added_later.push(issue.clone());
        }
        if categories.carried_over {
            stats.carried_over.push(issue.clone());
        }
        if categories.closed_planned() {
            stats.closed_planned.push(issue.clone());
        }
        if categories.closed_unplanned() {
            stats.closed_unplanned.push(issue.clone());
        }
    }
    Ok(developers)
}

fn missing_bound(sprint_name: &str, bound: &'static str) -> Error {
    Error::MissingTemporalBound {
        sprint: sprint_name.to_string(),
        bound,
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
