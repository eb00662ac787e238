use crate::model::{Issue, Sprint, UNASSIGNED_KEY, UNASSIGNED_NAME};
use indexmap::IndexMap;
use std::ops::Add;

pub type DevelopersAnalyzed = IndexMap<String, DeveloperStats>;

/// Issues of one assignee, split into overlapping categories.
///
/// `original` and `added_later` never share an issue; `carried_over` may
/// repeat issues from either. The closed buckets are subsets of the planned
/// and unplanned ones respectively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeveloperStats {
    pub key: String,
    pub name: String,
    pub original: Vec<Issue>,
    pub added_later: Vec<Issue>,
    pub carried_over: Vec<Issue>,
    pub closed_planned: Vec<Issue>,
    pub closed_unplanned: Vec<Issue>,
}

impl DeveloperStats {
    pub fn new(key: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    /// The sentinel bucket, or a key no issue gave a human name to.
    pub fn is_unassigned(&self) -> bool {
        self.key == UNASSIGNED_KEY || self.name.is_empty()
    }

    /// Name shown in reports, falls back to the unassigned label.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNASSIGNED_NAME
        } else {
            &self.name
        }
    }

    pub fn totals(&self) -> CategoryTotals {
        CategoryTotals {
            original: sum_story_points(&self.original),
            added_later: sum_story_points(&self.added_later),
            carried_over: sum_story_points(&self.carried_over),
            closed_planned: sum_story_points(&self.closed_planned),
            closed_unplanned: sum_story_points(&self.closed_unplanned),
        }
    }
}

/// Story points per category. Categories overlap, so the fields are not
/// meant to be added together.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryTotals {
    pub original: f64,
    pub added_later: f64,
    pub carried_over: f64,
    pub closed_planned: f64,
    pub closed_unplanned: f64,
}

impl Add for CategoryTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            original: self.original + rhs.original,
            added_later: self.added_later + rhs.added_later,
            carried_over: self.carried_over + rhs.carried_over,
            closed_planned: self.closed_planned + rhs.closed_planned,
            closed_unplanned: self.closed_unplanned + rhs.closed_unplanned,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SprintAnalyzed {
    pub sprint: Sprint,
    pub developers: DevelopersAnalyzed,
}

impl SprintAnalyzed {
    pub fn new(sprint: Sprint, developers: DevelopersAnalyzed) -> Self {
        Self { sprint, developers }
    }

    /// Sum of every developer's totals, the unassigned bucket included.
    pub fn team_totals(&self) -> CategoryTotals {
        self.developers
            .values()
            .map(DeveloperStats::totals)
            .fold(CategoryTotals::default(), |acc, totals| acc + totals)
    }

    /// Buckets reported as unassigned, in first-seen order.
    pub fn unassigned(&self) -> impl Iterator<Item = &DeveloperStats> {
        self.developers
            .values()
            .filter(|stats| stats.is_unassigned())
    }
}

pub fn sum_story_points<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> f64 {
    issues.into_iter().map(Issue::points).sum()
}
