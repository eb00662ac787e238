pub mod analyzer;
pub mod extractor;
mod model;

use crate::model::{Issue, Sprint};
use indexmap::IndexSet;

pub use model::{
    sum_story_points, CategoryTotals, DeveloperStats, DevelopersAnalyzed, SprintAnalyzed,
};

/// Everything fetched for one sprint, ready to be categorized.
#[derive(Debug, Clone)]
pub struct SprintAnalysis {
    pub sprint: Sprint,
    pub issues: Vec<Issue>,
    pub real_sprint_names: IndexSet<String>,
}

impl SprintAnalysis {
    pub fn new(sprint: Sprint, issues: Vec<Issue>, real_sprint_names: IndexSet<String>) -> Self {
        Self {
            sprint,
            issues,
            real_sprint_names,
        }
    }
}
