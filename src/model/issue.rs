use crate::model::{ChangelogEvent, Timestamp};

pub const UNASSIGNED_KEY: &str = "unassigned";
pub const UNASSIGNED_NAME: &str = "Unassigned";

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Assignee {
    pub key: String,
    pub display_name: String,
}

impl Assignee {
    pub fn new(key: impl ToString, display_name: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// A work item of a sprint together with its full field history.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub story_points: Option<f64>,
    pub status: String,
    pub assignee: Option<Assignee>,
    pub created: Timestamp,
    pub changelog: Vec<ChangelogEvent>,
}

// Create
impl Issue {
    pub fn new(key: impl ToString, created: Timestamp) -> Self {
        Self {
            key: key.to_string(),
            summary: String::new(),
            story_points: None,
            status: String::new(),
            assignee: None,
            created,
            changelog: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl ToString) -> Self {
        self.summary = summary.to_string();
        self
    }

    pub fn with_story_points(mut self, story_points: Option<f64>) -> Self {
        self.story_points = story_points;
        self
    }

    pub fn with_status(mut self, status: impl ToString) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_assignee(mut self, assignee: Option<Assignee>) -> Self {
        self.assignee = assignee;
        self
    }

    pub fn with_changelog(mut self, changelog: Vec<ChangelogEvent>) -> Self {
        self.changelog = changelog;
        self
    }
}

// Accessors
impl Issue {
    pub fn points(&self) -> f64 {
        self.story_points.unwrap_or(0.0)
    }

    pub fn assignee_key(&self) -> &str {
        self.assignee
            .as_ref()
            .map(|a| a.key.as_str())
            .unwrap_or(UNASSIGNED_KEY)
    }

    pub fn assignee_name(&self) -> &str {
        self.assignee
            .as_ref()
            .map(|a| a.display_name.as_str())
            .unwrap_or(UNASSIGNED_NAME)
    }
}
