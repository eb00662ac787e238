use crate::model::Timestamp;

const SPRINT_FIELD: &str = "Sprint";
const STATUS_FIELD: &str = "status";

/// The issue field a changelog entry touched.
///
/// Only the sprint and status fields drive categorization; every other field
/// is kept as [`ChangeField::Other`] so the history stays complete.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum ChangeField {
    Sprint,
    Status,
    Other(String),
}

impl ChangeField {
    /// Field names are matched exactly, as Jira reports them.
    pub fn parse(name: &str) -> Self {
        match name {
            SPRINT_FIELD => Self::Sprint,
            STATUS_FIELD => Self::Status,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Sprint => SPRINT_FIELD,
            Self::Status => STATUS_FIELD,
            Self::Other(name) => name,
        }
    }
}

/// One field transition from an issue's history.
///
/// `from` and `to` are the human readable values. For the sprint field they
/// may hold several sprint names joined with commas, and either side may be
/// empty. Events of one issue carry no ordering guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogEvent {
    pub at: Timestamp,
    pub field: ChangeField,
    pub from: String,
    pub to: String,
}

// Create
impl ChangelogEvent {
    pub fn new(
        at: Timestamp,
        field: &str,
        from: Option<impl ToString>,
        to: Option<impl ToString>,
    ) -> Self {
        Self {
            at,
            field: ChangeField::parse(field),
            from: from.map(|s| s.to_string()).unwrap_or_default(),
            to: to.map(|s| s.to_string()).unwrap_or_default(),
        }
    }

    pub fn is_sprint(&self) -> bool {
        self.field == ChangeField::Sprint
    }

    pub fn is_status(&self) -> bool {
        self.field == ChangeField::Status
    }

    /// Sprint names listed in the `from` side, trimmed, blanks skipped.
    pub fn from_sprints(&self) -> impl Iterator<Item = &str> {
        self.from
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
#[path = "changelog_tests.rs"]
mod tests;
