mod changelog;
mod config;
mod issue;
mod sprint;

#[cfg(test)]
pub mod fixtures;

use chrono::{DateTime, FixedOffset};

pub use changelog::{ChangeField, ChangelogEvent};
pub use config::JiraConfig;
pub use issue::{Assignee, Issue, UNASSIGNED_KEY, UNASSIGNED_NAME};
pub use sprint::{format_date, previous_sprint, real_sprint_names, Sprint, SprintState};

pub type Timestamp = DateTime<FixedOffset>;
