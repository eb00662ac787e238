use crate::error::{Error, Result};
use crate::model::Timestamp;
use indexmap::IndexSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum SprintState {
    Active,
    Closed,
    Future,
}

impl SprintState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
            Self::Future => "future",
        }
    }
}

impl FromStr for SprintState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            "future" => Ok(Self::Future),
            other => Err(Error::InvalidSprintState(other.to_string())),
        }
    }
}

/// A sprint of a board. Ids grow with creation order.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Sprint {
    pub id: u64,
    pub name: String,
    pub state: SprintState,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub activated: Option<Timestamp>,
    pub completed: Option<Timestamp>,
}

// Create
impl Sprint {
    pub fn new(id: u64, name: impl ToString, state: SprintState) -> Self {
        Self {
            id,
            name: name.to_string(),
            state,
            start: None,
            end: None,
            activated: None,
            completed: None,
        }
    }

    pub fn with_period(mut self, start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_lifecycle(
        mut self,
        activated: Option<Timestamp>,
        completed: Option<Timestamp>,
    ) -> Self {
        self.activated = activated;
        self.completed = completed;
        self
    }
}

// Reality
impl Sprint {
    /// Whether the sprint was actually executed: closed, with both dates set,
    /// and already over at `now`. Placeholder sprints (backlog queues, technical
    /// buckets) fail at least one of these.
    pub fn is_real(&self, now: &Timestamp) -> bool {
        if self.state != SprintState::Closed {
            return false;
        }
        let (Some(_), Some(end)) = (&self.start, &self.end) else {
            return false;
        };
        end <= now
    }

    pub fn period(&self) -> String {
        format!(
            "{} - {}",
            format_date(self.start.as_ref()),
            format_date(self.end.as_ref())
        )
    }
}

pub fn real_sprint_names(sprints: &[Sprint], now: &Timestamp) -> IndexSet<String> {
    sprints
        .iter()
        .filter(|sprint| sprint.is_real(now))
        .map(|sprint| sprint.name.clone())
        .collect()
}

/// The sprint reported on by default: the latest closed sprint created
/// before the currently active one.
pub fn previous_sprint(sprints: &[Sprint]) -> Result<(&Sprint, &Sprint)> {
    let Some(active) = sprints.iter().find(|s| s.state == SprintState::Active) else {
        return Err(Error::NoActiveSprint);
    };
    let Some(target) = sprints
        .iter()
        .filter(|s| s.state == SprintState::Closed && s.id < active.id)
        .max_by_key(|s| s.id)
    else {
        return Err(Error::NoPreviousSprint {
            active: active.name.clone(),
        });
    };
    Ok((target, active))
}

pub fn format_date(datetime: Option<&Timestamp>) -> String {
    datetime
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
#[path = "sprint_tests.rs"]
mod tests;
