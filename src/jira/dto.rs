//! Wire shapes of the Jira REST and Agile APIs, and their conversion into the
//! crate's model.

use crate::error::{Error, Result};
use crate::model::{Assignee, ChangelogEvent, Issue, Sprint, Timestamp};
use chrono::DateTime;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

const JIRA_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const UNKNOWN_STATUS: &str = "Unknown";

/// Accepts both RFC 3339 and Jira's own `2026-01-12T04:00:00.000+0700`.
pub fn parse_datetime(value: &str) -> Result<Timestamp> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, JIRA_DATETIME_FORMAT))
        .map_err(|_| Error::InvalidDateTime(value.to_string()))
}

fn parse_optional(value: Option<&str>) -> Result<Option<Timestamp>> {
    value.map(parse_datetime).transpose()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintPage {
    #[serde(default)]
    pub values: Vec<SprintDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintDto {
    pub id: u64,
    pub name: String,
    pub state: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub activated_date: Option<String>,
    pub complete_date: Option<String>,
}

impl SprintDto {
    pub fn into_sprint(self) -> Result<Sprint> {
        let sprint = Sprint::new(self.id, self.name, self.state.parse()?)
            .with_period(
                parse_optional(self.start_date.as_deref())?,
                parse_optional(self.end_date.as_deref())?,
            )
            .with_lifecycle(
                parse_optional(self.activated_date.as_deref())?,
                parse_optional(self.complete_date.as_deref())?,
            );
        Ok(sprint)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub issues: Vec<IssueDto>,
}

#[derive(Debug, Deserialize)]
pub struct IssueDto {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFieldsDto,
    #[serde(default)]
    pub changelog: ChangelogDto,
}

#[derive(Debug, Default, Deserialize)]
pub struct IssueFieldsDto {
    pub summary: Option<String>,
    pub status: Option<StatusDto>,
    pub assignee: Option<UserDto>,
    pub created: Option<String>,
    /// Custom fields, the story points among them.
    #[serde(flatten)]
    pub custom: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct StatusDto {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub key: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChangelogDto {
    #[serde(default)]
    pub histories: Vec<HistoryDto>,
}

/// One edit of an issue; a single edit may touch several fields.
#[derive(Debug, Deserialize)]
pub struct HistoryDto {
    pub created: String,
    #[serde(default)]
    pub items: Vec<HistoryItemDto>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryItemDto {
    pub field: String,
    #[serde(rename = "fromString")]
    pub from_text: Option<String>,
    #[serde(rename = "toString")]
    pub to_text: Option<String>,
}

impl IssueDto {
    pub fn into_issue(self, story_points_field: &str) -> Result<Issue> {
        let Some(created) = self.fields.created.as_deref() else {
            return Err(Error::InvalidDateTime(format!(
                "issue {} has no creation date",
                self.key
            )));
        };
        let created = parse_datetime(created)?;
        let story_points = self
            .fields
            .custom
            .get(story_points_field)
            .and_then(Value::as_f64);
        let status = self
            .fields
            .status
            .map(|status| status.name)
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string());
        let assignee = self.fields.assignee.and_then(UserDto::into_assignee);
        let changelog = self.changelog.flatten()?;

        Ok(Issue::new(self.key, created)
            .with_summary(self.fields.summary.unwrap_or_default())
            .with_story_points(story_points)
            .with_status(status)
            .with_assignee(assignee)
            .with_changelog(changelog))
    }
}

impl UserDto {
    /// Users without a key cannot be grouped and count as unassigned.
    fn into_assignee(self) -> Option<Assignee> {
        let key = self.key?;
        Some(Assignee::new(key, self.display_name.unwrap_or_default()))
    }
}

impl ChangelogDto {
    /// One event per changed field, each stamped with its edit's time.
    pub fn flatten(self) -> Result<Vec<ChangelogEvent>> {
        let mut events = Vec::new();
        for history in self.histories {
            let at = parse_datetime(&history.created)?;
            for item in history.items {
                events.push(ChangelogEvent::new(
                    at,
                    &item.field,
                    item.from_text,
                    item.to_text,
                ));
            }
        }
        Ok(events)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub version: Option<String>,
    pub build_number: Option<u64>,
    pub deployment_type: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    pub time_zone: Option<String>,
    pub active: Option<bool>,
}

/// An entry of `/rest/api/2/field`.
#[derive(Debug, Deserialize)]
pub struct FieldDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub custom: bool,
}

#[derive(Debug, Deserialize)]
pub struct BoardPage {
    pub total: Option<u64>,
    #[serde(default)]
    pub values: Vec<BoardDto>,
}

impl BoardPage {
    /// The announced total, or the page size when Jira leaves it out.
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(self.values.len() as u64)
    }
}

#[derive(Debug, Deserialize)]
pub struct BoardDto {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[cfg(test)]
#[path = "dto_tests.rs"]
mod tests;
