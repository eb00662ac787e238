use crate::error::{Error, Result};
use serde_json::{from_str, Value};
use std::fs;

/// Where the board lives and how its story points are stored.
///
/// The token is not part of the file, it comes from the command line or
/// the environment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct JiraConfig {
    pub url: String,
    pub board: u64,
    pub story_points_field: String,
}

// Create
impl JiraConfig {
    pub fn from_config(path: &str) -> Result<Self> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    pub fn new(url: impl ToString, board: u64, story_points_field: impl ToString) -> Self {
        Self {
            url: url.to_string().trim_end_matches('/').to_string(),
            board,
            story_points_field: story_points_field.to_string(),
        }
    }
}

// Parser
impl JiraConfig {
    fn parse(json_str: &str) -> Result<Self> {
        let details: Value = from_str(json_str)?;
        let Some(url) = details["url"].as_str() else {
            return Err(Error::Config("Not found 'url' field".into()));
        };
        let Some(board) = details["board"].as_u64() else {
            return Err(Error::Config("Not found 'board' field".into()));
        };
        let Some(story_points_field) = details["storyPointsField"].as_str() else {
            return Err(Error::Config("Not found 'storyPointsField' field".into()));
        };
        Ok(Self::new(url, board, story_points_field))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
