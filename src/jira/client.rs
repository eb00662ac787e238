use crate::error::{Error, Result};
use crate::jira::dto::{
    BoardPage, CurrentUser, FieldDto, IssuePage, ServerInfo, SprintDto, SprintPage,
};
use crate::model::{Issue, JiraConfig, Sprint};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

const PAGE_SIZE: u64 = 50;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const ERROR_BODY_LIMIT: usize = 200;

/// Reports `(fetched, total)` after every page; `total` is unknown for
/// listings that do not announce it.
pub type PageProgress<'a> = Box<dyn FnMut(u64, Option<u64>) + Send + 'a>;

/// Bearer-authenticated access to one Jira board.
#[derive(Debug, Clone)]
pub struct JiraClient {
    config: JiraConfig,
    token: String,
    client: Client,
}

impl JiraClient {
    pub fn new(config: JiraConfig, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            config,
            token: token.into(),
            client,
        })
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.config.url, path);
        tracing::debug!(%url, ?query, "GET");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

pub trait JiraFetcher {
    /// Sprints of the configured board.
    async fn fetch_sprints<'a>(&self, cb: PageProgress<'a>) -> Result<Vec<Sprint>>;

    async fn fetch_board_sprints<'a>(
        &self,
        board_id: u64,
        cb: PageProgress<'a>,
    ) -> Result<Vec<Sprint>>;

    async fn fetch_sprint(&self, sprint_id: u64) -> Result<Sprint>;

    async fn fetch_sprint_issues<'a>(
        &self,
        sprint_id: u64,
        cb: PageProgress<'a>,
    ) -> Result<Vec<Issue>>;

    async fn fetch_server_info(&self) -> Result<ServerInfo>;

    async fn fetch_myself(&self) -> Result<CurrentUser>;

    async fn fetch_fields(&self) -> Result<Vec<FieldDto>>;

    /// First page of the boards visible to the token.
    async fn fetch_boards(&self) -> Result<BoardPage>;
}

impl JiraFetcher for JiraClient {
    async fn fetch_sprints<'a>(&self, cb: PageProgress<'a>) -> Result<Vec<Sprint>> {
        self.fetch_board_sprints(self.config.board, cb).await
    }

    async fn fetch_board_sprints<'a>(
        &self,
        board_id: u64,
        mut cb: PageProgress<'a>,
    ) -> Result<Vec<Sprint>> {
        let path = format!("/rest/agile/1.0/board/{board_id}/sprint");
        let mut start_at = 0;
        let mut sprints = Vec::new();
        loop {
            let page: SprintPage = self
                .get(
                    &path,
                    &[
                        ("startAt", start_at.to_string()),
                        ("maxResults", PAGE_SIZE.to_string()),
                    ],
                )
                .await?;
            let received = page.values.len() as u64;
            for dto in page.values {
                sprints.push(dto.into_sprint()?);
            }
            cb(sprints.len() as u64, None);

            if received < PAGE_SIZE {
                break;
            }
            start_at += PAGE_SIZE;
        }
        tracing::debug!(board = board_id, sprints = sprints.len(), "fetched board sprints");
        Ok(sprints)
    }

    async fn fetch_sprint(&self, sprint_id: u64) -> Result<Sprint> {
        let dto: SprintDto = self
            .get(&format!("/rest/agile/1.0/sprint/{sprint_id}"), &[])
            .await?;
        dto.into_sprint()
    }

    async fn fetch_sprint_issues<'a>(
        &self,
        sprint_id: u64,
        mut cb: PageProgress<'a>,
    ) -> Result<Vec<Issue>> {
        let path = format!("/rest/agile/1.0/sprint/{sprint_id}/issue");
        let fields = format!(
            "key,summary,status,assignee,{},created",
            self.config.story_points_field
        );
        let mut start_at = 0;
        let mut issues = Vec::new();
        loop {
            let page: IssuePage = self
                .get(
                    &path,
                    &[
                        ("startAt", start_at.to_string()),
                        ("maxResults", PAGE_SIZE.to_string()),
                        ("fields", fields.clone()),
                        ("expand", "changelog".to_string()),
                    ],
                )
                .await?;
            let total = page.total;
            for dto in page.issues {
                issues.push(dto.into_issue(&self.config.story_points_field)?);
            }
            cb(issues.len() as u64, Some(total));

            if start_at + PAGE_SIZE >= total {
                break;
            }
            start_at += PAGE_SIZE;
        }
        tracing::debug!(sprint_id, issues = issues.len(), "fetched sprint issues");
        Ok(issues)
    }

    async fn fetch_server_info(&self) -> Result<ServerInfo> {
        self.get("/rest/api/2/serverInfo", &[]).await
    }

    async fn fetch_myself(&self) -> Result<CurrentUser> {
        self.get("/rest/api/2/myself", &[]).await
    }

    async fn fetch_fields(&self) -> Result<Vec<FieldDto>> {
        self.get("/rest/api/2/field", &[]).await
    }

    async fn fetch_boards(&self) -> Result<BoardPage> {
        self.get("/rest/agile/1.0/board", &[]).await
    }
}
