use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("sprint `{sprint}` has no {bound} date, cannot categorize its issues")]
    MissingTemporalBound { sprint: String, bound: &'static str },

    #[error("Jira responded with {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a valid date time: {0}")]
    InvalidDateTime(String),

    #[error("unknown sprint state: '{0}'\n  hint: valid states are: active, closed, future")]
    InvalidSprintState(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("no active sprint found on the board")]
    NoActiveSprint,

    #[error("no closed sprint found before the active sprint `{active}`")]
    NoPreviousSprint { active: String },

    #[error("failed to render report: {0}")]
    Render(String),
}
