pub mod client;
pub mod dto;

pub use client::{JiraClient, JiraFetcher};
pub use dto::{BoardPage, CurrentUser, FieldDto, ServerInfo};
