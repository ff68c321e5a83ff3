//! Serde models for the issue REST payloads.
//!
//! Field names follow the wire format of the JIRA REST API; the custom-role
//! fields are mapped from their fixed `customfield_*` identifiers.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::collections::HashMap;

use crate::pagination::Pagination;

/// Layout of the `fields.created` timestamp, e.g.
/// `2023-05-01T10:00:00.000-0700`.
pub const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// One page of a JQL search result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueList {
    #[serde(default)]
    pub expand: String,
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub issues: Vec<Issue>,
    /// Derived paging metadata, computed after decode.
    #[serde(skip)]
    pub pagination: Pagination,
}

impl IssueList {
    pub fn has_more(&self) -> bool {
        self.start_at + (self.issues.len() as u32) < self.total
    }

    pub fn next_start(&self) -> u32 {
        self.start_at + self.issues.len() as u32
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: String,
    #[serde(default)]
    pub expand: String,
    #[serde(default)]
    pub fields: IssueFields,
    /// Parsed from `fields.created`; `None` when the server sent no
    /// timestamp or one that does not match [`CREATED_FORMAT`].
    #[serde(skip)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl Issue {
    /// Parse `fields.created` with the fixed [`CREATED_FORMAT`] layout.
    pub fn parse_created(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.fields.created.as_deref()?;
        DateTime::parse_from_str(raw, CREATED_FORMAT).ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueFields {
    #[serde(rename = "issuetype")]
    pub issue_type: Option<IssueType>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: Option<IssueStatus>,
    pub comment: Option<CommentPage>,
    pub reporter: Option<User>,
    pub assignee: Option<User>,
    #[serde(rename = "customfield_10300")]
    pub sponsor: Option<User>,
    #[serde(rename = "customfield_10202")]
    pub code_reviewer: Option<User>,
    #[serde(rename = "customfield_10203")]
    pub primary_developer: Option<User>,
    #[serde(rename = "customfield_12200")]
    pub qa_reviewer: Option<User>,
    #[serde(rename = "customfield_12300")]
    pub release_manager: Option<User>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(rename = "issuelinks", default)]
    pub issue_links: Vec<IssueLink>,
    pub project: Option<Project>,
    pub created: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueType {
    #[serde(rename = "self", default)]
    pub self_url: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subtask: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueStatus {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub name: String,
}

/// The `comment` field of an issue: a page of comments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comment {
    pub author: Option<User>,
    pub body: Option<String>,
    pub created: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "self", default)]
    pub self_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueLink {
    #[serde(rename = "self", default)]
    pub self_url: String,
    #[serde(rename = "type")]
    pub link_type: Option<IssueType>,
    #[serde(rename = "inwardIssue")]
    pub inward_issue: Option<Box<Issue>>,
    #[serde(rename = "outwardIssue")]
    pub outward_issue: Option<Box<Issue>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "self", default)]
    pub self_url: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar_urls: HashMap<String, String>,
}
