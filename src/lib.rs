//! Typed client for a JIRA instance's REST API and Atom activity stream.
//!
//! Three operations are exposed: the activity feed of a user, a paginated
//! search of issues assigned to a user, and a single-issue lookup. Every
//! call is one authenticated GET plus a decode; the client holds no mutable
//! state, so one instance can be shared freely across tasks.

pub mod activity;
pub mod error;
pub mod pagination;
pub mod params;
pub mod types;

pub use activity::{ActivityFeed, ActivityItem};
pub use error::{ApiError, ErrorResponse, Result};
pub use pagination::Pagination;
pub use params::Params;
pub use types::{Issue, IssueList};
pub use url::Url;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::form_urlencoded;

/// HTTP Basic credentials for the JIRA instance.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

/// The JIRA client. Immutable after construction and cheap to clone.
#[derive(Clone)]
pub struct Jira {
    client: Client,
    base_url: Url,
    api_path: String,
    activity_path: String,
    credentials: Credentials,
}

impl Jira {
    /// Create a client for the instance at `base_url`.
    ///
    /// `api_path` is the issue REST prefix (e.g. `/rest/api/2`) and
    /// `activity_path` the activity-stream endpoint (e.g. `/activity`).
    /// No request timeout is set; the transport defaults apply.
    pub fn new(
        base_url: impl AsRef<str>,
        api_path: impl Into<String>,
        activity_path: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        let client = Client::builder()
            .user_agent(format!("jira-api/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_path: api_path.into(),
            activity_path: activity_path.into(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the Atom activity feed filtered to events of `user`.
    pub async fn user_activity(&self, user: &str) -> Result<ActivityFeed> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("streams", &format!("user IS {user}"))
            .finish();
        let url = self.endpoint(&self.activity_path, Some(&query))?;

        self.activity(url).await
    }

    /// Fetch and decode an Atom activity feed from an absolute URL.
    pub async fn activity(&self, url: Url) -> Result<ActivityFeed> {
        let body = self.get_bytes(url).await?;
        let feed = quick_xml::de::from_reader(body.as_slice())?;
        Ok(feed)
    }

    /// Search issues assigned to `user`, one page at a time.
    ///
    /// Decodes the search payload, parses each issue's creation timestamp
    /// and attaches the derived [`Pagination`] computed from the
    /// server-reported totals. `max_results` must be non-zero.
    pub async fn issues_assigned_to(
        &self,
        user: &str,
        max_results: u32,
        start_at: u32,
    ) -> Result<IssueList> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("jql", &format!("assignee=\"{user}\""))
            .append_pair("startAt", &start_at.to_string())
            .append_pair("maxResults", &max_results.to_string())
            .finish();
        let url = self.endpoint(&format!("{}/search", self.api_path), Some(&query))?;

        let body = self.get_bytes(url).await?;
        let mut list: IssueList = serde_json::from_slice(&body)?;

        for issue in &mut list.issues {
            issue.created_at = issue.parse_created();
            if issue.created_at.is_none() && issue.fields.created.is_some() {
                debug!(key = %issue.key, "created timestamp does not match the expected layout");
            }
        }

        // Some servers omit maxResults from the payload; never divide by the
        // decoded default of zero.
        let page_size = if list.max_results > 0 {
            list.max_results
        } else {
            max_results
        };
        list.pagination = Pagination::new(list.total, list.start_at, page_size);

        Ok(list)
    }

    /// Look up a single issue by id or key, with optional extra query
    /// parameters (e.g. `expand`, `fields`).
    pub async fn issue(&self, id: &str, params: Option<&Params>) -> Result<Issue> {
        let query = params.map(Params::to_query);
        let url = self.endpoint(
            &format!("{}/issue/{id}", self.api_path),
            query.as_deref(),
        )?;

        let body = self.get_bytes(url).await?;
        let issue = serde_json::from_slice(&body)?;
        Ok(issue)
    }

    fn endpoint(&self, path: &str, query: Option<&str>) -> Result<Url> {
        let mut raw = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            raw.push('?');
            raw.push_str(query);
        }
        Ok(Url::parse(&raw)?)
    }

    /// Execute an authenticated GET and return the raw body bytes.
    ///
    /// The body is read in full on every path, so the connection is always
    /// returned to the pool. A non-2xx status becomes [`ApiError::Status`]
    /// carrying the decoded server error payload; when that payload itself
    /// is not valid JSON, the decode error is returned instead.
    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        debug!(url = %url, "sending GET request");

        let response = self
            .client
            .get(url)
            .basic_auth(&self.credentials.login, Some(&self.credentials.password))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if status.is_success() {
            return Ok(body);
        }

        let mut error: ErrorResponse = serde_json::from_slice(&body)?;
        error.status = status_line(status);
        error.status_code = status.as_u16();

        warn!(status = %error.status, "server returned an error response");

        Err(ApiError::Status(error))
    }
}

/// Status line in the `"<code> <reason>"` form, e.g. `404 Not Found`.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
