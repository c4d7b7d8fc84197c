//! Jira Cloud client
//!
//! Reads tickets through the Jira Cloud REST API (v3). Responses are parsed
//! into typed records once, here; nothing past this module sees raw JSON.

use crate::adf;
use crate::error::TrackerError;
use casegen_domain::traits::TicketSource;
use casegen_domain::{Ticket, TicketRef};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Default number of tickets listed
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a Jira Cloud site
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Site URL, e.g. `https://example.atlassian.net`
    pub domain: String,

    /// Account e-mail used for basic auth
    pub email: String,

    /// API token used for basic auth
    pub api_token: String,

    /// Project whose tickets are listed
    pub project_key: String,

    /// Maximum number of tickets listed
    pub max_results: u32,
}

impl JiraConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !(self.domain.starts_with("https://") || self.domain.starts_with("http://")) {
            return Err(TrackerError::Config(format!(
                "domain must be an http(s) URL, got '{}'",
                self.domain
            )));
        }
        if self.email.trim().is_empty() {
            return Err(TrackerError::Config("email must not be empty".to_string()));
        }
        if self.api_token.trim().is_empty() {
            return Err(TrackerError::Config("api_token must not be empty".to_string()));
        }
        if !is_valid_project_key(&self.project_key) {
            return Err(TrackerError::Config(format!(
                "invalid project key '{}'",
                self.project_key
            )));
        }
        if self.max_results == 0 {
            return Err(TrackerError::Config(
                "max_results must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Jira Cloud ticket source
pub struct JiraClient {
    config: JiraConfig,
    client: reqwest::Client,
}

/// Response from `GET /rest/api/3/search`
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<IssueResponse>,
}

/// Response from `GET /rest/api/3/issue/{key}`, also used for search hits
#[derive(Debug, Deserialize)]
struct IssueResponse {
    key: String,
    #[serde(default)]
    fields: IssueFields,
}

#[derive(Debug, Default, Deserialize)]
struct IssueFields {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    priority: Option<NamedValue>,
    #[serde(default)]
    description: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct NamedValue {
    #[serde(default)]
    name: Option<String>,
}

impl From<IssueResponse> for Ticket {
    fn from(issue: IssueResponse) -> Self {
        let fields = issue.fields;
        Ticket {
            key: issue.key,
            summary: fields.summary.unwrap_or_default(),
            priority: fields
                .priority
                .and_then(|p| p.name)
                .filter(|name| !name.trim().is_empty()),
            description: fields.description.as_ref().and_then(adf::to_plain_text),
        }
    }
}

impl JiraClient {
    /// Create a new client, validating the configuration
    pub fn new(config: JiraConfig) -> Result<Self, TrackerError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| TrackerError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.domain.trim_end_matches('/'), path)
    }

    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response, TrackerError> {
        debug!("GET {}", url);
        self.client
            .get(url)
            .query(query)
            .basic_auth(&self.config.email, Some(&self.config.api_token))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TrackerError::Communication(format!("Request failed: {}", e)))
    }

    /// List the configured project's tickets
    pub async fn search(&self) -> Result<Vec<TicketRef>, TrackerError> {
        let url = self.url("/rest/api/3/search");
        let query = [
            ("jql", format!("project={}", self.config.project_key)),
            ("maxResults", self.config.max_results.to_string()),
            ("fields", "summary".to_string()),
        ];

        let response = self.get(&url, &query).await?;
        let body = read_success(response).await?;
        let tickets = parse_search(&body)?;

        info!(
            "Fetched {} tickets from project {}",
            tickets.len(),
            self.config.project_key
        );
        Ok(tickets)
    }

    /// Fetch one ticket with its summary, priority and description
    pub async fn issue(&self, key: &str) -> Result<Ticket, TrackerError> {
        if !is_valid_ticket_key(key) {
            return Err(TrackerError::InvalidKey(key.to_string()));
        }

        let url = self.url(&format!("/rest/api/3/issue/{}", key));
        let query = [("fields", "summary,priority,description".to_string())];

        let response = self.get(&url, &query).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(TrackerError::TicketNotFound(key.to_string()));
        }
        let body = read_success(response).await?;
        parse_issue(&body)
    }
}

impl TicketSource for JiraClient {
    type Error = TrackerError;

    async fn list_tickets(&self) -> Result<Vec<TicketRef>, Self::Error> {
        self.search().await
    }

    async fn fetch_ticket(&self, key: &str) -> Result<Ticket, Self::Error> {
        self.issue(key).await
    }
}

async fn read_success(response: reqwest::Response) -> Result<String, TrackerError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TrackerError::Communication(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(TrackerError::Http {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

fn parse_search(body: &str) -> Result<Vec<TicketRef>, TrackerError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .issues
        .into_iter()
        .map(|issue| TicketRef {
            key: issue.key,
            summary: issue.fields.summary,
        })
        .collect())
}

fn parse_issue(body: &str) -> Result<Ticket, TrackerError> {
    let issue: IssueResponse = serde_json::from_str(body)?;
    Ok(issue.into())
}

fn is_valid_project_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Ticket keys look like `SCRUM-12`; ids are plain numbers.
fn is_valid_ticket_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
