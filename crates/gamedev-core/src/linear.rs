//! Linear GraphQL client.
//!
//! Implements [`IssueTracker`] with one blocking POST per call. Cycles map to
//! sprints. The API key goes in the `Authorization` header as-is.

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::tracker::{CycleRef, IssueRef, IssueTracker, NewIssue, ProjectRef};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

const PROJECT_CREATE: &str = "mutation ProjectCreate($input: ProjectCreateInput!) {
  projectCreate(input: $input) { success project { id name } }
}";

const CYCLE_CREATE: &str = "mutation CycleCreate($input: CycleCreateInput!) {
  cycleCreate(input: $input) { success cycle { id name } }
}";

const ISSUE_CREATE: &str = "mutation IssueCreate($input: IssueCreateInput!) {
  issueCreate(input: $input) { success issue { id identifier cycle { id } } }
}";

pub struct LinearClient {
    http: reqwest::blocking::Client,
    api_url: String,
    api_key: String,
}

impl LinearClient {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TrackerError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Build a client from config, reading the key from the configured
    /// environment variable.
    pub fn from_config(config: &TrackerConfig) -> Result<Self, TrackerError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| TrackerError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(
            config.api_url.clone(),
            api_key,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn graphql<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, TrackerError> {
        let resp = self
            .http
            .post(&self.api_url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .json(&json!({ "query": query, "variables": variables }))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(TrackerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<T> = resp.json()?;
        if let Some(first) = envelope.errors.first() {
            return Err(TrackerError::Api(first.message.clone()));
        }
        envelope
            .data
            .ok_or_else(|| TrackerError::Api("response carried no data".to_string()))
    }
}

fn iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl IssueTracker for LinearClient {
    fn create_project(
        &self,
        name: &str,
        description: &str,
        team_id: &str,
    ) -> Result<ProjectRef, TrackerError> {
        let data: ProjectCreateData = self.graphql(
            PROJECT_CREATE,
            json!({
                "input": {
                    "name": name,
                    "description": name,
                    "content": description,
                    "teamIds": [team_id],
                }
            }),
        )?;
        match data.project_create {
            Payload { success: true, entity: Some(project) } => Ok(project),
            _ => Err(TrackerError::Rejected(format!("project '{name}'"))),
        }
    }

    fn create_cycle(
        &self,
        name: &str,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        team_id: &str,
    ) -> Result<CycleRef, TrackerError> {
        let data: CycleCreateData = self.graphql(
            CYCLE_CREATE,
            json!({
                "input": {
                    "name": name,
                    "startsAt": iso(starts_at),
                    "endsAt": iso(ends_at),
                    "teamId": team_id,
                }
            }),
        )?;
        match data.cycle_create {
            Payload { success: true, entity: Some(cycle) } => Ok(cycle),
            _ => Err(TrackerError::Rejected(format!("cycle '{name}'"))),
        }
    }

    fn create_issue(&self, issue: &NewIssue<'_>) -> Result<IssueRef, TrackerError> {
        let data: IssueCreateData = self.graphql(
            ISSUE_CREATE,
            json!({
                "input": {
                    "title": issue.title,
                    "description": issue.description,
                    "teamId": issue.team_id,
                    "projectId": issue.project_id,
                    "cycleId": issue.cycle_id,
                    "priority": issue.priority,
                    "labelIds": issue.label_ids,
                }
            }),
        )?;
        match data.issue_create {
            Payload { success: true, entity: Some(created) } => Ok(IssueRef {
                id: created.id,
                identifier: created.identifier,
                cycle_id: created.cycle.map(|c| c.id),
            }),
            _ => Err(TrackerError::Rejected(format!("issue '{}'", issue.title))),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct Payload<T> {
    success: bool,
    #[serde(alias = "project", alias = "cycle", alias = "issue")]
    entity: Option<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectCreateData {
    project_create: Payload<ProjectRef>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CycleCreateData {
    cycle_create: Payload<CycleRef>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueCreateData {
    issue_create: Payload<CreatedIssueNode>,
}

#[derive(Deserialize)]
struct CreatedIssueNode {
    id: String,
    identifier: Option<String>,
    cycle: Option<IdNode>,
}

#[derive(Deserialize)]
struct IdNode {
    id: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
