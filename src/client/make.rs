use super::ScenarioSource;
use crate::config::ConnectionConfig;
use crate::error::{Make2OasError, Result};
use crate::models::make::{InterfaceEnvelope, ScenarioPage};
use crate::models::{Scenario, ScenarioInterface};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response, StatusCode};
use std::time::Duration;

/// Listing sort key; ids grow with creation time
const SORT_BY: &str = "id";
const SORT_DIR: &str = "desc";

/// HTTP client for the Make REST API (`/api/v2`)
#[derive(Debug, Clone)]
pub struct MakeClient {
    http: reqwest::Client,
    config: ConnectionConfig,
}

impl MakeClient {
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(format!("{}{}", self.config.api_root(), path))
            .header(AUTHORIZATION, self.config.authorization())
            .header(CONTENT_TYPE, "application/json")
    }

    fn listing_query(&self, offset: usize, limit: usize) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(team_id) = &self.config.team_id {
            query.push(("teamId", team_id.clone()));
        }
        if let Some(organization_id) = &self.config.organization_id {
            query.push(("organizationId", organization_id.clone()));
        }
        query.push(("pg[limit]", limit.to_string()));
        query.push(("pg[offset]", offset.to_string()));
        query.push(("pg[sortBy]", SORT_BY.to_string()));
        query.push(("pg[sortDir]", SORT_DIR.to_string()));
        query
    }
}

/// Body text of a failed response, or the reason phrase when it is empty
async fn failure_message(status: StatusCode, response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

impl ScenarioSource for MakeClient {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Scenario>> {
        tracing::debug!(offset, limit, origin = %self.config.origin, "Requesting scenario page");

        let response = self
            .get("/scenarios")
            .query(&self.listing_query(offset, limit))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = failure_message(status, response).await;
            tracing::error!(status = status.as_u16(), offset, %message, "Scenario listing failed");
            return Err(Make2OasError::RemoteListingFailed {
                status: status.as_u16(),
                offset,
                message,
            });
        }

        let page: ScenarioPage = response.json().await?;
        Ok(page.scenarios)
    }

    async fn fetch_interface(&self, scenario_id: i64) -> Result<ScenarioInterface> {
        tracing::debug!(scenario_id, "Requesting scenario interface");

        let response = self
            .get(&format!("/scenarios/{}/interface", scenario_id))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = failure_message(status, response).await;
            tracing::error!(
                status = status.as_u16(),
                scenario_id,
                %message,
                "Interface fetch failed"
            );
            return Err(Make2OasError::RemoteInterfaceFailed {
                status: status.as_u16(),
                scenario_id,
                message,
            });
        }

        let envelope: InterfaceEnvelope = response.json().await?;
        Ok(envelope.interface)
    }
}
