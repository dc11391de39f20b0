use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::config::SupabaseConfig;
use crate::error::{AppError, FetchError};
use crate::models::Project;
use crate::supabase::ProjectSource;

const PROJECTS_PATH: &str = "rest/v1/projects";
const PROJECTS_SELECT: &str = "*,projectImages(url,project_Id)";
const PROJECTS_ORDER: &str = "created_at.asc";
const CLIENT_USER_AGENT: &str = "showcase/1.0";

/// PostgREST client for a Supabase project.
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: Url,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(client: reqwest::Client, base_url: &str, anon_key: String) -> Result<Self, AppError> {
        let mut base_url = Url::parse(base_url)?;

        // Keep a trailing slash so `join` appends instead of replacing the last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            anon_key,
        })
    }

    pub fn from_config(config: &SupabaseConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Self::new(client, &config.url, config.anon_key.clone())
    }

    fn projects_url(&self) -> Result<Url, FetchError> {
        let mut url = self.base_url.join(PROJECTS_PATH)?;
        url.query_pairs_mut()
            .append_pair("select", PROJECTS_SELECT)
            .append_pair("order", PROJECTS_ORDER);
        Ok(url)
    }
}

#[async_trait]
impl ProjectSource for SupabaseClient {
    fn name(&self) -> &'static str {
        "supabase"
    }

    #[tracing::instrument(skip(self), fields(host = self.base_url.host_str().unwrap_or_default()))]
    async fn recent_projects(&self) -> Result<Vec<Project>, FetchError> {
        let url = self.projects_url()?;

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/json")
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.anon_key))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceError>(&body)
                .ok()
                .and_then(ServiceError::describe)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

            return Err(FetchError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let projects: Vec<Project> = serde_json::from_str(&body)?;
        Ok(projects)
    }
}

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct ServiceError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl ServiceError {
    fn describe(self) -> Option<String> {
        let mut text = self.message?;
        if let Some(code) = self.code {
            text = format!("{code}: {text}");
        }
        if let Some(details) = self.details {
            text.push_str(&format!(" ({details})"));
        }
        if let Some(hint) = self.hint {
            text.push_str(&format!(" hint: {hint}"));
        }
        Some(text)
    }
}
