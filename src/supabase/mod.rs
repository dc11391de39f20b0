pub mod client;

#[cfg(test)]
pub(crate) mod fixtures;

use async_trait::async_trait;
use std::sync::Arc;

pub use client::SupabaseClient;

use crate::error::FetchError;
use crate::models::Project;

/// A read-only source of portfolio projects.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// All projects with their cover image, oldest first.
    async fn recent_projects(&self) -> Result<Vec<Project>, FetchError>;
}

/// Handle to the project source, built once at startup and handed to
/// request handlers through Leptos context.
#[derive(Clone)]
pub struct ProjectCatalog {
    source: Arc<dyn ProjectSource>,
}

impl ProjectCatalog {
    pub fn new(source: impl ProjectSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    #[tracing::instrument(skip(self), fields(source = self.source.name()))]
    pub async fn recent_projects(&self) -> Result<Vec<Project>, FetchError> {
        let projects = self.source.recent_projects().await?;
        tracing::debug!(count = projects.len(), "fetched recent projects");
        Ok(projects)
    }
}

impl std::fmt::Debug for ProjectCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectCatalog")
            .field("source", &self.source.name())
            .finish()
    }
}
