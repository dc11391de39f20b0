use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::Project;
use crate::supabase::ProjectSource;

/// Always returns the same rows.
pub struct FixedSource(pub Vec<Project>);

#[async_trait]
impl ProjectSource for FixedSource {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn recent_projects(&self) -> Result<Vec<Project>, FetchError> {
        Ok(self.0.clone())
    }
}

/// Always fails the way a rejected anon key does.
pub struct FailingSource;

#[async_trait]
impl ProjectSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn recent_projects(&self) -> Result<Vec<Project>, FetchError> {
        Err(FetchError::Service {
            status: 401,
            message: "Invalid API key".to_string(),
        })
    }
}

pub fn project(id: i64, title: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: Some(format!("{title} description")),
        img: None,
        link: format!("https://example.com/{id}"),
        icons: vec!["/rust.svg".to_string()],
        cover: None,
        created_at: None,
    }
}
