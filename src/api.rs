use leptos::prelude::*;

use crate::models::Project;

/// Every project with its cover image, oldest first.
///
/// The failure reason is logged here and withheld from the browser.
#[server]
pub async fn get_recent_projects() -> Result<Vec<Project>, ServerFnError> {
    use crate::supabase::ProjectCatalog;

    let Some(catalog) = use_context::<ProjectCatalog>() else {
        tracing::error!("no project catalog in context");
        return Err(ServerFnError::new("failed to fetch recent projects"));
    };

    load_recent_projects(&catalog).await
}

#[cfg(feature = "ssr")]
pub async fn load_recent_projects(
    catalog: &crate::supabase::ProjectCatalog,
) -> Result<Vec<Project>, ServerFnError> {
    catalog.recent_projects().await.map_err(|e| {
        tracing::error!(error = %e, "error fetching recent projects");
        ServerFnError::new("failed to fetch recent projects")
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::supabase::fixtures::{project, FailingSource, FixedSource};
    use crate::supabase::ProjectCatalog;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log lines so tests can inspect them.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn load_with_logs(catalog: &ProjectCatalog) -> (Result<Vec<Project>, ServerFnError>, String) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            tokio_test::block_on(load_recent_projects(catalog))
        });

        (result, logs.contents())
    }

    #[test]
    fn passes_projects_through_in_order() {
        let catalog = ProjectCatalog::new(FixedSource(vec![
            project(1, "first"),
            project(2, "second"),
            project(3, "third"),
        ]));

        let projects = tokio_test::block_on(load_recent_projects(&catalog)).unwrap();

        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn withholds_failure_detail() {
        let catalog = ProjectCatalog::new(FailingSource);

        let err = tokio_test::block_on(load_recent_projects(&catalog)).unwrap_err();

        let text = err.to_string();
        assert!(text.contains("failed to fetch recent projects"));
        assert!(!text.contains("Invalid API key"));
    }

    #[test]
    fn logs_failure_cause_at_error_level() {
        let catalog = ProjectCatalog::new(FailingSource);

        let (result, logs) = load_with_logs(&catalog);

        assert!(result.is_err());
        let line = logs
            .lines()
            .find(|line| line.contains("error fetching recent projects"))
            .expect("failure should be logged");
        assert!(line.contains("ERROR"));
        assert!(line.contains("Invalid API key"));
    }

    #[test]
    fn success_logs_no_errors() {
        let catalog = ProjectCatalog::new(FixedSource(vec![project(1, "only")]));

        let (result, logs) = load_with_logs(&catalog);

        assert_eq!(result.unwrap().len(), 1);
        assert!(!logs.contains("ERROR"));
    }
}
