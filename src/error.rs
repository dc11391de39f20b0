use thiserror::Error;

/// Everything that can go wrong while reading the projects table.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("supabase is not configured (set SHOWCASE_SUPABASE__URL and SHOWCASE_SUPABASE__ANON_KEY)")]
    MissingSupabase,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid supabase url: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_supabase_names_the_settings() {
        let text = AppError::MissingSupabase.to_string();
        assert!(text.contains("SHOWCASE_SUPABASE__URL"));
        assert!(text.contains("SHOWCASE_SUPABASE__ANON_KEY"));
    }

    #[test]
    fn converts_startup_failures() {
        let err: AppError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, AppError::Url(_)));
    }
}
