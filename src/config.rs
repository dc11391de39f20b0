use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Supabase project holding the `projects` table
    pub supabase: Option<SupabaseConfig>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`
    pub url: String,

    /// Public anon key, sent as both `apikey` and bearer token
    pub anon_key: String,

    /// Upper bound for a single request to the service
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint (if None, uses OTEL_EXPORTER_OTLP_ENDPOINT env var)
    pub endpoint: Option<String>,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nested keys are separated by a double underscore:
    /// - SHOWCASE_LISTEN
    /// - SHOWCASE_SUPABASE__URL
    /// - SHOWCASE_SUPABASE__ANON_KEY
    /// - SHOWCASE_SUPABASE__TIMEOUT_SECS
    /// - SHOWCASE_OTEL__ENDPOINT
    /// - SHOWCASE_OTEL__ENVIRONMENT
    ///
    /// `SUPABASE_URL` and `SUPABASE_ANON_KEY` are honoured when the
    /// prefixed pair is absent.
    pub fn load() -> Result<Self, figment::Error> {
        let figment = Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("SHOWCASE_").split("__"));

        let mut config: Config = figment.extract()?;

        if config.supabase.is_none() {
            config.supabase = supabase_from_plain_env();
        }

        Ok(config)
    }
}

fn supabase_from_plain_env() -> Option<SupabaseConfig> {
    let url = std::env::var("SUPABASE_URL").ok()?;
    let anon_key = std::env::var("SUPABASE_ANON_KEY").ok()?;

    Some(SupabaseConfig {
        url,
        anon_key,
        timeout_secs: default_timeout_secs(),
    })
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
    otel: OtelConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            otel: OtelConfig::default(),
        }
    }
}
