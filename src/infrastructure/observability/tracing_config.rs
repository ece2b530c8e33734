use crate::presentation::config::Environment;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub json_format: bool,
}

impl TracingConfig {
    /// JSON output is on in production and whenever `LOG_FORMAT=json`.
    pub fn for_environment(environment: Environment) -> Self {
        let json_requested = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        Self {
            json_format: json_requested || environment == Environment::Prod,
        }
    }
}
