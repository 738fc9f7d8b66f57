use serde::Deserialize;
use std::time::Duration;

/// Default booking API origin used when `API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub site_url: String,
    pub site_name: String,
    pub analytics_enabled: bool,
    pub contact_submit_delay_ms: u64,
    pub contact_success_reset_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            api_url: DEFAULT_API_URL.to_string(),
            site_url: "https://accessdevops.com".to_string(),
            site_name: "AccessDevOps".to_string(),
            analytics_enabled: true,
            contact_submit_delay_ms: 500,
            contact_success_reset_ms: 3000,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            api_url: http_url_var("API_URL", &defaults.api_url)?,
            site_url: http_url_var("SITE_URL", &defaults.site_url)?,
            site_name: std::env::var("SITE_NAME")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.site_name),
            analytics_enabled: match std::env::var("ANALYTICS_ENABLED") {
                Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => true,
                    "0" | "false" | "no" | "off" => false,
                    other => anyhow::bail!("ANALYTICS_ENABLED must be a boolean, got '{}'", other),
                },
                Err(_) => defaults.analytics_enabled,
            },
            contact_submit_delay_ms: millis_var(
                "CONTACT_SUBMIT_DELAY_MS",
                defaults.contact_submit_delay_ms,
            )?,
            contact_success_reset_ms: millis_var(
                "CONTACT_SUCCESS_RESET_MS",
                defaults.contact_success_reset_ms,
            )?,
        };

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Booking API URL: {}", config.api_url);
        tracing::debug!("Site URL: {}", config.site_url);
        if !config.analytics_enabled {
            tracing::info!("Analytics disabled, events will not be reported");
        }
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    pub fn contact_submit_delay(&self) -> Duration {
        Duration::from_millis(self.contact_submit_delay_ms)
    }

    pub fn contact_success_reset(&self) -> Duration {
        Duration::from_millis(self.contact_success_reset_ms)
    }
}

fn http_url_var(name: &str, default: &str) -> anyhow::Result<String> {
    let url = std::env::var(name)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string());

    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", name);
    }

    Ok(url.trim_end_matches('/').to_string())
}

fn millis_var(name: &str, default: u64) -> anyhow::Result<u64> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a number of milliseconds", name)),
        Err(_) => Ok(default),
    }
}
