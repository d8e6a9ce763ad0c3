use serde::{Deserialize, Serialize};

/// Pipeline configuration, resolved once at startup and threaded into the
/// preview service instead of read from ambient environment state inside the
/// calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Name of the exchange-rate source queried for conversion snapshots.
    pub exchange_rate_source: String,
    /// Domain product assets are served from.
    pub cdn_domain: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            exchange_rate_source: "official".to_string(),
            cdn_domain: String::new(),
        }
    }
}

impl PipelineConfig {
    /// Create configuration from environment variables or use defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        Self {
            exchange_rate_source: std::env::var("EXCHANGE_RATE_SOURCE")
                .unwrap_or(defaults.exchange_rate_source),
            cdn_domain: std::env::var("CDN_DOMAIN").unwrap_or(defaults.cdn_domain),
        }
    }
}
