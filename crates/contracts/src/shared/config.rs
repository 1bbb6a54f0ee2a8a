use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid portal config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PortalConfig {
    pub realtime: RealtimeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RealtimeConfig {
    pub database_url: String,
    /// Emulator namespace, sent as `ns=`
    #[serde(default)]
    pub namespace: Option<String>,
    /// Database secret or ID token, sent as `auth=`
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub paths: CollectionPaths,
}

/// Пути коллекций в realtime базе
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CollectionPaths {
    pub stock: String,
    pub reallocation: String,
    pub schedule: String,
    pub spec_plan: String,
    pub date_track: String,
    pub dealer_configs: String,
}

impl Default for CollectionPaths {
    fn default() -> Self {
        Self {
            stock: "stock".to_string(),
            reallocation: "reallocation".to_string(),
            schedule: "schedule".to_string(),
            spec_plan: "specPlan".to_string(),
            date_track: "dateTrack".to_string(),
            dealer_configs: "dealerConfigs".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[realtime]
database_url = "http://127.0.0.1:9000"
namespace = "dealer-portal"
"#;

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            realtime: RealtimeConfig {
                database_url: "http://127.0.0.1:9000".to_string(),
                namespace: Some("dealer-portal".to_string()),
                auth_token: None,
                paths: CollectionPaths::default(),
            },
        }
    }
}

pub fn parse_config(contents: &str) -> Result<PortalConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

impl RealtimeConfig {
    /// Streaming URL of a collection: `<database_url>/<path>.json?...`
    pub fn collection_url(&self, path: &str) -> String {
        let base = self.database_url.trim_end_matches('/');
        let path = path.trim_matches('/');

        let mut query = Vec::new();
        if let Some(ns) = self.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            query.push(format!("ns={}", urlencoding::encode(ns)));
        }
        if let Some(token) = self.auth_token.as_deref().filter(|t| !t.is_empty()) {
            query.push(format!("auth={}", urlencoding::encode(token)));
        }

        if query.is_empty() {
            format!("{}/{}.json", base, path)
        } else {
            format!("{}/{}.json?{}", base, path, query.join("&"))
        }
    }

    pub fn dealer_config_url(&self, dealer_slug: &str) -> String {
        let path = format!(
            "{}/{}",
            self.paths.dealer_configs.trim_matches('/'),
            urlencoding::encode(dealer_slug)
        );
        self.collection_url(&path)
    }
}
