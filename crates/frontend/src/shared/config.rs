//! Runtime configuration of the portal
//!
//! Ищем `config.toml` рядом с `index.html`, иначе берём встроенный конфиг.

use contracts::shared::config::{parse_config, PortalConfig, DEFAULT_CONFIG};
use gloo_net::http::Request;

const CONFIG_URL: &str = "/config.toml";

pub async fn load_config() -> PortalConfig {
    match fetch_config().await {
        Ok(config) => {
            log::info!("Loading config from: {}", CONFIG_URL);
            config
        }
        Err(e) => {
            log::warn!("{}; using default embedded configuration", e);
            embedded_config()
        }
    }
}

async fn fetch_config() -> Result<PortalConfig, String> {
    let response = Request::get(CONFIG_URL)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("{} not found: HTTP {}", CONFIG_URL, response.status()));
    }

    let contents = response
        .text()
        .await
        .map_err(|e| format!("Failed to read {}: {}", CONFIG_URL, e))?;

    parse_config(&contents).map_err(|e| e.to_string())
}

fn embedded_config() -> PortalConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("{}", e);
        PortalConfig::default()
    })
}
