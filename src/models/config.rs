//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_lang() -> String {
    "en".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    /// Base URL of the external team-member service, without trailing slash.
    pub team_member_service_url: String,
    /// Bearer token attached to every outbound request when set.
    #[serde(default)]
    pub team_member_service_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_lang")]
    pub default_lang: String,
}
