//! Config schema - Configuration for motdesk

use serde::{Deserialize, Serialize};

use super::Role;

/// Main configuration for motdesk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the booking platform API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Bearer token sent with every request
    #[serde(default)]
    pub api_token: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// Page size used when listing bookings and vehicles
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Role the operator acts as
    #[serde(default)]
    pub role: Role,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    30
}

fn default_page_limit() -> u32 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            api_base_url: default_api_base_url(),
            api_token: None,
            request_timeout_seconds: 30,
            page_limit: 50,
            role: Role::Garage,
        }
    }
}
