use serde::{Deserialize, Serialize};

use crate::resources::ResourceKind;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default = "default_resources")]
    pub resources: Vec<ResourceConfig>,
}

/// Settings shared by every resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Chance that a fetch fails with a simulated fault (0 disables it).
    #[serde(default)]
    pub fault_probability: f64,
    /// Artificial delay before each request, in milliseconds.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

/// One remote resource rendered as a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub kind: ResourceKind,
    /// Endpoint URL; falls back to the built-in endpoint for `kind`.
    #[serde(default)]
    pub url: Option<String>,
}

impl ResourceConfig {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind, url: None }
    }

    /// Configured URL or the kind's default endpoint.
    pub fn endpoint(&self) -> &str {
        self.url.as_deref().unwrap_or_else(|| self.kind.default_url())
    }
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_resources() -> Vec<ResourceConfig> {
    ResourceKind::ALL
        .iter()
        .copied()
        .map(ResourceConfig::new)
        .collect()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            fault_probability: 0.0,
            simulated_latency_ms: 0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            resources: default_resources(),
        }
    }
}
