//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError, ResourceConfig};
use crate::resources::ResourceKind;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "coolfetch", version, about = "Fetch, validate and show cool fake data")]
pub struct Args {
    /// Config file (default: ~/.config/coolfetch/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only show these resources (repeatable)
    #[arg(long = "resource", value_enum, value_name = "KIND")]
    pub resources: Vec<ResourceKind>,

    /// Chance in [0, 1] that a fetch fails with a simulated fault
    #[arg(long, value_name = "P")]
    pub fault_probability: Option<f64>,

    /// Seed for the fault injector
    #[arg(long)]
    pub seed: Option<u64>,

    /// Artificial delay before each request
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Fetch every resource once, print the result and exit
    #[arg(long)]
    pub once: bool,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(probability) = self.fault_probability {
            config.defaults.fault_probability = probability;
        }
        if let Some(latency) = self.latency_ms {
            config.defaults.simulated_latency_ms = latency;
        }

        if !self.resources.is_empty() {
            config
                .resources
                .retain(|resource| self.resources.contains(&resource.kind));
            for kind in &self.resources {
                if !config.resources.iter().any(|r| r.kind == *kind) {
                    config.resources.push(ResourceConfig::new(*kind));
                }
            }
        }

        config.validate()
    }
}
