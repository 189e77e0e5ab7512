//! Sidebar configuration, stored as a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock behavior: 20-item pages capped at 150 children, 400 ms child
//! latency, a 300 ms hover delay and a 0.9 scroll threshold.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Mock data source tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Children returned per page.
    pub page_size: usize,
    /// Upper bound on the number of children of any parent.
    pub max_items: usize,
    /// Generated items at this parent depth or deeper never have children.
    pub max_depth: usize,
    /// Probability that a generated item has children.
    pub child_probability: f64,
    pub children_latency_ms: u64,
    pub content_latency_ms: u64,
    /// Extra random content latency, uniformly in `0..content_jitter_ms`.
    pub content_jitter_ms: u64,
    /// Probability that a fetch fails with `SourceError::Unavailable`.
    pub failure_rate: f64,
    /// Master seed for generated data. Random when absent.
    pub seed: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            max_items: 150,
            max_depth: 8,
            child_probability: 0.7,
            children_latency_ms: 400,
            content_latency_ms: 800,
            content_jitter_ms: 1200,
            failure_rate: 0.0,
            seed: None,
        }
    }
}

impl SourceConfig {
    pub fn children_latency(&self) -> Duration {
        Duration::from_millis(self.children_latency_ms)
    }

    /// Zero all simulated latency.
    pub fn instant(mut self) -> Self {
        self.children_latency_ms = 0;
        self.content_latency_ms = 0;
        self.content_jitter_ms = 0;
        self
    }
}

/// Interaction timing and layout knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Hover dwell before children are prefetched.
    pub hover_delay_ms: u64,
    /// How long an item keeps pulsing after its content arrived.
    pub pulse_ms: u64,
    /// Breadcrumb crumbs shown before middle levels collapse into the overflow menu.
    pub breadcrumb_max_visible: usize,
    /// Fraction of the list that must be scrolled past before the next page loads.
    pub scroll_threshold: f64,
    /// Children previewed in the detail pane.
    pub preview_children: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            hover_delay_ms: 300,
            pulse_ms: 500,
            breadcrumb_max_visible: 3,
            scroll_threshold: 0.9,
            preview_children: 6,
        }
    }
}

impl NavigationConfig {
    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover_delay_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Threads in the fetch pool.
    pub threads: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self { threads: 4 }
    }
}

/// Complete configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub source: SourceConfig,
    pub navigation: NavigationConfig,
    pub worker: WorkerConfig,
}

impl SidebarConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load a config file, falling back to defaults when it does not exist.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SidebarConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let src = &self.source;
        let nav = &self.navigation;
        if src.page_size == 0 {
            return Err(ConfigError::Invalid("source.page_size must be at least 1".into()));
        }
        if src.max_items == 0 {
            return Err(ConfigError::Invalid("source.max_items must be at least 1".into()));
        }
        check_unit("source.child_probability", src.child_probability)?;
        check_unit("source.failure_rate", src.failure_rate)?;
        check_unit("navigation.scroll_threshold", nav.scroll_threshold)?;
        if nav.breadcrumb_max_visible < 2 {
            return Err(ConfigError::Invalid(
                "navigation.breadcrumb_max_visible must be at least 2".into(),
            ));
        }
        if self.worker.threads == 0 {
            return Err(ConfigError::Invalid("worker.threads must be at least 1".into()));
        }
        Ok(())
    }
}

fn check_unit(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be within 0..=1, got {value}")))
    }
}
