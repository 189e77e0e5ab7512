//! Synthetic hierarchy with simulated network latency.
//!
//! Children of `parent` are named `<parent>-<index>`. Labels, descriptions
//! and icons depend on the parent's depth. Random attributes are drawn from
//! an RNG seeded per `(parent, page start)`, so the same seed always yields
//! the same tree.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use super::catalog::{description_for_depth, root_items, summary_for_depth, type_label_for_depth};
use super::DataSource;
use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::model::{
    ContentData, ContentMetrics, Cursor, Icon, ItemId, ItemStatus, ItemsData, SidebarItem,
};
use crate::rng::SeedHierarchy;

const LAST_MODIFIED_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;
const CONTENT_ACTIONS: [&str; 4] = ["Edit", "Duplicate", "Share", "Delete"];

#[derive(Debug, Clone)]
pub struct MockSource {
    config: SourceConfig,
    seeds: SeedHierarchy,
    reference_time: DateTime<Utc>,
}

impl MockSource {
    pub fn new(config: SourceConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, "mock source seeded");
        Self {
            config,
            seeds: SeedHierarchy::new(seed),
            reference_time: Utc::now(),
        }
    }

    /// Zero-latency source with a fixed seed.
    pub fn instant(seed: u64) -> Self {
        Self::new(SourceConfig {
            seed: Some(seed),
            ..SourceConfig::default()
        }
        .instant())
    }

    /// Pin the clock used for generated `last_modified` dates.
    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.reference_time = now;
        self
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seeds.master_seed()
    }

    fn simulate_latency(&self, latency: Duration) {
        if !latency.is_zero() {
            thread::sleep(latency);
        }
    }

    fn roll_failure(&self, what: &str) -> Result<(), SourceError> {
        if self.config.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.config.failure_rate) {
            return Err(SourceError::Unavailable(format!("simulated failure loading {what}")));
        }
        Ok(())
    }

    fn start_index(parent: &ItemId, cursor: Option<&Cursor>) -> Result<usize, SourceError> {
        let Some(cursor) = cursor else {
            return Ok(0);
        };
        let owned_by_parent = cursor
            .0
            .as_str()
            .rsplit_once('-')
            .is_some_and(|(prefix, _)| prefix == parent.as_str());
        match cursor.resume_index() {
            Some(index) if owned_by_parent => Ok(index),
            _ => Err(SourceError::InvalidCursor {
                parent: parent.clone(),
                cursor: cursor.clone(),
            }),
        }
    }

    fn generate(&self, parent: &ItemId, start: usize, count: usize) -> Vec<SidebarItem> {
        let depth = parent.depth();
        let mut rng = self.seeds.rng_for("children", parent, start as u64);
        (start..start + count)
            .map(|index| {
                let has_children =
                    depth < self.config.max_depth && rng.gen::<f64>() < self.config.child_probability;
                let age = chrono::Duration::milliseconds(rng.gen_range(0..LAST_MODIFIED_WINDOW_MS));
                let status = ItemStatus::ALL[rng.gen_range(0..ItemStatus::ALL.len())];
                SidebarItem {
                    id: parent.child(index),
                    label: format!("{} {}", type_label_for_depth(depth), index + 1),
                    icon: Icon::for_depth(depth),
                    has_children,
                    description: Some(description_for_depth(depth).to_string()),
                    content: Some(summary_for_depth(depth).to_string()),
                    last_modified: Some((self.reference_time - age).date_naive()),
                    status: Some(status),
                }
            })
            .collect()
    }
}

impl DataSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn root_items(&self) -> Vec<SidebarItem> {
        root_items()
    }

    fn fetch_children(
        &self,
        parent: &ItemId,
        cursor: Option<&Cursor>,
        limit: usize,
    ) -> Result<ItemsData, SourceError> {
        let start = Self::start_index(parent, cursor)?;
        self.simulate_latency(self.config.children_latency());
        self.roll_failure(parent.as_str())?;

        if parent.is_root() {
            return Ok(ItemsData::complete(root_items()));
        }

        let max_items = self.config.max_items;
        let count = limit.min(max_items.saturating_sub(start));
        let items = self.generate(parent, start, count);
        let has_more = start + count < max_items;
        let next_cursor = if has_more {
            items.last().map(|item| Cursor::after(&item.id))
        } else {
            None
        };
        tracing::debug!(%parent, start, count, has_more, "generated children page");

        Ok(ItemsData {
            items,
            next_cursor,
            has_more,
            loaded: true,
        })
    }

    fn fetch_content(&self, id: &ItemId) -> Result<ContentData, SourceError> {
        if id.as_str().is_empty() {
            return Err(SourceError::NotFound { id: id.clone() });
        }
        let jitter = if self.config.content_jitter_ms > 0 {
            rand::thread_rng().gen_range(0..self.config.content_jitter_ms)
        } else {
            0
        };
        self.simulate_latency(Duration::from_millis(self.config.content_latency_ms + jitter));
        self.roll_failure(id.as_str())?;

        let mut rng = self.seeds.rng_for("content", id, 0);
        Ok(ContentData {
            id: id.clone(),
            full_content: format!(
                "This is the detailed content for {id}. It contains comprehensive information about \
                 this item including its functionality, configuration options, and usage examples. \
                 This content is dynamically loaded when the item is selected."
            ),
            metrics: ContentMetrics {
                views: rng.gen_range(0..1000),
                last_accessed: Utc::now(),
                size_kb: rng.gen_range(50..550),
            },
            actions: CONTENT_ACTIONS.iter().map(|a| a.to_string()).collect(),
        })
    }
}
