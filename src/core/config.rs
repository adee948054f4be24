/*!
 * Memory Space Configuration
 *
 * Arena size, pressure thresholds and compaction policy, with
 * environment overrides for hosts that do not build the config in code.
 */

use super::limits::{
    CRITICAL_PRESSURE_THRESHOLD, DEFAULT_ARENA_SIZE, ENV_AUTO_COMPACT, ENV_TOTAL_SIZE,
    WARNING_PRESSURE_THRESHOLD,
};
use super::types::Size;
use crate::memory::{MemoryError, MemoryResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration for a memory space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorySpaceConfig {
    /// Total arena size in bytes (default: 1MB)
    pub total_size: Size,

    /// Usage ratio reported as HIGH pressure (default: 0.80)
    pub warning_threshold: f64,

    /// Usage ratio reported as CRITICAL pressure (default: 0.95)
    pub critical_threshold: f64,

    /// Compact the free list after this many releases (default: never)
    pub auto_compact_interval: Option<u64>,
}

impl MemorySpaceConfig {
    pub fn new() -> Self {
        Self {
            total_size: DEFAULT_ARENA_SIZE,
            warning_threshold: WARNING_PRESSURE_THRESHOLD,
            critical_threshold: CRITICAL_PRESSURE_THRESHOLD,
            auto_compact_interval: None,
        }
    }

    /// Build a configuration from `MEMSPACE_*` environment variables
    ///
    /// Missing variables keep their defaults. Unparsable values are logged
    /// and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Some(total_size) = read_env::<Size>(ENV_TOTAL_SIZE) {
            if total_size > 0 {
                config.total_size = total_size;
            } else {
                warn!("{} must be positive, keeping {} bytes", ENV_TOTAL_SIZE, config.total_size);
            }
        }

        if let Some(interval) = read_env::<u64>(ENV_AUTO_COMPACT) {
            config.auto_compact_interval = (interval > 0).then_some(interval);
        }

        config
    }

    pub fn with_total_size(mut self, total_size: Size) -> Self {
        self.total_size = total_size;
        self
    }

    pub fn with_thresholds(mut self, warning: f64, critical: f64) -> Self {
        self.warning_threshold = warning;
        self.critical_threshold = critical;
        self
    }

    /// Compact automatically after every `interval` releases
    pub fn with_auto_compact(mut self, interval: u64) -> Self {
        self.auto_compact_interval = (interval > 0).then_some(interval);
        self
    }

    pub fn validate(&self) -> MemoryResult<()> {
        if self.total_size == 0 {
            return Err(MemoryError::InvalidSize(self.total_size));
        }

        let in_unit_range = |value: f64| value > 0.0 && value <= 1.0;
        if !in_unit_range(self.warning_threshold) || !in_unit_range(self.critical_threshold) {
            return Err(MemoryError::InvalidConfig(format!(
                "pressure thresholds must lie in (0, 1], got warning={} critical={}",
                self.warning_threshold, self.critical_threshold
            )));
        }

        if self.warning_threshold > self.critical_threshold {
            return Err(MemoryError::InvalidConfig(format!(
                "warning threshold {} exceeds critical threshold {}",
                self.warning_threshold, self.critical_threshold
            )));
        }

        Ok(())
    }
}

impl Default for MemorySpaceConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparsable value {:?} for {}", raw, key);
            None
        }
    }
}
