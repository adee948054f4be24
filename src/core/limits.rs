/*!
 * System Limits and Constants
 *
 * Centralized location for arena defaults, thresholds, and environment keys.
 */

// =============================================================================
// ARENA LIMITS
// =============================================================================

/// Default simulated arena size (1MB)
/// Used when no explicit size is configured
pub const DEFAULT_ARENA_SIZE: usize = 1024 * 1024;

/// Initial slot capacity reserved by each block sequence
pub const DEFAULT_SEQUENCE_CAPACITY: usize = 16;

// =============================================================================
// MEMORY PRESSURE THRESHOLDS
// =============================================================================

/// Usage ratio at which pressure is reported as MEDIUM
pub const MEDIUM_PRESSURE_THRESHOLD: f64 = 0.60;

/// Usage ratio at which pressure is reported as HIGH
pub const WARNING_PRESSURE_THRESHOLD: f64 = 0.80;

/// Usage ratio at which pressure is reported as CRITICAL
pub const CRITICAL_PRESSURE_THRESHOLD: f64 = 0.95;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Overrides the arena size used by `MemorySpaceConfig::from_env`
pub const ENV_TOTAL_SIZE: &str = "MEMSPACE_TOTAL_SIZE";

/// Enables automatic compaction every N releases (0 disables)
pub const ENV_AUTO_COMPACT: &str = "MEMSPACE_AUTO_COMPACT";

/// Switches tracing output to JSON when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "MEMSPACE_TRACE_JSON";
