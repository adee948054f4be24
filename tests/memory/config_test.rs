/*!
 * Memory Space Configuration Tests
 * Environment overrides and serde round trips
 */

use memory_space::core::limits::{DEFAULT_ARENA_SIZE, ENV_AUTO_COMPACT, ENV_TOTAL_SIZE};
use memory_space::{MemoryError, MemorySpace, MemorySpaceConfig, SharedMemorySpace};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;

fn clear_env() {
    env::remove_var(ENV_TOTAL_SIZE);
    env::remove_var(ENV_AUTO_COMPACT);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = MemorySpaceConfig::from_env();

    assert_eq!(config, MemorySpaceConfig::default());
    assert_eq!(config.total_size, DEFAULT_ARENA_SIZE);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var(ENV_TOTAL_SIZE, "4096");
    env::set_var(ENV_AUTO_COMPACT, "8");

    let config = MemorySpaceConfig::from_env();
    clear_env();

    assert_eq!(config.total_size, 4096);
    assert_eq!(config.auto_compact_interval, Some(8));

    let space = MemorySpace::with_config(config).unwrap();
    assert_eq!(space.total_size(), 4096);
}

#[test]
#[serial]
fn test_from_env_ignores_bad_values() {
    clear_env();
    env::set_var(ENV_TOTAL_SIZE, "lots");
    env::set_var(ENV_AUTO_COMPACT, "0");

    let config = MemorySpaceConfig::from_env();
    clear_env();

    assert_eq!(config.total_size, DEFAULT_ARENA_SIZE);
    assert_eq!(config.auto_compact_interval, None);
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: MemorySpaceConfig =
        serde_json::from_str(r#"{ "total_size": 512, "auto_compact_interval": 3 }"#).unwrap();

    assert_eq!(config.total_size, 512);
    assert_eq!(config.auto_compact_interval, Some(3));
    assert_eq!(
        config.warning_threshold,
        MemorySpaceConfig::default().warning_threshold
    );
}

#[test]
fn test_invalid_config_rejected_by_constructors() {
    let config = MemorySpaceConfig::new().with_thresholds(1.5, 2.0);

    assert!(matches!(
        MemorySpace::with_config(config.clone()),
        Err(MemoryError::InvalidConfig(_))
    ));
    assert!(matches!(
        SharedMemorySpace::with_config(config),
        Err(MemoryError::InvalidConfig(_))
    ));
}
