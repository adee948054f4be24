/*!
 * Memory Types
 * Errors, statistics and pressure levels for the memory space
 */

use super::block::Block;
use super::sequence::EntryId;
use crate::core::limits::{
    CRITICAL_PRESSURE_THRESHOLD, MEDIUM_PRESSURE_THRESHOLD, WARNING_PRESSURE_THRESHOLD,
};
use crate::core::types::{Address, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sequence operation result
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Block sequence errors
///
/// All of these are caller precondition failures. The sequence is left
/// unmodified whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SequenceError {
    #[error("Index {index} out of range for sequence of length {len}")]
    #[diagnostic(
        code(sequence::index_out_of_range),
        help("Reads and removals need index < len; insertion also accepts index == len.")
    )]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(sequence::invalid_argument),
        help("The entry handle may be stale, or the sequence is empty.")
    )]
    InvalidArgument(String),

    #[error("Block {0} not found in sequence")]
    #[diagnostic(
        code(sequence::not_found),
        help("Removal matches blocks by value; check address and size.")
    )]
    NotFound(Block),
}

impl SequenceError {
    pub(crate) fn stale_entry(id: EntryId) -> Self {
        SequenceError::InvalidArgument(format!("entry {} is not part of this sequence", id))
    }

    pub(crate) fn empty() -> Self {
        SequenceError::InvalidArgument("sequence is empty".to_string())
    }
}

/// Memory space errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("No free block fits {requested} bytes (largest free block: {largest_free} bytes)")]
    #[diagnostic(
        code(memory::no_fit),
        help("The arena may be fragmented. Run compact() and retry.")
    )]
    NoFit { requested: Size, largest_free: Size },

    #[error("Invalid size: {0} bytes")]
    #[diagnostic(code(memory::invalid_size), help("Sizes must be greater than zero."))]
    InvalidSize(Size),

    #[error("Invalid memory address: 0x{0:x}")]
    #[diagnostic(
        code(memory::invalid_address),
        help("The address was never allocated or has already been released.")
    )]
    InvalidAddress(Address),

    #[error("Memory corruption detected at 0x{0:x}")]
    #[diagnostic(code(memory::corruption_detected))]
    CorruptionDetected(Address),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(memory::invalid_config))]
    InvalidConfig(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Sequence(#[from] SequenceError),
}

impl MemoryError {
    /// True for the ordinary "nothing fits" outcome, as opposed to a fault
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, MemoryError::NoFit { .. })
    }
}

/// Memory statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
    /// 0.0 when all free memory is one block, approaching 1.0 as it scatters
    pub fragmentation: f64,
    /// Usage ratio at which pressure becomes High
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,
    /// Usage ratio at which pressure becomes Critical
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: f64,
}

fn default_warning_threshold() -> f64 {
    WARNING_PRESSURE_THRESHOLD
}

fn default_critical_threshold() -> f64 {
    CRITICAL_PRESSURE_THRESHOLD
}

impl MemoryStats {
    /// Pressure level under the thresholds the space was configured with
    pub fn memory_pressure(&self) -> MemoryPressure {
        self.memory_pressure_with(self.warning_threshold, self.critical_threshold)
    }

    pub fn memory_pressure_with(&self, warning: f64, critical: f64) -> MemoryPressure {
        let ratio = self.usage_percentage / 100.0;
        if ratio >= critical {
            MemoryPressure::Critical
        } else if ratio >= warning {
            MemoryPressure::High
        } else if ratio >= MEDIUM_PRESSURE_THRESHOLD {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
