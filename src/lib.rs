/*!
 * Memory Space Library
 * Simulated heap with first-fit allocation, block splitting and coalescing
 */

pub mod core;
pub mod memory;
pub mod monitoring;

// Re-exports
pub use crate::core::{Address, MemorySpaceConfig, Size};
pub use memory::{
    Allocator, Block, Entry, EntryId, MemoryError, MemoryInfo, MemoryPressure, MemoryResult,
    MemorySpace, MemoryStats, Sequence, SequenceError, SequenceResult, SharedMemorySpace,
};
pub use monitoring::{init_tracing, try_init_tracing};
