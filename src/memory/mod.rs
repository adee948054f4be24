/*!
 * Memory Module
 * Block sequences and the simulated heap built on them
 */

pub mod block;
pub mod sequence;
pub mod space;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use block::Block;
pub use sequence::{Blocks, Entry, EntryId, Iter, Sequence};
pub use space::{MemorySpace, SharedMemorySpace};
pub use traits::*;
pub use types::*;
