/*!
 * Shared Memory Space
 * One exclusive lock around a memory space for concurrent callers
 */

use super::MemorySpace;
use crate::core::config::MemorySpaceConfig;
use crate::core::types::{Address, Size};
use crate::memory::traits::{Allocator, MemoryInfo};
use crate::memory::types::{MemoryPressure, MemoryResult, MemoryStats};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::instrument;

/// Cloneable handle to a memory space guarded by a single mutex
///
/// An allocation can touch the free and the allocated list in one step, so
/// both lists sit behind the same lock and every operation holds it until
/// it completes. Callers never observe a half-split block.
#[derive(Debug, Clone)]
pub struct SharedMemorySpace {
    inner: Arc<Mutex<MemorySpace>>,
}

impl SharedMemorySpace {
    pub fn new(total_size: Size) -> MemoryResult<Self> {
        MemorySpace::new(total_size).map(Self::from)
    }

    pub fn with_config(config: MemorySpaceConfig) -> MemoryResult<Self> {
        MemorySpace::with_config(config).map(Self::from)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn allocate(&self, size: Size) -> MemoryResult<Address> {
        self.inner.lock().allocate(size)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn release(&self, address: Address) -> MemoryResult<()> {
        self.inner.lock().release(address)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn compact(&self) -> usize {
        self.inner.lock().compact()
    }

    /// Allocate, compacting once and retrying if nothing fits
    #[instrument(level = "debug", skip(self))]
    pub fn allocate_or_compact(&self, size: Size) -> MemoryResult<Address> {
        let mut space = self.inner.lock();
        match space.allocate(size) {
            Err(err) if err.is_exhaustion() => {
                space.compact();
                space.allocate(size)
            }
            result => result,
        }
    }

    pub fn is_allocated(&self, address: Address) -> bool {
        self.inner.lock().is_allocated(address)
    }

    pub fn block_size(&self, address: Address) -> Option<Size> {
        self.inner.lock().block_size(address)
    }

    pub fn stats(&self) -> MemoryStats {
        self.inner.lock().stats()
    }

    pub fn pressure(&self) -> MemoryPressure {
        self.inner.lock().pressure()
    }

    /// Run `f` against a consistent view of the space
    pub fn with_space<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&MemorySpace) -> R,
    {
        f(&*self.inner.lock())
    }

    /// Take the space back if this is the last handle
    pub fn try_unwrap(self) -> Result<MemorySpace, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<MemorySpace> for SharedMemorySpace {
    fn from(space: MemorySpace) -> Self {
        Self {
            inner: Arc::new(Mutex::new(space)),
        }
    }
}

impl Allocator for SharedMemorySpace {
    fn allocate(&mut self, size: Size) -> MemoryResult<Address> {
        SharedMemorySpace::allocate(self, size)
    }

    fn release(&mut self, address: Address) -> MemoryResult<()> {
        SharedMemorySpace::release(self, address)
    }

    fn compact(&mut self) -> usize {
        SharedMemorySpace::compact(self)
    }

    fn is_allocated(&self, address: Address) -> bool {
        SharedMemorySpace::is_allocated(self, address)
    }

    fn block_size(&self, address: Address) -> Option<Size> {
        SharedMemorySpace::block_size(self, address)
    }
}

impl MemoryInfo for SharedMemorySpace {
    fn stats(&self) -> MemoryStats {
        SharedMemorySpace::stats(self)
    }

    fn pressure(&self) -> MemoryPressure {
        SharedMemorySpace::pressure(self)
    }
}
