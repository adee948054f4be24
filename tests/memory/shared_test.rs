/*!
 * Shared Memory Space Tests
 * Concurrent callers serialized by the space lock
 */

use memory_space::{try_init_tracing, Block, MemoryError, SharedMemorySpace};
use pretty_assertions::assert_eq;
use std::thread;

#[test]
fn test_concurrent_allocations_do_not_overlap() {
    try_init_tracing();
    let space = SharedMemorySpace::new(8 * 100 * 16).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let space = space.clone();
            thread::spawn(move || {
                (0..100)
                    .map(|_| space.allocate(16).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut addresses: Vec<_> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    addresses.sort_unstable();
    addresses.dedup();

    assert_eq!(addresses.len(), 800);
    assert!(space.with_space(|space| space.free_blocks().is_empty()));
    assert!(space.allocate(1).unwrap_err().is_exhaustion());
}

#[test]
fn test_concurrent_release_then_compact_restores_arena() {
    let space = SharedMemorySpace::new(4 * 64).unwrap();
    let addresses: Vec<_> = (0..16).map(|_| space.allocate(16).unwrap()).collect();

    let handles: Vec<_> = addresses
        .chunks(4)
        .map(|chunk| {
            let space = space.clone();
            let chunk = chunk.to_vec();
            thread::spawn(move || {
                for address in chunk {
                    space.release(address).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(space.compact(), 15);
    space.with_space(|space| {
        assert_eq!(space.free_blocks().to_vec(), vec![Block::new(0, 256)]);
        assert!(space.check_invariants().is_ok());
    });
}

#[test]
fn test_allocate_or_compact_retries_once() {
    let space = SharedMemorySpace::new(30).unwrap();
    let a = space.allocate(10).unwrap();
    let b = space.allocate(10).unwrap();
    space.allocate(10).unwrap();
    space.release(b).unwrap();
    space.release(a).unwrap();

    assert!(space.allocate(20).unwrap_err().is_exhaustion());
    assert_eq!(space.allocate_or_compact(20), Ok(0));
    assert_eq!(
        space.allocate_or_compact(1),
        Err(MemoryError::NoFit {
            requested: 1,
            largest_free: 0
        })
    );
}

#[test]
fn test_try_unwrap_returns_space_for_last_handle() {
    let space = SharedMemorySpace::new(10).unwrap();
    let other = space.clone();

    let space = space.try_unwrap().unwrap_err();
    drop(other);

    let inner = space.try_unwrap().unwrap();
    assert_eq!(inner.total_size(), 10);
}
