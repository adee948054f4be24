/*!
 * Memory Space Property Tests
 * Conservation, first-fit and sort properties over random workloads
 */

use memory_space::{Block, MemorySpace, Sequence};
use proptest::prelude::*;

const ARENA: usize = 256;

#[derive(Debug, Clone)]
enum Op {
    Allocate(usize),
    Release(usize),
    Compact,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (1usize..64).prop_map(Op::Allocate),
        3 => any::<usize>().prop_map(Op::Release),
        1 => Just(Op::Compact),
    ]
}

fn conserved(space: &MemorySpace) -> bool {
    space.free_blocks().total_size() + space.allocated_blocks().total_size() == ARENA
}

proptest! {
    #[test]
    fn prop_conservation_and_tiling(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let mut space = MemorySpace::new(ARENA).unwrap();

        for op in ops {
            match op {
                Op::Allocate(size) => { let _ = space.allocate(size); }
                Op::Release(pick) => {
                    let live = space.allocated_blocks().to_vec();
                    if !live.is_empty() {
                        let block = live[pick % live.len()];
                        prop_assert!(space.release(block.address).is_ok());
                    }
                }
                Op::Compact => { space.compact(); }
            }

            prop_assert!(conserved(&space));
            prop_assert!(space.check_invariants().is_ok());
        }
    }

    #[test]
    fn prop_first_fit_choice(ops in prop::collection::vec(op_strategy(), 1..60), request in 1usize..128) {
        let mut space = MemorySpace::new(ARENA).unwrap();
        for op in ops {
            match op {
                Op::Allocate(size) => { let _ = space.allocate(size); }
                Op::Release(pick) => {
                    let live = space.allocated_blocks().to_vec();
                    if !live.is_empty() {
                        let _ = space.release(live[pick % live.len()].address);
                    }
                }
                Op::Compact => { space.compact(); }
            }
        }

        let before = space.free_blocks().to_vec();
        let chosen = before.iter().position(|block| block.size >= request);

        match (space.allocate(request), chosen) {
            (Ok(address), Some(index)) => {
                let original = before[index];
                prop_assert_eq!(address, original.address);
                prop_assert!(original.contains(address));

                let after = space.free_blocks().to_vec();
                if original.size == request {
                    prop_assert_eq!(after.len(), before.len() - 1);
                    prop_assert!(!after.contains(&original));
                } else {
                    prop_assert_eq!(
                        after[index],
                        Block::new(original.address + request, original.size - request)
                    );
                }
            }
            (Err(err), None) => prop_assert!(err.is_exhaustion()),
            (result, chosen) => prop_assert!(false, "allocate returned {:?} with first fit at {:?}", result, chosen),
        }
    }

    #[test]
    fn prop_sort_is_stable(addresses in prop::collection::vec(0usize..8, 0..40)) {
        // Sizes record the insertion order so ties can be told apart.
        let input: Vec<Block> = addresses
            .iter()
            .enumerate()
            .map(|(order, address)| Block::new(*address, order + 1))
            .collect();

        let mut sequence: Sequence = input.iter().copied().collect();
        sequence.sort();

        let mut expected = input.clone();
        expected.sort_by_key(|block| block.address);

        prop_assert_eq!(sequence.len(), input.len());
        prop_assert_eq!(sequence.to_vec(), expected);
    }

    #[test]
    fn prop_remove_value_drops_one_duplicate(copies in 2usize..6, others in 0usize..4) {
        let duplicate = Block::new(100, 10);
        let mut sequence: Sequence = (0..others).map(|i| Block::new(i * 10, 10)).collect();
        for _ in 0..copies {
            sequence.push_back(duplicate);
        }

        prop_assert!(sequence.remove_value(&duplicate).is_ok());
        prop_assert_eq!(sequence.len(), others + copies - 1);
        prop_assert_eq!(
            sequence.blocks().filter(|block| *block == duplicate).count(),
            copies - 1
        );
    }
}
