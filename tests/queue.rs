use std::collections::HashMap;

use incremental_paths::{
    error::QueueError,
    queue::{heap_queue::HeapMinQueue, MinQueue},
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Operation {
    AddOrUpdate(u8, u16),
    Remove,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (any::<u8>(), any::<u16>()).prop_map(|(key, priority)| Operation::AddOrUpdate(key, priority)),
        1 => Just(Operation::Remove),
    ]
}

/// Removes everything and returns the priorities in removal order.
fn drain_priorities(queue: &mut HeapMinQueue<u8, u16>) -> Vec<u16> {
    let mut priorities = Vec::new();
    while let Some((_, priority)) = queue.pop() {
        priorities.push(priority);
    }
    priorities
}

#[test]
fn string_keys() {
    let mut queue = HeapMinQueue::new();
    queue.add_or_update("x".to_string(), 5);
    queue.add_or_update("x".to_string(), 1);

    assert_eq!(queue.min_priority(), Ok(1));
    assert_eq!(queue.remove(), Ok("x".to_string()));
    assert_eq!(queue.get(), Err(QueueError::Empty));
}

#[test]
fn ties_are_all_returned() {
    let mut queue = HeapMinQueue::new();
    for key in 0..6u32 {
        queue.add_or_update(key, 4u64);
    }
    queue.add_or_update(9, 1);

    assert_eq!(queue.remove(), Ok(9));
    let mut tied = std::iter::from_fn(|| queue.remove().ok()).collect::<Vec<_>>();
    tied.sort();
    assert_eq!(tied, vec![0, 1, 2, 3, 4, 5]);
}

proptest! {
    #[test]
    fn invariant_holds_after_every_operation(operations in prop::collection::vec(operation(), 0..200)) {
        let mut queue = HeapMinQueue::new();
        let mut model: HashMap<u8, u16> = HashMap::new();

        for operation in operations {
            match operation {
                Operation::AddOrUpdate(key, priority) => {
                    queue.add_or_update(key, priority);
                    model.insert(key, priority);
                }
                Operation::Remove => match queue.remove() {
                    Ok(key) => {
                        let priority = model.remove(&key);
                        prop_assert!(priority.is_some());
                        prop_assert!(model.values().all(|other| Some(*other) >= priority));
                    }
                    Err(QueueError::Empty) => prop_assert!(model.is_empty()),
                },
            }

            prop_assert!(queue.check_invariant());
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.min_priority().ok(), model.values().min().copied());
        }
    }

    #[test]
    fn removal_order_is_non_decreasing(pairs in prop::collection::vec((any::<u8>(), any::<u16>()), 0..200)) {
        let mut queue = HeapMinQueue::new();
        let mut model: HashMap<u8, u16> = HashMap::new();
        for (key, priority) in pairs {
            queue.add_or_update(key, priority);
            model.insert(key, priority);
        }

        let mut last = None;
        while let Some((key, priority)) = queue.pop() {
            prop_assert_eq!(model.remove(&key), Some(priority));
            prop_assert!(last <= Some(priority));
            last = Some(priority);
        }
        prop_assert!(model.is_empty());
    }

    #[test]
    fn changing_and_restoring_priority_keeps_order(
        priorities in prop::collection::vec(any::<u16>(), 1..100),
        index in any::<prop::sample::Index>(),
        other_priority in any::<u16>(),
    ) {
        let mut reference = HeapMinQueue::new();
        let mut changed = HeapMinQueue::new();
        for (key, &priority) in priorities.iter().enumerate() {
            reference.add_or_update(key as u8, priority);
            changed.add_or_update(key as u8, priority);
        }

        let key = index.index(priorities.len());
        changed.add_or_update(key as u8, other_priority);
        prop_assert!(changed.check_invariant());
        changed.add_or_update(key as u8, priorities[key]);
        prop_assert!(changed.check_invariant());

        prop_assert_eq!(drain_priorities(&mut changed), drain_priorities(&mut reference));
    }
}
