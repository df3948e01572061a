#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ppga::{HeapOrder, PriorityQueue};

/// One queue operation.
#[derive(Arbitrary, Debug)]
enum Op {
    Push { element: u8, priority: i16 },
    Pop,
    Remove { element: u8 },
    Clear,
}

/// Structured input for queue fuzzing.
#[derive(Arbitrary, Debug)]
struct QueueInput {
    /// Pop the largest priority first.
    max: bool,
    /// Operations to apply in order.
    ops: Vec<Op>,
}

fuzz_target!(|input: QueueInput| {
    let order = if input.max { HeapOrder::Max } else { HeapOrder::Min };
    let mut queue = PriorityQueue::new(order);
    // Reference multiset of (element, priority)
    let mut model: Vec<(u8, i16)> = Vec::new();

    for op in input.ops.into_iter().take(512) {
        match op {
            Op::Push { element, priority } => {
                queue.push(element, priority);
                model.push((element, priority));
            }
            Op::Pop => {
                let popped = queue.pop();
                let best = match order {
                    HeapOrder::Min => model.iter().map(|&(_, p)| p).min(),
                    HeapOrder::Max => model.iter().map(|&(_, p)| p).max(),
                };
                assert_eq!(popped.as_ref().map(|node| node.priority), best);
                if let Some(node) = popped {
                    let index = model
                        .iter()
                        .position(|&entry| entry == (node.element, node.priority))
                        .expect("popped node missing from model");
                    model.swap_remove(index);
                }
            }
            Op::Remove { element } => {
                let removed = queue.remove(&element);
                assert_eq!(removed.is_some(), model.iter().any(|&(e, _)| e == element));
                if let Some(node) = removed {
                    let index = model
                        .iter()
                        .position(|&entry| entry == (node.element, node.priority))
                        .expect("removed node missing from model");
                    model.swap_remove(index);
                }
            }
            Op::Clear => {
                queue.clear();
                model.clear();
            }
        }
        assert_eq!(queue.len(), model.len());
    }
});
