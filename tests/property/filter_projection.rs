//! Property-based tests for the filtered-view projection.
//!
//! Uses proptest to verify, for arbitrary collections:
//! 1. Each filter yields exactly the matching tasks, in collection order.
//! 2. Projecting twice gives the same view as projecting once.
//! 3. `Completed` and `Pending` partition `All`.

use proptest::prelude::*;
use taskboard_proto::{Filter, Task, TaskId};

/// Strategy for generating arbitrary `Task` values with unique ids.
fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(("[a-z]{1,12}", any::<bool>(), "low|medium|high"), 0..40).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, done, priority))| Task {
                    id: TaskId::new(i.to_string()),
                    name,
                    description: "generated".into(),
                    done,
                    priority,
                })
                .collect()
        },
    )
}

/// Strategy for generating arbitrary `Filter` values.
fn arb_filter() -> impl Strategy<Value = Filter> {
    prop_oneof![
        Just(Filter::All),
        Just(Filter::Completed),
        Just(Filter::Pending)
    ]
}

proptest! {
    #[test]
    fn view_is_matching_subsequence_in_order(tasks in arb_tasks(), filter in arb_filter()) {
        let view = filter.apply(&tasks);
        let expected: Vec<&Task> = tasks.iter().filter(|t| match filter {
            Filter::All => true,
            Filter::Completed => t.done,
            Filter::Pending => !t.done,
        }).collect();
        prop_assert_eq!(view, expected);
    }

    #[test]
    fn projection_is_idempotent(tasks in arb_tasks(), filter in arb_filter()) {
        let once = filter.apply(&tasks);
        let owned: Vec<Task> = once.iter().map(|t| (*t).clone()).collect();
        let twice = filter.apply(&owned);
        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            prop_assert_eq!(*a, *b);
        }
    }

    #[test]
    fn completed_and_pending_partition_all(tasks in arb_tasks()) {
        let all = Filter::All.apply(&tasks);
        let completed = Filter::Completed.apply(&tasks);
        let pending = Filter::Pending.apply(&tasks);
        prop_assert_eq!(all.len(), tasks.len());
        prop_assert_eq!(completed.len() + pending.len(), all.len());
        prop_assert!(completed.iter().all(|t| t.done));
        prop_assert!(pending.iter().all(|t| !t.done));
    }
}
