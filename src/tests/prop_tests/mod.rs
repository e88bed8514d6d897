use std::collections::HashMap;

use proptest::prelude::*;

use crate::data_structures::frontier::MinPriorityQueue;
use crate::game_tree_search::Score;

const CASES: u32 = 256;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn priority_queue_pops_every_item_once_in_priority_order(
        entries in proptest::collection::vec((0u8..20, 0i32..100), 0..60),
    ) {
        let mut q = MinPriorityQueue::new();
        let mut expected: HashMap<u8, i32> = HashMap::new();
        for &(item, priority) in &entries {
            q.push(item, priority);
            expected
                .entry(item)
                .and_modify(|p| *p = (*p).min(priority))
                .or_insert(priority);
        }
        prop_assert_eq!(expected.len(), q.len());

        let mut last = i32::MIN;
        let mut popped = 0;
        while let Some((item, priority)) = q.pop() {
            prop_assert!(priority >= last);
            last = priority;
            // Decrease-key keeps exactly the lowest priority pushed per item.
            prop_assert_eq!(Some(&priority), expected.get(&item));
            popped += 1;
        }
        prop_assert_eq!(expected.len(), popped);
    }

    #[test]
    fn score_sentinels_bracket_every_finite_score(value in -1e9f64..1e9f64) {
        let score = Score::new(value);
        prop_assert!(Score::NEG_INF < score);
        prop_assert!(score < Score::INF);
    }
}
