use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

fn chain_values<T: Copy>(queue: &SortedPriorityQueue<T>) -> Vec<T> {
    let mut values = vec![];
    let mut link = queue.head.as_deref();
    while let Some(node) = link {
        values.push(node.value);
        link = node.next.as_deref();
    }
    values
}

#[test]
fn chain_stays_sorted_and_counted_after_every_push() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut queue = SortedPriorityQueue::new();
    for _ in 0..300 {
        queue.push(rng.gen_range(-50..50));
        let values = chain_values(&queue);
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(values.len(), queue.len());
    }
}

#[test]
fn len_tracks_chain_through_mixed_operations() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut queue = SortedPriorityQueue::new();
    for _ in 0..500 {
        if rng.gen_bool(0.6) {
            queue.push(rng.gen_range(0..20u8));
        } else {
            let _ = queue.pop();
        }
        assert_eq!(chain_values(&queue).len(), queue.len());
        assert_eq!(queue.is_empty(), queue.head.is_none());
    }
}

#[test]
fn pop_on_empty_leaves_queue_untouched() {
    let mut queue: SortedPriorityQueue<i32> = SortedPriorityQueue::new();
    assert_eq!(queue.pop(), Err(EmptyQueueError));
    assert_eq!(queue.len(), 0);
    assert!(queue.head.is_none());
}

// ordered by `key` only, so `tag` shows where equal keys were placed
#[derive(Debug, Clone, Copy)]
struct Keyed {
    key: u32,
    tag: char,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn tags(queue: &SortedPriorityQueue<Keyed>) -> String {
    chain_values(queue).iter().map(|keyed| keyed.tag).collect()
}

#[test]
fn value_equal_to_head_goes_directly_behind_head() {
    let mut queue = SortedPriorityQueue::new();
    queue.push(Keyed { key: 4, tag: 'a' });
    queue.push(Keyed { key: 4, tag: 'b' });
    queue.push(Keyed { key: 4, tag: 'c' });
    assert_eq!(tags(&queue), "acb");
}

#[test]
fn value_equal_to_inner_run_goes_in_front_of_run() {
    let mut queue = SortedPriorityQueue::new();
    queue.push(Keyed { key: 1, tag: 'h' });
    queue.push(Keyed { key: 4, tag: 'a' });
    queue.push(Keyed { key: 4, tag: 'b' });
    queue.push(Keyed { key: 9, tag: 'z' });
    assert_eq!(tags(&queue), "hbaz");
}

#[test]
fn smaller_value_replaces_head() {
    let mut queue = SortedPriorityQueue::new();
    queue.push(Keyed { key: 4, tag: 'a' });
    queue.push(Keyed { key: 2, tag: 'b' });
    assert_eq!(tags(&queue), "ba");
    assert_eq!(queue.top().map(|keyed| keyed.tag), Ok('b'));
}

#[test]
fn long_chain_is_released_without_recursion() {
    let mut queue = SortedPriorityQueue::new();
    // descending input always lands at the head, so building stays linear
    for value in (0..200_000u32).rev() {
        queue.push(value);
    }
    assert_eq!(queue.len(), 200_000);
    let copy = queue.clone();
    assert_eq!(copy.len(), 200_000);
    queue.clear();
    assert!(queue.head.is_none());
    drop(copy);
}

#[test]
fn clone_from_discards_previous_contents() {
    let source: SortedPriorityQueue<i32> = [3, 1, 2].into_iter().collect();
    let mut target: SortedPriorityQueue<i32> = [10, 20, 30, 40].into_iter().collect();
    target.clone_from(&source);
    assert_eq!(chain_values(&target), vec![1, 2, 3]);
    assert_eq!(target.len(), 3);
}
