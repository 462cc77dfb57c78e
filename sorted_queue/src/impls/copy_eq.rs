use crate::{node::Node, SortedPriorityQueue};
use std::fmt;

impl<T: Clone> Clone for SortedPriorityQueue<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.clone_from(self);
        copy
    }

    // the source is already sorted, so nodes are appended in chain order
    // instead of going through push
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        let mut tail = &mut self.head;
        for value in source {
            let node = tail.insert(Box::new(Node {
                value: value.clone(),
                next: None,
            }));
            tail = &mut node.next;
        }
        self.len = source.len;
    }
}

impl<T: PartialEq> PartialEq for SortedPriorityQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SortedPriorityQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for SortedPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
