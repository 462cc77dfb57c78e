//! A priority queue that keeps every element in ascending order.
//!
//! Storage is a singly linked chain of boxed nodes; the head always holds the
//! minimum, so `top` and `pop` are O(1) while `push` walks the chain to find
//! the insertion point.

mod error;
mod impls;
mod iter;
mod node;

pub use error::{EmptyQueueError, ParseQueueError};
pub use iter::{IntoIter, Iter};
use node::{Link, Node};

pub struct SortedPriorityQueue<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SortedPriorityQueue<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn pop(&mut self) -> Result<T, EmptyQueueError> {
        let head = self.head.take().ok_or(EmptyQueueError)?;
        let Node { value, next } = *head;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn top(&self) -> Result<&T, EmptyQueueError> {
        self.head
            .as_deref()
            .map(|head| &head.value)
            .ok_or(EmptyQueueError)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        if self.len > 0 {
            tracing::trace!(released = self.len, "clearing queue");
        }
        node::unlink_all(self.head.take());
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref())
    }
}

impl<T: Ord> SortedPriorityQueue<T> {
    /// Inserts `value` behind every element that is less than it.
    ///
    /// A value equal to the head lands directly behind the head; anywhere
    /// else it lands in front of the existing run of equal values.
    pub fn push(&mut self, value: T) {
        let mut link = &mut self.head;
        if link.as_deref().is_some_and(|head| head.value <= value) {
            if let Some(head) = link {
                link = &mut head.next;
            }
            while link.as_deref().is_some_and(|node| node.value < value) {
                if let Some(node) = link {
                    link = &mut node.next;
                }
            }
        }
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
    }
}

impl<T: PartialEq> SortedPriorityQueue<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|candidate| candidate == value)
    }
}

impl<T> Default for SortedPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SortedPriorityQueue<T> {
    fn drop(&mut self) {
        node::unlink_all(self.head.take());
    }
}

#[cfg(test)]
mod tests;
