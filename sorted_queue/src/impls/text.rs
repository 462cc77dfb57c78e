//! Flat text encoding: `v1,v2,...,vn` in ascending order.
//!
//! Values are written with `Display` and read back with `FromStr`. There is
//! no escaping, so values whose text contains a comma do not survive the trip.

use crate::{ParseQueueError, SortedPriorityQueue};
use std::fmt;
use std::str::FromStr;

const DELIMITER: char = ',';

impl<T: fmt::Display> fmt::Display for SortedPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Display> SortedPriorityQueue<T> {
    pub fn serialize(&self) -> String {
        let mut text = String::new();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                text.push(DELIMITER);
            }
            text.push_str(&value.to_string());
        }
        text
    }
}

impl<T: Ord + FromStr> SortedPriorityQueue<T> {
    /// Builds a queue from text produced by [`serialize`](Self::serialize).
    ///
    /// Parsing stops at the first token that is not a valid `T`; the values
    /// read before it are kept and the rest of the text is ignored.
    pub fn deserialize(text: &str) -> Self {
        let mut queue = Self::new();
        for (index, token) in tokens(text).enumerate() {
            match token.parse() {
                Ok(value) => queue.push(value),
                Err(_) => {
                    tracing::debug!(index, token, "stopped reading queue text");
                    break;
                }
            }
        }
        queue
    }
}

impl<T: Ord + FromStr> SortedPriorityQueue<T>
where
    T::Err: fmt::Display,
{
    /// Like [`deserialize`](Self::deserialize) but fails on any bad token.
    pub fn try_deserialize(text: &str) -> Result<Self, ParseQueueError> {
        let mut queue = Self::new();
        for (index, token) in tokens(text).enumerate() {
            let value = token.parse().map_err(|e: T::Err| ParseQueueError {
                index,
                token: token.to_owned(),
                reason: e.to_string(),
            })?;
            queue.push(value);
        }
        Ok(queue)
    }
}

// blank text has no tokens at all, rather than one empty token
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    let text = text.trim();
    let count = if text.is_empty() { 0 } else { usize::MAX };
    text.split(DELIMITER).map(str::trim).take(count)
}
