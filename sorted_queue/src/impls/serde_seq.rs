use crate::SortedPriorityQueue;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Serialize> Serialize for SortedPriorityQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct QueueVisitor<T> {
    _marker: PhantomData<T>,
}

impl<'de, T: Deserialize<'de> + Ord> Visitor<'de> for QueueVisitor<T> {
    type Value = SortedPriorityQueue<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of queue elements")
    }

    // elements go through push, so the input does not have to be sorted
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut queue = SortedPriorityQueue::new();
        while let Some(value) = seq.next_element()? {
            queue.push(value);
        }
        Ok(queue)
    }
}

impl<'de, T: Deserialize<'de> + Ord> Deserialize<'de> for SortedPriorityQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(QueueVisitor {
            _marker: PhantomData,
        })
    }
}
