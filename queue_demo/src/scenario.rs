use rand::Rng;
use sorted_queue::SortedPriorityQueue;

/// Walks a queue through every operation, printing each step and asserting
/// the results along the way.
pub struct Scenario<R: Rng> {
    rng: R,
    count: usize,
    max_value: i32,
}

impl<R: Rng> Scenario<R> {
    // assumes max_value > 0
    pub fn new(rng: R, count: usize, max_value: i32) -> Self {
        Self {
            rng,
            count,
            max_value,
        }
    }

    fn push_random(&mut self, queue: &mut SortedPriorityQueue<i32>) {
        for _ in 0..self.count {
            queue.push(self.rng.gen_range(0..self.max_value));
        }
    }

    pub fn run(mut self) -> SortedPriorityQueue<i32> {
        let mut queue = SortedPriorityQueue::new();
        let mut other = SortedPriorityQueue::new();

        self.push_random(&mut queue);
        println!("{}", queue);
        assert_eq!(queue.len(), self.count);
        println!("size test");

        // one more pop than there are values
        for _ in 0..=self.count {
            if let Err(e) = queue.pop() {
                println!("error caught: {}", e);
            }
            println!("{}", queue);
        }

        match other.top() {
            Ok(top) => println!("top of empty queue returned {} instead of an error", top),
            Err(e) => println!("caught expected error: {}", e),
        }

        self.push_random(&mut queue);
        other.clone_from(&queue);
        assert_eq!(other.to_string(), queue.to_string());
        println!("copy test");
        println!("contents of queue: {}", queue);
        println!("contents of copy: {}", other);

        assert!(queue == other);
        println!("comparison test");

        queue.push(5);
        assert!(queue.contains(&5));
        println!("contains test");

        let serialized = queue.serialize();
        println!("serialization test {}", serialized);

        let restored = SortedPriorityQueue::<i32>::deserialize(&serialized);
        println!("deserialization test {}", restored);
        assert_eq!(restored, queue);
        restored
    }
}
