//! StaticPriorityQueue - max-heap without re-prioritization
//!
//! Same slot layout and sift routines as [`IndexedPriorityQueue`], minus
//! the position index: no uniqueness requirement and no in-place priority
//! changes. The cheaper option when priorities never change after enqueue.
//!
//! [`IndexedPriorityQueue`]: crate::indexed_queue::IndexedPriorityQueue

use crate::heap::{self, HeapSlot, Priority, QueueError};

/// Fixed-capacity max-heap
pub struct StaticPriorityQueue<T> {
    slots: Vec<HeapSlot<T>>,
    capacity: usize,
}

impl<T> StaticPriorityQueue<T> {
    /// Create a queue holding up to `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of enqueued entries
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Maximum number of entries
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the queue holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether the queue is at capacity
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Enqueue a value with the given priority
    ///
    /// Unlike the indexed queue, duplicate values are fine here.
    pub fn enqueue(&mut self, value: T, priority: Priority) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let slot = self.slots.len();
        self.slots.push(HeapSlot { priority, value });
        heap::sift_up(&mut self.slots, slot, |slots, a, b| slots.swap(a, b));
        Ok(())
    }

    /// Remove and return the highest-priority value
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.slots.is_empty() {
            return Err(QueueError::Empty);
        }
        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        let top = self.slots.pop().expect("queue checked non-empty");
        if !self.slots.is_empty() {
            heap::sift_down(&mut self.slots, 0, |slots, a, b| slots.swap(a, b));
        }
        Ok(top.value)
    }

    /// The highest priority currently enqueued
    pub fn peek(&self) -> Result<Priority, QueueError> {
        self.slots
            .first()
            .map(|slot| slot.priority)
            .ok_or(QueueError::Empty)
    }

    /// Drop every entry, keeping the slot storage allocated
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_queue_sorted_drain() {
        let mut queue = StaticPriorityQueue::new(8);
        for (value, priority) in [("a", 10), ("b", 5), ("c", 20), ("d", 1), ("e", 15)] {
            queue.enqueue(value, priority).unwrap();
        }

        assert_eq!(queue.peek(), Ok(20));
        let mut drained = Vec::new();
        while let Ok(value) = queue.dequeue() {
            drained.push(value);
        }
        assert_eq!(drained, vec!["c", "e", "a", "b", "d"]);
    }

    #[test]
    fn test_static_queue_capacity_boundary() {
        let mut queue = StaticPriorityQueue::new(2);
        queue.enqueue(1u32, 1).unwrap();
        queue.enqueue(2u32, 2).unwrap();

        assert_eq!(
            queue.enqueue(3u32, 3),
            Err(QueueError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_static_queue_empty_errors() {
        let mut queue: StaticPriorityQueue<u32> = StaticPriorityQueue::new(4);

        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
        assert_eq!(queue.peek(), Err(QueueError::Empty));
    }

    #[test]
    fn test_static_queue_allows_duplicates() {
        let mut queue = StaticPriorityQueue::new(4);
        queue.enqueue("hit", 3).unwrap();
        queue.enqueue("hit", 3).unwrap();
        queue.enqueue("hit", 7).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Ok("hit"));
        assert_eq!(queue.peek(), Ok(3));
    }

    #[test]
    fn test_static_queue_clear_and_reuse() {
        let mut queue = StaticPriorityQueue::new(3);
        queue.enqueue(1u32, 1).unwrap();
        queue.enqueue(2u32, 2).unwrap();

        queue.clear();
        assert!(queue.is_empty());

        queue.enqueue(9u32, 9).unwrap();
        assert_eq!(queue.dequeue(), Ok(9));
    }
}
