/// Items stored in a [`PriorityQueue`] decide their own ordering.
pub trait Priority {
    /// Returns true when `self` should be popped before `other`.
    fn higher_priority(&self, other: &Self) -> bool;
}

/// Binary-heap priority queue over items carrying a [`Priority`] capability.
///
/// Ties are broken by heap order, which is deterministic for a given push
/// sequence but unrelated to insertion order.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    items: Vec<T>,
}

impl<T: Priority> PriorityQueue<T> {
    /// Create an empty priority queue
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of items currently queued
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Check whether the queue holds no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert an item in O(log n)
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the highest-priority item in O(log n).
    ///
    /// Returns `None` on an empty queue; callers are expected to check
    /// `size()` first when emptiness would be a logic error on their side.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let item = self.items.pop();

        if !self.items.is_empty() {
            self.sift_down(0);
        }

        item
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.items[idx].higher_priority(&self.items[parent]) {
                self.items.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut best = idx;

            if left < len && self.items[left].higher_priority(&self.items[best]) {
                best = left;
            }
            if right < len && self.items[right].higher_priority(&self.items[best]) {
                best = right;
            }
            if best == idx {
                break;
            }

            self.items.swap(idx, best);
            idx = best;
        }
    }
}

impl<T: Priority> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Weighted {
        weight: i32,
    }

    impl Priority for Weighted {
        fn higher_priority(&self, other: &Self) -> bool {
            self.weight > other.weight
        }
    }

    #[test]
    fn test_pop_returns_descending_priorities() {
        let mut queue = PriorityQueue::new();
        let mut expected = Vec::new();

        for i in 0..10 {
            let weight = (i + 1) * 5;
            expected.push(weight);
            queue.push(Weighted { weight });
        }
        assert_eq!(queue.size(), 10);

        expected.sort();
        for &weight in expected.iter().rev() {
            let item = queue.pop().expect("queue drained early");
            assert_eq!(item.weight, weight);
        }

        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut queue: PriorityQueue<Weighted> = PriorityQueue::new();
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut queue = PriorityQueue::new();
        queue.push(Weighted { weight: 3 });
        queue.push(Weighted { weight: 8 });

        assert_eq!(queue.pop().unwrap().weight, 8);

        queue.push(Weighted { weight: 1 });
        queue.push(Weighted { weight: 5 });

        assert_eq!(queue.pop().unwrap().weight, 5);
        assert_eq!(queue.pop().unwrap().weight, 3);
        assert_eq!(queue.pop().unwrap().weight, 1);
        assert!(queue.pop().is_none());
    }
}
