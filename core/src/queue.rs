use crate::ArrayHeap;

/// Interface of a queue which always surrenders its highest-priority entry
/// first.
///
/// Implementations decide what "highest" means through the ordering of `K`;
/// [`ArrayHeap`] treats the largest key as the highest priority.
pub trait PriorityQueue<K, V> {
    /// Insert a key-value pair into the queue
    fn push(&mut self, key: K, value: V);

    /// Remove and return the value with the highest priority, or `None` if
    /// the queue is empty
    fn pop(&mut self) -> Option<V>;

    /// Borrow the value with the highest priority without removing it
    fn peek(&self) -> Option<&V>;

    /// Number of entries in the queue
    fn len(&self) -> usize;

    /// Returns `true` if the queue holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Ord, V> PriorityQueue<K, V> for ArrayHeap<K, V> {
    fn push(&mut self, key: K, value: V) {
        ArrayHeap::push(self, key, value);
    }

    fn pop(&mut self) -> Option<V> {
        ArrayHeap::pop(self)
    }

    fn peek(&self) -> Option<&V> {
        ArrayHeap::peek(self)
    }

    fn len(&self) -> usize {
        ArrayHeap::len(self)
    }
}
