#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use apex_core::{ArrayHeap, PriorityQueue};
    use rand::{thread_rng, Rng};
    use rand_distr::Uniform;

    type K = i128;
    type V = i128;

    fn random_keys(num: usize) -> Vec<K> {
        let mut rng = thread_rng();
        let key_dist = Uniform::new(K::MIN, K::MAX);

        (&mut rng).sample_iter(key_dist).take(num).collect()
    }

    /// Push every key through the heap and pop until empty, comparing the
    /// extraction order against the standard library heap.
    fn check_extraction_order(num: usize) {
        let keys = random_keys(num);

        let mut heap: ArrayHeap<K, V> = ArrayHeap::empty();
        let mut oracle = BinaryHeap::new();

        for &key in &keys {
            heap.push(key, key);
            oracle.push(key);
        }

        assert_eq!(heap.len(), num);
        assert!(heap.is_valid());

        while let Some(expected) = oracle.pop() {
            assert_eq!(heap.pop(), Some(expected));
        }

        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    /// Interleave pushes and pops, tracking the expected size and checking
    /// the heap invariant as the structure churns.
    fn check_interleaved(num: usize) {
        let keys = random_keys(num);

        let mut heap: ArrayHeap<K, V> = ArrayHeap::empty();
        let mut expected_len = 0;

        for (round, &key) in keys.iter().enumerate() {
            heap.push(key, key);
            expected_len += 1;

            // Shrink every third round so the heap both grows and drains.
            if round % 3 == 2 {
                assert!(heap.pop().is_some());
                expected_len -= 1;
            }

            assert_eq!(heap.len(), expected_len);
        }

        assert!(heap.is_valid());

        let mut drained = Vec::new();
        while let Some(entry) = heap.pop_entry() {
            drained.push(entry.key);
        }

        assert_eq!(drained.len(), expected_len);
        assert!(drained.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    /// A heap built in one shot must drain identically to one built by
    /// repeated pushes.
    fn check_heapify(num: usize) {
        let keys = random_keys(num);

        let mut pushed: ArrayHeap<K, V> = ArrayHeap::empty();
        for &key in &keys {
            pushed.push(key, key);
        }

        let built: ArrayHeap<K, V> = keys.iter().map(|&key| (key, key)).collect();
        assert!(built.is_valid());

        let lhs: Vec<K> = pushed.into_sorted_vec().into_iter().map(|e| e.key).collect();
        let rhs: Vec<K> = built.into_sorted_vec().into_iter().map(|e| e.key).collect();
        assert_eq!(lhs, rhs);
    }

    /// Exercise a queue through the `PriorityQueue` interface alone.
    fn check_priority_queue<Q: PriorityQueue<K, V> + Default>(num: usize) {
        let keys = random_keys(num);
        let mut queue = Q::default();

        for &key in &keys {
            queue.push(key, key);
        }

        assert_eq!(queue.len(), num);
        assert!(!queue.is_empty());

        let mut last = *queue.peek().expect("populated queue has a maximum");
        while let Some(value) = queue.pop() {
            assert!(value <= last);
            last = value;
        }

        assert!(queue.is_empty());
    }

    /// Level-order construction round-trips through the entries view, and
    /// rebuilding from that view always succeeds.
    fn check_level_order_round_trip(num: usize) {
        let keys = random_keys(num);

        let heap: ArrayHeap<K, V> = keys.iter().map(|&key| (key, key)).collect();

        let layout_keys: Vec<K> = heap.entries().iter().map(|e| e.key).collect();
        let layout_values: Vec<V> = heap.entries().iter().map(|e| e.value).collect();

        let rebuilt = ArrayHeap::from_level_order(layout_keys, layout_values)
            .expect("a valid heap layout must be accepted");

        assert_eq!(rebuilt.len(), heap.len());
        assert_eq!(rebuilt.peek(), heap.peek());
    }

    #[test]
    fn test_extraction_order_small() {
        check_extraction_order(100);
    }

    #[test]
    fn test_extraction_order_large() {
        check_extraction_order(20_000);
    }

    #[test]
    fn test_interleaved_small() {
        check_interleaved(99);
    }

    #[test]
    fn test_interleaved_large() {
        check_interleaved(20_000);
    }

    #[test]
    fn test_heapify_small() {
        check_heapify(100);
    }

    #[test]
    fn test_heapify_large() {
        check_heapify(20_000);
    }

    #[test]
    fn test_priority_queue_interface() {
        check_priority_queue::<ArrayHeap<K, V>>(5_000);
    }

    #[test]
    fn test_level_order_round_trip() {
        check_level_order_round_trip(1_000);
    }
}
