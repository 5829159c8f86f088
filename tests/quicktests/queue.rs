use classic_ds::error::QueueError;
use classic_ds::queue::BoundedQueue;

#[quickcheck]
fn fill_then_drain_is_fifo(xs: Vec<u32>) -> bool {
    if xs.is_empty() {
        return matches!(
            BoundedQueue::<u32>::new(0),
            Err(QueueError::ZeroCapacity)
        );
    }

    let mut queue = BoundedQueue::new(xs.len()).unwrap();
    for x in &xs {
        if queue.is_full() || queue.enqueue(*x).is_err() {
            return false;
        }
    }

    // One past capacity is handed back and nothing moves.
    let full = queue.is_full() && queue.enqueue(u32::MAX) == Err(QueueError::Full(u32::MAX));
    let unchanged = queue.iter().eq(xs.iter());

    let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
    full && unchanged && drained == xs && queue.dequeue().is_none() && queue.is_empty()
}

#[quickcheck]
fn wraps_around_many_times(rounds: u8) -> bool {
    let mut queue = BoundedQueue::new(3).unwrap();
    queue.enqueue(0u32).unwrap();

    // Keep one item in flight so front and rear lap the buffer.
    for n in 1..=u32::from(rounds) {
        if queue.enqueue(n).is_err() || queue.dequeue() != Some(n - 1) || queue.len() != 1 {
            return false;
        }
    }

    queue.peek() == Some(&u32::from(rounds))
}
