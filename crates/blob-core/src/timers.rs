//! Millisecond timer queue for driving the UI state machines off the DOM.
//!
//! The browser front-end hands scheduled work to `setTimeout`; host tests and
//! the native preview advance a `TimerQueue` instead and get the same ordering.

use smallvec::SmallVec;

#[derive(Clone, Debug)]
struct Pending<T> {
    due_ms: u64,
    seq: u64,
    item: T,
}

#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queue `item` to fire `delay_ms` after the current time.
    pub fn schedule(&mut self, delay_ms: u32, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due_ms: self.now_ms + delay_ms as u64,
            seq,
            item,
        });
    }

    /// Move time forward and return everything that came due, earliest first.
    /// Items due at the same instant come out in scheduling order.
    pub fn advance(&mut self, dt_ms: u32) -> SmallVec<[T; 4]> {
        self.now_ms += dt_ms as u64;
        let now = self.now_ms;
        let mut due: Vec<Pending<T>> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_ms <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|p| (p.due_ms, p.seq));
        due.into_iter().map(|p| p.item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_then_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(300, "c");
        q.schedule(100, "a");
        q.schedule(100, "b");
        assert!(q.advance(99).is_empty());
        assert_eq!(q.advance(1).as_slice(), &["a", "b"]);
        assert!(q.advance(199).is_empty());
        assert_eq!(q.advance(1).as_slice(), &["c"]);
        assert!(q.is_empty());
    }

    #[test]
    fn schedule_is_relative_to_now() {
        let mut q = TimerQueue::new();
        q.advance(1_000);
        q.schedule(50, 1u8);
        assert!(q.advance(49).is_empty());
        assert_eq!(q.advance(1).into_vec(), vec![1]);
        assert_eq!(q.now_ms(), 1_050);
    }
}
