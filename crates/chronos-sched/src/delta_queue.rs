use std::collections::VecDeque;

use crate::command::Tick;
use crate::error::{SchedError, SchedResult};

/// A queue node: one payload and its offset from the node before it.
#[derive(Debug)]
struct Event<T> {
    delta: Tick,
    payload: T,
}

/// A time-ordered delta list.
///
/// Each node stores only the ticks between its predecessor and itself, so the
/// head's delta is the time until the next firing and popping the head never
/// touches the rest of the list. Entries with equal fire times leave in the
/// order they were inserted.
#[derive(Debug)]
pub struct DeltaQueue<T> {
    events: VecDeque<Event<T>>,
}

impl<T> Default for DeltaQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeltaQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Insert `item` to fire `delay` ticks from now. Returns its position.
    pub fn insert(&mut self, delay: Tick, item: T) -> usize {
        let mut remaining = delay;
        let mut pos = 0;
        // `<=` walks past equal deltas, which keeps ties FIFO.
        for event in &self.events {
            if event.delta > remaining {
                break;
            }
            remaining -= event.delta;
            pos += 1;
        }

        if let Some(successor) = self.events.get_mut(pos) {
            successor.delta -= remaining;
        }
        self.events.insert(
            pos,
            Event {
                delta: remaining,
                payload: item,
            },
        );
        pos
    }

    /// Remove and return the head of the queue.
    pub fn pop_next(&mut self) -> SchedResult<T> {
        self.events
            .pop_front()
            .map(|event| event.payload)
            .ok_or(SchedError::EmptyQueue)
    }

    /// Ticks until the head fires.
    pub fn time_to_next(&self) -> SchedResult<Tick> {
        self.events
            .front()
            .map(|event| event.delta)
            .ok_or(SchedError::EmptyQueue)
    }

    /// Borrow the head without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.events.front().map(|event| &event.payload)
    }

    /// `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Iterate pending entries in fire order as `(ticks_until_fire, item)`.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, &T)> + '_ {
        self.events.iter().scan(0, |total: &mut Tick, event| {
            *total += event.delta;
            Some((*total, &event.payload))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn drain<T>(queue: &mut DeltaQueue<T>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(item) = queue.pop_next() {
            out.push(item);
        }
        out
    }

    #[test]
    fn empty_queue_reports_typed_error() {
        let mut queue: DeltaQueue<&str> = DeltaQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.time_to_next(), Err(SchedError::EmptyQueue));
        assert_eq!(queue.pop_next(), Err(SchedError::EmptyQueue));
    }

    #[test]
    fn zero_delay_into_empty_queue_is_due_now() {
        let mut queue = DeltaQueue::new();
        queue.insert(0, "now");
        assert_eq!(queue.time_to_next(), Ok(0));
        assert_eq!(queue.pop_next(), Ok("now"));
        assert!(queue.is_empty());
    }

    #[test]
    fn time_to_next_matches_first_delay() {
        let mut queue = DeltaQueue::new();
        queue.insert(7, "only");
        assert_eq!(queue.time_to_next(), Ok(7));
    }

    #[test]
    fn pop_shortens_wait_for_the_rest() {
        let mut queue = DeltaQueue::new();
        queue.insert(1, "a");
        queue.insert(2, "b");
        assert_eq!(queue.pop_next(), Ok("a"));
        assert_eq!(queue.time_to_next(), Ok(1));
        assert_eq!(queue.pop_next(), Ok("b"));
        assert!(queue.is_empty());
    }

    #[test]
    fn shortest_delay_pops_first() {
        let mut queue = DeltaQueue::new();
        for name in ["w1", "w2", "w3", "w4", "w5"] {
            queue.insert(2, name);
        }
        queue.insert(1, "short");
        assert_eq!(queue.pop_next(), Ok("short"));
        assert_eq!(drain(&mut queue), vec!["w1", "w2", "w3", "w4", "w5"]);
    }

    #[test]
    fn insertion_between_nodes_keeps_successor_time() {
        let mut queue = DeltaQueue::new();
        queue.insert(3, "small");
        queue.insert(7, "long");
        let pos = queue.insert(5, "medium");
        assert_eq!(pos, 1);
        let offsets: Vec<_> = queue.iter().map(|(t, name)| (t, *name)).collect();
        assert_eq!(offsets, vec![(3, "small"), (5, "medium"), (7, "long")]);
    }

    #[test]
    fn mixed_load_order() {
        // Inserted out of order; SAME shares a fire time with LONG and was scheduled later.
        let mut queue = DeltaQueue::new();
        queue.insert(5, "MEDIUM_WAIT");
        queue.insert(7, "LONG_WAIT");
        queue.insert(0, "NO_WAIT");
        queue.insert(3, "SMALL_WAIT");
        queue.insert(7, "SAME_WAIT");
        assert_eq!(queue.len(), 5);
        assert_eq!(
            drain(&mut queue),
            vec!["NO_WAIT", "SMALL_WAIT", "MEDIUM_WAIT", "LONG_WAIT", "SAME_WAIT"]
        );
    }

    #[test]
    fn counts_track_pops() {
        let mut queue = DeltaQueue::new();
        for i in 0..4 {
            queue.insert(i, i);
        }
        queue.pop_next().unwrap();
        queue.pop_next().unwrap();
        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 2);
        queue.pop_next().unwrap();
        queue.pop_next().unwrap();
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_empties_queue() {
        let mut queue = DeltaQueue::new();
        queue.insert(4, ());
        queue.insert(1, ());
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.peek().is_none());
    }

    #[test]
    fn pop_returns_same_instance() {
        let mut queue = DeltaQueue::new();
        let item = Box::new(41_u32);
        let addr: *const u32 = &*item;
        queue.insert(3, item);
        let popped = queue.pop_next().unwrap();
        assert!(std::ptr::eq(addr, &*popped));
    }

    proptest! {
        #[test]
        fn pops_in_fire_order_with_fifo_ties(delays in prop::collection::vec(0u64..50, 0..40)) {
            let mut queue = DeltaQueue::new();
            for (i, delay) in delays.iter().enumerate() {
                queue.insert(*delay, i);
            }

            let mut expected: Vec<usize> = (0..delays.len()).collect();
            expected.sort_by_key(|i| delays[*i]);

            let mut clock = 0;
            let mut popped = Vec::new();
            while let Ok(wait) = queue.time_to_next() {
                clock += wait;
                let i = queue.pop_next().unwrap();
                prop_assert_eq!(clock, delays[i]);
                popped.push(i);
            }
            prop_assert_eq!(popped, expected);
        }

        #[test]
        fn interleaved_pops_fire_at_scheduled_time(
            ops in prop::collection::vec(prop::option::weighted(0.6, 0u64..40), 1..80)
        ) {
            // Some(delay) schedules relative to the current time, None pops.
            let mut queue = DeltaQueue::new();
            let mut due = Vec::new();
            let mut clock = 0;
            for op in ops {
                match op {
                    Some(delay) => {
                        queue.insert(delay, due.len());
                        due.push(clock + delay);
                    }
                    None => {
                        let Ok(wait) = queue.time_to_next() else {
                            prop_assert!(queue.is_empty());
                            continue;
                        };
                        clock += wait;
                        let id = queue.pop_next().unwrap();
                        prop_assert_eq!(clock, due[id]);
                        if let Some((next_in, _)) = queue.iter().next() {
                            prop_assert_eq!(queue.time_to_next(), Ok(next_in));
                        }
                    }
                }
            }
            while let Ok(wait) = queue.time_to_next() {
                clock += wait;
                let id = queue.pop_next().unwrap();
                prop_assert_eq!(clock, due[id]);
            }
        }

        #[test]
        fn prefix_sums_are_absolute_fire_times(delays in prop::collection::vec(0u64..1_000, 1..30)) {
            let mut queue = DeltaQueue::new();
            for (i, delay) in delays.iter().enumerate() {
                queue.insert(*delay, i);
            }
            let mut last = 0;
            for (at, i) in queue.iter() {
                prop_assert_eq!(at, delays[*i]);
                prop_assert!(at >= last);
                last = at;
            }
        }
    }
}
