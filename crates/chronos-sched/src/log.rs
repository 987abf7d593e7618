use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::clock::format_time_of_day;
use crate::command::Tick;

/// A record of one executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Firing {
    /// Game time at which the command fired.
    pub at: Tick,
    /// The command's name.
    pub name: String,
    /// The command's own account of what it did.
    pub summary: String,
    /// What `execute` returned.
    pub succeeded: bool,
}

impl Firing {
    /// Create a firing record.
    pub fn new(at: Tick, name: impl Into<String>, summary: impl Into<String>, succeeded: bool) -> Self {
        Self {
            at,
            name: name.into(),
            summary: summary.into(),
            succeeded,
        }
    }

    /// Fire time formatted as `HH:MM:SS`.
    pub fn time_of_day(&self) -> String {
        format_time_of_day(self.at)
    }
}

/// The most recent firings of a session, oldest first.
///
/// Holds at most `limit` entries when a limit is set; each push past the
/// limit evicts the oldest firing and counts it in [`evicted`](Self::evicted).
#[derive(Debug, Default)]
pub struct FiringLog {
    ring: VecDeque<Firing>,
    limit: Option<NonZeroUsize>,
    evicted: u64,
}

impl FiringLog {
    /// A log keeping the last `limit` firings; 0 keeps everything.
    pub fn new(limit: usize) -> Self {
        let limit = NonZeroUsize::new(limit);
        Self {
            ring: limit.map_or_else(VecDeque::new, |n| VecDeque::with_capacity(n.get())),
            limit,
            evicted: 0,
        }
    }

    /// Record a firing.
    pub fn push(&mut self, firing: Firing) {
        if self.limit.is_some_and(|n| self.ring.len() == n.get()) {
            self.ring.pop_front();
            self.evicted += 1;
        }
        self.ring.push_back(firing);
    }

    /// Retained firings, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Firing> + '_ {
        self.ring.iter()
    }

    /// The `index`-th retained firing, counting from the oldest.
    pub fn get(&self, index: usize) -> Option<&Firing> {
        self.ring.get(index)
    }

    /// The latest firing.
    pub fn last(&self) -> Option<&Firing> {
        self.ring.back()
    }

    /// Retained firings of commands named `name`, ignoring case.
    pub fn named(&self, name: &str) -> Vec<&Firing> {
        self.iter()
            .filter(|f| f.name.eq_ignore_ascii_case(name))
            .collect()
    }

    /// Retained firings whose command reported failure.
    pub fn failures(&self) -> Vec<&Firing> {
        self.iter().filter(|f| !f.succeeded).collect()
    }

    /// How many firings are retained.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Nothing retained.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Firings pushed out by the limit so far.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Forget every retained firing. The eviction count is kept.
    pub fn clear(&mut self) {
        self.ring.clear();
    }
}
