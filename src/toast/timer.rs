//! One-shot dismiss timers keyed by toast id.
//!
//! Timers are kept in an ordered map keyed by `(deadline, sequence)`, with an
//! index from id to key so cancelling removes the entry outright.

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use super::types::ToastId;

/// (deadline, sequence); sequence keeps ties in scheduling order
type TimerKey = (Instant, u64);

#[derive(Debug, Default)]
pub struct TimerQueue {
    queue: BTreeMap<TimerKey, ToastId>,
    index: HashMap<ToastId, TimerKey>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule (or reschedule) the timer for `id`
    pub fn schedule(&mut self, id: ToastId, deadline: Instant) {
        self.cancel(id);
        let key = (deadline, self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        self.queue.insert(key, id);
        self.index.insert(id, key);
    }

    /// Returns true if a live timer was cancelled
    pub fn cancel(&mut self, id: ToastId) -> bool {
        match self.index.remove(&id) {
            Some(key) => {
                self.queue.remove(&key);
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.index.clear();
    }

    pub fn is_scheduled(&self, id: ToastId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Deadline of the live timer for `id`
    pub fn deadline(&self, id: ToastId) -> Option<Instant> {
        self.index.get(&id).map(|(deadline, _)| *deadline)
    }

    /// Earliest live deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Time from `now` until the earliest live deadline (zero if overdue)
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Pop every timer due at or before `now`, in firing order
    pub fn pop_due(&mut self, now: Instant) -> Vec<ToastId> {
        let mut fired = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let id = entry.remove();
            self.index.remove(&id);
            fired.push(id);
        }
        fired
    }
}
