//! Sequencing of optimistic writes against one logical resource.

use std::collections::BTreeMap;

/// Handle for one in-flight write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WriteTicket(u64);

/// Tracks in-flight writes for a resource and the last value the backend accepted.
///
/// The value a resource should show is the newest in-flight write if it is newer
/// than the last confirmed one, otherwise the confirmed value. That gives three
/// properties at once: optimistic values show immediately, a rejected write falls
/// back to whatever is still standing, and a response that arrives after a newer
/// confirmation changes nothing.
#[derive(Debug)]
pub struct WriteLedger<T> {
    next_seq: u64,
    confirmed: T,
    confirmed_seq: u64,
    pending: BTreeMap<u64, T>,
}

impl<T: Clone + Default> Default for WriteLedger<T> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            confirmed: T::default(),
            confirmed_seq: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<T: Clone + Default> WriteLedger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a write of `value`. `current` is what the resource shows right now.
    pub fn begin(&mut self, current: T, value: T) -> WriteTicket {
        if self.pending.is_empty() {
            self.confirmed = current;
        }
        self.next_seq += 1;
        self.pending.insert(self.next_seq, value);
        WriteTicket(self.next_seq)
    }

    /// Record the backend's answer for `ticket`.
    ///
    /// Returns the value the resource should now show, or `None` when the ticket
    /// is unknown (forgotten by [`WriteLedger::forget`]).
    pub fn settle(&mut self, ticket: WriteTicket, accepted: bool) -> Option<T> {
        let value = self.pending.remove(&ticket.0)?;

        if accepted {
            if ticket.0 > self.confirmed_seq {
                self.confirmed = value;
                self.confirmed_seq = ticket.0;
            } else {
                tracing::debug!(
                    "Write #{} confirmed after newer write #{}; ignoring",
                    ticket.0,
                    self.confirmed_seq
                );
            }
        }

        Some(self.effective().clone())
    }

    pub fn effective(&self) -> &T {
        match self.pending.last_key_value() {
            Some((seq, value)) if *seq > self.confirmed_seq => value,
            _ => &self.confirmed,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Stop tracking every in-flight write; their answers will be ignored.
    pub fn forget(&mut self) {
        self.pending.clear();
        self.confirmed = T::default();
    }
}
