//! Pending resolution timers.
//!
//! The host owns real time; this queue only orders tickets by their due
//! instant and hands back the ones that have come due. Cancelling is
//! dropping the tickets. Tickets that already reached the host before a
//! cancel are caught by the engine's generation check instead.

use crate::core::Millis;

use super::ResolutionTicket;

/// Tickets waiting for their `due_at`, earliest first.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    tickets: Vec<ResolutionTicket>,
}

impl TimerQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ticket. Tickets due at the same instant fire in insertion order.
    pub fn schedule(&mut self, ticket: ResolutionTicket) {
        let at = self.tickets.partition_point(|t| t.due_at <= ticket.due_at);
        self.tickets.insert(at, ticket);
    }

    /// Earliest due instant, if anything is scheduled.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.tickets.first().map(|t| t.due_at)
    }

    /// Remove and return every ticket due at or before `now`.
    pub fn take_due(&mut self, now: Millis) -> Vec<ResolutionTicket> {
        let due = self.tickets.partition_point(|t| t.due_at <= now);
        self.tickets.drain(..due).collect()
    }

    /// Drop every scheduled ticket. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.tickets.len();
        self.tickets.clear();
        dropped
    }

    /// Number of scheduled tickets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Nothing scheduled?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Generation, Outcome};

    fn ticket(first: usize, due: u64) -> ResolutionTicket {
        ResolutionTicket {
            generation: Generation(0),
            first,
            second: first + 1,
            outcome: Outcome::Match,
            due_at: Millis::new(due),
        }
    }

    #[test]
    fn test_orders_by_due_time() {
        let mut queue = TimerQueue::new();
        queue.schedule(ticket(0, 650));
        queue.schedule(ticket(2, 350));
        queue.schedule(ticket(4, 350));

        assert_eq!(queue.next_deadline(), Some(Millis::new(350)));

        let due = queue.take_due(Millis::new(400));
        let firsts: Vec<_> = due.iter().map(|t| t.first).collect();
        assert_eq!(firsts, vec![2, 4]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_deadline(), Some(Millis::new(650)));
    }

    #[test]
    fn test_take_due_is_inclusive() {
        let mut queue = TimerQueue::new();
        queue.schedule(ticket(0, 350));
        assert!(queue.take_due(Millis::new(349)).is_empty());
        assert_eq!(queue.take_due(Millis::new(350)).len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel_all() {
        let mut queue = TimerQueue::new();
        queue.schedule(ticket(0, 1));
        queue.schedule(ticket(2, 2));
        assert_eq!(queue.cancel_all(), 2);
        assert_eq!(queue.next_deadline(), None);
    }
}
