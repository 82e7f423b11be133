//! Redraw notifier - collapses any number of mutations in one handler into a
//! single "state changed" signal.
//!
//! Handlers call `mark_dirty` as often as they like; the board calls `flush`
//! once after each handler returns. Subscribers get no payload and are
//! expected to re-read board state and repaint. Missed signals are not
//! queued: `take_redraw` only reports whether anything changed since the last
//! time it was asked.

use std::fmt;

/// Handle returned by `RedrawNotifier::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct RedrawNotifier {
    /// Set by handlers, cleared by `flush`
    pending: bool,
    /// Set by `flush`, cleared by `take_redraw`
    needs_repaint: bool,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut()>)>,
    next_subscription: u64,
    notifications: u64,
}

impl RedrawNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that some state changed during the current handler.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.pending = true;
    }

    /// Whether the current handler has changed anything yet.
    pub fn is_dirty(&self) -> bool {
        self.pending
    }

    /// Emit at most one notification for everything marked since the last flush.
    ///
    /// Returns true if a notification went out.
    pub fn flush(&mut self) -> bool {
        if !std::mem::take(&mut self.pending) {
            return false;
        }
        self.needs_repaint = true;
        self.notifications += 1;
        for (_, callback) in &mut self.subscribers {
            callback();
        }
        true
    }

    /// Consume the repaint request, for renderers that poll once per tick.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Total notifications emitted since construction.
    pub fn notification_count(&self) -> u64 {
        self.notifications
    }
}

impl fmt::Debug for RedrawNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedrawNotifier")
            .field("pending", &self.pending)
            .field("needs_repaint", &self.needs_repaint)
            .field("subscribers", &self.subscribers.len())
            .field("notifications", &self.notifications)
            .finish()
    }
}
