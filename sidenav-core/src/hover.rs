//! Debounced hover prefetch timer.

use std::time::{Duration, Instant};

use crate::model::ItemId;

/// A single pending timer. Arming it again replaces the previous target.
#[derive(Debug, Clone)]
pub struct HoverDebounce {
    delay: Duration,
    pending: Option<(ItemId, Instant)>,
}

impl HoverDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn arm(&mut self, id: ItemId, now: Instant) {
        self.pending = Some((id, now + self.delay));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&ItemId> {
        self.pending.as_ref().map(|(id, _)| id)
    }

    /// Fire the timer if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<ItemId> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(id, _)| id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn fires_after_delay() {
        let mut hover = HoverDebounce::new(DELAY);
        let t0 = Instant::now();
        hover.arm(ItemId::new("users"), t0);
        assert!(hover.take_due(t0 + Duration::from_millis(299)).is_none());
        assert_eq!(hover.take_due(t0 + DELAY), Some(ItemId::new("users")));
        assert!(hover.take_due(t0 + DELAY * 2).is_none());
    }

    #[test]
    fn rearming_replaces_target_and_deadline() {
        let mut hover = HoverDebounce::new(DELAY);
        let t0 = Instant::now();
        hover.arm(ItemId::new("a"), t0);
        hover.arm(ItemId::new("b"), t0 + Duration::from_millis(200));
        assert!(hover.take_due(t0 + DELAY).is_none());
        assert_eq!(hover.take_due(t0 + Duration::from_millis(500)), Some(ItemId::new("b")));
    }

    #[test]
    fn cancel_clears_pending() {
        let mut hover = HoverDebounce::new(DELAY);
        let t0 = Instant::now();
        hover.arm(ItemId::new("a"), t0);
        hover.cancel();
        assert!(hover.pending().is_none());
        assert!(hover.take_due(t0 + DELAY).is_none());
    }
}
