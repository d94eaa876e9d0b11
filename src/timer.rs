//! One-shot overlay timers, polled from the frame loop.
//!
//! The HUD never sleeps: grace / auto-dismiss / delayed-dismiss delays are
//! deadlines checked on every tick. Arming a timer kind always replaces any
//! previously armed timer of that same kind, so stale callbacks cannot fire.

use instant::Instant;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct Armed {
    deadline: Instant,
    /// Auto-dismiss duration carried through a grace delay (icon presentations)
    dismiss_after: Option<f32>,
}

/// The three one-shot timers the controller may have in flight.
#[derive(Debug, Default)]
pub(crate) struct Timers {
    grace: Option<Armed>,
    auto_dismiss: Option<Armed>,
    delayed_dismiss: Option<Armed>,
}

impl Timers {
    /// Arm the grace timer, replacing any previous one. `dismiss_after` is
    /// handed back when the timer fires so the fade-in can arm auto-dismiss.
    pub fn arm_grace(&mut self, now: Instant, delay: f32, dismiss_after: Option<f32>) {
        log::trace!("arming grace timer: {delay:.3}s");
        self.grace = Some(Armed {
            deadline: now + Duration::from_secs_f32(delay.max(0.0)),
            dismiss_after,
        });
    }

    pub fn arm_auto_dismiss(&mut self, now: Instant, delay: f32) {
        log::trace!("arming auto-dismiss timer: {delay:.3}s");
        self.auto_dismiss = Some(Armed {
            deadline: now + Duration::from_secs_f32(delay.max(0.0)),
            dismiss_after: None,
        });
    }

    pub fn arm_delayed_dismiss(&mut self, now: Instant, delay: f32) {
        self.delayed_dismiss = Some(Armed {
            deadline: now + Duration::from_secs_f32(delay.max(0.0)),
            dismiss_after: None,
        });
    }

    pub fn cancel_grace(&mut self) {
        self.grace = None;
    }

    pub fn cancel_auto_dismiss(&mut self) {
        self.auto_dismiss = None;
    }

    pub fn cancel_all(&mut self) {
        self.grace = None;
        self.auto_dismiss = None;
        self.delayed_dismiss = None;
    }

    pub fn auto_dismiss_armed(&self) -> bool {
        self.auto_dismiss.is_some()
    }

    /// Take the grace timer if due, yielding its carried auto-dismiss duration.
    pub fn take_due_grace(&mut self, now: Instant) -> Option<Option<f32>> {
        if self.grace.is_some_and(|t| now >= t.deadline) {
            Some(self.grace.take().and_then(|t| t.dismiss_after))
        } else {
            None
        }
    }

    pub fn take_due_auto_dismiss(&mut self, now: Instant) -> bool {
        if self.auto_dismiss.is_some_and(|t| now >= t.deadline) {
            self.auto_dismiss = None;
            true
        } else {
            false
        }
    }

    pub fn take_due_delayed_dismiss(&mut self, now: Instant) -> bool {
        if self.delayed_dismiss.is_some_and(|t| now >= t.deadline) {
            self.delayed_dismiss = None;
            true
        } else {
            false
        }
    }

    /// Time until the earliest pending deadline, used to schedule a repaint.
    pub fn next_deadline_in(&self, now: Instant) -> Option<Duration> {
        [self.grace, self.auto_dismiss, self.delayed_dismiss]
            .iter()
            .flatten()
            .map(|t| {
                if t.deadline > now {
                    t.deadline - now
                } else {
                    Duration::ZERO
                }
            })
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_grace_fires_once_at_deadline() {
        let t0 = base();
        let mut timers = Timers::default();
        timers.arm_grace(t0, 0.2, Some(3.0));

        assert!(timers.take_due_grace(t0).is_none());
        assert!(timers
            .take_due_grace(t0 + Duration::from_millis(100))
            .is_none());

        let fired = timers.take_due_grace(t0 + Duration::from_millis(250));
        assert_eq!(fired, Some(Some(3.0)));

        // Already consumed
        assert!(timers
            .take_due_grace(t0 + Duration::from_secs(10))
            .is_none());
    }

    #[test]
    fn test_rearming_replaces_previous_deadline() {
        let t0 = base();
        let mut timers = Timers::default();
        timers.arm_grace(t0, 0.2, None);
        timers.arm_grace(t0 + Duration::from_millis(100), 0.2, None);

        // The original deadline (t0 + 0.2s) must not fire
        assert!(timers
            .take_due_grace(t0 + Duration::from_millis(250))
            .is_none());
        assert!(timers
            .take_due_grace(t0 + Duration::from_millis(350))
            .is_some());
    }

    #[test]
    fn test_cancel_disarms() {
        let t0 = base();
        let mut timers = Timers::default();
        timers.arm_auto_dismiss(t0, 0.1);
        assert!(timers.auto_dismiss_armed());
        timers.cancel_auto_dismiss();
        assert!(!timers.auto_dismiss_armed());
        assert!(!timers.take_due_auto_dismiss(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_kinds_are_independent() {
        let t0 = base();
        let mut timers = Timers::default();
        timers.arm_grace(t0, 0.5, None);
        timers.arm_auto_dismiss(t0, 0.1);

        assert!(timers.take_due_auto_dismiss(t0 + Duration::from_millis(150)));
        assert!(timers
            .take_due_grace(t0 + Duration::from_millis(150))
            .is_none());
        assert!(timers
            .take_due_grace(t0 + Duration::from_millis(600))
            .is_some());
    }

    #[test]
    fn test_next_deadline_picks_earliest() {
        let t0 = base();
        let mut timers = Timers::default();
        assert!(timers.next_deadline_in(t0).is_none());

        timers.arm_grace(t0, 0.5, None);
        timers.arm_auto_dismiss(t0, 0.2);
        let next = timers.next_deadline_in(t0).unwrap();
        // from_secs_f32(0.2) lands a few ns above 200ms, compare in kind
        assert!(next <= Duration::from_secs_f32(0.2));
        assert!(next > Duration::from_millis(150));
    }
}
