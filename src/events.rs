//! Typed lifecycle events and the observer registry.
//!
//! Consumers subscribe with a callback and get every event the controller
//! emits, each carrying the status text that was on screen at the time.

/// What happened to the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudEventKind {
    WillAppear,
    DidAppear,
    WillDisappear,
    DidDisappear,
    /// Pointer pressed anywhere while the HUD was presented
    DidReceiveTouch,
    /// Pointer pressed inside the HUD panel
    DidTouchDownInside,
}

/// A lifecycle event with the status text shown at emission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudEvent {
    pub kind: HudEventKind,
    pub status: Option<String>,
}

/// Handle returned by [`crate::ProgressHud::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&HudEvent)>;

#[derive(Default)]
pub(crate) struct EventBus {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl EventBus {
    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(existing, _)| *existing != id);
    }

    pub fn emit(&mut self, kind: HudEventKind, status: Option<String>) {
        log::debug!("hud event: {kind:?} (status: {status:?})");
        let event = HudEvent { kind, status };
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}
