//! State machine and timer coordination tests, driven with a synthetic clock
//! (no sleeping, no real frames).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use egui_progress_hud::{
    HudEventKind, IconKind, ProgressHud, VisibilityState, UNDEFINED_PROGRESS,
};
use instant::Instant;

/// HUD with zero fade durations so transitions complete within one tick.
fn instant_hud() -> (ProgressHud, Instant) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut hud = ProgressHud::new();
    hud.config.fade_in_duration = 0.0;
    hud.config.fade_out_duration = 0.0;
    let t0 = Instant::now();
    hud.tick(t0);
    (hud, t0)
}

fn record_events(hud: &mut ProgressHud) -> Rc<RefCell<Vec<HudEventKind>>> {
    let log: Rc<RefCell<Vec<HudEventKind>>> = Rc::default();
    let sink = log.clone();
    hud.subscribe(move |event| sink.borrow_mut().push(event.kind));
    log
}

#[test]
fn test_zero_grace_presents_within_one_tick() {
    let (mut hud, _t0) = instant_hud();
    hud.show();
    assert_eq!(hud.state(), VisibilityState::Visible);
    assert!(hud.is_visible());
    assert_eq!(hud.activity_count(), 1);
    assert!(hud.is_spinner_attached());
}

#[test]
fn test_nonzero_fade_enters_fading_in_synchronously() {
    let mut hud = ProgressHud::new();
    let t0 = Instant::now();
    hud.tick(t0);

    hud.show();
    assert_eq!(hud.state(), VisibilityState::FadingIn);

    hud.tick(t0 + Duration::from_millis(75));
    assert!(hud.alpha() > 0.0 && hud.alpha() < 1.0);

    hud.tick(t0 + Duration::from_millis(200));
    assert_eq!(hud.state(), VisibilityState::Visible);
    assert_eq!(hud.alpha(), 1.0);
}

#[test]
fn test_grace_period_keeps_hud_invisible_until_timer_fires() {
    let (mut hud, t0) = instant_hud();
    hud.config.grace_interval = 0.2;

    hud.show_status("Loading");
    assert_eq!(hud.state(), VisibilityState::GracePending);
    assert_eq!(hud.alpha(), 0.0);
    assert!(!hud.is_visible());

    hud.tick(t0 + Duration::from_millis(100));
    assert_eq!(hud.state(), VisibilityState::GracePending);
    assert!(!hud.is_visible());

    hud.tick(t0 + Duration::from_millis(250));
    assert_eq!(hud.state(), VisibilityState::Visible);
    assert!(hud.is_visible());
}

#[test]
fn test_representing_during_grace_resets_the_grace_clock() {
    let (mut hud, t0) = instant_hud();
    hud.config.grace_interval = 0.2;

    hud.show();
    hud.tick(t0 + Duration::from_millis(100));
    assert_eq!(hud.state(), VisibilityState::GracePending);

    // Presenting again re-arms the grace timer from now
    hud.show_status("Still loading");

    // The original deadline (t0 + 200ms) must not fire
    hud.tick(t0 + Duration::from_millis(250));
    assert_eq!(hud.state(), VisibilityState::GracePending);
    assert!(!hud.is_visible());

    hud.tick(t0 + Duration::from_millis(320));
    assert_eq!(hud.state(), VisibilityState::Visible);
    assert_eq!(hud.status(), Some("Still loading"));
}

#[test]
fn test_icon_auto_dismiss_duration_is_clamped_by_minimum() {
    let (mut hud, t0) = instant_hud();
    hud.config.minimum_dismiss_interval = 5.0;
    hud.config.maximum_dismiss_interval = 100.0;

    // 10 chars -> 10 * 0.06 + 0.5 = 1.1s raw, clamped up to 5s
    assert_eq!(hud.config.display_duration_for("0123456789"), 5.0);

    hud.show_icon(IconKind::Success, "0123456789");
    assert_eq!(hud.state(), VisibilityState::Visible);
    assert_eq!(hud.active_icon(), Some(IconKind::Success));

    hud.tick(t0 + Duration::from_secs_f32(4.9));
    assert_eq!(hud.state(), VisibilityState::Visible);

    hud.tick(t0 + Duration::from_secs_f32(5.1));
    assert_eq!(hud.state(), VisibilityState::Hidden);
    assert!(!hud.is_visible());
}

#[test]
fn test_icon_presentation_zeroes_activity_count() {
    let (mut hud, _t0) = instant_hud();
    hud.show();
    assert_eq!(hud.activity_count(), 1);

    hud.show_icon(IconKind::Info, "done");
    assert_eq!(hud.activity_count(), 0);
    assert!(!hud.is_spinner_attached());
}

#[test]
fn test_pop_activity_at_zero_is_a_noop() {
    let (mut hud, _t0) = instant_hud();
    let events = record_events(&mut hud);

    hud.pop_activity();
    assert_eq!(hud.state(), VisibilityState::Hidden);
    assert_eq!(hud.activity_count(), 0);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_pop_activity_from_one_dismisses() {
    let (mut hud, _t0) = instant_hud();
    hud.show();
    assert_eq!(hud.activity_count(), 1);

    hud.pop_activity();
    assert_eq!(hud.state(), VisibilityState::Hidden);
    assert_eq!(hud.activity_count(), 0);
}

#[test]
fn test_nested_activities_dismiss_only_at_zero() {
    let (mut hud, _t0) = instant_hud();
    hud.show();
    hud.show();
    assert_eq!(hud.activity_count(), 2);

    hud.pop_activity();
    assert_eq!(hud.state(), VisibilityState::Visible);

    hud.pop_activity();
    assert_eq!(hud.state(), VisibilityState::Hidden);
}

#[test]
fn test_progress_update_while_visible_does_not_refade() {
    let (mut hud, _t0) = instant_hud();
    let events = record_events(&mut hud);

    hud.show_progress(0.5);
    assert_eq!(hud.state(), VisibilityState::Visible);
    assert!(hud.is_ring_attached());
    assert_eq!(hud.ring().stroke_end(), 0.5);

    // A grace interval configured after the HUD is visible must not re-arm
    hud.config.grace_interval = 0.2;
    hud.show_progress(0.8);

    assert_eq!(hud.state(), VisibilityState::Visible);
    assert_eq!(hud.ring().stroke_end(), 0.8);
    assert_eq!(hud.progress(), 0.8);

    let appeared = events
        .borrow()
        .iter()
        .filter(|kind| **kind == HudEventKind::DidAppear)
        .count();
    assert_eq!(appeared, 1);
}

#[test]
fn test_determinate_progress_increments_activity_only_at_zero() {
    let (mut hud, _t0) = instant_hud();

    hud.show_progress(0.0);
    assert_eq!(hud.activity_count(), 1);

    hud.show_progress(0.5);
    assert_eq!(hud.activity_count(), 1);
}

#[test]
fn test_dismissal_resets_everything() {
    let (mut hud, _t0) = instant_hud();
    hud.show_progress_status(0.7, "Uploading");
    assert!(hud.is_visible());

    hud.dismiss();
    assert_eq!(hud.state(), VisibilityState::Hidden);
    assert!(!hud.is_visible());
    assert_eq!(hud.activity_count(), 0);
    assert_eq!(hud.progress(), UNDEFINED_PROGRESS);
    assert!(!hud.is_ring_attached());
    assert!(!hud.is_spinner_attached());
    assert!(hud.active_icon().is_none());
}

#[test]
fn test_lifecycle_events_fire_in_order() {
    let (mut hud, _t0) = instant_hud();
    let events = record_events(&mut hud);

    hud.show_status("Working");
    hud.dismiss();

    assert_eq!(
        &*events.borrow(),
        &[
            HudEventKind::WillAppear,
            HudEventKind::DidAppear,
            HudEventKind::WillDisappear,
            HudEventKind::DidDisappear,
        ]
    );
}

#[test]
fn test_events_carry_status_text() {
    let (mut hud, _t0) = instant_hud();
    let statuses: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
    let sink = statuses.clone();
    hud.subscribe(move |event| sink.borrow_mut().push(event.status.clone()));

    hud.show_status("Syncing");
    assert_eq!(
        statuses.borrow().last().unwrap().as_deref(),
        Some("Syncing")
    );
}

#[test]
fn test_delayed_dismiss_emits_will_disappear_immediately() {
    let (mut hud, t0) = instant_hud();
    let events = record_events(&mut hud);
    hud.show();

    hud.dismiss_after(1.0);
    assert!(events.borrow().contains(&HudEventKind::WillDisappear));
    assert_eq!(hud.state(), VisibilityState::Visible);
    assert!(hud.is_visible());

    hud.tick(t0 + Duration::from_millis(500));
    assert!(hud.is_visible());

    hud.tick(t0 + Duration::from_millis(1100));
    assert_eq!(hud.state(), VisibilityState::Hidden);
    assert!(events.borrow().contains(&HudEventKind::DidDisappear));
}

#[test]
fn test_dismiss_completion_runs_after_teardown() {
    let (mut hud, _t0) = instant_hud();
    hud.show();

    let called = Rc::new(RefCell::new(false));
    let flag = called.clone();
    hud.dismiss_with_completion(move || *flag.borrow_mut() = true);

    assert!(*called.borrow());
    assert_eq!(hud.state(), VisibilityState::Hidden);
}

#[test]
fn test_new_presentation_interrupts_fade_out() {
    let mut hud = ProgressHud::new();
    let t0 = Instant::now();
    hud.tick(t0);
    let events = record_events(&mut hud);

    hud.show();
    hud.tick(t0 + Duration::from_millis(200));
    assert_eq!(hud.state(), VisibilityState::Visible);

    hud.dismiss();
    hud.tick(t0 + Duration::from_millis(250));
    assert_eq!(hud.state(), VisibilityState::FadingOut);
    let mid_alpha = hud.alpha();
    assert!(mid_alpha > 0.0 && mid_alpha < 1.0);

    // New presentation mid-fade-out: fades back in from the current alpha,
    // and the stale fade-out must not tear the HUD down
    hud.show_status("Again");
    assert_eq!(hud.state(), VisibilityState::FadingIn);

    hud.tick(t0 + Duration::from_millis(500));
    assert_eq!(hud.state(), VisibilityState::Visible);
    assert_eq!(hud.alpha(), 1.0);
    assert!(!events.borrow().contains(&HudEventKind::DidDisappear));
}

#[test]
fn test_dismiss_cancels_pending_grace() {
    let (mut hud, t0) = instant_hud();
    hud.config.grace_interval = 0.2;
    let events = record_events(&mut hud);

    hud.show();
    assert_eq!(hud.state(), VisibilityState::GracePending);

    hud.dismiss();
    hud.tick(t0 + Duration::from_millis(300));

    // The grace timer must not resurrect the HUD
    assert_eq!(hud.state(), VisibilityState::Hidden);
    assert!(!hud.is_visible());
    assert!(!events.borrow().contains(&HudEventKind::DidAppear));
}

#[test]
fn test_representing_replaces_auto_dismiss_timer() {
    let (mut hud, t0) = instant_hud();
    hud.config.minimum_dismiss_interval = 1.0;
    hud.config.maximum_dismiss_interval = 100.0;

    hud.show_icon(IconKind::Error, "short");
    assert_eq!(hud.state(), VisibilityState::Visible);

    // Switching to a spinner presentation must drop the icon's dismiss timer
    hud.show_status("Retrying");
    hud.tick(t0 + Duration::from_secs(10));
    assert_eq!(hud.state(), VisibilityState::Visible);
    assert!(hud.is_spinner_attached());
    assert!(hud.active_icon().is_none());
}

#[test]
fn test_grace_carries_icon_dismiss_duration() {
    let (mut hud, t0) = instant_hud();
    hud.config.grace_interval = 0.1;
    hud.config.minimum_dismiss_interval = 1.0;
    hud.config.maximum_dismiss_interval = 100.0;

    hud.show_icon(IconKind::Info, "ok");
    assert_eq!(hud.state(), VisibilityState::GracePending);

    hud.tick(t0 + Duration::from_millis(150));
    assert_eq!(hud.state(), VisibilityState::Visible);

    // Auto-dismiss (1s minimum) armed when the grace timer fired
    hud.tick(t0 + Duration::from_millis(150 + 1050));
    assert_eq!(hud.state(), VisibilityState::Hidden);
}

#[test]
fn test_set_status_keeps_timers_and_visibility() {
    let (mut hud, t0) = instant_hud();
    hud.config.minimum_dismiss_interval = 1.0;
    hud.config.maximum_dismiss_interval = 100.0;

    hud.show_icon(IconKind::Success, "Saved");
    hud.set_status("Saved to disk");
    assert_eq!(hud.status(), Some("Saved to disk"));
    assert_eq!(hud.state(), VisibilityState::Visible);

    // The original auto-dismiss still fires
    hud.tick(t0 + Duration::from_secs_f32(1.2));
    assert_eq!(hud.state(), VisibilityState::Hidden);
}

#[test]
fn test_reset_returns_to_pristine_state() {
    let (mut hud, _t0) = instant_hud();
    hud.show_status("Busy");
    assert!(hud.is_visible());

    hud.reset();
    assert_eq!(hud.state(), VisibilityState::Hidden);
    assert!(!hud.is_visible());
    assert_eq!(hud.activity_count(), 0);
    assert_eq!(hud.status(), None);
    // Config survives a reset
    assert_eq!(hud.config.fade_in_duration, 0.0);
}
