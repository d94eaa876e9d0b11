//! Host environment bindings.
//!
//! Everything the HUD needs from its surroundings but cannot know itself:
//! on-screen keyboard occlusion, haptic feedback, accessibility announcements,
//! and device-tilt parallax. All methods default to no-ops so a plain
//! [`NoopHost`] works everywhere, including tests.

use egui::Vec2;

/// Haptic pulse requested alongside an icon presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticFeedback {
    Success,
    Warning,
    Error,
}

/// External collaborator supplying platform facilities to the HUD.
pub trait HostBindings {
    /// Height in logical points of any on-screen keyboard currently occluding
    /// the bottom of the viewport.
    fn keyboard_height(&self) -> f32 {
        0.0
    }

    /// Fire a haptic pulse, if the platform supports it.
    fn haptic(&self, _feedback: HapticFeedback) {}

    /// Announce `text` to assistive technology.
    fn announce(&self, _text: &str) {}

    /// Current device-tilt offset for the parallax motion effect. The
    /// controller clamps this to [`crate::config::PARALLAX_DEPTH_POINTS`].
    fn parallax_offset(&self) -> Vec2 {
        Vec2::ZERO
    }
}

/// Host with no platform facilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl HostBindings for NoopHost {}
