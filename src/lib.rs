//! # egui-progress-hud: blocking progress overlay for egui
//!
//! A progress HUD in the style of the classic mobile "activity HUD": an
//! activity spinner, determinate progress ring, or status icon with text,
//! centered over the application viewport with an optional dimming backdrop.
//!
//! The application owns one [`ProgressHud`] and drives it once per frame:
//!
//! ```no_run
//! # let ctx = egui::Context::default();
//! use egui_progress_hud::ProgressHud;
//!
//! let mut hud = ProgressHud::new();
//! hud.show_status("Loading…");
//!
//! // every frame, after the rest of the UI:
//! hud.show_frame(&ctx);
//! ```
//!
//! Presentations go through a grace delay (to avoid flicker on short
//! operations), fade in, optionally auto-dismiss after a duration scaled by
//! the message length, and fade out. Lifecycle events can be observed via
//! [`ProgressHud::subscribe`]; platform facilities (keyboard occlusion,
//! haptics, announcements) come from a [`HostBindings`] implementation.

pub mod backdrop;
pub mod config;
pub mod events;
pub mod host;
pub mod hud;
pub mod ring;
pub mod spinner;

mod fade;
mod layout;
mod timer;

pub use config::{
    AnimationType, HudConfig, HudStyle, IconKind, MaskType, StatusIcon, UNDEFINED_PROGRESS,
};
pub use events::{HudEvent, HudEventKind, SubscriptionId};
pub use host::{HapticFeedback, HostBindings, NoopHost};
pub use hud::{ProgressHud, VisibilityState};
pub use ring::ProgressRing;
pub use spinner::IndefiniteSpinner;
