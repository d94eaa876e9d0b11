//! The HUD controller: visibility state machine, timer coordination, layout,
//! and event emission.
//!
//! All presentation calls funnel through one [`ProgressHud`] instance that the
//! application owns and drives from its UI thread by calling
//! [`ProgressHud::show_frame`] every frame. Timers and fades are advanced by
//! [`ProgressHud::tick`], which `show_frame` calls with the wall clock; tests
//! drive `tick` directly with synthetic instants.

use egui::{Color32, CornerRadius, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};
use instant::Instant;

use crate::backdrop::RadialGradientBackdrop;
use crate::config::{
    AnimationType, HudConfig, IconKind, MaskType, StatusIcon, LABEL_CONSTRAINT,
    PARALLAX_DEPTH_POINTS, UNDEFINED_PROGRESS,
};
use crate::events::{EventBus, HudEvent, HudEventKind, SubscriptionId};
use crate::fade::{Fade, FadeDirection, PRESENT_SCALE};
use crate::host::{HapticFeedback, HostBindings, NoopHost};
use crate::layout;
use crate::ring::ProgressRing;
use crate::spinner::IndefiniteSpinner;

/// Where the HUD is in its visibility lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    #[default]
    Hidden,
    /// Grace timer armed, nothing visible yet
    GracePending,
    FadingIn,
    /// Fade-in complete; an auto-dismiss timer may be armed
    Visible,
    FadingOut,
}

/// Status icon resolved at presentation time.
#[derive(Debug, Clone, Copy)]
struct ActiveIcon {
    kind: IconKind,
    source: StatusIcon,
}

/// Blocking progress overlay. See the crate docs for usage.
pub struct ProgressHud {
    /// Style and timing knobs, freely mutable between frames
    pub config: HudConfig,
    host: Box<dyn HostBindings>,

    state: VisibilityState,
    alpha: f32,
    scale: f32,
    fade: Option<Fade>,
    timers: crate::timer::Timers,
    /// Auto-dismiss duration waiting for the current fade-in to finish
    pending_auto_dismiss: Option<f32>,
    dismiss_completion: Option<Box<dyn FnOnce()>>,

    progress: f32,
    status: Option<String>,
    icon: Option<ActiveIcon>,
    activity_count: u32,
    /// Mask latched when the presentation was made, so one-shot overrides
    /// survive the config field being restored right after the call
    active_mask: MaskType,

    spinner: IndefiniteSpinner,
    ring: ProgressRing,
    background_ring: ProgressRing,
    backdrop: RadialGradientBackdrop,
    spinner_attached: bool,
    ring_attached: bool,

    /// True between DidAppear and teardown; gates ambient re-positioning
    observing: bool,
    events: EventBus,
    last_panel_rect: Option<Rect>,
    now: Instant,
}

impl Default for ProgressHud {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressHud {
    pub fn new() -> Self {
        Self::with_host(Box::new(NoopHost))
    }

    pub fn with_host(host: Box<dyn HostBindings>) -> Self {
        let config = HudConfig::default();
        Self {
            spinner: IndefiniteSpinner::new(
                config.ring_no_text_radius,
                config.ring_thickness,
                config.foreground_for_style(),
            ),
            ring: ProgressRing::new(
                config.ring_no_text_radius,
                config.ring_thickness,
                config.foreground_image_for_style(),
            ),
            background_ring: ProgressRing::new(
                config.ring_no_text_radius,
                config.ring_thickness,
                config.foreground_for_style().gamma_multiply(0.1),
            ),
            backdrop: RadialGradientBackdrop::default(),
            config,
            host: Box::new(NoopHost),
            state: VisibilityState::Hidden,
            alpha: 0.0,
            scale: 1.0,
            fade: None,
            timers: crate::timer::Timers::default(),
            pending_auto_dismiss: None,
            dismiss_completion: None,
            progress: UNDEFINED_PROGRESS,
            status: None,
            icon: None,
            activity_count: 0,
            active_mask: MaskType::None,
            spinner_attached: false,
            ring_attached: false,
            observing: false,
            events: EventBus::default(),
            last_panel_rect: None,
            now: Instant::now(),
        }
        .replace_host(host)
    }

    fn replace_host(mut self, host: Box<dyn HostBindings>) -> Self {
        self.host = host;
        self
    }

    /// Drop all transient state, keeping config and host. For tests and for
    /// hosts that re-create their UI from scratch.
    pub fn reset(&mut self) {
        let host = std::mem::replace(&mut self.host, Box::new(NoopHost));
        let config = self.config.clone();
        *self = Self::with_host(host);
        self.config = config;
    }

    // ---- Introspection ----------------------------------------------------

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// Whether anything is on screen (including mid-fade).
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn activity_count(&self) -> u32 {
        self.activity_count
    }

    /// Current progress fraction, or [`UNDEFINED_PROGRESS`] when
    /// indeterminate.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_spinner_attached(&self) -> bool {
        self.spinner_attached
    }

    pub fn is_ring_attached(&self) -> bool {
        self.ring_attached
    }

    pub fn active_icon(&self) -> Option<IconKind> {
        self.icon.map(|icon| icon.kind)
    }

    /// The determinate foreground ring (e.g. to read its `stroke_end`).
    pub fn ring(&self) -> &ProgressRing {
        &self.ring
    }

    pub fn spinner(&self) -> &IndefiniteSpinner {
        &self.spinner
    }

    // ---- Events -----------------------------------------------------------

    pub fn subscribe(&mut self, observer: impl FnMut(&HudEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.events.unsubscribe(id);
    }

    fn emit(&mut self, kind: HudEventKind) {
        let status = self.status.clone();
        self.events.emit(kind, status);
    }

    // ---- Configuration setters with side effects --------------------------

    /// Update the status text in place; re-measured on the next frame without
    /// touching any timer.
    pub fn set_status(&mut self, status: &str) {
        self.status = non_empty(status);
    }

    /// Setting an explicit foreground color switches the style to `Custom`.
    pub fn set_foreground_color(&mut self, color: Color32) {
        self.config.foreground_color = color;
        self.config.style = crate::config::HudStyle::Custom;
    }

    pub fn set_foreground_image_color(&mut self, color: Color32) {
        self.config.foreground_image_color = Some(color);
        self.config.style = crate::config::HudStyle::Custom;
    }

    pub fn set_background_color(&mut self, color: Color32) {
        self.config.background_color = color;
        self.config.style = crate::config::HudStyle::Custom;
    }

    // ---- Presentation API -------------------------------------------------

    /// Show an indeterminate spinner with no text.
    pub fn show(&mut self) {
        self.show_status("");
    }

    pub fn show_with_mask(&mut self, mask: MaskType) {
        let previous = self.config.mask_type;
        self.config.mask_type = mask;
        self.show();
        self.config.mask_type = previous;
    }

    /// Show an indeterminate spinner with status text.
    pub fn show_status(&mut self, status: &str) {
        self.present_progress(UNDEFINED_PROGRESS, status);
    }

    pub fn show_status_with_mask(&mut self, status: &str, mask: MaskType) {
        let previous = self.config.mask_type;
        self.config.mask_type = mask;
        self.show_status(status);
        self.config.mask_type = previous;
    }

    /// Show a determinate progress ring. `fraction` in `[0, 1]`, or
    /// [`UNDEFINED_PROGRESS`] for a spinner.
    pub fn show_progress(&mut self, fraction: f32) {
        self.present_progress(fraction, "");
    }

    pub fn show_progress_status(&mut self, fraction: f32, status: &str) {
        self.present_progress(fraction, status);
    }

    pub fn show_progress_with_mask(&mut self, fraction: f32, mask: MaskType) {
        let previous = self.config.mask_type;
        self.config.mask_type = mask;
        self.show_progress(fraction);
        self.config.mask_type = previous;
    }

    /// Show a status icon with text, auto-dismissing after a duration scaled
    /// by the text length (see [`HudConfig::display_duration_for`]).
    pub fn show_icon(&mut self, kind: IconKind, status: &str) {
        let duration = self.config.display_duration_for(status);
        if self.config.haptics_enabled {
            self.host.haptic(match kind {
                IconKind::Info => HapticFeedback::Warning,
                IconKind::Success => HapticFeedback::Success,
                IconKind::Error => HapticFeedback::Error,
            });
        }
        self.present_icon(kind, status, duration);
    }

    pub fn show_icon_with_mask(&mut self, kind: IconKind, status: &str, mask: MaskType) {
        let previous = self.config.mask_type;
        self.config.mask_type = mask;
        self.show_icon(kind, status);
        self.config.mask_type = previous;
    }

    /// Dismiss immediately (fade-out still applies).
    pub fn dismiss(&mut self) {
        self.dismiss_internal(0.0, None);
    }

    /// Dismiss after `delay` seconds.
    pub fn dismiss_after(&mut self, delay: f32) {
        self.dismiss_internal(delay, None);
    }

    /// Dismiss immediately, invoking `completion` once fully hidden.
    pub fn dismiss_with_completion(&mut self, completion: impl FnOnce() + 'static) {
        self.dismiss_internal(0.0, Some(Box::new(completion)));
    }

    /// Decrement the activity reference count, dismissing when it reaches
    /// zero. A no-op when the count is already zero.
    pub fn pop_activity(&mut self) {
        if self.activity_count > 0 {
            self.activity_count -= 1;
            if self.activity_count == 0 {
                self.dismiss();
            }
        }
    }

    // ---- State machine ----------------------------------------------------

    fn present_progress(&mut self, progress: f32, status: &str) {
        log::debug!("present progress={progress} status={status:?} from {:?}", self.state);

        // A pending auto-dismiss means the previous presentation was
        // transient; its activity bookkeeping does not carry over
        if self.timers.auto_dismiss_armed() {
            self.activity_count = 0;
        }
        self.timers.cancel_all();

        self.icon = None;
        self.status = non_empty(status);
        self.progress = progress;
        self.active_mask = self.config.mask_type;

        if progress >= 0.0 {
            self.detach_spinner();
            self.ring_attached = true;
            // Instantaneous update; fades never animate stroke fractions
            self.ring.set_stroke_end(progress);
            self.background_ring.set_stroke_end(1.0);
            if progress == 0.0 {
                self.activity_count += 1;
            }
        } else {
            self.cancel_ring_animation();
            self.spinner_attached = true;
            self.spinner.mount(self.now);
            self.activity_count += 1;
        }

        self.begin_presentation(None);
    }

    fn present_icon(&mut self, kind: IconKind, status: &str, duration: f32) {
        log::debug!("present icon={kind:?} status={status:?} duration={duration:.2}s");

        self.timers.cancel_all();
        self.activity_count = 0;

        self.progress = UNDEFINED_PROGRESS;
        self.cancel_ring_animation();
        self.detach_spinner();

        // Absent icon degrades to text-only, never an error
        self.icon = self
            .config
            .icon_for(kind)
            .map(|source| ActiveIcon { kind, source });
        self.status = non_empty(status);
        self.active_mask = self.config.mask_type;

        self.begin_presentation(Some(duration));
    }

    fn begin_presentation(&mut self, dismiss_after: Option<f32>) {
        if self.config.grace_interval > 0.0 && self.alpha == 0.0 {
            self.timers
                .arm_grace(self.now, self.config.grace_interval, dismiss_after);
            self.state = VisibilityState::GracePending;
        } else {
            self.fade_in(dismiss_after);
        }
    }

    fn fade_in(&mut self, dismiss_after: Option<f32>) {
        if self.alpha < 1.0 {
            self.emit(HudEventKind::WillAppear);
            // An interrupted dismissal never runs its completion
            self.dismiss_completion = None;
            self.pending_auto_dismiss = dismiss_after;

            if self.config.fade_in_duration > 0.0 {
                self.fade = Some(Fade::fade_in(
                    self.now,
                    self.config.fade_in_duration,
                    self.alpha,
                ));
                self.scale = PRESENT_SCALE;
                self.state = VisibilityState::FadingIn;
            } else {
                self.fade = None;
                self.alpha = 1.0;
                self.scale = 1.0;
                self.finish_fade_in();
            }
        } else {
            // Already fully visible: reconfigure in place, only the
            // auto-dismiss timer is replaced
            if let Some(status) = &self.status {
                self.host.announce(status);
            }
            if let Some(duration) = dismiss_after {
                self.timers.arm_auto_dismiss(self.now, duration);
            }
            self.state = VisibilityState::Visible;
        }
    }

    fn finish_fade_in(&mut self) {
        // Guard against a stale fade-in completing under a newer fade-out
        if self.alpha == 1.0 {
            self.observing = true;
            self.emit(HudEventKind::DidAppear);
            if let Some(status) = self.status.clone() {
                self.host.announce(&status);
            }
            if let Some(duration) = self.pending_auto_dismiss.take() {
                self.timers.arm_auto_dismiss(self.now, duration);
            }
            self.state = VisibilityState::Visible;
            log::debug!("hud visible");
        }
    }

    fn dismiss_internal(&mut self, delay: f32, completion: Option<Box<dyn FnOnce()>>) {
        self.emit(HudEventKind::WillDisappear);
        self.activity_count = 0;
        self.dismiss_completion = completion;

        if delay > 0.0 {
            self.timers.arm_delayed_dismiss(self.now, delay);
        } else {
            self.begin_fade_out();
        }
    }

    fn begin_fade_out(&mut self) {
        self.timers.cancel_grace();
        self.pending_auto_dismiss = None;

        if self.config.fade_out_duration > 0.0 {
            self.fade = Some(Fade::fade_out(
                self.now,
                self.config.fade_out_duration,
                self.alpha,
            ));
            self.state = VisibilityState::FadingOut;
        } else {
            self.fade = None;
            self.alpha = 0.0;
            self.finish_fade_out();
        }
    }

    fn finish_fade_out(&mut self) {
        // Guard against a stale fade-out completing under a newer fade-in
        if self.alpha == 0.0 {
            self.detach_spinner();
            self.cancel_ring_animation();
            self.icon = None;
            self.progress = UNDEFINED_PROGRESS;
            self.scale = 1.0;
            self.observing = false;
            self.last_panel_rect = None;
            self.state = VisibilityState::Hidden;
            self.emit(HudEventKind::DidDisappear);
            if let Some(completion) = self.dismiss_completion.take() {
                completion();
            }
            log::debug!("hud hidden");
        }
    }

    fn detach_spinner(&mut self) {
        self.spinner_attached = false;
        self.spinner.unmount();
    }

    fn cancel_ring_animation(&mut self) {
        self.ring.set_stroke_end(0.0);
        self.ring.invalidate();
        self.background_ring.invalidate();
        self.ring_attached = false;
    }

    /// Advance timers and fades to `now`. Called by [`Self::show_frame`];
    /// call directly to drive the HUD with a synthetic clock.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        if let Some(dismiss_after) = self.timers.take_due_grace(now) {
            log::trace!("grace timer fired");
            self.fade_in(dismiss_after);
        }
        if self.timers.take_due_auto_dismiss(now) {
            log::trace!("auto-dismiss timer fired");
            self.dismiss_internal(0.0, None);
        }
        if self.timers.take_due_delayed_dismiss(now) {
            self.begin_fade_out();
        }

        if let Some(fade) = self.fade {
            self.alpha = fade.alpha_at(now);
            self.scale = fade.scale_at(now);
            if fade.finished(now) {
                self.fade = None;
                match fade.direction {
                    FadeDirection::In => self.finish_fade_in(),
                    FadeDirection::Out => self.finish_fade_out(),
                }
            }
        }
    }

    // ---- Frame integration ------------------------------------------------

    /// Drive and paint the HUD. Call once per frame, after the rest of the UI.
    pub fn show_frame(&mut self, ctx: &egui::Context) {
        self.tick(Instant::now());
        self.schedule_repaint(ctx);

        if self.state == VisibilityState::Hidden && self.alpha <= 0.0 {
            return;
        }

        let viewport = self
            .config
            .container_rect
            .unwrap_or_else(|| ctx.screen_rect());
        let keyboard_height = self.host.keyboard_height();

        // Touch events are only reported while fully presented
        if self.observing {
            self.handle_touches(ctx);
        }

        egui::Area::new(egui::Id::new("progress_hud"))
            .order(self.config.overlay_order)
            .fixed_pos(viewport.min)
            .show(ctx, |ui| {
                // Swallow input over the whole viewport unless mask is None
                if self.active_mask != MaskType::None {
                    ui.allocate_rect(viewport, Sense::click_and_drag());
                }
                if self.alpha > 0.0 {
                    self.paint_backdrop(ui, viewport, keyboard_height);
                    self.paint_panel(ui, viewport, keyboard_height);
                }
            });
    }

    fn schedule_repaint(&self, ctx: &egui::Context) {
        if self.fade.is_some() || (self.spinner_attached && self.alpha > 0.0) {
            ctx.request_repaint();
        } else if let Some(next) = self.timers.next_deadline_in(self.now) {
            ctx.request_repaint_after(next);
        }
    }

    fn handle_touches(&mut self, ctx: &egui::Context) {
        let pressed = ctx.input(|i| i.pointer.any_pressed());
        if !pressed {
            return;
        }
        self.emit(HudEventKind::DidReceiveTouch);

        let press_pos = ctx.input(|i| i.pointer.interact_pos());
        if let (Some(pos), Some(panel)) = (press_pos, self.last_panel_rect) {
            if panel.contains(pos) {
                self.emit(HudEventKind::DidTouchDownInside);
            }
        }
    }

    fn paint_backdrop(&mut self, ui: &egui::Ui, viewport: Rect, keyboard_height: f32) {
        let painter = ui.painter();
        match self.active_mask {
            MaskType::None | MaskType::Clear => {}
            MaskType::Dim => {
                let dim = Color32::from_black_alpha(102).gamma_multiply(self.alpha);
                painter.rect_filled(viewport, CornerRadius::ZERO, dim);
            }
            MaskType::Custom => {
                let fill = self.config.background_dim_color.gamma_multiply(self.alpha);
                painter.rect_filled(viewport, CornerRadius::ZERO, fill);
            }
            MaskType::Gradient => {
                self.backdrop.recenter(viewport, keyboard_height);
                self.backdrop.paint(painter, viewport, self.alpha);
            }
        }
    }

    fn paint_panel(&mut self, ui: &egui::Ui, viewport: Rect, keyboard_height: f32) {
        let painter = ui.painter();
        let alpha = self.alpha;
        let has_label = self.status.is_some();
        let foreground = self.config.foreground_for_style();

        // Measure status text against the fixed constraint box
        let galley = self.status.as_ref().map(|status| {
            painter.layout(
                status.clone(),
                self.config.font.clone(),
                foreground.gamma_multiply(alpha),
                LABEL_CONSTRAINT.x,
            )
        });
        let label_size = galley
            .as_ref()
            .map(|galley| {
                let size = galley.size();
                Vec2::new(size.x.ceil(), size.y.min(LABEL_CONSTRAINT.y).ceil())
            })
            .unwrap_or(Vec2::ZERO);

        // Reconfigure child visuals from the current config
        let radius = self.config.radius_for(has_label);
        self.spinner.set_radius(radius);
        self.spinner.set_thickness(self.config.ring_thickness);
        self.spinner.set_color(foreground);
        self.ring.set_radius(radius);
        self.ring.set_thickness(self.config.ring_thickness);
        self.ring.set_color(self.config.foreground_image_for_style());
        self.background_ring.set_radius(radius);
        self.background_ring.set_thickness(self.config.ring_thickness);
        self.background_ring.set_color(foreground.gamma_multiply(0.1));

        let has_content = self.icon.is_some() || self.spinner_attached || self.ring_attached;
        let content_size = if self.icon.is_some() {
            match self.icon.map(|icon| icon.source) {
                Some(StatusIcon::Texture { size, .. }) => size,
                _ => self.config.image_view_size,
            }
        } else if has_content {
            self.spinner.fitted_size()
        } else {
            Vec2::ZERO
        };

        // Geometry is recomputed from scratch every pass; only alpha and
        // scale ever interpolate
        let size = layout::panel_size(
            label_size,
            content_size,
            has_label,
            has_content,
            self.config.minimum_size,
        );
        let mut offset = self.config.offset_from_center;
        if self.config.motion_effect_enabled {
            offset += self
                .host
                .parallax_offset()
                .clamp(Vec2::splat(-PARALLAX_DEPTH_POINTS), Vec2::splat(PARALLAX_DEPTH_POINTS));
        }
        let center = layout::panel_center(viewport, keyboard_height, offset);
        let resolved = layout::resolve(
            center,
            size,
            label_size,
            content_size,
            has_label,
            has_content,
            self.config.minimum_size,
        );

        // The pop-in/out scale applies to the panel rect and the positions of
        // its children, about the panel center
        let scale = self.scale;
        let panel_rect = Rect::from_center_size(resolved.panel_rect.center(), size * scale);
        let content_center = scale_about(resolved.content_center, center, scale);
        let label_center = scale_about(resolved.label_center, center, scale);
        self.last_panel_rect = Some(panel_rect);

        let corner_radius = CornerRadius::same(self.config.corner_radius.round() as u8);
        let fill_opacity = if self.config.style == crate::config::HudStyle::Custom {
            1.0
        } else {
            // Stand-in for the translucent blur panel of the native original
            0.9
        };
        painter.rect_filled(
            panel_rect,
            corner_radius,
            self.config
                .background_for_style()
                .gamma_multiply(alpha * fill_opacity),
        );
        if self.config.border_width > 0.0 {
            painter.rect_stroke(
                panel_rect,
                corner_radius,
                Stroke::new(
                    self.config.border_width,
                    self.config.border_color.gamma_multiply(alpha),
                ),
                StrokeKind::Inside,
            );
        }

        if let Some(icon) = self.icon {
            self.paint_icon(painter, icon, content_center, content_size, alpha);
        } else if self.ring_attached {
            self.background_ring.paint(painter, content_center, alpha);
            self.ring.paint(painter, content_center, alpha);
        } else if self.spinner_attached {
            match self.config.animation_type {
                AnimationType::Flat => {
                    self.spinner.paint(painter, content_center, self.now, alpha);
                }
                AnimationType::Native => {
                    let diameter = radius * 2.0;
                    egui::Spinner::new()
                        .size(diameter)
                        .color(foreground.gamma_multiply(alpha))
                        .paint_at(
                            ui,
                            Rect::from_center_size(content_center, Vec2::splat(diameter)),
                        );
                }
            }
        }

        if let Some(galley) = galley {
            let label_rect = Rect::from_center_size(label_center, label_size);
            let text_pos = label_rect.center() - galley.size() / 2.0;
            painter
                .with_clip_rect(label_rect.expand(1.0))
                .galley(text_pos, galley, foreground.gamma_multiply(alpha));
        }
    }

    fn paint_icon(
        &self,
        painter: &egui::Painter,
        icon: ActiveIcon,
        center: Pos2,
        size: Vec2,
        alpha: f32,
    ) {
        let tint = if self.config.should_tint_images {
            self.config.foreground_image_for_style().gamma_multiply(alpha)
        } else {
            Color32::WHITE.gamma_multiply(alpha)
        };
        let rect = Rect::from_center_size(center, size);

        match icon.source {
            StatusIcon::Texture { id, .. } => {
                painter.image(
                    id,
                    rect,
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    tint,
                );
            }
            StatusIcon::Painted => {
                let stroke = Stroke::new(2.0, tint);
                let half = size.min_elem() / 2.0;
                match icon.kind {
                    IconKind::Info => {
                        painter.circle_stroke(center, half - 1.0, stroke);
                        painter.circle_filled(
                            center - Vec2::new(0.0, half * 0.45),
                            1.5,
                            tint,
                        );
                        painter.line_segment(
                            [
                                center - Vec2::new(0.0, half * 0.1),
                                center + Vec2::new(0.0, half * 0.5),
                            ],
                            stroke,
                        );
                    }
                    IconKind::Success => {
                        painter.add(egui::Shape::line(
                            vec![
                                center + Vec2::new(-half * 0.7, half * 0.05),
                                center + Vec2::new(-half * 0.2, half * 0.55),
                                center + Vec2::new(half * 0.75, -half * 0.5),
                            ],
                            stroke,
                        ));
                    }
                    IconKind::Error => {
                        painter.line_segment(
                            [
                                center + Vec2::new(-half * 0.6, -half * 0.6),
                                center + Vec2::new(half * 0.6, half * 0.6),
                            ],
                            stroke,
                        );
                        painter.line_segment(
                            [
                                center + Vec2::new(half * 0.6, -half * 0.6),
                                center + Vec2::new(-half * 0.6, half * 0.6),
                            ],
                            stroke,
                        );
                    }
                }
            }
        }
    }
}

fn non_empty(status: &str) -> Option<String> {
    if status.is_empty() {
        None
    } else {
        Some(status.to_owned())
    }
}

fn scale_about(pos: Pos2, center: Pos2, scale: f32) -> Pos2 {
    center + (pos - center) * scale
}
