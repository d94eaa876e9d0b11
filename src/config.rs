//! HUD configuration: visual style knobs, timing intervals, and status icons

use egui::{Color32, FontId, Order, Rect, TextureId, Vec2};

/// Sentinel for "indeterminate" progress (spinner instead of ring).
pub const UNDEFINED_PROGRESS: f32 = -1.0;

/// Maximum parallax displacement applied when motion effects are enabled.
pub const PARALLAX_DEPTH_POINTS: f32 = 10.0;

pub(crate) const DEFAULT_ANIMATION_DURATION: f32 = 0.15;

/// Bounding box the status text is measured against (width, height).
pub(crate) const LABEL_CONSTRAINT: Vec2 = Vec2::new(200.0, 300.0);

/// Color scheme of the HUD panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HudStyle {
    /// Black content on a white panel
    #[default]
    Light,
    /// White content on a black panel
    Dark,
    /// Colors taken from the configured foreground/background fields
    Custom,
}

/// Backdrop drawn between the application and the HUD panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaskType {
    /// No backdrop, input passes through to the application
    #[default]
    None,
    /// Transparent backdrop that still swallows input
    Clear,
    /// Flat black dimming at 40% opacity
    Dim,
    /// Radial gradient from transparent center to 75% black
    Gradient,
    /// Flat fill with the configured dim color
    Custom,
}

/// Which indeterminate animation is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationType {
    /// The crate's own comet-arc ring spinner
    #[default]
    Flat,
    /// egui's built-in `Spinner` widget
    Native,
}

/// Status icon family shown by the icon presentations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IconKind {
    Info,
    Success,
    Error,
}

/// Source of a status icon image.
///
/// `Painted` draws a vector glyph so the crate works without any texture
/// assets; `Texture` lets the host supply its own uploaded image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusIcon {
    Painted,
    Texture { id: TextureId, size: Vec2 },
}

/// All visual and behavioral knobs of the HUD.
///
/// One instance lives inside [`crate::ProgressHud`] and may be mutated at any
/// time; changes take effect on the next presentation or frame.
#[derive(Debug, Clone)]
pub struct HudConfig {
    pub style: HudStyle,
    pub mask_type: MaskType,
    pub animation_type: AnimationType,
    /// Center the HUD inside this rect instead of the whole viewport
    pub container_rect: Option<Rect>,
    /// Lower bound on the panel size
    pub minimum_size: Vec2,
    pub ring_thickness: f32,
    /// Ring radius when status text is shown
    pub ring_radius: f32,
    /// Ring radius when no status text is shown
    pub ring_no_text_radius: f32,
    pub corner_radius: f32,
    pub border_color: Color32,
    pub border_width: f32,
    pub font: FontId,
    pub foreground_color: Color32,
    /// Tint for icons; falls back to the foreground color when `None`
    pub foreground_image_color: Option<Color32>,
    pub background_color: Color32,
    /// Fill used by `MaskType::Custom`
    pub background_dim_color: Color32,
    pub image_view_size: Vec2,
    pub should_tint_images: bool,
    pub info_icon: Option<StatusIcon>,
    pub success_icon: Option<StatusIcon>,
    pub error_icon: Option<StatusIcon>,
    /// Delay in seconds before anything becomes visible, to avoid flicker on
    /// very short operations
    pub grace_interval: f32,
    /// Lower bound in seconds for the computed icon auto-dismiss duration
    pub minimum_dismiss_interval: f32,
    /// Upper bound in seconds for the computed icon auto-dismiss duration
    pub maximum_dismiss_interval: f32,
    pub fade_in_duration: f32,
    pub fade_out_duration: f32,
    /// egui layer the overlay is painted on
    pub overlay_order: Order,
    pub haptics_enabled: bool,
    /// Apply the host's parallax offset to the panel position
    pub motion_effect_enabled: bool,
    pub offset_from_center: Vec2,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            style: HudStyle::Light,
            mask_type: MaskType::None,
            animation_type: AnimationType::Flat,
            container_rect: None,
            minimum_size: Vec2::ZERO,
            ring_thickness: 2.0,
            ring_radius: 18.0,
            ring_no_text_radius: 24.0,
            corner_radius: 14.0,
            border_color: Color32::BLACK,
            border_width: 0.0,
            font: FontId::proportional(15.0),
            foreground_color: Color32::BLACK,
            foreground_image_color: None,
            background_color: Color32::WHITE,
            background_dim_color: Color32::from_black_alpha(102),
            image_view_size: Vec2::new(28.0, 28.0),
            should_tint_images: true,
            info_icon: Some(StatusIcon::Painted),
            success_icon: Some(StatusIcon::Painted),
            error_icon: Some(StatusIcon::Painted),
            grace_interval: 0.0,
            minimum_dismiss_interval: 5.0,
            maximum_dismiss_interval: f32::INFINITY,
            fade_in_duration: DEFAULT_ANIMATION_DURATION,
            fade_out_duration: DEFAULT_ANIMATION_DURATION,
            overlay_order: Order::Foreground,
            haptics_enabled: false,
            motion_effect_enabled: true,
            offset_from_center: Vec2::ZERO,
        }
    }
}

impl HudConfig {
    /// Content color derived from the active style.
    pub fn foreground_for_style(&self) -> Color32 {
        match self.style {
            HudStyle::Light => Color32::BLACK,
            HudStyle::Dark => Color32::WHITE,
            HudStyle::Custom => self.foreground_color,
        }
    }

    /// Icon tint, falling back to the foreground color.
    pub fn foreground_image_for_style(&self) -> Color32 {
        self.foreground_image_color
            .unwrap_or_else(|| self.foreground_for_style())
    }

    /// Panel fill derived from the active style.
    pub fn background_for_style(&self) -> Color32 {
        match self.style {
            HudStyle::Light => Color32::WHITE,
            HudStyle::Dark => Color32::BLACK,
            HudStyle::Custom => self.background_color,
        }
    }

    /// Configured icon source for an icon kind, if any.
    pub fn icon_for(&self, kind: IconKind) -> Option<StatusIcon> {
        match kind {
            IconKind::Info => self.info_icon,
            IconKind::Success => self.success_icon,
            IconKind::Error => self.error_icon,
        }
    }

    /// How long an icon presentation with `status` stays on screen, scaled by
    /// message length and clamped to the configured dismiss interval bounds.
    pub fn display_duration_for(&self, status: &str) -> f32 {
        let scaled = status.chars().count() as f32 * 0.06 + 0.5;
        scaled
            .max(self.minimum_dismiss_interval)
            .min(self.maximum_dismiss_interval)
    }

    /// Ring/spinner radius, depending on whether status text is shown.
    pub(crate) fn radius_for(&self, has_status: bool) -> f32 {
        if has_status {
            self.ring_radius
        } else {
            self.ring_no_text_radius
        }
    }
}
