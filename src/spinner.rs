//! Indeterminate "comet" ring spinner.
//!
//! A ~270° visible arc chases around the ring: the stroke window sweeps along
//! a two-turn arc path while an angular gradient mask rotates underneath it,
//! both on a one-second linear loop. Geometry depends on the radius, so a
//! radius change marks the cached arc stale and it is rebuilt on next paint;
//! the animation clock starts when the spinner is mounted and stops only by
//! unmounting.

use egui::{Color32, Painter, Pos2, Vec2};
use instant::Instant;
use std::f32::consts::{PI, TAU};

/// One full loop of both the mask rotation and the stroke sweep.
const ANIMATION_DURATION: f32 = 1.0;

/// Stroke window endpoints as fractions of the arc path, at loop start.
const STROKE_START_RANGE: (f32, f32) = (0.015, 0.515);
const STROKE_END_RANGE: (f32, f32) = (0.485, 0.985);

/// Arc path: two full turns starting at the bottom of the ring.
const ARC_START_ANGLE: f32 = PI * 3.0 / 2.0;
const ARC_SWEEP: f32 = 2.0 * TAU;

const ARC_SAMPLES: usize = 180;

/// Margin between the arc and the edge of the fitted bounds.
const PADDING: f32 = 5.0;

/// Radius-dependent geometry lifecycle (rebuild-on-next-access).
#[derive(Debug, Clone, PartialEq)]
enum LayerState {
    Uninitialized,
    Built(ArcGeometry),
    Stale,
}

/// Unit directions sampled along the arc path, cached per radius.
#[derive(Debug, Clone, PartialEq)]
struct ArcGeometry {
    radius: f32,
    /// (path fraction, angle, unit direction) per sample
    samples: Vec<(f32, f32, Vec2)>,
}

impl ArcGeometry {
    fn build(radius: f32) -> Self {
        let samples = (0..ARC_SAMPLES)
            .map(|i| {
                let fraction = i as f32 / (ARC_SAMPLES - 1) as f32;
                let angle = ARC_START_ANGLE + fraction * ARC_SWEEP;
                (fraction, angle, Vec2::new(angle.cos(), angle.sin()))
            })
            .collect();
        Self { radius, samples }
    }
}

pub struct IndefiniteSpinner {
    radius: f32,
    thickness: f32,
    color: Color32,
    geometry: LayerState,
    mounted_at: Option<Instant>,
}

impl IndefiniteSpinner {
    pub fn new(radius: f32, thickness: f32, color: Color32) -> Self {
        Self {
            radius,
            thickness,
            color,
            geometry: LayerState::Uninitialized,
            mounted_at: None,
        }
    }

    /// Changing the radius invalidates the cached arc; thickness and color
    /// update in place.
    pub fn set_radius(&mut self, radius: f32) {
        if radius != self.radius {
            self.radius = radius;
            if matches!(self.geometry, LayerState::Built(_)) {
                self.geometry = LayerState::Stale;
            }
        }
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Square bounds the spinner fits in.
    pub fn fitted_size(&self) -> Vec2 {
        let side = (self.radius + self.thickness / 2.0 + PADDING) * 2.0;
        Vec2::splat(side)
    }

    /// Start the animation clock. Called when the spinner is attached.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted_at.is_none() {
            self.mounted_at = Some(now);
        }
    }

    /// Stop animating and drop the cached geometry. This is the only way the
    /// loop ends; there is no explicit stop while mounted.
    pub fn unmount(&mut self) {
        self.mounted_at = None;
        self.geometry = LayerState::Uninitialized;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted_at.is_some()
    }

    fn geometry(&mut self) -> &ArcGeometry {
        if !matches!(self.geometry, LayerState::Built(ref g) if g.radius == self.radius) {
            self.geometry = LayerState::Built(ArcGeometry::build(self.radius));
        }
        match &self.geometry {
            LayerState::Built(g) => g,
            _ => unreachable!(),
        }
    }

    /// Stroke window `(start, end)` as path fractions at time `now`.
    fn stroke_window(&self, now: Instant) -> (f32, f32) {
        let elapsed = self
            .mounted_at
            .map(|t| (now - t).as_secs_f32())
            .unwrap_or(0.0);
        let loop_t = (elapsed / ANIMATION_DURATION).fract();
        (
            STROKE_START_RANGE.0 + (STROKE_START_RANGE.1 - STROKE_START_RANGE.0) * loop_t,
            STROKE_END_RANGE.0 + (STROKE_END_RANGE.1 - STROKE_END_RANGE.0) * loop_t,
        )
    }

    /// Mask rotation in radians at time `now`.
    fn mask_rotation(&self, now: Instant) -> f32 {
        let elapsed = self
            .mounted_at
            .map(|t| (now - t).as_secs_f32())
            .unwrap_or(0.0);
        TAU * (elapsed / ANIMATION_DURATION).fract()
    }

    /// Paint the spinner centered at `center`, modulated by the HUD alpha.
    pub fn paint(&mut self, painter: &Painter, center: Pos2, now: Instant, alpha: f32) {
        let thickness = self.thickness;
        let color = self.color;
        let radius = self.radius;
        let (start, end) = self.stroke_window(now);
        let rotation = self.mask_rotation(now);

        let geometry = self.geometry();
        let mut previous: Option<(Pos2, f32)> = None;
        let mut endpoints: (Option<Pos2>, Option<Pos2>) = (None, None);

        for (fraction, angle, dir) in &geometry.samples {
            if *fraction < start || *fraction > end {
                previous = None;
                continue;
            }
            let pos = center + *dir * radius;
            // Angular gradient mask: fully opaque just behind the rotating
            // mask edge, fading to transparent ahead of it
            let mask = ((angle - rotation).rem_euclid(TAU)) / TAU;
            if let Some((prev_pos, prev_mask)) = previous {
                let segment_alpha = (mask + prev_mask) / 2.0 * alpha;
                painter.line_segment(
                    [prev_pos, pos],
                    egui::Stroke::new(thickness, color.gamma_multiply(segment_alpha)),
                );
            }
            if endpoints.0.is_none() {
                endpoints.0 = Some(pos);
            }
            endpoints.1 = Some(pos);
            previous = Some((pos, mask));
        }

        // Round caps
        for cap in [endpoints.0, endpoints.1].into_iter().flatten() {
            painter.circle_filled(cap, thickness / 2.0, color.gamma_multiply(alpha * 0.5));
        }
    }
}
