//! Determinate progress ring.
//!
//! A closed circular path starting at the top (−90°) going clockwise, drawn
//! up to the `stroke_end` fraction. The controller keeps two instances: a
//! full low-alpha background track and a foreground ring whose `stroke_end`
//! tracks the reported progress. Updating `stroke_end` never animates; a
//! radius change rebuilds the cached path.

use egui::{Color32, Painter, Pos2, Vec2};
use std::f32::consts::{PI, TAU};

const CIRCLE_SAMPLES: usize = 128;

/// Margin between the ring and the edge of the fitted bounds.
const PADDING: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
enum LayerState {
    Uninitialized,
    Built(CircleGeometry),
    Stale,
}

/// Unit directions around the circle, cached per radius.
#[derive(Debug, Clone, PartialEq)]
struct CircleGeometry {
    radius: f32,
    /// (path fraction, unit direction) per sample
    samples: Vec<(f32, Vec2)>,
}

impl CircleGeometry {
    fn build(radius: f32) -> Self {
        let samples = (0..=CIRCLE_SAMPLES)
            .map(|i| {
                let fraction = i as f32 / CIRCLE_SAMPLES as f32;
                // Start at the top, clockwise
                let angle = -PI / 2.0 + fraction * TAU;
                (fraction, Vec2::new(angle.cos(), angle.sin()))
            })
            .collect();
        Self { radius, samples }
    }
}

pub struct ProgressRing {
    radius: f32,
    thickness: f32,
    color: Color32,
    stroke_end: f32,
    geometry: LayerState,
}

impl ProgressRing {
    pub fn new(radius: f32, thickness: f32, color: Color32) -> Self {
        Self {
            radius,
            thickness,
            color,
            stroke_end: 0.0,
            geometry: LayerState::Uninitialized,
        }
    }

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

    /// Set the drawn fraction of the circle. Takes effect on the next paint,
    /// instantaneously; any animated transition is the caller's business.
    pub fn set_stroke_end(&mut self, stroke_end: f32) {
        self.stroke_end = stroke_end.clamp(0.0, 1.0);
    }

    pub fn stroke_end(&self) -> f32 {
        self.stroke_end
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Square bounds the ring fits in.
    pub fn fitted_size(&self) -> Vec2 {
        let side = (self.radius + self.thickness / 2.0 + PADDING) * 2.0;
        Vec2::splat(side)
    }

    /// Drop the cached path. Called when the ring is detached.
    pub fn invalidate(&mut self) {
        self.geometry = LayerState::Uninitialized;
    }

    fn geometry(&mut self) -> &CircleGeometry {
        if !matches!(self.geometry, LayerState::Built(ref g) if g.radius == self.radius) {
            self.geometry = LayerState::Built(CircleGeometry::build(self.radius));
        }
        match &self.geometry {
            LayerState::Built(g) => g,
            _ => unreachable!(),
        }
    }

    /// Paint the ring centered at `center`, modulated by the HUD alpha.
    pub fn paint(&mut self, painter: &Painter, center: Pos2, alpha: f32) {
        if self.stroke_end <= 0.0 || alpha <= 0.0 {
            return;
        }
        let radius = self.radius;
        let thickness = self.thickness;
        let stroke_end = self.stroke_end;
        let color = self.color.gamma_multiply(alpha);

        let geometry = self.geometry();
        let points: Vec<Pos2> = geometry
            .samples
            .iter()
            .take_while(|(fraction, _)| *fraction <= stroke_end)
            .map(|(_, dir)| center + *dir * radius)
            .collect();

        if let (Some(&head), Some(&tail)) = (points.first(), points.last()) {
            if points.len() >= 2 {
                painter.add(egui::Shape::line(points, egui::Stroke::new(thickness, color)));
                // Round caps
                painter.circle_filled(head, thickness / 2.0, color);
                painter.circle_filled(tail, thickness / 2.0, color);
            }
        }
    }
}
