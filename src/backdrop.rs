//! Radial gradient backdrop for `MaskType::Gradient`.
//!
//! A triangle-fan mesh from a fully transparent center to 75%-opaque black at
//! a radius of `min(width, height)`, staying at full opacity beyond that so
//! the viewport corners are covered. The center follows the visible-viewport
//! midpoint, adjusted for keyboard occlusion, on every layout pass.

use egui::epaint::Mesh;
use egui::{Color32, Painter, Pos2, Rect};
use std::f32::consts::TAU;

const GRADIENT_SEGMENTS: usize = 64;

/// Opacity at and beyond the gradient end radius.
const EDGE_ALPHA: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradientBackdrop {
    pub gradient_center: Pos2,
}

impl Default for RadialGradientBackdrop {
    fn default() -> Self {
        Self {
            gradient_center: Pos2::ZERO,
        }
    }
}

impl RadialGradientBackdrop {
    /// Recenter on the viewport midpoint, shifted up by keyboard occlusion.
    pub fn recenter(&mut self, bounds: Rect, keyboard_height: f32) {
        self.gradient_center = Pos2::new(
            bounds.center().x,
            bounds.min.y + (bounds.height() - keyboard_height) / 2.0,
        );
    }

    /// Paint the gradient over `bounds`, modulated by the HUD alpha.
    pub fn paint(&self, painter: &Painter, bounds: Rect, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let edge = Color32::from_black_alpha((EDGE_ALPHA * alpha * 255.0).round() as u8);
        let radius = bounds.width().min(bounds.height());
        // Far enough to cover the whole rect from any center
        let outer_radius = radius + bounds.width().hypot(bounds.height());

        let mut mesh = Mesh::default();
        mesh.colored_vertex(self.gradient_center, Color32::TRANSPARENT);
        for i in 0..=GRADIENT_SEGMENTS {
            let angle = i as f32 / GRADIENT_SEGMENTS as f32 * TAU;
            let dir = egui::Vec2::new(angle.cos(), angle.sin());
            mesh.colored_vertex(self.gradient_center + dir * radius, edge);
            mesh.colored_vertex(self.gradient_center + dir * outer_radius, edge);
        }
        for i in 0..GRADIENT_SEGMENTS as u32 {
            let inner_a = 1 + i * 2;
            let outer_a = inner_a + 1;
            let inner_b = inner_a + 2;
            let outer_b = inner_b + 1;
            // Fan from the transparent center to the gradient edge
            mesh.add_triangle(0, inner_a, inner_b);
            // Constant-opacity band out to the viewport corners
            mesh.add_triangle(inner_a, outer_a, outer_b);
            mesh.add_triangle(inner_a, outer_b, inner_b);
        }
        painter.with_clip_rect(bounds).add(egui::Shape::mesh(mesh));
    }
}
