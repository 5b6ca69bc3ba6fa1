//! Linear-gradient meshes: the full-screen background wash and the glossy
//! rounded card fill.
//!
//! egui shapes take a single fill color, so both gradients are built as
//! meshes with per-vertex colors and interpolation left to the GPU.

use eframe::egui::{Color32, Mesh, Pos2, Rect, Rgba, lerp, pos2, vec2};
use std::f32::consts::{FRAC_PI_2, PI};

/// Segments used to approximate each rounded corner arc.
const CORNER_SEGMENTS: usize = 8;

/// Two-triangle mesh covering `rect`, color interpolated from `start` at the
/// top-left corner to `end` at the bottom-right.
pub fn linear(rect: Rect, start: Color32, end: Color32) -> Mesh {
    let mid = mix(start, end, 0.5);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), start);
    mesh.colored_vertex(rect.right_top(), mid);
    mesh.colored_vertex(rect.left_bottom(), mid);
    mesh.colored_vertex(rect.right_bottom(), end);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    mesh
}

/// Rounded-rectangle mesh filled with the same diagonal gradient, tessellated
/// as a triangle fan around the center so the outline can follow the corner
/// arcs.
pub fn rounded_rect(rect: Rect, radius: f32, start: Color32, end: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.center(), mix(start, end, 0.5));

    let outline = rounded_outline(rect, radius);
    let n = outline.len() as u32;
    for point in outline {
        mesh.colored_vertex(point, mix(start, end, diagonal_t(rect, point)));
    }
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    mesh
}

/// Gradient parameter of `point`: its position projected onto the rect's
/// top-left → bottom-right diagonal, clamped to `0.0..=1.0`.
fn diagonal_t(rect: Rect, point: Pos2) -> f32 {
    let size = rect.size();
    let len_sq = size.x * size.x + size.y * size.y;
    if len_sq == 0.0 {
        return 0.0;
    }
    let d = point - rect.left_top();
    ((d.x * size.x + d.y * size.y) / len_sq).clamp(0.0, 1.0)
}

fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    lerp(Rgba::from(a)..=Rgba::from(b), t).into()
}

/// Clockwise outline of `rect` with circular corner arcs, starting at the
/// bottom-right corner. Angles follow screen coordinates (y down).
fn rounded_outline(rect: Rect, radius: f32) -> Vec<Pos2> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    let arcs = [
        (pos2(rect.right() - r, rect.bottom() - r), 0.0),
        (pos2(rect.left() + r, rect.bottom() - r), FRAC_PI_2),
        (pos2(rect.left() + r, rect.top() + r), PI),
        (pos2(rect.right() - r, rect.top() + r), PI + FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    for (center, start_angle) in arcs {
        for i in 0..=CORNER_SEGMENTS {
            let angle = start_angle + FRAC_PI_2 * i as f32 / CORNER_SEGMENTS as f32;
            points.push(center + vec2(angle.cos(), angle.sin()) * r);
        }
    }
    points
}
