//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in canvas coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Segments used for circles unless a caller needs something finer
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (stroked circle)
pub fn ring(center: Vec2, radius: f32, stroke: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let inner_radius = (radius - stroke / 2.0).max(0.0);
    let outer_radius = radius + stroke / 2.0;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a straight line of the given width
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let half = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + half;
    let b = from - half;
    let c = to + half;
    let d = to - half;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertices_on_radius() {
        let center = Vec2::new(10.0, 10.0);
        let verts = circle(center, 5.0, [1.0; 4], 8);
        assert_eq!(verts.len(), 24);
        for tri in verts.chunks(3) {
            assert_eq!(Vec2::from(tri[0].position), center);
            let edge = Vec2::from(tri[1].position);
            assert!((edge.distance(center) - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ring_stays_within_stroke() {
        let verts = ring(Vec2::ZERO, 10.0, 2.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 16 * 6);
        for v in &verts {
            let r = Vec2::from(v.position).length();
            assert!((9.0 - 1e-4..=11.0 + 1e-4).contains(&r));
        }
    }

    #[test]
    fn test_line_width_and_degenerate() {
        let verts = line(Vec2::ZERO, Vec2::new(0.0, 10.0), 2.0, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!((v.position[0].abs() - 1.0).abs() < 1e-5);
        }
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, [1.0; 4]).is_empty());
    }
}
