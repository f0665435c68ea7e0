//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::Bubble;

/// Segments used for a circle of the given radius (more for larger circles)
pub fn segments_for_radius(radius: f32) -> u32 {
    ((radius * 1.5) as u32).clamp(12, 64)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    if radius <= 0.0 || segments < 3 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

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

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a bubble: concentric discs alternating pink and cream,
/// drawn outermost first so inner discs paint over outer ones
pub fn bubble(bubble: &Bubble) -> Vec<Vertex> {
    let segments = segments_for_radius(bubble.radius);
    bubble
        .rings()
        .iter()
        .enumerate()
        .flat_map(|(i, &r)| {
            let color = if i % 2 == 0 {
                colors::BUBBLE_MAIN
            } else {
                colors::BUBBLE_ALT
            };
            circle(bubble.pos, r, color, segments)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertices_on_rim() {
        let center = Vec2::new(10.0, 20.0);
        let verts = circle(center, 5.0, colors::TEXT, 16);
        assert_eq!(verts.len(), 48);
        for tri in verts.chunks(3) {
            assert_eq!(tri[0].position, [10.0, 20.0]);
            for v in &tri[1..] {
                let d = Vec2::from(v.position).distance(center);
                assert!((d - 5.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_degenerate_circle_is_empty() {
        assert!(circle(Vec2::ZERO, 0.0, colors::TEXT, 16).is_empty());
        assert!(circle(Vec2::ZERO, -1.0, colors::TEXT, 16).is_empty());
    }

    #[test]
    fn test_rect() {
        let verts = rect(Vec2::ZERO, Vec2::new(800.0, 55.0), colors::UI_BAR);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().all(|v| v.position[1] <= 55.0));
    }

    #[test]
    fn test_bubble_has_four_rings() {
        let mut b = Bubble::new(1, Vec2::new(100.0, 100.0));
        b.radius = 20.0;
        let segments = segments_for_radius(20.0);
        let verts = bubble(&b);
        assert_eq!(verts.len(), (4 * segments * 3) as usize);
        assert_eq!(verts[0].color, colors::BUBBLE_MAIN);
        assert_eq!(verts[(segments * 3) as usize].color, colors::BUBBLE_ALT);
    }
}
