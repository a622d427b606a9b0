//! Shape generation for 2D primitives

use super::scene::{Rect, Scene};
use super::vertex::Vertex;

/// Map play-field pixels (origin top-left, y down) to NDC (-1..1, y up)
#[inline]
pub fn field_to_ndc(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    (x / width * 2.0 - 1.0, 1.0 - y / height * 2.0)
}

/// Generate vertices for a filled rectangle (two triangles), in field pixels
pub fn rect(r: &Rect) -> [Vertex; 6] {
    let (x0, y0) = (r.x, r.y);
    let (x1, y1) = (r.x + r.w, r.y + r.h);
    [
        Vertex::new(x0, y0, r.color),
        Vertex::new(x1, y0, r.color),
        Vertex::new(x0, y1, r.color),
        Vertex::new(x0, y1, r.color),
        Vertex::new(x1, y0, r.color),
        Vertex::new(x1, y1, r.color),
    ]
}

/// Tessellate every rectangle of a scene, preserving draw order, in NDC
pub fn scene_vertices(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(scene.rects().count() * 6);
    for r in scene.rects() {
        // Degenerate rectangles (e.g. a gate whose top is at 0) add nothing
        if r.w <= 0.0 || r.h <= 0.0 {
            continue;
        }
        for v in rect(r) {
            let (x, y) = field_to_ndc(v.position[0], v.position[1], scene.width, scene.height);
            vertices.push(Vertex::new(x, y, v.color));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::scene::build_scene;
    use crate::renderer::vertex::colors;
    use crate::settings::Settings;
    use crate::sim::SessionState;

    #[test]
    fn test_field_to_ndc_corners() {
        assert_eq!(field_to_ndc(0.0, 0.0, 400.0, 600.0), (-1.0, 1.0));
        assert_eq!(field_to_ndc(400.0, 600.0, 400.0, 600.0), (1.0, -1.0));
        assert_eq!(field_to_ndc(200.0, 300.0, 400.0, 600.0), (0.0, 0.0));
    }

    #[test]
    fn test_rect_covers_extent() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            w: 30.0,
            h: 40.0,
            color: colors::SPRITE,
        };
        let verts = rect(&r);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_scene_vertices_background_first() {
        let state = SessionState::new(Settings::default(), 1);
        let scene = build_scene(&state.snapshot());
        let verts = scene_vertices(&scene);
        // Background + sprite
        assert_eq!(verts.len(), 12);
        assert_eq!(verts[0].color, colors::BACKGROUND);
        assert_eq!(verts[0].position, [-1.0, 1.0]);
        assert_eq!(verts[6].color, colors::SPRITE);
    }
}
