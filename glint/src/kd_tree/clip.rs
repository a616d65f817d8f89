use glam::Vec3;

use crate::{gpu, Axis, Triangle};

/// Pieces of a triangle clipped against an axis-aligned plane; either
/// side holds zero, one or two triangles.
pub(crate) struct Split {
    pub negative: Vec<Triangle>,
    pub positive: Vec<Triangle>,
}

/// Cuts `triangle` along the plane `axis = coord`.
///
/// Each edge contributes its start vertex to that vertex's side; an edge
/// crossing the plane additionally contributes the interpolated
/// intersection vertex to both sides. That leaves each side with a
/// polygon of 0, 3 or 4 vertices, fanned back into triangles. Normals
/// interpolate with the same parametric `t` as positions, so shading
/// stays continuous across the cut.
pub(crate) fn split(triangle: &Triangle, axis: Axis, coord: f32) -> Split {
    let vertices = triangle.vertices();
    let normals = triangle.normals();

    let mut negative = Polygon::default();
    let mut positive = Polygon::default();

    for i in 0..3 {
        let j = (i + 1) % 3;

        let start = (vertices[i], normals[i]);
        let end = (vertices[j], normals[j]);

        let start_is_negative = start.0[axis] <= coord;
        let end_is_negative = end.0[axis] <= coord;

        if start_is_negative {
            negative.push(start);
        } else {
            positive.push(start);
        }

        if start_is_negative != end_is_negative {
            let t = (coord - start.0[axis]) / (end.0[axis] - start.0[axis]);

            let crossing =
                (start.0.lerp(end.0, t), start.1.lerp(end.1, t));

            negative.push(crossing);
            positive.push(crossing);
        }
    }

    Split {
        negative: negative.fan(triangle.material_id()),
        positive: positive.fan(triangle.material_id()),
    }
}

#[derive(Default)]
struct Polygon {
    vertices: Vec<(Vec3, Vec3)>,
}

impl Polygon {
    fn push(&mut self, vertex: (Vec3, Vec3)) {
        self.vertices.push(vertex);
    }

    fn fan(self, material_id: gpu::MaterialId) -> Vec<Triangle> {
        let triangle = |a: usize, b: usize, c: usize| {
            Triangle::new(
                [self.vertices[a].0, self.vertices[b].0, self.vertices[c].0],
                [self.vertices[a].1, self.vertices[b].1, self.vertices[c].1],
                material_id,
            )
        };

        match self.vertices.len() {
            0 => Vec::new(),
            3 => vec![triangle(0, 1, 2)],
            4 => vec![triangle(0, 1, 2), triangle(0, 2, 3)],
            len => unreachable!("clipped polygon with {} vertices", len),
        }
    }
}
