use glam::Vec3;

use crate::{gpu, BoundingBox};

/// Triangle with per-vertex normals; positions are world-space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangle {
    vertices: [Vec3; 3],
    normals: [Vec3; 3],
    material_id: gpu::MaterialId,
}

impl Triangle {
    pub fn new(
        vertices: [Vec3; 3],
        normals: [Vec3; 3],
        material_id: gpu::MaterialId,
    ) -> Self {
        Self {
            vertices,
            normals,
            material_id,
        }
    }

    pub fn with_vertices(mut self, vertices: [impl Into<Vec3>; 3]) -> Self {
        self.vertices = vertices.map(Into::into);
        self
    }

    pub fn with_normals(mut self, normals: [impl Into<Vec3>; 3]) -> Self {
        self.normals = normals.map(Into::into);
        self
    }

    pub fn with_material_id(mut self, material_id: gpu::MaterialId) -> Self {
        self.material_id = material_id;
        self
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        self.vertices
    }

    pub fn normals(&self) -> [Vec3; 3] {
        self.normals
    }

    pub fn material_id(&self) -> gpu::MaterialId {
        self.material_id
    }

    pub fn center(&self) -> Vec3 {
        self.vertices.into_iter().sum::<Vec3>() / 3.0
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices).padded()
    }

    pub fn area(&self) -> f32 {
        let [v0, v1, v2] = self.vertices;

        0.5 * (v1 - v0).cross(v2 - v0).length()
    }

    pub(crate) fn serialize(&self) -> gpu::Triangle {
        gpu::Triangle::new(self.vertices, self.normals, self.material_id)
    }
}
