use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4, Vec4Swizzles};

use crate::MaterialId;

/// Finite parallelogram spanned by two edge vectors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Quad {
    /// Edge vector in `.xyz`, squared edge length in `.w`.
    pub right: Vec4,
    /// Edge vector in `.xyz`, squared edge length in `.w`.
    pub forward: Vec4,
    pub position: Vec3,
    pub material_id: MaterialId,
    pub normal: Vec3,
    pub _pad: i32,
}

impl Quad {
    pub fn new(
        position: Vec3,
        right: Vec3,
        forward: Vec3,
        normal: Vec3,
        material_id: MaterialId,
    ) -> Self {
        Self {
            right: right.extend(right.length_squared()),
            forward: forward.extend(forward.length_squared()),
            position,
            material_id,
            normal,
            _pad: 0,
        }
    }

    pub fn right(&self) -> Vec3 {
        self.right.xyz()
    }

    pub fn forward(&self) -> Vec3 {
        self.forward.xyz()
    }
}

#[cfg(test)]
mod tests {
    use std::mem;

    use glam::vec3;

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(64, mem::size_of::<Quad>());
    }

    #[test]
    fn edge_lengths() {
        let target = Quad::new(
            Vec3::ZERO,
            vec3(2.0, 0.0, 0.0),
            vec3(0.0, 0.0, 3.0),
            Vec3::Y,
            MaterialId::new(0),
        );

        assert_eq!(4.0, target.right.w);
        assert_eq!(9.0, target.forward.w);
    }
}
