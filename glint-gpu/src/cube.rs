use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::MaterialId;

/// Oriented box; the kernel intersects it in local space, hence both
/// transforms are precomputed here.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Cube {
    pub local_to_world: Mat4,
    pub world_to_local: Mat4,
    pub size: Vec3,
    pub material_id: MaterialId,
}

impl Cube {
    pub fn new(
        local_to_world: Mat4,
        size: Vec3,
        material_id: MaterialId,
    ) -> Self {
        Self {
            local_to_world,
            world_to_local: local_to_world.inverse(),
            size,
            material_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::mem;

    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(144, mem::size_of::<Cube>());
    }

    #[test]
    fn inverse_transform() {
        let target = Cube::new(
            Mat4::from_translation(vec3(1.0, 2.0, 3.0)),
            Vec3::ONE,
            MaterialId::new(0),
        );

        let p = target
            .world_to_local
            .transform_point3(vec3(1.0, 2.0, 3.0));

        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(p.z, 0.0);
    }
}
