use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4, Vec4Swizzles};

use crate::MaterialId;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Sphere {
    /// Center in `.xyz`, radius in `.w`.
    pub position_and_radius: Vec4,
    pub material_id: MaterialId,
    pub _pad: [i32; 3],
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material_id: MaterialId) -> Self {
        Self {
            position_and_radius: center.extend(radius),
            material_id,
            _pad: [0; 3],
        }
    }

    pub fn center(&self) -> Vec3 {
        self.position_and_radius.xyz()
    }

    pub fn radius(&self) -> f32 {
        self.position_and_radius.w
    }
}
