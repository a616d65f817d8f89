use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::MaterialId;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Triangle {
    pub position0: Vec3,
    pub material_id: MaterialId,
    pub position1: Vec3,
    pub _pad0: i32,
    pub position2: Vec3,
    pub _pad1: i32,
    pub normal0: Vec3,
    pub _pad2: i32,
    pub normal1: Vec3,
    pub _pad3: i32,
    pub normal2: Vec3,
    pub _pad4: i32,
}

impl Triangle {
    pub fn new(
        positions: [Vec3; 3],
        normals: [Vec3; 3],
        material_id: MaterialId,
    ) -> Self {
        Self {
            position0: positions[0],
            material_id,
            position1: positions[1],
            _pad0: 0,
            position2: positions[2],
            _pad1: 0,
            normal0: normals[0],
            _pad2: 0,
            normal1: normals[1],
            _pad3: 0,
            normal2: normals[2],
            _pad4: 0,
        }
    }

    pub fn positions(&self) -> [Vec3; 3] {
        [self.position0, self.position1, self.position2]
    }

    pub fn normals(&self) -> [Vec3; 3] {
        [self.normal0, self.normal1, self.normal2]
    }
}

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(96, mem::size_of::<Triangle>());
        assert_eq!(4, mem::align_of::<Triangle>());
    }
}
