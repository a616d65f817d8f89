use bytemuck::{Pod, Zeroable};

/// Opaque handle into the material table owned by the rendering
/// collaborator; assigned before the acceleration structure is built and
/// carried through unchanged.
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable,
)]
pub struct MaterialId(i32);

impl MaterialId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}
