use crate::gpu;
use crate::gpu::NIL;

/// Flattened output of a build: one node array plus per-type primitive
/// arrays, everything index-based and ready for upload.
///
/// The builder hands this off by value; it stays immutable (and so
/// freely shareable) until the next rebuild replaces it wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneBuffers {
    pub(crate) root: i32,
    pub(crate) nodes: Vec<gpu::Node>,
    pub(crate) primitive_refs: Vec<gpu::PrimitiveRef>,
    pub(crate) spheres: Vec<gpu::Sphere>,
    pub(crate) quads: Vec<gpu::Quad>,
    pub(crate) cubes: Vec<gpu::Cube>,
    pub(crate) triangles: Vec<gpu::Triangle>,
}

impl SceneBuffers {
    /// Root node index, or `NIL` for an empty scene; consumers must
    /// check this before reading any array.
    pub fn root(&self) -> i32 {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    pub fn nodes(&self) -> &[gpu::Node] {
        &self.nodes
    }

    pub fn primitive_refs(&self) -> &[gpu::PrimitiveRef] {
        &self.primitive_refs
    }

    pub fn spheres(&self) -> &[gpu::Sphere] {
        &self.spheres
    }

    pub fn quads(&self) -> &[gpu::Quad] {
        &self.quads
    }

    pub fn cubes(&self) -> &[gpu::Cube] {
        &self.cubes
    }

    pub fn triangles(&self) -> &[gpu::Triangle] {
        &self.triangles
    }
}

impl Default for SceneBuffers {
    fn default() -> Self {
        Self {
            root: NIL,
            nodes: Vec::new(),
            primitive_refs: Vec::new(),
            spheres: Vec::new(),
            quads: Vec::new(),
            cubes: Vec::new(),
            triangles: Vec::new(),
        }
    }
}
