pub(crate) mod builders;

use crate::utils::metrics::metric;
use crate::{serializer, Primitive, SceneBuffers, Tree};

/// Bounding-volume hierarchy over a set of primitives.
///
/// Builds are synchronous and from scratch; whenever the primitive set
/// changes, callers drop the old instance and build a new one.
#[derive(Clone, Debug)]
pub struct Bvh {
    tree: Tree,
    buffers: SceneBuffers,
}

impl Bvh {
    /// Builds through Morton ordering (an LBVH); one primitive per leaf.
    ///
    /// This is the default builder - the split of any index range
    /// depends only on the sorted key array, which keeps the
    /// construction friendly to parallelization.
    pub fn build(primitives: &[Primitive]) -> Self {
        let (tree, data) =
            metric("bvh.build", || builders::lbvh::build(primitives));

        Self::finish(tree, data)
    }

    /// Builds through recursive extent-median splits; leaves hold index
    /// ranges and the tree depth is bounded.
    pub fn build_median(primitives: &[Primitive]) -> Self {
        let (tree, data) =
            metric("bvh.build_median", || builders::median::build(primitives));

        Self::finish(tree, data)
    }

    fn finish(tree: Tree, data: Vec<Primitive>) -> Self {
        if cfg!(debug_assertions) {
            tree.validate();
        }

        let buffers = serializer::run(&tree, data);

        log::debug!(
            "bvh ready: {} node(s), {} primitive(s)",
            tree.node_count(),
            buffers.primitive_refs().len(),
        );

        Self { tree, buffers }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn buffers(&self) -> &SceneBuffers {
        &self.buffers
    }
}
