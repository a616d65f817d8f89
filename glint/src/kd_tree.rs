mod builder;
mod clip;

use crate::utils::metrics::metric;
use crate::{serializer, Primitive, SceneBuffers, Tree, Triangle};

/// Axis-aligned binary space partition over triangles.
///
/// Where a BVH lets boxes overlap, this builder cuts space - triangles
/// straddling a splitting plane get physically clipped into
/// sub-triangles, so every leaf's range holds geometry fully inside the
/// leaf's half-space.
#[derive(Clone, Debug)]
pub struct KdTree {
    tree: Tree,
    buffers: SceneBuffers,
}

impl KdTree {
    pub fn build(triangles: &[Triangle]) -> Self {
        let (tree, data) =
            metric("kd-tree.build", || builder::run(triangles));

        if cfg!(debug_assertions) {
            tree.validate();
        }

        let buffers =
            serializer::run(&tree, data.into_iter().map(Primitive::Triangle));

        log::debug!(
            "kd-tree ready: {} node(s), {} triangle(s)",
            tree.node_count(),
            buffers.triangles().len(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::NIL;

    fn unit_triangle(x: f32) -> Triangle {
        Triangle::default().with_vertices([
            [x, 0.0, 0.0],
            [x + 1.0, 0.0, 0.0],
            [x, 1.0, 0.0],
        ])
    }

    #[test]
    fn empty() {
        let target = KdTree::build(&[]);

        assert_eq!(NIL, target.tree().root());
        assert!(target.buffers().is_empty());
    }

    #[test]
    fn single_triangle() {
        let target = KdTree::build(&[unit_triangle(0.0)]);

        assert_eq!(1, target.tree().node_count());
        assert_eq!(0, target.tree().root());
        assert_eq!(1, target.buffers().triangles().len());
    }

    #[test]
    fn buffers_mirror_the_tree() {
        let triangles: Vec<_> =
            (0..8).map(|i| unit_triangle(2.0 * (i as f32))).collect();

        let target = KdTree::build(&triangles);

        assert_eq!(
            target.tree().node_count(),
            target.buffers().nodes().len()
        );

        // Triangles are disjoint along X, so none get clipped
        assert_eq!(8, target.buffers().triangles().len());
    }
}
