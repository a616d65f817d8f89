use crate::gpu::NIL;
use crate::BoundingBox;

/// Arena-allocated binary tree produced by the builders, before
/// flattening; nodes address each other by index, `NIL` meaning absent.
///
/// Children are always emitted before their parent, so the root is the
/// last node.
#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    root: i32,
}

impl Tree {
    pub(crate) fn new(nodes: Vec<TreeNode>, root: i32) -> Self {
        Self { nodes, root }
    }

    pub(crate) fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            root: NIL,
        }
    }

    /// Index of the root node, or `NIL` for an empty tree; callers must
    /// check this before touching anything else.
    pub fn root(&self) -> i32 {
        self.root
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Leaf indices in the tree's natural left-to-right order.
    pub fn leaves(&self) -> Vec<i32> {
        let mut leaves = Vec::new();

        if self.root != NIL {
            self.collect_leaves(self.root, &mut leaves);
        }

        leaves
    }

    fn collect_leaves(&self, id: i32, leaves: &mut Vec<i32>) {
        let node = &self.nodes[id as usize];

        if node.is_leaf() {
            leaves.push(id);
        } else {
            self.collect_leaves(node.left, leaves);
            self.collect_leaves(node.right, leaves);
        }
    }

    /// Checks the structural invariants every consumer relies on; a
    /// failure here is a builder bug, not a runtime condition, hence the
    /// panics.
    pub fn validate(&self) {
        if self.root == NIL {
            assert!(
                self.nodes.is_empty(),
                "empty tree must not own any nodes"
            );

            return;
        }

        let mut visited = 0;
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            visited += 1;

            assert!(
                visited <= self.nodes.len(),
                "tree contains a cycle"
            );

            assert!(
                id >= 0 && (id as usize) < self.nodes.len(),
                "node index out of range: {}",
                id
            );

            let node = &self.nodes[id as usize];

            if node.is_leaf() {
                assert!(
                    node.payload != Payload::None,
                    "leaf node without payload: {}",
                    id
                );
            } else {
                assert!(
                    node.payload == Payload::None,
                    "internal node with payload: {}",
                    id
                );

                assert!(
                    node.left != NIL && node.right != NIL,
                    "internal node missing a child: {}",
                    id
                );

                let left = &self.nodes[node.left as usize];
                let right = &self.nodes[node.right as usize];

                assert!(
                    node.bounds == (left.bounds + right.bounds).padded(),
                    "node bounds are not the union of its children: {}",
                    id
                );

                stack.push(node.left);
                stack.push(node.right);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    pub bounds: BoundingBox,
    pub left: i32,
    pub right: i32,
    pub payload: Payload,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.left == NIL && self.right == NIL
    }
}

/// What a node points at besides its children; exactly one of children
/// and payload is present on any reachable node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload {
    None,

    /// Single primitive, by index into the build's data array.
    Primitive(usize),

    /// Contiguous `begin..end` range of the build's data array; `end` is
    /// exclusive.
    Range { begin: usize, end: usize },
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn leaf(idx: usize) -> TreeNode {
        TreeNode {
            bounds: BoundingBox::new(Vec3::ZERO, Vec3::ONE),
            left: NIL,
            right: NIL,
            payload: Payload::Primitive(idx),
        }
    }

    #[test]
    fn leaves_are_ordered_left_to_right() {
        let bounds = (BoundingBox::new(Vec3::ZERO, Vec3::ONE)
            + BoundingBox::new(Vec3::ZERO, Vec3::ONE))
        .padded();

        let target = Tree::new(
            vec![
                leaf(0),
                leaf(1),
                TreeNode {
                    bounds,
                    left: 1,
                    right: 0,
                    payload: Payload::None,
                },
            ],
            2,
        );

        target.validate();

        assert_eq!(vec![1, 0], target.leaves());
    }

    #[test]
    fn empty_tree_is_valid() {
        Tree::empty().validate();
    }

    #[test]
    #[should_panic(expected = "leaf node without payload")]
    fn validation_catches_payloadless_leaves() {
        let target = Tree::new(
            vec![TreeNode {
                bounds: BoundingBox::new(Vec3::ZERO, Vec3::ONE),
                left: NIL,
                right: NIL,
                payload: Payload::None,
            }],
            0,
        );

        target.validate();
    }
}
