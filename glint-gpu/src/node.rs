use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::NIL;

/// Single node of a flattened acceleration tree.
///
/// Exactly one of the following holds for every reachable node:
///
/// - `left` and `right` are valid node indices (internal node),
/// - `primitive_id`/`primitive_kind` are valid (one-primitive leaf),
/// - `data_begin`/`data_end` delimit a range of [`PrimitiveRef`]s
///   (fat leaf; `data_end` is exclusive).
///
/// All remaining fields are [`NIL`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Node {
    pub bounds_min: Vec3,
    pub left: i32,
    pub bounds_max: Vec3,
    pub right: i32,
    pub data_begin: i32,
    pub data_end: i32,
    pub primitive_id: i32,
    pub primitive_kind: i32,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.left == NIL && self.right == NIL
    }
}

impl Default for Node {
    fn default() -> Self {
        Self {
            bounds_min: Vec3::ZERO,
            left: NIL,
            bounds_max: Vec3::ZERO,
            right: NIL,
            data_begin: NIL,
            data_end: NIL,
            primitive_id: NIL,
            primitive_kind: NIL,
        }
    }
}
