use bytemuck::{Pod, Zeroable};

use crate::NIL;

/// Entry of the reordered primitive-data array.
///
/// Fat leaves address a contiguous `data_begin..data_end` range of these;
/// each entry redirects into the per-type primitive array selected by
/// `kind` (same encoding as `Node::primitive_kind`).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct PrimitiveRef {
    pub kind: i32,
    pub id: i32,
}

impl Default for PrimitiveRef {
    fn default() -> Self {
        Self { kind: NIL, id: NIL }
    }
}
