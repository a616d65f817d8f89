//! Buffer-layout types shared between the CPU-side builders and the GPU
//! traversal kernel.
//!
//! Everything here is `#[repr(C)]` and `bytemuck::Pod`, so the arrays
//! produced by `glint` can be uploaded as-is.

mod cube;
mod material_id;
mod node;
mod primitive_ref;
mod quad;
mod sphere;
mod triangle;

pub use self::cube::*;
pub use self::material_id::*;
pub use self::node::*;
pub use self::primitive_ref::*;
pub use self::quad::*;
pub use self::sphere::*;
pub use self::triangle::*;

/// Universal "absent" sentinel for child links, leaf data and primitive
/// references.
pub const NIL: i32 = -1;
