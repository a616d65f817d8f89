//! Spatial acceleration structures for ray tracing.
//!
//! Given an already-collected list of primitives, this crate builds a
//! bounding-volume hierarchy (Morton-ordered LBVH or extent-median
//! splits) or a clipping KD-tree, and flattens the result into
//! index-based buffers ready for upload to a GPU traversal kernel.
//!
//! ```
//! use glam::vec3;
//! use glint::{gpu, Bvh, Primitive};
//!
//! let primitives = vec![
//!     Primitive::Sphere {
//!         center: vec3(0.0, 1.0, 0.0),
//!         radius: 1.0,
//!         material_id: gpu::MaterialId::new(0),
//!     },
//!     Primitive::Sphere {
//!         center: vec3(4.0, 1.0, 0.0),
//!         radius: 1.0,
//!         material_id: gpu::MaterialId::new(1),
//!     },
//! ];
//!
//! let bvh = Bvh::build(&primitives);
//!
//! assert_eq!(3, bvh.buffers().nodes().len());
//! ```

mod buffers;
mod bvh;
mod kd_tree;
mod primitive;
mod serializer;
mod tree;
mod triangle;
mod utils;

pub use glint_gpu as gpu;

pub use self::buffers::*;
pub use self::bvh::*;
pub use self::kd_tree::*;
pub use self::primitive::*;
pub use self::tree::*;
pub use self::triangle::*;
pub use self::utils::*;
