mod axis;
mod bounding_box;
pub(crate) mod metrics;

pub use self::axis::*;
pub use self::bounding_box::*;
