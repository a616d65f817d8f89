use glam::{Mat4, Vec3};

use crate::{gpu, BoundingBox, Triangle};

/// Geometric primitive understood by the traversal kernel.
///
/// The set is closed and exhaustively matched by the bounds computation
/// and the buffer emission, which is why this is a sum type rather than
/// a trait object.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere {
        center: Vec3,
        radius: f32,
        material_id: gpu::MaterialId,
    },

    Quad {
        /// Corner of the quad; the surface is spanned by `right` and
        /// `forward` from here.
        position: Vec3,
        right: Vec3,
        forward: Vec3,
        normal: Vec3,
        material_id: gpu::MaterialId,
    },

    Cube {
        local_to_world: Mat4,
        size: Vec3,
        material_id: gpu::MaterialId,
    },

    Triangle(Triangle),
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Sphere { .. } => PrimitiveKind::Sphere,
            Self::Quad { .. } => PrimitiveKind::Quad,
            Self::Cube { .. } => PrimitiveKind::Cube,
            Self::Triangle(_) => PrimitiveKind::Triangle,
        }
    }

    pub fn material_id(&self) -> gpu::MaterialId {
        match self {
            Self::Sphere { material_id, .. }
            | Self::Quad { material_id, .. }
            | Self::Cube { material_id, .. } => *material_id,
            Self::Triangle(triangle) => triangle.material_id(),
        }
    }

    /// Axis-aligned bounding box, recomputed per query (some primitives
    /// can move between builds) and padded to positive volume on every
    /// axis.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Self::Sphere { center, radius, .. } => BoundingBox::new(
                *center - Vec3::splat(*radius),
                *center + Vec3::splat(*radius),
            )
            .padded(),

            Self::Quad {
                position,
                right,
                forward,
                ..
            } => BoundingBox::from_points([
                *position,
                *position + *right,
                *position + *forward,
                *position + *right + *forward,
            ])
            .padded(),

            Self::Cube {
                local_to_world,
                size,
                ..
            } => {
                let half_size = *size * 0.5;

                BoundingBox::new(-half_size, half_size)
                    .with_transform(*local_to_world)
                    .padded()
            }

            Self::Triangle(triangle) => triangle.bounds(),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.bounds().center()
    }

    /// Whether this primitive's placement differs from a previously
    /// captured snapshot of it.
    ///
    /// The lighting collaborator polls this to notice moved emitters;
    /// mesh triangles are baked once and never report a change.
    pub fn is_changed(&self, previous: &Self) -> bool {
        match (self, previous) {
            (
                Self::Sphere { center, radius, .. },
                Self::Sphere {
                    center: prev_center,
                    radius: prev_radius,
                    ..
                },
            ) => center != prev_center || radius != prev_radius,

            (
                Self::Quad {
                    position,
                    right,
                    forward,
                    ..
                },
                Self::Quad {
                    position: prev_position,
                    right: prev_right,
                    forward: prev_forward,
                    ..
                },
            ) => {
                position != prev_position
                    || right != prev_right
                    || forward != prev_forward
            }

            (
                Self::Cube {
                    local_to_world,
                    size,
                    ..
                },
                Self::Cube {
                    local_to_world: prev_local_to_world,
                    size: prev_size,
                    ..
                },
            ) => local_to_world != prev_local_to_world || size != prev_size,

            (Self::Triangle(_), Self::Triangle(_)) => false,

            _ => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Sphere = 0,
    Quad = 1,
    Cube = 2,
    Triangle = 3,
}

impl PrimitiveKind {
    /// Encoding stored in `gpu::Node::primitive_kind` and
    /// `gpu::PrimitiveRef::kind`.
    pub fn id(self) -> i32 {
        self as i32
    }
}
