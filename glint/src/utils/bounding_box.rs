use std::ops::{Add, AddAssign};

use glam::{vec3, Mat4, Vec3};

use crate::Axis;

/// Any axis whose extent falls at or below this is considered degenerate
/// and gets re-padded, so every box has strictly positive volume.
const DEGENERATE_EXTENT: f32 = 1.0e-4;

/// Half-extent forced onto a degenerate axis.
const PADDED_HALF_EXTENT: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points.into_iter().collect()
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn extent(&self) -> Vec3 {
        self.max() - self.min()
    }

    pub fn center(&self) -> Vec3 {
        (self.min() + self.max()) * 0.5
    }

    /// Axis with the largest extent; ties prefer X over Y over Z.
    pub fn longest_axis(&self) -> Axis {
        let extent = self.extent();

        if extent.x >= extent.y && extent.x >= extent.z {
            Axis::X
        } else if extent.y >= extent.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    /// Re-centers any degenerate axis around the same centroid with a
    /// fixed half-extent, so that flat primitives (axis-aligned quads,
    /// single triangles) still produce boxes with positive volume.
    pub fn padded(self) -> Self {
        let center = self.center();
        let mut min = self.min;
        let mut max = self.max;

        // Only degenerate axes get rewritten; healthy axes keep their
        // exact min/max, so repeated padding is a no-op
        for axis in Axis::all() {
            if max[axis] - min[axis] <= DEGENERATE_EXTENT {
                min[axis] = center[axis] - PADDED_HALF_EXTENT;
                max[axis] = center[axis] + PADDED_HALF_EXTENT;
            }
        }

        Self::new(min, max)
    }

    pub fn with_transform(&self, transform: Mat4) -> Self {
        (0..8)
            .map(|i| {
                let point = vec3(
                    if i & 1 > 0 { self.max.x } else { self.min.x },
                    if i & 2 > 0 { self.max.y } else { self.min.y },
                    if i & 4 > 0 { self.max.z } else { self.min.z },
                );

                transform.transform_point3(point)
            })
            .collect()
    }

    /// Maps `p` from `self.min() ..= self.max()` to `0.0 ..= 1.0`.
    pub fn map(&self, mut p: Vec3) -> Vec3 {
        p = (p - self.min()) / self.extent();

        // This can happen if our extent is 2D (e.g. a plane) - in that case
        // it doesn't matter which particular x/y/z gets assigned here, since
        // all of the vectors will get the same value:

        if p.x.is_nan() {
            p.x = 0.0;
        }

        if p.y.is_nan() {
            p.y = 0.0;
        }

        if p.z.is_nan() {
            p.z = 0.0;
        }

        p.clamp(Vec3::ZERO, Vec3::ONE)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vec3::MAX, Vec3::MIN)
    }
}

impl Add<Vec3> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Vec3) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Vec3> for BoundingBox {
    fn add_assign(&mut self, rhs: Vec3) {
        self.min = self.min.min(rhs);
        self.max = self.max.max(rhs);
    }
}

impl FromIterator<Vec3> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Vec3>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}

impl Add<Self> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Self> for BoundingBox {
    fn add_assign(&mut self, rhs: Self) {
        *self += rhs.min;
        *self += rhs.max;
    }
}

impl FromIterator<Self> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Self>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}
