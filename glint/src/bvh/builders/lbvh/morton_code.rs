use glam::Vec3;

use crate::BoundingBox;

/// Computes a 30-bit Morton code for `center`, quantized to a 10-bit
/// grid over `scene_bounds`.
///
/// Sorting by these codes imposes a locality-preserving total order on
/// primitives; equal codes are legal and get resolved later by the
/// hierarchy builder, not by a secondary sort key.
pub(crate) fn run(center: Vec3, scene_bounds: &BoundingBox) -> u32 {
    let normalized = scene_bounds.map(center);

    let x = expand_bits(quantize(normalized.x));
    let y = expand_bits(quantize(normalized.y));
    let z = expand_bits(quantize(normalized.z));

    x * 4 + y * 2 + z
}

/// Maps `0.0 ..= 1.0` to `0 ..= 1023`; clamping (not wrapping) handles
/// centers exactly on the upper boundary.
fn quantize(coord: f32) -> u32 {
    (coord * 1024.0).clamp(0.0, 1023.0) as u32
}

/// Inserts two zero bits between every bit of a 10-bit integer.
fn expand_bits(mut bits: u32) -> u32 {
    bits = bits.wrapping_mul(0x0001_0001) & 0xFF00_00FF;
    bits = bits.wrapping_mul(0x0000_0101) & 0x0F00_F00F;
    bits = bits.wrapping_mul(0x0000_0011) & 0xC30C_30C3;
    bits = bits.wrapping_mul(0x0000_0005) & 0x4924_9249;
    bits
}

#[cfg(test)]
mod tests {
    use glam::{vec3, Vec3};

    use super::*;

    fn unit_bounds() -> BoundingBox {
        BoundingBox::new(Vec3::ZERO, Vec3::ONE)
    }

    #[test]
    fn bit_expansion() {
        assert_eq!(0, expand_bits(0));
        assert_eq!(0b1_001, expand_bits(0b11));
        assert_eq!(0x0924_9249, expand_bits(0b11_1111_1111));
    }

    #[test]
    fn axis_weights() {
        let bounds = unit_bounds();

        // X carries the highest bit weight, then Y, then Z
        let x = run(vec3(1.0, 0.0, 0.0), &bounds);
        let y = run(vec3(0.0, 1.0, 0.0), &bounds);
        let z = run(vec3(0.0, 0.0, 1.0), &bounds);

        assert_eq!(0x2492_4924, x);
        assert_eq!(0x1249_2492, y);
        assert_eq!(0x0924_9249, z);
        assert!(x > y && y > z);
    }

    #[test]
    fn upper_boundary_clamps() {
        // `1.0 * 1024` overshoots the 10-bit grid and must clamp to 1023
        // instead of wrapping to zero
        assert_eq!(1023, quantize(1.0));
        assert_eq!(1023, quantize(123.0));
        assert_eq!(0, quantize(-1.0));
    }

    #[test]
    fn locality() {
        let bounds = BoundingBox::new(Vec3::ZERO, Vec3::splat(8.0));

        let codes: Vec<_> = [0.5_f32, 2.5, 4.5, 6.5]
            .into_iter()
            .map(|x| run(vec3(x, 0.0, 0.0), &bounds))
            .collect();

        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn determinism() {
        let bounds = unit_bounds();
        let center = vec3(0.123, 0.456, 0.789);

        assert_eq!(run(center, &bounds), run(center, &bounds));
    }
}
