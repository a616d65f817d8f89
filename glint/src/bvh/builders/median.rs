use crate::gpu::NIL;
use crate::{BoundingBox, Payload, Primitive, Tree, TreeNode};

/// Recursion stops here no matter what; remaining primitives get packed
/// into a single leaf, trading balance for build speed.
const MAX_DEPTH: usize = 16;

/// Builds a BVH through recursive splits on the largest-extent axis.
///
/// Unlike the Morton path this builder reorders primitives as it goes,
/// so leaves hold contiguous index ranges into the returned data array
/// rather than single primitives.
pub(crate) fn build(primitives: &[Primitive]) -> (Tree, Vec<Primitive>) {
    if primitives.is_empty() {
        return (Tree::empty(), Vec::new());
    }

    let mut nodes = Vec::new();
    let mut data = Vec::with_capacity(primitives.len());
    let root = emit(&mut nodes, &mut data, primitives.to_vec(), 0);

    (Tree::new(nodes, root), data)
}

fn emit(
    nodes: &mut Vec<TreeNode>,
    data: &mut Vec<Primitive>,
    primitives: Vec<Primitive>,
    depth: usize,
) -> i32 {
    if depth >= MAX_DEPTH || primitives.len() <= 1 {
        return emit_leaf(nodes, data, primitives);
    }

    let bounds: BoundingBox =
        primitives.iter().map(Primitive::bounds).collect();

    let axis = bounds.longest_axis();

    // Mean of the primitives' midpoints on the chosen axis; cheaper than
    // a true median and close enough to a balanced split in practice
    let coord = primitives
        .iter()
        .map(|primitive| primitive.bounds().center()[axis])
        .sum::<f32>()
        / (primitives.len() as f32);

    let mut negative = Vec::new();
    let mut positive = Vec::new();

    for primitive in primitives {
        let bounds = primitive.bounds();

        // Assign to whichever side the primitive overhangs less past the
        // splitting plane
        if bounds.max()[axis] - coord <= coord - bounds.min()[axis] {
            negative.push(primitive);
        } else {
            positive.push(primitive);
        }
    }

    // No-progress guard: with every primitive on one side, recursing
    // would never terminate
    if negative.is_empty() {
        return emit_leaf(nodes, data, positive);
    }

    if positive.is_empty() {
        return emit_leaf(nodes, data, negative);
    }

    let left = emit(nodes, data, negative, depth + 1);
    let right = emit(nodes, data, positive, depth + 1);

    let bounds = (nodes[left as usize].bounds + nodes[right as usize].bounds)
        .padded();

    nodes.push(TreeNode {
        bounds,
        left,
        right,
        payload: Payload::None,
    });

    (nodes.len() - 1) as i32
}

fn emit_leaf(
    nodes: &mut Vec<TreeNode>,
    data: &mut Vec<Primitive>,
    primitives: Vec<Primitive>,
) -> i32 {
    let bounds: BoundingBox =
        primitives.iter().map(Primitive::bounds).collect();

    let begin = data.len();

    data.extend(primitives);

    nodes.push(TreeNode {
        bounds,
        left: NIL,
        right: NIL,
        payload: Payload::Range {
            begin,
            end: data.len(),
        },
    });

    (nodes.len() - 1) as i32
}

#[cfg(test)]
mod tests {
    use glam::{vec3, Vec3};

    use super::*;
    use crate::gpu;

    fn sphere(center: Vec3) -> Primitive {
        Primitive::Sphere {
            center,
            radius: 0.5,
            material_id: gpu::MaterialId::new(0),
        }
    }

    fn leaf_ranges(tree: &Tree) -> Vec<(usize, usize)> {
        tree.leaves()
            .into_iter()
            .map(|id| {
                let Payload::Range { begin, end } =
                    tree.nodes()[id as usize].payload
                else {
                    panic!("expected a range leaf");
                };

                (begin, end)
            })
            .collect()
    }

    #[test]
    fn splits_along_largest_extent() {
        let primitives = vec![
            sphere(vec3(0.0, 0.0, 0.0)),
            sphere(vec3(10.0, 0.0, 0.0)),
            sphere(vec3(11.0, 0.0, 0.0)),
        ];

        let (target, data) = build(&primitives);

        target.validate();

        assert_eq!(3, data.len());

        let root = &target.nodes()[target.root() as usize];

        assert!(!root.is_leaf());

        // The lone sphere at x=0 ends up alone on the negative side
        let left = &target.nodes()[root.left as usize];

        assert_eq!(
            Payload::Range { begin: 0, end: 1 },
            left.payload,
        );
    }

    /// Leaf ranges read back left-to-right must tile the data array
    /// without gaps or overlaps.
    #[test]
    fn leaves_tile_the_data_array() {
        let primitives: Vec<_> = (0..50)
            .map(|i| {
                sphere(vec3(
                    (i % 7) as f32,
                    (i % 5) as f32 * 2.0,
                    (i % 3) as f32 * 3.0,
                ))
            })
            .collect();

        let (target, data) = build(&primitives);

        target.validate();

        assert_eq!(primitives.len(), data.len());

        let mut cursor = 0;

        for (begin, end) in leaf_ranges(&target) {
            assert_eq!(cursor, begin);
            assert!(end > begin);

            cursor = end;
        }

        assert_eq!(data.len(), cursor);
    }

    /// Coincident primitives all land on one side of any plane; the
    /// guard must force a leaf instead of recursing forever.
    #[test]
    fn coincident_primitives_terminate() {
        let primitives = vec![sphere(Vec3::ONE); 100];

        let (target, data) = build(&primitives);

        target.validate();

        assert_eq!(1, target.node_count());
        assert_eq!(100, data.len());
        assert_eq!(vec![(0, 100)], leaf_ranges(&target));
    }

    #[test]
    fn depth_is_bounded() {
        // Exponentially spaced spheres keep splitting lopsided, which
        // maximizes depth
        let primitives: Vec<_> = (0..32)
            .map(|i| sphere(vec3((1.5_f32).powi(i), 0.0, 0.0)))
            .collect();

        let (target, _) = build(&primitives);

        target.validate();

        let mut max_depth = 0;
        let mut stack = vec![(target.root(), 0)];

        while let Some((id, depth)) = stack.pop() {
            let node = &target.nodes()[id as usize];

            if node.is_leaf() {
                max_depth = max_depth.max(depth);
            } else {
                stack.push((node.left, depth + 1));
                stack.push((node.right, depth + 1));
            }
        }

        assert!(max_depth <= MAX_DEPTH);
    }
}
