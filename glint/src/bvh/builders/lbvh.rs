mod morton_code;
mod sort;

use crate::gpu::NIL;
use crate::{BoundingBox, Payload, Primitive, Tree, TreeNode};

/// Builds a Karras-style linear BVH: primitives get ordered by Morton
/// code and the hierarchy is then carved out of that ordering through
/// longest-common-prefix splits.
///
/// Returns the tree together with the reordered primitive array its
/// leaves point into.
pub(crate) fn build(primitives: &[Primitive]) -> (Tree, Vec<Primitive>) {
    if primitives.is_empty() {
        return (Tree::empty(), Vec::new());
    }

    let scene_bounds: BoundingBox =
        primitives.iter().map(Primitive::bounds).collect();

    let mut data = primitives.to_vec();

    let mut codes: Vec<_> = data
        .iter()
        .map(|primitive| morton_code::run(primitive.center(), &scene_bounds))
        .collect();

    sort::run(&mut codes, &mut data);

    let mut nodes = Vec::with_capacity(2 * data.len() - 1);
    let root = emit(&mut nodes, &codes, &data, 0, data.len() - 1);

    (Tree::new(nodes, root), data)
}

/// Emits the node covering the sorted range `first ..= last`, children
/// first, and returns its index.
fn emit(
    nodes: &mut Vec<TreeNode>,
    codes: &[u32],
    data: &[Primitive],
    first: usize,
    last: usize,
) -> i32 {
    if first == last {
        nodes.push(TreeNode {
            bounds: data[first].bounds(),
            left: NIL,
            right: NIL,
            payload: Payload::Primitive(first),
        });

        return (nodes.len() - 1) as i32;
    }

    let split = find_split(codes, first, last);

    let left = emit(nodes, codes, data, first, split);
    let right = emit(nodes, codes, data, split + 1, last);

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

/// Finds the furthest index in `first .. last` whose code shares a
/// longer prefix with `codes[first]` than the range as a whole does.
///
/// The answer depends only on the (immutable) sorted code array, never
/// on sibling subtrees - the property that makes this builder
/// parallel-friendly.
fn find_split(codes: &[u32], first: usize, last: usize) -> usize {
    let first_code = codes[first];
    let last_code = codes[last];

    // All codes in range identical; any split works, the midpoint keeps
    // the tree balanced
    if first_code == last_code {
        return (first + last) / 2;
    }

    let common_prefix = (first_code ^ last_code).leading_zeros();

    let mut split = first;
    let mut step = last - first;

    loop {
        step = (step + 1) / 2;

        let proposed = split + step;

        if proposed < last {
            let prefix = (first_code ^ codes[proposed]).leading_zeros();

            if prefix > common_prefix {
                split = proposed;
            }
        }

        if step <= 1 {
            break;
        }
    }

    split
}
