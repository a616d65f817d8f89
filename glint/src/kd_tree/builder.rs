use crate::gpu::NIL;
use crate::kd_tree::clip;
use crate::{BoundingBox, Payload, Tree, Triangle, TreeNode};

/// Clipping multiplies triangles, so the depth bound doubles as a cap on
/// how much geometry a build is allowed to manufacture.
const MAX_DEPTH: usize = 10;

/// Builds the tree and the reordered (and possibly clipped) triangle
/// array its leaf ranges index into.
///
/// Nodes come out in post-order, children before parents, so child
/// indices are known by the time each internal node is pushed and the
/// root ends up last.
pub(crate) fn run(triangles: &[Triangle]) -> (Tree, Vec<Triangle>) {
    if triangles.is_empty() {
        return (Tree::empty(), Vec::new());
    }

    let mut nodes = Vec::new();
    let mut data = Vec::with_capacity(triangles.len());
    let root = emit(&mut nodes, &mut data, triangles.to_vec(), 0);

    (Tree::new(nodes, root), data)
}

fn emit(
    nodes: &mut Vec<TreeNode>,
    data: &mut Vec<Triangle>,
    triangles: Vec<Triangle>,
    depth: usize,
) -> i32 {
    if depth >= MAX_DEPTH || triangles.len() <= 1 {
        return emit_leaf(nodes, data, triangles);
    }

    let bounds: BoundingBox =
        triangles.iter().map(Triangle::bounds).collect();

    // Spatial median of the aggregate bound's longest axis
    let axis = bounds.longest_axis();
    let coord = bounds.center()[axis];

    let mut negative = Vec::new();
    let mut positive = Vec::new();

    for triangle in triangles {
        let coords = triangle.vertices().map(|vertex| vertex[axis]);

        if coords.iter().all(|&c| c <= coord) {
            negative.push(triangle);
        } else if coords.iter().all(|&c| c >= coord) {
            positive.push(triangle);
        } else {
            let split = clip::split(&triangle, axis, coord);

            negative.extend(split.negative);
            positive.extend(split.positive);
        }
    }

    // No-progress guard; everything on one side means the plane cannot
    // separate this set, so recursing would never terminate
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
    data: &mut Vec<Triangle>,
    triangles: Vec<Triangle>,
) -> i32 {
    let bounds: BoundingBox =
        triangles.iter().map(Triangle::bounds).collect();

    let begin = data.len();

    data.extend(triangles);

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
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;
    use crate::Payload;

    fn unit_triangle(x: f32) -> Triangle {
        Triangle::default().with_vertices([
            vec3(x, 0.0, 0.0),
            vec3(x + 1.0, 0.0, 0.0),
            vec3(x, 1.0, 0.0),
        ])
    }

    #[test]
    fn disjoint_triangles_stay_unclipped() {
        let triangles = vec![unit_triangle(0.0), unit_triangle(9.0)];

        let (target, data) = run(&triangles);

        target.validate();

        assert_eq!(3, target.node_count());
        assert_eq!(triangles[0], data[0]);
        assert_eq!(triangles[1], data[1]);
    }

    /// Clipping must conserve geometry: the clipped pieces of any
    /// straddling triangle sum up to its original area.
    #[test]
    fn clipping_preserves_area() {
        // A large triangle straddling the plane between two far-apart
        // small ones
        let triangles = vec![
            unit_triangle(0.0),
            unit_triangle(19.0),
            Triangle::default().with_vertices([
                vec3(5.0, 0.0, 0.0),
                vec3(15.0, 0.0, 0.0),
                vec3(10.0, 3.0, 0.0),
            ]),
        ];

        let original_area: f32 =
            triangles.iter().map(Triangle::area).sum();

        let (target, data) = run(&triangles);

        target.validate();

        assert!(data.len() > triangles.len());

        let clipped_area: f32 = data.iter().map(Triangle::area).sum();

        assert_relative_eq!(original_area, clipped_area, epsilon = 1.0e-3);
    }

    #[test]
    fn leaves_tile_the_data_array() {
        let triangles: Vec<_> =
            (0..20).map(|i| unit_triangle(1.5 * (i as f32))).collect();

        let (target, data) = run(&triangles);

        target.validate();

        let mut cursor = 0;

        for id in target.leaves() {
            let Payload::Range { begin, end } =
                target.nodes()[id as usize].payload
            else {
                panic!("expected a range leaf");
            };

            assert_eq!(cursor, begin);
            assert!(end > begin);

            cursor = end;
        }

        assert_eq!(data.len(), cursor);
    }

    /// Point-degenerate triangles all classify onto the negative side of
    /// any plane through them; the guard must force a leaf instead of
    /// recursing forever.
    #[test]
    fn degenerate_triangles_terminate() {
        let triangles =
            vec![
                Triangle::default()
                    .with_vertices([[1.0, 1.0, 1.0]; 3]);
                50
            ];

        let (target, data) = run(&triangles);

        target.validate();

        assert_eq!(1, target.node_count());
        assert_eq!(50, data.len());
    }
}
