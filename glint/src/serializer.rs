use crate::{gpu, Payload, Primitive, SceneBuffers, Tree};

/// Emits the flat buffers for a built tree.
///
/// `data` is the build's reordered primitive array; each primitive lands
/// in its per-type array, and `primitive_refs` keeps the original data
/// order so that range leaves stay addressable for mixed-type sets.
pub(crate) fn run(
    tree: &Tree,
    data: impl IntoIterator<Item = Primitive>,
) -> SceneBuffers {
    let mut buffers = SceneBuffers {
        root: tree.root(),
        ..Default::default()
    };

    let refs: Vec<_> = data
        .into_iter()
        .map(|primitive| push(&mut buffers, &primitive))
        .collect();

    for node in tree.nodes() {
        let mut out = gpu::Node {
            bounds_min: node.bounds.min(),
            left: node.left,
            bounds_max: node.bounds.max(),
            right: node.right,
            ..Default::default()
        };

        match node.payload {
            Payload::None => {
                //
            }

            Payload::Primitive(idx) => {
                out.primitive_id = refs[idx].id;
                out.primitive_kind = refs[idx].kind;
            }

            Payload::Range { begin, end } => {
                out.data_begin = begin as i32;
                out.data_end = end as i32;
            }
        }

        buffers.nodes.push(out);
    }

    buffers.primitive_refs = refs;
    buffers
}

fn push(
    buffers: &mut SceneBuffers,
    primitive: &Primitive,
) -> gpu::PrimitiveRef {
    let id = match primitive {
        Primitive::Sphere {
            center,
            radius,
            material_id,
        } => {
            buffers
                .spheres
                .push(gpu::Sphere::new(*center, *radius, *material_id));

            buffers.spheres.len() - 1
        }

        Primitive::Quad {
            position,
            right,
            forward,
            normal,
            material_id,
        } => {
            buffers.quads.push(gpu::Quad::new(
                *position,
                *right,
                *forward,
                *normal,
                *material_id,
            ));

            buffers.quads.len() - 1
        }

        Primitive::Cube {
            local_to_world,
            size,
            material_id,
        } => {
            buffers
                .cubes
                .push(gpu::Cube::new(*local_to_world, *size, *material_id));

            buffers.cubes.len() - 1
        }

        Primitive::Triangle(triangle) => {
            buffers.triangles.push(triangle.serialize());
            buffers.triangles.len() - 1
        }
    };

    gpu::PrimitiveRef {
        kind: primitive.kind().id(),
        id: id as i32,
    }
}
