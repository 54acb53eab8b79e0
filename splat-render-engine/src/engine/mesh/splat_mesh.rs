use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use constants::splat::{
    BASE_SPLAT_RADIUS, SPLAT_DISK_SEGMENTS, SPLAT_INDEX_COUNT, SPLAT_VERTEX_COUNT,
};

use crate::engine::cloud::colour::{density_colour, normal_colour};
use crate::engine::cloud::normalize::{NormalizedAttribute, NormalizedSplat};
use crate::engine::systems::viewer_options::ShadingStyle;

/// Build one batched mesh for a whole cloud at a given scale preset.
/// Every point contributes a small disk fan to shared vertex/index
/// buffers, so the variant renders as a single draw call regardless of
/// point count. Flat-colour meshes carry a vertex colour attribute;
/// lit-grey meshes rely on their material instead.
pub fn build_batched_splat_mesh(
    points: &[NormalizedSplat],
    scale_factor: f32,
    style: ShadingStyle,
) -> Mesh {
    let radius = BASE_SPLAT_RADIUS * scale_factor;

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(points.len() * SPLAT_VERTEX_COUNT);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(points.len() * SPLAT_VERTEX_COUNT);
    let mut colours: Vec<[f32; 4]> = Vec::new();
    let mut indices: Vec<u32> = Vec::with_capacity(points.len() * SPLAT_INDEX_COUNT);

    if style == ShadingStyle::FlatColour {
        colours.reserve(points.len() * SPLAT_VERTEX_COUNT);
    }

    for point in points {
        append_disk(
            point.position,
            point.facing(),
            radius,
            &mut positions,
            &mut normals,
            &mut indices,
        );

        if style == ShadingStyle::FlatColour {
            let colour = splat_colour(point);
            colours.extend(std::iter::repeat(colour).take(SPLAT_VERTEX_COUNT));
        }
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    if style == ShadingStyle::FlatColour {
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
    }
    mesh.insert_indices(Indices::U32(indices));

    mesh
}

fn splat_colour(point: &NormalizedSplat) -> [f32; 4] {
    match point.attribute {
        NormalizedAttribute::Normal(normal) => normal_colour(normal),
        NormalizedAttribute::Density(density) => density_colour(density),
    }
}

/// Append one disk fan: a centre vertex plus the rim, triangulated as a
/// fan around the centre. The disk plane is perpendicular to `facing`.
fn append_disk(
    centre: Vec3,
    facing: Vec3,
    radius: f32,
    positions: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    indices: &mut Vec<u32>,
) {
    let base = positions.len() as u32;
    let (tangent, bitangent) = facing.any_orthonormal_pair();

    positions.push(centre.to_array());
    for i in 0..SPLAT_DISK_SEGMENTS {
        let angle = std::f32::consts::TAU * i as f32 / SPLAT_DISK_SEGMENTS as f32;
        let rim = centre + (tangent * angle.cos() + bitangent * angle.sin()) * radius;
        positions.push(rim.to_array());
    }

    for _ in 0..SPLAT_VERTEX_COUNT {
        normals.push(facing.to_array());
    }

    let segments = SPLAT_DISK_SEGMENTS as u32;
    for i in 0..segments {
        let next = (i + 1) % segments;
        indices.extend_from_slice(&[base, base + 1 + i, base + 1 + next]);
    }
}
