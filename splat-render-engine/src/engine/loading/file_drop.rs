use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use rand::thread_rng;

use constants::render_settings::LIT_GREY_COLOUR;
use constants::splat::MAX_SPLAT_POINTS;

use super::density_ranges::DensityRangeTable;
use super::loader::{LoadedCloud, SplatLoadError, load_cloud};
use crate::engine::mesh::splat_mesh::build_batched_splat_mesh;
use crate::engine::scene::variants::{SplatCloud, SplatVariants, VariantKey};
use crate::engine::systems::viewer_options::{ShadingStyle, ViewerOptions};

/// Receive dropped files and run the full load pipeline on each.
/// A failed load logs a warning and returns; the previously displayed
/// cloud stays on screen untouched.
pub fn handle_dropped_files(
    mut events: EventReader<FileDragAndDrop>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut variants: ResMut<SplatVariants>,
    options: Res<ViewerOptions>,
    ranges: Res<DensityRangeTable>,
) {
    for event in events.read() {
        let FileDragAndDrop::DroppedFile { path_buf, .. } = event else {
            continue;
        };

        let dataset = dataset_id(path_buf);

        let cloud = match load_dropped_file(path_buf, &dataset, &ranges) {
            Ok(cloud) => cloud,
            Err(err) => {
                warn!("load of `{dataset}` failed: {err}; keeping previous cloud");
                continue;
            }
        };

        println!(
            "loaded {} splats from `{}` ({:?} mode)",
            cloud.points.len(),
            dataset,
            cloud.mode
        );

        rebuild_variants(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut variants,
            &options,
            &cloud,
        );
    }
}

fn load_dropped_file(
    path: &Path,
    dataset: &str,
    ranges: &DensityRangeTable,
) -> Result<LoadedCloud, SplatLoadError> {
    let text = fs::read_to_string(path)?;
    load_cloud(&text, dataset, ranges, MAX_SPLAT_POINTS, &mut thread_rng())
}

/// Dataset identity for the density-range lookup: the lowercased file
/// stem of the dropped file.
fn dataset_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Build every (scale, style) mesh for the new cloud, then swap the
/// registered variant set. All meshes are built before the old entities
/// are despawned, so the replacement is all-or-nothing.
fn rebuild_variants(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    variants: &mut ResMut<SplatVariants>,
    options: &ViewerOptions,
    cloud: &LoadedCloud,
) {
    let built: Vec<(VariantKey, Mesh)> = VariantKey::all()
        .map(|key| {
            (
                key,
                build_batched_splat_mesh(&cloud.points, key.scale.factor(), key.style),
            )
        })
        .collect();

    variants.clear(commands);

    let flat_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let lit_material = materials.add(StandardMaterial {
        base_color: LIT_GREY_COLOUR,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let selected = VariantKey {
        scale: options.scale,
        style: options.shading,
    };

    let mut entities = HashMap::new();
    for (key, mesh) in built {
        let material = match key.style {
            ShadingStyle::FlatColour => flat_material.clone(),
            ShadingStyle::LitGrey => lit_material.clone(),
        };
        let visibility = if key == selected {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };

        let entity = commands
            .spawn((
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(material),
                Transform::IDENTITY,
                visibility,
                NoFrustumCulling,
                SplatCloud,
            ))
            .id();
        entities.insert(key, entity);
    }

    variants.replace(entities, cloud.mode, cloud.dataset.clone(), selected);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_dataset_id_is_lowercased_stem() {
        assert_eq!(dataset_id(&PathBuf::from("/tmp/Lucy.xyz")), "lucy");
        assert_eq!(dataset_id(&PathBuf::from("bunny")), "bunny");
    }
}
