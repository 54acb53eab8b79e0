use bevy::prelude::*;

use constants::render_settings::{DEFAULT_LIGHT_POSITION, LIGHT_MARKER_RADIUS};

/// Marker for the movable point light and its follower sphere.
#[derive(Component)]
pub struct SplatLight;

/// Spawn the point light plus a small unlit sphere so the light position
/// stays visible while it is moved around the cloud.
pub fn spawn_lighting(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        PointLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(DEFAULT_LIGHT_POSITION),
        SplatLight,
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(LIGHT_MARKER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(DEFAULT_LIGHT_POSITION),
        SplatLight,
    ));
}
