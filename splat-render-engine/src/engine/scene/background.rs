use bevy::prelude::*;

use constants::render_settings::{BACKGROUND_PLANE_OFFSET, BACKGROUND_PLANE_SIZE};

/// Marker for the three orientation reference planes.
#[derive(Component)]
pub struct BackgroundPlane;

/// Spawn the X/Y/Z reference planes facing the origin. Hidden until the
/// background toggle enables them; visibility is independent of the
/// splat variants.
pub fn spawn_background(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        ..default()
    });

    let half = Vec2::splat(BACKGROUND_PLANE_SIZE * 0.5);
    let planes = [
        (Vec3::new(-BACKGROUND_PLANE_OFFSET, 0.0, 0.0), Vec3::X),
        (Vec3::new(0.0, -BACKGROUND_PLANE_OFFSET, 0.0), Vec3::Y),
        (Vec3::new(0.0, 0.0, -BACKGROUND_PLANE_OFFSET), Vec3::Z),
    ];

    for (position, normal) in planes {
        commands.spawn((
            Mesh3d(meshes.add(Plane3d::new(normal, half))),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
            Visibility::Hidden,
            BackgroundPlane,
        ));
    }
}
