use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::render_settings::CAMERA_START_POSITION;

use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::density_ranges::{
    DensityRangeLoader, DensityRangeTable, poll_range_table, start_range_loading,
};
use crate::engine::loading::file_drop::handle_dropped_files;
use crate::engine::scene::background::spawn_background;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::variants::SplatVariants;
use crate::engine::systems::config_diff::{ConfigSnapshot, config_diff_system};
use crate::engine::systems::fps_tracking::{FpsText, fps_text_update_system};
use crate::engine::systems::viewer_options::{ViewerOptions, viewer_options_input};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<DensityRangeTable>::new(&["json"]));

    app.init_resource::<ViewerOptions>()
        .init_resource::<ConfigSnapshot>()
        .init_resource::<SplatVariants>()
        .init_resource::<DensityRangeLoader>()
        .init_resource::<DensityRangeTable>()
        .add_systems(Startup, (setup, start_range_loading))
        .add_systems(
            Update,
            (
                poll_range_table,
                handle_dropped_files,
                viewer_options_input,
                // The diff step runs after input so a change is applied
                // in the same frame it was made.
                config_diff_system,
                fps_text_update_system,
            )
                .chain(),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    println!("=== SPLAT VIEWER ===");
    println!("Drop a point file onto the window:");
    println!("  `x y z nx ny nz` per line for orientation mode");
    println!("  `x y z density` per line for density mode");

    spawn_camera(&mut commands);
    spawn_lighting(&mut commands, &mut meshes, &mut materials);
    spawn_background(&mut commands, &mut meshes, &mut materials);
    spawn_ui(&mut commands);
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_START_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_ui(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}
