use bevy::prelude::*;

use constants::render_settings::{DEFAULT_LIGHT_POSITION, LIGHT_NUDGE_STEP};
use constants::splat::SPLAT_SCALE_PRESETS;

/// Radius preset for the splat disks (the control panel's size menu).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplatScale {
    VerySmall = 0,
    Small = 1,
    Normal = 2,
    Big = 3,
    VeryBig = 4,
}

impl SplatScale {
    pub const ALL: [SplatScale; 5] = [
        SplatScale::VerySmall,
        SplatScale::Small,
        SplatScale::Normal,
        SplatScale::Big,
        SplatScale::VeryBig,
    ];

    /// Multiplier applied to the base splat radius.
    pub fn factor(self) -> f32 {
        SPLAT_SCALE_PRESETS[self as usize]
    }
}

/// How a variant is shaded: unlit per-vertex colours, or a grey material
/// responding to the point light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingStyle {
    FlatColour,
    LitGrey,
}

impl ShadingStyle {
    pub const ALL: [ShadingStyle; 2] = [ShadingStyle::FlatColour, ShadingStyle::LitGrey];
}

/// Live viewer configuration. Externally owned and mutated (input glue or
/// an embedding host writes it); the engine only ever reads it, once per
/// frame, through the config diff system.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    pub scale: SplatScale,
    pub shading: ShadingStyle,
    pub background_visible: bool,
    pub light_position: Vec3,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            scale: SplatScale::Normal,
            shading: ShadingStyle::FlatColour,
            background_visible: false,
            light_position: DEFAULT_LIGHT_POSITION,
        }
    }
}

/// Keyboard stand-in for the control panel. Every binding only mutates
/// `ViewerOptions`; the diff system picks the change up the same frame.
pub fn viewer_options_input(
    mut options: ResMut<ViewerOptions>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    if keyboard.just_pressed(KeyCode::Digit1) {
        options.scale = SplatScale::VerySmall;
        println!("Splat scale: very small");
    }
    if keyboard.just_pressed(KeyCode::Digit2) {
        options.scale = SplatScale::Small;
        println!("Splat scale: small");
    }
    if keyboard.just_pressed(KeyCode::Digit3) {
        options.scale = SplatScale::Normal;
        println!("Splat scale: normal");
    }
    if keyboard.just_pressed(KeyCode::Digit4) {
        options.scale = SplatScale::Big;
        println!("Splat scale: big");
    }
    if keyboard.just_pressed(KeyCode::Digit5) {
        options.scale = SplatScale::VeryBig;
        println!("Splat scale: very big");
    }

    if keyboard.just_pressed(KeyCode::KeyZ) {
        options.shading = ShadingStyle::FlatColour;
        println!("Shading: flat colour");
    }
    if keyboard.just_pressed(KeyCode::KeyX) {
        options.shading = ShadingStyle::LitGrey;
        println!("Shading: lit grey");
    }

    if keyboard.just_pressed(KeyCode::KeyB) {
        options.background_visible = !options.background_visible;
        println!("Background: {}", options.background_visible);
    }

    let mut nudge = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyI) {
        nudge.y += LIGHT_NUDGE_STEP;
    }
    if keyboard.pressed(KeyCode::KeyK) {
        nudge.y -= LIGHT_NUDGE_STEP;
    }
    if keyboard.pressed(KeyCode::KeyJ) {
        nudge.x -= LIGHT_NUDGE_STEP;
    }
    if keyboard.pressed(KeyCode::KeyL) {
        nudge.x += LIGHT_NUDGE_STEP;
    }
    if keyboard.pressed(KeyCode::KeyU) {
        nudge.z -= LIGHT_NUDGE_STEP;
    }
    if keyboard.pressed(KeyCode::KeyO) {
        nudge.z += LIGHT_NUDGE_STEP;
    }
    if nudge != Vec3::ZERO {
        options.light_position += nudge;
    }
}
