use bevy::prelude::*;

/// Default point-light position, matching the control-panel slider range.
pub const DEFAULT_LIGHT_POSITION: Vec3 = Vec3::new(2.0, 2.0, 2.0);

/// Step applied per keypress when nudging the light.
pub const LIGHT_NUDGE_STEP: f32 = 0.1;

/// Radius of the white marker sphere that follows the light.
pub const LIGHT_MARKER_RADIUS: f32 = 0.05;

/// Base colour of the lit-grey splat material.
pub const LIT_GREY_COLOUR: Color = Color::srgb(0.533, 0.533, 0.533);

/// Distance of each orientation reference plane from the origin.
/// The normalised cloud occupies [-0.5, 0.5] per axis, so the planes sit
/// flush against the cloud's lower faces.
pub const BACKGROUND_PLANE_OFFSET: f32 = 0.5;

/// Edge length of each orientation reference plane.
pub const BACKGROUND_PLANE_SIZE: f32 = 1.0;

/// Initial camera position; the normalised cloud is centred on the origin.
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(1.0, 1.0, 1.0);
