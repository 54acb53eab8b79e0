/// Splat sizing, tessellation and point-count limits.
pub mod splat;

/// Viewer-space coordinate convention correction.
pub mod coordinate_system;

/// Lighting, background and material defaults.
pub mod render_settings;
