/// Base splat disk radius in normalised world units, before scale presets.
pub const BASE_SPLAT_RADIUS: f32 = 0.005;

/// Hard ceiling on retained points per load; larger inputs are subsampled.
pub const MAX_SPLAT_POINTS: usize = 20_000;

/// Rim vertices per splat disk (fan tessellation).
pub const SPLAT_DISK_SEGMENTS: usize = 6;

/// Vertices per batched splat: one centre plus the rim.
pub const SPLAT_VERTEX_COUNT: usize = SPLAT_DISK_SEGMENTS + 1;

/// Indices per batched splat: one triangle per rim segment.
pub const SPLAT_INDEX_COUNT: usize = SPLAT_DISK_SEGMENTS * 3;

/// Radius multipliers selectable from the control panel.
pub const SPLAT_SCALE_PRESETS: [f32; 5] = [0.5, 0.75, 1.0, 1.5, 2.0];
