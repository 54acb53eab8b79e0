use bevy::prelude::*;

use crate::engine::scene::background::BackgroundPlane;
use crate::engine::scene::lighting::SplatLight;
use crate::engine::scene::variants::{SplatCloud, SplatVariants, VariantKey};
use crate::engine::systems::viewer_options::{ShadingStyle, SplatScale, ViewerOptions};

/// Cached copy of the watched configuration fields. The live options are
/// polled rather than event-driven, so change detection is an explicit
/// comparison against this snapshot, once per frame.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    pub scale: SplatScale,
    pub shading: ShadingStyle,
    pub background_visible: bool,
    pub light_position: Vec3,
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self::of(&ViewerOptions::default())
    }
}

/// The minimal mutation corresponding to one changed configuration field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigChange {
    Variant(VariantKey),
    Background(bool),
    Light(Vec3),
}

impl ConfigSnapshot {
    pub fn of(options: &ViewerOptions) -> Self {
        Self {
            scale: options.scale,
            shading: options.shading,
            background_visible: options.background_visible,
            light_position: options.light_position,
        }
    }

    /// Mutations needed to bring the scene in line with `options`.
    /// An unchanged configuration yields an empty set; each unchanged
    /// field costs one comparison.
    pub fn diff(&self, options: &ViewerOptions) -> Vec<ConfigChange> {
        let mut changes = Vec::new();

        if options.scale != self.scale || options.shading != self.shading {
            changes.push(ConfigChange::Variant(VariantKey {
                scale: options.scale,
                style: options.shading,
            }));
        }
        if options.background_visible != self.background_visible {
            changes.push(ConfigChange::Background(options.background_visible));
        }
        if options.light_position != self.light_position {
            changes.push(ConfigChange::Light(options.light_position));
        }

        changes
    }

    /// Advance the snapshot for the field a change was applied to.
    pub fn record(&mut self, change: &ConfigChange) {
        match *change {
            ConfigChange::Variant(key) => {
                self.scale = key.scale;
                self.shading = key.style;
            }
            ConfigChange::Background(visible) => self.background_visible = visible,
            ConfigChange::Light(position) => self.light_position = position,
        }
    }
}

/// Poll the live options once per frame and apply only what changed.
/// Geometry is never rebuilt here; variant switches are pure visibility
/// mutations on meshes precomputed at load time.
pub fn config_diff_system(
    options: Res<ViewerOptions>,
    mut snapshot: ResMut<ConfigSnapshot>,
    mut variants: ResMut<SplatVariants>,
    mut cloud_visibilities: Query<&mut Visibility, With<SplatCloud>>,
    mut background_visibilities: Query<
        &mut Visibility,
        (With<BackgroundPlane>, Without<SplatCloud>),
    >,
    mut light_transforms: Query<&mut Transform, With<SplatLight>>,
) {
    for change in snapshot.diff(&options) {
        match change {
            ConfigChange::Variant(key) => {
                // Before the first load there is nothing to switch; the
                // selection is still recorded and applied at load time.
                if !variants.is_empty() {
                    if let Err(err) = variants.set_visibility(key, &mut cloud_visibilities) {
                        warn!("{err}; keeping current variant");
                    }
                }
            }
            ConfigChange::Background(visible) => {
                for mut visibility in &mut background_visibilities {
                    *visibility = if visible {
                        Visibility::Visible
                    } else {
                        Visibility::Hidden
                    };
                }
            }
            ConfigChange::Light(position) => {
                for mut transform in &mut light_transforms {
                    transform.translation = position;
                }
            }
        }
        snapshot.record(&change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_options_produce_no_changes() {
        let options = ViewerOptions::default();
        let snapshot = ConfigSnapshot::of(&options);
        assert!(snapshot.diff(&options).is_empty());
    }

    #[test]
    fn test_each_field_maps_to_its_change() {
        let snapshot = ConfigSnapshot::default();

        let mut options = ViewerOptions::default();
        options.scale = SplatScale::VeryBig;
        assert_eq!(
            snapshot.diff(&options),
            vec![ConfigChange::Variant(VariantKey {
                scale: SplatScale::VeryBig,
                style: options.shading,
            })]
        );

        let mut options = ViewerOptions::default();
        options.background_visible = true;
        assert_eq!(
            snapshot.diff(&options),
            vec![ConfigChange::Background(true)]
        );

        let mut options = ViewerOptions::default();
        options.light_position = Vec3::new(1.0, 0.0, -1.0);
        assert_eq!(
            snapshot.diff(&options),
            vec![ConfigChange::Light(Vec3::new(1.0, 0.0, -1.0))]
        );
    }

    #[test]
    fn test_scale_and_shading_collapse_to_one_variant_switch() {
        let snapshot = ConfigSnapshot::default();
        let mut options = ViewerOptions::default();
        options.scale = SplatScale::Small;
        options.shading = ShadingStyle::LitGrey;

        assert_eq!(
            snapshot.diff(&options),
            vec![ConfigChange::Variant(VariantKey {
                scale: SplatScale::Small,
                style: ShadingStyle::LitGrey,
            })]
        );
    }

    #[test]
    fn test_recorded_changes_quiesce_the_diff() {
        let mut snapshot = ConfigSnapshot::default();
        let mut options = ViewerOptions::default();
        options.scale = SplatScale::Big;
        options.background_visible = true;
        options.light_position = Vec3::ONE;

        let changes = snapshot.diff(&options);
        assert_eq!(changes.len(), 3);
        for change in &changes {
            snapshot.record(change);
        }

        assert!(snapshot.diff(&options).is_empty());
    }
}
