use std::collections::HashMap;

use bevy::prelude::*;
use thiserror::Error;

use crate::engine::cloud::parse::AttributeMode;
use crate::engine::systems::viewer_options::{ShadingStyle, SplatScale};

/// A (scale, shading) combination with its own precomputed batched mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantKey {
    pub scale: SplatScale,
    pub style: ShadingStyle,
}

impl VariantKey {
    /// The closed key set established at load time: every scale preset
    /// crossed with every shading style.
    pub fn all() -> impl Iterator<Item = VariantKey> {
        SplatScale::ALL.into_iter().flat_map(|scale| {
            ShadingStyle::ALL
                .into_iter()
                .map(move |style| VariantKey { scale, style })
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariantError {
    #[error("no variant registered for {0:?}")]
    UnknownKey(VariantKey),
}

/// Marker for batched splat mesh entities.
#[derive(Component)]
pub struct SplatCloud;

/// Owns every precomputed splat mesh variant for the current load.
/// Empty until the first completed load; replaced wholesale by the next.
/// All mutation happens on the single thread driving load and render.
#[derive(Resource, Default)]
pub struct SplatVariants {
    entities: HashMap<VariantKey, Entity>,
    visible: Option<VariantKey>,
    mode: Option<AttributeMode>,
    dataset: Option<String>,
}

impl SplatVariants {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn visible(&self) -> Option<VariantKey> {
        self.visible
    }

    pub fn mode(&self) -> Option<AttributeMode> {
        self.mode
    }

    pub fn dataset(&self) -> Option<&str> {
        self.dataset.as_deref()
    }

    pub fn entity(&self, key: VariantKey) -> Option<Entity> {
        self.entities.get(&key).copied()
    }

    /// Swap in the variant set of a completed load.
    /// The caller has already spawned the entities with their initial
    /// visibility and despawned the previous set.
    pub fn replace(
        &mut self,
        entities: HashMap<VariantKey, Entity>,
        mode: AttributeMode,
        dataset: String,
        visible: VariantKey,
    ) {
        self.entities = entities;
        self.visible = Some(visible);
        self.mode = Some(mode);
        self.dataset = Some(dataset);
    }

    /// Despawn every registered variant, returning to the empty state.
    pub fn clear(&mut self, commands: &mut Commands) {
        for (_, entity) in self.entities.drain() {
            commands.entity(entity).despawn();
        }
        self.visible = None;
        self.mode = None;
        self.dataset = None;
    }

    /// Hide every variant, then show exactly the requested one.
    /// Pure visibility mutation; no mesh data is touched.
    pub fn set_visibility(
        &mut self,
        key: VariantKey,
        visibilities: &mut Query<&mut Visibility, With<SplatCloud>>,
    ) -> Result<(), VariantError> {
        if !self.entities.contains_key(&key) {
            return Err(VariantError::UnknownKey(key));
        }

        for (&candidate, &entity) in self.entities.iter() {
            if let Ok(mut visibility) = visibilities.get_mut(entity) {
                *visibility = if candidate == key {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                };
            }
        }

        self.visible = Some(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::SystemState;

    fn loaded_variants(world: &mut World) -> SplatVariants {
        let mut entities = HashMap::new();
        for key in VariantKey::all() {
            let entity = world.spawn((Visibility::Hidden, SplatCloud)).id();
            entities.insert(key, entity);
        }

        let mut variants = SplatVariants::default();
        variants.replace(
            entities,
            AttributeMode::Orientation,
            "test".to_string(),
            VariantKey {
                scale: SplatScale::Normal,
                style: ShadingStyle::FlatColour,
            },
        );
        variants
    }

    fn visibility_states(world: &World, variants: &SplatVariants) -> Vec<Visibility> {
        VariantKey::all()
            .map(|key| {
                let entity = variants.entity(key).unwrap();
                *world.get::<Visibility>(entity).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_key_set_is_full_cross_product() {
        assert_eq!(
            VariantKey::all().count(),
            SplatScale::ALL.len() * ShadingStyle::ALL.len()
        );
    }

    #[test]
    fn test_exactly_one_variant_visible_after_switch() {
        let mut world = World::new();
        let mut variants = loaded_variants(&mut world);
        let mut state: SystemState<Query<&mut Visibility, With<SplatCloud>>> =
            SystemState::new(&mut world);

        let key = VariantKey {
            scale: SplatScale::Big,
            style: ShadingStyle::LitGrey,
        };
        {
            let mut query = state.get_mut(&mut world);
            variants.set_visibility(key, &mut query).unwrap();
        }

        let visible: Vec<VariantKey> = VariantKey::all()
            .filter(|&candidate| {
                let entity = variants.entity(candidate).unwrap();
                *world.get::<Visibility>(entity).unwrap() == Visibility::Visible
            })
            .collect();
        assert_eq!(visible, vec![key]);
        assert_eq!(variants.visible(), Some(key));
    }

    #[test]
    fn test_switch_round_trip_restores_visibility_set() {
        let mut world = World::new();
        let mut variants = loaded_variants(&mut world);
        let mut state: SystemState<Query<&mut Visibility, With<SplatCloud>>> =
            SystemState::new(&mut world);

        let first = VariantKey {
            scale: SplatScale::Normal,
            style: ShadingStyle::FlatColour,
        };
        let second = VariantKey {
            scale: SplatScale::VeryBig,
            style: ShadingStyle::LitGrey,
        };

        {
            let mut query = state.get_mut(&mut world);
            variants.set_visibility(first, &mut query).unwrap();
        }
        let initial = visibility_states(&world, &variants);

        {
            let mut query = state.get_mut(&mut world);
            variants.set_visibility(second, &mut query).unwrap();
        }
        {
            let mut query = state.get_mut(&mut world);
            variants.set_visibility(first, &mut query).unwrap();
        }

        assert_eq!(initial, visibility_states(&world, &variants));
    }

    #[test]
    fn test_unknown_key_is_rejected_without_mutation() {
        let mut world = World::new();
        let mut variants = SplatVariants::default();
        let mut state: SystemState<Query<&mut Visibility, With<SplatCloud>>> =
            SystemState::new(&mut world);

        let key = VariantKey {
            scale: SplatScale::Normal,
            style: ShadingStyle::FlatColour,
        };
        let mut query = state.get_mut(&mut world);
        assert_eq!(
            variants.set_visibility(key, &mut query),
            Err(VariantError::UnknownKey(key))
        );
        assert_eq!(variants.visible(), None);
    }
}
