use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;

/// Reference density range for one dataset. Supplied externally; density
/// normalisation is a lookup against this table, never a recomputation
/// from the current batch.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DensityRange {
    pub min: f64,
    pub max: f64,
}

/// Dataset id → reference density range. Mirrors the JSON sidecar file
/// exactly.
#[derive(Asset, Resource, TypePath, Debug, Clone, Default, Deserialize)]
pub struct DensityRangeTable {
    pub datasets: HashMap<String, DensityRange>,
}

impl DensityRangeTable {
    pub fn range(&self, dataset: &str) -> Option<(f64, f64)> {
        self.datasets
            .get(dataset)
            .map(|range| (range.min, range.max))
    }
}

#[derive(Resource, Default)]
pub struct DensityRangeLoader {
    handle: Option<Handle<DensityRangeTable>>,
    loaded: bool,
}

/// Kick off the JSON asset load for the density-range table.
pub fn start_range_loading(
    mut loader: ResMut<DensityRangeLoader>,
    asset_server: Res<AssetServer>,
) {
    loader.handle = Some(asset_server.load("density_ranges.json"));
}

/// Copy the table into the live resource once the asset arrives.
/// Density-mode loads before that point fail with an unknown-dataset
/// error and leave the displayed cloud untouched.
pub fn poll_range_table(
    mut loader: ResMut<DensityRangeLoader>,
    tables: Res<Assets<DensityRangeTable>>,
    mut commands: Commands,
) {
    if loader.loaded {
        return;
    }

    if let Some(ref handle) = loader.handle {
        if let Some(table) = tables.get(handle) {
            println!(
                "✓ Density range table loaded ({} datasets)",
                table.datasets.len()
            );
            commands.insert_resource(table.clone());
            loader.loaded = true;
        }
    }
}
