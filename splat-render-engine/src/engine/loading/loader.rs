use rand::Rng;
use thiserror::Error;

use super::density_ranges::DensityRangeTable;
use crate::engine::cloud::normalize::{NormalizedSplat, normalize_cloud, subsample};
use crate::engine::cloud::parse::{AttributeMode, detect_mode, parse_records};

/// Why a load was rejected. A rejected load never disturbs the
/// previously displayed cloud; malformed individual lines are not errors
/// at all and are dropped during parsing.
#[derive(Debug, Error)]
pub enum SplatLoadError {
    #[error("no parseable point records in input")]
    NoParsableRecords,
    #[error("no density range registered for dataset `{0}`")]
    UnknownDataset(String),
    #[error("could not read dropped file: {0}")]
    UnreadableFile(#[from] std::io::Error),
}

/// A fully ingested, normalised cloud ready for mesh building.
#[derive(Debug, Clone)]
pub struct LoadedCloud {
    pub dataset: String,
    pub mode: AttributeMode,
    pub points: Vec<NormalizedSplat>,
}

/// Run the whole ingestion pipeline on raw file text: detect the
/// attribute mode, parse, resolve the density reference range, subsample
/// to the point cap and normalise. Synchronous and all-or-nothing.
pub fn load_cloud<R: Rng>(
    text: &str,
    dataset: &str,
    ranges: &DensityRangeTable,
    cap: usize,
    rng: &mut R,
) -> Result<LoadedCloud, SplatLoadError> {
    let mode = detect_mode(text).ok_or(SplatLoadError::NoParsableRecords)?;
    let records = parse_records(text, mode);
    if records.is_empty() {
        return Err(SplatLoadError::NoParsableRecords);
    }

    let density_range = match mode {
        AttributeMode::Density => Some(
            ranges
                .range(dataset)
                .ok_or_else(|| SplatLoadError::UnknownDataset(dataset.to_string()))?,
        ),
        AttributeMode::Orientation => None,
    };

    let records = subsample(records, cap, rng);
    let points = normalize_cloud(&records, density_range);

    Ok(LoadedCloud {
        dataset: dataset.to_string(),
        mode,
        points,
    })
}
