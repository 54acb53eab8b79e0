use bevy::math::Vec3;
use rand::Rng;
use rand::seq::SliceRandom;

use constants::coordinate_system::correct_viewer_space;

use super::bounds::SplatBounds;
use super::parse::{SplatAttribute, SplatRecord};

/// One point after normalisation: position in the canonical
/// [-0.5, 0.5]^3 volume plus its carried display attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedSplat {
    pub position: Vec3,
    pub attribute: NormalizedAttribute,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizedAttribute {
    /// Surface normal, direction unchanged from the input record.
    Normal(Vec3),
    /// Density rescaled to [0, 1] against the dataset reference range.
    Density(f32),
}

impl NormalizedSplat {
    /// Disk face orientation: the point's own normal in orientation mode,
    /// a fixed canonical facing in density mode.
    pub fn facing(&self) -> Vec3 {
        match self.attribute {
            NormalizedAttribute::Normal(normal) => normal.try_normalize().unwrap_or(Vec3::Z),
            NormalizedAttribute::Density(_) => Vec3::Z,
        }
    }
}

/// Reduce an oversized cloud to exactly `cap` points by uniform random
/// selection without replacement (shuffle then truncate). Inputs at or
/// under the cap pass through untouched.
pub fn subsample<R: Rng>(mut records: Vec<SplatRecord>, cap: usize, rng: &mut R) -> Vec<SplatRecord> {
    if records.len() > cap {
        records.shuffle(rng);
        records.truncate(cap);
    }
    records
}

/// Rescale a cloud into the canonical unit volume.
/// Each axis is scaled independently to its own observed extent, then X
/// and Y are mirrored into viewer space. Normals pass through unchanged;
/// densities rescale against the externally supplied dataset range and
/// clamp to [0, 1].
pub fn normalize_cloud(
    records: &[SplatRecord],
    density_range: Option<(f64, f64)>,
) -> Vec<NormalizedSplat> {
    let bounds = SplatBounds::from_points(records.iter().map(|record| &record.position));

    records
        .iter()
        .map(|record| {
            let nx = bounds.normalised_x(record.position.x) - 0.5;
            let ny = bounds.normalised_y(record.position.y) - 0.5;
            let nz = bounds.normalised_z(record.position.z) - 0.5;
            let (x, y, z) = correct_viewer_space(nx, ny, nz);

            let attribute = match record.attribute {
                SplatAttribute::Normal(normal) => NormalizedAttribute::Normal(normal.as_vec3()),
                SplatAttribute::Density(density) => {
                    NormalizedAttribute::Density(rescale_density(density, density_range))
                }
            };

            NormalizedSplat {
                position: Vec3::new(x as f32, y as f32, z as f32),
                attribute,
            }
        })
        .collect()
}

fn rescale_density(density: f64, range: Option<(f64, f64)>) -> f32 {
    let (min, max) = range.unwrap_or((0.0, 1.0));
    let scaled = if max > min {
        (density - min) / (max - min)
    } else {
        0.0
    };
    scaled.clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cloud::parse::{AttributeMode, parse_records};
    use bevy::math::DVec3;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn orientation_record(x: f64, y: f64, z: f64) -> SplatRecord {
        SplatRecord {
            position: DVec3::new(x, y, z),
            attribute: SplatAttribute::Normal(DVec3::Z),
        }
    }

    #[test]
    fn test_two_point_cloud_maps_to_flipped_corners() {
        let text = "0 0 0 0 0 1\n1 1 1 0 0 1\n";
        let records = parse_records(text, AttributeMode::Orientation);
        let points = normalize_cloud(&records, None);

        assert_eq!(points[0].position, Vec3::new(0.5, 0.5, -0.5));
        assert_eq!(points[1].position, Vec3::new(-0.5, -0.5, 0.5));
    }

    #[test]
    fn test_axis_extremes_after_flip() {
        let records = vec![
            orientation_record(0.0, 0.0, 0.0),
            orientation_record(2.0, 4.0, 8.0),
            orientation_record(1.0, 2.0, 4.0),
        ];
        let points = normalize_cloud(&records, None);

        // Axis minimum flips to +0.5 on X/Y; Z is not flipped.
        assert_eq!(points[0].position, Vec3::new(0.5, 0.5, -0.5));
        assert_eq!(points[1].position, Vec3::new(-0.5, -0.5, 0.5));
        assert_eq!(points[2].position, Vec3::ZERO);
    }

    #[test]
    fn test_single_point_is_finite_origin() {
        let records = vec![orientation_record(3.0, 7.0, -2.0)];
        let points = normalize_cloud(&records, None);

        assert_eq!(points[0].position, Vec3::ZERO);
        assert!(points[0].position.is_finite());
    }

    #[test]
    fn test_normals_pass_through_unchanged() {
        let records = vec![SplatRecord {
            position: DVec3::ZERO,
            attribute: SplatAttribute::Normal(DVec3::new(0.3, -0.4, 0.5)),
        }];
        let points = normalize_cloud(&records, None);

        assert_eq!(
            points[0].attribute,
            NormalizedAttribute::Normal(Vec3::new(0.3, -0.4, 0.5))
        );
    }

    #[test]
    fn test_density_rescaled_by_dataset_range() {
        let records = vec![SplatRecord {
            position: DVec3::ZERO,
            attribute: SplatAttribute::Density(5.0),
        }];
        let points = normalize_cloud(&records, Some((0.0, 10.0)));

        assert_eq!(points[0].attribute, NormalizedAttribute::Density(0.5));
    }

    #[test]
    fn test_density_clamped_to_unit_range() {
        let records = vec![
            SplatRecord {
                position: DVec3::ZERO,
                attribute: SplatAttribute::Density(25.0),
            },
            SplatRecord {
                position: DVec3::ONE,
                attribute: SplatAttribute::Density(-3.0),
            },
        ];
        let points = normalize_cloud(&records, Some((0.0, 10.0)));

        assert_eq!(points[0].attribute, NormalizedAttribute::Density(1.0));
        assert_eq!(points[1].attribute, NormalizedAttribute::Density(0.0));
    }

    #[test]
    fn test_subsample_over_cap_truncates_to_cap() {
        let records: Vec<SplatRecord> = (0..100)
            .map(|i| orientation_record(i as f64, 0.0, 0.0))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);
        let kept = subsample(records.clone(), 10, &mut rng);

        assert_eq!(kept.len(), 10);
        // Every survivor is a member of the input set; nothing fabricated.
        for record in &kept {
            assert!(records.contains(record));
        }
    }

    #[test]
    fn test_subsample_under_cap_is_identity() {
        let records: Vec<SplatRecord> = (0..5)
            .map(|i| orientation_record(i as f64, 0.0, 0.0))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);
        let kept = subsample(records.clone(), 10, &mut rng);

        assert_eq!(kept, records);
    }

    #[test]
    fn test_density_facing_is_canonical() {
        let splat = NormalizedSplat {
            position: Vec3::ZERO,
            attribute: NormalizedAttribute::Density(0.5),
        };
        assert_eq!(splat.facing(), Vec3::Z);
    }

    #[test]
    fn test_zero_normal_falls_back_to_canonical_facing() {
        let splat = NormalizedSplat {
            position: Vec3::ZERO,
            attribute: NormalizedAttribute::Normal(Vec3::ZERO),
        };
        assert_eq!(splat.facing(), Vec3::Z);
    }
}
