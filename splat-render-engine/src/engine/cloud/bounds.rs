/// Point cloud coordinate bounds tracking and normalisation
use bevy::math::DVec3;

#[derive(Debug, Clone)]
pub struct SplatBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl SplatBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            min_z: f64::INFINITY,
            max_z: f64::NEG_INFINITY,
        }
    }

    /// Accumulate bounds over a point sequence
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a DVec3>) -> Self {
        let mut bounds = Self::new();
        for point in points {
            bounds.update(*point);
        }
        bounds
    }

    /// Update bounds with a new point
    pub fn update(&mut self, point: DVec3) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
        self.min_z = self.min_z.min(point.z);
        self.max_z = self.max_z.max(point.z);
    }

    /// Normalise X coordinate to the 0-1 range.
    /// A zero-width axis maps to the constant centre instead of dividing
    /// by zero (single points and planar slices are legal input).
    pub fn normalised_x(&self, x: f64) -> f64 {
        normalise_axis(x, self.min_x, self.max_x)
    }

    /// Normalise Y coordinate to the 0-1 range
    pub fn normalised_y(&self, y: f64) -> f64 {
        normalise_axis(y, self.min_y, self.max_y)
    }

    /// Normalise Z coordinate to the 0-1 range
    pub fn normalised_z(&self, z: f64) -> f64 {
        normalise_axis(z, self.min_z, self.max_z)
    }
}

impl Default for SplatBounds {
    fn default() -> Self {
        Self::new()
    }
}

fn normalise_axis(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_map_to_unit_range() {
        let points = [DVec3::new(-2.0, 0.0, 10.0), DVec3::new(4.0, 1.0, 30.0)];
        let bounds = SplatBounds::from_points(&points);

        assert_eq!(bounds.normalised_x(-2.0), 0.0);
        assert_eq!(bounds.normalised_x(4.0), 1.0);
        assert_eq!(bounds.normalised_x(1.0), 0.5);
        assert_eq!(bounds.normalised_z(20.0), 0.5);
    }

    #[test]
    fn test_degenerate_axis_is_constant_centre() {
        let points = [DVec3::new(1.0, 5.0, 0.0), DVec3::new(2.0, 5.0, 0.0)];
        let bounds = SplatBounds::from_points(&points);

        // Y and Z are zero-width; both must stay finite.
        assert_eq!(bounds.normalised_y(5.0), 0.5);
        assert_eq!(bounds.normalised_z(0.0), 0.5);
        assert!(bounds.normalised_y(5.0).is_finite());
    }
}
