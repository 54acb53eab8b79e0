use bevy::math::DVec3;

/// Which attribute kind a dataset carries. The two kinds are mutually
/// exclusive variants, never mixed within one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// `x y z nx ny nz` records, coloured by normal direction.
    Orientation,
    /// `x y z density` records, coloured by a density heat-map.
    Density,
}

impl AttributeMode {
    /// Numeric fields expected per line.
    pub fn arity(self) -> usize {
        match self {
            AttributeMode::Orientation => 6,
            AttributeMode::Density => 4,
        }
    }
}

/// One accepted input sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplatRecord {
    pub position: DVec3,
    pub attribute: SplatAttribute,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplatAttribute {
    Normal(DVec3),
    Density(f64),
}

/// Decide the attribute mode from the first fully numeric line
/// (6 fields → orientation, 4 fields → density).
pub fn detect_mode(text: &str) -> Option<AttributeMode> {
    for line in text.lines() {
        if let Some(fields) = parse_fields(line) {
            match fields.len() {
                6 => return Some(AttributeMode::Orientation),
                4 => return Some(AttributeMode::Density),
                _ => continue,
            }
        }
    }
    None
}

/// Parse raw file text into records for the active mode, preserving
/// input line order. Lines with the wrong field count or a non-numeric
/// field are skipped silently; hand-edited exports are expected to be
/// partially dirty.
pub fn parse_records(text: &str, mode: AttributeMode) -> Vec<SplatRecord> {
    text.lines()
        .filter_map(|line| parse_record(line, mode))
        .collect()
}

fn parse_record(line: &str, mode: AttributeMode) -> Option<SplatRecord> {
    let fields = parse_fields(line)?;
    if fields.len() != mode.arity() {
        return None;
    }

    let position = DVec3::new(fields[0], fields[1], fields[2]);
    let attribute = match mode {
        AttributeMode::Orientation => {
            SplatAttribute::Normal(DVec3::new(fields[3], fields[4], fields[5]))
        }
        AttributeMode::Density => SplatAttribute::Density(fields[3]),
    };

    Some(SplatRecord {
        position,
        attribute,
    })
}

/// Split on whitespace and parse every field as f64.
/// Empty lines and lines with any unparseable field yield None.
fn parse_fields(line: &str) -> Option<Vec<f64>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.is_empty() {
        return None;
    }
    fields.iter().map(|field| field.parse::<f64>().ok()).collect()
}
