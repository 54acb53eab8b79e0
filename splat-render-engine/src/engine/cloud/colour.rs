use bevy::math::Vec3;

/// Colour a splat by how axis-aligned its normal is, independent of sign:
/// channel = round(abs(component) * 255).
pub fn normal_colour_bytes(normal: Vec3) -> [u8; 3] {
    [
        (normal.x.abs() * 255.0).round() as u8,
        (normal.y.abs() * 255.0).round() as u8,
        (normal.z.abs() * 255.0).round() as u8,
    ]
}

/// Vertex colour (RGBA) for an orientation-mode splat.
pub fn normal_colour(normal: Vec3) -> [f32; 4] {
    let [r, g, b] = normal_colour_bytes(normal);
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        1.0,
    ]
}

/// Heat-map hue in [0, 1] turns; falls as density rises so the highest
/// densities land on the warm end of the ramp.
pub fn density_hue(density: f32) -> f32 {
    (1.0 - density) / 1.5
}

/// Vertex colour (RGBA) for a density-mode splat: fixed-saturation,
/// half-lightness HSL ramp over the density hue.
pub fn density_colour(density: f32) -> [f32; 4] {
    let (r, g, b) = hsl_to_rgb(density_hue(density), 1.0, 0.5);
    [r, g, b, 1.0]
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    (r, g, b)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
