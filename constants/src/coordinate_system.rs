/// Viewer-space correction matrix (row-major: [x_new, y_new, z_new]).
/// Point-cloud exports use a convention mirrored against the render space
/// on X and Y; Z is shared.
pub const VIEWER_SPACE_TRANSFORM: [[f64; 3]; 3] = [
    [-1.0, 0.0, 0.0], // X = -X
    [0.0, -1.0, 0.0], // Y = -Y
    [0.0, 0.0, 1.0],  // Z = Z
];

/// Apply the viewer-space correction to a normalised coordinate triple.
pub fn correct_viewer_space(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let input = [x, y, z];
    let mut output = [0.0; 3];

    for i in 0..3 {
        for j in 0..3 {
            output[i] += VIEWER_SPACE_TRANSFORM[i][j] * input[j];
        }
    }

    (output[0], output[1], output[2])
}
