pub mod splat_mesh;
