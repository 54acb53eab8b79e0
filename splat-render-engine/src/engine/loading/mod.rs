pub mod density_ranges;
pub mod file_drop;
pub mod loader;
