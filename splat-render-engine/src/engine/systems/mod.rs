pub mod config_diff;
pub mod fps_tracking;
pub mod viewer_options;
