//! Application setup and host glue.
//!
//! Everything here is scaffolding around the ingestion and variant
//! pipeline: window, camera, overlay, plugin wiring.

pub mod app_setup;
pub mod window_config;
