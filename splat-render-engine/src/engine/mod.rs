pub mod cloud;
pub mod core;
pub mod loading;
pub mod mesh;
pub mod scene;
pub mod systems;
