pub mod background;
pub mod lighting;
pub mod variants;
