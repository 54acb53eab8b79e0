//! Point-cloud ingestion: text parsing, bounds tracking, normalisation
//! and attribute colouring. Everything here is plain data in, plain data
//! out; no Bevy world access.

pub mod bounds;
pub mod colour;
pub mod normalize;
pub mod parse;
