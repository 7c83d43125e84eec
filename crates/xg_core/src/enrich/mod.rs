//! Per-shot feature derivation.
//!
//! `engine` turns one (shot, aligned frame, roster metadata) triple into an
//! `EnrichedShot` row; `zones` holds the categorical buckets the row uses.

pub mod engine;
pub mod zones;

pub use engine::enrich_shot;
pub use zones::{AngleCategory, DistanceCategory, FieldZone6};
