//! # xg_core - Shot Feature Enrichment Engine
//!
//! Joins two independently-timestamped views of a football match, discrete
//! shot events and dense player-tracking frames, into one feature table for
//! expected-goals modeling. Every shot is aligned to the nearest tracking
//! frame and annotated with the pitch geometry at that instant: shooter and
//! goalkeeper positions, shooting-cone occupancy, distances, angles and
//! categorical buckets.
//!
//! ## Pipeline
//! 1. Pair input files per match by filename key (`pairing`)
//! 2. Load shot events and tracking data (`io`)
//! 3. Align each shot to the closest frame (`align`)
//! 4. Derive the feature row (`enrich`)
//!
//! The enrichment itself is a pure function of in-memory records; identity
//! maps are threaded through as explicit read-only parameters.

pub mod align;
pub mod enrich;
pub mod error;
pub mod geometry;
pub mod identity;
pub mod io;
pub mod models;
pub mod pairing;
pub mod pipeline;

pub use enrich::{enrich_shot, AngleCategory, DistanceCategory, FieldZone6};
pub use error::EnrichError;
pub use identity::IdentityMaps;
pub use models::enriched::{EnrichedShot, ModelFeatureRow};
pub use models::shot::ShotEvent;
pub use models::tracking::{TrackingFrame, TrackingMetadata};
pub use pipeline::process_matches;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
