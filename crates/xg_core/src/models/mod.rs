//! Data model: parsed input records and the enriched output row.
//!
//! - `shot` - discrete shot events from the event-data provider
//! - `tracking` - dense player-tracking frames and roster metadata
//! - `enriched` - the output feature row consumed downstream

pub mod enriched;
pub mod shot;
pub mod tracking;
