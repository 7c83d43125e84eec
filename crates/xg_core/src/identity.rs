//! Identity resolution across the two id namespaces.
//!
//! Shot events and tracking frames identify the same real-world players and
//! teams with unrelated ids. The mapping tables are opaque, loaded once, and
//! passed to the engine as explicit read-only parameters. Lookups are exact;
//! nothing here fabricates or fuzzy-matches an id.

use std::collections::HashMap;

/// Event-space string id to tracking-space numeric id, for players and
/// teams.
#[derive(Debug, Clone, Default)]
pub struct IdentityMaps {
    players: HashMap<String, i64>,
    teams: HashMap<String, i64>,
}

impl IdentityMaps {
    pub fn new(players: HashMap<String, i64>, teams: HashMap<String, i64>) -> Self {
        Self { players, teams }
    }

    /// Tracking id for an event-space player id, if mapped.
    pub fn resolve_player(&self, event_id: &str) -> Option<i64> {
        self.players.get(event_id).copied()
    }

    /// Tracking id for an event-space team id, if mapped.
    pub fn resolve_team(&self, event_id: &str) -> Option<i64> {
        self.teams.get(event_id).copied()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}
