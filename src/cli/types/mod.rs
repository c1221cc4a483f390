//! Type-safe wrappers for Yahoo Fantasy identifiers.

pub mod ids;
pub mod time;

pub use ids::LeagueKey;
pub use time::Season;
