//! Yahoo Fantasy Sports API access: authorization, fetching and flattening.

pub mod http;
pub mod oauth;
pub mod pager;
pub mod types;
pub mod xml;

pub use http::{PlayersQuery, YahooSession, PAGE_SIZE};
pub use types::{BearerToken, StatDefinition, StatSchema};
