//! Prospect Registry - filtering over a loaded big board
//!
//! Holds one board's prospects and applies role, league, tier and free-text
//! predicates to them.

pub mod filter;
pub mod registry;
pub mod teams;
pub mod types;

pub use filter::{filter, FilterState};
pub use registry::ProspectRegistry;
pub use teams::team_name;
pub use types::{parse_role_filter, RegistryError, Role};
