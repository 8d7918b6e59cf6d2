//! Role-based matching: the role catalog, the alias rule and browse results.

pub mod model;
pub mod role;

pub use model::{BrowseProfile, MatchPhase, RoleBrowseQuery};
pub use role::{Role, normalize_role, offering_matches, role_aliases};
