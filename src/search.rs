//! Stepped PPGA frontier search and path reconstruction.
//!
//! The search is an explicit cursor: every call to
//! [`PpgaSearch::step`] performs one frontier expansion, so a caller can
//! animate or inspect the search between iterations. Once the cursor is done
//! its connection map is handed to [`rebuild_path`].

mod path;
mod ppga;

pub use path::{find_path, rebuild_path};
pub use ppga::{PpgaSearch, SearchState, Step};
