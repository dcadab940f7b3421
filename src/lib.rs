/// proj library
///
/// Bookmarks directories under short names and looks them up again.

pub mod config;
pub mod core;
pub mod db;
pub mod error;

// Re-exports for convenience
pub use config::{Backend, Config};
pub use crate::core::ProjectStore;
pub use db::ProjectRecord;
pub use error::{ProjError, Result};
