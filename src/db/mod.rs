/// Database module for proj
///
/// The embedded SQLite backend, using sqlx.
/// The database is opened per operation and closed after.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::Database;
pub use models::*;
