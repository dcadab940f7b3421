/// Core functionality modules
///
/// The project store facade, the JSON file backend and
/// the table renderer used by `list`.

pub mod json_store;
pub mod project_store;
pub mod table;

pub use json_store::JsonStore;
pub use project_store::ProjectStore;
pub use table::format_table;
