/// Table rendering for `list`

use crate::db::ProjectRecord;

/// Narrowest the name column gets, even with short names
const MIN_NAME_WIDTH: usize = 10;

/// Render projects as a left-aligned `Name`/`Directory` table.
///
/// The header is followed by a blank line, then one row per project.
pub fn format_table(projects: &[ProjectRecord]) -> String {
    let width = projects
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let mut out = format!("{:<width$} {}\n\n", "Name", "Directory", width = width);
    for project in projects {
        out.push_str(&format!(
            "{:<width$} {}\n",
            project.name,
            project.directory,
            width = width
        ));
    }
    out
}
