/// Maintenance commands
use crate::{error::Result, guard::AdminSession, state::AppState};
use vidshelf_core::Catalog;

/// `vidshelf repair`
///
/// Moves videos that point at a deleted playlist back to the unassigned
/// view. Returns how many were moved.
pub fn repair(app_state: &AppState, _admin: AdminSession) -> Result<usize> {
    Ok(app_state.catalog.prune_dangling_references()?)
}
