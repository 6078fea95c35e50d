use std::path::PathBuf;

/// Returns the path to the vaad database based on the operating system
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/vaad/vaad.db`
/// - **Linux**: `~/.local/share/vaad/vaad.db`
/// - **Windows**: `%LOCALAPPDATA%\vaad\vaad.db`
pub fn get_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("vaad").join("vaad.db"))
}

/// Open (or create) the database. Existing files are kept as-is: this
/// database holds the committee's records, not a rebuildable cache.
pub fn initialize_database() -> anyhow::Result<std::sync::Arc<crate::database::Database>> {
    let db_path = get_db_path()?;

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = crate::database::Database::new(&db_path)?;
    Ok(std::sync::Arc::new(db))
}
