use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// Tenants, payments, expenses and activities, saved as one document
pub const TENANT_DATA_KEY: &str = "tenant_data";
/// Building settings, saved separately
pub const SETTINGS_KEY: &str = "settings_data";
/// Most recent backup snapshot
pub const BACKUP_KEY: &str = "backup_data";
/// RFC 3339 timestamp of the last backup, for the daily auto-backup check
pub const LAST_BACKUP_KEY: &str = "last_backup_date";

pub fn read_document(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM documents WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    Ok(value)
}

pub fn write_document(conn: &Connection, key: &str, value: &str) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    conn.execute(
        "INSERT INTO documents (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let db = Database::new(&dir.path().join("test.db")).unwrap();
        let conn = db.connection.lock().unwrap();

        assert!(read_document(&conn, TENANT_DATA_KEY).unwrap().is_none());

        write_document(&conn, TENANT_DATA_KEY, "{\"tenants\":[]}").unwrap();
        assert_eq!(
            read_document(&conn, TENANT_DATA_KEY).unwrap().as_deref(),
            Some("{\"tenants\":[]}")
        );

        // Overwrite wholesale
        write_document(&conn, TENANT_DATA_KEY, "{}").unwrap();
        assert_eq!(
            read_document(&conn, TENANT_DATA_KEY).unwrap().as_deref(),
            Some("{}")
        );
    }
}
