use rusqlite::Connection;

/// Run all database migrations.
///
/// The whole application state is persisted as serialized JSON documents
/// under fixed string keys, overwritten wholesale on every save. One
/// table is all the schema there is.
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS documents (
            key VARCHAR PRIMARY KEY,
            value VARCHAR NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
