// ==========================================
// Cross Check - SQLite connection setup
// ==========================================
// Goals:
// - one place for Connection::open PRAGMA behavior, so every module
//   gets the same connection semantics
// - uniform busy_timeout to absorb the occasional concurrent reader
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the uniform PRAGMA set to a connection
///
/// foreign_keys and busy_timeout are per-connection settings, so this
/// must run for every connection we open. Note that the three entity
/// tables deliberately declare no FOREIGN KEY constraints: the
/// subscription-code references are weak by contract, and sources may
/// be imported independently of each other.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the uniform configuration applied
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_style_path() {
        let conn = open_sqlite_connection(":memory:").unwrap();
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }
}
