// ==========================================
// Cross Check - store schema
// ==========================================
// Three entity tables plus the rebuild-surviving import_run log.
//
// orders.subscription_code and financials.subscription_code carry no
// FOREIGN KEY clause: the reference is weak by contract (sources may
// be imported independently), and connections run with
// PRAGMA foreign_keys = ON, so a declared constraint would reject
// rows the pipeline must accept.
// ==========================================

use rusqlite::Connection;

const CREATE_CUSTOMERS: &str = r#"
CREATE TABLE customers (
    subscription_code  INTEGER PRIMARY KEY,
    name               TEXT,
    surname            TEXT,
    father_name        TEXT,
    certificate_number TEXT,
    national_id        TEXT,
    second_name        TEXT,
    phone1             TEXT,
    phone2             TEXT,
    phone3             TEXT,
    mobile             TEXT,
    fax                TEXT,
    economic_code      TEXT,
    address            TEXT,
    postal_code        TEXT,
    email              TEXT,
    province           TEXT,
    city               TEXT
)
"#;

const CREATE_ORDERS: &str = r#"
CREATE TABLE orders (
    id                     INTEGER PRIMARY KEY AUTOINCREMENT,
    invoice_id             TEXT,
    invoice_date           TEXT,
    subscription_code      INTEGER,
    person_name            TEXT,
    description            TEXT,
    settlement_type        TEXT,
    settlement_date        TEXT,
    expiry_date            TEXT,
    person_subject_code    TEXT,
    operation_subject_code TEXT,
    invoice_nature_code    TEXT,
    marketer_code          TEXT,
    amount_discount        REAL,
    total_tax_percent      REAL,
    total_toll_percent     REAL,
    warehouse_code         TEXT,
    warehouse_name         TEXT,
    product_code           TEXT,
    product_name           TEXT,
    item_description       TEXT,
    special_coef1          REAL,
    special_coef2          REAL,
    special_coef3          REAL,
    quantity               INTEGER NOT NULL DEFAULT 0,
    secondary_quantity     REAL,
    price                  REAL NOT NULL DEFAULT 0,
    price_foreign          REAL,
    discount_percent       REAL,
    tax_percent            REAL,
    toll_percent           REAL,
    sending_nature_code    TEXT,
    sending_date           TEXT,
    total_value            REAL NOT NULL DEFAULT 0
)
"#;

const CREATE_FINANCIALS: &str = r#"
CREATE TABLE financials (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    subscription_code INTEGER,
    amount            REAL NOT NULL DEFAULT 0,
    loan_code         TEXT,
    description       TEXT
)
"#;

const CREATE_INDEXES: &str = r#"
CREATE INDEX idx_orders_subscription ON orders(subscription_code);
CREATE INDEX idx_financials_subscription ON financials(subscription_code);
"#;

const CREATE_IMPORT_RUN: &str = r#"
CREATE TABLE IF NOT EXISTS import_run (
    run_id              TEXT PRIMARY KEY,
    customers_imported  INTEGER NOT NULL,
    orders_imported     INTEGER NOT NULL,
    financials_imported INTEGER NOT NULL,
    error_count         INTEGER NOT NULL,
    errors_json         TEXT NOT NULL,
    started_at          TEXT NOT NULL,
    completed_at        TEXT,
    elapsed_ms          INTEGER
)
"#;

/// Drop and recreate the three entity tables. Runs once at the start
/// of every import; import_run is kept as a diagnostic trail.
pub fn recreate_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "DROP TABLE IF EXISTS orders;
         DROP TABLE IF EXISTS financials;
         DROP TABLE IF EXISTS customers;",
    )?;
    conn.execute_batch(CREATE_CUSTOMERS)?;
    conn.execute_batch(CREATE_ORDERS)?;
    conn.execute_batch(CREATE_FINANCIALS)?;
    conn.execute_batch(CREATE_INDEXES)?;
    conn.execute_batch(CREATE_IMPORT_RUN)?;
    Ok(())
}

/// Create any missing tables without touching existing data. Used by
/// read-only entry points so statistics work before the first import.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    let has_customers: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='customers'",
        [],
        |row| row.get(0),
    )?;

    if has_customers == 0 {
        recreate_schema(conn)?;
    } else {
        conn.execute_batch(CREATE_IMPORT_RUN)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recreate_schema_empties_entity_tables() {
        let conn = Connection::open_in_memory().unwrap();
        recreate_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO financials (subscription_code, amount) VALUES (1, 10.0)",
            [],
        )
        .unwrap();

        recreate_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM financials", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_recreate_schema_keeps_import_run() {
        let conn = Connection::open_in_memory().unwrap();
        recreate_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO import_run (run_id, customers_imported, orders_imported,
             financials_imported, error_count, errors_json, started_at)
             VALUES ('r1', 1, 2, 3, 0, '[]', '2026-01-01T00:00:00Z')",
            [],
        )
        .unwrap();

        recreate_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM import_run", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
