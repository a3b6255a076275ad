// ==========================================
// Cross Check - import pipeline integration tests
// ==========================================
// Full rebuild runs over CSV fixtures: persistence policies,
// derivation, row-level failure handling, report contract.
// ==========================================


use cross_check::{BatchImporter, BatchImporterImpl, ImportReport, SqliteImportRepository};
use std::path::Path;
use test_helpers::{
    create_test_db, write_csv, CUSTOMERS_HEADER, FINANCIALS_HEADER, ORDERS_HEADER,
};

async fn run_import(
    db_path: &str,
    customers: &Path,
    orders: &Path,
    financials: &Path,
) -> ImportReport {
    let repo = SqliteImportRepository::new(db_path).expect("open repository");
    let importer = BatchImporterImpl::new(repo);
    importer
        .run_full_import(customers, orders, financials)
        .await
        .expect("run import")
}

fn query_i64(db_path: &str, sql: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).unwrap();
    conn.query_row(sql, [], |row| row.get(0)).unwrap()
}

fn query_text(db_path: &str, sql: &str) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).unwrap();
    conn.query_row(sql, [], |row| row.get(0)).unwrap()
}

fn query_f64(db_path: &str, sql: &str) -> f64 {
    let conn = rusqlite::Connection::open(db_path).unwrap();
    conn.query_row(sql, [], |row| row.get(0)).unwrap()
}

#[tokio::test]
async fn test_full_import_happy_path() {
    cross_check::logging::init_test();
    let (_db_file, db_path) = create_test_db();

    let customers = write_csv(&[
        CUSTOMERS_HEADER,
        "1001,علی,رضایی,09121111111,0012345678,تهران",
        "1002,مریم,احمدی,09122222222,0023456789,شیراز",
    ]);
    let orders = write_csv(&[
        ORDERS_HEADER,
        "1001,INV-1,5,1200.0,P01",
        "1002,INV-2,2,300,P02",
    ]);
    let financials = write_csv(&[FINANCIALS_HEADER, "1001,150000,L01,قسط اول"]);

    let report = run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    assert_eq!(report.customers_imported, 2);
    assert_eq!(report.orders_imported, 2);
    assert_eq!(report.financials_imported, 1);
    assert!(report.errors.is_empty());
    assert!(report.completed_at.is_some());
}

#[tokio::test]
async fn test_duplicate_customer_key_last_write_wins() {
    let (_db_file, db_path) = create_test_db();

    // two rows share code 1001; the later surname must win
    let customers = write_csv(&[
        CUSTOMERS_HEADER,
        "1001,علی,A,0912,001,تهران",
        "1002,رضا,C,0913,002,قم",
        "1001,علی,B,0912,001,تهران",
    ]);
    let orders = write_csv(&[ORDERS_HEADER]);
    let financials = write_csv(&[FINANCIALS_HEADER]);

    let report = run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    // all three rows are accepted and written; merge keeps one row per key
    assert_eq!(report.customers_imported, 3);
    assert!(report.errors.is_empty());

    assert_eq!(
        query_i64(&db_path, "SELECT COUNT(*) FROM customers WHERE subscription_code = 1001"),
        1
    );
    assert_eq!(
        query_text(
            &db_path,
            "SELECT surname FROM customers WHERE subscription_code = 1001"
        )
        .as_deref(),
        Some("B")
    );
}

#[tokio::test]
async fn test_order_total_value_is_derived() {
    let (_db_file, db_path) = create_test_db();

    let customers = write_csv(&[CUSTOMERS_HEADER, "1001,علی,رضایی,0912,001,تهران"]);
    let orders = write_csv(&[ORDERS_HEADER, "1001,INV-1,5,1200.0,P01"]);
    let financials = write_csv(&[FINANCIALS_HEADER]);

    run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    let total = query_f64(&db_path, "SELECT total_value FROM orders LIMIT 1");
    assert!((total - 6000.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_order_with_absent_quantity_gets_zero_total() {
    let (_db_file, db_path) = create_test_db();

    let customers = write_csv(&[CUSTOMERS_HEADER]);
    // quantity column left blank
    let orders = write_csv(&[ORDERS_HEADER, "1001,INV-1,,1200.0,P01"]);
    let financials = write_csv(&[FINANCIALS_HEADER]);

    let report = run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    assert_eq!(report.orders_imported, 1);
    let total = query_f64(&db_path, "SELECT total_value FROM orders LIMIT 1");
    assert_eq!(total, 0.0);
    assert_eq!(query_i64(&db_path, "SELECT quantity FROM orders LIMIT 1"), 0);
}

#[tokio::test]
async fn test_missing_key_row_is_dropped_and_reported() {
    let (_db_file, db_path) = create_test_db();

    let customers = write_csv(&[
        CUSTOMERS_HEADER,
        "1001,علی,رضایی,0912,001,تهران",
        ",بدون,کد,0913,002,قم",
    ]);
    let orders = write_csv(&[ORDERS_HEADER]);
    let financials = write_csv(&[FINANCIALS_HEADER]);

    let report = run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    assert_eq!(report.customers_imported, 1);
    assert_eq!(report.errors.len(), 1);
    // the dropped row is sheet row 3 (header is row 1)
    assert!(report.errors[0].contains("row 3"), "{:?}", report.errors);
    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM customers"), 1);
}

#[tokio::test]
async fn test_zero_key_is_rejected_like_missing() {
    let (_db_file, db_path) = create_test_db();

    let customers = write_csv(&[CUSTOMERS_HEADER, "0,علی,رضایی,0912,001,تهران"]);
    let orders = write_csv(&[ORDERS_HEADER]);
    let financials = write_csv(&[FINANCIALS_HEADER]);

    let report = run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    assert_eq!(report.customers_imported, 0);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM customers"), 0);
}

#[tokio::test]
async fn test_coercion_error_drops_only_that_row() {
    let (_db_file, db_path) = create_test_db();

    let customers = write_csv(&[CUSTOMERS_HEADER]);
    let orders = write_csv(&[
        ORDERS_HEADER,
        "1001,INV-1,5,1200.0,P01",
        "1001,INV-2,abc,10.0,P02",
        "1001,INV-3,1,50,P03",
    ]);
    let financials = write_csv(&[FINANCIALS_HEADER]);

    let report = run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    assert_eq!(report.orders_imported, 2);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("row 3"), "{:?}", report.errors);
}

#[tokio::test]
async fn test_error_list_preserves_row_order() {
    let (_db_file, db_path) = create_test_db();

    let customers = write_csv(&[
        CUSTOMERS_HEADER,
        "نامعتبر,x,x,0912,001,تهران", // row 2: bad key type
        "1001,علی,رضایی,0912,001,تهران",
        ",x,x,0912,001,تهران",        // row 4: missing key
        "xyz,x,x,0912,001,تهران",     // row 5: bad key type
    ]);
    let orders = write_csv(&[ORDERS_HEADER]);
    let financials = write_csv(&[FINANCIALS_HEADER]);

    let report = run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    assert_eq!(report.customers_imported, 1);
    assert_eq!(report.errors.len(), 3);
    assert!(report.errors[0].contains("row 2"), "{:?}", report.errors);
    assert!(report.errors[1].contains("row 4"), "{:?}", report.errors);
    assert!(report.errors[2].contains("row 5"), "{:?}", report.errors);
}

#[tokio::test]
async fn test_unreadable_source_does_not_abort_other_sources() {
    let (_db_file, db_path) = create_test_db();

    let customers = write_csv(&[CUSTOMERS_HEADER, "1001,علی,رضایی,0912,001,تهران"]);
    let financials = write_csv(&[FINANCIALS_HEADER, "1001,5000,L01,"]);

    let report = {
        let repo = SqliteImportRepository::new(&db_path).unwrap();
        let importer = BatchImporterImpl::new(repo);
        importer
            .run_full_import(
                customers.path(),
                Path::new("no_such_orders.csv"),
                financials.path(),
            )
            .await
            .unwrap()
    };

    assert_eq!(report.customers_imported, 1);
    assert_eq!(report.orders_imported, 0);
    assert_eq!(report.financials_imported, 1);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("orders:"), "{:?}", report.errors);
}

#[tokio::test]
async fn test_rebuild_does_not_accumulate_append_only_rows() {
    let (_db_file, db_path) = create_test_db();

    let customers = write_csv(&[CUSTOMERS_HEADER, "1001,علی,رضایی,0912,001,تهران"]);
    let orders = write_csv(&[ORDERS_HEADER, "1001,INV-1,5,1200.0,P01"]);
    let financials = write_csv(&[FINANCIALS_HEADER, "1001,5000,L01,"]);

    run_import(&db_path, customers.path(), orders.path(), financials.path()).await;
    run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM customers"), 1);
    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM orders"), 1);
    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM financials"), 1);
}

#[tokio::test]
async fn test_unknown_customer_reference_is_accepted() {
    let (_db_file, db_path) = create_test_db();

    // no customer 9999 exists; the weak reference must not reject the rows
    let customers = write_csv(&[CUSTOMERS_HEADER, "1001,علی,رضایی,0912,001,تهران"]);
    let orders = write_csv(&[ORDERS_HEADER, "9999,INV-1,1,10,P01"]);
    let financials = write_csv(&[FINANCIALS_HEADER, "9999,5000,L01,"]);

    let report = run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    assert_eq!(report.orders_imported, 1);
    assert_eq!(report.financials_imported, 1);
    assert!(report.errors.is_empty());
}

#[tokio::test]
async fn test_import_run_log_survives_rebuilds() {
    let (_db_file, db_path) = create_test_db();

    let customers = write_csv(&[CUSTOMERS_HEADER, "1001,علی,رضایی,0912,001,تهران"]);
    let orders = write_csv(&[ORDERS_HEADER]);
    let financials = write_csv(&[FINANCIALS_HEADER]);

    run_import(&db_path, customers.path(), orders.path(), financials.path()).await;
    run_import(&db_path, customers.path(), orders.path(), financials.path()).await;

    assert_eq!(query_i64(&db_path, "SELECT COUNT(*) FROM import_run"), 2);
    assert_eq!(
        query_i64(
            &db_path,
            "SELECT COUNT(*) FROM import_run WHERE customers_imported = 1"
        ),
        2
    );
}
