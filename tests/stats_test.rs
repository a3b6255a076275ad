// ==========================================
// Cross Check - statistics integration tests
// ==========================================
// Aggregations over the reconciled store, including the empty-store
// contract and the ranking tie-break.
// ==========================================


use cross_check::{BatchImporter, BatchImporterImpl, SqliteImportRepository, StatsRepository};
use test_helpers::{
    create_test_db, write_csv, CUSTOMERS_HEADER, FINANCIALS_HEADER, ORDERS_HEADER,
};

async fn import_fixture(db_path: &str, customers: &[&str], orders: &[&str], financials: &[&str]) {
    let customers = write_csv(customers);
    let orders = write_csv(orders);
    let financials = write_csv(financials);

    let repo = SqliteImportRepository::new(db_path).expect("open repository");
    let importer = BatchImporterImpl::new(repo);
    importer
        .run_full_import(customers.path(), orders.path(), financials.path())
        .await
        .expect("run import");
}

#[test]
fn test_empty_store_statistics_are_all_zero() {
    let (_db_file, db_path) = create_test_db();

    let repo = StatsRepository::new(&db_path).unwrap();
    let stats = repo.statistics().unwrap();

    assert_eq!(stats.counts.customers, 0);
    assert_eq!(stats.counts.orders, 0);
    assert_eq!(stats.counts.financials, 0);
    assert_eq!(stats.total_order_value, 0.0);
    assert_eq!(stats.total_financial_amount, 0.0);

    let top = repo.top_customers_by_order_value(10).unwrap();
    assert!(top.is_empty());
}

#[tokio::test]
async fn test_counts_and_sums_after_import() {
    let (_db_file, db_path) = create_test_db();

    import_fixture(
        &db_path,
        &[
            CUSTOMERS_HEADER,
            "1001,علی,رضایی,0912,001,تهران",
            "1002,مریم,احمدی,0913,002,شیراز",
        ],
        &[
            ORDERS_HEADER,
            "1001,INV-1,5,1200.0,P01", //  6000
            "1001,INV-2,1,500,P02",    //   500
            "1002,INV-3,2,250,P03",    //   500
        ],
        &[FINANCIALS_HEADER, "1001,1500,L01,", "1002,500,L02,"],
    )
    .await;

    let repo = StatsRepository::new(&db_path).unwrap();
    let stats = repo.statistics().unwrap();

    assert_eq!(stats.counts.customers, 2);
    assert_eq!(stats.counts.orders, 3);
    assert_eq!(stats.counts.financials, 2);
    assert!((stats.total_order_value - 7000.0).abs() < 1e-9);
    assert!((stats.total_financial_amount - 2000.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_top_customers_ranking_descending() {
    let (_db_file, db_path) = create_test_db();

    import_fixture(
        &db_path,
        &[
            CUSTOMERS_HEADER,
            "1001,علی,رضایی,0912,001,تهران",
            "1002,مریم,احمدی,0913,002,شیراز",
            "1003,حسن,کریمی,0914,003,قم",
        ],
        &[
            ORDERS_HEADER,
            "1001,INV-1,1,100,P01",
            "1002,INV-2,1,900,P02",
            "1002,INV-3,1,100,P03",
            // customer 1003 has no orders and must not appear
        ],
        &[FINANCIALS_HEADER],
    )
    .await;

    let repo = StatsRepository::new(&db_path).unwrap();
    let top = repo.top_customers_by_order_value(10).unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].subscription_code, 1002);
    assert!((top[0].total_value - 1000.0).abs() < 1e-9);
    assert_eq!(top[0].surname.as_deref(), Some("احمدی"));
    assert_eq!(top[1].subscription_code, 1001);
}

#[tokio::test]
async fn test_top_customers_tie_breaks_on_ascending_code() {
    let (_db_file, db_path) = create_test_db();

    import_fixture(
        &db_path,
        &[
            CUSTOMERS_HEADER,
            "1002,مریم,احمدی,0913,002,شیراز",
            "1001,علی,رضایی,0912,001,تهران",
        ],
        &[
            ORDERS_HEADER,
            "1002,INV-1,1,500,P01",
            "1001,INV-2,1,500,P02",
        ],
        &[FINANCIALS_HEADER],
    )
    .await;

    let repo = StatsRepository::new(&db_path).unwrap();
    let top = repo.top_customers_by_order_value(10).unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].subscription_code, 1001);
    assert_eq!(top[1].subscription_code, 1002);
}

#[tokio::test]
async fn test_top_customers_respects_limit() {
    let (_db_file, db_path) = create_test_db();

    import_fixture(
        &db_path,
        &[
            CUSTOMERS_HEADER,
            "1001,علی,رضایی,0912,001,تهران",
            "1002,مریم,احمدی,0913,002,شیراز",
            "1003,حسن,کریمی,0914,003,قم",
        ],
        &[
            ORDERS_HEADER,
            "1001,INV-1,1,300,P01",
            "1002,INV-2,1,200,P02",
            "1003,INV-3,1,100,P03",
        ],
        &[FINANCIALS_HEADER],
    )
    .await;

    let repo = StatsRepository::new(&db_path).unwrap();
    let top = repo.top_customers_by_order_value(2).unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].subscription_code, 1001);
    assert_eq!(top[1].subscription_code, 1002);
}

#[tokio::test]
async fn test_search_customers_by_name_and_mobile() {
    let (_db_file, db_path) = create_test_db();

    import_fixture(
        &db_path,
        &[
            CUSTOMERS_HEADER,
            "1001,علی,رضایی,09121111111,001,تهران",
            "1002,مریم,احمدی,09122222222,002,شیراز",
        ],
        &[ORDERS_HEADER],
        &[FINANCIALS_HEADER],
    )
    .await;

    let repo = StatsRepository::new(&db_path).unwrap();

    let by_name = repo.search_customers("علی", 50).unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].subscription_code, 1001);

    let by_mobile = repo.search_customers("0912222", 50).unwrap();
    assert_eq!(by_mobile.len(), 1);
    assert_eq!(by_mobile[0].subscription_code, 1002);

    let none = repo.search_customers("ناموجود", 50).unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_listings_respect_limits() {
    let (_db_file, db_path) = create_test_db();

    import_fixture(
        &db_path,
        &[
            CUSTOMERS_HEADER,
            "1001,علی,رضایی,0912,001,تهران",
            "1002,مریم,احمدی,0913,002,شیراز",
            "1003,حسن,کریمی,0914,003,قم",
        ],
        &[ORDERS_HEADER, "1001,INV-1,1,100,P01", "1002,INV-2,2,50,P02"],
        &[FINANCIALS_HEADER, "1001,100,L01,"],
    )
    .await;

    let repo = StatsRepository::new(&db_path).unwrap();

    assert_eq!(repo.list_customers(2).unwrap().len(), 2);
    assert_eq!(repo.list_orders(10).unwrap().len(), 2);
    assert_eq!(repo.list_financials(10).unwrap().len(), 1);

    let orders = repo.list_orders(10).unwrap();
    assert_eq!(orders[0].invoice_id.as_deref(), Some("INV-1"));
    assert!(orders[0].id.is_some());
}
