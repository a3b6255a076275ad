// ==========================================
// Cross Check - import repository (SQLite)
// ==========================================
// Executes the persistence policies against the store:
// - customers: merge-by-key upsert
// - orders / financials: append with fresh identity
// One transaction per commit_* call.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::report::ImportReport;
use crate::domain::{Customer, FinancialRecord, OrderLine};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::import_repo::ImportRepository;
use crate::repository::schema;
use async_trait::async_trait;
use rusqlite::{params, Connection, Transaction};
use std::sync::{Arc, Mutex};

pub struct SqliteImportRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteImportRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Share an already-open connection (tests, CLI wiring).
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn upsert_customers_tx(tx: &Transaction, customers: &[Customer]) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO customers (
                subscription_code, name, surname, father_name,
                certificate_number, national_id, second_name,
                phone1, phone2, phone3, mobile, fax,
                economic_code, address, postal_code, email, province, city
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                ?13, ?14, ?15, ?16, ?17, ?18
            )
            ON CONFLICT(subscription_code) DO UPDATE SET
                name = excluded.name,
                surname = excluded.surname,
                father_name = excluded.father_name,
                certificate_number = excluded.certificate_number,
                national_id = excluded.national_id,
                second_name = excluded.second_name,
                phone1 = excluded.phone1,
                phone2 = excluded.phone2,
                phone3 = excluded.phone3,
                mobile = excluded.mobile,
                fax = excluded.fax,
                economic_code = excluded.economic_code,
                address = excluded.address,
                postal_code = excluded.postal_code,
                email = excluded.email,
                province = excluded.province,
                city = excluded.city
            "#,
        )?;

        let mut count = 0;
        for customer in customers {
            stmt.execute(params![
                customer.subscription_code,
                customer.name,
                customer.surname,
                customer.father_name,
                customer.certificate_number,
                customer.national_id,
                customer.second_name,
                customer.phone1,
                customer.phone2,
                customer.phone3,
                customer.mobile,
                customer.fax,
                customer.economic_code,
                customer.address,
                customer.postal_code,
                customer.email,
                customer.province,
                customer.city,
            ])?;
            count += 1;
        }

        Ok(count)
    }

    fn insert_orders_tx(tx: &Transaction, orders: &[OrderLine]) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO orders (
                invoice_id, invoice_date, subscription_code, person_name,
                description, settlement_type, settlement_date, expiry_date,
                person_subject_code, operation_subject_code,
                invoice_nature_code, marketer_code, amount_discount,
                total_tax_percent, total_toll_percent, warehouse_code,
                warehouse_name, product_code, product_name, item_description,
                special_coef1, special_coef2, special_coef3, quantity,
                secondary_quantity, price, price_foreign, discount_percent,
                tax_percent, toll_percent, sending_nature_code, sending_date,
                total_value
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24,
                ?25, ?26, ?27, ?28, ?29, ?30, ?31, ?32, ?33
            )
            "#,
        )?;

        let mut count = 0;
        for order in orders {
            stmt.execute(params![
                order.invoice_id,
                order.invoice_date,
                order.subscription_code,
                order.person_name,
                order.description,
                order.settlement_type,
                order.settlement_date,
                order.expiry_date,
                order.person_subject_code,
                order.operation_subject_code,
                order.invoice_nature_code,
                order.marketer_code,
                order.amount_discount,
                order.total_tax_percent,
                order.total_toll_percent,
                order.warehouse_code,
                order.warehouse_name,
                order.product_code,
                order.product_name,
                order.item_description,
                order.special_coef1,
                order.special_coef2,
                order.special_coef3,
                order.quantity,
                order.secondary_quantity,
                order.price,
                order.price_foreign,
                order.discount_percent,
                order.tax_percent,
                order.toll_percent,
                order.sending_nature_code,
                order.sending_date,
                order.total_value,
            ])?;
            count += 1;
        }

        Ok(count)
    }

    fn insert_financials_tx(
        tx: &Transaction,
        records: &[FinancialRecord],
    ) -> RepositoryResult<usize> {
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO financials (subscription_code, amount, loan_code, description)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )?;

        let mut count = 0;
        for record in records {
            stmt.execute(params![
                record.subscription_code,
                record.amount,
                record.loan_code,
                record.description,
            ])?;
            count += 1;
        }

        Ok(count)
    }
}

#[async_trait]
impl ImportRepository for SqliteImportRepository {
    async fn recreate_schema(&self) -> RepositoryResult<()> {
        let conn = self.lock()?;
        schema::recreate_schema(&conn)
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))
    }

    async fn commit_customers(&self, customers: Vec<Customer>) -> RepositoryResult<usize> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let count = Self::upsert_customers_tx(&tx, &customers)?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    async fn commit_orders(&self, orders: Vec<OrderLine>) -> RepositoryResult<usize> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let count = Self::insert_orders_tx(&tx, &orders)?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    async fn commit_financials(&self, records: Vec<FinancialRecord>) -> RepositoryResult<usize> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let count = Self::insert_financials_tx(&tx, &records)?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    async fn record_run(&self, report: &ImportReport) -> RepositoryResult<()> {
        let errors_json = serde_json::to_string(&report.errors)
            .map_err(|e| RepositoryError::InternalError(e.to_string()))?;

        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO import_run (
                run_id, customers_imported, orders_imported,
                financials_imported, error_count, errors_json,
                started_at, completed_at, elapsed_ms
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                report.run_id,
                report.customers_imported as i64,
                report.orders_imported as i64,
                report.financials_imported as i64,
                report.errors.len() as i64,
                errors_json,
                report.started_at.to_rfc3339(),
                report.completed_at.map(|t| t.to_rfc3339()),
                report.elapsed_ms,
            ],
        )?;

        Ok(())
    }
}
