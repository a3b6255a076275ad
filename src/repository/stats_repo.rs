// ==========================================
// Cross Check - statistics repository
// ==========================================
// Read-only aggregate and lookup queries for presentation layers.
// All queries tolerate an empty store: zero counts, zero sums,
// empty listings.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::stats::{CustomerOrderTotal, Statistics, StoreCounts};
use crate::domain::{Customer, FinancialRecord, OrderLine};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::schema;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

pub struct StatsRepository {
    conn: Arc<Mutex<Connection>>,
}

impl StatsRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;

        // read-only entry points must work before the first import
        schema::ensure_schema(&conn)
            .map_err(|e| RepositoryError::DatabaseQueryError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Share an already-open connection (tests, CLI wiring).
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            schema::ensure_schema(&guard)
                .map_err(|e| RepositoryError::DatabaseQueryError(e.to_string()))?;
        }
        Ok(Self { conn })
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Total row counts per entity kind.
    pub fn counts(&self) -> RepositoryResult<StoreCounts> {
        let conn = self.lock()?;
        let customers: i64 =
            conn.query_row("SELECT COUNT(*) FROM customers", [], |row| row.get(0))?;
        let orders: i64 = conn.query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))?;
        let financials: i64 =
            conn.query_row("SELECT COUNT(*) FROM financials", [], |row| row.get(0))?;

        Ok(StoreCounts {
            customers,
            orders,
            financials,
        })
    }

    /// Sum of total_value across all order lines (0 on empty store).
    pub fn total_order_value(&self) -> RepositoryResult<f64> {
        let conn = self.lock()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(total_value), 0) FROM orders",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Sum of amount across all financial records (0 on empty store).
    pub fn total_financial_amount(&self) -> RepositoryResult<f64> {
        let conn = self.lock()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM financials",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Combined counts-plus-sums snapshot.
    pub fn statistics(&self) -> RepositoryResult<Statistics> {
        Ok(Statistics {
            counts: self.counts()?,
            total_order_value: self.total_order_value()?,
            total_financial_amount: self.total_financial_amount()?,
        })
    }

    /// Customers ranked by their summed order value, descending,
    /// truncated to `limit`. Only customers with at least one order
    /// line appear. Ties break on ascending subscription code.
    pub fn top_customers_by_order_value(
        &self,
        limit: usize,
    ) -> RepositoryResult<Vec<CustomerOrderTotal>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT c.subscription_code, c.name, c.surname,
                   SUM(o.total_value) AS total
            FROM customers c
            JOIN orders o ON o.subscription_code = c.subscription_code
            GROUP BY c.subscription_code
            ORDER BY total DESC, c.subscription_code ASC
            LIMIT ?1
            "#,
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(CustomerOrderTotal {
                subscription_code: row.get(0)?,
                name: row.get(1)?,
                surname: row.get(2)?,
                total_value: row.get(3)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Substring search over name, surname, mobile and national id.
    pub fn search_customers(&self, term: &str, limit: usize) -> RepositoryResult<Vec<Customer>> {
        let pattern = format!("%{}%", term.trim());

        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT subscription_code, name, surname, father_name,
                   certificate_number, national_id, second_name,
                   phone1, phone2, phone3, mobile, fax,
                   economic_code, address, postal_code, email, province, city
            FROM customers
            WHERE name LIKE ?1 OR surname LIKE ?1
               OR mobile LIKE ?1 OR national_id LIKE ?1
            ORDER BY subscription_code ASC
            LIMIT ?2
            "#,
        )?;

        let rows = stmt.query_map(params![pattern, limit as i64], Self::map_customer)?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// First `limit` customers by subscription code.
    pub fn list_customers(&self, limit: usize) -> RepositoryResult<Vec<Customer>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT subscription_code, name, surname, father_name,
                   certificate_number, national_id, second_name,
                   phone1, phone2, phone3, mobile, fax,
                   economic_code, address, postal_code, email, province, city
            FROM customers
            ORDER BY subscription_code ASC
            LIMIT ?1
            "#,
        )?;

        let rows = stmt.query_map(params![limit as i64], Self::map_customer)?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// First `limit` order lines in insertion order.
    pub fn list_orders(&self, limit: usize) -> RepositoryResult<Vec<OrderLine>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, invoice_id, invoice_date, subscription_code, person_name,
                   description, settlement_type, settlement_date, expiry_date,
                   person_subject_code, operation_subject_code,
                   invoice_nature_code, marketer_code, amount_discount,
                   total_tax_percent, total_toll_percent, warehouse_code,
                   warehouse_name, product_code, product_name, item_description,
                   special_coef1, special_coef2, special_coef3, quantity,
                   secondary_quantity, price, price_foreign, discount_percent,
                   tax_percent, toll_percent, sending_nature_code, sending_date,
                   total_value
            FROM orders
            ORDER BY id ASC
            LIMIT ?1
            "#,
        )?;

        let rows = stmt.query_map(params![limit as i64], Self::map_order)?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// First `limit` financial records in insertion order.
    pub fn list_financials(&self, limit: usize) -> RepositoryResult<Vec<FinancialRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, subscription_code, amount, loan_code, description
            FROM financials
            ORDER BY id ASC
            LIMIT ?1
            "#,
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(FinancialRecord {
                id: row.get(0)?,
                subscription_code: row.get(1)?,
                amount: row.get(2)?,
                loan_code: row.get(3)?,
                description: row.get(4)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn map_customer(row: &Row<'_>) -> rusqlite::Result<Customer> {
        Ok(Customer {
            subscription_code: row.get(0)?,
            name: row.get(1)?,
            surname: row.get(2)?,
            father_name: row.get(3)?,
            certificate_number: row.get(4)?,
            national_id: row.get(5)?,
            second_name: row.get(6)?,
            phone1: row.get(7)?,
            phone2: row.get(8)?,
            phone3: row.get(9)?,
            mobile: row.get(10)?,
            fax: row.get(11)?,
            economic_code: row.get(12)?,
            address: row.get(13)?,
            postal_code: row.get(14)?,
            email: row.get(15)?,
            province: row.get(16)?,
            city: row.get(17)?,
        })
    }

    fn map_order(row: &Row<'_>) -> rusqlite::Result<OrderLine> {
        Ok(OrderLine {
            id: row.get(0)?,
            invoice_id: row.get(1)?,
            invoice_date: row.get(2)?,
            subscription_code: row.get(3)?,
            person_name: row.get(4)?,
            description: row.get(5)?,
            settlement_type: row.get(6)?,
            settlement_date: row.get(7)?,
            expiry_date: row.get(8)?,
            person_subject_code: row.get(9)?,
            operation_subject_code: row.get(10)?,
            invoice_nature_code: row.get(11)?,
            marketer_code: row.get(12)?,
            amount_discount: row.get(13)?,
            total_tax_percent: row.get(14)?,
            total_toll_percent: row.get(15)?,
            warehouse_code: row.get(16)?,
            warehouse_name: row.get(17)?,
            product_code: row.get(18)?,
            product_name: row.get(19)?,
            item_description: row.get(20)?,
            special_coef1: row.get(21)?,
            special_coef2: row.get(22)?,
            special_coef3: row.get(23)?,
            quantity: row.get(24)?,
            secondary_quantity: row.get(25)?,
            price: row.get(26)?,
            price_foreign: row.get(27)?,
            discount_percent: row.get(28)?,
            tax_percent: row.get(29)?,
            toll_percent: row.get(30)?,
            sending_nature_code: row.get(31)?,
            sending_date: row.get(32)?,
            total_value: row.get(33)?,
        })
    }
}
