// ==========================================
// Cross Check - import repository trait
// ==========================================
// Storage operations of one import run. Each commit_* method is the
// persistence-policy engine for its entity kind and runs as a single
// transaction, giving the one-commit-per-source guarantee.
// ==========================================

use crate::domain::report::ImportReport;
use crate::domain::{Customer, FinancialRecord, OrderLine};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

#[async_trait]
pub trait ImportRepository: Send + Sync {
    /// Drop and recreate the three entity tables (full rebuild).
    async fn recreate_schema(&self) -> RepositoryResult<()>;

    /// Merge-by-key: upsert every customer on subscription_code in
    /// one transaction. Re-importing a code overwrites all non-key
    /// attributes; no duplicates accumulate. Returns the number of
    /// rows written.
    async fn commit_customers(&self, customers: Vec<Customer>) -> RepositoryResult<usize>;

    /// Append: insert every order line with a fresh identity, one
    /// transaction. Returns the number of rows written.
    async fn commit_orders(&self, orders: Vec<OrderLine>) -> RepositoryResult<usize>;

    /// Append: insert every financial record with a fresh identity,
    /// one transaction. Returns the number of rows written.
    async fn commit_financials(&self, records: Vec<FinancialRecord>) -> RepositoryResult<usize>;

    /// Record the run's report in the import_run log.
    async fn record_run(&self, report: &ImportReport) -> RepositoryResult<()>;
}
