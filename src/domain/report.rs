// ==========================================
// Cross Check - import run bookkeeping types
// ==========================================
// The report is an explicit value: each source pass produces a
// SourceReport, the orchestrator merges them into the run's
// ImportReport. Callers infer success from counts plus an empty
// error list; there is no success flag.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// EntityKind / PersistencePolicy
// ==========================================

/// The three entity kinds handled by the pipeline, in import order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Customer,
    OrderLine,
    FinancialRecord,
}

/// How an accepted record reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersistencePolicy {
    /// Upsert on the primary key: an existing record's non-key
    /// attributes are overwritten, no duplicates accumulate.
    MergeByKey,
    /// Every accepted row becomes a new record with a fresh identity.
    Append,
}

impl EntityKind {
    /// Declared persistence policy per entity kind.
    pub fn policy(&self) -> PersistencePolicy {
        match self {
            EntityKind::Customer => PersistencePolicy::MergeByKey,
            EntityKind::OrderLine | EntityKind::FinancialRecord => PersistencePolicy::Append,
        }
    }

    /// Label used as the prefix of error-list entries.
    pub fn source_label(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customers",
            EntityKind::OrderLine => "orders",
            EntityKind::FinancialRecord => "financials",
        }
    }
}

// ==========================================
// ImportPhase - orchestrator state machine
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportPhase {
    Idle,
    RebuildingSchema,
    ImportingCustomers,
    ImportingOrders,
    ImportingFinancials,
    Completed,
    /// Terminal: the store itself could not be opened or rebuilt.
    /// Source- and row-level failures never land here; they are
    /// recorded in the report and the run continues.
    Failed,
}

impl ImportPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportPhase::Idle => "idle",
            ImportPhase::RebuildingSchema => "rebuilding_schema",
            ImportPhase::ImportingCustomers => "importing_customers",
            ImportPhase::ImportingOrders => "importing_orders",
            ImportPhase::ImportingFinancials => "importing_financials",
            ImportPhase::Completed => "completed",
            ImportPhase::Failed => "failed",
        }
    }
}

// ==========================================
// SourceReport - one source's pass
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReport {
    pub kind: EntityKind,
    pub imported: usize,
    /// Row/file-level error messages, in original row order.
    pub errors: Vec<String>,
}

impl SourceReport {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            imported: 0,
            errors: Vec::new(),
        }
    }
}

// ==========================================
// ImportReport - the run's aggregate result
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub run_id: String,
    pub customers_imported: usize,
    pub orders_imported: usize,
    pub financials_imported: usize,
    /// All non-fatal failures of the run, original order preserved.
    pub errors: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub elapsed_ms: Option<i64>,
}

impl ImportReport {
    pub fn new(run_id: String, started_at: DateTime<Utc>) -> Self {
        Self {
            run_id,
            customers_imported: 0,
            orders_imported: 0,
            financials_imported: 0,
            errors: Vec::new(),
            started_at,
            completed_at: None,
            elapsed_ms: None,
        }
    }

    /// Fold one source's pass into the run report. Error order is
    /// preserved: sources are merged in import order and each source's
    /// errors are already in row order.
    pub fn merge_source(&mut self, source: SourceReport) {
        match source.kind {
            EntityKind::Customer => self.customers_imported = source.imported,
            EntityKind::OrderLine => self.orders_imported = source.imported,
            EntityKind::FinancialRecord => self.financials_imported = source.imported,
        }
        self.errors.extend(source.errors);
    }
}
