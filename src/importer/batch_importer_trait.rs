// ==========================================
// Cross Check - import pipeline traits
// ==========================================
// Interfaces of the pipeline stages (no implementations here).
// ==========================================

use crate::domain::customer::RawCustomerRecord;
use crate::domain::financial::RawFinancialRecord;
use crate::domain::order::RawOrderRecord;
use crate::domain::record::RawRecord;
use crate::domain::report::{ImportPhase, ImportReport};
use crate::importer::error::{ImportError, ImportResult};
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// FileParser
// ==========================================
// Stage 0: decode one source file into ordered raw records.
// Implementors: CsvParser, ExcelParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// Parse a source file into raw records, each tagged with its
    /// 1-based spreadsheet row number. A failure here is fatal for
    /// the whole source (SourceUnreadable), not for single rows.
    fn parse_to_raw_records(&self, file_path: &Path) -> Result<Vec<RawRecord>, ImportError>;
}

// ==========================================
// FieldMapper
// ==========================================
// Stage 1: coerce one raw record into a typed candidate. Pure; a
// coercion failure aborts only the offending row.
pub trait FieldMapper: Send + Sync {
    fn map_to_customer(&self, record: &RawRecord) -> ImportResult<RawCustomerRecord>;
    fn map_to_order(&self, record: &RawRecord) -> ImportResult<RawOrderRecord>;
    fn map_to_financial(&self, record: &RawRecord) -> ImportResult<RawFinancialRecord>;
}

// ==========================================
// DerivationService
// ==========================================
// Stage 2: fields computed from several coerced fields.
pub trait DerivationService: Send + Sync {
    /// Line total of an order row. Absent inputs count as zero
    /// instead of failing.
    fn derive_total_value(&self, quantity: Option<i64>, price: Option<f64>) -> f64;
}

// ==========================================
// ImportObserver
// ==========================================
// Optional progress sink for presentation layers; every method has a
// no-op default so callers implement only what they render.
pub trait ImportObserver: Send + Sync {
    fn on_phase(&self, _phase: ImportPhase) {}
    fn on_log(&self, _message: &str) {}
}

/// Observer that discards everything.
pub struct NoopObserver;

impl ImportObserver for NoopObserver {}

// ==========================================
// BatchImporter
// ==========================================
// The orchestrator: one full rebuild run over the three sources.
#[async_trait]
pub trait BatchImporter: Send + Sync {
    /// Run one full import: drop and recreate the entity tables, then
    /// import customers, orders and financials in that fixed order,
    /// committing each source once after its full pass.
    ///
    /// Row- and source-level failures are collected into the report;
    /// only total inability to proceed (the store cannot be opened or
    /// rebuilt) returns an error.
    async fn run_full_import(
        &self,
        customers_file: &Path,
        orders_file: &Path,
        financials_file: &Path,
    ) -> ImportResult<ImportReport>;
}
