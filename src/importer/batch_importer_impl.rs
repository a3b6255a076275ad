// ==========================================
// Cross Check - batch importer
// ==========================================
// Orchestrates one full rebuild run over the three sources.
// Flow per source: parse → coerce → derive → key check → commit.
// Row and source failures land in the report; the run only fails
// when the store itself cannot be opened or rebuilt.
// ==========================================

use crate::domain::record::RawRecord;
use crate::domain::report::{EntityKind, ImportPhase, ImportReport, SourceReport};
use crate::domain::{Customer, FinancialRecord, OrderLine};
use crate::importer::batch_importer_trait::{
    BatchImporter, DerivationService, FieldMapper, FileParser, ImportObserver, NoopObserver,
};
use crate::importer::derivation::DerivationService as DerivationServiceImpl;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::UniversalFileParser;
use crate::repository::ImportRepository;
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Key precondition shared by all three persistence policies: the
/// subscription code must be present and non-zero (the legacy export
/// writes 0 into rows that never had a code).
fn require_subscription_code(code: Option<i64>, row_number: usize) -> ImportResult<i64> {
    match code {
        Some(code) if code != 0 => Ok(code),
        _ => Err(ImportError::SubscriptionCodeMissing(row_number)),
    }
}

// ==========================================
// BatchImporterImpl
// ==========================================
pub struct BatchImporterImpl<R>
where
    R: ImportRepository,
{
    repo: R,
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    derivation: Box<dyn DerivationService>,
    observer: Arc<dyn ImportObserver>,
}

impl<R> BatchImporterImpl<R>
where
    R: ImportRepository,
{
    /// Importer with the default pipeline components.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            file_parser: Box::new(UniversalFileParser),
            field_mapper: Box::new(FieldMapperImpl),
            derivation: Box::new(DerivationServiceImpl),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Importer with explicit components (tests, custom parsers).
    pub fn with_components(
        repo: R,
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        derivation: Box<dyn DerivationService>,
    ) -> Self {
        Self {
            repo,
            file_parser,
            field_mapper,
            derivation,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Attach a progress observer (presentation layers).
    pub fn with_observer(mut self, observer: Arc<dyn ImportObserver>) -> Self {
        self.observer = observer;
        self
    }

    fn set_phase(&self, phase: ImportPhase) {
        debug!(phase = phase.as_str(), "import phase");
        self.observer.on_phase(phase);
    }

    fn log(&self, message: String) {
        self.observer.on_log(&message);
    }

    /// One source pass for the customers sheet. Returns the pass
    /// report; never fails the run.
    pub async fn import_customers(&self, file_path: &Path) -> SourceReport {
        let kind = EntityKind::Customer;
        let mut source = SourceReport::new(kind);

        self.log(format!("Reading customers from: {}", file_path.display()));
        let records = match self.file_parser.parse_to_raw_records(file_path) {
            Ok(records) => records,
            Err(e) => {
                self.push_source_error(&mut source, &e);
                return source;
            }
        };
        self.log(format!("Found {} rows in customers file", records.len()));

        let mut customers: Vec<Customer> = Vec::new();
        for record in &records {
            match self.coerce_customer(record) {
                Ok(customer) => customers.push(customer),
                Err(e) => self.push_row_error(&mut source, &e),
            }
        }

        self.commit_source(&mut source, customers.len(), self.repo.commit_customers(customers).await);
        self.log(format!(
            "Successfully imported {} customers",
            source.imported
        ));
        source
    }

    /// One source pass for the orders sheet.
    pub async fn import_orders(&self, file_path: &Path) -> SourceReport {
        let kind = EntityKind::OrderLine;
        let mut source = SourceReport::new(kind);

        self.log(format!("Reading orders from: {}", file_path.display()));
        let records = match self.file_parser.parse_to_raw_records(file_path) {
            Ok(records) => records,
            Err(e) => {
                self.push_source_error(&mut source, &e);
                return source;
            }
        };
        self.log(format!("Found {} rows in orders file", records.len()));

        let mut orders: Vec<OrderLine> = Vec::new();
        for record in &records {
            match self.coerce_order(record) {
                Ok(order) => orders.push(order),
                Err(e) => self.push_row_error(&mut source, &e),
            }
        }

        self.commit_source(&mut source, orders.len(), self.repo.commit_orders(orders).await);
        self.log(format!("Successfully imported {} orders", source.imported));
        source
    }

    /// One source pass for the financials sheet.
    pub async fn import_financials(&self, file_path: &Path) -> SourceReport {
        let kind = EntityKind::FinancialRecord;
        let mut source = SourceReport::new(kind);

        self.log(format!(
            "Reading financials from: {}",
            file_path.display()
        ));
        let records = match self.file_parser.parse_to_raw_records(file_path) {
            Ok(records) => records,
            Err(e) => {
                self.push_source_error(&mut source, &e);
                return source;
            }
        };
        self.log(format!("Found {} rows in financials file", records.len()));

        let mut financials: Vec<FinancialRecord> = Vec::new();
        for record in &records {
            match self.coerce_financial(record) {
                Ok(financial) => financials.push(financial),
                Err(e) => self.push_row_error(&mut source, &e),
            }
        }

        self.commit_source(
            &mut source,
            financials.len(),
            self.repo.commit_financials(financials).await,
        );
        self.log(format!(
            "Successfully imported {} financial records",
            source.imported
        ));
        source
    }

    fn coerce_customer(&self, record: &RawRecord) -> ImportResult<Customer> {
        let raw = self.field_mapper.map_to_customer(record)?;
        let code = require_subscription_code(raw.subscription_code, raw.row_number)?;
        Ok(raw.into_customer(code))
    }

    fn coerce_order(&self, record: &RawRecord) -> ImportResult<OrderLine> {
        let raw = self.field_mapper.map_to_order(record)?;
        let code = require_subscription_code(raw.subscription_code, raw.row_number)?;
        let total_value = self.derivation.derive_total_value(raw.quantity, raw.price);
        Ok(raw.into_order_line(code, total_value))
    }

    fn coerce_financial(&self, record: &RawRecord) -> ImportResult<FinancialRecord> {
        let raw = self.field_mapper.map_to_financial(record)?;
        let code = require_subscription_code(raw.subscription_code, raw.row_number)?;
        Ok(raw.into_financial_record(code))
    }

    /// A source that could not be read at all: one error entry, zero
    /// imported, the run moves on.
    fn push_source_error(&self, source: &mut SourceReport, err: &ImportError) {
        let message = format!("{}: {}", source.kind.source_label(), err);
        warn!(source = source.kind.source_label(), error = %err, "source unreadable");
        self.log(message.clone());
        source.errors.push(message);
    }

    /// A dropped row: one error entry, processing continues.
    fn push_row_error(&self, source: &mut SourceReport, err: &ImportError) {
        let message = format!("{}: {}", source.kind.source_label(), err);
        debug!(source = source.kind.source_label(), error = %err, "row dropped");
        self.log(message.clone());
        source.errors.push(message);
    }

    /// Fold the per-source commit outcome into the report. A failed
    /// commit rolls the whole source back: zero imported, one error.
    fn commit_source(
        &self,
        source: &mut SourceReport,
        accepted: usize,
        outcome: crate::repository::RepositoryResult<usize>,
    ) {
        match outcome {
            Ok(count) => {
                debug_assert_eq!(count, accepted);
                source.imported = count;
            }
            Err(e) => {
                let err = ImportError::from(e);
                error!(source = source.kind.source_label(), error = %err, "source commit failed");
                source.imported = 0;
                source
                    .errors
                    .push(format!("{}: {}", source.kind.source_label(), err));
            }
        }
    }
}

#[async_trait::async_trait]
impl<R> BatchImporter for BatchImporterImpl<R>
where
    R: ImportRepository + Send + Sync,
{
    async fn run_full_import(
        &self,
        customers_file: &Path,
        orders_file: &Path,
        financials_file: &Path,
    ) -> ImportResult<ImportReport> {
        let start_time = Instant::now();
        let started_at = Utc::now();
        let run_id = Uuid::new_v4().to_string();

        info!(run_id = %run_id, "starting full import");
        self.log("Starting data import process...".to_string());

        // full rebuild happens exactly once, before any source
        self.set_phase(ImportPhase::RebuildingSchema);
        self.log("Recreating database tables...".to_string());
        if let Err(e) = self.repo.recreate_schema().await {
            let err = ImportError::from(e);
            error!(run_id = %run_id, error = %err, "schema rebuild failed");
            self.set_phase(ImportPhase::Failed);
            return Err(err);
        }

        let mut report = ImportReport::new(run_id.clone(), started_at);

        self.set_phase(ImportPhase::ImportingCustomers);
        report.merge_source(self.import_customers(customers_file).await);

        self.set_phase(ImportPhase::ImportingOrders);
        report.merge_source(self.import_orders(orders_file).await);

        self.set_phase(ImportPhase::ImportingFinancials);
        report.merge_source(self.import_financials(financials_file).await);

        report.completed_at = Some(Utc::now());
        report.elapsed_ms = Some(start_time.elapsed().as_millis() as i64);
        self.set_phase(ImportPhase::Completed);

        // bookkeeping only; a failure here must not fail the run
        if let Err(e) = self.repo.record_run(&report).await {
            warn!(run_id = %run_id, error = %e, "import_run bookkeeping failed");
        }

        info!(
            run_id = %run_id,
            customers = report.customers_imported,
            orders = report.orders_imported,
            financials = report.financials_imported,
            errors = report.errors.len(),
            elapsed_ms = report.elapsed_ms,
            "full import completed"
        );
        self.log(format!(
            "Import finished: {} customers, {} orders, {} financial records, {} errors",
            report.customers_imported,
            report.orders_imported,
            report.financials_imported,
            report.errors.len()
        ));

        Ok(report)
    }
}
