// ==========================================
// Cross Check - import layer
// ==========================================
// External spreadsheet data in, reconciled store out.
// Flow: parse → coerce → derive → key check → commit-per-source
// ==========================================

pub mod batch_importer_impl;
pub mod batch_importer_trait;
pub mod derivation;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod labels;

pub use batch_importer_impl::BatchImporterImpl;
pub use derivation::DerivationService as DerivationServiceImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};

pub use batch_importer_trait::{
    BatchImporter, DerivationService, FieldMapper, FileParser, ImportObserver, NoopObserver,
};
