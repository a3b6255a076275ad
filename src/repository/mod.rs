// ==========================================
// Cross Check - repository layer
// ==========================================
// Data access: schema management, the persistence-policy engine and
// the read-only statistics queries.
// ==========================================

pub mod error;
pub mod import_repo;
pub mod import_repo_impl;
pub mod schema;
pub mod stats_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use import_repo::ImportRepository;
pub use import_repo_impl::SqliteImportRepository;
pub use stats_repo::StatsRepository;
