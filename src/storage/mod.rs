pub mod base;
pub mod csv_storage;

pub use base::{SaveOutcome, StorageError};
pub use csv_storage::CsvStorage;
