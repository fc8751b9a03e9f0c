pub mod error;
pub mod models;
pub mod provider;
pub mod repository;

// Re-exports
pub use error::{Error, Result};
pub use models::PersonRecord;
pub use provider::DbPersonDataProvider;
pub use repository::{Database, PersonRepository};
