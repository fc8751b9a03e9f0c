pub mod csv;
pub mod error;
pub mod factory;
pub mod person;
pub mod provider;
pub mod service;

// Re-exports
pub use csv::{color_label, parse_records, CsvPersonDataProvider};
pub use error::{Error, Result};
pub use factory::PersonDataProviderFactory;
pub use person::Person;
pub use provider::{PersonDataProvider, ProviderType};
pub use service::PersonService;
