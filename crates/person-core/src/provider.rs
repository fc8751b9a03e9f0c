use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Person, Result};

/// Which backing store a provider reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Csv,
    Db,
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderType::Csv => write!(f, "csv"),
            ProviderType::Db => write!(f, "db"),
        }
    }
}

impl FromStr for ProviderType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ProviderType::Csv),
            "db" | "database" => Ok(ProviderType::Db),
            other => Err(Error::UnknownProviderType(other.to_string())),
        }
    }
}

/// Source of person records
#[async_trait]
pub trait PersonDataProvider: Send + Sync {
    /// The kind this provider is registered under
    fn provider_type(&self) -> ProviderType;

    /// List every person
    async fn all(&self) -> Result<Vec<Person>>;

    /// Store a person and return it with its assigned id
    async fn save(&self, person: Person) -> Result<Person>;

    /// Fetch a single person, failing with `PersonNotFound` when absent
    async fn find_by_id(&self, id: i64) -> Result<Person>;

    /// List persons whose color label matches exactly
    async fn find_by_color(&self, color: &str) -> Result<Vec<Person>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_from_str() {
        assert_eq!("csv".parse::<ProviderType>().unwrap(), ProviderType::Csv);
        assert_eq!("DB".parse::<ProviderType>().unwrap(), ProviderType::Db);
        assert_eq!(" database ".parse::<ProviderType>().unwrap(), ProviderType::Db);
        assert!(matches!(
            "xml".parse::<ProviderType>(),
            Err(Error::UnknownProviderType(_))
        ));
    }

    #[test]
    fn test_provider_type_serde() {
        assert_eq!(serde_json::to_string(&ProviderType::Csv).unwrap(), "\"csv\"");
        let kind: ProviderType = serde_json::from_str("\"db\"").unwrap();
        assert_eq!(kind, ProviderType::Db);
    }
}
