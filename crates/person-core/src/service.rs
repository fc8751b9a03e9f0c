use std::sync::Arc;

use crate::{Person, PersonDataProvider, PersonDataProviderFactory, ProviderType, Result};

/// Forwards lookups to the provider selected at startup
#[derive(Clone)]
pub struct PersonService {
    provider: Arc<dyn PersonDataProvider>,
}

impl PersonService {
    pub fn new(factory: &PersonDataProviderFactory, provider_type: ProviderType) -> Result<Self> {
        let provider = factory.build(provider_type)?;
        tracing::info!("Person service using {} provider", provider_type);
        Ok(Self { provider })
    }

    pub fn with_provider(provider: Arc<dyn PersonDataProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_type(&self) -> ProviderType {
        self.provider.provider_type()
    }

    pub async fn all(&self) -> Result<Vec<Person>> {
        self.provider.all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Person> {
        self.provider.find_by_id(id).await
    }

    pub async fn find_by_color(&self, color: &str) -> Result<Vec<Person>> {
        self.provider.find_by_color(color).await
    }

    pub async fn save(&self, person: Person) -> Result<Person> {
        self.provider.save(person).await
    }
}
