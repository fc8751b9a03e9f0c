use async_trait::async_trait;
use person_core::{Error, Person, PersonDataProvider, ProviderType, Result};
use std::sync::Arc;

use crate::PersonRepository;

/// Person provider that delegates to a `PersonRepository`
pub struct DbPersonDataProvider {
    repository: Arc<dyn PersonRepository>,
}

impl DbPersonDataProvider {
    pub fn new(repository: Arc<dyn PersonRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PersonDataProvider for DbPersonDataProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Db
    }

    async fn all(&self) -> Result<Vec<Person>> {
        Ok(self.repository.find_all().await?)
    }

    async fn save(&self, person: Person) -> Result<Person> {
        Ok(self.repository.save(&person).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Person> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(Error::PersonNotFound(id))
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<Person>> {
        Ok(self.repository.find_by_color(color).await?)
    }
}
