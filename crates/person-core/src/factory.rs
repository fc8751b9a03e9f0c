use std::collections::HashMap;
use std::sync::Arc;

use crate::{Error, PersonDataProvider, ProviderType, Result};

/// Registry of the available providers, keyed by the kind each reports
#[derive(Clone, Default)]
pub struct PersonDataProviderFactory {
    providers: HashMap<ProviderType, Arc<dyn PersonDataProvider>>,
}

impl PersonDataProviderFactory {
    pub fn new(providers: Vec<Arc<dyn PersonDataProvider>>) -> Result<Self> {
        let mut factory = Self::default();
        for provider in providers {
            factory.register(provider)?;
        }
        Ok(factory)
    }

    /// Add a provider; each kind may only be registered once
    pub fn register(&mut self, provider: Arc<dyn PersonDataProvider>) -> Result<()> {
        let provider_type = provider.provider_type();
        if self.providers.contains_key(&provider_type) {
            return Err(Error::DuplicateProvider(provider_type));
        }

        tracing::debug!("Registered {} person provider", provider_type);
        self.providers.insert(provider_type, provider);

        Ok(())
    }

    /// Resolve the provider for `provider_type`
    pub fn build(&self, provider_type: ProviderType) -> Result<Arc<dyn PersonDataProvider>> {
        self.providers
            .get(&provider_type)
            .cloned()
            .ok_or(Error::ProviderNotFound(provider_type))
    }

    pub fn available(&self) -> Vec<ProviderType> {
        let mut kinds: Vec<ProviderType> = self.providers.keys().copied().collect();
        kinds.sort_by_key(|kind| kind.to_string());
        kinds
    }
}
