//! ProviderRegistry: explicit, host-owned provider registration.
//!
//! Hosts register providers by name at startup and look them up when a
//! property page asks for enum values. Nothing is discovered implicitly.

use std::sync::Arc;

use tfm_core::{FrameworkEnumConfig, FrameworkEnumError, FrameworkEnumResult, FxHashMap};
use tracing::{info, warn};

use super::supported::SupportedTargetFrameworksProvider;
use super::FrameworkEnumProvider;

/// Registry of enum value providers, in registration order.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn FrameworkEnumProvider>>,
    by_name: FxHashMap<String, usize>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in providers.
    pub fn with_builtins(config: &FrameworkEnumConfig) -> FrameworkEnumResult<Self> {
        let mut registry = Self::new();
        registry.register(Arc::new(SupportedTargetFrameworksProvider::new(config)?))?;
        Ok(registry)
    }

    /// Register a provider. Names are unique; a second registration under the
    /// same name is rejected and the first one stays in place.
    pub fn register(&mut self, provider: Arc<dyn FrameworkEnumProvider>) -> FrameworkEnumResult<()> {
        let name = provider.name().to_string();
        if self.by_name.contains_key(&name) {
            warn!(provider = %name, "Rejected duplicate enum provider registration");
            return Err(FrameworkEnumError::DuplicateProvider { name });
        }
        info!(provider = %name, rules = ?provider.rule_names(), "Registered enum provider");
        self.by_name.insert(name, self.providers.len());
        self.providers.push(provider);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn FrameworkEnumProvider>> {
        self.by_name
            .get(name)
            .map(|&idx| Arc::clone(&self.providers[idx]))
    }

    /// Providers applicable to a project with `capabilities`, in registration order.
    pub fn providers_for(&self, capabilities: &[&str]) -> Vec<Arc<dyn FrameworkEnumProvider>> {
        self.providers
            .iter()
            .filter(|p| p.applies_to(capabilities))
            .cloned()
            .collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
