//! Live registry of named providers backing an allow-list.
//!
//! Hosts with optional components (plugins, downloadable models, optional
//! integrations) maintain a set of "currently available" provider names that
//! changes at runtime as components register and unregister.
//! [`ProviderRegistry`] is that set, and [`ProviderAllowList`] adapts it to
//! the [`AllowListSource`] capability so an [`crate::rules::AllowListRule`]
//! sees every registration change on the very next validation.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::rules::AllowListSource;

/// Process-scoped, thread-safe set of available provider names.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    names: RwLock<BTreeSet<String>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce a provider as available. Returns `false` if the name was
    /// already registered.
    pub fn register_provider(&self, name: &str) -> bool {
        let inserted = self
            .names
            .write()
            .expect("provider registry poisoned")
            .insert(name.to_string());
        if inserted {
            tracing::debug!(event = "providers.registered", provider = %name);
        }
        inserted
    }

    /// Withdraw a provider. Returns `false` if the name was not registered.
    pub fn unregister_provider(&self, name: &str) -> bool {
        let removed = self
            .names
            .write()
            .expect("provider registry poisoned")
            .remove(name);
        if removed {
            tracing::debug!(event = "providers.unregistered", provider = %name);
        }
        removed
    }

    /// Snapshot of the currently available provider names.
    pub fn provider_names(&self) -> BTreeSet<String> {
        self.names.read().expect("provider registry poisoned").clone()
    }
}

/// [`AllowListSource`] adapter over a [`ProviderRegistry`].
pub struct ProviderAllowList {
    registry: Arc<ProviderRegistry>,
}

impl ProviderAllowList {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }
}

impl AllowListSource for ProviderAllowList {
    fn current_values(&self) -> BTreeSet<String> {
        self.registry.provider_names()
    }
}
