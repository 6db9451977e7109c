//! The `Locator`: ordered, short-circuit selection of the active container.

use std::sync::Arc;

use crate::cache::ResolverCache;
use crate::core::{Handle, ProviderSource};
use crate::error::{LocateError, Result};
use crate::registry::ProviderRegistry;

/// Locates the one active container among the registered providers.
///
/// A `Locator` owns a registry for its default discovery strategy plus a
/// cache of registries for any other strategy it is asked to resolve
/// through. Discovery runs at most once per strategy; selection re-scans the
/// cached provider list on every call, so a provider that becomes active
/// between calls is picked up by the next resolution.
pub struct Locator {
  default_registry: Arc<ProviderRegistry>,
  cache: ResolverCache,
}

impl Locator {
  /// Creates a locator around the well-known default strategy.
  ///
  /// The default registry is built immediately and bypasses the strategy
  /// cache; enumeration itself still waits for the first resolution.
  pub fn new(default_source: Arc<dyn ProviderSource>) -> Self {
    Self {
      default_registry: Arc::new(ProviderRegistry::new(default_source)),
      cache: ResolverCache::new(),
    }
  }

  /// Resolves the active container through the default strategy.
  pub fn resolve_default(&self) -> Result<Handle> {
    Self::select(&self.default_registry)
  }

  /// Resolves the active container through a specific discovery strategy.
  ///
  /// The strategy is identified by the `Arc`'s identity: passing the same
  /// `Arc` again reuses its cached registry, while a separately allocated
  /// source — even a structurally identical one — gets its own.
  pub fn resolve(&self, source: &Arc<dyn ProviderSource>) -> Result<Handle> {
    let registry = self.cache.get_or_create(source);
    Self::select(&registry)
  }

  fn select(registry: &ProviderRegistry) -> Result<Handle> {
    for provider in registry.providers()? {
      match provider.container() {
        Ok(Some(handle)) => {
          log::trace!("provider '{}' produced the active container", provider.name());
          return Ok(handle);
        }
        Ok(None) => {
          log::trace!("provider '{}' declined", provider.name());
        }
        Err(source) => {
          return Err(LocateError::Provider {
            name: provider.name().to_owned(),
            source,
          });
        }
      }
    }
    Err(LocateError::NoActiveProvider)
  }
}
