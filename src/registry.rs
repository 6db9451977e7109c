//! Lazy, per-strategy provider registries.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::core::{ContainerProvider, ProviderSource};
use crate::error::DiscoveryError;

/// The providers discovered through one [`ProviderSource`], enumerated at
/// most once and shared by every subsequent resolution.
///
/// The first caller to request the providers performs the enumeration; any
/// caller arriving while that enumeration is in flight blocks until the
/// fully populated list is published. A failed enumeration is not cached —
/// the registry stays unloaded and the next caller retries.
pub struct ProviderRegistry {
  source: Arc<dyn ProviderSource>,
  providers: OnceCell<Vec<Arc<dyn ContainerProvider>>>,
}

impl ProviderRegistry {
  pub fn new(source: Arc<dyn ProviderSource>) -> Self {
    Self {
      source,
      providers: OnceCell::new(),
    }
  }

  /// The discovery strategy this registry was built from.
  pub fn source(&self) -> &Arc<dyn ProviderSource> {
    &self.source
  }

  /// Whether enumeration has already completed successfully.
  pub fn is_loaded(&self) -> bool {
    self.providers.get().is_some()
  }

  /// Returns the ordered provider list, enumerating on first demand.
  ///
  /// Order is whatever the source produced, with duplicate registration
  /// names collapsed to their first occurrence.
  pub fn providers(&self) -> Result<&[Arc<dyn ContainerProvider>], DiscoveryError> {
    self
      .providers
      .get_or_try_init(|| self.load())
      .map(Vec::as_slice)
  }

  fn load(&self) -> Result<Vec<Arc<dyn ContainerProvider>>, DiscoveryError> {
    let enumerated = self.source.enumerate().map_err(|err| {
      log::warn!("container provider discovery failed: {}", err);
      err
    })?;

    let mut seen = HashSet::with_capacity(enumerated.len());
    let mut providers = Vec::with_capacity(enumerated.len());
    for provider in enumerated {
      if seen.insert(provider.name().to_owned()) {
        providers.push(provider);
      } else {
        log::debug!(
          "collapsing duplicate provider registration '{}'",
          provider.name()
        );
      }
    }

    log::debug!("discovered {} container provider(s)", providers.len());
    Ok(providers)
  }
}
