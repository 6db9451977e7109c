//! Core capability contracts consumed by the locator.

use std::any::Any;
use std::sync::Arc;

use crate::error::{DiscoveryError, ProviderError};

/// An opaque handle to the active container.
///
/// The locator never inspects a handle; callers downcast it to whatever
/// concrete container type the winning provider produces.
pub type Handle = Arc<dyn Any + Send + Sync>;

/// A registered container provider.
///
/// Multiple providers may be registered at once; a provider that is present
/// but not currently fronting the active container declines by returning
/// `Ok(None)`.
pub trait ContainerProvider: Send + Sync {
  /// Stable registration name. Providers enumerated under the same name are
  /// treated as one logical registration; only the first occurrence is kept.
  fn name(&self) -> &str;

  /// Returns a handle to the container this provider fronts, or `None` when
  /// the provider is not currently authoritative.
  ///
  /// `Err` is reserved for genuine failures and aborts the resolution scan.
  fn container(&self) -> Result<Option<Handle>, ProviderError>;
}

/// A discovery strategy: enumerates the currently registered providers.
///
/// Sources are compared by identity, never by structure. Two separately
/// allocated sources produce two independent registries even if they would
/// enumerate the exact same providers.
pub trait ProviderSource: Send + Sync {
  /// Enumerates the registered providers, in the order the underlying
  /// mechanism reports them.
  ///
  /// The locator calls this at most once per registry lifetime, and again
  /// only after a previous call failed.
  fn enumerate(&self) -> Result<Vec<Arc<dyn ContainerProvider>>, DiscoveryError>;
}

/// A [`ProviderSource`] over a fixed, pre-built provider list.
///
/// Suitable as the default strategy for hosts that wire their providers up
/// at startup instead of scanning an external registration mechanism.
pub struct FixedSource {
  providers: Vec<Arc<dyn ContainerProvider>>,
}

impl FixedSource {
  pub fn new(providers: Vec<Arc<dyn ContainerProvider>>) -> Self {
    Self { providers }
  }

  /// A source that enumerates no providers. Resolving through it always
  /// fails with `NoActiveProvider`.
  pub fn empty() -> Self {
    Self {
      providers: Vec::new(),
    }
  }
}

impl ProviderSource for FixedSource {
  fn enumerate(&self) -> Result<Vec<Arc<dyn ContainerProvider>>, DiscoveryError> {
    Ok(self.providers.clone())
  }
}
