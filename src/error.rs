//! Error types for provider discovery and container resolution.

use thiserror::Error;

/// The external enumeration mechanism could not complete discovery.
///
/// Discovery failures are never cached: the registry that observed one is
/// left unloaded, and the next resolution attempts enumeration again.
#[derive(Debug, Error)]
pub enum DiscoveryError {
  #[error("Failed to read provider registrations: {0}")]
  Registry(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("Malformed provider registration entry: {0}")]
  MalformedEntry(String),

  #[error("Failed to instantiate provider '{name}': {reason}")]
  Instantiation { name: String, reason: String },
}

/// A provider failed outright while producing a container handle.
///
/// Providers must reserve this for genuine failures; "not authoritative
/// right now" is expressed as `Ok(None)` from
/// [`ContainerProvider::container`](crate::ContainerProvider::container).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProviderError {
  message: String,
}

impl ProviderError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}

/// Errors surfaced by [`Locator::resolve`](crate::Locator::resolve) and
/// [`Locator::resolve_default`](crate::Locator::resolve_default).
#[derive(Debug, Error)]
pub enum LocateError {
  /// Discovery failed before any provider could be consulted.
  #[error("Container provider discovery failed: {0}")]
  Discovery(#[from] DiscoveryError),

  /// A provider failed while producing a handle. The scan stops at the
  /// failing provider; later providers are not consulted.
  #[error("Container provider '{name}' failed: {source}")]
  Provider {
    name: String,
    #[source]
    source: ProviderError,
  },

  /// Enumeration succeeded but no provider yielded an active container.
  #[error("No container provider yielded an active container")]
  NoActiveProvider,
}

/// A specialized `Result` type for `fibre_locator` operations.
pub type Result<T, E = LocateError> = std::result::Result<T, E>;
