//! The per-strategy registry cache.

use std::sync::Arc;

use dashmap::DashMap;

use crate::core::ProviderSource;
use crate::registry::ProviderRegistry;

/// Cache key: the identity of a discovery strategy.
///
/// Strategies are keyed by the address of the `Arc`'s data, so two
/// structurally identical sources held in different `Arc`s are distinct
/// keys. A live entry's registry owns the source `Arc`, which keeps the
/// address from being recycled for as long as the key is in the map.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct SourceKey(usize);

impl SourceKey {
  fn of(source: &Arc<dyn ProviderSource>) -> Self {
    SourceKey(Arc::as_ptr(source) as *const () as usize)
  }
}

/// Maps each distinct [`ProviderSource`] to its [`ProviderRegistry`].
///
/// Entries are created on demand and never evicted; the number of distinct
/// strategies in a process is expected to be tiny and static.
#[derive(Default)]
pub struct ResolverCache {
  registries: DashMap<SourceKey, Arc<ProviderRegistry>>,
}

impl ResolverCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the registry for `source`, creating it if this is the first
  /// request for that source identity.
  ///
  /// Creation happens under the map's shard lock, so concurrent first-time
  /// requests for one source can never produce two registries.
  pub fn get_or_create(&self, source: &Arc<dyn ProviderSource>) -> Arc<ProviderRegistry> {
    self
      .registries
      .entry(SourceKey::of(source))
      .or_insert_with(|| Arc::new(ProviderRegistry::new(source.clone())))
      .value()
      .clone()
  }

  /// Number of distinct strategies seen so far.
  pub fn len(&self) -> usize {
    self.registries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.registries.is_empty()
  }
}
