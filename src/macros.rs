//! Public macros for ergonomic container resolution.

/// Resolves the active container from the process-wide locator.
///
/// This macro panics if no locator is installed, if resolution fails, or —
/// in the typed form — if the active container is not of the requested
/// type. For a non-panicking version, use [`current`](crate::current)
/// directly.
///
/// # Examples
///
/// ```
/// use fibre_locator::{install, ContainerProvider, FixedSource, Handle, ProviderError};
/// use std::sync::Arc;
///
/// struct AppContainer;
///
/// struct AppProvider;
/// impl ContainerProvider for AppProvider {
///   fn name(&self) -> &str {
///     "app"
///   }
///   fn container(&self) -> Result<Option<Handle>, ProviderError> {
///     Ok(Some(Arc::new(AppContainer)))
///   }
/// }
///
/// let providers: Vec<Arc<dyn ContainerProvider>> = vec![Arc::new(AppProvider)];
/// install(Arc::new(FixedSource::new(providers)));
///
/// // Untyped: yields the opaque handle.
/// let handle = fibre_locator::current!();
///
/// // Typed: downcasts to the concrete container.
/// let container = fibre_locator::current!(AppContainer);
/// ```
#[macro_export]
macro_rules! current {
  // Arm for the opaque handle: current!()
  () => {
    $crate::current().unwrap_or_else(|e| panic!("Failed to locate active container: {}", e))
  };

  // Arm for a typed container: current!(MyContainer)
  ($type:ty) => {
    $crate::current()
      .unwrap_or_else(|e| panic!("Failed to locate active container: {}", e))
      .downcast::<$type>()
      .unwrap_or_else(|_| {
        panic!(
          "Active container is not a {}",
          std::any::type_name::<$type>()
        )
      })
  };
}
