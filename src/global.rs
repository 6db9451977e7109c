//! The process-wide locator instance and access functions.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::core::{Handle, ProviderSource};
use crate::error::Result;
use crate::locator::Locator;

// The one and only process-wide locator. Unlike a default-constructible
// global, it needs the host to supply the default discovery strategy, so it
// is installed explicitly at startup rather than created on first access.
static GLOBAL_LOCATOR: OnceCell<Locator> = OnceCell::new();

/// Installs the process-wide locator, built around `default_source`.
///
/// Call once during startup, before anything resolves through [`global`] or
/// [`current`]. The first call wins; later calls leave the existing locator
/// in place and return `false`.
///
/// # Examples
///
/// ```
/// use fibre_locator::{install, FixedSource};
/// use std::sync::Arc;
///
/// fn bootstrap() {
///   install(Arc::new(FixedSource::empty()));
/// }
/// ```
pub fn install(default_source: Arc<dyn ProviderSource>) -> bool {
  GLOBAL_LOCATOR.set(Locator::new(default_source)).is_ok()
}

/// Provides a reference to the process-wide locator.
///
/// # Panics
///
/// Panics if [`install`] has not been called. For a non-panicking version,
/// use [`try_global`].
pub fn global() -> &'static Locator {
  match GLOBAL_LOCATOR.get() {
    Some(locator) => locator,
    None => panic!("fibre_locator: global() called before install()"),
  }
}

/// Like [`global`], but returns `None` when no locator has been installed.
pub fn try_global() -> Option<&'static Locator> {
  GLOBAL_LOCATOR.get()
}

/// Resolves the active container through the process-wide locator's default
/// strategy.
///
/// # Panics
///
/// Panics if [`install`] has not been called.
pub fn current() -> Result<Handle> {
  global().resolve_default()
}
