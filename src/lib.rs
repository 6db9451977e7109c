//! # Fibre Locator
//!
//! A pluggable, thread-safe service locator for container providers.
//!
//! Fibre Locator solves one problem: given zero or more container providers
//! discovered through an external registration mechanism, find the one
//! active container — fast, safely, and repeatedly. Discovery runs at most
//! once per strategy and the result is cached for the life of the process,
//! so repeated resolutions are cheap even under heavy concurrent access.
//!
//! ## Core Concepts
//!
//! - **Provider**: an external collaborator that can produce a handle to the
//!   container it fronts, or decline when it is not currently authoritative.
//! - **Source**: a discovery strategy — a replaceable mechanism that
//!   enumerates the currently registered providers.
//! - **Registry**: the providers discovered through one source, enumerated
//!   lazily, exactly once, and shared by every subsequent resolution.
//! - **Locator**: scans a registry's providers in order and returns the
//!   first handle offered. A process-wide locator is installed once at
//!   startup and accessed via `global()` or the `current!` macro.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_locator::{ContainerProvider, FixedSource, Handle, Locator, ProviderError};
//! use std::sync::Arc;
//!
//! // The container type is opaque to the locator; providers decide what
//! // handle they hand out.
//! struct AppContainer {
//!   name: &'static str,
//! }
//!
//! struct AppProvider;
//!
//! impl ContainerProvider for AppProvider {
//!   fn name(&self) -> &str {
//!     "app"
//!   }
//!
//!   fn container(&self) -> Result<Option<Handle>, ProviderError> {
//!     Ok(Some(Arc::new(AppContainer { name: "app-container" })))
//!   }
//! }
//!
//! // Wire the providers into a source and build a locator around it.
//! let providers: Vec<Arc<dyn ContainerProvider>> = vec![Arc::new(AppProvider)];
//! let locator = Locator::new(Arc::new(FixedSource::new(providers)));
//!
//! // Resolve the active container and downcast to the concrete type.
//! let handle = locator.resolve_default().unwrap();
//! let container = handle.downcast::<AppContainer>().unwrap();
//! assert_eq!(container.name, "app-container");
//! ```

mod cache;
mod core;
mod error;
mod global;
mod locator;
mod macros;
mod registry;

pub use crate::core::{ContainerProvider, FixedSource, Handle, ProviderSource};
pub use cache::ResolverCache;
pub use error::{DiscoveryError, LocateError, ProviderError, Result};
pub use global::{current, global, install, try_global};
pub use locator::Locator;
pub use registry::ProviderRegistry;
