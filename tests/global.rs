use fibre_locator::{
  current, global, install, try_global, ContainerProvider, FixedSource, Handle, ProviderError,
};
use std::sync::Arc;

// --- Test Fixtures ---

struct TestContainer {
  id: u32,
}

struct TestProvider {
  handle: Handle,
}

impl TestProvider {
  fn new(id: u32) -> Self {
    Self {
      handle: Arc::new(TestContainer { id }),
    }
  }
}

impl ContainerProvider for TestProvider {
  fn name(&self) -> &str {
    "test"
  }
  fn container(&self) -> Result<Option<Handle>, ProviderError> {
    Ok(Some(self.handle.clone()))
  }
}

// The process-wide locator is install-once, so the whole lifecycle is
// exercised in a single test to keep it independent of test ordering.
#[test]
fn test_process_wide_locator_lifecycle() {
  // Nothing is installed at startup.
  assert!(try_global().is_none());

  // First install wins.
  let providers: Vec<Arc<dyn ContainerProvider>> = vec![Arc::new(TestProvider::new(99))];
  assert!(install(Arc::new(FixedSource::new(providers))));

  // A second install is refused and leaves the original in place.
  assert!(!install(Arc::new(FixedSource::empty())));
  assert!(try_global().is_some());

  // `current()` resolves through the installed default strategy.
  let handle = current().unwrap();
  assert_eq!(handle.downcast_ref::<TestContainer>().unwrap().id, 99);

  // The accessor and the shorthand agree on the handle.
  let via_global = global().resolve_default().unwrap();
  assert!(Arc::ptr_eq(&handle, &via_global));

  // The macro forms: opaque handle and typed downcast.
  let untyped = fibre_locator::current!();
  assert!(Arc::ptr_eq(&handle, &untyped));

  let typed = fibre_locator::current!(TestContainer);
  assert_eq!(typed.id, 99);
}
