//! The plain single-instance registry: one concrete type, no variants.
//!
//! ```rust
//! use singleton_family::{Access, InstanceParams, Named, RegistryError, Singleton};
//! use std::sync::Arc;
//!
//! let first = Singleton::get_instance(InstanceParams::named("first created")).unwrap();
//! let second = Singleton::get_instance(InstanceParams::named("second created")).unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//! assert_eq!(second.get_name(), "first created");
//!
//! let direct = Singleton::construct(Access::direct(), InstanceParams::named("third"));
//! assert!(matches!(direct, Err(RegistryError::DirectConstruction { .. })));
//! ```

use std::sync::{Arc, Mutex};

use crate::{
    Access, InstanceParams, Named, RegistryError, RegistryEvent, SingletonApi, Slot, TraceHook,
};

/// The guarded instance of the plain registry.
///
/// There is no way to obtain one except [`Singleton::get_instance`]:
/// [`Singleton::construct`] refuses every token available outside the crate,
/// including the one a user [`SingletonApi`] implementation receives.
#[derive(Debug)]
pub struct Singleton {
    name: String,
}

impl Singleton {
    /// Builds a `Singleton` outside the registry.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DirectConstruction`] unless called by the registry's
    /// own creation routine.
    pub fn construct(access: Access<Self>, params: InstanceParams) -> Result<Self, RegistryError> {
        access.check_owned()?;
        Ok(Self {
            name: params.into_name(),
        })
    }
}

impl Named for Singleton {
    fn label(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "Singleton"
    }
}

static SLOT: Slot<Singleton> = Slot::new();
static TRACE: TraceHook = Mutex::new(None);

struct Global;

impl SingletonApi for Global {
    type Target = Singleton;
    type Params = InstanceParams;

    fn trace() -> &'static TraceHook {
        &TRACE
    }

    fn slot() -> &'static Slot<Singleton> {
        &SLOT
    }

    fn build(
        access: Access<Singleton>,
        params: InstanceParams,
    ) -> Result<Arc<Singleton>, RegistryError> {
        Singleton::construct(access.into_owned(), params).map(Arc::new)
    }

    fn describe(instance: &Singleton) -> &'static str {
        instance.kind()
    }
}

const GLOBAL: Global = Global;

impl Singleton {
    /// Return the registered instance, creating it from `params` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Construction through the registry cannot be refused, so this only fails if
    /// the gate itself is broken.
    pub fn get_instance(params: InstanceParams) -> Result<Arc<Self>, RegistryError> {
        GLOBAL.get_instance(params)
    }

    /// Empty the slot. No-op if already empty.
    pub fn reset_instance() {
        GLOBAL.reset_instance()
    }

    /// The registered instance, if any. Never creates one.
    pub fn current() -> Option<Arc<Self>> {
        GLOBAL.current()
    }

    pub fn is_set() -> bool {
        GLOBAL.is_set()
    }

    /// Set a tracing callback for operations on the plain registry.
    pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        GLOBAL.set_trace_callback(callback)
    }

    pub fn clear_trace_callback() {
        GLOBAL.clear_trace_callback()
    }
}
