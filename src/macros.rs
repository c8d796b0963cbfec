//! Macros for creating guarded singleton registries.
//!
//! This module provides a simple macro-based approach to create type-safe,
//! thread-safe single-instance registries for any [`Guarded`](crate::Guarded) type.

/// Creates a complete single-instance registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - Slot static (hidden)
/// - Trace hook static (hidden)
/// - An `Api` struct that implements `SingletonApi`
/// - Free functions delegating to it
///
/// The guarded type must be nameable from the module the macro is invoked in.
///
/// # Examples
///
/// ```rust
/// use singleton_family::{define_singleton, Access, Guarded, RegistryError};
/// use std::sync::Arc;
///
/// pub struct Spooler {
///     queue: String,
/// }
///
/// impl Guarded for Spooler {
///     type Params = String;
///
///     fn construct(access: Access<Self>, queue: String) -> Result<Self, RegistryError> {
///         access.check()?;
///         Ok(Self { queue })
///     }
/// }
///
/// define_singleton!(spooler, Spooler);
///
/// fn main() {
///     let first: Arc<Spooler> = spooler::get_instance("lp0".to_string()).unwrap();
///     let again: Arc<Spooler> = spooler::get_instance("lp1".to_string()).unwrap();
///
///     assert!(Arc::ptr_eq(&first, &again));
///     assert_eq!(again.queue, "lp0");
///
///     spooler::reset_instance();
///     assert!(!spooler::is_set());
/// }
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($name:ident, $ty:ty) => {
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;
            use std::sync::{Arc, Mutex};

            // Slot for the registered instance (module-private)
            static SLOT: $crate::Slot<$ty> = $crate::Slot::new();

            // Trace callback storage (module-private)
            static TRACE: $crate::TraceHook = Mutex::new(None);

            /// Zero-sized type that implements the registry API.
            ///
            /// All registry operations are provided by the `SingletonApi` trait's
            /// default implementations. This struct only wires the statics and the
            /// guarded constructor.
            struct Api;

            impl $crate::SingletonApi for Api {
                type Target = $ty;
                type Params = <$ty as $crate::Guarded>::Params;

                fn trace() -> &'static $crate::TraceHook {
                    &TRACE
                }

                fn slot() -> &'static $crate::Slot<$ty> {
                    &SLOT
                }

                fn build(
                    access: $crate::Access<$ty>,
                    params: <$ty as $crate::Guarded>::Params,
                ) -> Result<Arc<$ty>, $crate::RegistryError> {
                    <$ty as $crate::Guarded>::construct(access, params).map(Arc::new)
                }
            }

            const API: Api = Api;

            /// Return the registered instance, creating it on first use.
            pub fn get_instance(
                params: <$ty as $crate::Guarded>::Params,
            ) -> Result<Arc<$ty>, $crate::RegistryError> {
                use $crate::SingletonApi;
                API.get_instance(params)
            }

            /// Empty the slot.
            pub fn reset_instance() {
                use $crate::SingletonApi;
                API.reset_instance()
            }

            /// The registered instance, if any.
            pub fn current() -> Option<Arc<$ty>> {
                use $crate::SingletonApi;
                API.current()
            }

            /// Check if an instance is registered.
            pub fn is_set() -> bool {
                use $crate::SingletonApi;
                API.is_set()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                use $crate::SingletonApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::SingletonApi;
                API.clear_trace_callback()
            }
        }
    };
}
