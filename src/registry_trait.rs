//! Core trait defining guarded registry behavior.
//!
//! This module provides the `SingletonApi` trait with default implementations for
//! lazy creation, idempotent retrieval, reset and tracing of a single guarded instance,
//! plus the `Guarded` trait for types whose construction is gated by an [`Access`] token.
//!
//! A registry holds at most one instance at a time. The first `get_instance` call
//! constructs and stores it; every later call returns the stored instance unchanged
//! until `reset_instance` empties the slot.

use std::sync::{Arc, Mutex, PoisonError};

use crate::{Access, RegistryError, RegistryEvent, Slot};

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` every time the registry is
/// interacted with. It must be thread-safe because the registry itself is globally shared.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Storage for a registry's optional trace callback.
///
/// `Mutex::new(None)` is `const`, so a hook can back a `static` directly.
pub type TraceHook = Mutex<Option<Arc<TraceCallback>>>;

/// A type that can only be built from an [`Access`] token bound to it.
///
/// Implementors must call [`Access::check`] before producing a value. The
/// token is consumed by the check, so it cannot be kept for a second build.
///
/// # Examples
///
/// ```rust
/// use singleton_family::{Access, Guarded, RegistryError};
///
/// struct Spooler {
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
/// assert!(Spooler::construct(Access::direct(), "lp0".to_string()).is_err());
/// ```
pub trait Guarded: Send + Sync + Sized + 'static {
    /// Parameters consumed by the first successful construction.
    type Params;

    /// Builds a new value.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DirectConstruction`] when `access` is not privileged.
    fn construct(access: Access<Self>, params: Self::Params) -> Result<Self, RegistryError>;
}

/// Core trait defining registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// three items from the implementor: the `slot`, the `trace` hook and `build`.
pub trait SingletonApi {
    /// The guarded instance type. May be a trait object.
    type Target: ?Sized + Send + Sync + 'static;

    /// Parameters accepted by the access point.
    type Params;

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace hook static.
    fn trace() -> &'static TraceHook;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback will be invoked for every registry operation, including refused ones.
    /// Replaces any previously installed callback.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// Does not affect the stored instance.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Emit a registry event using the current callback.
    ///
    /// The callback is cloned out of the hook before it runs, so it may call
    /// back into this registry.
    fn emit_event(&self, event: &RegistryEvent) {
        let callback = Self::trace()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the slot static.
    fn slot() -> &'static Slot<Self::Target>;

    /// Builds a new instance. Called with a registry token by `get_instance` only.
    ///
    /// The token is bound to `Target` and does not open the crate's own
    /// guarded types, which require a grant only their registries hold.
    ///
    /// # Errors
    ///
    /// Whatever the construction refuses with, e.g.
    /// [`RegistryError::DirectConstruction`] for a direct token.
    fn build(
        access: Access<Self::Target>,
        params: Self::Params,
    ) -> Result<Arc<Self::Target>, RegistryError>;

    /// Name reported in events and logs for a stored instance.
    fn describe(_instance: &Self::Target) -> &'static str {
        std::any::type_name::<Self::Target>()
    }

    /// Return the registered instance, creating it on first use.
    ///
    /// If the slot is populated the stored instance is returned and `params` is
    /// dropped unused: the first caller's parameters win until the next reset.
    ///
    /// # Errors
    ///
    /// Any error from `build`. The slot is left untouched on failure.
    fn get_instance(&self, params: Self::Params) -> Result<Arc<Self::Target>, RegistryError> {
        let outcome =
            Self::slot().get_or_try_init(|| Self::build(Access::privileged(), params));

        match outcome {
            Ok((instance, created)) => {
                let type_name = Self::describe(instance.as_ref());
                if created {
                    tracing::debug!(type_name, "registered new singleton instance");
                    self.emit_event(&RegistryEvent::Create { type_name });
                } else {
                    tracing::trace!(type_name, "returning registered singleton instance");
                    self.emit_event(&RegistryEvent::Fetch { type_name });
                }
                Ok(instance)
            }
            Err(error) => Err(self.reject(error)),
        }
    }

    /// Empty the slot unconditionally.
    ///
    /// Outstanding `Arc` handles to the previous instance stay valid; they are
    /// simply no longer reachable through the registry.
    fn reset_instance(&self) {
        let cleared = Self::slot().take().is_some();
        tracing::debug!(cleared, "reset singleton slot");
        self.emit_event(&RegistryEvent::Reset { cleared });
    }

    /// The registered instance, if any. Never creates one.
    fn current(&self) -> Option<Arc<Self::Target>> {
        Self::slot().peek()
    }

    /// Whether an instance is registered.
    fn is_set(&self) -> bool {
        Self::slot().is_occupied()
    }

    /// Report a refused call and hand the error back to the caller.
    fn reject(&self, error: RegistryError) -> RegistryError {
        tracing::warn!(%error, "singleton access refused");
        self.emit_event(&RegistryEvent::Denied {
            error: error.clone(),
        });
        error
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
