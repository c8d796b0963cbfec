//! # Singleton Family
//!
//! Guarded single-instance registries: at most one live instance per registry,
//! created lazily through a designated access point and never through direct
//! construction.
//!
//! Two registries ship with the crate:
//!
//! - [`Singleton`] guards one concrete type.
//! - [`Family`] guards a closed set of interchangeable variants ([`Type0`] to
//!   [`Type3`]) behind one shared slot. The variant is picked by tag on the
//!   first call; variants cannot create or register anything themselves.
//!
//! ## Quick Start
//!
//! ```rust
//! use singleton_family::{Family, InstanceParams, Named, Variant, Type2};
//! use std::sync::Arc;
//!
//! let a = Family::get_instance("type0", InstanceParams::named("a")).unwrap();
//! let again = Family::get_instance("type1", InstanceParams::named("ignored")).unwrap();
//! assert!(Arc::ptr_eq(&a, &again));
//! assert_eq!(again.kind(), "Type0");
//!
//! // Only the root may create.
//! assert!(Type2::get_instance("type2", InstanceParams::named("b")).is_err());
//!
//! Family::reset_instance();
//! let b = Family::get_instance("type2", InstanceParams::named("b")).unwrap();
//! assert_eq!(b.kind(), "Type2");
//! assert!(!Arc::ptr_eq(&a, &b));
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: check-then-create runs under the slot lock, so racing first
//!   callers construct exactly one instance
//! - **Gated construction**: guarded constructors demand an [`Access`] token bound
//!   to their type that only a registry can mint, and the crate's own types accept
//!   only the grant their own registry holds
//! - **Tracing support**: per-registry callback for [`RegistryEvent`]s, plus
//!   `tracing` spans and events for every operation
//!
//! ## Building your own
//!
//! - [`define_singleton!`] - declare an isolated registry for any [`Guarded`] type
//! - [`SingletonApi`] - implement by hand for full control over storage and building
//! - [`VariantTable`] - closed tag to constructor mapping, checked at compile time

mod access;
pub mod family;
mod instance;
mod macros;
mod registry_error;
mod registry_event;
mod registry_trait;
mod simple;
mod slot;
mod variant_table;

pub use access::Access;
pub use family::{Family, Type0, Type1, Type2, Type3, Variant};
pub use instance::{InstanceParams, Named};
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use registry_trait::{Guarded, SingletonApi, TraceCallback, TraceHook};
pub use simple::Singleton;
pub use slot::Slot;
pub use variant_table::{VariantEntry, VariantFactory, VariantTable};
