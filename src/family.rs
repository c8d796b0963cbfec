//! A closed family of interchangeable variants sharing one registered instance.
//!
//! [`Family`] is the root identity: the only access point that resolves a tag,
//! constructs the matching variant and stores it. The store is the root's slot,
//! so after a reset the next call may register a different variant in its place.
//!
//! Each variant ([`Type0`] to [`Type3`]) has its own `get_instance`, which always
//! refuses with [`RegistryError::SubclassAccess`], and its own `new`, which refuses
//! with [`RegistryError::DirectConstruction`] unless the root is the caller. The
//! grant `new` requires is raised only inside the root's creation routine, so a
//! token handed to some other [`SingletonApi`] implementation cannot open it.
//!
//! ```rust
//! use singleton_family::{Family, InstanceParams, Named};
//!
//! let first = Family::get_instance("type3", InstanceParams::named("x")).unwrap();
//! assert_eq!(first.kind(), "Type3");
//! assert_eq!(first.get_name(), "This instance is \"x\" of Type3.");
//!
//! Family::reset_instance();
//! let second = Family::get_instance("type0", InstanceParams::named("x")).unwrap();
//! assert_eq!(second.get_name(), "x");
//! ```

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use crate::{
    Access, InstanceParams, Named, RegistryError, RegistryEvent, SingletonApi, Slot, TraceHook,
    VariantEntry, VariantTable,
};

mod sealed {
    pub trait Sealed {}
}

/// A member of the [`Family`] variant set.
///
/// Sealed: the set is closed, and the access-point behaviour below must not be
/// overridden.
pub trait Variant: Named + Sized + sealed::Sealed {
    /// Key under which the variant is listed in the family table.
    const TAG: &'static str;

    /// Builds the variant.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DirectConstruction`] unless called by the family root
    /// while it is creating the registered instance.
    fn new(access: Access<Self>, params: InstanceParams) -> Result<Self, RegistryError>;

    /// Access point reached through the variant's own identity.
    ///
    /// # Errors
    ///
    /// Always [`RegistryError::SubclassAccess`], whether or not the family slot is
    /// populated. The slot is left unchanged.
    fn get_instance(tag: &str, params: InstanceParams) -> Result<Arc<dyn Named>, RegistryError> {
        tracing::debug!(tag, name = params.name(), "variant access point called");
        Err(ROOT.reject(RegistryError::SubclassAccess {
            identity: std::any::type_name::<Self>(),
        }))
    }
}

fn build<V: Variant>(
    access: Access<dyn Named>,
    params: InstanceParams,
) -> Result<Arc<dyn Named>, RegistryError> {
    let variant: Arc<dyn Named> = Arc::new(V::new(access.retarget(), params)?);
    Ok(variant)
}

macro_rules! plain_variant {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            name: String,
        }

        impl sealed::Sealed for $name {}

        impl Named for $name {
            fn label(&self) -> &str {
                &self.name
            }

            fn kind(&self) -> &'static str {
                stringify!($name)
            }
        }

        impl Variant for $name {
            const TAG: &'static str = $tag;

            fn new(access: Access<Self>, params: InstanceParams) -> Result<Self, RegistryError> {
                access.check_owned()?;
                Ok(Self {
                    name: params.into_name(),
                })
            }
        }
    };
}

plain_variant!(
    /// Variant listed under `"type0"`.
    Type0,
    "type0"
);
plain_variant!(
    /// Variant listed under `"type1"`.
    Type1,
    "type1"
);
plain_variant!(
    /// Variant listed under `"type2"`.
    Type2,
    "type2"
);

/// Variant listed under `"type3"`. Decorates its label in `get_name`.
#[derive(Debug)]
pub struct Type3 {
    name: String,
}

impl sealed::Sealed for Type3 {}

impl Named for Type3 {
    fn label(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "Type3"
    }

    fn get_name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("This instance is \"{}\" of Type3.", self.name))
    }
}

impl Variant for Type3 {
    const TAG: &'static str = "type3";

    fn new(access: Access<Self>, params: InstanceParams) -> Result<Self, RegistryError> {
        access.check_owned()?;
        Ok(Self {
            name: params.into_name(),
        })
    }
}

const ENTRIES: &[VariantEntry] = &[
    VariantEntry::new(Type0::TAG, build::<Type0>),
    VariantEntry::new(Type1::TAG, build::<Type1>),
    VariantEntry::new(Type2::TAG, build::<Type2>),
    VariantEntry::new(Type3::TAG, build::<Type3>),
];

static TABLE: VariantTable = VariantTable::new(ENTRIES);

// -------------------------------------------------------------------------------------------------
// Root
// -------------------------------------------------------------------------------------------------

static SLOT: Slot<dyn Named> = Slot::new();
static TRACE: TraceHook = Mutex::new(None);

/// Request handled by the root's creation routine.
#[derive(Debug)]
struct VariantRequest {
    tag: String,
    params: InstanceParams,
}

/// Resolves the tag and runs the factory with `access` as given.
fn create(
    access: Access<dyn Named>,
    request: VariantRequest,
) -> Result<Arc<dyn Named>, RegistryError> {
    let factory = TABLE.resolve(&request.tag)?;
    factory(access, request.params)
}

struct Root;

impl SingletonApi for Root {
    type Target = dyn Named;
    type Params = VariantRequest;

    fn trace() -> &'static TraceHook {
        &TRACE
    }

    fn slot() -> &'static Slot<dyn Named> {
        &SLOT
    }

    fn build(
        access: Access<dyn Named>,
        request: VariantRequest,
    ) -> Result<Arc<dyn Named>, RegistryError> {
        create(access.into_owned(), request)
    }

    fn describe(instance: &dyn Named) -> &'static str {
        instance.kind()
    }
}

const ROOT: Root = Root;

/// Root identity of the variant family.
///
/// All creation and reset goes through here.
#[derive(Debug, Clone, Copy)]
pub struct Family;

impl Family {
    /// Return the registered instance, creating the variant listed under `tag`
    /// if the slot is empty.
    ///
    /// When the slot is populated both `tag` and `params` are ignored, even if
    /// `tag` names a different or unknown variant.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownVariant`] if the slot is empty and `tag` is not in
    /// the table. The slot stays empty.
    pub fn get_instance(
        tag: &str,
        params: InstanceParams,
    ) -> Result<Arc<dyn Named>, RegistryError> {
        ROOT.get_instance(VariantRequest {
            tag: tag.to_string(),
            params,
        })
    }

    /// Construct a variant through the root without registering it.
    ///
    /// Only useful to demonstrate the gate: every variant refuses whatever token
    /// arrives here, including one minted for another registry's `build`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownVariant`] for an unlisted tag, otherwise
    /// [`RegistryError::DirectConstruction`] naming the resolved variant.
    pub fn construct(
        access: Access<dyn Named>,
        tag: &str,
        params: InstanceParams,
    ) -> Result<Arc<dyn Named>, RegistryError> {
        create(
            access,
            VariantRequest {
                tag: tag.to_string(),
                params,
            },
        )
        .map_err(|error| ROOT.reject(error))
    }

    /// Empty the family slot, whatever variant it holds.
    pub fn reset_instance() {
        ROOT.reset_instance()
    }

    /// The registered instance, if any. Never creates one.
    pub fn current() -> Option<Arc<dyn Named>> {
        ROOT.current()
    }

    pub fn is_set() -> bool {
        ROOT.is_set()
    }

    /// Tags of every variant, in table order.
    pub fn tags() -> impl Iterator<Item = &'static str> {
        TABLE.tags()
    }

    /// Set a tracing callback for family operations, including refused variant calls.
    pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        ROOT.set_trace_callback(callback)
    }

    pub fn clear_trace_callback() {
        ROOT.clear_trace_callback()
    }
}
