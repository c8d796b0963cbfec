//! Integration tests for registries implemented outside the crate.
//!
//! A hand-written `SingletonApi` receives a token for its own `Target`. That
//! token must not open `Singleton` or any `Family` variant, whether it is used
//! inside `build` or kept and used later.
//!
//! NOTE: Tests touching `Singleton` or `Family` use #[serial] because they share
//! the crate's slots.

use serial_test::serial;
use singleton_family::{
    Access, Family, InstanceParams, Named, RegistryError, Singleton, SingletonApi, Slot,
    TraceHook, Type3, Variant,
};
use std::any::type_name;
use std::sync::{Arc, Mutex};

// ============================================================================
// A registry that tries to build `Singleton` itself
// ============================================================================

static SINGLETON_SLOT: Slot<Singleton> = Slot::new();
static SINGLETON_TRACE: TraceHook = Mutex::new(None);

struct ShadowSingleton;

impl SingletonApi for ShadowSingleton {
    type Target = Singleton;
    type Params = InstanceParams;

    fn trace() -> &'static TraceHook {
        &SINGLETON_TRACE
    }

    fn slot() -> &'static Slot<Singleton> {
        &SINGLETON_SLOT
    }

    fn build(
        access: Access<Singleton>,
        params: InstanceParams,
    ) -> Result<Arc<Singleton>, RegistryError> {
        Singleton::construct(access, params).map(Arc::new)
    }
}

const SHADOW_SINGLETON: ShadowSingleton = ShadowSingleton;

// ============================================================================
// A registry that tries to build `Type3` itself
// ============================================================================

static TYPE3_SLOT: Slot<Type3> = Slot::new();
static TYPE3_TRACE: TraceHook = Mutex::new(None);

struct ShadowType3;

impl SingletonApi for ShadowType3 {
    type Target = Type3;
    type Params = InstanceParams;

    fn trace() -> &'static TraceHook {
        &TYPE3_TRACE
    }

    fn slot() -> &'static Slot<Type3> {
        &TYPE3_SLOT
    }

    fn build(access: Access<Type3>, params: InstanceParams) -> Result<Arc<Type3>, RegistryError> {
        Type3::new(access, params).map(Arc::new)
    }
}

const SHADOW_TYPE3: ShadowType3 = ShadowType3;

// ============================================================================
// A registry that keeps its token instead of using it
// ============================================================================

static KEPT_SINGLETON: Mutex<Option<Access<Singleton>>> = Mutex::new(None);
static KEEPER_SLOT: Slot<Singleton> = Slot::new();
static KEEPER_TRACE: TraceHook = Mutex::new(None);

struct Keeper;

impl SingletonApi for Keeper {
    type Target = Singleton;
    type Params = ();

    fn trace() -> &'static TraceHook {
        &KEEPER_TRACE
    }

    fn slot() -> &'static Slot<Singleton> {
        &KEEPER_SLOT
    }

    fn build(access: Access<Singleton>, _: ()) -> Result<Arc<Singleton>, RegistryError> {
        *KEPT_SINGLETON.lock().unwrap() = Some(access);
        Err(RegistryError::UnknownVariant {
            tag: "kept".to_string(),
        })
    }
}

const KEEPER: Keeper = Keeper;

// ============================================================================
// A registry over `dyn Named` that routes through the family root
// ============================================================================

static NAMED_SLOT: Slot<dyn Named> = Slot::new();
static NAMED_TRACE: TraceHook = Mutex::new(None);

struct ShadowFamily;

impl SingletonApi for ShadowFamily {
    type Target = dyn Named;
    type Params = &'static str;

    fn trace() -> &'static TraceHook {
        &NAMED_TRACE
    }

    fn slot() -> &'static Slot<dyn Named> {
        &NAMED_SLOT
    }

    fn build(
        access: Access<dyn Named>,
        tag: &'static str,
    ) -> Result<Arc<dyn Named>, RegistryError> {
        Family::construct(access, tag, InstanceParams::named("shadow"))
    }
}

const SHADOW_FAMILY: ShadowFamily = ShadowFamily;

// ============================================================================
// Tests
// ============================================================================

#[test]
#[serial]
fn test_user_registry_cannot_build_singleton() {
    Singleton::reset_instance();
    let official = Singleton::get_instance(InstanceParams::named("official")).unwrap();

    let err = SHADOW_SINGLETON
        .get_instance(InstanceParams::named("rogue"))
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::DirectConstruction {
            type_name: type_name::<Singleton>()
        }
    );
    assert!(!SHADOW_SINGLETON.is_set());
    assert!(Arc::ptr_eq(&official, &Singleton::current().unwrap()));
    assert_eq!(Arc::strong_count(&official), 2); // official + slot

    Singleton::reset_instance();
}

#[test]
#[serial]
fn test_kept_token_cannot_build_singleton_later() {
    Singleton::reset_instance();

    assert!(KEEPER.get_instance(()).is_err());
    let token = KEPT_SINGLETON.lock().unwrap().take().unwrap();

    let err = Singleton::construct(token, InstanceParams::named("free")).unwrap_err();

    assert!(matches!(err, RegistryError::DirectConstruction { .. }));
    assert!(!Singleton::is_set());
    assert!(!KEEPER.is_set());
}

#[test]
#[serial]
fn test_user_registry_cannot_build_type3() {
    Family::reset_instance();

    let err = SHADOW_TYPE3
        .get_instance(InstanceParams::named("free3"))
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::DirectConstruction {
            type_name: type_name::<Type3>()
        }
    );
    assert!(!SHADOW_TYPE3.is_set());
    assert!(!Family::is_set());
}

#[test]
#[serial]
fn test_user_registry_cannot_build_through_family_root() {
    Family::reset_instance();

    for tag in Family::tags() {
        SHADOW_FAMILY.reset_instance();
        let err = SHADOW_FAMILY.get_instance(tag).unwrap_err();
        assert!(matches!(err, RegistryError::DirectConstruction { .. }));
    }

    assert!(!SHADOW_FAMILY.is_set());
    assert!(!Family::is_set());
}

#[test]
#[serial]
fn test_crate_registries_still_create() {
    Singleton::reset_instance();
    Family::reset_instance();

    let plain = Singleton::get_instance(InstanceParams::named("plain")).unwrap();
    let decorated = Family::get_instance("type3", InstanceParams::named("t3")).unwrap();

    assert_eq!(plain.label(), "plain");
    assert_eq!(decorated.get_name(), "This instance is \"t3\" of Type3.");

    Singleton::reset_instance();
    Family::reset_instance();
}
