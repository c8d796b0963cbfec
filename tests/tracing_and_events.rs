//! Integration tests for tracing and event monitoring.
//!
//! This test demonstrates how to use the tracing callback system to monitor
//! registry operations, including refused calls, which is useful for debugging and logging.
//!
//! NOTE: Tests touching `Family` use #[serial] because they share its slot and hook.

use serial_test::serial;
use singleton_family::{
    define_singleton, Access, Family, Guarded, InstanceParams, Named, RegistryError,
    RegistryEvent, Type1, Variant,
};
use std::sync::{Arc, Mutex};

pub struct Spool {
    pub queue: String,
}

impl Guarded for Spool {
    type Params = &'static str;

    fn construct(access: Access<Self>, queue: &'static str) -> Result<Self, RegistryError> {
        access.check()?;
        Ok(Self {
            queue: queue.to_string(),
        })
    }
}

define_singleton!(traced1, Spool);
define_singleton!(traced2, Spool);
define_singleton!(traced3, Spool);

fn family_recorder() -> Arc<Mutex<Vec<String>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    Family::set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });
    events
}

#[test]
fn test_basic_tracing() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();

    traced1::set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });

    let _ = traced1::get_instance("lp0");
    let _ = traced1::get_instance("lp1");
    traced1::reset_instance();
    traced1::reset_instance();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 4);
    assert_eq!(
        captured[0],
        "create { type_name: tracing_and_events::Spool }"
    );
    assert_eq!(captured[1], "fetch { type_name: tracing_and_events::Spool }");
    assert_eq!(captured[2], "reset { cleared: true }");
    assert_eq!(captured[3], "reset { cleared: false }");
}

#[test]
fn test_clear_trace_callback() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();

    traced2::set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });

    let _ = traced2::get_instance("lp0");

    traced2::clear_trace_callback();

    let _ = traced2::get_instance("lp1");
    traced2::reset_instance();

    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_trace_callback_replacement() {
    let events1 = Arc::new(Mutex::new(Vec::new()));
    let events2 = Arc::new(Mutex::new(Vec::new()));

    let e1_clone = events1.clone();
    let e2_clone = events2.clone();

    traced3::set_trace_callback(move |event| {
        e1_clone.lock().unwrap().push(event.clone());
    });

    let _ = traced3::get_instance("lp0");

    traced3::set_trace_callback(move |event| {
        e2_clone.lock().unwrap().push(event.clone());
    });

    traced3::reset_instance();

    assert_eq!(events1.lock().unwrap().len(), 1);
    assert_eq!(
        events2.lock().unwrap().as_slice(),
        &[RegistryEvent::Reset { cleared: true }]
    );

    traced3::clear_trace_callback();
}

#[test]
#[serial]
fn test_family_reports_concrete_variant() {
    Family::reset_instance();
    let events = family_recorder();

    let _ = Family::get_instance("type2", InstanceParams::named("t2_1"));
    let _ = Family::get_instance("type0", InstanceParams::named("ignored"));

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0], "create { type_name: Type2 }");
    assert_eq!(captured[1], "fetch { type_name: Type2 }");
    drop(captured);

    Family::clear_trace_callback();
    Family::reset_instance();
}

#[test]
#[serial]
fn test_family_reports_refusals() {
    Family::reset_instance();
    let events = family_recorder();

    let _ = Family::get_instance("type9", InstanceParams::named("z"));
    let _ = Type1::get_instance("type1", InstanceParams::named("t1"));
    let _ = Family::construct(Access::direct(), "type0", InstanceParams::named("t0"));

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 3);
    assert_eq!(captured[0], "denied { error: unknown variant tag: type9 }");
    assert!(captured[1].starts_with("denied { error: creating an instance from "));
    assert!(captured[1].contains("Type1"));
    assert!(captured[2].contains("directly is not available"));
    drop(captured);

    Family::clear_trace_callback();
}

#[test]
#[serial]
fn test_callback_can_query_registry() {
    Family::reset_instance();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();

    // The callback runs after the slot lock is released.
    Family::set_trace_callback(move |_| {
        let kind = Family::current().map(|instance| instance.kind());
        seen_clone.lock().unwrap().push(kind);
    });

    let _ = Family::get_instance("type3", InstanceParams::named("t3"));
    Family::reset_instance();

    assert_eq!(*seen.lock().unwrap(), vec![Some("Type3"), None]);

    Family::clear_trace_callback();
}
