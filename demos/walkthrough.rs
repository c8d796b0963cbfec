//! Walkthrough example for singleton-family.
//!
//! Demonstrates:
//! - First caller's parameters winning on the plain registry
//! - Direct construction being refused
//! - Picking a variant by tag, swapping it after a reset
//! - The overriding variant decorating its name
//! - Variants refusing to create through their own access point
//!
//! Run with: `cargo run --example walkthrough`

use singleton_family::{
    Access, Family, InstanceParams, Named, RegistryError, Singleton, Type3, Variant,
};
use std::sync::Arc;

fn describe(instance: &dyn Named) {
    println!("   instance at: {:p}", instance);
    println!("   instance name: {}", instance.get_name());
    println!("   kind: {}", instance.kind());
}

fn report(result: Result<Arc<dyn Named>, RegistryError>) {
    match result {
        Ok(instance) => describe(&*instance),
        Err(error) => println!("   refused: {}", error),
    }
}

fn main() {
    println!("=== singleton-family: Walkthrough ===\n");

    // -------------------------------------------------------------------------
    // 1. Plain registry
    // -------------------------------------------------------------------------
    println!("1. Creating the first instance...");
    let first = Singleton::get_instance(InstanceParams::named("first created Singleton"))
        .expect("the registry always grants itself access");
    describe(&*first);

    println!("\n2. Asking again with different parameters...");
    let second = Singleton::get_instance(InstanceParams::named("second created Singleton"))
        .expect("the registry always grants itself access");
    describe(&*second);
    println!("   same instance: {}", Arc::ptr_eq(&first, &second));

    println!("\n3. Constructing directly...");
    match Singleton::construct(Access::direct(), InstanceParams::named("third")) {
        Ok(_) => println!("   unexpectedly allowed"),
        Err(error) => println!("   refused: {}", error),
    }

    // -------------------------------------------------------------------------
    // 2. Variant family
    // -------------------------------------------------------------------------
    println!("\n4. Creating a type0 instance through the root...");
    report(Family::get_instance("type0", InstanceParams::named("t0_1")));

    println!("\n5. Asking for type1 without a reset...");
    report(Family::get_instance("type1", InstanceParams::named("t1_1")));

    println!("\n6. Resetting and creating type2...");
    Family::reset_instance();
    report(Family::get_instance("type2", InstanceParams::named("t2_1")));

    println!("\n7. Resetting and creating the overriding type3...");
    Family::reset_instance();
    report(Family::get_instance("type3", InstanceParams::named("t3_1")));

    println!("\n8. Creating through Type3's own access point...");
    Family::reset_instance();
    report(Type3::get_instance("type3", InstanceParams::named("t3_2")));

    println!("\n9. Constructing Type3 directly...");
    match Type3::new(Access::direct(), InstanceParams::named("t3_3")) {
        Ok(_) => println!("   unexpectedly allowed"),
        Err(error) => println!("   refused: {}", error),
    }

    println!("\n10. Asking for an unknown tag...");
    report(Family::get_instance("type9", InstanceParams::named("t9")));

    println!("\n=== Done ===");
}
