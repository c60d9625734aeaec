use std::sync::Arc;

use bind::*;
use pretty_assertions::assert_eq;

#[injectable]
struct Config {
    name: String,
}

#[test]
fn default_scope_and_aliases_resolve_the_same_binding() {
    let catalog = Catalog::configure(vec![Arc::new(
        Instance::of("default".to_owned()).for_scope(""),
    )])
    .unwrap();

    assert_eq!(*catalog.resolve::<String>("").unwrap(), "default");
    assert_eq!(*catalog.resolve::<String>("-").unwrap(), "default");
    assert_eq!(*catalog.resolve::<String>("*").unwrap(), "default");
}

#[test]
fn distinct_scopes_are_distinct_bindings() {
    let catalog = Catalog::configure(vec![
        Arc::new(Instance::of("prod".to_owned()).for_scope("prod")),
        Arc::new(Instance::of("dev".to_owned()).for_scope("dev")),
    ])
    .unwrap();

    assert_eq!(*catalog.resolve::<String>("prod").unwrap(), "prod");
    assert_eq!(*catalog.resolve::<String>("dev").unwrap(), "dev");
}

#[test]
fn duplicate_registration_in_the_same_scope_is_rejected() {
    let err = Catalog::configure(vec![
        Arc::new(Instance::of("a".to_owned())),
        Arc::new(Instance::of("b".to_owned())),
    ])
    .unwrap_err();

    assert!(matches!(err, ConfigureError::Duplicate { .. }));
}

#[test]
fn unregistered_type_fails_with_no_such_binding() {
    let catalog = Catalog::configure(vec![]).unwrap();

    let err = catalog.resolve::<Config>("").unwrap_err();
    assert!(matches!(err, InjectionError::NoSuchBinding { .. }));
}

#[test]
fn new_instance_bypasses_the_registry_entirely() {
    let catalog = Catalog::configure(vec![]).unwrap();

    // No binding for `Config` was ever registered, yet new_instance still
    // succeeds because it never looks one up.
    let config = catalog.new_instance::<Config>().unwrap();
    assert_eq!(config.name, "");
}
