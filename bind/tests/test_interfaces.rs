use std::sync::Arc;

use bind::*;
use pretty_assertions::assert_eq;

trait Storage: Send + Sync {
    fn label(&self) -> &'static str;
}

trait Cache: Send + Sync {
    fn label(&self) -> &'static str;
}

#[injectable]
struct DiskStorage;

impl Storage for DiskStorage {
    fn label(&self) -> &'static str {
        "disk"
    }
}

#[injectable]
struct RedisCache;

impl Storage for RedisCache {
    fn label(&self) -> &'static str {
        "redis"
    }
}

impl Cache for RedisCache {
    fn label(&self) -> &'static str {
        "redis"
    }
}

#[test]
fn single_interface_binds_straight_to_its_implementation() {
    let catalog = Catalog::configure(vec![Arc::new(Implementation::<dyn Storage>::concrete::<
        DiskStorage,
    >(|v| v))])
    .unwrap();

    let storage = catalog.get::<dyn Storage>().unwrap();
    assert_eq!(storage.label(), "disk");
}

#[test]
fn indirection_is_unsatisfied_until_its_target_has_a_binding() {
    // `dyn Storage` chases to `RedisCache`, but nothing binds `RedisCache` yet.
    let catalog = Catalog::configure(vec![Arc::new(
        Implementation::<dyn Storage>::indirection::<RedisCache>(|v| v),
    )])
    .unwrap();

    let err = catalog.resolve::<dyn Storage>("").unwrap_err();
    assert!(matches!(err, InjectionError::UnsatisfiedAbstractType { .. }));
}

#[test]
fn indirection_is_satisfied_once_its_target_gets_a_binding() {
    let catalog = Catalog::configure(vec![
        Arc::new(Implementation::<dyn Storage>::indirection::<RedisCache>(|v| v)),
        Arc::new(Type::<RedisCache>::new()),
    ])
    .unwrap();

    let storage = catalog.resolve::<dyn Storage>("").unwrap();
    assert_eq!(storage.label(), "redis");

    // The same target is independently reachable through its own interface.
    let catalog = Catalog::configure(vec![
        Arc::new(Implementation::<dyn Cache>::concrete::<RedisCache>(|v| v)),
    ])
    .unwrap();
    assert_eq!(catalog.get::<dyn Cache>().unwrap().label(), "redis");
}
