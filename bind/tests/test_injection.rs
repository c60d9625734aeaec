use std::sync::Arc;

use bind::*;
use pretty_assertions::assert_eq;

#[injectable]
struct Database {
    #[bind]
    url: Arc<String>,
}

#[injectable]
struct UserRepository {
    #[bind]
    db: Arc<Database>,

    #[bind(scope = "cache")]
    cache_url: Arc<String>,

    // Untagged: left at Default::default(), never looked up in the catalog.
    retry_count: u32,
}

#[test]
fn tagged_fields_are_resolved_and_untagged_fields_default() {
    let catalog = Catalog::configure(vec![
        Arc::new(Type::<Database>::new()),
        Arc::new(Instance::of("postgres://prod".to_owned())),
        Arc::new(Instance::of("redis://cache".to_owned()).for_scope("cache")),
        Arc::new(Type::<UserRepository>::new()),
    ])
    .unwrap();

    let repo = catalog.get::<UserRepository>().unwrap();
    assert_eq!(*repo.db.url, "postgres://prod");
    assert_eq!(*repo.cache_url, "redis://cache");
    assert_eq!(repo.retry_count, 0);
}

#[test]
fn type_binding_never_memoizes() {
    let catalog = Catalog::configure(vec![
        Arc::new(Type::<Database>::new()),
        Arc::new(Instance::of("postgres://prod".to_owned())),
    ])
    .unwrap();

    let a = catalog.get::<Database>().unwrap();
    let b = catalog.get::<Database>().unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn instance_binding_preserves_identity() {
    let shared = Arc::new(Database {
        url: Arc::new("sqlite://mem".to_owned()),
    });

    let catalog = Catalog::configure(vec![Arc::new(Instance::of(shared.clone()))]).unwrap();

    let a = catalog.get::<Arc<Database>>().unwrap();
    assert!(Arc::ptr_eq(&shared, &*a));
}
