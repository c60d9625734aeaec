use std::sync::Arc;
use std::thread;

use bind::*;

#[injectable]
struct Greeting {
    #[bind]
    prefix: Arc<String>,
}

#[test]
fn catalog_resolves_concurrently_from_many_threads() {
    let catalog = Catalog::configure(vec![
        Arc::new(Instance::of("hello".to_owned())),
        Arc::new(Type::<Greeting>::new()),
    ])
    .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let catalog = catalog.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let greeting = catalog.get::<Greeting>().unwrap();
                    assert_eq!(*greeting.prefix, "hello");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn child_catalog_shadows_parent_bindings() {
    let parent = Catalog::configure(vec![Arc::new(Instance::of("parent".to_owned()))]).unwrap();

    let child = Catalog::chained(&parent, vec![Arc::new(Instance::of("child".to_owned()))]).unwrap();

    assert_eq!(*child.get::<String>().unwrap(), "child");
    assert_eq!(*parent.get::<String>().unwrap(), "parent");
}

#[test]
fn child_catalog_falls_back_to_parent_on_miss() {
    let parent = Catalog::configure(vec![Arc::new(Instance::of("from-parent".to_owned()))]).unwrap();

    let child = Catalog::chained(&parent, vec![]).unwrap();

    assert_eq!(*child.get::<String>().unwrap(), "from-parent");
}
