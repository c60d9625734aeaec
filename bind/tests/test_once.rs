use std::sync::{Arc, Mutex};

use bind::*;
use pretty_assertions::assert_eq;

// Hand-implements `Injectable` instead of using `#[injectable]`, since it
// needs a custom `init_after` override - not something the generated impl
// exposes a hook for.
struct Counter {
    count: Mutex<u32>,
}

impl Injectable for Counter {
    fn construct(_catalog: &Catalog) -> Result<Self, InjectionError> {
        Ok(Counter {
            count: Mutex::new(0),
        })
    }

    fn init_after(&mut self) -> Result<(), InjectionError> {
        *self.count.lock().unwrap() += 1;
        Ok(())
    }
}

#[test]
fn once_constructs_and_initializes_exactly_once() {
    let catalog = Catalog::configure(vec![Arc::new(once::<Counter>())]).unwrap();

    let a = catalog.get::<Counter>().unwrap();
    let b = catalog.get::<Counter>().unwrap();
    let c = catalog.resolve::<Counter>("-").unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&a, &c));
    assert_eq!(*a.count.lock().unwrap(), 1);
}

#[test]
fn plain_type_binding_runs_init_after_on_every_resolve() {
    let catalog = Catalog::configure(vec![Arc::new(Type::<Counter>::new())]).unwrap();

    let a = catalog.get::<Counter>().unwrap();
    let b = catalog.get::<Counter>().unwrap();

    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(*a.count.lock().unwrap(), 1);
    assert_eq!(*b.count.lock().unwrap(), 1);
}
