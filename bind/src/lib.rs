//! A context-scoped dependency injection container.
//!
//! Documentation is under construction!
//!
//! # Examples
//!
//! ## Basic dependency resolution
//!
//! As a user of type `A` we only care about getting an instance to use - the
//! life-cycle of `A` and its dependency `B` remain hidden from us.
//!
//! ```
//! use bind::*;
//! use std::sync::Arc;
//!
//! #[injectable]
//! struct A {
//!     #[bind]
//!     b: Arc<B>,
//! }
//!
//! impl A {
//!     fn foo(&self) -> String {
//!         format!("a::{}", self.b.bar())
//!     }
//! }
//!
//! #[injectable]
//! struct B;
//!
//! impl B {
//!     fn bar(&self) -> String {
//!         "b".to_owned()
//!     }
//! }
//!
//! let catalog = Catalog::configure(vec![
//!     Arc::new(Type::<A>::new()),
//!     Arc::new(Type::<B>::new()),
//! ])
//! .unwrap();
//!
//! let a = catalog.get::<A>().unwrap();
//! assert_eq!(a.foo(), "a::b");
//! ```
//!
//! ## Interfaces
//!
//! An [`Implementation`] binding lets a concrete type stand in for a trait it
//! implements, and an [`Implementation::indirection`] lets one interface
//! chase through to another, one binding at a time.
//!
//! ```
//! use bind::*;
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! #[injectable]
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_owned()
//!     }
//! }
//!
//! let catalog = Catalog::configure(vec![Arc::new(
//!     Implementation::<dyn Greeter>::concrete::<English>(|v| v),
//! )])
//! .unwrap();
//!
//! assert_eq!(catalog.get::<dyn Greeter>().unwrap().greet(), "hello");
//! ```
//!
//! ## Eager, memoized bindings
//!
//! [`once`] constructs its value exactly once, at `configure` time, and every
//! later resolve returns that same instance.
//!
//! ```
//! use bind::*;
//! use std::sync::{Arc, Mutex};
//!
//! #[injectable]
//! struct Counter {
//!     count: Mutex<u32>,
//! }
//!
//! let catalog = Catalog::configure(vec![Arc::new(once::<Counter>())]).unwrap();
//!
//! let a = catalog.get::<Counter>().unwrap();
//! let b = catalog.get::<Counter>().unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//! ```

pub use bind_impl::injectable;

mod bindings;
pub use bindings::{
    once, Binding, ConcreteImplementation, IndirectionBinding, Implementation, Instance, Provider,
    Type,
};

mod catalog;
pub use catalog::{Catalog, CatalogBuilder};

pub mod context;

mod errors;
pub use errors::{ConfigureError, InjectionError};

mod injectable;
pub use injectable::Injectable;

mod macros;

mod reflect;
pub use reflect::TypeInfo;

mod registry;
