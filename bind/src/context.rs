//! The container has no bespoke "context" type of its own: a [`crate::Catalog`]
//! is already a cheap, `Clone`-able handle, and every host framework in the
//! Rust ecosystem already has its own mechanism for threading a value through
//! request handling (typed extension maps, task-locals, explicit arguments).
//! Building another one here would just duplicate what callers already have.
//!
//! `CATALOG_EXTENSION_KEY` exists only for hosts that key their ambient
//! extensions by string rather than by type; it is otherwise unused by this
//! crate.

/// Namespaced string key for hosts that attach a [`crate::Catalog`] to a
/// string-keyed extension map instead of a type-keyed one.
pub const CATALOG_EXTENSION_KEY: &str = "bind::catalog";
