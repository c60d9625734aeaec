use std::cell::Cell;
use std::sync::Arc;

use crate::bindings::{unerase, Binding, ErasedArc};
use crate::errors::{ConfigureError, InjectionError};
use crate::injectable::Injectable;
use crate::reflect::{normalize_scope, TypeInfo};
use crate::registry::Registry;

/////////////////////////////////////////////////////////////////////////////////////////

/// An indirection binding's `solve()` recurses back into `Catalog::resolve`
/// for its target type, which may itself be another indirection. This caps
/// that recursion rather than stack-overflowing on a binding cycle the
/// registry never detected at configure time.
const MAX_CHASE_DEPTH: usize = 16;

thread_local! {
    static CHASE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/////////////////////////////////////////////////////////////////////////////////////////

/// A handle to a configured set of bindings. Cheap to `Clone` (`Arc`-backed);
/// this is also the value applications pass through their own ambient
/// context mechanism (see [`crate::context`]) - there is no separate
/// "Context" wrapper type.
#[derive(Clone)]
pub struct Catalog(pub(crate) Arc<Registry>);

impl Catalog {
    pub(crate) fn from_registry(registry: Arc<Registry>) -> Self {
        Self(registry)
    }

    /// Creates a standalone catalog and configures it in one step.
    pub fn configure(bindings: Vec<Arc<dyn Binding>>) -> Result<Self, ConfigureError> {
        let registry = Registry::new(None);
        registry.configure(bindings)?;
        Ok(Self(registry))
    }

    /// Creates a catalog chained to `parent` and configures it in one step.
    /// A lookup miss in this catalog falls back to `parent`.
    pub fn chained(parent: &Catalog, bindings: Vec<Arc<dyn Binding>>) -> Result<Self, ConfigureError> {
        let registry = Registry::new(Some(parent.0.clone()));
        registry.configure(bindings)?;
        Ok(Self(registry))
    }

    /// Resolves `T` registered under `scope`. `""`, `"-"`, and `"*"` all mean
    /// the default scope.
    pub fn resolve<T>(&self, scope: &str) -> Result<Arc<T>, InjectionError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let erased = self.resolve_erased(TypeInfo::of::<T>(), scope)?;
        Ok(unerase::<T>(erased))
    }

    /// Shorthand for `resolve::<T>("")`.
    pub fn get<T>(&self) -> Result<Arc<T>, InjectionError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve::<T>("")
    }

    /// Constructs a fresh `T` with its tagged fields injected, without ever
    /// registering or looking up a binding for `T` itself. Distinct from
    /// `resolve`, which always requires a prior binding.
    pub fn new_instance<T: Injectable>(&self) -> Result<T, InjectionError> {
        T::construct(self)
    }

    pub(crate) fn resolve_erased(
        &self,
        t: TypeInfo,
        scope: &str,
    ) -> Result<ErasedArc, InjectionError> {
        let scope = normalize_scope(scope);

        let depth = CHASE_DEPTH.with(Cell::get);
        if depth >= MAX_CHASE_DEPTH {
            return Err(InjectionError::CyclicBinding { source_type: t });
        }

        let binding = self.0.find(t, scope).ok_or(InjectionError::NoSuchBinding {
            source_type: t,
            scope: scope.to_owned(),
        })?;

        CHASE_DEPTH.with(|d| d.set(depth + 1));
        let result = binding.solve(self);
        CHASE_DEPTH.with(|d| d.set(depth));
        result
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

/// Builds up a catalog's bindings across one or more `configure` calls before
/// freezing it with `build()`. Contrast with [`Catalog::configure`], which
/// configures and freezes in a single call.
pub struct CatalogBuilder {
    registry: Arc<Registry>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(None),
        }
    }

    pub fn chained(parent: &Catalog) -> Self {
        Self {
            registry: Registry::new(Some(parent.0.clone())),
        }
    }

    /// May be called more than once; each call's bindings accumulate into
    /// the same registry and eager bindings are initialized per call.
    pub fn configure(&self, bindings: Vec<Arc<dyn Binding>>) -> Result<&Self, ConfigureError> {
        self.registry.configure(bindings)?;
        Ok(self)
    }

    pub fn build(self) -> Catalog {
        Catalog(self.registry)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
