use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::errors::InjectionError;
use crate::injectable::Injectable;
use crate::reflect::TypeInfo;

/////////////////////////////////////////////////////////////////////////////////////////

pub(crate) type ErasedArc = Arc<dyn Any + Send + Sync>;

/// Wraps `Arc<T>` as an opaque, type-erased payload. `T` may be unsized (a
/// trait object), since it is `Arc<T>` - always `Sized` as a smart-pointer
/// value - that goes into the `Any`, not `T` itself.
pub(crate) fn erase<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> ErasedArc {
    Arc::new(value)
}

/// Inverse of [`erase`]. Panics if `erased` was not produced by `erase::<T>`;
/// the registry/resolver guarantee this never happens because a binding's
/// `source_type()`/`target_type()` is always the same `T` its `solve()`
/// erases.
pub(crate) fn unerase<T: ?Sized + Send + Sync + 'static>(erased: ErasedArc) -> Arc<T> {
    (*erased
        .downcast::<Arc<T>>()
        .expect("binding produced a value of the wrong type"))
    .clone()
}

/////////////////////////////////////////////////////////////////////////////////////////

/// A single entry in the binding registry. Knows how to produce a value for
/// its declared source type, and - for interface indirection - which target
/// type the resolver should chase if this binding cannot itself produce one.
pub trait Binding: Send + Sync {
    fn source_type(&self) -> TypeInfo;
    fn scope(&self) -> &str;
    fn target_type(&self) -> Option<TypeInfo> {
        None
    }
    fn is_eager(&self) -> bool {
        false
    }
    fn solve(&self, catalog: &Catalog) -> Result<ErasedArc, InjectionError>;
}

/////////////////////////////////////////////////////////////////////////////////////////

/// Binds a concrete type to itself: resolving `T` constructs a fresh `T`,
/// with its `#[bind(...)]`-tagged fields injected.
pub struct Type<T> {
    scope: String,
    eager: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Injectable + Send + Sync + 'static> Type<T> {
    pub fn new() -> Self {
        Self {
            scope: String::new(),
            eager: false,
            _marker: PhantomData,
        }
    }

    pub fn for_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Marks this binding eager: it is constructed once during `configure`,
    /// and every subsequent resolve returns that same instance.
    pub fn eager(mut self) -> Self {
        self.eager = true;
        self
    }
}

impl<T: Injectable + Send + Sync + 'static> Default for Type<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Injectable + Send + Sync + 'static> Binding for Type<T> {
    fn source_type(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn scope(&self) -> &str {
        &self.scope
    }

    fn is_eager(&self) -> bool {
        self.eager
    }

    fn solve(&self, catalog: &Catalog) -> Result<ErasedArc, InjectionError> {
        let value = T::construct(catalog)?;
        Ok(erase(Arc::new(value)))
    }
}

/// Shorthand for an eager [`Type<T>`] binding: `T` is constructed once, when
/// `configure` runs, and every subsequent resolve returns that same instance.
pub fn once<T: Injectable + Send + Sync + 'static>() -> Type<T> {
    Type::new().eager()
}

/////////////////////////////////////////////////////////////////////////////////////////

/// Namespace for the two `Implementation` binding constructors. Not
/// constructed directly - see [`Implementation::concrete`] and
/// [`Implementation::indirection`].
pub struct Implementation<Iface: ?Sized>(PhantomData<fn() -> Iface>);

impl<Iface: ?Sized + Send + Sync + 'static> Implementation<Iface> {
    /// Binds `Iface` to a concrete, constructible `Impl`. `cast` coerces the
    /// freshly built `Arc<Impl>` up to `Arc<Iface>`; ordinarily just `|v| v`,
    /// relying on Rust's built-in unsized coercion (no nightly features
    /// needed, since `Impl` is concrete at the call site).
    pub fn concrete<Impl>(cast: fn(Arc<Impl>) -> Arc<Iface>) -> ConcreteImplementation<Iface, Impl>
    where
        Impl: Injectable + Send + Sync + 'static,
    {
        ConcreteImplementation {
            scope: String::new(),
            cast,
            _marker: PhantomData,
        }
    }

    /// Registers a chase edge: resolving `Iface` here delegates to whatever
    /// binding `Target` has (looked up at the default scope, per the
    /// resolver's chase rule), then applies `cast` to the result. `Target`
    /// is free to be unregistered when this binding is added - the chase
    /// simply fails with `NoSuchBinding` until a binding for `Target` shows
    /// up, satisfying the indirection from that point on.
    pub fn indirection<Target>(
        cast: fn(Arc<Target>) -> Arc<Iface>,
    ) -> IndirectionBinding<Iface, Target>
    where
        Target: ?Sized + Send + Sync + 'static,
    {
        IndirectionBinding {
            scope: String::new(),
            cast,
            _marker: PhantomData,
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

pub struct ConcreteImplementation<Iface: ?Sized, Impl> {
    scope: String,
    cast: fn(Arc<Impl>) -> Arc<Iface>,
    _marker: PhantomData<fn() -> Impl>,
}

impl<Iface, Impl> ConcreteImplementation<Iface, Impl>
where
    Iface: ?Sized + Send + Sync + 'static,
    Impl: Injectable + Send + Sync + 'static,
{
    pub fn for_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }
}

impl<Iface, Impl> Binding for ConcreteImplementation<Iface, Impl>
where
    Iface: ?Sized + Send + Sync + 'static,
    Impl: Injectable + Send + Sync + 'static,
{
    fn source_type(&self) -> TypeInfo {
        TypeInfo::of::<Iface>()
    }

    fn scope(&self) -> &str {
        &self.scope
    }

    fn solve(&self, catalog: &Catalog) -> Result<ErasedArc, InjectionError> {
        let value = Impl::construct(catalog)?;
        let iface: Arc<Iface> = (self.cast)(Arc::new(value));
        Ok(erase(iface))
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

pub struct IndirectionBinding<Iface: ?Sized, Target: ?Sized> {
    scope: String,
    cast: fn(Arc<Target>) -> Arc<Iface>,
    _marker: PhantomData<fn() -> Iface>,
}

impl<Iface, Target> IndirectionBinding<Iface, Target>
where
    Iface: ?Sized + Send + Sync + 'static,
    Target: ?Sized + Send + Sync + 'static,
{
    pub fn for_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }
}

impl<Iface, Target> Binding for IndirectionBinding<Iface, Target>
where
    Iface: ?Sized + Send + Sync + 'static,
    Target: ?Sized + Send + Sync + 'static,
{
    fn source_type(&self) -> TypeInfo {
        TypeInfo::of::<Iface>()
    }

    fn scope(&self) -> &str {
        &self.scope
    }

    fn target_type(&self) -> Option<TypeInfo> {
        Some(TypeInfo::of::<Target>())
    }

    fn solve(&self, catalog: &Catalog) -> Result<ErasedArc, InjectionError> {
        let target = catalog.resolve::<Target>("").map_err(|err| match err {
            // A missing target is reported against the interface the caller
            // actually asked for, not the intermediate hop.
            InjectionError::NoSuchBinding { .. } => InjectionError::UnsatisfiedAbstractType {
                source_type: self.source_type(),
                target_type: TypeInfo::of::<Target>(),
            },
            other => other,
        })?;
        Ok(erase((self.cast)(target)))
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

/// Binds a pre-built value. Cloning it on every resolve is cheap for
/// `Arc`-shaped `T` (a refcount bump preserving identity) and a real copy for
/// plain value types such as `String` - `Clone::clone` does the right thing
/// in both cases without a runtime kind switch.
pub struct Instance<T> {
    value: T,
    scope: String,
}

impl<T: Clone + Send + Sync + 'static> Instance<T> {
    pub fn of(value: T) -> Self {
        Self {
            value,
            scope: String::new(),
        }
    }

    pub fn for_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }
}

impl<T: Clone + Send + Sync + 'static> Binding for Instance<T> {
    fn source_type(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn scope(&self) -> &str {
        &self.scope
    }

    fn solve(&self, _catalog: &Catalog) -> Result<ErasedArc, InjectionError> {
        Ok(erase(Arc::new(self.value.clone())))
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

/// Binds a factory function. Unlike [`Type<T>`], the factory is responsible
/// for building `T` itself; this binding then injects `T`'s tagged fields
/// into the factory's result and runs its post-construction hook, so a
/// `Provider` still participates fully in structural injection.
pub struct Provider<T> {
    scope: String,
    factory: Arc<dyn Fn() -> Result<T, InjectionError> + Send + Sync>,
}

impl<T: Injectable + Send + Sync + 'static> Provider<T> {
    pub fn new(factory: impl Fn() -> Result<T, InjectionError> + Send + Sync + 'static) -> Self {
        Self {
            scope: String::new(),
            factory: Arc::new(factory),
        }
    }

    pub fn for_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }
}

impl<T: Injectable + Send + Sync + 'static> Binding for Provider<T> {
    fn source_type(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn scope(&self) -> &str {
        &self.scope
    }

    fn solve(&self, catalog: &Catalog) -> Result<ErasedArc, InjectionError> {
        let mut value = (self.factory)()?;
        value.inject_fields(catalog)?;
        value.init_after()?;
        Ok(erase(Arc::new(value)))
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

/// The registry slot an eager/`once` binding is replaced with once it has
/// been solved: every later resolve just clones the already-produced value,
/// rather than constructing again.
pub(crate) struct Solved {
    source_type: TypeInfo,
    scope: String,
    value: ErasedArc,
}

impl Solved {
    pub(crate) fn new(source_type: TypeInfo, scope: String, value: ErasedArc) -> Self {
        Self {
            source_type,
            scope,
            value,
        }
    }
}

impl Binding for Solved {
    fn source_type(&self) -> TypeInfo {
        self.source_type
    }

    fn scope(&self) -> &str {
        &self.scope
    }

    fn solve(&self, _catalog: &Catalog) -> Result<ErasedArc, InjectionError> {
        Ok(self.value.clone())
    }
}
