use std::any::{type_name, TypeId};
use std::fmt;

/////////////////////////////////////////////////////////////////////////////////////////

/// Opaque, comparable handle for a type, paired with its name for diagnostics.
///
/// Unlike a runtime-reflected `reflect.Type`, a `TypeInfo` carries no
/// structural information (fields, kind) - that information is produced at
/// compile time by the `#[bind_impl::injectable]` macro instead, since Rust
/// has no equivalent of walking a struct's fields at runtime.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

/// Normalizes a scope key: `""`, `"-"`, and `"*"` all mean the default scope.
/// This normalization happens only at resolution time, never at registration.
pub(crate) fn normalize_scope(scope: &str) -> &str {
    match scope {
        "-" | "*" => "",
        other => other,
    }
}
