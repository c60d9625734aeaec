use crate::catalog::Catalog;
use crate::errors::InjectionError;

/////////////////////////////////////////////////////////////////////////////////////////

/// Implemented by every type that can be produced by a [`crate::Type`] or
/// [`crate::Provider`] binding.
///
/// `construct` and `inject_fields` are ordinarily generated by the
/// `#[bind_impl::injectable]` attribute macro from a struct's `#[bind(...)]`
/// field tags; `init_after` is the one method a type overrides by hand to
/// opt into a post-construction callback.
pub trait Injectable: Sized {
    /// Builds a fresh value, resolving every `#[bind(...)]`-tagged field from
    /// `catalog` and defaulting every other field.
    fn construct(catalog: &Catalog) -> Result<Self, InjectionError>;

    /// Re-resolves just the tagged fields on an already-constructed value.
    /// Used for values returned by a [`crate::Provider`] factory, which built
    /// the value itself but still wants its tagged fields wired in.
    ///
    /// The default does nothing, for types with no tagged fields (or no
    /// generated `Injectable` impl at all - e.g. a plain value bound via
    /// [`crate::Instance`]).
    fn inject_fields(&mut self, _catalog: &Catalog) -> Result<(), InjectionError> {
        Ok(())
    }

    /// Runs exactly once, after construction and field injection succeed.
    /// Override to perform setup that needs the fully-wired value.
    fn init_after(&mut self) -> Result<(), InjectionError> {
        Ok(())
    }
}
