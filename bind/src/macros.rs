/// Shorthand for [`crate::Implementation::concrete`] with the trivial
/// coercion (`|v| v`), for the common case where a concrete type implements
/// an interface directly and no custom cast is needed.
///
/// ```
/// use bind::*;
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// #[injectable]
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".to_owned()
///     }
/// }
///
/// let catalog = Catalog::configure(vec![Arc::new(implementation!(dyn Greeter, English))]).unwrap();
/// assert_eq!(catalog.get::<dyn Greeter>().unwrap().greet(), "hello");
/// ```
#[macro_export]
macro_rules! implementation {
    ($iface:ty, $impl:ty) => {
        $crate::Implementation::<$iface>::concrete::<$impl>(|v| v)
    };
}
