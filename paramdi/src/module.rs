use crate::Registration;

/// Represents a group of registrations.
///
/// # Example
///
/// ```rust
/// use paramdi::{registrations, Injectable, Module, Registration, Registry};
///
/// #[derive(Default)]
/// struct A;
///
/// impl Injectable for A {
///     fn construct(_: &mut paramdi::Arguments) -> Result<Self, paramdi::ConstructError> {
///         Ok(A)
///     }
/// }
///
/// struct MyModule;
///
/// impl Module for MyModule {
///     fn registrations() -> Vec<Registration> {
///         registrations![A]
///     }
/// }
///
/// # fn main() {
/// let registry = Registry::builder().module::<MyModule>().build();
/// assert!(registry.contains::<A>());
/// # }
/// ```
pub trait Module {
    /// Included registrations.
    fn registrations() -> Vec<Registration>;
}
