/// Convert a set of types that implement [`Injectable`]
/// to a set of [`Registration`] instances.
///
/// # Example
///
/// ```rust
/// use paramdi::{registrations, Injectable, Registration};
///
/// #[Injectable]
/// struct A;
///
/// #[Injectable]
/// struct B(A);
///
/// # fn main() {
/// let list: Vec<Registration> = registrations![A, B];
/// assert_eq!(list.len(), 2);
/// # }
/// ```
///
/// [`Injectable`]: crate::Injectable
/// [`Registration`]: crate::Registration
#[macro_export]
macro_rules! registrations {
    () => {
        vec![]
    };
    ($($ty:ty),+ $(,)?) => {
        vec![$(
            $crate::Registration::injectable::<$ty>()
        ),+]
    };
}
