use std::{
    any::{self, TypeId},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// The identity of a constructible type.
///
/// A `Type` is both the key under which a registration is stored and an
/// entry in another registration's parameter-type list.
///
/// Two `Type`s are equal when their [`TypeId`]s are equal, the name is only
/// carried along for diagnostics.
///
/// # Example
///
/// ```rust
/// use paramdi::Type;
///
/// struct A;
///
/// # fn main() {
/// assert_eq!(Type::of::<A>(), Type::of::<A>());
/// assert_ne!(Type::of::<A>(), Type::of::<i32>());
/// assert!(Type::of::<A>().name.ends_with("A"));
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Type {
    /// The name of the type.
    pub name: &'static str,
    /// The unique identifier of the type.
    pub id: TypeId,
}

impl Type {
    /// Returns the identity of `T`.
    pub fn of<T: 'static>() -> Type {
        Type {
            name: any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl PartialOrd for Type {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Type {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
