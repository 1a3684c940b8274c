use std::{any::Any, fmt, sync::Arc};

use crate::{Arguments, ConstructError, Type};

/// A trait for types that describe their own constructor.
///
/// [`parameters`](Injectable::parameters) is the ordered parameter-type list,
/// [`construct`](Injectable::construct) builds the value from arguments
/// resolved in that order.
///
/// This trait is not meant to be implemented by hand in most cases,
/// use the `#[Injectable]` attribute macro to generate the implementation.
///
/// # Example
///
/// ```rust
/// use paramdi::{Arguments, ConstructError, Injectable, Registry, Type};
///
/// #[derive(Default)]
/// struct Engine;
///
/// struct Car {
///     engine: Engine,
/// }
///
/// impl Injectable for Car {
///     fn parameters() -> Option<Vec<Type>> {
///         Some(vec![Type::of::<Engine>()])
///     }
///
///     fn construct(args: &mut Arguments) -> Result<Self, ConstructError> {
///         Ok(Car { engine: args.take()? })
///     }
/// }
///
/// # fn main() {
/// let registry = Registry::builder()
///     .register_default::<Engine>()
///     .register::<Car>()
///     .build();
///
/// let _car: Car = registry.get_service().unwrap();
/// # }
/// ```
pub trait Injectable: Sized + 'static {
    /// The ordered parameter-type list, `None` if the type carries no metadata.
    fn parameters() -> Option<Vec<Type>> {
        None
    }

    /// Builds the value from the resolved arguments.
    fn construct(args: &mut Arguments) -> Result<Self, ConstructError>;
}

pub(crate) type Constructor =
    Arc<dyn Fn(Arguments) -> Result<Box<dyn Any>, ConstructError> + Send + Sync>;

/// A type together with its parameter-type list and constructor.
///
/// There is no pub method to create this struct directly, please use
/// [`RegistryBuilder`](crate::RegistryBuilder) or the
/// [`registrations!`](crate::registrations) macro.
#[derive(Clone)]
pub struct Registration {
    ty: Type,
    parameters: Option<Vec<Type>>,
    constructor: Constructor,
}

impl Registration {
    pub(crate) fn new<T, F>(parameters: Option<Vec<Type>>, constructor: F) -> Self
    where
        T: 'static,
        F: Fn(&mut Arguments) -> Result<T, ConstructError> + Send + Sync + 'static,
    {
        let constructor = move |mut args: Arguments| -> Result<Box<dyn Any>, ConstructError> {
            let instance = constructor(&mut args)?;
            args.finish()?;
            Ok(Box::new(instance) as Box<dyn Any>)
        };

        Self {
            ty: Type::of::<T>(),
            parameters,
            constructor: Arc::new(constructor),
        }
    }

    /// Creates a registration from an [`Injectable`] type.
    pub fn injectable<T: Injectable>() -> Self {
        Self::new(T::parameters(), T::construct)
    }

    /// Returns the registered type.
    pub fn ty(&self) -> Type {
        self.ty
    }

    /// Returns the parameter-type list, `None` if the type carries no metadata.
    pub fn parameters(&self) -> Option<&[Type]> {
        self.parameters.as_deref()
    }

    pub(crate) fn construct(&self, args: Arguments) -> Result<Box<dyn Any>, ConstructError> {
        (self.constructor)(args)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("ty", &self.ty)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
