use std::{
    any::Any,
    collections::{hash_map::Keys, HashMap},
};

use crate::{
    resolver, Arguments, ConstructError, Injectable, Module, Registration, ResolveError, Type,
};

/// An immutable table mapping each registered [`Type`] to its
/// [`Registration`].
///
/// A registry is built once with a [`RegistryBuilder`] and then only read.
/// It holds no instances: every call to [`Registry::get_service`] constructs
/// a fresh object graph, so a registry can be shared freely, including
/// across threads.
///
/// # Example
///
/// ```rust
/// use paramdi::{Registry, Type};
///
/// #[derive(Default)]
/// struct Stock(i32);
///
/// struct Shop(Stock);
///
/// # fn main() {
/// let registry = Registry::builder()
///     .register_default::<Stock>()
///     .register_with([Type::of::<Stock>()], |args| Ok(Shop(args.take()?)))
///     .build();
///
/// let a = registry.get_service::<Shop>().unwrap();
/// let mut b = registry.get_service::<Shop>().unwrap();
/// b.0 .0 -= 1;
///
/// assert_eq!(a.0 .0, 0);
/// assert_eq!(b.0 .0, -1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    registrations: HashMap<Type, Registration>,
}

impl Registry {
    /// Returns a builder with default options.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Resolves a fresh `T` and all of its transitive dependencies.
    ///
    /// See [`get_service`](crate::get_service) for details.
    pub fn get_service<T: 'static>(&self) -> Result<T, ResolveError> {
        resolver::get_service(self)
    }

    /// Type-erased version of [`Registry::get_service`].
    ///
    /// See [`get_service_dyn`](crate::get_service_dyn) for details.
    pub fn get_service_dyn(&self, ty: Type) -> Result<Box<dyn Any>, ResolveError> {
        resolver::get_service_dyn(self, ty)
    }

    /// Returns whether a registration exists for `T`.
    pub fn contains<T: 'static>(&self) -> bool {
        self.contains_type(Type::of::<T>())
    }

    /// Returns whether a registration exists for `ty`.
    pub fn contains_type(&self, ty: Type) -> bool {
        self.registrations.contains_key(&ty)
    }

    /// Returns the parameter-type list registered for `ty`.
    ///
    /// Returns `None` both when `ty` is not registered and when it is
    /// registered without metadata, use [`Registry::registration`] to tell
    /// them apart.
    pub fn parameters(&self, ty: Type) -> Option<&[Type]> {
        self.registrations.get(&ty)?.parameters()
    }

    /// Returns the registration for `ty`.
    pub fn registration(&self, ty: Type) -> Option<&Registration> {
        self.registrations.get(&ty)
    }

    /// Returns an iterator over the registered types, in arbitrary order.
    pub fn types(&self) -> Keys<'_, Type, Registration> {
        self.registrations.keys()
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

/// Options and registrations used to build a [`Registry`].
///
/// Generally speaking, you'll first call [`Registry::builder`], then chain
/// calls to set options and add registrations, then call
/// [`RegistryBuilder::build`].
///
/// # Example
///
/// ```rust
/// use paramdi::{Registry, Type};
///
/// #[derive(Default)]
/// struct A;
///
/// struct B(A);
///
/// fn b(args: &mut paramdi::Arguments) -> Result<B, paramdi::ConstructError> {
///     Ok(B(args.take()?))
/// }
///
/// # fn main() {
/// let registry = Registry::builder()
///     .allow_override(false)
///     .register_default::<A>()
///     .register_with([Type::of::<A>()], b)
///     .build();
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.parameters(Type::of::<B>()), Some(&[Type::of::<A>()][..]));
/// assert_eq!(registry.parameters(Type::of::<A>()), None);
/// # }
/// ```
pub struct RegistryBuilder {
    allow_override: bool,
    registry: Registry,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            allow_override: true,
            registry: Default::default(),
        }
    }
}

impl RegistryBuilder {
    /// Sets whether a registration may replace an earlier one for the same type.
    ///
    /// Default is `true`.
    pub fn allow_override(mut self, allow_override: bool) -> Self {
        self.allow_override = allow_override;
        self
    }

    /// Registers an [`Injectable`] type.
    ///
    /// # Panics
    ///
    /// - Panics if `T` is already registered and overriding is not allowed.
    #[track_caller]
    pub fn register<T: Injectable>(self) -> Self {
        self.registration(Registration::injectable::<T>())
    }

    /// Registers `T` with an explicit parameter-type list and constructor.
    ///
    /// The constructor receives the values resolved for `parameters`, in order.
    ///
    /// # Panics
    ///
    /// - Panics if `T` is already registered and overriding is not allowed.
    #[track_caller]
    pub fn register_with<T, P, F>(self, parameters: P, constructor: F) -> Self
    where
        T: 'static,
        P: IntoIterator<Item = Type>,
        F: Fn(&mut Arguments) -> Result<T, ConstructError> + Send + Sync + 'static,
    {
        let parameters = parameters.into_iter().collect();
        self.registration(Registration::new(Some(parameters), constructor))
    }

    /// Registers `T` without parameter metadata.
    ///
    /// The constructor always receives an empty argument list.
    ///
    /// # Panics
    ///
    /// - Panics if `T` is already registered and overriding is not allowed.
    #[track_caller]
    pub fn register_fn<T, F>(self, constructor: F) -> Self
    where
        T: 'static,
        F: Fn(&mut Arguments) -> Result<T, ConstructError> + Send + Sync + 'static,
    {
        self.registration(Registration::new(None, constructor))
    }

    /// Registers `T` without parameter metadata, constructed by [`Default`].
    ///
    /// # Panics
    ///
    /// - Panics if `T` is already registered and overriding is not allowed.
    #[track_caller]
    pub fn register_default<T: Default + 'static>(self) -> Self {
        self.register_fn(|_| Ok(T::default()))
    }

    /// Adds every registration of the module `M`.
    ///
    /// # Panics
    ///
    /// - Panics if a type is already registered and overriding is not allowed.
    #[track_caller]
    pub fn module<M: Module>(self) -> Self {
        M::registrations()
            .into_iter()
            .fold(self, |builder, registration| builder.registration(registration))
    }

    /// Adds a prepared [`Registration`].
    ///
    /// # Panics
    ///
    /// - Panics if its type is already registered and overriding is not allowed.
    #[track_caller]
    pub fn registration(mut self, registration: Registration) -> Self {
        let ty = registration.ty();

        if !self.registry.registrations.contains_key(&ty) {
            #[cfg(feature = "tracing")]
            tracing::debug!("(+) register: {:?}", registration);
        } else if self.allow_override {
            #[cfg(feature = "tracing")]
            tracing::warn!("(!) override: {:?}", registration);
        } else {
            panic!("already existing a registration for: `{}`", ty);
        }

        self.registry.registrations.insert(ty, registration);
        self
    }

    /// Finishes the registry.
    pub fn build(self) -> Registry {
        self.registry
    }
}
