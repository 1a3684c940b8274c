use std::any::Any;

use crate::{arguments::Argument, Arguments, Registry, ResolveError, Type};

/// Resolves a fresh `T` from `registry`.
///
/// The parameter-type list registered for `T` is walked left to right and
/// every entry is resolved recursively before `T`'s constructor runs, so the
/// construction order is depth-first. A type registered without metadata, or
/// with an empty list, is constructed with no arguments.
///
/// Nothing is cached. Each call builds a new graph, and a type that appears
/// twice in one graph is constructed twice.
///
/// # Errors
///
/// - [`ResolveError::NotRegistered`] if `T` or one of its dependencies has
///   no registration.
/// - [`ResolveError::Construct`] if a constructor fails, including when the
///   parameter-type list does not match what the constructor takes.
///
/// # Cycles
///
/// Dependency cycles are not detected. Resolving a type that depends on
/// itself, directly or transitively, recurses until the thread overflows its
/// stack and the process aborts.
///
/// # Example
///
/// ```rust
/// use paramdi::{get_service, Registry, Type};
///
/// #[derive(Default)]
/// struct WareService(i32);
///
/// #[derive(Default)]
/// struct CartService(i32);
///
/// struct WareComponent(WareService, CartService);
///
/// # fn main() {
/// let registry = Registry::builder()
///     .register_default::<WareService>()
///     .register_default::<CartService>()
///     .register_with(
///         [Type::of::<WareService>(), Type::of::<CartService>()],
///         |args| Ok(WareComponent(args.take()?, args.take()?)),
///     )
///     .build();
///
/// let component: WareComponent = get_service(&registry).unwrap();
/// assert_eq!(component.0 .0, 0);
/// # }
/// ```
pub fn get_service<T: 'static>(registry: &Registry) -> Result<T, ResolveError> {
    let ty = Type::of::<T>();

    match get_service_dyn(registry, ty)?.downcast::<T>() {
        Ok(instance) => Ok(*instance),
        Err(_) => unreachable!("registration for `{}` built an instance of another type", ty),
    }
}

/// Type-erased version of [`get_service`].
///
/// The returned box holds an instance of `ty`.
///
/// # Errors
///
/// Same as [`get_service`].
pub fn get_service_dyn(registry: &Registry, ty: Type) -> Result<Box<dyn Any>, ResolveError> {
    let Some(registration) = registry.registration(ty) else {
        return Err(ResolveError::NotRegistered(ty));
    };

    let parameters = registration.parameters().unwrap_or_default();

    #[cfg(feature = "tracing")]
    tracing::trace!("(~) resolve: `{}` with {} parameter(s)", ty, parameters.len());

    let mut values = Vec::with_capacity(parameters.len());

    for &parameter in parameters {
        values.push(Argument {
            ty: parameter,
            value: get_service_dyn(registry, parameter)?,
        });
    }

    let instance = registration.construct(Arguments::new(ty, values))?;

    #[cfg(feature = "tracing")]
    tracing::trace!("(=) constructed: `{}`", ty);

    Ok(instance)
}
