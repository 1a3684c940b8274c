use std::{any::Any, collections::VecDeque, fmt};

use crate::{ConstructError, Type};

/// A resolved value waiting to be passed to a constructor.
pub(crate) struct Argument {
    pub(crate) ty: Type,
    pub(crate) value: Box<dyn Any>,
}

/// The ordered values resolved for a constructor's parameter-type list.
///
/// A constructor takes its arguments front to back with [`Arguments::take`],
/// in the same order as the parameter-type list it was registered with.
/// After the constructor returns, any argument it did not take is reported
/// as [`ConstructError::UnusedArguments`].
///
/// # Example
///
/// ```rust
/// use paramdi::{Registry, Type};
///
/// #[derive(Default)]
/// struct Engine;
///
/// struct Car(Engine);
///
/// # fn main() {
/// let registry = Registry::builder()
///     .register_default::<Engine>()
///     .register_with([Type::of::<Engine>()], |args| Ok(Car(args.take()?)))
///     .build();
///
/// assert!(registry.get_service::<Car>().is_ok());
/// # }
/// ```
pub struct Arguments {
    target: Type,
    position: usize,
    values: VecDeque<Argument>,
}

impl Arguments {
    pub(crate) fn new(target: Type, values: Vec<Argument>) -> Self {
        Self {
            target,
            position: 0,
            values: values.into(),
        }
    }

    /// Returns the type being constructed.
    pub fn target(&self) -> Type {
        self.target
    }

    /// Returns the number of arguments not yet taken.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Takes the next argument as a `T`.
    ///
    /// # Errors
    ///
    /// - [`ConstructError::MissingArgument`] if every argument has been taken.
    /// - [`ConstructError::ArgumentTypeMismatch`] if the next argument is not a `T`.
    ///   The argument stays in place.
    pub fn take<T: 'static>(&mut self) -> Result<T, ConstructError> {
        let expected = Type::of::<T>();

        let Some(argument) = self.values.pop_front() else {
            return Err(ConstructError::MissingArgument {
                target: self.target,
                position: self.position,
                expected,
            });
        };

        let Argument { ty, value } = argument;

        match value.downcast::<T>() {
            Ok(value) => {
                self.position += 1;
                Ok(*value)
            }
            Err(value) => {
                self.values.push_front(Argument { ty, value });

                Err(ConstructError::ArgumentTypeMismatch {
                    target: self.target,
                    position: self.position,
                    expected,
                    found: ty,
                })
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), ConstructError> {
        if self.values.is_empty() {
            return Ok(());
        }

        Err(ConstructError::UnusedArguments {
            target: self.target,
            count: self.values.len(),
        })
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arguments")
            .field("target", &self.target)
            .field("position", &self.position)
            .field(
                "remaining",
                &self.values.iter().map(|a| a.ty).collect::<Vec<_>>(),
            )
            .finish()
    }
}
