use std::{error::Error, fmt};

use crate::Type;

/// An error raised while a constructor consumes its [`Arguments`](crate::Arguments).
///
/// These are failures of the construction step itself. The resolver never
/// checks a parameter-type list against the constructor it describes, so a
/// list of the wrong length or order shows up here, when the constructor
/// runs.
#[derive(Debug)]
pub enum ConstructError {
    /// The constructor asked for more arguments than were resolved.
    MissingArgument {
        /// The type being constructed.
        target: Type,
        /// Zero-based position of the requested argument.
        position: usize,
        /// The type the constructor asked for.
        expected: Type,
    },
    /// The argument at `position` is not of the type the constructor asked for.
    ArgumentTypeMismatch {
        /// The type being constructed.
        target: Type,
        /// Zero-based position of the mismatched argument.
        position: usize,
        /// The type the constructor asked for.
        expected: Type,
        /// The type that was resolved at this position.
        found: Type,
    },
    /// The constructor returned without consuming every resolved argument.
    UnusedArguments {
        /// The type being constructed.
        target: Type,
        /// Number of arguments left over.
        count: usize,
    },
    /// A hand-written constructor reported its own failure.
    Custom {
        /// The type being constructed.
        target: Type,
        /// The underlying failure.
        source: Box<dyn Error + Send + Sync>,
    },
}

impl ConstructError {
    /// Wraps an arbitrary failure of the constructor of `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use paramdi::{ConstructError, Registry};
    ///
    /// struct Port(u16);
    ///
    /// # fn main() {
    /// let registry = Registry::builder()
    ///     .register_fn(|_| {
    ///         "http"
    ///             .parse::<u16>()
    ///             .map(Port)
    ///             .map_err(ConstructError::custom::<Port, _>)
    ///     })
    ///     .build();
    ///
    /// assert!(registry.get_service::<Port>().is_err());
    /// # }
    /// ```
    pub fn custom<T, E>(source: E) -> Self
    where
        T: 'static,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        ConstructError::Custom {
            target: Type::of::<T>(),
            source: source.into(),
        }
    }

    /// Returns the type whose construction failed.
    pub fn target(&self) -> Type {
        match self {
            ConstructError::MissingArgument { target, .. }
            | ConstructError::ArgumentTypeMismatch { target, .. }
            | ConstructError::UnusedArguments { target, .. }
            | ConstructError::Custom { target, .. } => *target,
        }
    }
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructError::MissingArgument {
                target,
                position,
                expected,
            } => write!(
                f,
                "cannot construct `{}`: missing argument #{} of type `{}`",
                target, position, expected
            ),
            ConstructError::ArgumentTypeMismatch {
                target,
                position,
                expected,
                found,
            } => write!(
                f,
                "cannot construct `{}`: argument #{} is `{}`, expected `{}`",
                target, position, found, expected
            ),
            ConstructError::UnusedArguments { target, count } => write!(
                f,
                "cannot construct `{}`: {} argument(s) left unused",
                target, count
            ),
            ConstructError::Custom { target, source } => {
                write!(f, "cannot construct `{}`: {}", target, source)
            }
        }
    }
}

impl Error for ConstructError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConstructError::Custom { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

/// An error returned by [`get_service`](crate::get_service).
#[derive(Debug)]
pub enum ResolveError {
    /// No registration exists for the requested type.
    NotRegistered(Type),
    /// The type, or one of its transitive dependencies, failed to construct.
    Construct(ConstructError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotRegistered(ty) => write!(f, "no registration for: `{}`", ty),
            ResolveError::Construct(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ResolveError::NotRegistered(_) => None,
            ResolveError::Construct(e) => Some(e),
        }
    }
}

impl From<ConstructError> for ResolveError {
    fn from(value: ConstructError) -> Self {
        ResolveError::Construct(value)
    }
}
