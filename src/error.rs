//! Error types for the dependency injection container.

use std::fmt;

/// Dependency injection errors.
///
/// Every error carries the identity of the type that caused it. Resolution
/// errors propagate unchanged up the recursive resolution stack, so a missing
/// dependency three constructors deep still surfaces with the name of the
/// type that was actually unregistered.
///
/// # Examples
///
/// ```rust
/// use cobalt_di::{DiError, DependencyContainer, Resolver};
///
/// let container = DependencyContainer::new();
/// let provider = container.make();
/// match provider.get::<String>() {
///     Err(DiError::NotFound(name)) => assert_eq!(name, "alloc::string::String"),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiError {
    /// No registration exists for the requested type
    NotFound(&'static str),
    /// A factory could not produce an instance of the named type
    Construction {
        /// The type that failed to construct
        type_name: &'static str,
        /// The underlying failure
        cause: String,
    },
    /// Circular dependency detected (includes the full path)
    Circular(Vec<&'static str>),
    /// A stored instance could not be downcast to the requested type
    TypeMismatch(&'static str),
    /// Maximum recursion depth exceeded during resolution
    DepthExceeded(usize),
}

impl DiError {
    /// Builds a [`DiError::Construction`] for type `T` with the given cause.
    pub fn construction<T>(cause: impl fmt::Display) -> Self {
        DiError::Construction {
            type_name: std::any::type_name::<T>(),
            cause: cause.to_string(),
        }
    }
}

impl fmt::Display for DiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiError::NotFound(name) => write!(f, "Type is not a dependency: {}", name),
            DiError::Construction { type_name, cause } => {
                write!(f, "Failed to construct '{}': {}", type_name, cause)
            }
            DiError::Circular(path) => {
                write!(f, "Circular dependency: {}", path.join(" -> "))
            }
            DiError::TypeMismatch(name) => write!(f, "Type mismatch for: {}", name),
            DiError::DepthExceeded(depth) => write!(f, "Max resolution depth {} exceeded", depth),
        }
    }
}

impl std::error::Error for DiError {}

/// Result type for DI operations.
pub type DiResult<T> = Result<T, DiError>;
