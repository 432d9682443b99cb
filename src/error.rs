//! Errors raised where bindings are consulted.
//!
//! Building, erasing, comparing and mapping variables cannot fail. These errors
//! only surface when a property is evaluated or a binding is read.

use core::fmt;

use crate::variable::AnyVariable;

/// The error type for evaluating properties and reading bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The variable has no binding.
    Unbound(AnyVariable),
    /// The variable already has a binding.
    AlreadyBound(AnyVariable),
    /// The bound value is not of the type the reader expected.
    TypeMismatch {
        /// The variable whose value was read.
        variable: AnyVariable,
        /// Name of the expected value type.
        expected: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unbound(variable) => write!(f, "variable {variable:?} is unbound"),
            Error::AlreadyBound(variable) => write!(f, "variable {variable:?} is already bound"),
            Error::TypeMismatch { variable, expected } => {
                write!(f, "variable {variable:?} is not bound to a value of type `{expected}`")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` for binding lookups.
pub type Result<T> = core::result::Result<T, Error>;
