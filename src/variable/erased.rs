//! `AnyVariable` - a type-erased, hashable variable handle.
//!
//! This is the key type for heterogeneous storage. A substitution store keeps a
//! single map from `AnyVariable` to type-erased values and re-attaches the
//! static type at lookup time through [`AnyVariable::typed`].

use core::fmt;

use crate::identity::Identity;
use crate::variable::Variable;

/// A variable with its value type erased.
///
/// Equality, ordering and hashing all come from the identity alone. Two
/// erasures of the same [`Variable`] are equal and hash identically; erasures
/// of distinct variables are never equal.
///
/// There is no public constructor: an `AnyVariable` only exists as the erasure
/// of a real [`Variable`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AnyVariable {
    identity: Identity,
}

impl AnyVariable {
    #[inline(always)]
    pub(crate) const fn from_identity(identity: Identity) -> Self {
        Self { identity }
    }

    /// Returns the creation index of the underlying identity.
    ///
    /// Indices are unique per process and increase with creation order.
    #[inline(always)]
    pub const fn index(self) -> u64 {
        self.identity.index()
    }

    /// Re-attaches a static value type to this handle.
    ///
    /// No new identity is minted: the result compares equal to every other
    /// view of the same variable. Nothing checks that `V` is the type the
    /// variable was created with; reading a binding through a wrongly typed
    /// view fails with [`Error::TypeMismatch`](crate::Error::TypeMismatch).
    ///
    /// # Example
    ///
    /// ```rust
    /// use logician::Variable;
    ///
    /// let x = Variable::<i32>::new();
    /// let key = x.erase();
    /// let again = key.typed::<i32>();
    /// assert_eq!(again, x);
    /// ```
    #[inline(always)]
    pub const fn typed<V>(self) -> Variable<V> {
        Variable::from_erased(self)
    }
}

impl fmt::Debug for AnyVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.identity, f)
    }
}

impl<V> From<Variable<V>> for AnyVariable {
    #[inline(always)]
    fn from(variable: Variable<V>) -> Self {
        variable.erase()
    }
}

impl<V> From<&Variable<V>> for AnyVariable {
    #[inline(always)]
    fn from(variable: &Variable<V>) -> Self {
        variable.erase()
    }
}

impl<V> PartialEq<Variable<V>> for AnyVariable {
    #[inline(always)]
    fn eq(&self, other: &Variable<V>) -> bool {
        *self == other.erase()
    }
}
