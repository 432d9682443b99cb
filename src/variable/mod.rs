//! `Variable<V>` - a statically typed handle to an unknown value.
//!
//! A variable carries no data. It wraps one identity and tags it with the value
//! type `V` at compile time only. The type tag keeps a `Variable<i32>` from
//! being passed where a `Variable<String>` is expected, while
//! [`Variable::erase`] strips the tag so variables of any type can share one
//! identity-keyed collection.
//!
//! ## Cross-type comparison
//!
//! Equality is identity, never value, so it is defined across type parameters:
//! `Variable<A> == Variable<B>` and `Variable<A> == AnyVariable` are true iff
//! both sides wrap the same identity. Erased stores rely on this to match a
//! typed variable against an erased key.

/// Type-erased handles.
pub mod erased;

pub use erased::AnyVariable;

use core::any::{type_name, Any};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::identity::Identity;
use crate::property::Property;

/// An unknown value of type `V` in a logic problem.
///
/// `Variable` is `Copy`, `Send` and `Sync` for every `V`: the type parameter
/// only appears behind `fn() -> V`, so no `V` is ever stored.
///
/// # Example
///
/// ```rust
/// use logician::Variable;
///
/// let x = Variable::<i32>::new();
/// let y = Variable::<String>::new();
///
/// assert_eq!(x, x);
/// assert_ne!(x, y);
/// assert_eq!(x.erase(), x);
/// ```
#[repr(transparent)]
pub struct Variable<V> {
    erased: AnyVariable,
    _value: PhantomData<fn() -> V>,
}

impl<V> Variable<V> {
    /// Creates a new variable with a freshly minted identity.
    ///
    /// The result is distinct from every variable created before it.
    pub fn new() -> Self {
        let variable = Self::from_erased(AnyVariable::from_identity(Identity::mint()));
        trace_event!(
            target: "logician::variable",
            index = variable.index(),
            value_type = type_name::<V>(),
            "minted variable"
        );
        variable
    }

    #[inline(always)]
    pub(crate) const fn from_erased(erased: AnyVariable) -> Self {
        Self {
            erased,
            _value: PhantomData,
        }
    }

    /// Returns the type-erased handle for this variable.
    ///
    /// Erasure is a pure projection; calling it repeatedly yields equal handles.
    #[inline(always)]
    pub const fn erase(self) -> AnyVariable {
        self.erased
    }

    /// Returns the creation index of the underlying identity.
    #[inline(always)]
    pub const fn index(self) -> u64 {
        self.erased.index()
    }

    /// Derives a lazily evaluated property from this variable.
    ///
    /// `transform` is not called here. It runs each time the property is
    /// evaluated against a binding of this variable, so it should be pure and
    /// total over every value the variable may be bound to.
    ///
    /// # Example
    ///
    /// ```rust
    /// use logician::Variable;
    ///
    /// let x = Variable::<i32>::new();
    /// let next = x.map(|n| n + 1);
    /// assert_eq!(next.evaluate(&5).unwrap(), 6);
    /// ```
    pub fn map<U, F>(self, transform: F) -> Property<U>
    where
        V: Any,
        U: 'static,
        F: Fn(&V) -> U + Send + Sync + 'static,
    {
        Property::from_variable(self, transform)
    }

    /// Returns this variable as a property with the identity transform.
    pub fn property(self) -> Property<V>
    where
        V: Any + Clone,
    {
        self.map(V::clone)
    }
}

impl<V> Clone for Variable<V> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Variable<V> {}

impl<V> Default for Variable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Variable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable<{}>({:?})", type_name::<V>(), self.erased)
    }
}

impl<V, U> PartialEq<Variable<U>> for Variable<V> {
    #[inline(always)]
    fn eq(&self, other: &Variable<U>) -> bool {
        self.erased == other.erased
    }
}

impl<V> PartialEq<AnyVariable> for Variable<V> {
    #[inline(always)]
    fn eq(&self, other: &AnyVariable) -> bool {
        self.erased == *other
    }
}

impl<V> Eq for Variable<V> {}

impl<V> PartialOrd for Variable<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for Variable<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.erased.cmp(&other.erased)
    }
}

// Must hash exactly like the erased handle.
impl<V> Hash for Variable<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.erased.hash(state);
    }
}

/// Types that can hand out the variable they are built on.
pub trait AsVariable {
    /// The value type of the variable.
    type Value;

    /// Returns the underlying variable.
    fn variable(&self) -> Variable<Self::Value>;
}

impl<V> AsVariable for Variable<V> {
    type Value = V;

    #[inline(always)]
    fn variable(&self) -> Variable<V> {
        *self
    }
}
