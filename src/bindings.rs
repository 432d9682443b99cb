//! `Bindings` - an identity-keyed store of values for variables.
//!
//! Every binding, whatever its value type, lives in one map keyed by
//! [`AnyVariable`]. Values are stored type-erased; the typed accessors put the
//! static type back at lookup time.
//!
//! This is a plain store. It does no unification, no walking of chains of
//! variables and no occurs checks; a solver builds those on top.

use core::any::{type_name, Any};
use core::fmt;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::property::AsProperty;
use crate::variable::{AnyVariable, Variable};

type Erased = Arc<dyn Any + Send + Sync>;

/// A substitution from variables to values of any type.
///
/// Cloning is cheap: bound values are shared, not copied.
///
/// # Example
///
/// ```rust
/// use logician::{Bindings, Variable};
///
/// let x = Variable::<i32>::new();
/// let name = Variable::<String>::new();
///
/// let mut bindings = Bindings::new();
/// bindings.bind(x, 5).unwrap();
/// bindings.bind(name, "five".to_string()).unwrap();
///
/// assert_eq!(*bindings.value(x).unwrap(), 5);
/// assert_eq!(bindings.evaluate(&x.map(|n| n + 1)).unwrap(), 6);
/// assert_eq!(bindings.evaluate(&name.map(String::len)).unwrap(), 4);
/// ```
#[derive(Clone, Default)]
pub struct Bindings {
    values: HashMap<AnyVariable, Erased>,
}

impl Bindings {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for at least `capacity` bindings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of bound variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Binds `variable` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyBound`] if the variable already has a value. The
    /// existing binding is left untouched.
    pub fn bind<V>(&mut self, variable: Variable<V>, value: V) -> Result<()>
    where
        V: Any + Send + Sync,
    {
        match self.values.entry(variable.erase()) {
            Entry::Occupied(_) => Err(Error::AlreadyBound(variable.erase())),
            Entry::Vacant(slot) => {
                trace_event!(
                    target: "logician::bindings",
                    variable = variable.index(),
                    value_type = type_name::<V>(),
                    "bound variable"
                );
                slot.insert(Arc::new(value));
                Ok(())
            }
        }
    }

    /// Removes the binding of `variable`, returning whether one existed.
    pub fn unbind(&mut self, variable: impl Into<AnyVariable>) -> bool {
        let variable = variable.into();
        let removed = self.values.remove(&variable).is_some();
        if removed {
            trace_event!(target: "logician::bindings", variable = variable.index(), "unbound variable");
        }
        removed
    }

    /// Returns `true` if `variable` has a binding.
    pub fn is_bound(&self, variable: impl Into<AnyVariable>) -> bool {
        self.values.contains_key(&variable.into())
    }

    /// Returns the value bound to `variable`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unbound`] if there is no binding, or
    /// [`Error::TypeMismatch`] if the binding was made through a view of the
    /// variable with a different value type.
    pub fn value<V: Any>(&self, variable: Variable<V>) -> Result<&V> {
        let key = variable.erase();
        let bound = self.values.get(&key).ok_or(Error::Unbound(key))?;
        bound.downcast_ref::<V>().ok_or(Error::TypeMismatch {
            variable: key,
            expected: type_name::<V>(),
        })
    }

    /// Evaluates a property, or a bare variable, against its source's binding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unbound`] if the source variable has no binding, or
    /// [`Error::TypeMismatch`] if the bound value is not of the source type.
    pub fn evaluate<P: AsProperty>(&self, property: &P) -> Result<P::Value> {
        let property = property.as_property();
        let key = property.variable();
        let bound: &dyn Any = &**self.values.get(&key).ok_or(Error::Unbound(key))?;
        property.evaluate(bound)
    }

    /// Returns an iterator over the bound variables, in arbitrary order.
    pub fn variables(&self) -> impl Iterator<Item = AnyVariable> + '_ {
        self.values.keys().copied()
    }
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bound: Vec<_> = self.variables().collect();
        bound.sort_unstable();
        f.debug_struct("Bindings").field("bound", &bound).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_read() {
        let x = Variable::<i32>::new();
        let mut bindings = Bindings::new();
        assert!(bindings.is_empty());

        bindings.bind(x, 42).unwrap();
        assert_eq!(bindings.len(), 1);
        assert!(bindings.is_bound(x));
        assert_eq!(*bindings.value(x).unwrap(), 42);
    }

    #[test]
    fn test_rebind_is_rejected() {
        let x = Variable::<i32>::new();
        let mut bindings = Bindings::new();
        bindings.bind(x, 1).unwrap();

        assert_eq!(bindings.bind(x, 2), Err(Error::AlreadyBound(x.erase())));
        assert_eq!(*bindings.value(x).unwrap(), 1);
    }

    #[test]
    fn test_unbound_lookup() {
        let x = Variable::<i32>::new();
        let bindings = Bindings::new();
        assert_eq!(bindings.value(x), Err(Error::Unbound(x.erase())));
        assert_eq!(bindings.evaluate(&x.map(|n| n + 1)), Err(Error::Unbound(x.erase())));
    }

    #[test]
    fn test_wrongly_typed_view() {
        let x = Variable::<i32>::new();
        let mut bindings = Bindings::new();
        bindings.bind(x, 7).unwrap();

        let as_string = x.erase().typed::<String>();
        assert_eq!(
            bindings.value(as_string),
            Err(Error::TypeMismatch {
                variable: x.erase(),
                expected: type_name::<String>(),
            })
        );
        assert!(matches!(
            bindings.evaluate(&as_string.map(String::len)),
            Err(Error::TypeMismatch { expected, .. }) if expected == type_name::<String>()
        ));
    }

    #[test]
    fn test_evaluate_bare_variable() {
        let x = Variable::<String>::new();
        let mut bindings = Bindings::new();
        bindings.bind(x, "hello".to_string()).unwrap();
        assert_eq!(bindings.evaluate(&x).unwrap(), "hello");
    }

    #[test]
    fn test_unbind() {
        let x = Variable::<u8>::new();
        let mut bindings = Bindings::new();
        bindings.bind(x, 3).unwrap();

        assert!(bindings.unbind(x));
        assert!(!bindings.unbind(x));
        assert!(!bindings.is_bound(x));
        bindings.bind(x, 4).unwrap();
        assert_eq!(*bindings.value(x).unwrap(), 4);
    }

    #[test]
    fn test_clone_is_independent() {
        let x = Variable::<i32>::new();
        let y = Variable::<i32>::new();
        let mut original = Bindings::new();
        original.bind(x, 1).unwrap();

        let mut copy = original.clone();
        copy.bind(y, 2).unwrap();

        assert!(!original.is_bound(y));
        assert_eq!(*copy.value(x).unwrap(), 1);
    }

    #[test]
    fn test_variables_and_debug() {
        let x = Variable::<i32>::new();
        let y = Variable::<bool>::new();
        let mut bindings = Bindings::with_capacity(2);
        bindings.bind(y, true).unwrap();
        bindings.bind(x, 0).unwrap();

        let mut bound: Vec<_> = bindings.variables().collect();
        bound.sort();
        assert_eq!(bound, vec![x.erase(), y.erase()]);
        assert_eq!(
            format!("{bindings:?}"),
            format!("Bindings {{ bound: [?{}, ?{}] }}", x.index(), y.index())
        );
    }
}
