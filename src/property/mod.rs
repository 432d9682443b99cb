//! `Property<V>` - a deferred, derived view of a variable's eventual value.
//!
//! A property pairs a source variable with a transform from the source's value
//! type to `V`. Nothing is computed when a property is built or mapped; the
//! composed transform runs only when an evaluator that knows the source's
//! binding calls [`Property::evaluate`].
//!
//! The source type is erased, so a `Property<usize>` derived from a
//! `Variable<String>` and one derived from a `Variable<Vec<u8>>` have the same
//! type and can live side by side.

use core::any::{type_name, Any};
use core::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::variable::{AnyVariable, Variable};

/// A composed, type-erased transform.
///
/// Returns `None` when the input is not a value of the property's source type.
pub type Transform<V> = dyn Fn(&dyn Any) -> Option<V> + Send + Sync;

/// A value of type `V` derived from an unknown.
///
/// # Example
///
/// ```rust
/// use logician::Variable;
///
/// let x = Variable::<i32>::new();
/// let p = x.map(|n| n + 1);
/// let q = p.map(|n| n * 2);
///
/// assert_eq!(p.evaluate(&5).unwrap(), 6);
/// assert_eq!(q.evaluate(&5).unwrap(), 12);
/// assert_eq!(q.variable(), x);
/// ```
pub struct Property<V> {
    variable: AnyVariable,
    source_type: &'static str,
    transform: Arc<Transform<V>>,
}

impl<V: 'static> Property<V> {
    pub(crate) fn from_variable<T, F>(variable: Variable<T>, transform: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        trace_event!(
            target: "logician::property",
            variable = variable.index(),
            source_type = type_name::<T>(),
            value_type = type_name::<V>(),
            "derived property"
        );
        Self {
            variable: variable.erase(),
            source_type: type_name::<T>(),
            transform: Arc::new(move |bound: &dyn Any| bound.downcast_ref::<T>().map(&transform)),
        }
    }

    /// Derives a new property by running `transform` after this one.
    ///
    /// Neither transform is called here. The result shares this property's
    /// source variable.
    pub fn map<U, F>(&self, transform: F) -> Property<U>
    where
        U: 'static,
        F: Fn(&V) -> U + Send + Sync + 'static,
    {
        let inner = Arc::clone(&self.transform);
        Property {
            variable: self.variable,
            source_type: self.source_type,
            transform: Arc::new(move |bound: &dyn Any| inner(bound).map(|value| transform(&value))),
        }
    }
}

impl<V> Property<V> {
    /// Returns the erased handle of the source variable.
    #[inline(always)]
    pub const fn variable(&self) -> AnyVariable {
        self.variable
    }

    /// Returns the name of the source variable's value type.
    #[inline(always)]
    pub const fn source_type(&self) -> &'static str {
        self.source_type
    }

    /// Returns the composed transform.
    #[inline(always)]
    pub fn transform(&self) -> &Transform<V> {
        &*self.transform
    }

    /// Evaluates the property against the source variable's bound value.
    ///
    /// The result is recomputed on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if `bound` is not a value of the source
    /// variable's type.
    pub fn evaluate(&self, bound: &dyn Any) -> Result<V> {
        (self.transform)(bound).ok_or(Error::TypeMismatch {
            variable: self.variable,
            expected: self.source_type,
        })
    }
}

impl<V> Clone for Property<V> {
    fn clone(&self) -> Self {
        Self {
            variable: self.variable,
            source_type: self.source_type,
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<V> fmt::Debug for Property<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("variable", &self.variable)
            .field("source_type", &self.source_type)
            .field("value_type", &type_name::<V>())
            .finish_non_exhaustive()
    }
}

/// Types that can be viewed as a [`Property`].
///
/// Lets an API accept a bare variable and a derived property alike.
///
/// ```rust
/// use logician::{AsProperty, Variable};
///
/// fn doubled<P: AsProperty<Value = i32>>(p: &P, bound: i32) -> i32 {
///     p.as_property().map(|n| n * 2).evaluate(&bound).unwrap()
/// }
///
/// let x = Variable::<i32>::new();
/// assert_eq!(doubled(&x, 4), 8);
/// assert_eq!(doubled(&x.map(|n| n - 1), 4), 6);
/// ```
pub trait AsProperty {
    /// The value type of the property.
    type Value;

    /// Returns this value as a property.
    fn as_property(&self) -> Property<Self::Value>;
}

impl<V: Any + Clone> AsProperty for Variable<V> {
    type Value = V;

    fn as_property(&self) -> Property<V> {
        self.property()
    }
}

impl<V> AsProperty for Property<V> {
    type Value = V;

    fn as_property(&self) -> Property<V> {
        self.clone()
    }
}
