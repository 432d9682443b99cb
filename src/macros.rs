/// Mints fresh variables.
///
/// Two forms are accepted. Named bindings introduce one `let` per variable:
///
/// ```rust
/// use logician::fresh;
///
/// fresh!(x: i32, name: String);
/// assert_ne!(x, name);
/// ```
///
/// A bare list of types evaluates to a tuple of fresh variables:
///
/// ```rust
/// use logician::{fresh, Variable};
///
/// let (a, b): (Variable<u8>, Variable<u8>) = fresh!(u8, u8);
/// assert_ne!(a, b);
/// ```
#[macro_export]
macro_rules! fresh {
    ($($name:ident : $ty:ty),+ $(,)?) => {
        $(let $name = $crate::Variable::<$ty>::new();)+
    };
    ($($ty:ty),+ $(,)?) => {
        ($($crate::Variable::<$ty>::new(),)+)
    };
}

// Expands to a `tracing::trace!` only when the `tracing` feature is on.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}
