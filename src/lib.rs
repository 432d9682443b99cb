//! # `logician` - Typed Logic Variables
//!
//! The handle layer of a logic-programming engine: unknowns that are strongly
//! typed where they are used, yet can all be stored in one homogeneous,
//! identity-keyed collection.
//!
//! ## Guarantees
//!
//! - **Identity, not value**: two variables are the same unknown iff they wrap
//!   the same identity. Identities are minted from a process-wide counter and
//!   never reused.
//! - **Static typing at the point of use**: a `Variable<i32>` cannot be passed
//!   where a `Variable<String>` is expected.
//! - **Uniform storage**: [`Variable::erase`] yields an [`AnyVariable`] whose
//!   equality and hash depend on identity alone, so variables of every value
//!   type share one map.
//! - **Lazy derivation**: [`Property`] defers a pure transform of a variable's
//!   eventual value until an evaluator supplies the binding.
//! - **Thread safety**: every handle is `Copy + Send + Sync`; nothing is ever
//!   mutated after construction.
//!
//! ## Core Abstractions
//!
//! 1. **Variables** (`Variable<V>`):
//!    - One identity plus a phantom value type
//!    - Same size as the identity itself
//!    - Comparable across value types
//!
//! 2. **Erased handles** (`AnyVariable`):
//!    - Hashable, ordered by creation
//!    - Only obtainable by erasing a real variable
//!
//! 3. **Properties** (`Property<V>`):
//!    - Source variable plus a composed transform
//!    - Evaluated on demand, never cached
//!
//! 4. **Bindings** (`Bindings`):
//!    - One map from erased handles to erased values
//!    - Typed accessors on top
//!
//! ## Example
//!
//! ```rust
//! use logician::{Bindings, Variable};
//! use std::collections::HashMap;
//!
//! let x = Variable::<i32>::new();
//! let y = Variable::<&str>::new();
//!
//! // Erased handles of different value types share one map.
//! let mut labels = HashMap::new();
//! labels.insert(x.erase(), "A");
//! labels.insert(y.erase(), "B");
//! assert_eq!(labels[&x.erase()], "A");
//!
//! // Properties are evaluated once a binding is known.
//! let p = x.map(|n| n + 1);
//! let mut bindings = Bindings::new();
//! bindings.bind(x, 5).unwrap();
//! assert_eq!(bindings.evaluate(&p).unwrap(), 6);
//! assert_eq!(bindings.evaluate(&p.map(|n| n * 2)).unwrap(), 12);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod bindings;
pub mod error;
mod identity;
pub mod property;
pub mod variable;

pub use bindings::Bindings;
pub use error::{Error, Result};
pub use property::{AsProperty, Property};
pub use variable::{AnyVariable, AsVariable, Variable};

// Compile-time assertions for handle layout
const _: () = {
    use core::mem;

    // Handles are a single non-zero index.
    assert!(mem::size_of::<AnyVariable>() == mem::size_of::<u64>());
    assert!(mem::size_of::<Option<AnyVariable>>() == mem::size_of::<u64>());

    // The value type is phantom.
    assert!(mem::size_of::<Variable<[u8; 1024]>>() == mem::size_of::<AnyVariable>());
    assert!(mem::align_of::<Variable<u128>>() == mem::align_of::<AnyVariable>());
};
