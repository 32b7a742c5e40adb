//! # justly
//!
//! An optional-value algebraic type for Rust, `Maybe<T>`, that is either
//! present (`Just`) or absent (`Nothing`), together with the type classes it
//! is an instance of.
//!
//! ## Overview
//!
//! - **Maybe**: the two-variant sum type, its constructors, the elimination
//!   protocol [`maybe::maybe`] and the extraction helpers
//! - **Type Classes**: Functor, Applicative, Monad, Alternative, Foldable,
//!   Traversable, Semigroup and Monoid, emulated with generic associated types
//! - **Function Composition**: [`compose!`], [`compose::identity`] and
//!   [`compose::constant`]
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the `Maybe` instances (default)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`, encoded like `Option`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use justly::prelude::*;
//!
//! let doubled = only_when(|n: &i32| *n > 0, |n| n * 2, 5);
//! let result = transform(doubled, |n| n + 1);
//! assert_eq!(result, just(11));
//!
//! assert_eq!(find_if(just(4), |n: &i32| n % 2 == 0), just(4));
//! assert!(!any_of(nothing::<i32>(), |n: &i32| *n > 0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the `Maybe` type, its free functions and, when enabled, the
/// type class traits.
///
/// # Usage
///
/// ```rust
/// use justly::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::{constant, identity};
    pub use crate::maybe::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod compose;
pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;
