//! Function composition utilities.
//!
//! The combinators the `Maybe` instances are phrased in terms of, and the
//! ones the functor and monad laws are stated with:
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`identity`]: The identity function
//! - [`constant`]: Creates a function that always returns the same value
//!
//! # Examples
//!
//! ```
//! use justly::compose;
//! use justly::compose::identity;
//! use justly::maybe::{just, transform};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // transform(transform(m, f), g) == transform(m, compose!(g, f))
//! let stepwise = transform(transform(just(5), double), add_one);
//! let composed = transform(just(5), compose!(add_one, double));
//! assert_eq!(stepwise, composed);
//!
//! assert_eq!(transform(just(5), identity), just(5));
//! ```

mod compose_macro;
mod utils;

pub use utils::{constant, identity};
