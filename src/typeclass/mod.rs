//! Type class traits and their `Maybe` instances.
//!
//! - [`Functor`]: mapping over the payload
//! - [`Applicative`]: lifting values and applying wrapped functions
//! - [`Monad`]: sequencing computations that may stop early
//! - [`Alternative`]: left-biased choice with `Nothing` as the identity
//! - [`Foldable`]: reducing to a summary value
//! - [`Traversable`]: running an effect over the payload
//! - [`Semigroup`], [`Monoid`]: combining payloads, with `Nothing` as the
//!   identity of the lifted monoid
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. The traits are
//! built on [`TypeConstructor`], which uses generic associated types to name
//! "the same constructor applied to another type".
//!
//! `Option`, `Result` and [`Identity`] carry instances too, since they are
//! the usual targets of a traversal.
//!
//! # Examples
//!
//! ```rust
//! use justly::maybe::{just, nothing};
//! use justly::typeclass::{Applicative, Functor, Monad};
//!
//! let result = just(2)
//!     .fmap(|n| n + 1)
//!     .map2(just(10), |a, b| a * b)
//!     .flat_map(|n| if n > 20 { just(n) } else { nothing() });
//! assert_eq!(result, just(30));
//! ```

mod alternative;
mod applicative;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod traversable;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
