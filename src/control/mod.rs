//! Control types used by the typeclass hierarchy.
//!
//! - [`Either`]: a value of one of two types; the step type of
//!   `Monad::tail_rec_m` and the branch type of `Selective::select`
//! - [`Eval`]: stack-safe lazy evaluation; the accumulator of
//!   `Foldable::fold_right`
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Either, Eval};
//!
//! let step: Either<u32, &str> = Either::Left(3);
//! assert!(step.is_left());
//!
//! let lazy = Eval::later(|| 6 * 7);
//! assert_eq!(lazy.value(), 42);
//! ```

mod either;
mod eval;

pub use either::Either;
pub use eval::Eval;
