//! Typeclass instances for standard library types and [`Eval`](crate::control::Eval).
//!
//! | witness | type |
//! |---|---|
//! | [`OptionK`] | `Option<A>` |
//! | [`VecK`] | `Vec<A>` |
//! | [`ResultK<E>`] / [`ResultK2`] | `Result<A, E>` |
//! | [`EitherK<L>`] / [`EitherK2`] | `Either<L, R>` |
//! | [`EvalK`] | `Eval<A>` |
//!
//! Each concrete type also implements [`Upcast`](crate::kind::Upcast), so
//! `Some(5).upcast()` is a `Kind<OptionK, i32>`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionK, VecK};
//! use kindred::typeclass::Traverse;
//!
//! let all_positive = VecK::traverse::<OptionK, i32, i32>(vec![1, 2, 3], |n| (n > 0).then_some(n));
//! assert_eq!(all_positive, Some(vec![1, 2, 3]));
//!
//! let one_negative = VecK::traverse::<OptionK, i32, i32>(vec![1, -2, 3], |n| (n > 0).then_some(n));
//! assert_eq!(one_negative, None);
//! ```

mod either;
mod eval;
mod option;
mod result;
mod vec;

pub use either::{EitherK, EitherK2};
pub use eval::EvalK;
pub use option::OptionK;
pub use result::{ResultK, ResultK2};
pub use vec::VecK;

static_assertions::assert_impl_all!(OptionK: Send, Sync);
static_assertions::assert_impl_all!(VecK: Send, Sync);
static_assertions::assert_impl_all!(ResultK<String>: Send, Sync);
static_assertions::assert_impl_all!(EitherK<String>: Send, Sync);
static_assertions::assert_impl_all!(EvalK: Send, Sync);
