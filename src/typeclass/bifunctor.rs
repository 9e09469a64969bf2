//! Bifunctor type class - mapping over both type parameters.
//!
//! A `Bifunctor` generalises [`Functor`](super::Functor) to constructors of
//! two arguments: `F<A, B>` becomes `F<C, D>`. For right-biased types like
//! `Either` and `Result`, [`Bifunctor::second`] agrees with `Functor::map`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::bimap(fab, |a| a, |b| b) == fab
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::bimap(F::bimap(fab, f1, g1), f2, g2) == F::bimap(fab, |a| f2(f1(a)), |b| g2(g1(b)))
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! F::bimap(fab, f, g) == F::second(F::first(fab, f), g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::instances::EitherK2;
//! use kindred::typeclass::Bifunctor;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! assert_eq!(EitherK2::bimap(left, |n| n * 2, |s: String| s.len()), Either::Left(84));
//! ```

use crate::kind::{Value, Witness2};

/// A constructor of two arguments, covariant in both.
pub trait Bifunctor: Witness2 {
    /// Maps both sides at once.
    fn bimap<A: Value, B: Value, C: Value, D: Value>(
        fab: Self::Of<A, B>,
        first_function: impl Fn(A) -> C + 'static,
        second_function: impl Fn(B) -> D + 'static,
    ) -> Self::Of<C, D>;

    /// Maps the first argument only.
    fn first<A: Value, B: Value, C: Value>(
        fab: Self::Of<A, B>,
        function: impl Fn(A) -> C + 'static,
    ) -> Self::Of<C, B> {
        Self::bimap::<A, B, C, B>(fab, function, |b| b)
    }

    /// Maps the second argument only.
    fn second<A: Value, B: Value, D: Value>(
        fab: Self::Of<A, B>,
        function: impl Fn(B) -> D + 'static,
    ) -> Self::Of<A, D> {
        Self::bimap::<A, B, A, D>(fab, |a| a, function)
    }
}
