//! Profunctor type class - contravariant input, covariant output.
//!
//! The prototypical profunctor is a function `A -> B`: it can be
//! pre-composed on its input and post-composed on its output.
//!
//! # Laws
//!
//! ```text
//! P::dimap(pab, |a| a, |b| b) == pab
//! P::dimap(P::dimap(pab, f1, g1), f2, g2) == P::dimap(pab, |x| f1(f2(x)), |y| g2(g1(y)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{Function1, Function1K2};
//! use kindred::typeclass::Profunctor;
//!
//! let length = Function1::new(|s: String| s.len());
//! let adapted = Function1K2::dimap(length, |n: usize| "x".repeat(n), |len| len * 2);
//! assert_eq!(adapted.apply(3), 6);
//! ```

use crate::kind::{Value, Witness2};

/// A two-argument constructor consuming its first argument and producing
/// its second.
pub trait Profunctor: Witness2 {
    /// Adapts the input with `before` and the output with `after`.
    fn dimap<A: Value, B: Value, C: Value, D: Value>(
        fab: Self::Of<A, B>,
        before: impl Fn(C) -> A + 'static,
        after: impl Fn(B) -> D + 'static,
    ) -> Self::Of<C, D>;

    /// Adapts the input only.
    fn lmap<A: Value, B: Value, C: Value>(
        fab: Self::Of<A, B>,
        before: impl Fn(C) -> A + 'static,
    ) -> Self::Of<C, B> {
        Self::dimap::<A, B, C, B>(fab, before, |b| b)
    }

    /// Adapts the output only.
    fn rmap<A: Value, B: Value, D: Value>(
        fab: Self::Of<A, B>,
        after: impl Fn(B) -> D + 'static,
    ) -> Self::Of<A, D> {
        Self::dimap::<A, B, A, D>(fab, |a| a, after)
    }
}
