//! Contravariant functors.
//!
//! A contravariant functor *consumes* values: a printer of `A`, a predicate
//! on `A`, an encoder from `A`. Given a way to turn `B` into `A`, a consumer
//! of `A` becomes a consumer of `B`.
//!
//! # Laws
//!
//! ```text
//! F::contramap(fa, |a| a) == fa
//! F::contramap(F::contramap(fa, f), g) == F::contramap(fa, |c| f(g(c)))
//! ```

use super::Invariant;
use crate::kind::Value;

/// A type constructor that consumes its type argument.
pub trait Contravariant: Invariant {
    /// Adapts a consumer of `A` into a consumer of `B`.
    fn contramap<A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(B) -> A + 'static,
    ) -> Self::Of<B>;

    /// Narrows the consumed type using an `Into` conversion.
    fn contramap_into<A: Value, B: Value + Into<A>>(fa: Self::Of<A>) -> Self::Of<B> {
        Self::contramap::<A, B>(fa, Into::into)
    }
}
