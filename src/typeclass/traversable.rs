//! Traverse type class - effectful mapping that keeps the shape.
//!
//! `traverse` runs an effectful function on every value, left to right,
//! and collects the results back into the original shape inside the
//! effect. With `Option` or `Result` the traversal stops at the first
//! failure; with `Validated` every failure is collected.
//!
//! # Laws
//!
//! ```text
//! traverse::<IdK>(fa, |a| Id(a)) == Id(fa)
//! traverse::<ComposeK<F, G>>(fa, |a| F::map(f(a), g)) == F::map(traverse::<F>(fa, f), |fb| traverse::<G>(fb, g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionK, VecK};
//! use kindred::typeclass::Traverse;
//!
//! let parsed = VecK::traverse::<OptionK, _, _>(vec!["1", "2"], |s| s.parse::<i32>().ok());
//! assert_eq!(parsed, Some(vec![1, 2]));
//!
//! let failed = VecK::traverse::<OptionK, _, _>(vec!["1", "x"], |s| s.parse::<i32>().ok());
//! assert_eq!(failed, None);
//! ```

use super::{Applicative, Foldable, Functor, Monad};
use crate::kind::Value;

/// A functor that can be traversed with an applicative effect.
pub trait Traverse: Functor + Foldable {
    /// Maps each value to an effect and collects the results in shape.
    fn traverse<G: Applicative, A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Self::Of<B>>;

    /// Turns a structure of effects into an effect of a structure.
    fn sequence<G: Applicative, A: Value>(fga: Self::Of<G::Of<A>>) -> G::Of<Self::Of<A>> {
        Self::traverse::<G, G::Of<A>, A>(fga, |ga| ga)
    }

    /// Traverses, then flattens the inner layer of `Self`.
    fn flat_traverse<G: Applicative, A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(A) -> G::Of<Self::Of<B>> + 'static,
    ) -> G::Of<Self::Of<B>>
    where
        Self: Monad,
    {
        G::map::<Self::Of<Self::Of<B>>, Self::Of<B>>(
            Self::traverse::<G, A, Self::Of<B>>(fa, function),
            Self::flatten::<B>,
        )
    }
}
