//! `MonadWriter` type class - accumulated output capability.
//!
//! # Laws
//!
//! ```text
//! followed_by(tell(w1), tell(w2)) == tell(w1.combine(w2))
//! listen(pure(a)) == pure((a, W::empty()))
//! listen(writer((a, w))) == writer(((a, w.clone()), w))
//! ```

use super::{Func, Monad, Monoid, func};
use crate::kind::Value;

/// A monad that accumulates output of type `W`.
pub trait MonadWriter<W: Value + Monoid>: Monad {
    /// A computation with a result and some output.
    fn writer<A: Value>(entry: (A, W)) -> Self::Of<A>;

    /// Exposes the output of `computation` next to its result.
    fn listen<A: Value>(computation: Self::Of<A>) -> Self::Of<(A, W)>;

    /// Runs `computation` and applies the function it returns to its output.
    fn pass<A: Value>(computation: Self::Of<(A, Func<W, W>)>) -> Self::Of<A>;

    /// Appends output.
    fn tell(output: W) -> Self::Of<()> {
        Self::writer::<()>(((), output))
    }

    /// Exposes a projection of the output next to the result.
    fn listens<A: Value, B: Value>(
        projection: impl Fn(W) -> B + 'static,
        computation: Self::Of<A>,
    ) -> Self::Of<(A, B)> {
        Self::map::<(A, W), (A, B)>(Self::listen::<A>(computation), move |(a, w)| {
            (a, projection(w))
        })
    }

    /// Transforms the output of `computation`.
    fn censor<A: Value>(
        modifier: impl Fn(W) -> W + 'static,
        computation: Self::Of<A>,
    ) -> Self::Of<A> {
        let modifier: Func<W, W> = func(modifier);
        Self::pass::<A>(Self::map::<A, (A, Func<W, W>)>(computation, move |a| {
            (a, modifier.clone())
        }))
    }
}
