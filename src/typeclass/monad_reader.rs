//! `MonadReader` type class - environment reading capability.
//!
//! # Laws
//!
//! ```text
//! local(|r| r, m) == m
//! local(f, local(g, m)) == local(|r| g(f(r)), m)
//! local(f, ask()) == map(ask(), f)
//! ```

use super::Monad;
use crate::kind::Value;

/// A monad that reads an environment of type `R`.
pub trait MonadReader<R: Value>: Monad {
    /// The environment.
    fn ask() -> Self::Of<R>;

    /// Runs `computation` in a modified environment.
    fn local<A: Value>(modifier: impl Fn(R) -> R + 'static, computation: Self::Of<A>)
    -> Self::Of<A>;

    /// A projection of the environment.
    fn asks<A: Value>(projection: impl Fn(R) -> A + 'static) -> Self::Of<A> {
        Self::map::<R, A>(Self::ask(), projection)
    }

    /// Lifts a function of the environment; the same as [`asks`](MonadReader::asks).
    fn reader<A: Value>(function: impl Fn(R) -> A + 'static) -> Self::Of<A> {
        Self::asks::<A>(function)
    }
}
