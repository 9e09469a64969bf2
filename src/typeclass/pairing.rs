//! Pairings between a functor and its dual.
//!
//! A pairing `F ⋈ G` annihilates an `F<A>` against a `G<B>`: the `F` side
//! picks where to look and the `G` side supplies what is found there. The
//! classic examples pair a monad with the comonad that interprets it:
//!
//! | monad | comonad |
//! |---|---|
//! | `State<S, _>` | `Store<S, _>` |
//! | `Reader<R, _>` | `Env<R, _>` |
//! | `Writer<W, _>` | `Traced<W, _>` |
//! | `Id` | `Id` |
//!
//! `Co<W, R, _>` turns any comonad `W` into the monad that pairs with it.

use super::Func;
use crate::kind::{Value, Witness};

/// `Self` pairs with `G`.
pub trait Pairing<G: Witness>: Witness {
    /// Runs `fa` against `gb`, combining the two values it meets at.
    fn zap<A: Value, B: Value, C>(
        fa: Self::Of<A>,
        gb: G::Of<B>,
        function: impl FnOnce(A, B) -> C,
    ) -> C;

    /// Applies the function found on the `Self` side to the value found on
    /// the `G` side.
    fn zap_fn<A: Value, B: Value>(ff: Self::Of<Func<A, B>>, ga: G::Of<A>) -> B {
        Self::zap::<Func<A, B>, A, B>(ff, ga, |function, a| function(a))
    }
}
