//! Comonads - values in a context that can always be read.
//!
//! A comonad is the dual of a monad: instead of putting a value *into* a
//! context ([`pure`](super::Applicative::pure)) it takes one *out*
//! ([`Comonad::extract`]), and instead of `flat_map` it offers
//! [`Comonad::coflat_map`], which runs a function against the whole context
//! at every position.
//!
//! The specialised comonads follow the usual trio:
//!
//! - [`ComonadStore`]: a focus position and a way to look elsewhere
//! - [`ComonadEnv`]: a read-only environment
//! - [`ComonadTraced`]: a value for every monoidal offset
//!
//! # Laws
//!
//! ```text
//! extract(duplicate(w))              == w
//! map(duplicate(w), extract)         == w
//! duplicate(duplicate(w))            == map(duplicate(w), duplicate)
//! ```

use std::rc::Rc;

use super::{Functor, Monad, Monoid};
use crate::kind::Value;

/// A functor with a focused value and context-wide extension.
pub trait Comonad: Functor {
    /// The value in focus.
    fn extract<A: Value>(wa: Self::Of<A>) -> A;

    /// Runs `function` on the context refocused at every position.
    fn coflat_map<A: Value, B: Value>(
        wa: Self::Of<A>,
        function: impl Fn(Self::Of<A>) -> B + 'static,
    ) -> Self::Of<B>;

    /// Replaces every value with the context focused on it.
    fn duplicate<A: Value>(wa: Self::Of<A>) -> Self::Of<Self::Of<A>> {
        Self::coflat_map::<A, Self::Of<A>>(wa, |w| w)
    }
}

/// Both a monad and a comonad.
pub trait Bimonad: Monad + Comonad {}

/// A comonad focused at a position of type `S`.
pub trait ComonadStore<S: Value>: Comonad {
    /// The current focus.
    fn position<A: Value>(wa: Self::Of<A>) -> S;

    /// The value at another position.
    fn peek<A: Value>(position: S, wa: Self::Of<A>) -> A;

    /// The value at a position derived from the current one.
    fn peeks<A: Value>(function: impl Fn(S) -> S, wa: Self::Of<A>) -> A {
        let target = function(Self::position::<A>(wa.clone()));
        Self::peek::<A>(target, wa)
    }

    /// Moves the focus to `position`.
    fn seek<A: Value>(position: S, wa: Self::Of<A>) -> Self::Of<A> {
        Self::coflat_map::<A, A>(wa, move |w| Self::peek::<A>(position.clone(), w))
    }

    /// Moves the focus relative to the current one.
    fn seeks<A: Value>(function: impl Fn(S) -> S + 'static, wa: Self::Of<A>) -> Self::Of<A> {
        let function = Rc::new(function);
        Self::coflat_map::<A, A>(wa, move |w| Self::peeks::<A>(|s| function(s), w))
    }

    /// Looks up the values at every position produced by `function`.
    fn experiment<G: Functor, A: Value>(
        function: impl Fn(S) -> G::Of<S>,
        wa: Self::Of<A>,
    ) -> G::Of<A> {
        let positions = function(Self::position::<A>(wa.clone()));
        G::map::<S, A>(positions, move |s| Self::peek::<A>(s, wa.clone()))
    }
}

/// A comonad carrying a read-only environment `E`.
pub trait ComonadEnv<E: Value>: Comonad {
    /// The environment.
    fn ask<A: Value>(wa: Self::Of<A>) -> E;

    /// Replaces the environment with a function of it.
    fn local<A: Value>(function: impl FnOnce(E) -> E, wa: Self::Of<A>) -> Self::Of<A>;

    /// A projection of the environment.
    fn asks<A: Value, B>(function: impl FnOnce(E) -> B, wa: Self::Of<A>) -> B {
        function(Self::ask::<A>(wa))
    }
}

/// A comonad indexed by a monoid `M`; `extract` reads at `M::empty()`.
pub trait ComonadTraced<M: Value + Monoid>: Comonad {
    /// The value at offset `offset`.
    fn trace<A: Value>(offset: M, wa: Self::Of<A>) -> A;

    /// Pairs every value with a projection of the offset it sits at.
    fn listens<A: Value, B: Value>(
        function: impl Fn(M) -> B + 'static,
        wa: Self::Of<A>,
    ) -> Self::Of<(A, B)>;

    /// Transforms the offset before every lookup.
    fn censor<A: Value>(function: impl Fn(M) -> M + 'static, wa: Self::Of<A>) -> Self::Of<A>;

    /// The value at an offset computed from the focused value.
    fn traces<A: Value>(function: impl FnOnce(A) -> M, wa: Self::Of<A>) -> A {
        let offset = function(Self::extract::<A>(wa.clone()));
        Self::trace::<A>(offset, wa)
    }

    /// Pairs every value with the offset it sits at.
    fn listen<A: Value>(wa: Self::Of<A>) -> Self::Of<(A, M)> {
        Self::listens::<A, M>(|offset| offset, wa)
    }
}
