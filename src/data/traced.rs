//! Traced comonad - a value for every monoidal offset.
//!
//! `Traced<M, A>` is a function `M -> A` read relative to a monoid: the
//! focus is at `M::empty()`, and `coflat_map` combines offsets as it moves.
//! It pairs with `Writer<M, _>`, whose output says which offset to read.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::kind::{Value, Witness};
use crate::typeclass::{Comonad, ComonadTraced, Functor, Monoid};

/// A function from a monoidal offset to a value.
///
/// ```rust
/// use kindred::data::{Traced, TracedK};
/// use kindred::typeclass::{Comonad, ComonadTraced, Sum};
///
/// type Shifted = TracedK<Sum<i32>>;
///
/// let scaled = Traced::new(|offset: Sum<i32>| offset.into_inner() * 10);
/// assert_eq!(Shifted::extract(scaled.clone()), 0);
/// assert_eq!(Shifted::trace(Sum::new(4), scaled), 40);
/// ```
pub struct Traced<M, A> {
    run_function: Rc<dyn Fn(M) -> A>,
}

impl<M: 'static, A: 'static> Traced<M, A> {
    pub fn new(function: impl Fn(M) -> A + 'static) -> Self {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// The value at `offset`.
    pub fn run(&self, offset: M) -> A {
        (self.run_function)(offset)
    }

    pub fn map<B: 'static>(self, function: impl Fn(A) -> B + 'static) -> Traced<M, B> {
        Traced::new(move |offset| function(self.run(offset)))
    }
}

impl<M: Monoid + 'static, A: 'static> Traced<M, A> {
    /// The value at the empty offset.
    pub fn extract(&self) -> A {
        self.run(M::empty())
    }
}

impl<M, A> Clone for Traced<M, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<M, A> fmt::Debug for Traced<M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Traced(<function>)")
    }
}

/// Witness for `Traced<M, _>`.
#[derive(Debug)]
pub struct TracedK<M>(Infallible, PhantomData<fn() -> M>);

impl<M: Value> Witness for TracedK<M> {
    type Of<A: Value> = Traced<M, A>;
}

crate::invariant_from_functor!(impl[M: Value] TracedK<M>);

impl<M: Value> Functor for TracedK<M> {
    fn map<A: Value, B: Value>(fa: Traced<M, A>, function: impl Fn(A) -> B + 'static) -> Traced<M, B> {
        fa.map(function)
    }
}

impl<M: Value + Monoid> Comonad for TracedK<M> {
    fn extract<A: Value>(wa: Traced<M, A>) -> A {
        wa.extract()
    }

    /// Position `m` of the result sees `wa` shifted by `m`.
    fn coflat_map<A: Value, B: Value>(
        wa: Traced<M, A>,
        function: impl Fn(Traced<M, A>) -> B + 'static,
    ) -> Traced<M, B> {
        Traced::new(move |offset: M| {
            let base = wa.clone();
            function(Traced::new(move |inner: M| base.run(offset.clone().combine(inner))))
        })
    }
}

impl<M: Value + Monoid> ComonadTraced<M> for TracedK<M> {
    fn trace<A: Value>(offset: M, wa: Traced<M, A>) -> A {
        wa.run(offset)
    }

    fn listens<A: Value, B: Value>(
        function: impl Fn(M) -> B + 'static,
        wa: Traced<M, A>,
    ) -> Traced<M, (A, B)> {
        Traced::new(move |offset: M| (wa.run(offset.clone()), function(offset)))
    }

    fn censor<A: Value>(function: impl Fn(M) -> M + 'static, wa: Traced<M, A>) -> Traced<M, A> {
        Traced::new(move |offset| wa.run(function(offset)))
    }
}
