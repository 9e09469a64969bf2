//! Env comonad - a value paired with a read-only environment.
//!
//! `Env<E, A>` is the comonad that pairs with `Reader<E, _>`: where a reader
//! *needs* an environment, an env *carries* one.

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::control::Eval;
use crate::kind::{Value, Witness};
use crate::typeclass::{Applicative, Comonad, ComonadEnv, Foldable, Functor, Traverse};

/// A value together with the environment it was produced in.
///
/// ```rust
/// use kindred::data::{Env, EnvK};
/// use kindred::typeclass::{Comonad, ComonadEnv};
///
/// type Priced = EnvK<f64>;
///
/// let price = Env::new(0.5_f64, 50.0_f64);
/// let discounted = Priced::coflat_map(price, |env: Env<f64, f64>| env.value() * env.environment());
/// assert_eq!(Priced::extract(discounted.clone()), 25.0);
/// assert_eq!(Priced::ask(discounted), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Env<E, A> {
    environment: E,
    value: A,
}

impl<E, A> Env<E, A> {
    pub const fn new(environment: E, value: A) -> Self {
        Self { environment, value }
    }

    pub const fn environment(&self) -> &E {
        &self.environment
    }

    pub const fn value(&self) -> &A {
        &self.value
    }

    pub fn into_parts(self) -> (E, A) {
        (self.environment, self.value)
    }

    pub fn map<B>(self, function: impl FnOnce(A) -> B) -> Env<E, B> {
        Env::new(self.environment, function(self.value))
    }
}

/// Witness for `Env<E, _>`.
#[derive(Debug)]
pub struct EnvK<E>(Infallible, PhantomData<fn() -> E>);

impl<E: Value> Witness for EnvK<E> {
    type Of<A: Value> = Env<E, A>;
}

crate::invariant_from_functor!(impl[E: Value] EnvK<E>);

impl<E: Value> Functor for EnvK<E> {
    fn map<A: Value, B: Value>(fa: Env<E, A>, function: impl Fn(A) -> B + 'static) -> Env<E, B> {
        fa.map(function)
    }
}

impl<E: Value> Comonad for EnvK<E> {
    fn extract<A: Value>(wa: Env<E, A>) -> A {
        wa.value
    }

    fn coflat_map<A: Value, B: Value>(
        wa: Env<E, A>,
        function: impl Fn(Env<E, A>) -> B + 'static,
    ) -> Env<E, B> {
        Env::new(wa.environment.clone(), function(wa))
    }
}

impl<E: Value> ComonadEnv<E> for EnvK<E> {
    fn ask<A: Value>(wa: Env<E, A>) -> E {
        wa.environment
    }

    fn local<A: Value>(function: impl FnOnce(E) -> E, wa: Env<E, A>) -> Env<E, A> {
        Env::new(function(wa.environment), wa.value)
    }
}

impl<E: Value> Foldable for EnvK<E> {
    fn fold_left<A: Value, B>(fa: Env<E, A>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        function(initial, fa.value)
    }

    fn fold_right<A: Value, B: Value>(
        fa: Env<E, A>,
        initial: Eval<B>,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B> {
        function(fa.value, initial)
    }
}

impl<E: Value> Traverse for EnvK<E> {
    fn traverse<G: Applicative, A: Value, B: Value>(
        fa: Env<E, A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Env<E, B>> {
        let (environment, value) = fa.into_parts();
        G::map::<B, Env<E, B>>(function(value), move |b| Env::new(environment.clone(), b))
    }
}
