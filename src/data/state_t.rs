//! State monad transformer.
//!
//! `StateT<F, S, A>` is a state transition whose result lives in another
//! monad: `S -> F<(A, S)>`. With `F = OptionK` a step may fail, with
//! `F = VecK` it may branch, with `F = EvalK` it is deferred. One set of
//! instances covers every base monad through its witness.
//!
//! ```rust
//! use kindred::data::{StateT, StateTK};
//! use kindred::instances::OptionK;
//! use kindred::typeclass::{Monad, MonadState};
//!
//! type Budget = StateTK<OptionK, u32>;
//!
//! fn spend(amount: u32) -> StateT<OptionK, u32, u32> {
//!     StateT::new(move |left: u32| left.checked_sub(amount).map(|rest| (amount, rest)))
//! }
//!
//! let both = Budget::flat_map(spend(3), |_| spend(4));
//! assert_eq!(both.run(10), Some((4, 3)));
//! assert_eq!(both.run(5), None);
//! assert_eq!(Budget::get().run(7), Some((7, 7)));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::control::Either;
use crate::kind::{Value, Witness};
use crate::typeclass::{Applicative, Func, Functor, Monad, MonadState};

/// A state transition `S -> F<(A, S)>`.
pub struct StateT<F: Witness, S: Value, A: Value> {
    run_function: Rc<dyn Fn(S) -> F::Of<(A, S)>>,
}

impl<F: Witness, S: Value, A: Value> StateT<F, S, A> {
    pub fn new(transition: impl Fn(S) -> F::Of<(A, S)> + 'static) -> Self {
        Self {
            run_function: Rc::new(transition),
        }
    }

    /// Runs the transition from `initial`.
    pub fn run(&self, initial: S) -> F::Of<(A, S)> {
        (self.run_function)(initial)
    }
}

impl<F: Functor, S: Value, A: Value> StateT<F, S, A> {
    /// Runs the transition and keeps only the results.
    pub fn eval(&self, initial: S) -> F::Of<A> {
        F::map::<(A, S), A>(self.run(initial), |(a, _)| a)
    }

    /// Runs the transition and keeps only the final states.
    pub fn exec(&self, initial: S) -> F::Of<S> {
        F::map::<(A, S), S>(self.run(initial), |(_, s)| s)
    }

    /// Lifts a computation of the base monad, leaving the state alone.
    pub fn lift(fa: F::Of<A>) -> Self {
        Self::new(move |state: S| F::map::<A, (A, S)>(fa.clone(), move |a| (a, state.clone())))
    }
}

impl<F: Witness, S: Value, A: Value> Clone for StateT<F, S, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<F: Witness, S: Value, A: Value> fmt::Debug for StateT<F, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("StateT(<function>)")
    }
}

/// Witness for `StateT<F, S, _>`.
#[derive(Debug)]
pub struct StateTK<F, S>(Infallible, PhantomData<fn() -> (F, S)>);

impl<F: Witness, S: Value> Witness for StateTK<F, S> {
    type Of<A: Value> = StateT<F, S, A>;
}

// =============================================================================
// Type Class Instances
// =============================================================================

crate::invariant_from_functor!(impl[F: Functor, S: Value] StateTK<F, S>);

impl<F: Functor, S: Value> Functor for StateTK<F, S> {
    fn map<A: Value, B: Value>(fa: StateT<F, S, A>, function: impl Fn(A) -> B + 'static) -> StateT<F, S, B> {
        let function = Rc::new(function);
        StateT::new(move |state| {
            let function = Rc::clone(&function);
            F::map::<(A, S), (B, S)>(fa.run(state), move |(a, next)| (function(a), next))
        })
    }
}

impl<F: Monad, S: Value> Applicative for StateTK<F, S> {
    fn pure<A: Value>(value: A) -> StateT<F, S, A> {
        StateT::new(move |state| F::pure::<(A, S)>((value.clone(), state)))
    }

    fn ap<A: Value, B: Value>(ff: StateT<F, S, Func<A, B>>, fa: StateT<F, S, A>) -> StateT<F, S, B> {
        Self::flat_map::<Func<A, B>, B>(ff, move |function| Self::map::<A, B>(fa.clone(), move |a| function(a)))
    }
}

crate::selective_from_monad!(impl[F: Monad, S: Value] StateTK<F, S>);

impl<F: Monad, S: Value> Monad for StateTK<F, S> {
    fn flat_map<A: Value, B: Value>(
        fa: StateT<F, S, A>,
        function: impl Fn(A) -> StateT<F, S, B> + 'static,
    ) -> StateT<F, S, B> {
        let function = Rc::new(function);
        StateT::new(move |state| {
            let function = Rc::clone(&function);
            F::flat_map::<(A, S), (B, S)>(fa.run(state), move |(a, next)| function(a).run(next))
        })
    }

    /// Loops through the base monad's `tail_rec_m`, so stack safety is
    /// whatever `F` provides.
    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> StateT<F, S, Either<A, B>> + 'static,
    ) -> StateT<F, S, B> {
        let step = Rc::new(step);
        StateT::new(move |state: S| {
            let step = Rc::clone(&step);
            F::tail_rec_m::<(A, S), (B, S)>((initial.clone(), state), move |(a, current)| {
                F::map::<(Either<A, B>, S), Either<(A, S), (B, S)>>(step(a).run(current), |(either, next)| {
                    match either {
                        Either::Left(a) => Either::Left((a, next)),
                        Either::Right(b) => Either::Right((b, next)),
                    }
                })
            })
        })
    }
}

impl<F: Monad, S: Value> MonadState<S> for StateTK<F, S> {
    fn get() -> StateT<F, S, S> {
        StateT::new(|state: S| F::pure::<(S, S)>((state.clone(), state)))
    }

    fn put(state: S) -> StateT<F, S, ()> {
        StateT::new(move |_| F::pure::<((), S)>(((), state.clone())))
    }
}
