//! The monad generated by a comonad.
//!
//! `Co<W, R, A>` is a computation that, handed a `W` full of continuations
//! `A -> R`, picks one and feeds it an `A`. Any comonad `W` yields a monad
//! this way, and `Co<W, _, _>` pairs with `W` by construction:
//! `Co<StoreK<S>, ..>` behaves like `State<S, _>`, `Co<EnvK<E>, ..>` like a
//! reader, `Co<TracedK<M>, ..>` like a writer.
//!
//! `tail_rec_m` is written through `flat_map`; each step adds a frame when
//! the computation finally runs, so long loops belong in a stack-safe monad.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::control::Either;
use crate::kind::{Value, Witness};
use crate::typeclass::{Applicative, Comonad, Func, Functor, Monad, func};

/// A computation that selects a continuation from a `W` context.
///
/// ```rust
/// use kindred::data::{Co, CoK, Store, StoreK};
/// use kindred::typeclass::{Func, Monad, func};
///
/// type Walk = CoK<StoreK<i32>, String>;
///
/// // Moves one cell to the right.
/// let step: Co<StoreK<i32>, String, ()> =
///     Co::new(|store: Store<i32, Func<(), String>>| store.peek(store.position() + 1)(()));
/// let twice = Walk::flat_map(step.clone(), move |()| step.clone());
/// let board = Store::new(|position: i32| func(move |()| format!("at {position}")), 0);
/// assert_eq!(twice.zap_with(board), "at 2");
/// ```
pub struct Co<W: Witness, R: Value, A: Value> {
    run_function: Rc<dyn Fn(W::Of<Func<A, R>>) -> R>,
}

impl<W: Witness, R: Value, A: Value> Co<W, R, A> {
    pub fn new(function: impl Fn(W::Of<Func<A, R>>) -> R + 'static) -> Self {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against a context of continuations.
    pub fn run(&self, continuations: W::Of<Func<A, R>>) -> R {
        (self.run_function)(continuations)
    }
}

impl<W: Comonad, R: Value, A: Value> Co<W, R, A> {
    /// Runs the computation against a `W` of functions producing the final
    /// answer from the selected `A`.
    pub fn zap_with(&self, handlers: W::Of<Func<A, R>>) -> R {
        self.run(handlers)
    }

    /// Lifts a comonadic query: the computation reads the context it is
    /// run in and continues with the focused continuation.
    pub fn lift(query: impl Fn(W::Of<()>) -> A + 'static) -> Self {
        Self::new(move |continuations: W::Of<Func<A, R>>| {
            let shape = W::map::<Func<A, R>, ()>(continuations.clone(), |_| ());
            W::extract::<Func<A, R>>(continuations)(query(shape))
        })
    }
}

impl<W: Witness, R: Value, A: Value> Clone for Co<W, R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<W: Witness, R: Value, A: Value> fmt::Debug for Co<W, R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Co(<function>)")
    }
}

/// Witness for `Co<W, R, _>`.
#[derive(Debug)]
pub struct CoK<W, R>(Infallible, PhantomData<fn() -> (W, R)>);

impl<W: Witness, R: Value> Witness for CoK<W, R> {
    type Of<A: Value> = Co<W, R, A>;
}

crate::invariant_from_functor!(impl[W: Comonad, R: Value] CoK<W, R>);

impl<W: Comonad, R: Value> Functor for CoK<W, R> {
    fn map<A: Value, B: Value>(fa: Co<W, R, A>, function: impl Fn(A) -> B + 'static) -> Co<W, R, B> {
        let function = Rc::new(function);
        Co::new(move |continuations: W::Of<Func<B, R>>| {
            let function = Rc::clone(&function);
            fa.run(W::map::<Func<B, R>, Func<A, R>>(continuations, move |continuation| {
                let function = Rc::clone(&function);
                func(move |a| continuation(function(a)))
            }))
        })
    }
}

impl<W: Comonad, R: Value> Applicative for CoK<W, R> {
    fn pure<A: Value>(value: A) -> Co<W, R, A> {
        Co::new(move |continuations| W::extract::<Func<A, R>>(continuations)(value.clone()))
    }

    fn ap<A: Value, B: Value>(ff: Co<W, R, Func<A, B>>, fa: Co<W, R, A>) -> Co<W, R, B> {
        Self::flat_map::<Func<A, B>, B>(ff, move |function| Self::map::<A, B>(fa.clone(), move |a| function(a)))
    }
}

crate::selective_from_monad!(impl[W: Comonad, R: Value] CoK<W, R>);

impl<W: Comonad, R: Value> Monad for CoK<W, R> {
    fn flat_map<A: Value, B: Value>(
        fa: Co<W, R, A>,
        function: impl Fn(A) -> Co<W, R, B> + 'static,
    ) -> Co<W, R, B> {
        let function = Rc::new(function);
        Co::new(move |continuations: W::Of<Func<B, R>>| {
            let function = Rc::clone(&function);
            fa.run(W::coflat_map::<Func<B, R>, Func<A, R>>(continuations, move |focused| {
                let function = Rc::clone(&function);
                func(move |a| function(a).run(focused.clone()))
            }))
        })
    }

    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> Co<W, R, Either<A, B>> + 'static,
    ) -> Co<W, R, B> {
        continue_from::<W, R, A, B>(initial, Rc::new(step))
    }
}

type Step<W, R, A, B> = Rc<dyn Fn(A) -> Co<W, R, Either<A, B>>>;

fn continue_from<W: Comonad, R: Value, A: Value, B: Value>(current: A, step: Step<W, R, A, B>) -> Co<W, R, B> {
    let next = step(current);
    CoK::<W, R>::flat_map::<Either<A, B>, B>(next, move |either| match either {
        Either::Left(a) => continue_from::<W, R, A, B>(a, Rc::clone(&step)),
        Either::Right(b) => CoK::<W, R>::pure::<B>(b),
    })
}
