//! State monad - computations that thread a state.
//!
//! An [`IndexedState<S1, S2, A>`] is a function `S1 -> (A, S2)`: it may
//! change the *type* of the state as it runs. [`State<S, A>`] is the usual
//! case where both sides agree, and [`StateK<S>`] is its witness, with
//! `Functor`, `Applicative`, `Selective`, `Monad` and `MonadState<S>`.
//!
//! `StateK::tail_rec_m` runs its loop inside the state function, so
//! stepping through many states never grows the stack.
//!
//! # Laws
//!
//! - Get Put Law: `flat_map(get(), put) == pure(())`
//! - Put Get Law: `followed_by(put(s), get())` returns `s`
//! - Put Put Law: `followed_by(put(s1), put(s2)) == put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::State;
//!
//! let label = State::new(|count: u32| (format!("item-{count}"), count + 1));
//! let pair = label.clone().flat_map(move |first| label.clone().map(move |second| (first.clone(), second)));
//! assert_eq!(pair.run(0), (("item-0".to_string(), "item-1".to_string()), 2));
//! ```

use std::cell::RefCell;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::store::{Store, StoreK};
use crate::control::Either;
use crate::kind::{Kind3, Upcast3, Value, Witness, Witness3};
use crate::typeclass::{Applicative, Func, Functor, Monad, MonadState, Pairing, Traverse};

/// A state transition `S1 -> (A, S2)`.
pub struct IndexedState<S1, S2, A> {
    /// Uses Rc so the computation can be cloned and reused.
    run_function: Rc<dyn Fn(S1) -> (A, S2)>,
}

/// A state transition that keeps the state type.
pub type State<S, A> = IndexedState<S, S, A>;

impl<S1: 'static, S2: 'static, A: 'static> IndexedState<S1, S2, A> {
    /// Creates a computation from its transition function.
    pub fn new(function: impl Fn(S1) -> (A, S2) + 'static) -> Self {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation, returning the result and the final state.
    ///
    /// ```rust
    /// use kindred::data::State;
    ///
    /// let state: State<i32, i32> = State::new(|s| (s + 1, s * 2));
    /// assert_eq!(state.run(10), (11, 20));
    /// ```
    pub fn run(&self, initial: S1) -> (A, S2) {
        (self.run_function)(initial)
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(&self, initial: S1) -> A {
        self.run(initial).0
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial: S1) -> S2 {
        self.run(initial).1
    }

    /// Transforms the result.
    #[must_use]
    pub fn map<B: 'static>(self, function: impl Fn(A) -> B + 'static) -> IndexedState<S1, S2, B> {
        IndexedState::new(move |state| {
            let (a, next) = self.run(state);
            (function(a), next)
        })
    }

    /// Feeds the result and the intermediate state into the next step.
    #[must_use]
    pub fn flat_map<S3: 'static, B: 'static>(
        self,
        function: impl Fn(A) -> IndexedState<S2, S3, B> + 'static,
    ) -> IndexedState<S1, S3, B> {
        IndexedState::new(move |state| {
            let (a, next) = self.run(state);
            function(a).run(next)
        })
    }

    /// Transforms the final state, changing its type.
    #[must_use]
    pub fn map_state<S3: 'static>(self, function: impl Fn(S2) -> S3 + 'static) -> IndexedState<S1, S3, A> {
        IndexedState::new(move |state| {
            let (a, next) = self.run(state);
            (a, function(next))
        })
    }

    /// Adapts the initial state, changing its type.
    #[must_use]
    pub fn contramap_state<S0: 'static>(self, function: impl Fn(S0) -> S1 + 'static) -> IndexedState<S0, S2, A> {
        IndexedState::new(move |state| self.run(function(state)))
    }
}

impl<S1: 'static, S2: 'static> IndexedState<S1, S2, ()> {
    /// Replaces the state with one of another type computed from it.
    pub fn modify_indexed(function: impl Fn(S1) -> S2 + 'static) -> Self {
        Self::new(move |state| ((), function(state)))
    }
}

impl<S1, S2, A> Clone for IndexedState<S1, S2, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S1, S2, A> fmt::Display for IndexedState<S1, S2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

impl<S1, S2, A> fmt::Debug for IndexedState<S1, S2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IndexedState(<function>)")
    }
}

// =============================================================================
// Witnesses
// =============================================================================

/// Witness for `IndexedState<_, _, _>`.
#[derive(Debug)]
pub enum IndexedStateK {}

impl Witness3 for IndexedStateK {
    type Of<S1: Value, S2: Value, A: Value> = IndexedState<S1, S2, A>;
}

impl<S1: Value, S2: Value, A: Value> Upcast3 for IndexedState<S1, S2, A> {
    type Witness = IndexedStateK;
    type First = S1;
    type Second = S2;
    type Third = A;

    fn upcast3(self) -> Kind3<IndexedStateK, S1, S2, A> {
        Kind3::new(self)
    }
}

/// Witness for `State<S, _>`.
#[derive(Debug)]
pub struct StateK<S>(Infallible, PhantomData<fn() -> S>);

impl<S: Value> Witness for StateK<S> {
    type Of<A: Value> = State<S, A>;
}

// =============================================================================
// Type Class Instances
// =============================================================================

crate::invariant_from_functor!(impl[S: Value] StateK<S>);

impl<S: Value> Functor for StateK<S> {
    fn map<A: Value, B: Value>(fa: State<S, A>, function: impl Fn(A) -> B + 'static) -> State<S, B> {
        fa.map(function)
    }
}

impl<S: Value> Applicative for StateK<S> {
    fn pure<A: Value>(value: A) -> State<S, A> {
        State::new(move |state| (value.clone(), state))
    }

    fn ap<A: Value, B: Value>(ff: State<S, Func<A, B>>, fa: State<S, A>) -> State<S, B> {
        State::new(move |state| {
            let (function, next) = ff.run(state);
            let (a, last) = fa.run(next);
            (function(a), last)
        })
    }
}

crate::selective_from_monad!(impl[S: Value] StateK<S>);

impl<S: Value> Monad for StateK<S> {
    fn flat_map<A: Value, B: Value>(
        fa: State<S, A>,
        function: impl Fn(A) -> State<S, B> + 'static,
    ) -> State<S, B> {
        fa.flat_map(function)
    }

    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> State<S, Either<A, B>> + 'static,
    ) -> State<S, B> {
        State::new(move |state| {
            let mut current = initial.clone();
            let mut state = state;
            loop {
                match step(current).run(state) {
                    (Either::Left(next), next_state) => {
                        current = next;
                        state = next_state;
                    }
                    (Either::Right(done), final_state) => return (done, final_state),
                }
            }
        })
    }
}

impl<S: Value> MonadState<S> for StateK<S> {
    fn get() -> State<S, S> {
        State::new(|state: S| (state.clone(), state))
    }

    fn put(state: S) -> State<S, ()> {
        State::new(move |_| ((), state.clone()))
    }

    fn state<A: Value>(transition: impl Fn(S) -> (A, S) + 'static) -> State<S, A> {
        State::new(transition)
    }

    fn modify(modifier: impl Fn(S) -> S + 'static) -> State<S, ()> {
        State::new(move |state| ((), modifier(state)))
    }
}

/// Runs the state computation from the store's position and reads the
/// store at the position it ends in.
impl<S: Value> Pairing<StoreK<S>> for StateK<S> {
    fn zap<A: Value, B: Value, C>(
        fa: State<S, A>,
        gb: Store<S, B>,
        function: impl FnOnce(A, B) -> C,
    ) -> C {
        let (a, end) = fa.run(gb.position().clone());
        function(a, gb.peek(end))
    }
}

// =============================================================================
// Accumulating Traversals
// =============================================================================

/// Traverses `fa` left to right, threading an accumulator through
/// `function`; returns the final accumulator and the new structure.
///
/// This is `traverse` into `StateK<S>` run from `initial`. The state is
/// threaded through a single `map` pass instead, so structures of any size
/// are handled in constant stack space.
///
/// ```rust
/// use kindred::data::map_accumulate;
/// use kindred::instances::VecK;
///
/// let (total, running) = map_accumulate::<VecK, i32, i32, i32>(vec![1, 2, 3], 0, |sum, n| (sum + n, sum + n));
/// assert_eq!(total, 6);
/// assert_eq!(running, vec![1, 3, 6]);
/// ```
pub fn map_accumulate<F: Traverse, S: Value, A: Value, B: Value>(
    fa: F::Of<A>,
    initial: S,
    function: impl Fn(S, A) -> (S, B) + 'static,
) -> (S, F::Of<B>) {
    let slot = Rc::new(RefCell::new(initial));
    let threaded = Rc::clone(&slot);
    let structure = F::map::<A, B>(fa, move |a| {
        let current = threaded.borrow().clone();
        let (next, b) = function(current, a);
        *threaded.borrow_mut() = next;
        b
    });
    let state = slot.borrow().clone();
    (state, structure)
}

/// Pairs every element with its position, counting from zero.
///
/// ```rust
/// use kindred::data::zip_with_index;
/// use kindred::instances::OptionK;
///
/// assert_eq!(zip_with_index::<OptionK, char>(Some('a')), Some(('a', 0)));
/// ```
pub fn zip_with_index<F: Traverse, A: Value>(fa: F::Of<A>) -> F::Of<(A, usize)> {
    map_accumulate::<F, usize, A, (A, usize)>(fa, 0, |index, a| (index + 1, (a, index))).1
}
