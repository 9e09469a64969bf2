//! `MonadState` type class - stateful computation capability.
//!
//! # Laws
//!
//! ## Get Put Law
//!
//! ```text
//! flat_map(get(), put) == pure(())
//! ```
//!
//! ## Put Get Law
//!
//! ```text
//! followed_by(put(s), get()) == followed_by(put(s), pure(s))
//! ```
//!
//! ## Put Put Law
//!
//! ```text
//! followed_by(put(s1), put(s2)) == put(s2)
//! ```
//!
//! ## Modify Composition Law
//!
//! ```text
//! followed_by(modify(f), modify(g)) == modify(|s| g(f(s)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::StateK;
//! use kindred::typeclass::{Functor, Monad, MonadState};
//!
//! type Counter = StateK<i32>;
//!
//! let tick = Counter::flat_map(Counter::get(), |current: i32| {
//!     Counter::map(Counter::put(current + 1), move |()| current)
//! });
//! assert_eq!(tick.run(10), (10, 11));
//! ```

use super::Monad;
use crate::kind::Value;

/// A monad that threads a state of type `S`.
pub trait MonadState<S: Value>: Monad {
    /// The current state.
    fn get() -> Self::Of<S>;

    /// Replaces the state.
    fn put(state: S) -> Self::Of<()>;

    /// Runs a state transition producing a result and the next state.
    fn state<A: Value>(transition: impl Fn(S) -> (A, S) + 'static) -> Self::Of<A> {
        Self::flat_map::<S, A>(Self::get(), move |current| {
            let (result, next) = transition(current);
            Self::map::<(), A>(Self::put(next), move |()| result.clone())
        })
    }

    /// Transforms the state.
    fn modify(modifier: impl Fn(S) -> S + 'static) -> Self::Of<()> {
        Self::flat_map::<S, ()>(Self::get(), move |current| Self::put(modifier(current)))
    }

    /// A projection of the state.
    fn gets<A: Value>(projection: impl Fn(&S) -> A + 'static) -> Self::Of<A> {
        Self::map::<S, A>(Self::get(), move |state| projection(&state))
    }
}
