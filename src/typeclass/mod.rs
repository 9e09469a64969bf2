//! Type class traits for functional programming abstractions.
//!
//! Every class is implemented on a *witness* (see [`crate::kind`]) and its
//! operations are associated functions: `OptionK::map(fa, f)`,
//! `VecK::traverse::<OptionK, _, _>(fa, f)`. Required operations are the
//! primitives each instance writes; everything else has a default built
//! from them.
//!
//! ## Covariant tower
//!
//! - [`Invariant`] → [`Functor`] → [`Applicative`] → [`Selective`] → [`Monad`]
//! - [`ApplicativeError`] / [`MonadError`]: recoverable domain errors
//! - [`Foldable`], [`Traverse`]
//! - [`FunctorFilter`], [`MonadFilter`], [`TraverseFilter`]
//! - [`SemigroupK`], [`MonoidK`], [`Alternative`], [`MonadCombine`]
//! - [`MonadState`], [`MonadReader`], [`MonadWriter`]
//!
//! ## Duals and variants
//!
//! - [`Comonad`], [`Bimonad`], [`ComonadStore`], [`ComonadEnv`], [`ComonadTraced`]
//! - [`Pairing`]
//! - [`Contravariant`], [`Divide`], [`Divisible`], [`Decidable`]
//! - [`Bifunctor`], [`Profunctor`] on binary witnesses
//! - [`EquatableK`]
//!
//! ## Plain values
//!
//! - [`Semigroup`], [`Monoid`] and the wrappers [`Sum`], [`Product`],
//!   [`Max`], [`Min`], [`First`], [`Last`]
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::OptionK;
//! use kindred::typeclass::{Applicative, Functor, Monad};
//!
//! let doubled = OptionK::map(Some(3), |n| n * 2);
//! let summed = OptionK::map2(doubled, Some(4), |a, b| a + b);
//! let checked = OptionK::flat_map(summed, |n| if n > 0 { Some(n) } else { None });
//! assert_eq!(checked, Some(10));
//! ```

use std::rc::Rc;

mod alternative;
mod applicative;
mod bifunctor;
mod comonad;
mod contravariant;
mod divisible;
mod equatable;
mod filter;
mod foldable;
mod functor;
mod invariant;
mod monad;
mod monad_error;
mod monad_reader;
mod monad_state;
mod monad_writer;
mod monoid;
mod pairing;
mod profunctor;
mod selective;
mod semigroup;
mod traversable;
mod wrappers;

pub use alternative::{Alternative, MonadCombine, MonoidK, SemigroupK};
pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use comonad::{Bimonad, Comonad, ComonadEnv, ComonadStore, ComonadTraced};
pub use contravariant::Contravariant;
pub use divisible::{Decidable, Divide, Divisible};
pub use equatable::EquatableK;
pub(crate) use equatable::slices_eq;
pub use filter::{FunctorFilter, MonadFilter, TraverseFilter, map_filter_via_flat_map};
pub use foldable::Foldable;
pub use functor::Functor;
pub use invariant::Invariant;
pub use monad::{
    Monad, all_s_via_tail_rec_m, any_s_via_tail_rec_m, ap_via_flat_map, select_lazy_via_flat_map, select_via_flat_map,
    while_s_via_tail_rec_m,
};
pub use monad_error::{ApplicativeError, MonadError};
pub use monad_reader::MonadReader;
pub use monad_state::MonadState;
pub use monad_writer::MonadWriter;
pub use monoid::Monoid;
pub use pairing::Pairing;
pub use profunctor::Profunctor;
pub use selective::Selective;
pub use semigroup::Semigroup;
pub use traversable::Traverse;
pub use wrappers::{Bounded, First, Last, Max, Min, Product, Sum};

/// A function stored inside an effect, such as the `F<A -> B>` given to
/// [`Applicative::ap`].
pub type Func<A, B> = Rc<dyn Fn(A) -> B>;

/// Wraps a closure as a [`Func`].
///
/// ```rust
/// use kindred::typeclass::func;
///
/// let increment = func(|n: i32| n + 1);
/// assert_eq!(increment(1), 2);
/// ```
pub fn func<A, B>(function: impl Fn(A) -> B + 'static) -> Func<A, B> {
    Rc::new(function)
}
