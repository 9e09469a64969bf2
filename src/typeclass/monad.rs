//! Monad type class - sequencing dependent computations.
//!
//! A `Monad` lets the next effect depend on the value produced by the
//! previous one through [`Monad::flat_map`]. Every instance also provides
//! [`Monad::tail_rec_m`], a loop whose body returns `Left` to continue and
//! `Right` to stop. Instances implement it with an actual loop, so monadic
//! recursion of any depth runs in constant stack space.
//!
//! Monads get `ap` and `select` for free through [`ap_via_flat_map`] and
//! the [`selective_from_monad!`](crate::selective_from_monad) macro.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! F::flat_map(F::pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! F::flat_map(m, F::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! F::flat_map(F::flat_map(m, f), g) == F::flat_map(m, |x| F::flat_map(f(x), g))
//! ```
//!
//! ## Tail recursion consistency
//!
//! ```text
//! F::tail_rec_m(a, f) == F::flat_map(f(a), |e| match e {
//!     Left(a1) => F::tail_rec_m(a1, f),
//!     Right(b) => F::pure(b),
//! })
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::instances::OptionK;
//! use kindred::typeclass::Monad;
//!
//! let halved = OptionK::flat_map(Some(10), |n| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halved, Some(5));
//!
//! // Counting to 100 000 through `tail_rec_m` does not grow the stack.
//! let counted = OptionK::tail_rec_m(0_u32, |n| {
//!     Some(if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) })
//! });
//! assert_eq!(counted, Some(100_000));
//! ```

use std::rc::Rc;

use super::{Func, Selective};
use crate::control::{Either, Eval};
use crate::kind::Value;

/// A selective applicative whose next effect may depend on previous values.
pub trait Monad: Selective {
    /// Sequences `function` after `fa`, feeding it each value.
    fn flat_map<A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(A) -> Self::Of<B> + 'static,
    ) -> Self::Of<B>;

    /// Runs `step` repeatedly until it yields `Right`.
    ///
    /// Implementations must loop rather than recurse wherever the type
    /// allows it.
    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> Self::Of<Either<A, B>> + 'static,
    ) -> Self::Of<B>;

    /// Removes one layer of nesting.
    fn flatten<A: Value>(ffa: Self::Of<Self::Of<A>>) -> Self::Of<A> {
        Self::flat_map::<Self::Of<A>, A>(ffa, |fa| fa)
    }

    /// Runs `fa`, then `fb`, keeping the result of `fb`.
    fn followed_by<A: Value, B: Value>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<B> {
        Self::flat_map::<A, B>(fa, move |_| fb.clone())
    }

    /// Runs `fa`, then the lazily built `fb`, keeping the result of `fb`.
    ///
    /// `fb` is built only if `fa` produces a value.
    fn followed_by_eval<A: Value, B: Value>(fa: Self::Of<A>, fb: Eval<Self::Of<B>>) -> Self::Of<B> {
        Self::flat_map::<A, B>(fa, move |_| fb.value())
    }

    /// Runs `fa`, then `fb`, keeping the result of `fa`.
    fn for_effect<A: Value, B: Value>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<A> {
        Self::flat_map::<A, A>(fa, move |a| Self::map::<B, A>(fb.clone(), move |_| a.clone()))
    }

    /// Pairs each value with the result of the effect it selects.
    fn mproduct<A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(A) -> Self::Of<B> + 'static,
    ) -> Self::Of<(A, B)> {
        Self::flat_map::<A, (A, B)>(fa, move |a| {
            let kept = a.clone();
            Self::map::<B, (A, B)>(function(a), move |b| (kept.clone(), b))
        })
    }

    /// Chooses the next effect from a boolean effect.
    fn if_m<B: Value>(
        condition: Self::Of<bool>,
        if_true: impl Fn() -> Self::Of<B> + 'static,
        if_false: impl Fn() -> Self::Of<B> + 'static,
    ) -> Self::Of<B> {
        Self::flat_map::<bool, B>(condition, move |flag| if flag { if_true() } else { if_false() })
    }

    /// Re-runs `fa` while its result satisfies `predicate`, returning the
    /// first result that does not.
    fn iterate_while<A: Value>(
        fa: Self::Of<A>,
        predicate: impl Fn(&A) -> bool + 'static,
    ) -> Self::Of<A> {
        let predicate = Rc::new(predicate);
        Self::tail_rec_m::<(), A>((), move |()| {
            let predicate = Rc::clone(&predicate);
            Self::map::<A, Either<(), A>>(fa.clone(), move |a| {
                if predicate(&a) { Either::Left(()) } else { Either::Right(a) }
            })
        })
    }

    /// Re-runs `fa` until its result satisfies `predicate`.
    fn iterate_until<A: Value>(
        fa: Self::Of<A>,
        predicate: impl Fn(&A) -> bool + 'static,
    ) -> Self::Of<A> {
        Self::iterate_while::<A>(fa, move |a| !predicate(a))
    }
}

/// `ap` expressed through `flat_map` and `map`.
pub fn ap_via_flat_map<F: Monad, A: Value, B: Value>(
    ff: F::Of<Func<A, B>>,
    fa: F::Of<A>,
) -> F::Of<B> {
    F::flat_map::<Func<A, B>, B>(ff, move |function| F::map::<A, B>(fa.clone(), move |a| function(a)))
}

/// `select` expressed through `flat_map`: the function effect runs only for
/// `Left` values.
pub fn select_via_flat_map<F: Monad, A: Value, B: Value>(
    fab: F::Of<Either<A, B>>,
    ff: F::Of<Func<A, B>>,
) -> F::Of<B> {
    F::flat_map::<Either<A, B>, B>(fab, move |either| match either {
        Either::Left(a) => F::map::<Func<A, B>, B>(ff.clone(), move |function| function(a.clone())),
        Either::Right(b) => F::pure(b),
    })
}

/// Lazy `select` through `flat_map`: `ff` is built only for `Left` values.
pub fn select_lazy_via_flat_map<F: Monad, A: Value, B: Value>(
    fab: F::Of<Either<A, B>>,
    ff: Eval<F::Of<Func<A, B>>>,
) -> F::Of<B> {
    F::flat_map::<Either<A, B>, B>(fab, move |either| match either {
        Either::Left(a) => F::map::<Func<A, B>, B>(ff.value(), move |function| function(a.clone())),
        Either::Right(b) => F::pure(b),
    })
}

/// `any_s` as a `tail_rec_m` loop: the predicate effect of the next item
/// runs only after the previous one yielded `false`.
pub fn any_s_via_tail_rec_m<F: Monad, A: Value>(
    items: Vec<A>,
    predicate: impl Fn(A) -> F::Of<bool> + 'static,
) -> F::Of<bool> {
    let items = Rc::new(items);
    F::tail_rec_m::<usize, bool>(0, move |index| match items.get(index) {
        Some(item) => F::map::<bool, Either<usize, bool>>(predicate(item.clone()), move |found| {
            if found { Either::Right(true) } else { Either::Left(index + 1) }
        }),
        None => F::pure::<Either<usize, bool>>(Either::Right(false)),
    })
}

/// `all_s` as a `tail_rec_m` loop, stopping at the first `false`.
pub fn all_s_via_tail_rec_m<F: Monad, A: Value>(
    items: Vec<A>,
    predicate: impl Fn(A) -> F::Of<bool> + 'static,
) -> F::Of<bool> {
    let items = Rc::new(items);
    F::tail_rec_m::<usize, bool>(0, move |index| match items.get(index) {
        Some(item) => F::map::<bool, Either<usize, bool>>(predicate(item.clone()), move |holds| {
            if holds { Either::Left(index + 1) } else { Either::Right(false) }
        }),
        None => F::pure::<Either<usize, bool>>(Either::Right(true)),
    })
}

/// `while_s` as a `tail_rec_m` loop re-running `condition`.
pub fn while_s_via_tail_rec_m<F: Monad>(condition: F::Of<bool>) -> Eval<F::Of<()>> {
    Eval::later(move || {
        let condition = condition.clone();
        F::tail_rec_m::<(), ()>((), move |()| {
            F::map::<bool, Either<(), ()>>(condition.clone(), |again| {
                if again { Either::Left(()) } else { Either::Right(()) }
            })
        })
    })
}

/// Expands to `any_s`, `all_s` and `while_s` overrides built on
/// `tail_rec_m`, for use inside a `Selective` impl of a monad.
#[macro_export]
macro_rules! selective_loops_from_monad {
    () => {
        fn any_s<A: $crate::kind::Value>(
            items: ::std::vec::Vec<A>,
            predicate: impl Fn(A) -> Self::Of<bool> + 'static,
        ) -> Self::Of<bool> {
            $crate::typeclass::any_s_via_tail_rec_m::<Self, A>(items, predicate)
        }

        fn all_s<A: $crate::kind::Value>(
            items: ::std::vec::Vec<A>,
            predicate: impl Fn(A) -> Self::Of<bool> + 'static,
        ) -> Self::Of<bool> {
            $crate::typeclass::all_s_via_tail_rec_m::<Self, A>(items, predicate)
        }

        fn while_s(condition: Self::Of<bool>) -> $crate::control::Eval<Self::Of<()>> {
            $crate::typeclass::while_s_via_tail_rec_m::<Self>(condition)
        }
    };
}

/// Implements `Selective` for a monad through `flat_map`.
///
/// ```rust,ignore
/// selective_from_monad!(OptionK);
/// selective_from_monad!(impl[S: Value] StateK<S>);
/// ```
#[macro_export]
macro_rules! selective_from_monad {
    (impl[$($generics:tt)*] $witness:ty) => {
        impl<$($generics)*> $crate::typeclass::Selective for $witness {
            fn select<A: $crate::kind::Value, B: $crate::kind::Value>(
                fab: Self::Of<$crate::control::Either<A, B>>,
                ff: Self::Of<$crate::typeclass::Func<A, B>>,
            ) -> Self::Of<B> {
                $crate::typeclass::select_via_flat_map::<Self, A, B>(fab, ff)
            }

            fn select_lazy<A: $crate::kind::Value, B: $crate::kind::Value>(
                fab: Self::Of<$crate::control::Either<A, B>>,
                ff: $crate::control::Eval<Self::Of<$crate::typeclass::Func<A, B>>>,
            ) -> Self::Of<B> {
                $crate::typeclass::select_lazy_via_flat_map::<Self, A, B>(fab, ff)
            }

            $crate::selective_loops_from_monad!();
        }
    };
    ($witness:ty) => {
        $crate::selective_from_monad!(impl[] $witness);
    };
}
