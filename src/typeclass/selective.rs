//! Selective applicative functors.
//!
//! `Selective` sits between `Applicative` and `Monad`. With
//! [`Selective::select`] the *value* of a first effect decides whether a
//! second, statically known effect is needed: a `Left(a)` asks for the
//! function, a `Right(b)` is already the answer. Unlike `flat_map`, the set
//! of possible effects is fixed up front.
//!
//! Instances whose effects can be skipped implement
//! [`Selective::select_lazy`] so that the function effect is not even built
//! when the first effect produced a `Right`. The loop combinators
//! ([`any_s`](Selective::any_s), [`all_s`](Selective::all_s),
//! [`while_s`](Selective::while_s)) short-circuit for such instances and
//! never nest one step inside another: the defaults fold the items from
//! the left, and monads replace them with `tail_rec_m` loops through
//! [`selective_loops_from_monad!`](crate::selective_loops_from_monad).
//!
//! # Laws
//!
//! ```text
//! select(x, pure(func(|a| a))) == map(x, Either::merge)
//! ```
//!
//! Instances that skip effects (every monad) also satisfy
//! `select(pure(Right(b)), y) == pure(b)`. Applicative-only instances such
//! as `ValidatedK` may still report the effects of `y`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::instances::OptionK;
//! use kindred::typeclass::{Selective, func};
//!
//! let parsed = OptionK::select(Some(Either::Left("7")), Some(func(|s: &'static str| s.len())));
//! assert_eq!(parsed, Some(1));
//!
//! let ready = OptionK::select(Some(Either::<&str, usize>::Right(3)), None);
//! assert_eq!(ready, Some(3));
//! ```

use std::rc::Rc;

use super::{Applicative, Func, func};
use crate::control::{Either, Eval};
use crate::kind::Value;

/// An applicative whose effects can be chosen by earlier results.
pub trait Selective: Applicative {
    /// Applies the function effect only to `Left` values.
    fn select<A: Value, B: Value>(
        fab: Self::Of<Either<A, B>>,
        ff: Self::Of<Func<A, B>>,
    ) -> Self::Of<B>;

    /// Like [`select`](Selective::select) with a lazily built function effect.
    ///
    /// The default forces `ff`. Instances able to skip effects override it
    /// to force `ff` only when a `Left` is present.
    fn select_lazy<A: Value, B: Value>(
        fab: Self::Of<Either<A, B>>,
        ff: Eval<Self::Of<Func<A, B>>>,
    ) -> Self::Of<B> {
        Self::select::<A, B>(fab, ff.value())
    }

    /// Chooses one of two function effects depending on the side of `fab`.
    fn branch<A: Value, B: Value, C: Value>(
        fab: Self::Of<Either<A, B>>,
        on_left: Self::Of<Func<A, C>>,
        on_right: Self::Of<Func<B, C>>,
    ) -> Self::Of<C> {
        let nested = Self::map::<Either<A, B>, Either<A, Either<B, C>>>(fab, |either| match either {
            Either::Left(a) => Either::Left(a),
            Either::Right(b) => Either::Right(Either::Left(b)),
        });
        let lifted_left = Self::map::<Func<A, C>, Func<A, Either<B, C>>>(on_left, |function| {
            func(move |a| Either::Right(function(a)))
        });
        let partial = Self::select::<A, Either<B, C>>(nested, lifted_left);
        Self::select::<B, C>(partial, on_right)
    }

    /// Runs `if_true` or `if_false` depending on `condition`.
    fn if_s<A: Value>(
        condition: Self::Of<bool>,
        if_true: Self::Of<A>,
        if_false: Self::Of<A>,
    ) -> Self::Of<A> {
        Self::branch::<(), (), A>(
            Self::map::<bool, Either<(), ()>>(condition, |flag| {
                if flag { Either::Left(()) } else { Either::Right(()) }
            }),
            Self::map::<A, Func<(), A>>(if_true, |a| func(move |()| a.clone())),
            Self::map::<A, Func<(), A>>(if_false, |a| func(move |()| a.clone())),
        )
    }

    /// Runs `effect` only when `condition` yields `true`.
    fn when_s(condition: Self::Of<bool>, effect: Self::Of<()>) -> Self::Of<()> {
        Self::when_s_lazy(condition, Eval::now(effect))
    }

    /// Like [`when_s`](Selective::when_s), building `effect` only when needed.
    fn when_s_lazy(condition: Self::Of<bool>, effect: Eval<Self::Of<()>>) -> Self::Of<()> {
        Self::select_lazy::<(), ()>(
            Self::map::<bool, Either<(), ()>>(condition, |flag| {
                if flag { Either::Left(()) } else { Either::Right(()) }
            }),
            effect.map(|effect| Self::map::<(), Func<(), ()>>(effect, |()| func(|()| ()))),
        )
    }

    /// Uses `default` only when `fo` yields `None`.
    fn from_option_s<A: Value>(default: Self::Of<A>, fo: Self::Of<Option<A>>) -> Self::Of<A> {
        Self::select::<(), A>(
            Self::map::<Option<A>, Either<(), A>>(fo, |option| match option {
                Some(a) => Either::Right(a),
                None => Either::Left(()),
            }),
            Self::map::<A, Func<(), A>>(default, |a| func(move |()| a.clone())),
        )
    }

    /// Logical or; `right` runs only when `left` yields `false`.
    fn or_s(left: Self::Of<bool>, right: Self::Of<bool>) -> Self::Of<bool> {
        Self::or_s_lazy(left, Eval::now(right))
    }

    /// Logical and; `right` runs only when `left` yields `true`.
    fn and_s(left: Self::Of<bool>, right: Self::Of<bool>) -> Self::Of<bool> {
        Self::and_s_lazy(left, Eval::now(right))
    }

    /// [`or_s`](Selective::or_s) with a lazily built right operand.
    fn or_s_lazy(left: Self::Of<bool>, right: Eval<Self::Of<bool>>) -> Self::Of<bool> {
        Self::select_lazy::<(), bool>(
            Self::map::<bool, Either<(), bool>>(left, |flag| {
                if flag { Either::Right(true) } else { Either::Left(()) }
            }),
            right.map(|right| Self::map::<bool, Func<(), bool>>(right, |flag| func(move |()| flag))),
        )
    }

    /// [`and_s`](Selective::and_s) with a lazily built right operand.
    fn and_s_lazy(left: Self::Of<bool>, right: Eval<Self::Of<bool>>) -> Self::Of<bool> {
        Self::select_lazy::<(), bool>(
            Self::map::<bool, Either<(), bool>>(left, |flag| {
                if flag { Either::Left(()) } else { Either::Right(false) }
            }),
            right.map(|right| Self::map::<bool, Func<(), bool>>(right, |flag| func(move |()| flag))),
        )
    }

    /// `true` if `predicate` holds for some item, stopping at the first hit
    /// for instances that can skip effects.
    fn any_s<A: Value>(
        items: Vec<A>,
        predicate: impl Fn(A) -> Self::Of<bool> + 'static,
    ) -> Self::Of<bool> {
        let predicate = Rc::new(predicate);
        items.into_iter().fold(Self::pure(false), |found, item| {
            let predicate = Rc::clone(&predicate);
            Self::or_s_lazy(found, Eval::later(move || predicate(item.clone())))
        })
    }

    /// `true` if `predicate` holds for every item, stopping at the first miss
    /// for instances that can skip effects.
    fn all_s<A: Value>(
        items: Vec<A>,
        predicate: impl Fn(A) -> Self::Of<bool> + 'static,
    ) -> Self::Of<bool> {
        let predicate = Rc::new(predicate);
        items.into_iter().fold(Self::pure(true), |holds, item| {
            let predicate = Rc::clone(&predicate);
            Self::and_s_lazy(holds, Eval::later(move || predicate(item.clone())))
        })
    }

    /// Repeats `condition` for as long as it yields `true`.
    ///
    /// The loop is described lazily; forcing the returned [`Eval`] runs it.
    /// Monads run it as a `tail_rec_m` loop.
    fn while_s(condition: Self::Of<bool>) -> Eval<Self::Of<()>> {
        Eval::later(move || {
            let again = condition.clone();
            Self::when_s_lazy(
                condition.clone(),
                Eval::defer(move || Self::while_s(again.clone())),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{OptionK, VecK};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn select_applies_function_to_left() {
        let result = OptionK::select(Some(Either::<i32, i32>::Left(2)), Some(func(|n: i32| n * 5)));
        assert_eq!(result, Some(10));
    }

    #[rstest]
    fn select_on_right_ignores_missing_function() {
        let result = OptionK::select(Some(Either::<i32, i32>::Right(4)), None);
        assert_eq!(result, Some(4));
    }

    #[rstest]
    fn branch_routes_each_side() {
        let on_left = Some(func(|n: i32| format!("left {n}")));
        let on_right = Some(func(|s: &'static str| format!("right {s}")));
        assert_eq!(
            OptionK::branch(Some(Either::Left(1)), on_left.clone(), on_right.clone()),
            Some("left 1".to_string())
        );
        assert_eq!(
            OptionK::branch(Some(Either::Right("x")), on_left, on_right),
            Some("right x".to_string())
        );
    }

    #[rstest]
    #[case(true, Some("yes"))]
    #[case(false, Some("no"))]
    fn if_s_chooses(#[case] flag: bool, #[case] expected: Option<&'static str>) {
        assert_eq!(OptionK::if_s(Some(flag), Some("yes"), Some("no")), expected);
    }

    #[rstest]
    fn or_and_on_option() {
        assert_eq!(OptionK::or_s(Some(true), None), Some(true));
        assert_eq!(OptionK::or_s(Some(false), Some(true)), Some(true));
        assert_eq!(OptionK::and_s(Some(false), None), Some(false));
        assert_eq!(OptionK::and_s(Some(true), None), None);
    }

    #[rstest]
    fn from_option_s_uses_default_for_none() {
        assert_eq!(OptionK::from_option_s(Some(0), Some(None)), Some(0));
        assert_eq!(OptionK::from_option_s(None, Some(Some(3))), Some(3));
    }

    #[rstest]
    fn any_s_stops_at_first_hit() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let found = OptionK::any_s(vec![1, 2, 3, 4], move |n| {
            counter.set(counter.get() + 1);
            Some(n == 2)
        });
        assert_eq!(found, Some(true));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn all_s_stops_at_first_miss() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let all_small = OptionK::all_s(vec![1, 9, 2, 3], move |n| {
            counter.set(counter.get() + 1);
            Some(n < 5)
        });
        assert_eq!(all_small, Some(false));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn while_s_terminates_on_false() {
        assert_eq!(OptionK::while_s(Some(false)).value(), Some(()));
        assert_eq!(OptionK::while_s(None).value(), None);
    }

    #[rstest]
    fn vec_select_is_applicative() {
        let result = VecK::select(
            vec![Either::Left(1), Either::Right(10)],
            vec![func(|n: i32| n + 1), func(|n: i32| n * 100)],
        );
        assert_eq!(result, vec![2, 100, 10]);
    }
}
