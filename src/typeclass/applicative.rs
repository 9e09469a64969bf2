//! Applicative type class - combining independent effects.
//!
//! An `Applicative` lifts plain values with [`Applicative::pure`] and
//! applies a function held inside an effect to a value held inside another
//! with [`Applicative::ap`]. Because neither effect depends on the other's
//! result, an applicative may run both and combine their outcomes; this is
//! how `Validated` accumulates every error instead of stopping at the first.
//!
//! The n-ary forms `map3..map9` and `tupled3..tupled9` are generated from
//! `map2`, so every instance gets them for free.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! F::ap(F::pure(func(|x| x)), v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! F::ap(F::pure(func(f)), F::pure(x)) == F::pure(f(x))
//! ```
//!
//! ## Interchange
//!
//! ```text
//! F::ap(u, F::pure(y)) == F::ap(F::pure(func(|f| f(y))), u)
//! ```
//!
//! ## Map consistency
//!
//! ```text
//! F::map(fa, f) == F::ap(F::pure(func(f)), fa)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionK, VecK};
//! use kindred::typeclass::Applicative;
//!
//! assert_eq!(OptionK::map2(Some(1), Some(2), |a, b| a + b), Some(3));
//! assert_eq!(OptionK::map3(Some(1), None::<i32>, Some(3), |a, b, c| a + b + c), None);
//! assert_eq!(VecK::product(vec![1, 2], vec!['a']), vec![(1, 'a'), (2, 'a')]);
//! ```

use std::rc::Rc;

use super::{Func, Functor, func};
use crate::control::Eval;
use crate::kind::Value;

/// Generates `tupledN` and `mapN` from the arity below them.
macro_rules! derive_arities {
    ($(($arity:literal, $previous:literal): [$($value:ident: $type:ident),+], $last:ident: $last_type:ident;)+) => {
        paste::paste! {
            $(
                /// Combines the effects into a tuple, running them left to right.
                fn [<tupled $arity>]<$($type: Value,)+ $last_type: Value>(
                    $($value: Self::Of<$type>,)+
                    $last: Self::Of<$last_type>,
                ) -> Self::Of<($($type,)+ $last_type)> {
                    Self::map2::<($($type,)+), $last_type, ($($type,)+ $last_type)>(
                        Self::[<tupled $previous>]::<$($type),+>($($value),+),
                        $last,
                        |($($value,)+), $last| ($($value,)+ $last),
                    )
                }

                /// Combines the effects with a function taking one argument per effect.
                fn [<map $arity>]<$($type: Value,)+ $last_type: Value, Z: Value>(
                    $($value: Self::Of<$type>,)+
                    $last: Self::Of<$last_type>,
                    function: impl Fn($($type,)+ $last_type) -> Z + 'static,
                ) -> Self::Of<Z> {
                    Self::map::<($($type,)+ $last_type), Z>(
                        Self::[<tupled $arity>]::<$($type,)+ $last_type>($($value,)+ $last),
                        move |($($value,)+ $last)| function($($value,)+ $last),
                    )
                }
            )+
        }
    };
}

/// A functor that can lift values and combine independent effects.
///
/// Implementors provide [`pure`](Applicative::pure) and
/// [`ap`](Applicative::ap); everything else is derived. Instances whose
/// effects can short-circuit should override
/// [`map2_eval`](Applicative::map2_eval) so that the lazy second argument is
/// never forced when the first effect already decides the result.
pub trait Applicative: Functor {
    /// Lifts a plain value.
    fn pure<A: Value>(value: A) -> Self::Of<A>;

    /// Applies the function(s) in `ff` to the value(s) in `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::OptionK;
    /// use kindred::typeclass::{Applicative, func};
    ///
    /// assert_eq!(OptionK::ap(Some(func(|n: i32| n + 1)), Some(1)), Some(2));
    /// ```
    fn ap<A: Value, B: Value>(ff: Self::Of<Func<A, B>>, fa: Self::Of<A>) -> Self::Of<B>;

    /// Combines two independent effects with a binary function.
    fn map2<A: Value, B: Value, C: Value>(
        fa: Self::Of<A>,
        fb: Self::Of<B>,
        function: impl Fn(A, B) -> C + 'static,
    ) -> Self::Of<C> {
        let function = Rc::new(function);
        let partial = Self::map::<A, Func<B, C>>(fa, move |a| {
            let function = Rc::clone(&function);
            func(move |b: B| function(a.clone(), b))
        });
        Self::ap::<B, C>(partial, fb)
    }

    /// Like [`map2`](Applicative::map2) with a lazily provided second effect.
    ///
    /// The default forces `fb`; short-circuiting instances return without
    /// forcing it when `fa` already determines the result.
    fn map2_eval<A: Value, B: Value, C: Value>(
        fa: Self::Of<A>,
        fb: Eval<Self::Of<B>>,
        function: impl Fn(A, B) -> C + 'static,
    ) -> Eval<Self::Of<C>> {
        let function = Rc::new(function);
        fb.map(move |fb| {
            let function = Rc::clone(&function);
            Self::map2::<A, B, C>(fa.clone(), fb, move |a, b| function(a, b))
        })
    }

    /// Pairs the results of two effects.
    fn product<A: Value, B: Value>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<(A, B)> {
        Self::map2::<A, B, (A, B)>(fa, fb, |a, b| (a, b))
    }

    /// Runs both effects, keeping the left result.
    fn product_left<A: Value, B: Value>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<A> {
        Self::map2::<A, B, A>(fa, fb, |a, _| a)
    }

    /// Runs both effects, keeping the right result.
    fn product_right<A: Value, B: Value>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<B> {
        Self::map2::<A, B, B>(fa, fb, |_, b| b)
    }

    /// The effect that does nothing.
    fn unit() -> Self::Of<()> {
        Self::pure(())
    }

    /// Runs `fa` only when `condition` holds.
    fn when(condition: bool, fa: Self::Of<()>) -> Self::Of<()> {
        if condition { fa } else { Self::unit() }
    }

    /// Runs `fa` `count` times, collecting the results.
    fn replicate<A: Value>(count: usize, fa: Self::Of<A>) -> Self::Of<Vec<A>> {
        (0..count).fold(Self::pure::<Vec<A>>(Vec::with_capacity(count)), |accumulated, _| {
            Self::map2::<Vec<A>, A, Vec<A>>(accumulated, fa.clone(), |mut values, value| {
                values.push(value);
                values
            })
        })
    }

    /// Combines two effects into a pair; the base case of `tupledN`.
    fn tupled2<A: Value, B: Value>(a: Self::Of<A>, b: Self::Of<B>) -> Self::Of<(A, B)> {
        Self::product::<A, B>(a, b)
    }

    derive_arities! {
        (3, 2): [a: A, b: B], c: C;
        (4, 3): [a: A, b: B, c: C], d: D;
        (5, 4): [a: A, b: B, c: C, d: D], e: E;
        (6, 5): [a: A, b: B, c: C, d: D, e: E], f: F;
        (7, 6): [a: A, b: B, c: C, d: D, e: E, f: F], g: G;
        (8, 7): [a: A, b: B, c: C, d: D, e: E, f: F, g: G], h: H;
        (9, 8): [a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H], i: I;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{OptionK, VecK};
    use rstest::rstest;

    #[rstest]
    fn pure_and_ap_on_option() {
        assert_eq!(OptionK::pure(3), Some(3));
        assert_eq!(OptionK::ap(Some(func(|n: i32| n * 2)), Some(4)), Some(8));
        assert_eq!(OptionK::ap(None::<Func<i32, i32>>, Some(4)), None);
    }

    #[rstest]
    fn map2_on_vec_is_cartesian() {
        let combined = VecK::map2(vec![1, 2], vec![10, 20], |a, b| a + b);
        assert_eq!(combined, vec![11, 21, 12, 22]);
    }

    #[rstest]
    fn product_left_and_right() {
        assert_eq!(OptionK::product_left(Some(1), Some("x")), Some(1));
        assert_eq!(OptionK::product_right(Some(1), Some("x")), Some("x"));
        assert_eq!(OptionK::product_right(None::<i32>, Some("x")), None);
    }

    #[rstest]
    fn when_skips_the_effect() {
        assert_eq!(VecK::when(false, vec![(), ()]), vec![()]);
        assert_eq!(VecK::when(true, vec![(), ()]), vec![(), ()]);
    }

    #[rstest]
    fn replicate_collects() {
        assert_eq!(OptionK::replicate(3, Some('z')), Some(vec!['z', 'z', 'z']));
        assert_eq!(VecK::replicate(2, vec![0, 1]).len(), 4);
    }

    #[rstest]
    fn tupled_and_map_up_to_nine() {
        assert_eq!(OptionK::tupled3(Some(1), Some('b'), Some("c")), Some((1, 'b', "c")));
        let total = OptionK::map9(
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            Some(6),
            Some(7),
            Some(8),
            Some(9),
            |a, b, c, d, e, f, g, h, i| a + b + c + d + e + f + g + h + i,
        );
        assert_eq!(total, Some(45));
    }

    #[rstest]
    fn map5_short_circuits_on_option() {
        let result = OptionK::map5(Some(1), Some(2), None::<i32>, Some(4), Some(5), |a, b, c, d, e| {
            a + b + c + d + e
        });
        assert_eq!(result, None);
    }

    #[rstest]
    fn map2_eval_default_forces_the_second_effect() {
        let lazy = VecK::map2_eval(vec![1], Eval::later(|| vec![2, 3]), |a, b| a * b);
        assert_eq!(lazy.value(), vec![2, 3]);
    }
}
