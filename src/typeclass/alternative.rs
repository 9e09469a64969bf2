//! Choice between effects.
//!
//! - [`SemigroupK`]: combine two `F<A>` for any `A`
//! - [`MonoidK`]: a `SemigroupK` with an empty `F<A>`
//! - [`Alternative`]: an applicative monoid (first success for `Option`,
//!   concatenation for `Vec`)
//! - [`MonadCombine`]: an alternative monad that can flatten foldables
//!
//! # Laws
//!
//! ```text
//! combine_k(combine_k(x, y), z) == combine_k(x, combine_k(y, z))
//! combine_k(empty_k(), x) == x == combine_k(x, empty_k())
//! ap(empty_k(), fa) == empty_k()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionK, VecK};
//! use kindred::typeclass::{Alternative, SemigroupK};
//!
//! assert_eq!(OptionK::combine_k(None, Some(2)), Some(2));
//! assert_eq!(VecK::combine_k(vec![1], vec![2]), vec![1, 2]);
//! assert_eq!(OptionK::choice(vec![None, Some(1), Some(2)]), Some(1));
//! ```

use super::{Applicative, Foldable, MonadFilter};
use crate::control::Eval;
use crate::kind::{Value, Witness};

/// A type constructor whose values combine for every element type.
pub trait SemigroupK: Witness {
    /// Combines two effects.
    fn combine_k<A: Value>(x: Self::Of<A>, y: Self::Of<A>) -> Self::Of<A>;

    /// Combines with a lazily built right operand.
    ///
    /// The default forces `y`; instances where `x` can decide the result
    /// alone override it.
    fn combine_k_eval<A: Value>(x: Self::Of<A>, y: Eval<Self::Of<A>>) -> Eval<Self::Of<A>> {
        y.map(move |y| Self::combine_k::<A>(x.clone(), y))
    }
}

/// A `SemigroupK` with a neutral element.
pub trait MonoidK: SemigroupK {
    /// The neutral effect.
    fn empty_k<A: Value>() -> Self::Of<A>;

    /// Combines every effect left to right, starting from `empty_k`.
    fn combine_all_k<A: Value>(items: impl IntoIterator<Item = Self::Of<A>>) -> Self::Of<A> {
        items.into_iter().fold(Self::empty_k::<A>(), Self::combine_k::<A>)
    }
}

/// An applicative with choice and failure.
pub trait Alternative: Applicative + MonoidK {
    /// The first alternative, falling back to the second.
    fn alt<A: Value>(first: Self::Of<A>, second: Self::Of<A>) -> Self::Of<A> {
        Self::combine_k::<A>(first, second)
    }

    /// Succeeds with `()` when `condition` holds, otherwise fails.
    fn guard(condition: bool) -> Self::Of<()> {
        if condition { Self::pure(()) } else { Self::empty_k::<()>() }
    }

    /// Turns failure into a successful `None`.
    fn optional<A: Value>(fa: Self::Of<A>) -> Self::Of<Option<A>> {
        Self::combine_k::<Option<A>>(Self::map::<A, Option<A>>(fa, Some), Self::pure(None))
    }

    /// Combines every alternative in order.
    fn choice<A: Value>(alternatives: impl IntoIterator<Item = Self::Of<A>>) -> Self::Of<A> {
        Self::combine_all_k::<A>(alternatives)
    }
}

/// An alternative monad with a zero.
pub trait MonadCombine: MonadFilter + Alternative {
    /// Flattens each inner foldable into the outer effect.
    ///
    /// ```rust
    /// use kindred::instances::{OptionK, VecK};
    /// use kindred::typeclass::MonadCombine;
    ///
    /// let united = VecK::unite::<OptionK, i32>(vec![Some(1), None, Some(3)]);
    /// assert_eq!(united, vec![1, 3]);
    /// ```
    fn unite<G: Foldable, A: Value>(fga: Self::Of<G::Of<A>>) -> Self::Of<A> {
        Self::flat_map::<G::Of<A>, A>(fga, |ga| {
            G::fold_left::<A, Self::Of<A>>(ga, Self::empty_k::<A>(), |accumulated, a| {
                Self::combine_k::<A>(accumulated, Self::pure(a))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{OptionK, VecK};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    #[case(Some(1), Some(2), Some(1))]
    #[case(None, Some(2), Some(2))]
    #[case(Some(1), None, Some(1))]
    #[case(None, None, None)]
    fn option_alt(#[case] first: Option<i32>, #[case] second: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionK::alt(first, second), expected);
    }

    #[rstest]
    fn option_combine_k_eval_skips_fallback() {
        let built = Rc::new(Cell::new(false));
        let flag = Rc::clone(&built);
        let result = OptionK::combine_k_eval(
            Some(1),
            Eval::later(move || {
                flag.set(true);
                Some(2)
            }),
        );
        assert_eq!(result.value(), Some(1));
        assert!(!built.get());
    }

    #[rstest]
    fn guard_and_optional() {
        assert_eq!(VecK::guard(true), vec![()]);
        assert_eq!(VecK::guard(false), Vec::<()>::new());
        assert_eq!(OptionK::optional(None::<i32>), Some(None));
        assert_eq!(VecK::optional(vec![1]), vec![Some(1), None]);
    }

    #[rstest]
    fn choice_over_empty_input() {
        assert_eq!(OptionK::choice(Vec::<Option<i32>>::new()), None);
        assert_eq!(VecK::choice(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
    }

    #[rstest]
    fn unite_vec_of_vecs() {
        assert_eq!(OptionK::unite::<VecK, i32>(Some(vec![4, 5])), Some(4));
        assert_eq!(VecK::unite::<VecK, i32>(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
    }
}
