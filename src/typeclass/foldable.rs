//! Foldable type class - reducing a structure to a summary value.
//!
//! Two primitive folds are required:
//!
//! - [`Foldable::fold_left`]: strict, left to right
//! - [`Foldable::fold_right`]: lazy, right to left, with the accumulator
//!   wrapped in [`Eval`]
//!
//! Because the right fold hands the combining function the *rest* of the
//! fold as an unevaluated `Eval`, a function that does not look at it stops
//! the fold early, and a function that does is still evaluated by a loop.
//! Folding a million elements from the right therefore neither overflows
//! nor visits more elements than needed.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Eval;
//! use kindred::instances::VecK;
//! use kindred::typeclass::Foldable;
//!
//! let total = VecK::fold_left(vec![1, 2, 3], 0, |sum, n| sum + n);
//! assert_eq!(total, 6);
//!
//! // Stops at the first negative number without touching the rest.
//! let first_negative = VecK::fold_right(vec![3, -1, 4], Eval::now(None), |n, rest| {
//!     if n < 0 { Eval::now(Some(n)) } else { rest }
//! });
//! assert_eq!(first_negative.value(), Some(-1));
//! ```

use std::rc::Rc;

use super::{Applicative, Monad, Monoid, Semigroup};
use crate::control::{Either, Eval};
use crate::kind::{Value, Witness};

/// A structure whose values can be folded into a summary.
pub trait Foldable: Witness {
    /// Folds from the left with a strict accumulator.
    fn fold_left<A: Value, B>(fa: Self::Of<A>, initial: B, function: impl FnMut(B, A) -> B) -> B;

    /// Folds from the right with a lazy accumulator.
    fn fold_right<A: Value, B: Value>(
        fa: Self::Of<A>,
        initial: Eval<B>,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B>;

    /// Combines every value with its monoid.
    fn fold<A: Value + Monoid>(fa: Self::Of<A>) -> A {
        Self::fold_left::<A, A>(fa, A::empty(), A::combine)
    }

    /// Maps every value into a monoid and combines the results.
    fn fold_map<A: Value, M: Monoid>(fa: Self::Of<A>, mut function: impl FnMut(A) -> M) -> M {
        Self::fold_left::<A, M>(fa, M::empty(), |accumulated, a| accumulated.combine(function(a)))
    }

    /// Left reduction whose seed is built from the first value.
    fn reduce_left_to_option<A: Value, B>(
        fa: Self::Of<A>,
        mut first: impl FnMut(A) -> B,
        mut function: impl FnMut(B, A) -> B,
    ) -> Option<B> {
        Self::fold_left::<A, Option<B>>(fa, None, |accumulated, a| match accumulated {
            None => Some(first(a)),
            Some(b) => Some(function(b, a)),
        })
    }

    /// Lazy right reduction whose seed is built from the last value.
    fn reduce_right_to_option<A: Value, B: Value>(
        fa: Self::Of<A>,
        first: impl Fn(A) -> B + 'static,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<Option<B>> {
        let first = Rc::new(first);
        let function = Rc::new(function);
        Self::fold_right::<A, Option<B>>(fa, Eval::now(None), move |a, rest| {
            let first = Rc::clone(&first);
            let function = Rc::clone(&function);
            rest.flat_map(move |seed| match seed {
                Some(b) => function(a.clone(), Eval::now(b)).map(Some),
                None => {
                    let first = Rc::clone(&first);
                    let a = a.clone();
                    Eval::later(move || Some(first(a.clone())))
                }
            })
        })
    }

    /// Combines the values pairwise from the left.
    fn reduce_left_option<A: Value>(fa: Self::Of<A>, function: impl FnMut(A, A) -> A) -> Option<A> {
        Self::reduce_left_to_option::<A, A>(fa, |a| a, function)
    }

    /// The first value satisfying `predicate`.
    fn find<A: Value>(fa: Self::Of<A>, predicate: impl Fn(&A) -> bool) -> Option<A> {
        Self::fold_left::<A, Option<A>>(fa, None, |found, a| {
            found.or_else(|| predicate(&a).then_some(a))
        })
    }

    /// Whether some value satisfies `predicate`.
    fn exists<A: Value>(fa: Self::Of<A>, predicate: impl Fn(&A) -> bool) -> bool {
        Self::fold_left::<A, bool>(fa, false, |found, a| found || predicate(&a))
    }

    /// Whether every value satisfies `predicate`.
    fn for_all<A: Value>(fa: Self::Of<A>, predicate: impl Fn(&A) -> bool) -> bool {
        Self::fold_left::<A, bool>(fa, true, |all, a| all && predicate(&a))
    }

    /// Whether the structure holds no values.
    fn is_empty<A: Value>(fa: Self::Of<A>) -> bool {
        Self::count::<A>(fa) == 0
    }

    /// Whether the structure holds at least one value.
    fn non_empty<A: Value>(fa: Self::Of<A>) -> bool {
        !Self::is_empty::<A>(fa)
    }

    /// The number of values.
    fn count<A: Value>(fa: Self::Of<A>) -> usize {
        Self::fold_left::<A, usize>(fa, 0, |count, _| count + 1)
    }

    /// The value at `index` in fold order.
    fn get<A: Value>(fa: Self::Of<A>, index: usize) -> Option<A> {
        Self::to_vec::<A>(fa).into_iter().nth(index)
    }

    /// Collects the values in fold order.
    fn to_vec<A: Value>(fa: Self::Of<A>) -> Vec<A> {
        Self::fold_left::<A, Vec<A>>(fa, Vec::new(), |mut values, a| {
            values.push(a);
            values
        })
    }

    /// Monadic left fold, stack-safe through `tail_rec_m`.
    ///
    /// ```rust
    /// use kindred::instances::{OptionK, VecK};
    /// use kindred::typeclass::Foldable;
    ///
    /// let checked = VecK::fold_m::<OptionK, _, _>(vec![1, 2, 3], 0_i32, |total, n| total.checked_add(n));
    /// assert_eq!(checked, Some(6));
    /// ```
    fn fold_m<G: Monad, A: Value, B: Value>(
        fa: Self::Of<A>,
        initial: B,
        function: impl Fn(B, A) -> G::Of<B> + 'static,
    ) -> G::Of<B> {
        let items = Rc::new(Self::to_vec::<A>(fa));
        G::tail_rec_m::<(B, usize), B>((initial, 0), move |(accumulated, index)| {
            match items.get(index) {
                None => G::pure::<Either<(B, usize), B>>(Either::Right(accumulated)),
                Some(a) => G::map::<B, Either<(B, usize), B>>(
                    function(accumulated, a.clone()),
                    move |next| Either::Left((next, index + 1)),
                ),
            }
        })
    }

    /// Runs `function` on every value for its effect only, left to right.
    ///
    /// Short-circuiting effects stop at the first failure.
    fn traverse_<G: Applicative, A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<()> {
        let function = Rc::new(function);
        Self::fold_right::<A, G::Of<()>>(fa, Eval::now(G::unit()), move |a, rest| {
            G::map2_eval::<B, (), ()>(function(a), rest, |_, ()| ())
        })
        .value()
    }

    /// Runs every effect for its effect only, left to right.
    fn sequence_<G: Applicative, A: Value>(fga: Self::Of<G::Of<A>>) -> G::Of<()> {
        Self::traverse_::<G, G::Of<A>, A>(fga, |ga| ga)
    }

    /// Combines the values with their semigroup; `None` when empty.
    fn combine_all_option<A: Value + Semigroup>(fa: Self::Of<A>) -> Option<A> {
        Self::reduce_left_option::<A>(fa, A::combine)
    }

    /// The smallest value.
    fn minimum_option<A: Value + Ord>(fa: Self::Of<A>) -> Option<A> {
        Self::reduce_left_option::<A>(fa, std::cmp::min)
    }

    /// The largest value.
    fn maximum_option<A: Value + Ord>(fa: Self::Of<A>) -> Option<A> {
        Self::reduce_left_option::<A>(fa, std::cmp::max)
    }
}
