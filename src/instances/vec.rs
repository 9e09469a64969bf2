//! Instances for `Vec<A>`.
//!
//! `Vec` is the non-determinism monad: `ap` and `flat_map` take every
//! combination, with the left argument as the outer loop. `fold_right` is
//! lazy in the tail, so an early-exiting fold never visits the rest of the
//! vector and a strict fold over a long vector does not overflow the stack.

use std::rc::Rc;

use crate::control::{Either, Eval};
use crate::kind::{Kind, Upcast, Value, Witness};
use crate::typeclass::{
    Alternative, Applicative, EquatableK, Foldable, Func, Functor, FunctorFilter, Monad,
    MonadCombine, MonadFilter, MonoidK, SemigroupK, Traverse, TraverseFilter, slices_eq,
};

/// Witness for `Vec<_>`.
#[derive(Debug)]
pub enum VecK {}

impl Witness for VecK {
    type Of<A: Value> = Vec<A>;
}

impl<A: Value> Upcast for Vec<A> {
    type Witness = VecK;
    type Argument = A;

    fn upcast(self) -> Kind<VecK, A> {
        Kind::new(self)
    }
}

// =============================================================================
// Functor Family
// =============================================================================

crate::invariant_from_functor!(VecK);

impl Functor for VecK {
    fn map<A: Value, B: Value>(fa: Vec<A>, function: impl Fn(A) -> B + 'static) -> Vec<B> {
        fa.into_iter().map(function).collect()
    }
}

impl FunctorFilter for VecK {
    fn map_filter<A: Value, B: Value>(
        fa: Vec<A>,
        function: impl Fn(A) -> Option<B> + 'static,
    ) -> Vec<B> {
        fa.into_iter().filter_map(function).collect()
    }
}

impl Applicative for VecK {
    #[inline]
    fn pure<A: Value>(value: A) -> Vec<A> {
        vec![value]
    }

    fn ap<A: Value, B: Value>(ff: Vec<Func<A, B>>, fa: Vec<A>) -> Vec<B> {
        let mut result = Vec::with_capacity(ff.len() * fa.len());
        for function in &ff {
            result.extend(fa.iter().cloned().map(|a| function(a)));
        }
        result
    }

    fn map2<A: Value, B: Value, C: Value>(
        fa: Vec<A>,
        fb: Vec<B>,
        function: impl Fn(A, B) -> C + 'static,
    ) -> Vec<C> {
        let mut result = Vec::with_capacity(fa.len() * fb.len());
        for a in fa {
            result.extend(fb.iter().cloned().map(|b| function(a.clone(), b)));
        }
        result
    }
}

crate::selective_from_monad!(VecK);

impl Monad for VecK {
    fn flat_map<A: Value, B: Value>(fa: Vec<A>, function: impl Fn(A) -> Vec<B> + 'static) -> Vec<B> {
        fa.into_iter().flat_map(function).collect()
    }

    /// Explores the branches depth first with an explicit work stack; the
    /// results come out in the same order as nested `flat_map` calls.
    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> Vec<Either<A, B>> + 'static,
    ) -> Vec<B> {
        let mut results = Vec::new();
        let mut pending = vec![step(initial).into_iter()];
        while let Some(branch) = pending.last_mut() {
            match branch.next() {
                None => {
                    pending.pop();
                }
                Some(Either::Right(done)) => results.push(done),
                Some(Either::Left(next)) => pending.push(step(next).into_iter()),
            }
        }
        results
    }
}

impl MonadFilter for VecK {
    #[inline]
    fn empty<A: Value>() -> Vec<A> {
        Vec::new()
    }
}

// =============================================================================
// Foldable / Traverse
// =============================================================================

type Step<A, B> = Rc<dyn Fn(A, Eval<B>) -> Eval<B>>;

fn fold_right_from<A: Value, B: Value>(
    items: Rc<Vec<A>>,
    index: usize,
    initial: Eval<B>,
    function: Step<A, B>,
) -> Eval<B> {
    let Some(head) = items.get(index).cloned() else {
        return initial;
    };
    let step = Rc::clone(&function);
    let rest = Eval::defer(move || {
        fold_right_from(Rc::clone(&items), index + 1, initial.clone(), Rc::clone(&step))
    });
    function(head, rest)
}

impl Foldable for VecK {
    fn fold_left<A: Value, B>(fa: Vec<A>, initial: B, function: impl FnMut(B, A) -> B) -> B {
        fa.into_iter().fold(initial, function)
    }

    fn fold_right<A: Value, B: Value>(
        fa: Vec<A>,
        initial: Eval<B>,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B> {
        fold_right_from(Rc::new(fa), 0, initial, Rc::new(function))
    }

    #[inline]
    fn is_empty<A: Value>(fa: Vec<A>) -> bool {
        fa.is_empty()
    }

    #[inline]
    fn count<A: Value>(fa: Vec<A>) -> usize {
        fa.len()
    }

    #[inline]
    fn get<A: Value>(fa: Vec<A>, index: usize) -> Option<A> {
        fa.into_iter().nth(index)
    }

    #[inline]
    fn to_vec<A: Value>(fa: Vec<A>) -> Vec<A> {
        fa
    }
}

impl Traverse for VecK {
    /// Runs the effects left to right. The tail is combined through
    /// `map2_eval`, so an effect that short-circuits stops the traversal.
    fn traverse<G: Applicative, A: Value, B: Value>(
        fa: Vec<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Vec<B>> {
        let function = Rc::new(function);
        let reversed = Self::fold_right::<A, G::Of<Vec<B>>>(
            fa,
            Eval::now(G::pure::<Vec<B>>(Vec::new())),
            move |a, rest| {
                G::map2_eval::<B, Vec<B>, Vec<B>>(function(a), rest, |b, mut tail| {
                    tail.push(b);
                    tail
                })
            },
        )
        .value();
        G::map::<Vec<B>, Vec<B>>(reversed, |mut values| {
            values.reverse();
            values
        })
    }
}

impl TraverseFilter for VecK {}

// =============================================================================
// Alternative Family
// =============================================================================

impl SemigroupK for VecK {
    fn combine_k<A: Value>(mut x: Vec<A>, y: Vec<A>) -> Vec<A> {
        x.extend(y);
        x
    }
}

impl MonoidK for VecK {
    #[inline]
    fn empty_k<A: Value>() -> Vec<A> {
        Vec::new()
    }
}

impl Alternative for VecK {}

impl MonadCombine for VecK {}

impl EquatableK for VecK {
    fn eq_k<A: Value>(x: &Vec<A>, y: &Vec<A>, equal: impl Fn(&A, &A) -> bool) -> bool {
        slices_eq(x, y, equal)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::instances::OptionK;
    use crate::typeclass::func;
    use rstest::rstest;

    #[rstest]
    fn ap_is_the_cartesian_product_with_functions_outside() {
        let functions = vec![func(|n: i32| n + 1), func(|n: i32| n * 10)];
        assert_eq!(VecK::ap(functions, vec![1, 2]), vec![2, 3, 10, 20]);
    }

    #[rstest]
    fn map2_agrees_with_ap() {
        assert_eq!(
            VecK::map2(vec![1, 2], vec![10, 20], |a, b| a + b),
            vec![11, 21, 12, 22]
        );
    }

    #[rstest]
    fn flat_map_concatenates() {
        assert_eq!(VecK::flat_map(vec![1, 2], |n| vec![n; n as usize]), vec![1, 2, 2]);
    }

    #[rstest]
    fn tail_rec_m_matches_nested_flat_map_order() {
        let expanded = VecK::tail_rec_m(0_u8, |depth| {
            if depth < 2 {
                vec![Either::Left(depth + 1), Either::Right(depth * 10)]
            } else {
                vec![Either::Right(99)]
            }
        });
        assert_eq!(expanded, vec![99, 10, 0]);
    }

    #[rstest]
    fn tail_rec_m_handles_a_long_single_path() {
        let result = VecK::tail_rec_m(0_u32, |n| {
            vec![if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) }]
        });
        assert_eq!(result, vec![100_000]);
    }

    #[rstest]
    fn fold_right_stops_when_the_tail_is_not_forced() {
        let visited = Rc::new(Cell::new(0));
        let counter = Rc::clone(&visited);
        let first_over_three = VecK::fold_right(
            (1..=10).collect::<Vec<i32>>(),
            Eval::now(None),
            move |n, rest| {
                counter.set(counter.get() + 1);
                if n > 3 { Eval::now(Some(n)) } else { rest }
            },
        );
        assert_eq!(first_over_three.value(), Some(4));
        assert_eq!(visited.get(), 4);
    }

    #[rstest]
    fn traverse_short_circuits_on_none() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let result = VecK::traverse::<OptionK, i32, i32>(vec![1, -2, 3, 4], move |n| {
            counter.set(counter.get() + 1);
            (n > 0).then_some(n)
        });
        assert_eq!(result, None);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn traverse_preserves_order() {
        let result = VecK::traverse::<OptionK, i32, String>(vec![1, 2, 3], |n| Some(n.to_string()));
        assert_eq!(result, Some(vec!["1".to_string(), "2".to_string(), "3".to_string()]));
    }

    #[rstest]
    fn filter_a_powerset() {
        let subsets = VecK::filter_a::<VecK, i32>(vec![1, 2], |_| vec![true, false]);
        assert_eq!(subsets, vec![vec![1, 2], vec![1], vec![2], vec![]]);
    }

    #[rstest]
    fn combine_k_concatenates_and_empty_is_neutral() {
        assert_eq!(VecK::combine_k(vec![1], vec![2, 3]), vec![1, 2, 3]);
        assert_eq!(VecK::combine_k(VecK::empty_k(), vec![4]), vec![4]);
    }
}
