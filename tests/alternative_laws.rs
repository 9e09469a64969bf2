//! Property-based tests for SemigroupK, MonoidK and Alternative.
//!
//! - **Associativity**: `combine_k(combine_k(x, y), z) == combine_k(x, combine_k(y, z))`
//! - **Identity**: `empty_k` is neutral on both sides
//! - **Left Zero**: `ap(empty_k, fa) == empty_k`
//! - **Eval Consistency**: `combine_k_eval(x, now(y)) == combine_k(x, y)`

#![cfg(feature = "data")]

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use kindred::control::{Either, Eval};
use kindred::data::{NonEmptyVec, NonEmptyVecK, Validated, ValidatedK};
use kindred::instances::{EitherK, OptionK, VecK};
use kindred::kind::Value;
use kindred::typeclass::{Alternative, Func, MonadCombine, MonoidK, SemigroupK};
use proptest::prelude::*;
use rstest::rstest;

fn semigroup_k_laws<F: SemigroupK, A: Value>(x: F::Of<A>, y: F::Of<A>, z: F::Of<A>) -> Result<(), TestCaseError>
where
    F::Of<A>: PartialEq + Debug,
{
    let left = F::combine_k::<A>(F::combine_k::<A>(x.clone(), y.clone()), z.clone());
    let right = F::combine_k::<A>(x.clone(), F::combine_k::<A>(y.clone(), z));
    prop_assert_eq!(left, right);

    let lazy = F::combine_k_eval::<A>(x.clone(), Eval::now(y.clone())).value();
    prop_assert_eq!(lazy, F::combine_k::<A>(x, y));
    Ok(())
}

fn monoid_k_laws<F: MonoidK, A: Value>(x: F::Of<A>) -> Result<(), TestCaseError>
where
    F::Of<A>: PartialEq + Debug,
{
    prop_assert_eq!(F::combine_k::<A>(F::empty_k::<A>(), x.clone()), x.clone());
    prop_assert_eq!(F::combine_k::<A>(x.clone(), F::empty_k::<A>()), x);
    Ok(())
}

fn left_zero<F: Alternative>(fa: F::Of<i32>) -> Result<(), TestCaseError>
where
    F::Of<i32>: PartialEq + Debug,
{
    let nothing = F::empty_k::<Func<i32, i32>>();
    prop_assert_eq!(F::ap::<i32, i32>(nothing, fa), F::empty_k::<i32>());
    Ok(())
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        "[a-z]{1,3}".prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn validated_strategy() -> impl Strategy<Value = Validated<String, i32>> {
    prop_oneof![
        "[a-z]{1,3}".prop_map(Validated::Invalid),
        any::<i32>().prop_map(Validated::Valid),
    ]
}

proptest! {
    #[test]
    fn prop_option_alternative_laws(x in any::<Option<i32>>(), y in any::<Option<i32>>(), z in any::<Option<i32>>()) {
        semigroup_k_laws::<OptionK, i32>(x, y, z)?;
        monoid_k_laws::<OptionK, i32>(x)?;
        left_zero::<OptionK>(y)?;
    }

    #[test]
    fn prop_vec_alternative_laws(
        x in prop::collection::vec(any::<i32>(), 0..4),
        y in prop::collection::vec(any::<i32>(), 0..4),
        z in prop::collection::vec(any::<i32>(), 0..4),
    ) {
        semigroup_k_laws::<VecK, i32>(x.clone(), y.clone(), z)?;
        monoid_k_laws::<VecK, i32>(x)?;
        left_zero::<VecK>(y)?;
    }

    #[test]
    fn prop_either_semigroup_k(x in either_strategy(), y in either_strategy(), z in either_strategy()) {
        semigroup_k_laws::<EitherK<String>, i32>(x, y, z)?;
    }

    #[test]
    fn prop_validated_semigroup_k(x in validated_strategy(), y in validated_strategy(), z in validated_strategy()) {
        semigroup_k_laws::<ValidatedK<String>, i32>(x, y, z)?;
    }

    #[test]
    fn prop_non_empty_semigroup_k(x in any::<i32>(), y in any::<i32>(), z in prop::collection::vec(any::<i32>(), 0..3)) {
        semigroup_k_laws::<NonEmptyVecK, i32>(
            NonEmptyVec::singleton(x),
            NonEmptyVec::new(y, vec![x]),
            NonEmptyVec::new(x, z),
        )?;
    }
}

// =============================================================================
// Behavior
// =============================================================================

#[rstest]
#[case(Some(1), Some(2), Some(1))]
#[case(None, Some(2), Some(2))]
#[case(None, None, None)]
fn option_alt_prefers_the_first_success(
    #[case] first: Option<i32>,
    #[case] second: Option<i32>,
    #[case] expected: Option<i32>,
) {
    assert_eq!(OptionK::alt(first, second), expected);
}

#[rstest]
fn combine_k_eval_skips_the_fallback_after_a_success() {
    let forced = Rc::new(Cell::new(false));
    let witness = Rc::clone(&forced);
    let fallback = Eval::later(move || {
        witness.set(true);
        Some(0)
    });
    assert_eq!(OptionK::combine_k_eval(Some(7), fallback).value(), Some(7));
    assert!(!forced.get());
}

#[rstest]
fn validated_combine_k_accumulates_two_failures() {
    let both: Validated<String, i32> =
        ValidatedK::<String>::combine_k(Validated::invalid("a".to_string()), Validated::invalid("b".to_string()));
    assert_eq!(both, Validated::invalid("ab".to_string()));
}

#[rstest]
fn guard_optional_and_choice() {
    assert_eq!(OptionK::guard(true), Some(()));
    assert_eq!(VecK::guard(false), Vec::<()>::new());
    assert_eq!(OptionK::optional(None::<i32>), Some(None));
    assert_eq!(VecK::choice(vec![vec![1], Vec::new(), vec![2, 3]]), vec![1, 2, 3]);
    assert_eq!(OptionK::combine_all_k(vec![None, Some(4), Some(5)]), Some(4));
}

#[rstest]
fn unite_flattens_inner_options() {
    assert_eq!(VecK::unite::<OptionK, &str>(vec![Some("a"), None, Some("c")]), vec!["a", "c"]);
}
