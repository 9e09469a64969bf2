//! Property-based tests for Traverse and Foldable.
//!
//! ## Traverse Laws
//! - **Identity**: `traverse::<IdK>(fa, Id) == Id(fa)`
//! - **Composition**: traversing with a composed applicative equals
//!   traversing twice
//!
//! ## Foldable Consistency
//! - `fold_left` and `fold_right` visit values in the same order as `to_vec`
//! - `fold_map` agrees with mapping then folding

#![cfg(feature = "data")]

use std::fmt::Debug;

use kindred::control::{Either, Eval};
use kindred::data::{
    ComposeK, Id, IdK, NonEmptyVec, NonEmptyVecK, State, StateK, Validated, ValidatedK, map_accumulate,
    zip_with_index,
};
use kindred::instances::{EitherK, OptionK, ResultK, VecK};
use kindred::kind::Value;
use kindred::typeclass::{Foldable, Functor, Traverse};
use proptest::prelude::*;
use rstest::rstest;

type Checked = ResultK<String>;

fn halve(n: i32) -> Option<i32> {
    (n % 4 != 3).then_some(n / 2)
}

fn bounded(n: i32) -> Result<i32, String> {
    if n.abs() < 1_000_000 { Ok(n * 2) } else { Err(format!("{n} out of range")) }
}

fn traverse_identity<F: Traverse, A: Value>(fa: F::Of<A>) -> (Id<F::Of<A>>, Id<F::Of<A>>) {
    (F::traverse::<IdK, A, A>(fa.clone(), Id), Id(fa))
}

fn traverse_composition<F: Traverse>(
    fa: F::Of<i32>,
) -> (Option<Result<F::Of<i32>, String>>, Option<Result<F::Of<i32>, String>>) {
    let composed = F::traverse::<ComposeK<OptionK, Checked>, i32, i32>(fa.clone(), |a| {
        OptionK::map(halve(a), bounded)
    });
    let twice = OptionK::map(F::traverse::<OptionK, i32, i32>(fa, halve), |fb| {
        F::traverse::<Checked, i32, i32>(fb, bounded)
    });
    (composed, twice)
}

fn fold_orders<F: Foldable>(fa: F::Of<i32>) -> (Vec<i32>, Vec<i32>, Vec<i32>) {
    let listed = F::to_vec(fa.clone());
    let from_left = F::fold_left(fa.clone(), Vec::new(), |mut seen, a| {
        seen.push(a);
        seen
    });
    let from_right = F::fold_right(fa, Eval::now(Vec::new()), |a, rest| {
        rest.map(move |mut seen: Vec<i32>| {
            seen.insert(0, a);
            seen
        })
    })
    .value();
    (listed, from_left, from_right)
}

fn check<T: PartialEq + Debug>((left, right): (T, T)) -> Result<(), TestCaseError> {
    prop_assert_eq!(left, right);
    Ok(())
}

fn check_orders((listed, from_left, from_right): (Vec<i32>, Vec<i32>, Vec<i32>)) -> Result<(), TestCaseError> {
    prop_assert_eq!(&listed, &from_left);
    prop_assert_eq!(&listed, &from_right);
    Ok(())
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

// =============================================================================
// Traverse Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_traverse_laws(values in prop::collection::vec(any::<i32>(), 0..12)) {
        check(traverse_identity::<VecK, i32>(values.clone()))?;
        check(traverse_composition::<VecK>(values.clone()))?;
        check_orders(fold_orders::<VecK>(values))?;
    }

    #[test]
    fn prop_option_traverse_laws(value in any::<Option<i32>>()) {
        check(traverse_identity::<OptionK, i32>(value))?;
        check(traverse_composition::<OptionK>(value))?;
        check_orders(fold_orders::<OptionK>(value))?;
    }

    #[test]
    fn prop_result_traverse_laws(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        check(traverse_identity::<Checked, i32>(value.clone()))?;
        check(traverse_composition::<Checked>(value.clone()))?;
        check_orders(fold_orders::<Checked>(value))?;
    }

    #[test]
    fn prop_either_traverse_laws(value in either_strategy()) {
        check(traverse_identity::<EitherK<String>, i32>(value.clone()))?;
        check(traverse_composition::<EitherK<String>>(value.clone()))?;
        check_orders(fold_orders::<EitherK<String>>(value))?;
    }

    #[test]
    fn prop_non_empty_traverse_laws(head in any::<i32>(), tail in prop::collection::vec(any::<i32>(), 0..8)) {
        let values = NonEmptyVec::new(head, tail);
        check(traverse_identity::<NonEmptyVecK, i32>(values.clone()))?;
        check(traverse_composition::<NonEmptyVecK>(values.clone()))?;
        check_orders(fold_orders::<NonEmptyVecK>(values))?;
    }

    #[test]
    fn prop_id_traverse_laws(value in any::<i32>()) {
        check(traverse_identity::<IdK, i32>(Id(value)))?;
        check(traverse_composition::<IdK>(Id(value)))?;
        check_orders(fold_orders::<IdK>(Id(value)))?;
    }

    #[test]
    fn prop_fold_map_agrees_with_map_then_fold(values in prop::collection::vec("[a-z]{0,3}", 0..10)) {
        let mapped = VecK::fold(VecK::map(values.clone(), |text: String| text.to_uppercase()));
        prop_assert_eq!(VecK::fold_map(values, |text: String| text.to_uppercase()), mapped);
    }

    #[test]
    fn prop_zip_with_index_numbers_in_order(values in prop::collection::vec(any::<u8>(), 0..16)) {
        let indexed = zip_with_index::<VecK, u8>(values.clone());
        let expected: Vec<(u8, usize)> = values.into_iter().enumerate().map(|(index, value)| (value, index)).collect();
        prop_assert_eq!(indexed, expected);
    }

    #[test]
    fn prop_map_accumulate_agrees_with_state_traversal(values in prop::collection::vec(any::<i16>(), 0..16), start in any::<i16>()) {
        let step = |sum: i32, n: i16| (sum + i32::from(n), sum * 2);
        let traversed = VecK::traverse::<StateK<i32>, i16, i32>(values.clone(), move |n| {
            State::new(move |sum: i32| {
                let (next, out) = step(sum, n);
                (out, next)
            })
        });
        let (output, end) = traversed.run(i32::from(start));
        prop_assert_eq!(map_accumulate::<VecK, i32, i16, i32>(values, i32::from(start), step), (end, output));
    }
}

// =============================================================================
// Effects
// =============================================================================

#[rstest]
fn option_traverse_short_circuits_at_the_first_none() {
    let parsed = VecK::traverse::<OptionK, &str, i32>(vec!["1", "2", "x", "4"], |text| text.parse().ok());
    assert_eq!(parsed, None);

    let parsed = VecK::traverse::<OptionK, &str, i32>(vec!["1", "2", "3"], |text| text.parse().ok());
    assert_eq!(parsed, Some(vec![1, 2, 3]));
}

#[rstest]
fn result_traverse_reports_the_first_error() {
    let checked = VecK::traverse::<Checked, i32, i32>(vec![1, 2_000_000, 3_000_000], bounded);
    assert_eq!(checked, Err("2000000 out of range".to_string()));
}

#[rstest]
fn validated_traverse_accumulates_every_error() {
    let check = |n: i32| -> Validated<Vec<String>, i32> {
        if n > 0 { Validated::valid(n) } else { Validated::invalid(vec![format!("{n} is not positive")]) }
    };
    let all = VecK::traverse::<ValidatedK<Vec<String>>, i32, i32>(vec![3, -1, 4, 0], check);
    assert_eq!(
        all,
        Validated::invalid(vec!["-1 is not positive".to_string(), "0 is not positive".to_string()])
    );

    let fine = VecK::traverse::<ValidatedK<Vec<String>>, i32, i32>(vec![3, 4], check);
    assert_eq!(fine, Validated::valid(vec![3, 4]));
}

#[rstest]
fn vec_sequence_of_vecs_is_a_cartesian_product() {
    let combined = VecK::sequence::<VecK, i32>(vec![vec![1, 2], vec![10, 20]]);
    assert_eq!(combined, vec![vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20]]);
}

#[rstest]
fn map_accumulate_threads_a_running_total() {
    let (total, running) = map_accumulate::<VecK, i32, i32, i32>(vec![1, 2, 3, 4], 0, |sum, n| (sum + n, sum + n));
    assert_eq!(total, 10);
    assert_eq!(running, vec![1, 3, 6, 10]);
}
