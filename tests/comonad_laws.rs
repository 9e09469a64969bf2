//! Property-based tests for Comonad laws.
//!
//! - **Left Identity**: `extract(coflat_map(w, f)) == f(w)`
//! - **Right Identity**: `coflat_map(w, extract) == w`
//! - **Associativity**: `coflat_map(coflat_map(w, f), g) == coflat_map(w, |x| g(coflat_map(x, f)))`
//!
//! Function-backed comonads (`Store`, `Traced`, `Eval`) are compared by
//! observing them at a few points.

#![cfg(feature = "data")]

use std::fmt::Debug;

use kindred::control::Eval;
use kindred::data::{Env, EnvK, Id, IdK, NonEmptyVec, NonEmptyVecK, Store, StoreK, Traced, TracedK};
use kindred::instances::EvalK;
use kindred::typeclass::{Comonad, ComonadEnv, ComonadStore, ComonadTraced, Sum};
use proptest::prelude::*;
use rstest::rstest;

struct Sides<W> {
    left_identity: (i32, i32),
    right_identity: (W, W),
    associativity: (W, W),
}

fn comonad_laws<W: Comonad>(
    w: W::Of<i32>,
    f: impl Fn(W::Of<i32>) -> i32 + Clone + 'static,
    g: impl Fn(W::Of<i32>) -> i32 + Clone + 'static,
) -> Sides<W::Of<i32>> {
    let left_identity = (W::extract::<i32>(W::coflat_map::<i32, i32>(w.clone(), f.clone())), f(w.clone()));
    let right_identity = (W::coflat_map::<i32, i32>(w.clone(), |x| W::extract::<i32>(x)), w.clone());

    let left = W::coflat_map::<i32, i32>(W::coflat_map::<i32, i32>(w.clone(), f.clone()), g.clone());
    let right = W::coflat_map::<i32, i32>(w, move |x| g(W::coflat_map::<i32, i32>(x, f.clone())));

    Sides {
        left_identity,
        right_identity,
        associativity: (left, right),
    }
}

fn check_with<W, U: PartialEq + Debug>(sides: Sides<W>, observe: impl Fn(W) -> U) -> Result<(), TestCaseError> {
    prop_assert_eq!(sides.left_identity.0, sides.left_identity.1, "left identity");
    prop_assert_eq!(observe(sides.right_identity.0), observe(sides.right_identity.1), "right identity");
    prop_assert_eq!(observe(sides.associativity.0), observe(sides.associativity.1), "associativity");
    Ok(())
}

fn check_all<W: PartialEq + Debug>(sides: Sides<W>) -> Result<(), TestCaseError> {
    check_with(sides, |w| w)
}

type Grid = StoreK<i32>;
type Tagged = EnvK<String>;
type Shifted = TracedK<Sum<i32>>;

proptest! {
    #[test]
    fn prop_id_comonad_laws(value in any::<i32>()) {
        check_all(comonad_laws::<IdK>(Id(value), |w: Id<i32>| w.0.wrapping_add(1), |w: Id<i32>| w.0.wrapping_mul(3)))?;
    }

    #[test]
    fn prop_non_empty_comonad_laws(head in any::<i32>(), tail in prop::collection::vec(any::<i32>(), 0..6)) {
        check_all(comonad_laws::<NonEmptyVecK>(
            NonEmptyVec::new(head, tail),
            |w: NonEmptyVec<i32>| w.iter().fold(0_i32, |sum, n| sum.wrapping_add(*n)),
            |w: NonEmptyVec<i32>| i32::try_from(w.len()).unwrap_or(i32::MAX),
        ))?;
    }

    #[test]
    fn prop_env_comonad_laws(label in "[a-z]{0,4}", value in any::<i32>()) {
        check_all(comonad_laws::<Tagged>(
            Env::new(label, value),
            |w: Env<String, i32>| w.value().wrapping_add(i32::try_from(w.environment().len()).unwrap_or(0)),
            |w: Env<String, i32>| w.value() ^ 0x0f,
        ))?;
    }

    #[test]
    fn prop_store_comonad_laws(focus in -50i32..50) {
        let board: Store<i32, i32> = Store::new(|cell: i32| cell * cell, focus);
        check_with(
            comonad_laws::<Grid>(
                board,
                |w: Store<i32, i32>| w.peek(w.position() - 1) + w.extract(),
                |w: Store<i32, i32>| w.peek(w.position() + 2),
            ),
            |w| (w.position().to_owned(), w.extract(), w.peek(0), w.peek(focus + 5)),
        )?;
    }

    #[test]
    fn prop_traced_comonad_laws(offset in -100i32..100) {
        let signal: Traced<Sum<i32>, i32> = Traced::new(|Sum(t): Sum<i32>| t * 2 + 1);
        check_with(
            comonad_laws::<Shifted>(
                signal,
                |w: Traced<Sum<i32>, i32>| w.run(Sum(3)) - w.extract(),
                |w: Traced<Sum<i32>, i32>| w.run(Sum(-1)),
            ),
            |w| (w.extract(), w.run(Sum(offset)), w.run(Sum(offset + 7))),
        )?;
    }

    #[test]
    fn prop_eval_comonad_laws(value in any::<i32>()) {
        check_with(
            comonad_laws::<EvalK>(
                Eval::later(move || value),
                |w: Eval<i32>| w.value().wrapping_sub(1),
                |w: Eval<i32>| w.value().rotate_left(3),
            ),
            |w| w.value(),
        )?;
    }
}

// =============================================================================
// Comonad Classes
// =============================================================================

#[rstest]
fn duplicate_nests_the_focus() {
    let nested = NonEmptyVecK::duplicate(NonEmptyVec::new(1, vec![2, 3]));
    assert_eq!(nested.head(), &NonEmptyVec::new(1, vec![2, 3]));
    assert_eq!(nested.last(), &NonEmptyVec::singleton(3));
}

#[rstest]
fn store_seeks_and_experiments() {
    let squares: Store<i32, i32> = Store::new(|cell| cell * cell, 3);
    assert_eq!(Grid::position(squares.clone()), 3);
    assert_eq!(Grid::peeks(|cell| cell + 1, squares.clone()), 16);
    assert_eq!(Grid::extract(Grid::seeks(|cell| cell * 2, squares.clone())), 36);

    let neighbours = Grid::experiment::<kindred::instances::VecK, i32>(|cell| vec![cell - 1, cell + 1], squares);
    assert_eq!(neighbours, vec![4, 16]);
}

#[rstest]
fn store_coflat_map_runs_a_rule_on_every_cell() {
    let alive: Store<i32, bool> = Store::new(|cell| cell % 4 == 0, 0);
    let has_live_neighbour =
        Grid::coflat_map(alive, |w: Store<i32, bool>| w.peek(w.position() - 1) || w.peek(w.position() + 1));
    assert!(!has_live_neighbour.extract());
    assert!(has_live_neighbour.peek(1));
    assert!(!has_live_neighbour.peek(2));
    assert!(has_live_neighbour.peek(3));
}

#[rstest]
fn env_asks_and_locals() {
    let priced = Env::new(0.5_f64, 40.0_f64);
    type Priced = EnvK<f64>;
    assert!((Priced::ask(priced.clone()) - 0.5).abs() < f64::EPSILON);
    let discounted = Priced::coflat_map(priced.clone(), |w: Env<f64, f64>| w.value() * w.environment());
    assert!((Priced::extract(discounted) - 20.0).abs() < f64::EPSILON);
    let doubled = Priced::local(|rate| rate * 2.0, priced);
    assert!((doubled.environment() - 1.0).abs() < f64::EPSILON);
}

#[rstest]
fn traced_listens_and_traces() {
    let signal: Traced<Sum<i32>, i32> = Traced::new(|Sum(t): Sum<i32>| t + 100);
    assert_eq!(Shifted::trace(Sum(5), signal.clone()), 105);
    assert_eq!(Shifted::extract(Shifted::listen(signal.clone())), (100, Sum(0)));
    assert_eq!(Shifted::traces(|value| Sum(value / 50), signal), 102);
}
