//! Tests for pairings between monads and the comonads that interpret them.
//!
//! Zapping a program against its dual runs the program: a `State` walks a
//! `Store`, a `Reader` reads an `Env`, a `Writer` moves a `Traced` cursor.

#![cfg(feature = "data")]

use kindred::data::{
    Co, CoK, Env, EnvK, Id, IdK, Reader, ReaderK, State, StateK, Store, StoreK, Traced, TracedK, Writer,
    WriterK,
};
use kindred::typeclass::{Applicative, Func, Functor, Monad, MonadState, Pairing, Sum, func};
use proptest::prelude::*;
use rstest::rstest;

type Walk = StateK<i32>;

fn step(by: i32) -> State<i32, i32> {
    Walk::state(move |position| (position, position + by))
}

fn track() -> Store<i32, String> {
    Store::new(|position: i32| format!("tile {position}"), 0)
}

proptest! {
    /// Zapping `map(fa, f)` is zapping `fa` and applying `f` to its side.
    #[test]
    fn prop_state_store_zap_is_natural(start in -100i32..100, by in -10i32..10) {
        let board: Store<i32, i32> = Store::new(|position: i32| position * 2, start);
        let plain = <StateK<i32> as Pairing<StoreK<i32>>>::zap(step(by), board.clone(), |visited, found| (visited, found));
        prop_assert_eq!(plain, (start, (start + by) * 2));

        let mapped = <StateK<i32> as Pairing<StoreK<i32>>>::zap(
            Walk::map(step(by), |visited| visited + 1),
            board,
            |visited, found| (visited, found),
        );
        prop_assert_eq!(mapped, (start + 1, (start + by) * 2));
    }

    #[test]
    fn prop_reader_env_zap_reads_the_environment(environment in any::<i32>(), payload in any::<u8>()) {
        let doubled: Reader<i32, i64> = Reader::new(|n: i32| i64::from(n) * 2);
        let zapped = <ReaderK<i32> as Pairing<EnvK<i32>>>::zap(doubled, Env::new(environment, payload), |a, b| (a, b));
        prop_assert_eq!(zapped, (i64::from(environment) * 2, payload));
    }
}

// =============================================================================
// Interpreting Programs
// =============================================================================

#[rstest]
fn state_program_walks_the_store() {
    let program = Walk::flat_map(step(2), |_| step(3));
    let landed = <StateK<i32> as Pairing<StoreK<i32>>>::zap(program, track(), |last_start, tile| (last_start, tile));
    assert_eq!(landed, (2, "tile 5".to_string()));
}

#[rstest]
fn zap_fn_applies_the_program_result() {
    let program: State<i32, Func<String, usize>> = Walk::state(|position| (func(|tile: String| tile.len()), position + 10));
    assert_eq!(<StateK<i32> as Pairing<StoreK<i32>>>::zap_fn(program, track()), "tile 10".len());
}

#[rstest]
fn writer_moves_the_traced_cursor() {
    let signal: Traced<Sum<i32>, String> = Traced::new(|Sum(offset): Sum<i32>| format!("sample@{offset}"));
    let moves = Writer::new("moved", Sum::new(7));
    let read = <WriterK<Sum<i32>> as Pairing<TracedK<Sum<i32>>>>::zap(moves, signal, |label, sample| format!("{label}: {sample}"));
    assert_eq!(read, "moved: sample@7");
}

#[rstest]
fn identity_pairs_with_itself() {
    assert_eq!(<IdK as Pairing<IdK>>::zap(Id(3), Id(4), |a, b| a * b), 12);
}

#[rstest]
fn co_store_behaves_like_state() {
    type Cursor = CoK<StoreK<i32>, String>;
    let here: Co<StoreK<i32>, String, i32> = Co::lift(|shape: Store<i32, ()>| *shape.position());
    let report = Cursor::map(here, |position| position * 10);
    let board = Store::new(|position: i32| func(move |value: i32| format!("{value} at {position}")), 4);
    assert_eq!(report.zap_with(board), "40 at 4");
}

#[rstest]
fn co_env_behaves_like_reader() {
    type Configured = CoK<EnvK<String>, usize>;
    let name_length: Co<EnvK<String>, usize, usize> = Co::lift(|shape: Env<String, ()>| shape.environment().len());
    let plus_one = Configured::flat_map(name_length, |length| Configured::pure(length + 1));
    assert_eq!(plus_one.zap_with(Env::new("kindred".to_string(), func(|n: usize| n))), 8);
}
