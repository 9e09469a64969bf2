//! Property-based tests for Contravariant, Divisible and Decidable.
//!
//! ## Contravariant
//! - **Identity**: `contramap(fa, id) == fa`
//! - **Composition**: `contramap(contramap(fa, f), g) == contramap(fa, f . g)`
//!
//! ## Divisible
//! - **Right Identity**: `divide(delta, fa, conquer()) == fa`
//! - **Left Identity**: `divide(delta, conquer(), fa) == fa`
//!
//! ## Decidable
//! - **Identity**: `choose(Left, fa, lose(absurd)) == fa`
//!
//! `Op` values are functions, so they are compared by running them.

#![cfg(feature = "data")]

use std::convert::Infallible;

use kindred::control::Either;
use kindred::data::{Const, ConstK, Op, OpK};
use kindred::typeclass::{Contravariant, Decidable, Divide, Divisible, Sum};
use proptest::prelude::*;
use rstest::rstest;

type Measure = OpK<Sum<i64>>;
type Render = OpK<String>;

fn weight() -> Op<Sum<i64>, i32> {
    Op::new(|n: i32| Sum::new(i64::from(n) * 3))
}

fn shown() -> Op<String, i32> {
    Op::new(|n: i32| format!("<{n}>"))
}

proptest! {
    #[test]
    fn prop_contravariant_laws(input in any::<i16>()) {
        let identity = Measure::contramap(weight(), |n: i32| n);
        prop_assert_eq!(identity.run(i32::from(input)), weight().run(i32::from(input)));

        let widen = |n: i16| i32::from(n);
        let negate = |n: i16| n.wrapping_neg();
        let twice = Measure::contramap(Measure::contramap(weight(), widen), negate);
        let once = Measure::contramap(weight(), move |n: i16| widen(negate(n)));
        prop_assert_eq!(twice.run(input), once.run(input));
    }

    #[test]
    fn prop_divisible_identities(input in any::<i32>()) {
        let right = Measure::divide(|n: i32| (n, n), weight(), Measure::conquer());
        let left = Measure::divide(|n: i32| (n, n), Measure::conquer(), weight());
        prop_assert_eq!(right.run(input), weight().run(input));
        prop_assert_eq!(left.run(input), weight().run(input));

        let right = Render::divide(|n: i32| (n, n), shown(), Render::conquer());
        prop_assert_eq!(right.run(input), shown().run(input));
    }

    #[test]
    fn prop_decidable_identity(input in any::<i32>()) {
        let chosen = Measure::choose(Either::<i32, Infallible>::Left, weight(), Measure::lose(|never| never));
        prop_assert_eq!(chosen.run(input), weight().run(input));
    }

    #[test]
    fn prop_divide_combines_in_order(left in any::<i32>(), right in any::<i32>()) {
        let pair = Render::divide(|pair: (i32, i32)| pair, shown(), shown());
        prop_assert_eq!(pair.run((left, right)), format!("<{left}><{right}>"));
    }
}

// =============================================================================
// Building Consumers
// =============================================================================

#[derive(Clone)]
struct Reading {
    sensor: String,
    celsius: i32,
    healthy: bool,
}

fn text_field(label: &'static str) -> Op<String, String> {
    Op::new(move |value: String| format!("{label}={value};"))
}

fn reading_line() -> Op<String, Reading> {
    Render::divide3(
        |reading: Reading| (reading.sensor, reading.celsius, reading.healthy),
        text_field("sensor"),
        Render::contramap(text_field("celsius"), |celsius: i32| celsius.to_string()),
        Render::contramap(text_field("ok"), |healthy: bool| if healthy { "yes".to_string() } else { "no".to_string() }),
    )
}

#[rstest]
fn divide3_renders_every_field() {
    let reading = Reading {
        sensor: "north".to_string(),
        celsius: -4,
        healthy: true,
    };
    assert_eq!(reading_line().run(reading), "sensor=north;celsius=-4;ok=yes;");
}

#[rstest]
#[case(Ok(2), "count=2;")]
#[case(Err("timeout".to_string()), "error=timeout;")]
fn choose_renders_one_case(#[case] outcome: Result<i32, String>, #[case] expected: &str) {
    let line = Render::choose(
        |outcome: Result<i32, String>| match outcome {
            Ok(count) => Either::Left(count),
            Err(message) => Either::Right(message),
        },
        Render::contramap(text_field("count"), |count: i32| count.to_string()),
        text_field("error"),
    );
    assert_eq!(line.run(outcome), expected);
}

#[rstest]
fn choose3_routes_over_nested_either() {
    let sized = Measure::choose3(
        |n: i64| {
            if n < 0 {
                Either::Left(n)
            } else if n < 100 {
                Either::Right(Either::Left(n))
            } else {
                Either::Right(Either::Right(()))
            }
        },
        Op::new(|_: i64| Sum::new(-1)),
        Op::new(Sum::new),
        Measure::conquer(),
    );
    assert_eq!(sized.run(-5), Sum::new(-1));
    assert_eq!(sized.run(42), Sum::new(42));
    assert_eq!(sized.run(500), Sum::new(0));
}

#[rstest]
fn const_contramap_keeps_the_constant() {
    let tagged: Const<&'static str, i32> = Const::new("tag");
    let relabelled = ConstK::<&'static str>::contramap(tagged, |text: String| i32::try_from(text.len()).unwrap_or(0));
    assert_eq!(relabelled.into_inner(), "tag");
}
