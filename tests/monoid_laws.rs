//! Property-based tests for Semigroup and Monoid laws.
//!
//! - **Associativity**: `(a <> b) <> c == a <> (b <> c)`
//! - **Left Identity**: `empty <> a == a`
//! - **Right Identity**: `a <> empty == a`
//! - **Fold Consistency**: `combine_all` agrees with a left fold from `empty`

use std::fmt::Debug;

use kindred::typeclass::{First, Last, Max, Min, Monoid, Product, Semigroup, Sum};
use proptest::prelude::*;

fn semigroup_associativity<T: Semigroup + Clone + PartialEq + Debug>(
    a: T,
    b: T,
    c: T,
) -> Result<(), TestCaseError> {
    let left = a.clone().combine(b.clone()).combine(c.clone());
    let right = a.combine(b.combine(c));
    prop_assert_eq!(left, right);
    Ok(())
}

fn monoid_identities<T: Monoid + Clone + PartialEq + Debug>(a: T) -> Result<(), TestCaseError> {
    prop_assert_eq!(T::empty().combine(a.clone()), a.clone());
    prop_assert_eq!(a.clone().combine(T::empty()), a);
    Ok(())
}

fn monoid_laws<T: Monoid + Clone + PartialEq + Debug>(a: T, b: T, c: T) -> Result<(), TestCaseError> {
    semigroup_associativity(a.clone(), b.clone(), c.clone())?;
    monoid_identities(a.clone())?;

    let folded = [a.clone(), b.clone(), c.clone()]
        .into_iter()
        .fold(T::empty(), Semigroup::combine);
    prop_assert_eq!(T::combine_all(vec![a, b, c]), folded);
    Ok(())
}

proptest! {
    #[test]
    fn prop_string_monoid(a in ".{0,6}", b in ".{0,6}", c in ".{0,6}") {
        monoid_laws(a, b, c)?;
    }

    #[test]
    fn prop_vec_monoid(
        a in prop::collection::vec(any::<u8>(), 0..5),
        b in prop::collection::vec(any::<u8>(), 0..5),
        c in prop::collection::vec(any::<u8>(), 0..5),
    ) {
        monoid_laws(a, b, c)?;
    }

    #[test]
    fn prop_option_monoid_lifts_the_semigroup(
        a in proptest::option::of("[a-z]{0,3}"),
        b in proptest::option::of("[a-z]{0,3}"),
        c in proptest::option::of("[a-z]{0,3}"),
    ) {
        monoid_laws(a, b, c)?;
    }

    #[test]
    fn prop_sum_and_product_monoids(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000) {
        monoid_laws(Sum(a), Sum(b), Sum(c))?;
        monoid_laws(Product(a), Product(b), Product(c))?;
    }

    #[test]
    fn prop_max_and_min_monoids(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        monoid_laws(Max(a), Max(b), Max(c))?;
        monoid_laws(Min(a), Min(b), Min(c))?;
        prop_assert_eq!(Max(a).combine(Max(b)), Max(a.max(b)));
        prop_assert_eq!(Min(a).combine(Min(b)), Min(a.min(b)));
    }

    #[test]
    fn prop_first_and_last_monoids(
        a in any::<Option<u8>>(),
        b in any::<Option<u8>>(),
        c in any::<Option<u8>>(),
    ) {
        monoid_laws(First(a), First(b), First(c))?;
        monoid_laws(Last(a), Last(b), Last(c))?;
        prop_assert_eq!(First(a).combine(First(b)).0, a.or(b));
        prop_assert_eq!(Last(a).combine(Last(b)).0, b.or(a));
    }

    #[test]
    fn prop_tuple_monoids(a in (any::<i16>(), "[a-z]{0,3}"), b in (any::<i16>(), "[a-z]{0,3}"), c in (any::<i16>(), "[a-z]{0,3}")) {
        monoid_laws(
            (Sum(i64::from(a.0)), a.1.clone()),
            (Sum(i64::from(b.0)), b.1.clone()),
            (Sum(i64::from(c.0)), c.1.clone()),
        )?;
        monoid_laws(
            (Max(a.0), a.1, ()),
            (Max(b.0), b.1, ()),
            (Max(c.0), c.1, ()),
        )?;
    }

    #[test]
    fn prop_result_semigroup_keeps_the_first_error(
        a in prop::result::maybe_ok("[a-z]{0,3}", any::<u8>()),
        b in prop::result::maybe_ok("[a-z]{0,3}", any::<u8>()),
        c in prop::result::maybe_ok("[a-z]{0,3}", any::<u8>()),
    ) {
        semigroup_associativity(a, b, c)?;
    }

    #[test]
    fn prop_combine_n_repeats(text in "[a-z]{1,3}", count in 1usize..6) {
        prop_assert_eq!(text.clone().combine_n(count), Some(text.repeat(count)));
    }
}
