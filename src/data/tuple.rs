//! Pairs as a bifunctor.

use crate::kind::{Kind2, Upcast2, Value, Witness2};
use crate::typeclass::Bifunctor;

/// Witness for `(_, _)`.
///
/// ```rust
/// use kindred::data::TupleK2;
/// use kindred::typeclass::Bifunctor;
///
/// assert_eq!(TupleK2::bimap((2, "ab"), |n| n * 10, str::len), (20, 2));
/// assert_eq!(TupleK2::first((2, 'x'), |n: i32| n + 1), (3, 'x'));
/// ```
#[derive(Debug)]
pub enum TupleK2 {}

impl Witness2 for TupleK2 {
    type Of<A: Value, B: Value> = (A, B);
}

impl<A: Value, B: Value> Upcast2 for (A, B) {
    type Witness = TupleK2;
    type First = A;
    type Second = B;

    fn upcast2(self) -> Kind2<TupleK2, A, B> {
        Kind2::new(self)
    }
}

impl Bifunctor for TupleK2 {
    fn bimap<A: Value, B: Value, C: Value, D: Value>(
        (a, b): (A, B),
        first_function: impl Fn(A) -> C + 'static,
        second_function: impl Fn(B) -> D + 'static,
    ) -> (C, D) {
        (first_function(a), second_function(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case((1, 'a'), (2, 'A'))]
    #[case((-3, 'z'), (-2, 'Z'))]
    fn bimap_maps_both_halves(#[case] input: (i32, char), #[case] expected: (i32, char)) {
        assert_eq!(TupleK2::bimap(input, |n| n + 1, |c: char| c.to_ascii_uppercase()), expected);
    }

    #[rstest]
    fn upcast_then_bimap_through_the_box() {
        let boxed = (1, "one").upcast2();
        let mapped = boxed.bimap(|n: i32| n * 2, |s: &str| s.len());
        assert_eq!(mapped.and_then(Kind2::fix), Ok((2, 3)));
    }
}
