//! Contravariant analogues of `Applicative` and `Alternative`.
//!
//! Where an applicative *combines* two producers, a [`Divide`] *splits* the
//! input between two consumers; where an alternative picks one of two
//! producers, a [`Decidable`] routes the input to one of two consumers.
//!
//! - [`Divide::divide`]: split `A` into `(B, C)` and feed both consumers
//! - [`Divisible::conquer`]: the consumer that ignores its input
//! - [`Decidable::choose`]: route `A` to the left or right consumer
//! - [`Decidable::lose`]: the consumer of an impossible input
//!
//! `divide3..divide10` split into tuples, `choose3..choose10` route over
//! right-nested `Either`s (`Either<A, Either<B, C>>` for three cases).
//!
//! # Laws
//!
//! ```text
//! divide(|a| (a, a), fa, conquer()) == fa
//! divide(|a| (a, a), conquer(), fa) == fa
//! choose(Either::Left, fa, lose(absurd)) == fa
//! ```

use std::convert::Infallible;

use paste::paste;

use super::Contravariant;
use crate::control::Either;
use crate::kind::Value;

/// `Either<A, Either<B, .. Z>>` for the given cases.
macro_rules! nested_either {
    ($last:ty) => { $last };
    ($head:ty, $($rest:ty),+) => { Either<$head, nested_either!($($rest),+)> };
}

/// Generates `divideN` from `divide{N-1}`.
macro_rules! derive_divide_arities {
    ($(($arity:literal, $previous:literal): $head:ident: $head_type:ident, [$($value:ident: $type:ident),+];)+) => {
        paste! {
            $(
                /// Splits the input into a tuple and feeds every consumer.
                fn [<divide $arity>]<Z: Value, $head_type: Value, $($type: Value),+>(
                    function: impl Fn(Z) -> ($head_type, $($type),+) + 'static,
                    $head: Self::Of<$head_type>,
                    $($value: Self::Of<$type>),+
                ) -> Self::Of<Z> {
                    Self::divide::<Z, $head_type, ($($type,)+)>(
                        move |z| {
                            let ($head, $($value),+) = function(z);
                            ($head, ($($value,)+))
                        },
                        $head,
                        Self::[<divide $previous>]::<($($type,)+), $($type),+>(|tuple| tuple, $($value),+),
                    )
                }
            )+
        }
    };
}

/// Generates `chooseN` from `choose{N-1}`.
macro_rules! derive_choose_arities {
    ($(($arity:literal, $previous:literal): $head:ident: $head_type:ident, [$($value:ident: $type:ident),+];)+) => {
        paste! {
            $(
                /// Routes the input to one of the consumers.
                fn [<choose $arity>]<Z: Value, $head_type: Value, $($type: Value),+>(
                    function: impl Fn(Z) -> nested_either!($head_type, $($type),+) + 'static,
                    $head: Self::Of<$head_type>,
                    $($value: Self::Of<$type>),+
                ) -> Self::Of<Z> {
                    Self::choose::<Z, $head_type, nested_either!($($type),+)>(
                        function,
                        $head,
                        Self::[<choose $previous>]::<nested_either!($($type),+), $($type),+>(
                            |either| either,
                            $($value),+
                        ),
                    )
                }
            )+
        }
    };
}

/// A contravariant functor that can split its input between two consumers.
pub trait Divide: Contravariant {
    /// Splits `A` with `function` and feeds both halves.
    fn divide<A: Value, B: Value, C: Value>(
        function: impl Fn(A) -> (B, C) + 'static,
        fb: Self::Of<B>,
        fc: Self::Of<C>,
    ) -> Self::Of<A>;

    /// The two-consumer case, named for symmetry with the larger arities.
    fn divide2<Z: Value, A: Value, B: Value>(
        function: impl Fn(Z) -> (A, B) + 'static,
        a: Self::Of<A>,
        b: Self::Of<B>,
    ) -> Self::Of<Z> {
        Self::divide::<Z, A, B>(function, a, b)
    }

    derive_divide_arities! {
        (3, 2): a: A, [b: B, c: C];
        (4, 3): a: A, [b: B, c: C, d: D];
        (5, 4): a: A, [b: B, c: C, d: D, e: E];
        (6, 5): a: A, [b: B, c: C, d: D, e: E, f: F];
        (7, 6): a: A, [b: B, c: C, d: D, e: E, f: F, g: G];
        (8, 7): a: A, [b: B, c: C, d: D, e: E, f: F, g: G, h: H];
        (9, 8): a: A, [b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I];
        (10, 9): a: A, [b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J];
    }
}

/// A `Divide` with a consumer that accepts anything.
pub trait Divisible: Divide {
    /// The consumer that ignores its input.
    fn conquer<A: Value>() -> Self::Of<A>;
}

/// A `Divisible` that can also route its input.
pub trait Decidable: Divisible {
    /// Routes `A` to the left or the right consumer.
    fn choose<A: Value, B: Value, C: Value>(
        function: impl Fn(A) -> Either<B, C> + 'static,
        fb: Self::Of<B>,
        fc: Self::Of<C>,
    ) -> Self::Of<A>;

    /// The consumer of a type with no values.
    fn lose<A: Value>(function: impl Fn(A) -> Infallible + 'static) -> Self::Of<A>;

    /// The two-consumer case, named for symmetry with the larger arities.
    fn choose2<Z: Value, A: Value, B: Value>(
        function: impl Fn(Z) -> Either<A, B> + 'static,
        a: Self::Of<A>,
        b: Self::Of<B>,
    ) -> Self::Of<Z> {
        Self::choose::<Z, A, B>(function, a, b)
    }

    derive_choose_arities! {
        (3, 2): a: A, [b: B, c: C];
        (4, 3): a: A, [b: B, c: C, d: D];
        (5, 4): a: A, [b: B, c: C, d: D, e: E];
        (6, 5): a: A, [b: B, c: C, d: D, e: E, f: F];
        (7, 6): a: A, [b: B, c: C, d: D, e: E, f: F, g: G];
        (8, 7): a: A, [b: B, c: C, d: D, e: E, f: F, g: G, h: H];
        (9, 8): a: A, [b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I];
        (10, 9): a: A, [b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J];
    }
}
