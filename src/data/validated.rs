//! Validation that accumulates errors.
//!
//! `Validated<E, A>` is shaped like `Result<A, E>`, but its applicative
//! combines the errors of *both* sides with `E`'s [`Semigroup`] instead of
//! stopping at the first one:
//!
//! ```rust
//! use kindred::data::{Validated, ValidatedK};
//! use kindred::typeclass::{Applicative, Func};
//!
//! let e1: Validated<String, Func<i32, i32>> = Validated::invalid("e1".to_string());
//! let e2: Validated<String, i32> = Validated::invalid("e2".to_string());
//! assert_eq!(ValidatedK::<String>::ap(e1, e2), Validated::invalid("e1e2".to_string()));
//! ```
//!
//! For contrast, `ResultK::ap` on two errors keeps only the first.
//!
//! There is deliberately no `Monad` for [`ValidatedK`]: `flat_map` would
//! have to stop at the first error, and `ap` derived from it would then
//! disagree with the accumulating `ap` above. Sequential validation that
//! depends on a previous value is available as the inherent
//! [`Validated::and_then`], which is not part of any typeclass.

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::control::{Either, Eval};
use crate::kind::{Kind, Kind2, Upcast, Upcast2, Value, Witness, Witness2};
use crate::typeclass::{
    Applicative, ApplicativeError, Bifunctor, EquatableK, Foldable, Func, Functor, Selective,
    Semigroup, SemigroupK, Traverse,
};

/// Either a valid `A` or the accumulated errors `E`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Validated<E, A> {
    /// A successful value.
    Valid(A),
    /// The errors found so far.
    Invalid(E),
}

impl<E, A> Validated<E, A> {
    /// A successful value.
    #[inline]
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// A failure.
    #[inline]
    pub const fn invalid(error: E) -> Self {
        Self::Invalid(error)
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Transforms the valid value.
    pub fn map<B>(self, function: impl FnOnce(A) -> B) -> Validated<E, B> {
        match self {
            Self::Valid(a) => Validated::Valid(function(a)),
            Self::Invalid(error) => Validated::Invalid(error),
        }
    }

    /// Transforms the errors.
    pub fn map_err<F>(self, function: impl FnOnce(E) -> F) -> Validated<F, A> {
        match self {
            Self::Valid(a) => Validated::Valid(a),
            Self::Invalid(error) => Validated::Invalid(function(error)),
        }
    }

    /// Collapses both cases into one value.
    pub fn fold<T>(self, on_invalid: impl FnOnce(E) -> T, on_valid: impl FnOnce(A) -> T) -> T {
        match self {
            Self::Valid(a) => on_valid(a),
            Self::Invalid(error) => on_invalid(error),
        }
    }

    /// Continues with `function` on a valid value, stopping at the first
    /// failure.
    ///
    /// Unlike [`ap`](Validated::ap) this does not accumulate; it is the
    /// explicit opt-in to short-circuiting.
    pub fn and_then<B>(self, function: impl FnOnce(A) -> Validated<E, B>) -> Validated<E, B> {
        match self {
            Self::Valid(a) => function(a),
            Self::Invalid(error) => Validated::Invalid(error),
        }
    }

    /// The valid value, or one computed from the errors.
    pub fn get_or_else(self, fallback: impl FnOnce(E) -> A) -> A {
        match self {
            Self::Valid(a) => a,
            Self::Invalid(error) => fallback(error),
        }
    }

    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Valid(a) => Ok(a),
            Self::Invalid(error) => Err(error),
        }
    }

    pub fn into_either(self) -> Either<E, A> {
        match self {
            Self::Valid(a) => Either::Right(a),
            Self::Invalid(error) => Either::Left(error),
        }
    }
}

impl<E: Semigroup, A> Validated<E, A> {
    /// Applies the function in `function` to this value, accumulating the
    /// errors of `self` before those of `function`.
    ///
    /// ```rust
    /// use kindred::data::Validated;
    ///
    /// let missing_name: Validated<String, i32> = Validated::invalid("e1".to_string());
    /// let bad_age: Validated<String, fn(i32) -> i32> = Validated::invalid("e2".to_string());
    /// assert_eq!(missing_name.ap(bad_age), Validated::invalid("e1e2".to_string()));
    /// ```
    pub fn ap<B, F: FnOnce(A) -> B>(self, function: Validated<E, F>) -> Validated<E, B> {
        match (self, function) {
            (Self::Valid(a), Validated::Valid(function)) => Validated::Valid(function(a)),
            (Self::Valid(_), Validated::Invalid(error)) | (Self::Invalid(error), Validated::Valid(_)) => {
                Validated::Invalid(error)
            }
            (Self::Invalid(left), Validated::Invalid(right)) => Validated::Invalid(left.combine(right)),
        }
    }

    /// Pairs two values, accumulating the errors of both.
    pub fn zip<B>(self, other: Validated<E, B>) -> Validated<E, (A, B)> {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Self::Valid(_), Validated::Invalid(error)) | (Self::Invalid(error), Validated::Valid(_)) => {
                Validated::Invalid(error)
            }
            (Self::Invalid(left), Validated::Invalid(right)) => Validated::Invalid(left.combine(right)),
        }
    }
}

impl<E, A> From<Result<A, E>> for Validated<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(a) => Self::Valid(a),
            Err(error) => Self::Invalid(error),
        }
    }
}

impl<E, A> From<Validated<E, A>> for Result<A, E> {
    fn from(validated: Validated<E, A>) -> Self {
        validated.into_result()
    }
}

/// Witness for `Validated<E, _>`.
#[derive(Debug)]
pub struct ValidatedK<E>(Infallible, PhantomData<fn() -> E>);

impl<E: Value> Witness for ValidatedK<E> {
    type Of<A: Value> = Validated<E, A>;
}

/// Witness for `Validated<_, _>`.
#[derive(Debug)]
pub enum ValidatedK2 {}

impl Witness2 for ValidatedK2 {
    type Of<E: Value, A: Value> = Validated<E, A>;
}

impl<E: Value, A: Value> Upcast for Validated<E, A> {
    type Witness = ValidatedK<E>;
    type Argument = A;

    fn upcast(self) -> Kind<ValidatedK<E>, A> {
        Kind::new(self)
    }
}

impl<E: Value, A: Value> Upcast2 for Validated<E, A> {
    type Witness = ValidatedK2;
    type First = E;
    type Second = A;

    fn upcast2(self) -> Kind2<ValidatedK2, E, A> {
        Kind2::new(self)
    }
}

// =============================================================================
// Functor Family
// =============================================================================

crate::invariant_from_functor!(impl[E: Value] ValidatedK<E>);

impl<E: Value> Functor for ValidatedK<E> {
    #[inline]
    fn map<A: Value, B: Value>(
        fa: Validated<E, A>,
        function: impl Fn(A) -> B + 'static,
    ) -> Validated<E, B> {
        fa.map(function)
    }
}

impl<E: Value + Semigroup> Applicative for ValidatedK<E> {
    #[inline]
    fn pure<A: Value>(value: A) -> Validated<E, A> {
        Validated::Valid(value)
    }

    /// Errors of `ff` come first, then those of `fa`.
    fn ap<A: Value, B: Value>(ff: Validated<E, Func<A, B>>, fa: Validated<E, A>) -> Validated<E, B> {
        ff.zip(fa).map(|(function, a)| function(a))
    }

    fn map2<A: Value, B: Value, C: Value>(
        fa: Validated<E, A>,
        fb: Validated<E, B>,
        function: impl Fn(A, B) -> C + 'static,
    ) -> Validated<E, C> {
        fa.zip(fb).map(|(a, b)| function(a, b))
    }
}

/// `select` is the applicative one: both sides are always inspected so
/// their errors accumulate, and a valid `Right` still fails when the
/// function side is invalid.
impl<E: Value + Semigroup> Selective for ValidatedK<E> {
    fn select<A: Value, B: Value>(
        fab: Validated<E, Either<A, B>>,
        ff: Validated<E, Func<A, B>>,
    ) -> Validated<E, B> {
        fab.zip(ff).map(|(choice, function)| match choice {
            Either::Left(a) => function(a),
            Either::Right(b) => b,
        })
    }
}

impl<E: Value + Semigroup> ApplicativeError<E> for ValidatedK<E> {
    #[inline]
    fn raise_error<A: Value>(error: E) -> Validated<E, A> {
        Validated::Invalid(error)
    }

    fn handle_error_with<A: Value>(
        fa: Validated<E, A>,
        handler: impl Fn(E) -> Validated<E, A> + 'static,
    ) -> Validated<E, A> {
        match fa {
            Validated::Invalid(error) => handler(error),
            valid @ Validated::Valid(_) => valid,
        }
    }
}

// =============================================================================
// Foldable / Traverse
// =============================================================================

impl<E: Value> Foldable for ValidatedK<E> {
    fn fold_left<A: Value, B>(fa: Validated<E, A>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        match fa {
            Validated::Valid(a) => function(initial, a),
            Validated::Invalid(_) => initial,
        }
    }

    fn fold_right<A: Value, B: Value>(
        fa: Validated<E, A>,
        initial: Eval<B>,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B> {
        match fa {
            Validated::Valid(a) => function(a, initial),
            Validated::Invalid(_) => initial,
        }
    }
}

impl<E: Value> Traverse for ValidatedK<E> {
    fn traverse<G: Applicative, A: Value, B: Value>(
        fa: Validated<E, A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Validated<E, B>> {
        match fa {
            Validated::Valid(a) => G::map::<B, Validated<E, B>>(function(a), Validated::Valid),
            Validated::Invalid(error) => G::pure::<Validated<E, B>>(Validated::Invalid(error)),
        }
    }
}

/// The first valid value wins; two failures combine their errors.
impl<E: Value + Semigroup> SemigroupK for ValidatedK<E> {
    fn combine_k<A: Value>(x: Validated<E, A>, y: Validated<E, A>) -> Validated<E, A> {
        match (x, y) {
            (valid @ Validated::Valid(_), _) | (Validated::Invalid(_), valid @ Validated::Valid(_)) => {
                valid
            }
            (Validated::Invalid(left), Validated::Invalid(right)) => Validated::Invalid(left.combine(right)),
        }
    }
}

impl<E: Value + PartialEq> EquatableK for ValidatedK<E> {
    fn eq_k<A: Value>(
        x: &Validated<E, A>,
        y: &Validated<E, A>,
        equal: impl Fn(&A, &A) -> bool,
    ) -> bool {
        match (x, y) {
            (Validated::Valid(a), Validated::Valid(b)) => equal(a, b),
            (Validated::Invalid(left), Validated::Invalid(right)) => left == right,
            _ => false,
        }
    }
}

impl Bifunctor for ValidatedK2 {
    fn bimap<E: Value, A: Value, F: Value, B: Value>(
        fab: Validated<E, A>,
        first_function: impl Fn(E) -> F + 'static,
        second_function: impl Fn(A) -> B + 'static,
    ) -> Validated<F, B> {
        fab.map_err(first_function).map(second_function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::VecK;
    use crate::typeclass::func;
    use rstest::rstest;

    type Checked = ValidatedK<Vec<String>>;
    type Text = ValidatedK<String>;

    fn problem(message: &str) -> Vec<String> {
        vec![message.to_string()]
    }

    #[rstest]
    fn map2_collects_every_error() {
        let name: Validated<Vec<String>, String> = Validated::invalid(problem("name is empty"));
        let age: Validated<Vec<String>, u8> = Validated::invalid(problem("age is negative"));
        let person = Checked::map2(name, age, |name, age| format!("{name} ({age})"));
        assert_eq!(
            person,
            Validated::invalid(vec!["name is empty".to_string(), "age is negative".to_string()])
        );
    }

    #[rstest]
    fn map3_is_valid_when_all_are() {
        let total = Checked::map3(
            Validated::valid(1),
            Validated::valid(2),
            Validated::valid(3),
            |a, b, c| a + b + c,
        );
        assert_eq!(total, Validated::valid(6));
    }

    #[rstest]
    fn and_then_short_circuits() {
        let checked: Validated<String, i32> = Validated::valid(3);
        let result = checked.and_then(|n| {
            if n > 5 { Validated::valid(n) } else { Validated::invalid("too small".to_string()) }
        });
        assert_eq!(result, Validated::invalid("too small".to_string()));
    }

    #[rstest]
    fn select_accumulates_both_sides() {
        let fab: Validated<String, Either<i32, i32>> = Validated::invalid("a".to_string());
        let ff: Validated<String, Func<i32, i32>> = Validated::invalid("b".to_string());
        assert_eq!(Text::select(fab, ff), Validated::invalid("ab".to_string()));

        let right: Validated<String, Either<i32, i32>> = Validated::valid(Either::Right(1));
        assert_eq!(Text::select(right, Validated::valid(func(|n: i32| n))), Validated::valid(1));
    }

    #[rstest]
    fn select_on_right_still_reports_the_handler_error() {
        let right: Validated<String, Either<i32, i32>> = Validated::valid(Either::Right(1));
        let handler: Validated<String, Func<i32, i32>> = Validated::invalid("handler".to_string());
        assert_eq!(Text::select(right, handler), Validated::invalid("handler".to_string()));
    }

    #[rstest]
    fn traverse_with_validated_effect_accumulates() {
        let checked = VecK::traverse::<Checked, i32, i32>(vec![1, -2, 3, -4], |n| {
            if n > 0 { Validated::valid(n) } else { Validated::invalid(vec![format!("{n} < 0")]) }
        });
        assert_eq!(checked, Validated::invalid(vec!["-2 < 0".to_string(), "-4 < 0".to_string()]));
    }

    #[rstest]
    fn combine_k_prefers_valid() {
        let failed: Validated<String, i32> = Validated::invalid("x".to_string());
        assert_eq!(Text::combine_k(failed.clone(), Validated::valid(2)), Validated::valid(2));
        assert_eq!(Text::combine_k(failed.clone(), failed), Validated::invalid("xx".to_string()));
    }

    #[rstest]
    fn result_round_trip() {
        let validated: Validated<String, i32> = Ok(1).into();
        assert_eq!(Result::from(validated), Ok(1));
    }

    #[rstest]
    fn bimap_touches_one_side() {
        let failed: Validated<&str, i32> = Validated::invalid("bad");
        assert_eq!(ValidatedK2::bimap(failed, str::len, |n| n + 1), Validated::invalid(3));
    }
}
