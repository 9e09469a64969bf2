//! A value of one of two possible types.
//!
//! `Either<L, R>` is right-biased: `map` and `flat_map` act on the `Right`
//! side, and `Left` short-circuits. Its typeclass instances live in
//! [`crate::instances::EitherK`]; the hierarchy itself uses `Either` as the
//! step type of `tail_rec_m` and as the branch type of `Selective::select`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(21);
//! assert_eq!(parsed.map(|n| n * 2), Either::Right(42));
//!
//! let failed: Either<String, i32> = Either::Left("bad input".to_string());
//! assert_eq!(failed.map(|n| n * 2).left(), Some("bad input".to_string()));
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left alternative, conventionally the failure or "continue" case.
    Left(L),
    /// The right alternative, conventionally the success or "done" case.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into the left value, discarding a right one.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into the right value, discarding a left one.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Eliminates the `Either` by handling both cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::control::Either;
    ///
    /// let value: Either<&str, i32> = Either::Left("oops");
    /// assert_eq!(value.fold(|error| error.len() as i32, |n| n), 4);
    /// ```
    pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Transforms the right value.
    pub fn map<T>(self, function: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the left value.
    pub fn map_left<T>(self, function: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms both sides.
    pub fn bimap<T, U>(
        self,
        on_left: impl FnOnce(L) -> T,
        on_right: impl FnOnce(R) -> U,
    ) -> Either<T, U> {
        match self {
            Self::Left(value) => Either::Left(on_left(value)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Chains a computation on the right value; a `Left` is returned as is.
    pub fn flat_map<T>(self, function: impl FnOnce(R) -> Either<L, T>) -> Either<L, T> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Exchanges the two sides.
    #[must_use]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the right value or computes one from the left.
    pub fn get_or_else(self, fallback: impl FnOnce(L) -> R) -> R {
        match self {
            Self::Left(value) => fallback(value),
            Self::Right(value) => value,
        }
    }

    /// Converts into a `Result`, with `Right` as `Ok`.
    #[allow(clippy::missing_errors_doc)]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns whichever value is present.
    pub fn merge(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(1), true)]
    #[case(Either::Right("r"), false)]
    fn is_left_matches_variant(#[case] value: Either<i32, &str>, #[case] expected: bool) {
        assert_eq!(value.is_left(), expected);
        assert_eq!(value.is_right(), !expected);
    }

    #[rstest]
    fn map_leaves_left_untouched() {
        let value: Either<&str, i32> = Either::Left("error");
        assert_eq!(value.map(|n| n + 1), Either::Left("error"));
    }

    #[rstest]
    fn flat_map_short_circuits_on_left() {
        let value: Either<&str, i32> = Either::Right(1);
        let chained = value
            .flat_map(|_| Either::<&str, i32>::Left("first"))
            .flat_map(|_| Either::<&str, i32>::Left("second"));
        assert_eq!(chained, Either::Left("first"));
    }

    #[rstest]
    fn bimap_and_swap() {
        let value: Either<i32, String> = Either::Left(2);
        assert_eq!(
            value.bimap(|n| n * 10, |s| s.len()).swap(),
            Either::<usize, i32>::Right(20)
        );
    }

    #[rstest]
    fn result_round_trip() {
        let value: Either<String, i32> = Ok::<i32, String>(3).into();
        assert_eq!(value.clone().into_result(), Ok(3));
        let back: Result<i32, String> = value.into();
        assert_eq!(back, Ok(3));
    }

    #[rstest]
    fn merge_returns_either_side() {
        assert_eq!(Either::<i32, i32>::Left(1).merge(), 1);
        assert_eq!(Either::<i32, i32>::Right(2).merge(), 2);
    }

    #[rstest]
    fn debug_format() {
        assert_eq!(format!("{:?}", Either::<i32, i32>::Right(5)), "Right(5)");
    }
}
