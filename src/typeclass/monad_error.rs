//! Error handling type classes.
//!
//! [`ApplicativeError`] raises and recovers domain errors of type `E`;
//! [`MonadError`] adds the combinators that need `flat_map`. The errors
//! handled here are always values carried inside the effect: nothing is
//! propagated past the returned `F<A>`.
//!
//! Host failures enter only at the two bridges:
//!
//! - [`ApplicativeError::catch_error`] for a `Result`-returning call
//! - [`ApplicativeError::catch_panic`] for a call that may panic
//!
//! Kind cast failures ([`KindCastError`](crate::kind::KindCastError)) are
//! a separate error universe and never flow through these traits.
//!
//! # Laws
//!
//! ```text
//! handle_error_with(raise_error(e), f) == f(e)
//! handle_error_with(pure(a), f)        == pure(a)
//! attempt(raise_error(e))              == pure(Left(e))
//! flat_map(raise_error(e), f)          == raise_error(e)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::ResultK;
//! use kindred::typeclass::{ApplicativeError, MonadError};
//!
//! type Parse = ResultK<String>;
//!
//! let parsed = Parse::catch_error(|| "42".parse::<i32>(), |error| error.to_string());
//! assert_eq!(parsed, Ok(42));
//!
//! let positive = Parse::ensure(Ok(-1), || "negative".to_string(), |n: &i32| *n >= 0);
//! assert_eq!(positive, Err("negative".to_string()));
//! ```

use std::any::Any;
use std::panic::{self, UnwindSafe};

use super::{Applicative, Monad};
use crate::control::Either;
use crate::kind::Value;

/// An applicative that can fail with, and recover from, errors of type `E`.
pub trait ApplicativeError<E: Value>: Applicative {
    /// The failed effect.
    fn raise_error<A: Value>(error: E) -> Self::Of<A>;

    /// Recovers from a failure with another effect.
    fn handle_error_with<A: Value>(
        fa: Self::Of<A>,
        handler: impl Fn(E) -> Self::Of<A> + 'static,
    ) -> Self::Of<A>;

    /// Recovers from a failure with a plain value.
    fn handle_error<A: Value>(fa: Self::Of<A>, handler: impl Fn(E) -> A + 'static) -> Self::Of<A> {
        Self::handle_error_with::<A>(fa, move |error| Self::pure(handler(error)))
    }

    /// Exposes the failure as a `Left`.
    fn attempt<A: Value>(fa: Self::Of<A>) -> Self::Of<Either<E, A>> {
        Self::handle_error_with::<Either<E, A>>(
            Self::map::<A, Either<E, A>>(fa, Either::Right),
            |error| Self::pure(Either::Left(error)),
        )
    }

    /// Lifts an `Either` whose `Left` is the error.
    fn from_either<A: Value>(either: Either<E, A>) -> Self::Of<A> {
        match either {
            Either::Left(error) => Self::raise_error::<A>(error),
            Either::Right(a) => Self::pure(a),
        }
    }

    /// Lifts a `Result`.
    fn from_result<A: Value>(result: Result<A, E>) -> Self::Of<A> {
        match result {
            Ok(a) => Self::pure(a),
            Err(error) => Self::raise_error::<A>(error),
        }
    }

    /// Lifts an `Option`, failing with `if_none()` for `None`.
    fn from_option<A: Value>(option: Option<A>, if_none: impl FnOnce() -> E) -> Self::Of<A> {
        match option {
            Some(a) => Self::pure(a),
            None => Self::raise_error::<A>(if_none()),
        }
    }

    /// Recovers from the failures `partial` is defined for.
    fn recover<A: Value>(
        fa: Self::Of<A>,
        partial: impl Fn(&E) -> Option<A> + 'static,
    ) -> Self::Of<A> {
        Self::handle_error_with::<A>(fa, move |error| match partial(&error) {
            Some(a) => Self::pure(a),
            None => Self::raise_error::<A>(error),
        })
    }

    /// Recovers with an effect from the failures `partial` is defined for.
    fn recover_with<A: Value>(
        fa: Self::Of<A>,
        partial: impl Fn(&E) -> Option<Self::Of<A>> + 'static,
    ) -> Self::Of<A> {
        Self::handle_error_with::<A>(fa, move |error| {
            partial(&error).unwrap_or_else(|| Self::raise_error::<A>(error))
        })
    }

    /// Folds success and failure into a successful `B`.
    fn redeem<A: Value, B: Value>(
        fa: Self::Of<A>,
        recover: impl Fn(E) -> B + 'static,
        transform: impl Fn(A) -> B + 'static,
    ) -> Self::Of<B> {
        Self::handle_error::<B>(Self::map::<A, B>(fa, transform), recover)
    }

    /// Transforms the error, keeping successes.
    fn adapt_error<A: Value>(fa: Self::Of<A>, transform: impl Fn(E) -> E + 'static) -> Self::Of<A> {
        Self::handle_error_with::<A>(fa, move |error| Self::raise_error::<A>(transform(error)))
    }

    /// Runs a fallible host call, mapping its error into `E`.
    fn catch_error<A: Value, X>(
        thunk: impl FnOnce() -> Result<A, X>,
        into_error: impl FnOnce(X) -> E,
    ) -> Self::Of<A> {
        match thunk() {
            Ok(a) => Self::pure(a),
            Err(failure) => Self::raise_error::<A>(into_error(failure)),
        }
    }

    /// Runs a host call that may panic, turning the panic message into `E`.
    ///
    /// The panic hook still runs, so the message is reported as usual.
    fn catch_panic<A: Value>(
        thunk: impl FnOnce() -> A + UnwindSafe,
        into_error: impl FnOnce(String) -> E,
    ) -> Self::Of<A> {
        match panic::catch_unwind(thunk) {
            Ok(a) => Self::pure(a),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::debug!(%message, "panic bridged into an error value");
                Self::raise_error::<A>(into_error(message))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// A monad that can fail with, and recover from, errors of type `E`.
pub trait MonadError<E: Value>: Monad + ApplicativeError<E> {
    /// Fails with `error()` unless `predicate` holds for the value.
    fn ensure<A: Value>(
        fa: Self::Of<A>,
        error: impl Fn() -> E + 'static,
        predicate: impl Fn(&A) -> bool + 'static,
    ) -> Self::Of<A> {
        Self::ensure_or::<A>(fa, move |_| error(), predicate)
    }

    /// Fails with an error built from the value unless `predicate` holds.
    fn ensure_or<A: Value>(
        fa: Self::Of<A>,
        error: impl Fn(&A) -> E + 'static,
        predicate: impl Fn(&A) -> bool + 'static,
    ) -> Self::Of<A> {
        Self::flat_map::<A, A>(fa, move |a| {
            if predicate(&a) { Self::pure(a) } else { Self::raise_error::<A>(error(&a)) }
        })
    }

    /// Continues with `bind` on success and `recover` on failure.
    fn redeem_with<A: Value, B: Value>(
        fa: Self::Of<A>,
        recover: impl Fn(E) -> Self::Of<B> + 'static,
        bind: impl Fn(A) -> Self::Of<B> + 'static,
    ) -> Self::Of<B> {
        Self::flat_map::<Either<E, A>, B>(Self::attempt::<A>(fa), move |outcome| match outcome {
            Either::Left(error) => recover(error),
            Either::Right(a) => bind(a),
        })
    }

    /// Re-raises a `Left` produced by [`attempt`](ApplicativeError::attempt).
    fn rethrow<A: Value>(fea: Self::Of<Either<E, A>>) -> Self::Of<A> {
        Self::flat_map::<Either<E, A>, A>(fea, Self::from_either::<A>)
    }
}
