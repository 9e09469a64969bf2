//! Instances for `Result<A, E>`.
//!
//! [`ResultK<E>`] fixes the error type and is right-biased: `Err` stops
//! every chain, and it is the `E` of [`ApplicativeError`]. [`ResultK2`]
//! keeps both parameters open for [`Bifunctor`], error first, so that
//! `first` maps the error and `second` maps the success.

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::control::{Either, Eval};
use crate::kind::{Kind, Kind2, Upcast, Upcast2, Value, Witness, Witness2};
use crate::typeclass::{
    Applicative, ApplicativeError, Bifunctor, EquatableK, Foldable, Func, Functor, Monad,
    MonadError, Selective, Traverse,
};

/// Witness for `Result<_, E>`.
#[derive(Debug)]
pub struct ResultK<E>(Infallible, PhantomData<fn() -> E>);

impl<E: Value> Witness for ResultK<E> {
    type Of<A: Value> = Result<A, E>;
}

/// Witness for `Result<_, _>` with the error as the first parameter.
#[derive(Debug)]
pub enum ResultK2 {}

impl Witness2 for ResultK2 {
    type Of<E: Value, A: Value> = Result<A, E>;
}

impl<A: Value, E: Value> Upcast for Result<A, E> {
    type Witness = ResultK<E>;
    type Argument = A;

    fn upcast(self) -> Kind<ResultK<E>, A> {
        Kind::new(self)
    }
}

impl<A: Value, E: Value> Upcast2 for Result<A, E> {
    type Witness = ResultK2;
    type First = E;
    type Second = A;

    fn upcast2(self) -> Kind2<ResultK2, E, A> {
        Kind2::new(self)
    }
}

// =============================================================================
// Functor Family
// =============================================================================

crate::invariant_from_functor!(impl[E: Value] ResultK<E>);

impl<E: Value> Functor for ResultK<E> {
    #[inline]
    fn map<A: Value, B: Value>(fa: Result<A, E>, function: impl Fn(A) -> B + 'static) -> Result<B, E> {
        fa.map(function)
    }
}

impl<E: Value> Applicative for ResultK<E> {
    #[inline]
    fn pure<A: Value>(value: A) -> Result<A, E> {
        Ok(value)
    }

    fn ap<A: Value, B: Value>(ff: Result<Func<A, B>, E>, fa: Result<A, E>) -> Result<B, E> {
        let function = ff?;
        fa.map(|a| function(a))
    }

    fn map2_eval<A: Value, B: Value, C: Value>(
        fa: Result<A, E>,
        fb: Eval<Result<B, E>>,
        function: impl Fn(A, B) -> C + 'static,
    ) -> Eval<Result<C, E>> {
        match fa {
            Err(error) => Eval::now(Err(error)),
            Ok(a) => fb.map(move |fb| fb.map(|b| function(a.clone(), b))),
        }
    }
}

impl<E: Value> Selective for ResultK<E> {
    fn select<A: Value, B: Value>(
        fab: Result<Either<A, B>, E>,
        ff: Result<Func<A, B>, E>,
    ) -> Result<B, E> {
        match fab? {
            Either::Left(a) => ff.map(|function| function(a)),
            Either::Right(b) => Ok(b),
        }
    }

    fn select_lazy<A: Value, B: Value>(
        fab: Result<Either<A, B>, E>,
        ff: Eval<Result<Func<A, B>, E>>,
    ) -> Result<B, E> {
        crate::typeclass::select_lazy_via_flat_map::<Self, A, B>(fab, ff)
    }

    crate::selective_loops_from_monad!();
}

impl<E: Value> Monad for ResultK<E> {
    #[inline]
    fn flat_map<A: Value, B: Value>(
        fa: Result<A, E>,
        function: impl Fn(A) -> Result<B, E> + 'static,
    ) -> Result<B, E> {
        fa.and_then(function)
    }

    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> Result<Either<A, B>, E> + 'static,
    ) -> Result<B, E> {
        let mut current = initial;
        loop {
            match step(current)? {
                Either::Left(next) => current = next,
                Either::Right(done) => return Ok(done),
            }
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

impl<E: Value> ApplicativeError<E> for ResultK<E> {
    #[inline]
    fn raise_error<A: Value>(error: E) -> Result<A, E> {
        Err(error)
    }

    fn handle_error_with<A: Value>(
        fa: Result<A, E>,
        handler: impl Fn(E) -> Result<A, E> + 'static,
    ) -> Result<A, E> {
        fa.or_else(handler)
    }
}

impl<E: Value> MonadError<E> for ResultK<E> {}

// =============================================================================
// Foldable / Traverse
// =============================================================================

impl<E: Value> Foldable for ResultK<E> {
    fn fold_left<A: Value, B>(fa: Result<A, E>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        match fa {
            Ok(a) => function(initial, a),
            Err(_) => initial,
        }
    }

    fn fold_right<A: Value, B: Value>(
        fa: Result<A, E>,
        initial: Eval<B>,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B> {
        match fa {
            Ok(a) => function(a, initial),
            Err(_) => initial,
        }
    }

    #[inline]
    fn count<A: Value>(fa: Result<A, E>) -> usize {
        usize::from(fa.is_ok())
    }
}

impl<E: Value> Traverse for ResultK<E> {
    fn traverse<G: Applicative, A: Value, B: Value>(
        fa: Result<A, E>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Result<B, E>> {
        match fa {
            Ok(a) => G::map::<B, Result<B, E>>(function(a), Ok),
            Err(error) => G::pure::<Result<B, E>>(Err(error)),
        }
    }
}

impl<E: Value + PartialEq> EquatableK for ResultK<E> {
    fn eq_k<A: Value>(x: &Result<A, E>, y: &Result<A, E>, equal: impl Fn(&A, &A) -> bool) -> bool {
        match (x, y) {
            (Ok(a), Ok(b)) => equal(a, b),
            (Err(left), Err(right)) => left == right,
            _ => false,
        }
    }
}

// =============================================================================
// ResultK2
// =============================================================================

impl Bifunctor for ResultK2 {
    fn bimap<E: Value, A: Value, F: Value, B: Value>(
        fab: Result<A, E>,
        first_function: impl Fn(E) -> F + 'static,
        second_function: impl Fn(A) -> B + 'static,
    ) -> Result<B, F> {
        match fab {
            Ok(a) => Ok(second_function(a)),
            Err(error) => Err(first_function(error)),
        }
    }
}
