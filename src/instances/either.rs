//! Instances for [`Either<L, R>`](crate::control::Either).
//!
//! [`EitherK<L>`] is right-biased like `ResultK`, with `L` as the error
//! type. It additionally forms a [`SemigroupK`] in which the first `Right`
//! wins. [`EitherK2`] is the binary witness used by [`Bifunctor`].

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::control::{Either, Eval};
use crate::kind::{Kind, Kind2, Upcast, Upcast2, Value, Witness, Witness2};
use crate::typeclass::{
    Applicative, ApplicativeError, Bifunctor, EquatableK, Foldable, Func, Functor, Monad,
    MonadError, Selective, SemigroupK, Traverse,
};

/// Witness for `Either<L, _>`.
#[derive(Debug)]
pub struct EitherK<L>(Infallible, PhantomData<fn() -> L>);

impl<L: Value> Witness for EitherK<L> {
    type Of<R: Value> = Either<L, R>;
}

/// Witness for `Either<_, _>`.
#[derive(Debug)]
pub enum EitherK2 {}

impl Witness2 for EitherK2 {
    type Of<L: Value, R: Value> = Either<L, R>;
}

impl<L: Value, R: Value> Upcast for Either<L, R> {
    type Witness = EitherK<L>;
    type Argument = R;

    fn upcast(self) -> Kind<EitherK<L>, R> {
        Kind::new(self)
    }
}

impl<L: Value, R: Value> Upcast2 for Either<L, R> {
    type Witness = EitherK2;
    type First = L;
    type Second = R;

    fn upcast2(self) -> Kind2<EitherK2, L, R> {
        Kind2::new(self)
    }
}

crate::invariant_from_functor!(impl[L: Value] EitherK<L>);

impl<L: Value> Functor for EitherK<L> {
    #[inline]
    fn map<A: Value, B: Value>(fa: Either<L, A>, function: impl Fn(A) -> B + 'static) -> Either<L, B> {
        fa.map(function)
    }
}

impl<L: Value> Applicative for EitherK<L> {
    #[inline]
    fn pure<A: Value>(value: A) -> Either<L, A> {
        Either::Right(value)
    }

    fn ap<A: Value, B: Value>(ff: Either<L, Func<A, B>>, fa: Either<L, A>) -> Either<L, B> {
        ff.flat_map(|function| fa.map(|a| function(a)))
    }

    fn map2_eval<A: Value, B: Value, C: Value>(
        fa: Either<L, A>,
        fb: Eval<Either<L, B>>,
        function: impl Fn(A, B) -> C + 'static,
    ) -> Eval<Either<L, C>> {
        match fa {
            Either::Left(error) => Eval::now(Either::Left(error)),
            Either::Right(a) => fb.map(move |fb| fb.map(|b| function(a.clone(), b))),
        }
    }
}

impl<L: Value> Selective for EitherK<L> {
    fn select<A: Value, B: Value>(
        fab: Either<L, Either<A, B>>,
        ff: Either<L, Func<A, B>>,
    ) -> Either<L, B> {
        fab.flat_map(|choice| match choice {
            Either::Left(a) => ff.map(|function| function(a)),
            Either::Right(b) => Either::Right(b),
        })
    }

    fn select_lazy<A: Value, B: Value>(
        fab: Either<L, Either<A, B>>,
        ff: Eval<Either<L, Func<A, B>>>,
    ) -> Either<L, B> {
        crate::typeclass::select_lazy_via_flat_map::<Self, A, B>(fab, ff)
    }

    crate::selective_loops_from_monad!();
}

impl<L: Value> Monad for EitherK<L> {
    #[inline]
    fn flat_map<A: Value, B: Value>(
        fa: Either<L, A>,
        function: impl Fn(A) -> Either<L, B> + 'static,
    ) -> Either<L, B> {
        fa.flat_map(function)
    }

    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> Either<L, Either<A, B>> + 'static,
    ) -> Either<L, B> {
        let mut current = initial;
        loop {
            match step(current) {
                Either::Left(error) => return Either::Left(error),
                Either::Right(Either::Left(next)) => current = next,
                Either::Right(Either::Right(done)) => return Either::Right(done),
            }
        }
    }
}

impl<L: Value> ApplicativeError<L> for EitherK<L> {
    #[inline]
    fn raise_error<A: Value>(error: L) -> Either<L, A> {
        Either::Left(error)
    }

    fn handle_error_with<A: Value>(
        fa: Either<L, A>,
        handler: impl Fn(L) -> Either<L, A> + 'static,
    ) -> Either<L, A> {
        match fa {
            Either::Left(error) => handler(error),
            right @ Either::Right(_) => right,
        }
    }
}

impl<L: Value> MonadError<L> for EitherK<L> {}

impl<L: Value> Foldable for EitherK<L> {
    fn fold_left<A: Value, B>(fa: Either<L, A>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        match fa {
            Either::Right(a) => function(initial, a),
            Either::Left(_) => initial,
        }
    }

    fn fold_right<A: Value, B: Value>(
        fa: Either<L, A>,
        initial: Eval<B>,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B> {
        match fa {
            Either::Right(a) => function(a, initial),
            Either::Left(_) => initial,
        }
    }
}

impl<L: Value> Traverse for EitherK<L> {
    fn traverse<G: Applicative, A: Value, B: Value>(
        fa: Either<L, A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Either<L, B>> {
        match fa {
            Either::Right(a) => G::map::<B, Either<L, B>>(function(a), Either::Right),
            Either::Left(error) => G::pure::<Either<L, B>>(Either::Left(error)),
        }
    }
}

impl<L: Value> SemigroupK for EitherK<L> {
    fn combine_k<A: Value>(x: Either<L, A>, y: Either<L, A>) -> Either<L, A> {
        if x.is_right() { x } else { y }
    }

    fn combine_k_eval<A: Value>(x: Either<L, A>, y: Eval<Either<L, A>>) -> Eval<Either<L, A>> {
        if x.is_right() { Eval::now(x) } else { y }
    }
}

impl<L: Value + PartialEq> EquatableK for EitherK<L> {
    fn eq_k<A: Value>(x: &Either<L, A>, y: &Either<L, A>, equal: impl Fn(&A, &A) -> bool) -> bool {
        match (x, y) {
            (Either::Right(a), Either::Right(b)) => equal(a, b),
            (Either::Left(left), Either::Left(right)) => left == right,
            _ => false,
        }
    }
}

impl Bifunctor for EitherK2 {
    fn bimap<A: Value, B: Value, C: Value, D: Value>(
        fab: Either<A, B>,
        first_function: impl Fn(A) -> C + 'static,
        second_function: impl Fn(B) -> D + 'static,
    ) -> Either<C, D> {
        fab.bimap(first_function, second_function)
    }
}
