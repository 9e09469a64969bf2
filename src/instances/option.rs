//! Instances for `Option<A>`.
//!
//! `None` short-circuits everything: the lazy combinators
//! (`map2_eval`, `select_lazy`, `combine_k_eval`) never force their second
//! argument once the first one decides the result.

use crate::control::{Either, Eval};
use crate::kind::{Kind, Upcast, Value, Witness};
use crate::typeclass::{
    Alternative, Applicative, ApplicativeError, EquatableK, Foldable, Func, Functor,
    FunctorFilter, Monad, MonadCombine, MonadError, MonadFilter, MonoidK, Selective, SemigroupK,
    Traverse, TraverseFilter,
};

/// Witness for `Option<_>`.
#[derive(Debug)]
pub enum OptionK {}

impl Witness for OptionK {
    type Of<A: Value> = Option<A>;
}

impl<A: Value> Upcast for Option<A> {
    type Witness = OptionK;
    type Argument = A;

    fn upcast(self) -> Kind<OptionK, A> {
        Kind::new(self)
    }
}

// =============================================================================
// Functor Family
// =============================================================================

crate::invariant_from_functor!(OptionK);

impl Functor for OptionK {
    #[inline]
    fn map<A: Value, B: Value>(fa: Option<A>, function: impl Fn(A) -> B + 'static) -> Option<B> {
        fa.map(function)
    }
}

impl FunctorFilter for OptionK {
    #[inline]
    fn map_filter<A: Value, B: Value>(
        fa: Option<A>,
        function: impl Fn(A) -> Option<B> + 'static,
    ) -> Option<B> {
        fa.and_then(function)
    }
}

impl Applicative for OptionK {
    #[inline]
    fn pure<A: Value>(value: A) -> Option<A> {
        Some(value)
    }

    fn ap<A: Value, B: Value>(ff: Option<Func<A, B>>, fa: Option<A>) -> Option<B> {
        match (ff, fa) {
            (Some(function), Some(a)) => Some(function(a)),
            _ => None,
        }
    }

    fn map2<A: Value, B: Value, C: Value>(
        fa: Option<A>,
        fb: Option<B>,
        function: impl Fn(A, B) -> C + 'static,
    ) -> Option<C> {
        fa.zip(fb).map(|(a, b)| function(a, b))
    }

    fn map2_eval<A: Value, B: Value, C: Value>(
        fa: Option<A>,
        fb: Eval<Option<B>>,
        function: impl Fn(A, B) -> C + 'static,
    ) -> Eval<Option<C>> {
        match fa {
            None => Eval::now(None),
            Some(a) => fb.map(move |fb| fb.map(|b| function(a.clone(), b))),
        }
    }
}

impl Selective for OptionK {
    fn select<A: Value, B: Value>(fab: Option<Either<A, B>>, ff: Option<Func<A, B>>) -> Option<B> {
        match fab? {
            Either::Left(a) => ff.map(|function| function(a)),
            Either::Right(b) => Some(b),
        }
    }

    fn select_lazy<A: Value, B: Value>(
        fab: Option<Either<A, B>>,
        ff: Eval<Option<Func<A, B>>>,
    ) -> Option<B> {
        crate::typeclass::select_lazy_via_flat_map::<Self, A, B>(fab, ff)
    }

    crate::selective_loops_from_monad!();
}

impl Monad for OptionK {
    #[inline]
    fn flat_map<A: Value, B: Value>(
        fa: Option<A>,
        function: impl Fn(A) -> Option<B> + 'static,
    ) -> Option<B> {
        fa.and_then(function)
    }

    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> Option<Either<A, B>> + 'static,
    ) -> Option<B> {
        let mut current = initial;
        loop {
            match step(current)? {
                Either::Left(next) => current = next,
                Either::Right(done) => return Some(done),
            }
        }
    }
}

impl MonadFilter for OptionK {
    #[inline]
    fn empty<A: Value>() -> Option<A> {
        None
    }
}

// =============================================================================
// Errors
// =============================================================================

impl ApplicativeError<()> for OptionK {
    #[inline]
    fn raise_error<A: Value>((): ()) -> Option<A> {
        None
    }

    fn handle_error_with<A: Value>(
        fa: Option<A>,
        handler: impl Fn(()) -> Option<A> + 'static,
    ) -> Option<A> {
        fa.or_else(|| handler(()))
    }
}

impl MonadError<()> for OptionK {}

// =============================================================================
// Foldable / Traverse
// =============================================================================

impl Foldable for OptionK {
    fn fold_left<A: Value, B>(fa: Option<A>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        match fa {
            Some(a) => function(initial, a),
            None => initial,
        }
    }

    fn fold_right<A: Value, B: Value>(
        fa: Option<A>,
        initial: Eval<B>,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B> {
        match fa {
            Some(a) => function(a, initial),
            None => initial,
        }
    }

    #[inline]
    fn is_empty<A: Value>(fa: Option<A>) -> bool {
        fa.is_none()
    }

    #[inline]
    fn count<A: Value>(fa: Option<A>) -> usize {
        usize::from(fa.is_some())
    }
}

impl Traverse for OptionK {
    fn traverse<G: Applicative, A: Value, B: Value>(
        fa: Option<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Option<B>> {
        match fa {
            Some(a) => G::map::<B, Option<B>>(function(a), Some),
            None => G::pure::<Option<B>>(None),
        }
    }
}

impl TraverseFilter for OptionK {
    fn traverse_filter<G: Applicative, A: Value, B: Value>(
        fa: Option<A>,
        function: impl Fn(A) -> G::Of<Option<B>> + 'static,
    ) -> G::Of<Option<B>> {
        match fa {
            Some(a) => function(a),
            None => G::pure::<Option<B>>(None),
        }
    }
}

// =============================================================================
// Alternative Family
// =============================================================================

impl SemigroupK for OptionK {
    #[inline]
    fn combine_k<A: Value>(x: Option<A>, y: Option<A>) -> Option<A> {
        x.or(y)
    }

    fn combine_k_eval<A: Value>(x: Option<A>, y: Eval<Option<A>>) -> Eval<Option<A>> {
        if x.is_some() { Eval::now(x) } else { y }
    }
}

impl MonoidK for OptionK {
    #[inline]
    fn empty_k<A: Value>() -> Option<A> {
        None
    }
}

impl Alternative for OptionK {}

impl MonadCombine for OptionK {}

impl EquatableK for OptionK {
    fn eq_k<A: Value>(x: &Option<A>, y: &Option<A>, equal: impl Fn(&A, &A) -> bool) -> bool {
        match (x, y) {
            (Some(a), Some(b)) => equal(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
