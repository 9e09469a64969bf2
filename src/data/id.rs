//! The identity type constructor.
//!
//! `Id<A>` holds exactly one `A` and adds no effect. It is both a monad and
//! a comonad, it pairs with itself, and it is the base case that transformers
//! such as [`StateT`](super::StateT) reduce to.

use std::fmt;

use crate::control::{Either, Eval};
use crate::kind::{Kind, Upcast, Value, Witness};
use crate::typeclass::{
    Applicative, Bimonad, Comonad, EquatableK, Foldable, Func, Functor, Monad, Pairing, Selective,
    Traverse,
};

/// A value with no surrounding effect.
///
/// # Examples
///
/// ```rust
/// use kindred::data::{Id, IdK};
/// use kindred::typeclass::{Comonad, Monad};
///
/// let next = IdK::flat_map(Id(20), |n| Id(n + 1));
/// assert_eq!(IdK::extract(next), 21);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Id<A>(pub A);

impl<A> Id<A> {
    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A: fmt::Debug> fmt::Debug for Id<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Id").field(&self.0).finish()
    }
}

impl<A: fmt::Display> fmt::Display for Id<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Id({})", self.0)
    }
}

impl<A> From<A> for Id<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

/// Witness for [`Id`].
#[derive(Debug)]
pub enum IdK {}

impl Witness for IdK {
    type Of<A: Value> = Id<A>;
}

impl<A: Value> Upcast for Id<A> {
    type Witness = IdK;
    type Argument = A;

    fn upcast(self) -> Kind<IdK, A> {
        Kind::new(self)
    }
}

crate::invariant_from_functor!(IdK);

impl Functor for IdK {
    #[inline]
    fn map<A: Value, B: Value>(fa: Id<A>, function: impl Fn(A) -> B + 'static) -> Id<B> {
        Id(function(fa.0))
    }
}

impl Applicative for IdK {
    #[inline]
    fn pure<A: Value>(value: A) -> Id<A> {
        Id(value)
    }

    #[inline]
    fn ap<A: Value, B: Value>(ff: Id<Func<A, B>>, fa: Id<A>) -> Id<B> {
        Id((ff.0)(fa.0))
    }
}

impl Selective for IdK {
    fn select<A: Value, B: Value>(fab: Id<Either<A, B>>, ff: Id<Func<A, B>>) -> Id<B> {
        Id(match fab.0 {
            Either::Left(a) => (ff.0)(a),
            Either::Right(b) => b,
        })
    }

    fn select_lazy<A: Value, B: Value>(fab: Id<Either<A, B>>, ff: Eval<Id<Func<A, B>>>) -> Id<B> {
        Id(match fab.0 {
            Either::Left(a) => (ff.value().0)(a),
            Either::Right(b) => b,
        })
    }

    crate::selective_loops_from_monad!();
}

impl Monad for IdK {
    #[inline]
    fn flat_map<A: Value, B: Value>(fa: Id<A>, function: impl Fn(A) -> Id<B> + 'static) -> Id<B> {
        function(fa.0)
    }

    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> Id<Either<A, B>> + 'static,
    ) -> Id<B> {
        let mut current = initial;
        loop {
            match step(current).0 {
                Either::Left(next) => current = next,
                Either::Right(done) => return Id(done),
            }
        }
    }
}

impl Comonad for IdK {
    #[inline]
    fn extract<A: Value>(wa: Id<A>) -> A {
        wa.0
    }

    fn coflat_map<A: Value, B: Value>(wa: Id<A>, function: impl Fn(Id<A>) -> B + 'static) -> Id<B> {
        Id(function(wa))
    }
}

impl Bimonad for IdK {}

impl Foldable for IdK {
    fn fold_left<A: Value, B>(fa: Id<A>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        function(initial, fa.0)
    }

    fn fold_right<A: Value, B: Value>(
        fa: Id<A>,
        initial: Eval<B>,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B> {
        function(fa.0, initial)
    }
}

impl Traverse for IdK {
    fn traverse<G: Applicative, A: Value, B: Value>(
        fa: Id<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Id<B>> {
        G::map::<B, Id<B>>(function(fa.0), Id)
    }
}

impl EquatableK for IdK {
    fn eq_k<A: Value>(x: &Id<A>, y: &Id<A>, equal: impl Fn(&A, &A) -> bool) -> bool {
        equal(&x.0, &y.0)
    }
}

impl Pairing<IdK> for IdK {
    fn zap<A: Value, B: Value, C>(fa: Id<A>, gb: Id<B>, function: impl FnOnce(A, B) -> C) -> C {
        function(fa.0, gb.0)
    }
}
