//! The constant functor.
//!
//! `Const<C, A>` stores a `C` and only pretends to contain an `A`. Mapping
//! changes the phantom type and nothing else, which makes it both a functor
//! and a contravariant functor. With a monoidal `C` it is an applicative
//! that accumulates `C`; traversing with it is how `fold_map` falls out of
//! `traverse`:
//!
//! ```rust
//! use kindred::data::{Const, ConstK};
//! use kindred::instances::VecK;
//! use kindred::typeclass::Traverse;
//!
//! type Total = ConstK<String>;
//!
//! let joined = VecK::traverse::<Total, i32, ()>(vec![1, 2, 3], |n| Const::new(n.to_string()));
//! assert_eq!(joined.into_inner(), "123");
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::control::Eval;
use crate::kind::{Value, Witness};
use crate::typeclass::{
    Applicative, Contravariant, EquatableK, Foldable, Func, Functor, Monoid, Traverse,
};

/// A `C` tagged with a phantom `A`.
pub struct Const<C, A> {
    value: C,
    marker: PhantomData<fn() -> A>,
}

impl<C, A> Const<C, A> {
    #[inline]
    pub const fn new(value: C) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn into_inner(self) -> C {
        self.value
    }

    #[inline]
    pub const fn as_inner(&self) -> &C {
        &self.value
    }

    /// Changes the phantom type.
    #[inline]
    pub fn retag<B>(self) -> Const<C, B> {
        Const::new(self.value)
    }
}

impl<C: Clone, A> Clone for Const<C, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<C: PartialEq, A> PartialEq for Const<C, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C: Eq, A> Eq for Const<C, A> {}

impl<C: fmt::Debug, A> fmt::Debug for Const<C, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

/// Witness for `Const<C, _>`.
#[derive(Debug)]
pub struct ConstK<C>(Infallible, PhantomData<fn() -> C>);

impl<C: Value> Witness for ConstK<C> {
    type Of<A: Value> = Const<C, A>;
}

crate::invariant_from_functor!(impl[C: Value] ConstK<C>);

impl<C: Value> Functor for ConstK<C> {
    #[inline]
    fn map<A: Value, B: Value>(fa: Const<C, A>, _function: impl Fn(A) -> B + 'static) -> Const<C, B> {
        fa.retag()
    }
}

impl<C: Value> Contravariant for ConstK<C> {
    #[inline]
    fn contramap<A: Value, B: Value>(
        fa: Const<C, A>,
        _function: impl Fn(B) -> A + 'static,
    ) -> Const<C, B> {
        fa.retag()
    }
}

impl<C: Value + Monoid> Applicative for ConstK<C> {
    #[inline]
    fn pure<A: Value>(_value: A) -> Const<C, A> {
        Const::new(C::empty())
    }

    fn ap<A: Value, B: Value>(ff: Const<C, Func<A, B>>, fa: Const<C, A>) -> Const<C, B> {
        Const::new(ff.value.combine(fa.value))
    }
}

impl<C: Value> Foldable for ConstK<C> {
    fn fold_left<A: Value, B>(_fa: Const<C, A>, initial: B, _function: impl FnMut(B, A) -> B) -> B {
        initial
    }

    fn fold_right<A: Value, B: Value>(
        _fa: Const<C, A>,
        initial: Eval<B>,
        _function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B> {
        initial
    }
}

impl<C: Value> Traverse for ConstK<C> {
    fn traverse<G: Applicative, A: Value, B: Value>(
        fa: Const<C, A>,
        _function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<Const<C, B>> {
        G::pure::<Const<C, B>>(fa.retag())
    }
}

impl<C: Value + PartialEq> EquatableK for ConstK<C> {
    fn eq_k<A: Value>(x: &Const<C, A>, y: &Const<C, A>, _equal: impl Fn(&A, &A) -> bool) -> bool {
        x.value == y.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::OptionK;
    use crate::typeclass::Sum;
    use rstest::rstest;

    type Counter = ConstK<Sum<i32>>;

    #[rstest]
    fn map_and_contramap_only_retag() {
        let tagged: Const<&str, usize> = Const::new("kept");
        let mapped = ConstK::<&str>::map(tagged.clone(), |n: usize| n.to_string());
        assert_eq!(mapped.into_inner(), "kept");
        let narrowed = ConstK::<&str>::contramap(tagged, |s: String| s.len());
        assert_eq!(narrowed.as_inner(), &"kept");
    }

    #[rstest]
    fn ap_combines_the_constants() {
        let left: Const<Sum<i32>, Func<u8, u8>> = Const::new(Sum::new(2));
        let right: Const<Sum<i32>, u8> = Const::new(Sum::new(3));
        assert_eq!(Counter::ap(left, right).into_inner(), Sum::new(5));
        assert_eq!(Counter::pure::<u8>(1).into_inner(), Sum::new(0));
    }

    #[rstest]
    fn traverse_never_calls_the_function() {
        let constant: Const<Sum<i32>, i32> = Const::new(Sum::new(1));
        let result = Counter::traverse::<OptionK, i32, i32>(constant, |_| None);
        assert_eq!(result.map(Const::into_inner), Some(Sum::new(1)));
    }
}
