//! Typeclass operations on erased boxes.
//!
//! Each helper fixes the box, runs the witness's instance and erases the
//! result again. The only possible failure is the cast itself.
//!
//! ```rust
//! use kindred::instances::OptionK;
//! use kindred::kind::{Kind, Upcast};
//!
//! let boxed: Kind<OptionK, i32> = Some(20).upcast();
//! let doubled = boxed.map(|n| n * 2).and_then(Kind::fix);
//! assert_eq!(doubled, Ok(Some(40)));
//! ```

use super::boxed::{Kind, Kind2};
use super::error::KindCastError;
use super::witness::Value;
use crate::typeclass::{Applicative, Bifunctor, Comonad, Foldable, Func, Functor, Monad, Traverse};

impl<F: Functor, A: Value> Kind<F, A> {
    /// [`Functor::map`] on the boxed value.
    ///
    /// # Errors
    ///
    /// Returns [`KindCastError`] when the box does not hold `F<A>`.
    pub fn map<B: Value>(
        self,
        function: impl Fn(A) -> B + 'static,
    ) -> Result<Kind<F, B>, KindCastError> {
        let fa = self.fix()?;
        Ok(Kind::new(F::map::<A, B>(fa, function)))
    }
}

impl<F: Applicative, A: Value> Kind<F, A> {
    /// [`Applicative::ap`] with the functions in `ff`.
    ///
    /// # Errors
    ///
    /// Returns [`KindCastError`] when either box does not hold what its
    /// label says.
    pub fn ap<B: Value>(self, ff: Kind<F, Func<A, B>>) -> Result<Kind<F, B>, KindCastError> {
        let functions = ff.fix()?;
        let fa = self.fix()?;
        Ok(Kind::new(F::ap::<A, B>(functions, fa)))
    }
}

impl<F: Monad, A: Value> Kind<F, A> {
    /// [`Monad::flat_map`] with a continuation over concrete values.
    ///
    /// # Errors
    ///
    /// Returns [`KindCastError`] when the box does not hold `F<A>`.
    pub fn flat_map<B: Value>(
        self,
        function: impl Fn(A) -> F::Of<B> + 'static,
    ) -> Result<Kind<F, B>, KindCastError> {
        let fa = self.fix()?;
        Ok(Kind::new(F::flat_map::<A, B>(fa, function)))
    }
}

impl<F: Foldable, A: Value> Kind<F, A> {
    /// [`Foldable::fold_left`] over the boxed value.
    ///
    /// # Errors
    ///
    /// Returns [`KindCastError`] when the box does not hold `F<A>`.
    pub fn fold_left<B>(
        self,
        initial: B,
        function: impl FnMut(B, A) -> B,
    ) -> Result<B, KindCastError> {
        let fa = self.fix()?;
        Ok(F::fold_left::<A, B>(fa, initial, function))
    }
}

impl<F: Traverse, A: Value> Kind<F, A> {
    /// [`Traverse::traverse`] into the applicative `G`; the inner structure
    /// stays boxed.
    ///
    /// # Errors
    ///
    /// Returns [`KindCastError`] when the box does not hold `F<A>`.
    pub fn traverse<G: Applicative, B: Value>(
        self,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> Result<G::Of<F::Of<B>>, KindCastError> {
        let fa = self.fix()?;
        Ok(F::traverse::<G, A, B>(fa, function))
    }
}

impl<F: Comonad, A: Value> Kind<F, A> {
    /// [`Comonad::extract`] from the boxed value.
    ///
    /// # Errors
    ///
    /// Returns [`KindCastError`] when the box does not hold `F<A>`.
    pub fn extract(self) -> Result<A, KindCastError> {
        self.fix().map(F::extract::<A>)
    }

    /// [`Comonad::coflat_map`] on the boxed value.
    ///
    /// # Errors
    ///
    /// Returns [`KindCastError`] when the box does not hold `F<A>`.
    pub fn coflat_map<B: Value>(
        self,
        function: impl Fn(F::Of<A>) -> B + 'static,
    ) -> Result<Kind<F, B>, KindCastError> {
        let wa = self.fix()?;
        Ok(Kind::new(F::coflat_map::<A, B>(wa, function)))
    }
}

impl<F: Bifunctor, A: Value, B: Value> Kind2<F, A, B> {
    /// [`Bifunctor::bimap`] on the boxed value.
    ///
    /// # Errors
    ///
    /// Returns [`KindCastError`] when the box does not hold `F<A, B>`.
    pub fn bimap<C: Value, D: Value>(
        self,
        first_function: impl Fn(A) -> C + 'static,
        second_function: impl Fn(B) -> D + 'static,
    ) -> Result<Kind2<F, C, D>, KindCastError> {
        let fab = self.fix()?;
        Ok(Kind2::new(F::bimap::<A, B, C, D>(fab, first_function, second_function)))
    }
}
