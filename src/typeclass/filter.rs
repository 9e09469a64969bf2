//! Filtering type classes.
//!
//! - [`FunctorFilter`]: map and drop in one pass
//! - [`MonadFilter`]: a monad with an empty value that absorbs `flat_map`
//! - [`TraverseFilter`]: traverse with an effectful keep-or-drop decision
//!
//! # Laws
//!
//! ```text
//! map_filter(fa, |a| Some(a)) == fa
//! map_filter(map_filter(fa, f), g) == map_filter(fa, |a| f(a).and_then(g))
//! flat_map(empty(), f) == empty()
//! ```

use std::rc::Rc;

use super::{Applicative, Functor, Monad, Traverse};
use crate::kind::Value;

/// A functor that can drop values while mapping.
pub trait FunctorFilter: Functor {
    /// Maps each value, dropping those mapped to `None`.
    fn map_filter<A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(A) -> Option<B> + 'static,
    ) -> Self::Of<B>;

    /// Keeps the values satisfying `predicate`.
    fn filter<A: Value>(fa: Self::Of<A>, predicate: impl Fn(&A) -> bool + 'static) -> Self::Of<A> {
        Self::map_filter::<A, A>(fa, move |a| predicate(&a).then_some(a))
    }

    /// Drops the values satisfying `predicate`.
    fn filter_not<A: Value>(
        fa: Self::Of<A>,
        predicate: impl Fn(&A) -> bool + 'static,
    ) -> Self::Of<A> {
        Self::filter::<A>(fa, move |a| !predicate(a))
    }

    /// Drops the `None`s and unwraps the rest.
    fn flatten_option<A: Value>(fa: Self::Of<Option<A>>) -> Self::Of<A> {
        Self::map_filter::<Option<A>, A>(fa, |option| option)
    }

    /// Keeps and maps the values `partial` is defined for.
    ///
    /// Equivalent to `map_filter`; the name reads better with a `match`
    /// that has a catch-all `None` arm.
    fn collect<A: Value, B: Value>(
        fa: Self::Of<A>,
        partial: impl Fn(A) -> Option<B> + 'static,
    ) -> Self::Of<B> {
        Self::map_filter::<A, B>(fa, partial)
    }
}

/// A monad with a zero.
pub trait MonadFilter: Monad + FunctorFilter {
    /// The empty effect; `flat_map` over it yields it again.
    fn empty<A: Value>() -> Self::Of<A>;

    /// Continues with `()` when `condition` holds, otherwise stops.
    fn continue_if(condition: bool) -> Self::Of<()> {
        if condition { Self::pure(()) } else { Self::empty::<()>() }
    }
}

/// `map_filter` expressed through `flat_map` and `empty`.
pub fn map_filter_via_flat_map<F: MonadFilter, A: Value, B: Value>(
    fa: F::Of<A>,
    function: impl Fn(A) -> Option<B> + 'static,
) -> F::Of<B> {
    F::flat_map::<A, B>(fa, move |a| match function(a) {
        Some(b) => F::pure(b),
        None => F::empty::<B>(),
    })
}

/// A traversable structure that can drop values during traversal.
pub trait TraverseFilter: Traverse + FunctorFilter {
    /// Traverses with an effectful keep-or-drop decision per value.
    fn traverse_filter<G: Applicative, A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(A) -> G::Of<Option<B>> + 'static,
    ) -> G::Of<Self::Of<B>> {
        G::map::<Self::Of<Option<B>>, Self::Of<B>>(
            Self::traverse::<G, A, Option<B>>(fa, function),
            Self::flatten_option::<B>,
        )
    }

    /// Filters with an effectful predicate.
    ///
    /// ```rust
    /// use kindred::instances::VecK;
    /// use kindred::typeclass::TraverseFilter;
    ///
    /// // Every subset of [1, 2].
    /// let subsets = VecK::filter_a::<VecK, i32>(vec![1, 2], |_| vec![true, false]);
    /// assert_eq!(subsets, vec![vec![1, 2], vec![1], vec![2], vec![]]);
    /// ```
    fn filter_a<G: Applicative, A: Value>(
        fa: Self::Of<A>,
        predicate: impl Fn(&A) -> G::Of<bool> + 'static,
    ) -> G::Of<Self::Of<A>> {
        let predicate = Rc::new(predicate);
        Self::traverse_filter::<G, A, A>(fa, move |a| {
            let decision = predicate(&a);
            G::map::<bool, Option<A>>(decision, move |keep| keep.then(|| a.clone()))
        })
    }

    /// Sequences effects of optional values, dropping the `None`s.
    fn sequence_filter<G: Applicative, A: Value>(
        fga: Self::Of<G::Of<Option<A>>>,
    ) -> G::Of<Self::Of<A>> {
        Self::traverse_filter::<G, G::Of<Option<A>>, A>(fga, |ga| ga)
    }
}
