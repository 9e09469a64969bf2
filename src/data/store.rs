//! Store comonad - a lookup function focused at a position.
//!
//! A `Store<S, A>` is a function `S -> A` together with the position `S`
//! it currently looks at. `extract` reads at the position; `coflat_map`
//! builds a new store whose value at each position is computed from the
//! store refocused there. This is the shape of cellular automata and
//! spreadsheet-like recomputation.
//!
//! ```rust
//! use kindred::data::{Store, StoreK};
//! use kindred::typeclass::{Comonad, ComonadStore};
//!
//! type Grid = StoreK<i32>;
//!
//! let squares = Store::new(|n: i32| n * n, 3);
//! assert_eq!(Grid::extract(squares.clone()), 9);
//! assert_eq!(Grid::peek(5, squares.clone()), 25);
//!
//! let differences = Grid::coflat_map(squares, |store: Store<i32, i32>| {
//!     store.peek(store.position() + 1) - store.extract()
//! });
//! assert_eq!(differences.extract(), 7);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::kind::{Value, Witness};
use crate::typeclass::{Comonad, ComonadStore, Functor};

/// A lookup `S -> A` focused at `position`.
pub struct Store<S, A> {
    lookup: Rc<dyn Fn(S) -> A>,
    position: S,
}

impl<S: Clone + 'static, A: 'static> Store<S, A> {
    pub fn new(lookup: impl Fn(S) -> A + 'static, position: S) -> Self {
        Self {
            lookup: Rc::new(lookup),
            position,
        }
    }

    pub const fn position(&self) -> &S {
        &self.position
    }

    /// The value at `position`.
    pub fn peek(&self, position: S) -> A {
        (self.lookup)(position)
    }

    /// The value in focus.
    pub fn extract(&self) -> A {
        self.peek(self.position.clone())
    }

    /// The same lookup focused elsewhere.
    #[must_use]
    pub fn seek(&self, position: S) -> Self {
        Self {
            lookup: Rc::clone(&self.lookup),
            position,
        }
    }

    pub fn map<B: 'static>(self, function: impl Fn(A) -> B + 'static) -> Store<S, B> {
        let lookup = self.lookup;
        Store::new(move |s| function(lookup(s)), self.position)
    }
}

impl<S: Clone, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            lookup: Rc::clone(&self.lookup),
            position: self.position.clone(),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Store")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Witness for `Store<S, _>`.
#[derive(Debug)]
pub struct StoreK<S>(Infallible, PhantomData<fn() -> S>);

impl<S: Value> Witness for StoreK<S> {
    type Of<A: Value> = Store<S, A>;
}

crate::invariant_from_functor!(impl[S: Value] StoreK<S>);

impl<S: Value> Functor for StoreK<S> {
    fn map<A: Value, B: Value>(fa: Store<S, A>, function: impl Fn(A) -> B + 'static) -> Store<S, B> {
        fa.map(function)
    }
}

impl<S: Value> Comonad for StoreK<S> {
    fn extract<A: Value>(wa: Store<S, A>) -> A {
        Store::extract(&wa)
    }

    fn coflat_map<A: Value, B: Value>(
        wa: Store<S, A>,
        function: impl Fn(Store<S, A>) -> B + 'static,
    ) -> Store<S, B> {
        let focus = wa.position.clone();
        Store::new(move |s| function(wa.seek(s)), focus)
    }
}

impl<S: Value> ComonadStore<S> for StoreK<S> {
    fn position<A: Value>(wa: Store<S, A>) -> S {
        wa.position
    }

    fn peek<A: Value>(position: S, wa: Store<S, A>) -> A {
        Store::peek(&wa, position)
    }

    fn seek<A: Value>(position: S, wa: Store<S, A>) -> Store<S, A> {
        Store::seek(&wa, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::VecK;
    use rstest::rstest;

    type Line = StoreK<i32>;

    fn identity_at(position: i32) -> Store<i32, i32> {
        Store::new(|s| s, position)
    }

    #[rstest]
    fn seeks_and_peeks_move_relative_to_the_focus() {
        assert_eq!(Line::peeks(|s| s - 1, identity_at(10)), 9);
        assert_eq!(Line::seeks(|s| s * 2, identity_at(10)).extract(), 20);
        assert_eq!(Line::position(Line::seek(4, identity_at(10))), 4);
    }

    #[rstest]
    fn experiment_looks_up_every_neighbour() {
        let neighbours = Line::experiment::<VecK, i32>(|s| vec![s - 1, s, s + 1], identity_at(0));
        assert_eq!(neighbours, vec![-1, 0, 1]);
    }

    #[rstest]
    fn duplicate_then_extract_is_identity() {
        let store = Store::new(|s: i32| s * 3, 2);
        let nested = Line::duplicate(store.clone());
        assert_eq!(Line::extract(nested).extract(), store.extract());
        assert_eq!(format!("{store:?}"), "Store { position: 2, .. }");
    }
}
