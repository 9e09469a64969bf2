//! A vector with at least one element.
//!
//! `NonEmptyVec<A>` is a head plus a possibly empty tail. Having a
//! guaranteed element makes it a comonad (`extract` is the head) and lets
//! `reduce` run without a starting value.

use std::fmt;

use crate::control::{Either, Eval};
use crate::instances::VecK;
use crate::kind::{Kind, Upcast, Value, Witness};
use crate::typeclass::{
    Applicative, Bimonad, Comonad, EquatableK, Foldable, Func, Functor, Monad, Semigroup, SemigroupK,
    Traverse, slices_eq,
};

/// A vector that is never empty.
///
/// # Examples
///
/// ```rust
/// use kindred::data::NonEmptyVec;
///
/// let values = NonEmptyVec::new(3, vec![1, 2]);
/// assert_eq!(values.head(), &3);
/// assert_eq!(values.len(), 3);
/// assert_eq!(values.reduce(|a, b| a + b), 6);
/// assert_eq!(NonEmptyVec::from_vec(Vec::<i32>::new()), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmptyVec<A> {
    pub const fn new(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// A vector holding only `head`.
    pub const fn singleton(head: A) -> Self {
        Self::new(head, Vec::new())
    }

    /// Splits a `Vec`, returning `None` when it is empty.
    pub fn from_vec(values: Vec<A>) -> Option<Self> {
        let mut values = values.into_iter();
        let head = values.next()?;
        Some(Self::new(head, values.collect()))
    }

    pub const fn head(&self) -> &A {
        &self.head
    }

    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// The last element; the head when the tail is empty.
    pub fn last(&self) -> &A {
        self.tail.last().unwrap_or(&self.head)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &A> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    pub fn push(&mut self, value: A) {
        self.tail.push(value);
    }

    pub fn into_vec(self) -> Vec<A> {
        let mut values = Vec::with_capacity(self.tail.len() + 1);
        values.push(self.head);
        values.extend(self.tail);
        values
    }

    /// Transforms every element.
    pub fn map<B>(self, mut function: impl FnMut(A) -> B) -> NonEmptyVec<B> {
        let head = function(self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(function).collect())
    }

    /// Folds the elements from the left, starting from the head.
    pub fn reduce(self, function: impl FnMut(A, A) -> A) -> A {
        self.tail.into_iter().fold(self.head, function)
    }

    /// Appends all elements of `other`.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<A: fmt::Debug> fmt::Debug for NonEmptyVec<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Concatenation; the error type of choice for accumulating `Validated`.
impl<A> Semigroup for NonEmptyVec<A> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<A> From<NonEmptyVec<A>> for Vec<A> {
    fn from(values: NonEmptyVec<A>) -> Self {
        values.into_vec()
    }
}

impl<A> IntoIterator for NonEmptyVec<A> {
    type Item = A;
    type IntoIter = std::iter::Chain<std::iter::Once<A>, std::vec::IntoIter<A>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

fn rebuild<A>(values: Vec<A>) -> NonEmptyVec<A> {
    NonEmptyVec::from_vec(values)
        .unwrap_or_else(|| unreachable!("an operation on a non-empty vector produced no elements"))
}

/// Witness for [`NonEmptyVec`].
#[derive(Debug)]
pub enum NonEmptyVecK {}

impl Witness for NonEmptyVecK {
    type Of<A: Value> = NonEmptyVec<A>;
}

impl<A: Value> Upcast for NonEmptyVec<A> {
    type Witness = NonEmptyVecK;
    type Argument = A;

    fn upcast(self) -> Kind<NonEmptyVecK, A> {
        Kind::new(self)
    }
}

// =============================================================================
// Functor Family
// =============================================================================

crate::invariant_from_functor!(NonEmptyVecK);

impl Functor for NonEmptyVecK {
    fn map<A: Value, B: Value>(
        fa: NonEmptyVec<A>,
        function: impl Fn(A) -> B + 'static,
    ) -> NonEmptyVec<B> {
        fa.map(function)
    }
}

impl Applicative for NonEmptyVecK {
    #[inline]
    fn pure<A: Value>(value: A) -> NonEmptyVec<A> {
        NonEmptyVec::singleton(value)
    }

    fn ap<A: Value, B: Value>(ff: NonEmptyVec<Func<A, B>>, fa: NonEmptyVec<A>) -> NonEmptyVec<B> {
        rebuild(VecK::ap::<A, B>(ff.into_vec(), fa.into_vec()))
    }
}

crate::selective_from_monad!(NonEmptyVecK);

impl Monad for NonEmptyVecK {
    fn flat_map<A: Value, B: Value>(
        fa: NonEmptyVec<A>,
        function: impl Fn(A) -> NonEmptyVec<B> + 'static,
    ) -> NonEmptyVec<B> {
        let mut result = function(fa.head);
        for element in fa.tail {
            result = result.concat(function(element));
        }
        result
    }

    /// The same depth-first loop as `VecK::tail_rec_m`. Every branch ends
    /// in at least one `Right`, so the result is non-empty.
    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> NonEmptyVec<Either<A, B>> + 'static,
    ) -> NonEmptyVec<B> {
        rebuild(VecK::tail_rec_m::<A, B>(initial, move |a| step(a).into_vec()))
    }
}

// =============================================================================
// Comonad
// =============================================================================

impl Comonad for NonEmptyVecK {
    #[inline]
    fn extract<A: Value>(wa: NonEmptyVec<A>) -> A {
        wa.head
    }

    /// Applies `function` to every suffix: the whole vector, then the
    /// vector without its head, and so on.
    fn coflat_map<A: Value, B: Value>(
        wa: NonEmptyVec<A>,
        function: impl Fn(NonEmptyVec<A>) -> B + 'static,
    ) -> NonEmptyVec<B> {
        let values = wa.into_vec();
        let suffixes = (0..values.len()).filter_map(|start| NonEmptyVec::from_vec(values[start..].to_vec()));
        rebuild(suffixes.map(function).collect())
    }
}

impl Bimonad for NonEmptyVecK {}

// =============================================================================
// Foldable / Traverse
// =============================================================================

impl Foldable for NonEmptyVecK {
    fn fold_left<A: Value, B>(fa: NonEmptyVec<A>, initial: B, function: impl FnMut(B, A) -> B) -> B {
        fa.into_iter().fold(initial, function)
    }

    fn fold_right<A: Value, B: Value>(
        fa: NonEmptyVec<A>,
        initial: Eval<B>,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B> {
        VecK::fold_right::<A, B>(fa.into_vec(), initial, function)
    }

    #[inline]
    fn count<A: Value>(fa: NonEmptyVec<A>) -> usize {
        fa.len()
    }
}

impl Traverse for NonEmptyVecK {
    fn traverse<G: Applicative, A: Value, B: Value>(
        fa: NonEmptyVec<A>,
        function: impl Fn(A) -> G::Of<B> + 'static,
    ) -> G::Of<NonEmptyVec<B>> {
        G::map::<Vec<B>, NonEmptyVec<B>>(VecK::traverse::<G, A, B>(fa.into_vec(), function), rebuild)
    }
}

impl SemigroupK for NonEmptyVecK {
    fn combine_k<A: Value>(x: NonEmptyVec<A>, y: NonEmptyVec<A>) -> NonEmptyVec<A> {
        x.concat(y)
    }
}

impl EquatableK for NonEmptyVecK {
    fn eq_k<A: Value>(
        x: &NonEmptyVec<A>,
        y: &NonEmptyVec<A>,
        equal: impl Fn(&A, &A) -> bool,
    ) -> bool {
        equal(&x.head, &y.head) && slices_eq(&x.tail, &y.tail, equal)
    }
}
