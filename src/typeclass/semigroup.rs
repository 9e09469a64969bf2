//! Semigroup type class - values with an associative combine.
//!
//! `Semigroup` works on plain values, not on type constructors; it is what
//! `Validated` uses to merge errors and what `Writer` uses to merge logs.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Semigroup;
//!
//! assert_eq!(String::from("e1").combine(String::from("e2")), "e1e2");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{First, Last, Max, Min, Product, Sum};

/// A type with an associative binary operation.
pub trait Semigroup: Sized {
    /// Combines two values. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines borrowed values, cloning them first.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times, or `None` for zero.
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), Some("ababab".to_string()));
    /// assert_eq!(String::from("ab").combine_n(0), None);
    /// ```
    fn combine_n(self, count: usize) -> Option<Self>
    where
        Self: Clone,
    {
        if count == 0 {
            return None;
        }
        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        Some(result)
    }

    /// Combines every item left to right; `None` for an empty input.
    fn reduce_all<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is neutral; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// The first error wins.
impl<T: Semigroup, E> Semigroup for Result<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(left.combine(right)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl<A> Semigroup for First<Option<A>> {
    fn combine(self, other: Self) -> Self {
        if self.0.is_some() { self } else { other }
    }
}

impl<A> Semigroup for Last<Option<A>> {
    fn combine(self, other: Self) -> Self {
        if other.0.is_some() { other } else { self }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}
