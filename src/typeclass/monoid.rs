//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Monoid, Sum};
//!
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(String::combine_all(Vec::<String>::new()), "");
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, First, Last, Max, Min, Product, Sum};

/// A semigroup with a neutral element.
pub trait Monoid: Semigroup {
    /// The neutral element.
    fn empty() -> Self;

    /// Combines every item left to right, starting from `empty`.
    fn combine_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().fold(Self::empty(), Self::combine)
    }

    /// Whether this value equals `empty`.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($one:expr => $($type:ty),*) => {
        $(
            impl Monoid for Product<$type> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_monoid!(1.0 => f32, f64);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX)
    }
}

impl<A> Monoid for First<Option<A>> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<Option<A>> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}
