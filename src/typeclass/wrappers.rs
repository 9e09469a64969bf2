//! Newtype wrappers selecting a particular `Semigroup` / `Monoid`.
//!
//! The same underlying type often combines in several lawful ways: numbers
//! add or multiply, ordered values keep the larger or the smaller. Each
//! wrapper picks one.
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//! - [`Max`]: the larger value, identity [`Bounded::MIN`]
//! - [`Min`]: the smaller value, identity [`Bounded::MAX`]
//! - [`First`]: the leftmost present value
//! - [`Last`]: the rightmost present value

macro_rules! define_wrapper {
    ($(#[$meta:meta])* $name:ident $(, $derive:ident)*) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash $(, $derive)*)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Unwraps the value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Borrows the wrapped value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

define_wrapper! {
    /// Combines by addition.
    ///
    /// ```rust
    /// use kindred::typeclass::{Monoid, Semigroup, Sum};
    ///
    /// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
    /// assert_eq!(Sum::<i32>::empty(), Sum(0));
    /// ```
    Sum, Default
}

define_wrapper! {
    /// Combines by multiplication.
    ///
    /// ```rust
    /// use kindred::typeclass::{Monoid, Product, Semigroup};
    ///
    /// assert_eq!(Product(3).combine(Product(5)), Product(15));
    /// assert_eq!(Product::<i64>::empty(), Product(1));
    /// ```
    Product
}

define_wrapper! {
    /// Keeps the larger value.
    Max
}

define_wrapper! {
    /// Keeps the smaller value.
    Min
}

define_wrapper! {
    /// Keeps the leftmost `Some`.
    ///
    /// ```rust
    /// use kindred::typeclass::{First, Monoid};
    ///
    /// let firsts = vec![First(None), First(Some(2)), First(Some(3))];
    /// assert_eq!(First::combine_all(firsts), First(Some(2)));
    /// ```
    First, Default
}

define_wrapper! {
    /// Keeps the rightmost `Some`.
    Last, Default
}

/// Types with a least and a greatest value.
pub trait Bounded {
    /// The least value.
    const MIN: Self;
    /// The greatest value.
    const MAX: Self;
}

macro_rules! bounded_from_consts {
    ($($type:ty),* $(,)?) => {
        $(
            impl Bounded for $type {
                const MIN: Self = <$type>::MIN;
                const MAX: Self = <$type>::MAX;
            }
        )*
    };
}

bounded_from_consts!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN: Self = false;
    const MAX: Self = true;
}

impl Bounded for () {
    const MIN: Self = ();
    const MAX: Self = ();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn wrappers_expose_their_value() {
        assert_eq!(Sum::new(4).into_inner(), 4);
        assert_eq!(*Max::from('z').as_inner(), 'z');
        assert_eq!(Last::new(Some(1)).into_inner(), Some(1));
    }

    #[rstest]
    fn bounded_matches_primitive_limits() {
        assert_eq!(<u8 as Bounded>::MAX, 255);
        assert_eq!(<i16 as Bounded>::MIN, i16::MIN);
        assert!(!<bool as Bounded>::MIN);
    }
}
