//! Invariant functors.
//!
//! An invariant functor can be mapped given functions in both directions.
//! Every covariant [`Functor`](super::Functor) and every
//! [`Contravariant`](super::Contravariant) functor is invariant by ignoring
//! one of the two functions; [`invariant_from_functor!`] and
//! [`invariant_from_contravariant!`] write those instances.
//!
//! # Laws
//!
//! ```text
//! imap(fa, |a| a, |a| a) == fa
//! imap(imap(fa, f1, g1), f2, g2) == imap(fa, |a| f2(f1(a)), |c| g1(g2(c)))
//! ```

use crate::kind::{Value, Witness};

/// A type constructor that can be mapped with an isomorphism.
pub trait Invariant: Witness {
    /// Transforms the contents using `forward`, with `backward` available for
    /// positions where values flow in.
    fn imap<A: Value, B: Value>(
        fa: Self::Of<A>,
        forward: impl Fn(A) -> B + 'static,
        backward: impl Fn(B) -> A + 'static,
    ) -> Self::Of<B>;
}

/// Implements [`Invariant`] for a witness by delegating to its `Functor::map`.
///
/// ```rust,ignore
/// invariant_from_functor!(OptionK);
/// invariant_from_functor!(impl[E: Value] ResultK<E>);
/// ```
#[macro_export]
macro_rules! invariant_from_functor {
    (impl[$($generics:tt)*] $witness:ty) => {
        impl<$($generics)*> $crate::typeclass::Invariant for $witness {
            fn imap<A: $crate::kind::Value, B: $crate::kind::Value>(
                fa: Self::Of<A>,
                forward: impl Fn(A) -> B + 'static,
                _backward: impl Fn(B) -> A + 'static,
            ) -> Self::Of<B> {
                <Self as $crate::typeclass::Functor>::map::<A, B>(fa, forward)
            }
        }
    };
    ($witness:ty) => {
        $crate::invariant_from_functor!(impl[] $witness);
    };
}

/// Implements [`Invariant`] for a witness by delegating to its
/// `Contravariant::contramap`.
#[macro_export]
macro_rules! invariant_from_contravariant {
    (impl[$($generics:tt)*] $witness:ty) => {
        impl<$($generics)*> $crate::typeclass::Invariant for $witness {
            fn imap<A: $crate::kind::Value, B: $crate::kind::Value>(
                fa: Self::Of<A>,
                _forward: impl Fn(A) -> B + 'static,
                backward: impl Fn(B) -> A + 'static,
            ) -> Self::Of<B> {
                <Self as $crate::typeclass::Contravariant>::contramap::<A, B>(fa, backward)
            }
        }
    };
    ($witness:ty) => {
        $crate::invariant_from_contravariant!(impl[] $witness);
    };
}
