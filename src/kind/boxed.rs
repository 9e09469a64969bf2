//! Erased kind boxes and the checked `fix` downcast.
//!
//! A [`Kind<F, A>`] is an `F<A>` whose concrete type has been forgotten. It is
//! useful where values of several constructors travel through one channel
//! (heterogeneous collections, plugin boundaries, interpreters). Getting the
//! concrete value back goes through [`Kind::fix`], which checks the label
//! and reports a [`KindCastError`] instead of panicking.
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::OptionK;
//! use kindred::kind::{Kind, KindCastError, Upcast};
//!
//! let boxed: Kind<OptionK, i32> = Some(5).upcast();
//! assert_eq!(boxed.fix(), Ok(Some(5)));
//!
//! // A box relabelled with the wrong witness is rejected at `fix`.
//! let mislabelled: Kind<OptionK, i32> = vec![5].upcast().reinterpret();
//! assert!(matches!(mislabelled.fix(), Err(KindCastError::Mismatch { .. })));
//! ```

use std::any::{Any, type_name};
use std::fmt;
use std::marker::PhantomData;

use super::error::KindCastError;
use super::witness::{Value, Witness, Witness2, Witness3};

/// Concrete type name recorded for values adopted through `from_any`.
const ERASED: &str = "<erased at a dynamic boundary>";

macro_rules! define_kind_box {
    (
        $(#[$meta:meta])*
        $name:ident: $witness:ident [$($parameter:ident => $other:ident),+]
    ) => {
        $(#[$meta])*
        pub struct $name<F: $witness, $($parameter: Value),+> {
            value: Box<dyn Any>,
            concrete: &'static str,
            marker: PhantomData<fn() -> (F, $($parameter),+)>,
        }

        impl<F: $witness, $($parameter: Value),+> $name<F, $($parameter),+> {
            /// Erases a concrete value behind its witness.
            pub fn new(value: F::Of<$($parameter),+>) -> Self {
                Self {
                    value: Box::new(value),
                    concrete: type_name::<F::Of<$($parameter),+>>(),
                    marker: PhantomData,
                }
            }

            /// Adopts a value that was erased outside of the kind encoding.
            ///
            /// The label is not checked here; a wrong label surfaces as an
            /// error from [`Self::fix`].
            pub fn from_any(value: Box<dyn Any>) -> Self {
                Self {
                    value,
                    concrete: ERASED,
                    marker: PhantomData,
                }
            }

            /// Recovers the concrete value.
            ///
            /// # Errors
            ///
            /// Returns [`KindCastError::Mismatch`] when the box does not hold
            /// the type named by its witness.
            pub fn fix(self) -> Result<F::Of<$($parameter),+>, KindCastError> {
                let concrete = self.concrete;
                self.value
                    .downcast::<F::Of<$($parameter),+>>()
                    .map(|value| *value)
                    .map_err(|_| Self::mismatch(concrete))
            }

            /// Borrows the concrete value.
            ///
            /// # Errors
            ///
            /// Returns [`KindCastError::Mismatch`] when the box does not hold
            /// the type named by its witness.
            pub fn fix_ref(&self) -> Result<&F::Of<$($parameter),+>, KindCastError> {
                self.value
                    .downcast_ref::<F::Of<$($parameter),+>>()
                    .ok_or_else(|| Self::mismatch(self.concrete))
            }

            /// Returns `true` if the box currently holds a `T`.
            pub fn holds<T: Any>(&self) -> bool {
                self.value.is::<T>()
            }

            /// Relabels the box without checking its contents.
            #[must_use]
            pub fn reinterpret<G: $witness, $($other: Value),+>(self) -> $name<G, $($other),+> {
                $name {
                    value: self.value,
                    concrete: self.concrete,
                    marker: PhantomData,
                }
            }

            /// Returns the name of the witness this box is labelled with.
            pub fn witness_name() -> &'static str {
                type_name::<F>()
            }

            /// Returns the concrete type name recorded when the value was erased.
            pub const fn concrete_name(&self) -> &'static str {
                self.concrete
            }

            fn mismatch(actual: &'static str) -> KindCastError {
                let witness = type_name::<F>();
                let expected = type_name::<F::Of<$($parameter),+>>();
                tracing::warn!(witness, expected, actual, "rejected kind cast");
                KindCastError::Mismatch {
                    witness,
                    expected,
                    actual,
                }
            }
        }

        impl<F: $witness, $($parameter: Value),+> fmt::Debug for $name<F, $($parameter),+> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field("witness", &type_name::<F>())
                    .field("concrete", &self.concrete)
                    .finish_non_exhaustive()
            }
        }
    };
}

define_kind_box! {
    /// An erased `F<A>` labelled with the unary witness `F`.
    Kind: Witness [A => B]
}

define_kind_box! {
    /// An erased `F<A, B>` labelled with the binary witness `F`.
    Kind2: Witness2 [A => C, B => D]
}

define_kind_box! {
    /// An erased `F<A, B, C>` labelled with the ternary witness `F`.
    Kind3: Witness3 [A => D, B => E, C => H]
}

/// Recovers the concrete value of a unary box.
///
/// # Errors
///
/// Returns [`KindCastError::Mismatch`] when the box does not hold the type
/// named by its witness.
pub fn fix<F: Witness, A: Value>(kind: Kind<F, A>) -> Result<F::Of<A>, KindCastError> {
    kind.fix()
}

/// Concrete types that know their unary witness.
pub trait Upcast: Sized {
    /// The witness of this type's constructor.
    type Witness: Witness;
    /// The type argument the constructor is applied to.
    type Argument: Value;

    /// Erases `self` into a [`Kind`] box.
    fn upcast(self) -> Kind<Self::Witness, Self::Argument>;
}

/// Concrete types that know their binary witness.
pub trait Upcast2: Sized {
    /// The witness of this type's constructor.
    type Witness: Witness2;
    /// The first type argument.
    type First: Value;
    /// The second type argument.
    type Second: Value;

    /// Erases `self` into a [`Kind2`] box.
    fn upcast2(self) -> Kind2<Self::Witness, Self::First, Self::Second>;
}

/// Concrete types that know their ternary witness.
pub trait Upcast3: Sized {
    /// The witness of this type's constructor.
    type Witness: Witness3;
    /// The first type argument.
    type First: Value;
    /// The second type argument.
    type Second: Value;
    /// The third type argument.
    type Third: Value;

    /// Erases `self` into a [`Kind3`] box.
    fn upcast3(self) -> Kind3<Self::Witness, Self::First, Self::Second, Self::Third>;
}
