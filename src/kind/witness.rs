//! Higher-kinded type emulation through witness types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module names each constructor with a *witness*: an uninhabited marker
//! type whose generic associated type `Of<A>` is the constructor applied to
//! `A`. Typeclasses are then implemented for the witness, so that
//! `OptionK::map` and `VecK::map` are two instances of one `Functor` trait.
//!
//! Because the associated type names the concrete type, pairing a witness
//! with a value of a different constructor is rejected by the compiler.
//!
//! # Example
//!
//! ```rust
//! use kindred::instances::OptionK;
//! use kindred::kind::Witness;
//!
//! fn wrap<F: Witness>(value: F::Of<i32>) -> F::Of<i32> {
//!     value
//! }
//!
//! assert_eq!(wrap::<OptionK>(Some(1)), Some(1));
//! ```

/// Bound carried by every type argument that flows through a witness.
///
/// Values inside an effect are shared by derived combinators (for example
/// `map2` reuses the left value for every right value of a `Vec`), so they
/// must be cloneable and own their data.
pub trait Value: Clone + 'static {}

impl<T: Clone + 'static> Value for T {}

/// A unary type constructor `F<_>`.
///
/// # Laws
///
/// Exactly one witness exists per constructor, and the witness is never
/// instantiated. Extra parameters of the constructor are fixed in the
/// witness itself, as in `ResultK<E>` for `Result<_, E>`.
pub trait Witness: 'static {
    /// The constructor applied to `A`.
    type Of<A: Value>: Value;
}

/// A binary type constructor `F<_, _>`.
pub trait Witness2: 'static {
    /// The constructor applied to `A` and `B`.
    type Of<A: Value, B: Value>: Value;
}

/// A ternary type constructor `F<_, _, _>`.
pub trait Witness3: 'static {
    /// The constructor applied to `A`, `B` and `C`.
    type Of<A: Value, B: Value, C: Value>: Value;
}
