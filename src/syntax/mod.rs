//! Syntax extensions.
//!
//! [`binding!`](crate::binding!) is do-notation for any [`Monad`](crate::typeclass::Monad)
//! witness.

mod binding_macro;
