//! # kindred
//!
//! Higher-kinded type emulation and a standard library of type classes for
//! Rust.
//!
//! ## Overview
//!
//! Rust has no way to abstract over a type constructor such as `Option<_>`
//! or `Vec<_>`. kindred names each constructor with a *witness* type whose
//! generic associated type rebuilds it (`OptionK::Of<A> = Option<A>`), and
//! writes every type class against witnesses:
//!
//! - **Kinds**: witnesses, the erased `Kind` boxes and the checked `fix`
//! - **Type Classes**: Functor through Monad, Foldable, Traverse, the
//!   error, filter and alternative classes, the comonads, contravariant
//!   and binary classes, `Semigroup` and `Monoid`
//! - **Control**: `Either` and the stack-safe lazy `Eval`
//! - **Instances**: the standard library's `Option`, `Vec`, `Result`
//! - **Data**: `Validated`, `NonEmptyVec`, `State`, `Reader`, `Writer`,
//!   `Store` and the other concrete types
//! - **Syntax**: the `binding!` do-notation macro
//!
//! ## Feature Flags
//!
//! - `data`: concrete data types (default)
//! - `syntax`: the `binding!` macro (default)
//! - `full`: every feature
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! let parsed = VecK::traverse::<OptionK, &str, i32>(vec!["1", "2", "3"], |s| s.parse().ok());
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! let boxed = Some(5).upcast();
//! assert_eq!(fix(boxed), Ok(Some(5)));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::instances::*;
    pub use crate::kind::*;
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;
}

pub mod control;
pub mod instances;
pub mod kind;
pub mod typeclass;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "syntax")]
pub mod syntax;
