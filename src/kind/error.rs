//! Errors raised by the kind encoding itself.
//!
//! These errors live in a separate universe from the domain errors carried
//! by `ApplicativeError`: a failed downcast means a box was labelled with the
//! wrong witness, which is a programming error at a dynamic boundary rather
//! than a value a computation can recover from.

use thiserror::Error;

/// A `fix` was attempted on a box whose contents do not match its label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindCastError {
    /// The erased value is not the type the witness names.
    #[error("kind mismatch: expected {expected} for witness {witness}, got {actual}")]
    Mismatch {
        /// The witness the box was labelled with.
        witness: &'static str,
        /// The concrete type the witness names.
        expected: &'static str,
        /// The concrete type recorded when the value was erased.
        actual: &'static str,
    },
}

impl KindCastError {
    /// Returns the concrete type the witness expected.
    pub const fn expected(&self) -> &'static str {
        match self {
            Self::Mismatch { expected, .. } => expected,
        }
    }

    /// Returns the concrete type the box actually held.
    pub const fn actual(&self) -> &'static str {
        match self {
            Self::Mismatch { actual, .. } => actual,
        }
    }
}
