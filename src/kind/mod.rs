//! The higher-kinded type encoding.
//!
//! - [`Witness`], [`Witness2`], [`Witness3`]: type-level names for type
//!   constructors of one, two and three arguments
//! - [`Kind`], [`Kind2`], [`Kind3`]: erased boxes that remember which witness
//!   they belong to, recovered with the checked [`fix`]
//! - [`KindCastError`]: the only error the encoding itself can produce
//!
//! Most code never touches the boxes: typeclass operations take and return
//! concrete values (`OptionK::map(Some(1), f)` returns an `Option`). Boxes
//! exist for code that must carry values of different constructors through
//! one channel.

mod boxed;
mod dispatch;
mod error;
mod witness;

pub use boxed::{Kind, Kind2, Kind3, Upcast, Upcast2, Upcast3, fix};
pub use error::KindCastError;
pub use witness::{Value, Witness, Witness2, Witness3};
