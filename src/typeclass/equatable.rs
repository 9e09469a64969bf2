//! Structural equality lifted to type constructors.
//!
//! `EquatableK` compares two `F<A>` given a way to compare the `A`s. It is
//! what the law tests use to compare structures whose element type has a
//! custom notion of equality.
//!
//! # Laws
//!
//! For an element equality that is an equivalence relation:
//!
//! ```text
//! eq_k(x, x)                             (reflexivity)
//! eq_k(x, y) == eq_k(y, x)               (symmetry)
//! eq_k(x, y) && eq_k(y, z) => eq_k(x, z) (transitivity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::VecK;
//! use kindred::typeclass::EquatableK;
//!
//! let same_length = |a: &&str, b: &&str| a.len() == b.len();
//! assert!(VecK::eq_k(&vec!["ab", "c"], &vec!["xy", "z"], same_length));
//! assert!(!VecK::eq_k_default(&vec![1], &vec![1, 2]));
//! ```

use crate::kind::{Value, Witness};

/// A type constructor with element-wise equality.
pub trait EquatableK: Witness {
    /// Compares structure and, with `equal`, elements.
    fn eq_k<A: Value>(x: &Self::Of<A>, y: &Self::Of<A>, equal: impl Fn(&A, &A) -> bool) -> bool;

    /// [`eq_k`](EquatableK::eq_k) with the element's own `PartialEq`.
    fn eq_k_default<A: Value + PartialEq>(x: &Self::Of<A>, y: &Self::Of<A>) -> bool {
        Self::eq_k::<A>(x, y, PartialEq::eq)
    }
}

/// Compares two slices with an element equality.
pub(crate) fn slices_eq<A>(x: &[A], y: &[A], equal: impl Fn(&A, &A) -> bool) -> bool {
    x.len() == y.len() && x.iter().zip(y).all(|(a, b)| equal(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{OptionK, ResultK};
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), Some(1), true)]
    #[case(Some(1), Some(2), false)]
    #[case(Some(1), None, false)]
    #[case(None, None, true)]
    fn option_eq_k(#[case] x: Option<i32>, #[case] y: Option<i32>, #[case] expected: bool) {
        assert_eq!(OptionK::eq_k_default(&x, &y), expected);
    }

    #[rstest]
    fn result_eq_k_compares_errors_structurally() {
        let x: Result<i32, String> = Err("a".to_string());
        let y: Result<i32, String> = Err("a".to_string());
        assert!(ResultK::<String>::eq_k(&x, &y, |_, _| false));
        assert!(!ResultK::<String>::eq_k(&Ok(1), &y, |_, _| true));
    }

    #[rstest]
    fn slices_eq_checks_length_first() {
        assert!(!slices_eq(&[1, 2], &[1], |a, b| a == b));
        assert!(slices_eq(&[1, 2], &[3, 4], |_, _| true));
    }
}
