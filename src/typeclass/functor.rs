//! Functor type class - mapping over the contents of a type constructor.
//!
//! A `Functor` transforms the values inside an `F<_>` without changing its
//! shape: an `Option` stays `Some` or `None`, a `Vec` keeps its length.
//! Instances are implemented on witnesses, so the operation is written
//! `OptionK::map(fa, f)` rather than as a method on the value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::{OptionK, VecK};
//! use kindred::typeclass::Functor;
//!
//! assert_eq!(OptionK::map(Some(5_i32), |n| n.to_string()), Some("5".to_string()));
//! assert_eq!(VecK::map(vec![1, 2, 3], |n| n * 10), vec![10, 20, 30]);
//! ```

use std::rc::Rc;

use super::Invariant;
use crate::kind::Value;

/// A type constructor whose contents can be transformed.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// F::map(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
/// ```
pub trait Functor: Invariant {
    /// Applies `function` to every value inside `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::OptionK;
    /// use kindred::typeclass::Functor;
    ///
    /// assert_eq!(OptionK::map(Some(5), |n| n * 2), Some(10));
    /// assert_eq!(OptionK::map(None::<i32>, |n| n * 2), None);
    /// ```
    fn map<A: Value, B: Value>(fa: Self::Of<A>, function: impl Fn(A) -> B + 'static)
    -> Self::Of<B>;

    /// Turns a plain function into one between applied types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::VecK;
    /// use kindred::typeclass::Functor;
    ///
    /// let lengths = VecK::lift(|s: &str| s.len());
    /// assert_eq!(lengths(vec!["a", "bcd"]), vec![1, 3]);
    /// ```
    fn lift<A: Value, B: Value>(
        function: impl Fn(A) -> B + 'static,
    ) -> impl Fn(Self::Of<A>) -> Self::Of<B> {
        let function = Rc::new(function);
        move |fa| {
            let function = Rc::clone(&function);
            Self::map::<A, B>(fa, move |a| function(a))
        }
    }

    /// Discards the contents, keeping the shape.
    fn void<A: Value>(fa: Self::Of<A>) -> Self::Of<()> {
        Self::map::<A, ()>(fa, |_| ())
    }

    /// Replaces every value with `value` (the `as` combinator).
    fn replace<A: Value, B: Value>(fa: Self::Of<A>, value: B) -> Self::Of<B> {
        Self::map::<A, B>(fa, move |_| value.clone())
    }

    /// Pairs each value with the result of `function` applied to it.
    fn fproduct<A: Value, B: Value>(
        fa: Self::Of<A>,
        function: impl Fn(&A) -> B + 'static,
    ) -> Self::Of<(A, B)> {
        Self::map::<A, (A, B)>(fa, move |a| {
            let b = function(&a);
            (a, b)
        })
    }

    /// Pairs each value with `left` on the left.
    fn tuple_left<A: Value, B: Value>(fa: Self::Of<A>, left: B) -> Self::Of<(B, A)> {
        Self::map::<A, (B, A)>(fa, move |a| (left.clone(), a))
    }

    /// Pairs each value with `right` on the right.
    fn tuple_right<A: Value, B: Value>(fa: Self::Of<A>, right: B) -> Self::Of<(A, B)> {
        Self::map::<A, (A, B)>(fa, move |a| (a, right.clone()))
    }
}
