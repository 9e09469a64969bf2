//! Shareable single-argument functions.
//!
//! `Function1<A, B>` wraps an `Rc<dyn Fn(A) -> B>` so functions can be
//! stored, cloned and composed as values. Its binary witness
//! [`Function1K2`] is the standard [`Profunctor`].

use std::fmt;
use std::rc::Rc;

use crate::kind::{Value, Witness2};
use crate::typeclass::{Func, Profunctor};

/// A function `A -> B` that can be cloned.
pub struct Function1<A, B> {
    function: Rc<dyn Fn(A) -> B>,
}

impl<A: 'static, B: 'static> Function1<A, B> {
    pub fn new(function: impl Fn(A) -> B + 'static) -> Self {
        Self {
            function: Rc::new(function),
        }
    }

    pub fn apply(&self, argument: A) -> B {
        (self.function)(argument)
    }

    /// Runs `self`, then `next`.
    ///
    /// ```rust
    /// use kindred::data::Function1;
    ///
    /// let parse = Function1::new(|text: &str| text.len());
    /// let describe = parse.and_then(Function1::new(|n: usize| format!("{n} chars")));
    /// assert_eq!(describe.apply("four"), "4 chars");
    /// ```
    #[must_use]
    pub fn and_then<C: 'static>(self, next: Function1<B, C>) -> Function1<A, C> {
        Function1::new(move |a| next.apply(self.apply(a)))
    }

    /// Runs `previous`, then `self`.
    #[must_use]
    pub fn compose<Z: 'static>(self, previous: Function1<Z, A>) -> Function1<Z, B> {
        previous.and_then(self)
    }

    /// The underlying shared function.
    pub fn into_func(self) -> Func<A, B> {
        self.function
    }
}

impl<A: 'static> Function1<A, A> {
    pub fn identity() -> Self {
        Self::new(|a| a)
    }
}

impl<A, B> Clone for Function1<A, B> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, B> fmt::Debug for Function1<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Function1(<function>)")
    }
}

impl<A, B> From<Func<A, B>> for Function1<A, B> {
    fn from(function: Func<A, B>) -> Self {
        Self { function }
    }
}

/// Witness for `Function1<_, _>`.
#[derive(Debug)]
pub enum Function1K2 {}

impl Witness2 for Function1K2 {
    type Of<A: Value, B: Value> = Function1<A, B>;
}

impl Profunctor for Function1K2 {
    fn dimap<A: Value, B: Value, C: Value, D: Value>(
        fab: Function1<A, B>,
        before: impl Fn(C) -> A + 'static,
        after: impl Fn(B) -> D + 'static,
    ) -> Function1<C, D> {
        Function1::new(move |c| after(fab.apply(before(c))))
    }
}
