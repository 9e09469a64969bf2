//! Consumers that summarise their input into a monoid.
//!
//! `Op<R, A>` is a function `A -> R` read backwards: it consumes an `A`.
//! Mapping works on the input side, so `Op<R, _>` is [`Contravariant`].
//! When `R` combines, two consumers can share one input ([`Divide`]) or
//! split it by cases ([`Decidable`]).
//!
//! ```rust
//! use kindred::data::{Op, OpK};
//! use kindred::typeclass::{Divide, Sum};
//!
//! type Cost = OpK<Sum<u32>>;
//!
//! #[derive(Clone)]
//! struct Order {
//!     items: u32,
//!     express: bool,
//! }
//!
//! let per_item: Op<Sum<u32>, u32> = Op::new(|items| Sum::new(items * 3));
//! let shipping: Op<Sum<u32>, bool> = Op::new(|express| Sum::new(if express { 10 } else { 2 }));
//! let order_cost = Cost::divide(|order: Order| (order.items, order.express), per_item, shipping);
//! assert_eq!(order_cost.run(Order { items: 4, express: true }), Sum::new(22));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::control::Either;
use crate::kind::{Value, Witness};
use crate::typeclass::{Contravariant, Decidable, Divide, Divisible, Monoid, Semigroup};

/// A consumer of `A` producing an `R`.
pub struct Op<R, A> {
    run_function: Rc<dyn Fn(A) -> R>,
}

impl<R: 'static, A: 'static> Op<R, A> {
    pub fn new(function: impl Fn(A) -> R + 'static) -> Self {
        Self {
            run_function: Rc::new(function),
        }
    }

    pub fn run(&self, input: A) -> R {
        (self.run_function)(input)
    }

    /// Adapts the input.
    #[must_use]
    pub fn contramap<B: 'static>(self, function: impl Fn(B) -> A + 'static) -> Op<R, B> {
        Op::new(move |b| self.run(function(b)))
    }
}

impl<R, A> Clone for Op<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> fmt::Debug for Op<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Op(<function>)")
    }
}

/// Witness for `Op<R, _>`.
#[derive(Debug)]
pub struct OpK<R>(Infallible, PhantomData<fn() -> R>);

impl<R: Value> Witness for OpK<R> {
    type Of<A: Value> = Op<R, A>;
}

crate::invariant_from_contravariant!(impl[R: Value] OpK<R>);

impl<R: Value> Contravariant for OpK<R> {
    fn contramap<A: Value, B: Value>(fa: Op<R, A>, function: impl Fn(B) -> A + 'static) -> Op<R, B> {
        fa.contramap(function)
    }
}

impl<R: Value + Semigroup> Divide for OpK<R> {
    fn divide<A: Value, B: Value, C: Value>(
        function: impl Fn(A) -> (B, C) + 'static,
        fb: Op<R, B>,
        fc: Op<R, C>,
    ) -> Op<R, A> {
        Op::new(move |a| {
            let (b, c) = function(a);
            fb.run(b).combine(fc.run(c))
        })
    }
}

impl<R: Value + Monoid> Divisible for OpK<R> {
    fn conquer<A: Value>() -> Op<R, A> {
        Op::new(|_| R::empty())
    }
}

impl<R: Value + Monoid> Decidable for OpK<R> {
    fn choose<A: Value, B: Value, C: Value>(
        function: impl Fn(A) -> Either<B, C> + 'static,
        fb: Op<R, B>,
        fc: Op<R, C>,
    ) -> Op<R, A> {
        Op::new(move |a| match function(a) {
            Either::Left(b) => fb.run(b),
            Either::Right(c) => fc.run(c),
        })
    }

    fn lose<A: Value>(function: impl Fn(A) -> Infallible + 'static) -> Op<R, A> {
        Op::new(move |a| match function(a) {})
    }
}
