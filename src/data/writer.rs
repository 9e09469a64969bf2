//! Writer monad - computation with accumulated output.
//!
//! A `Writer<W, A>` is a result `A` paired with output `W`. The output
//! type is a [`Monoid`] so that sequencing two writers combines their
//! outputs in order; logs, counters and audit trails are the usual uses.
//!
//! # Laws
//!
//! - Tell Monoid Law: `followed_by(tell(w1), tell(w2)) == tell(w1.combine(w2))`
//! - Listen Pure Law: `listen(pure(a)) == pure((a, W::empty()))`
//! - Censor Definition: `censor(f, m) == pass(map(m, |a| (a, f)))`
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::{Writer, WriterK};
//! use kindred::typeclass::{Applicative, Monad, MonadWriter};
//!
//! type Logged = WriterK<Vec<String>>;
//!
//! fn log(message: &str) -> Writer<Vec<String>, ()> {
//!     Logged::tell(vec![message.to_string()])
//! }
//!
//! let computation = Logged::followed_by(log("step 1"), Logged::followed_by(log("step 2"), Logged::pure(42)));
//! assert_eq!(computation.run(), (42, vec!["step 1".to_string(), "step 2".to_string()]));
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;

use super::traced::{Traced, TracedK};
use crate::control::Either;
use crate::kind::{Value, Witness};
use crate::typeclass::{Applicative, Func, Functor, Monad, MonadWriter, Monoid, Pairing, Semigroup};

/// A result together with the output produced while computing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Writer<W, A> {
    result: A,
    output: W,
}

impl<W, A> Writer<W, A> {
    pub const fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// The result and the output.
    pub fn run(self) -> (A, W) {
        (self.result, self.output)
    }

    pub const fn result(&self) -> &A {
        &self.result
    }

    pub const fn output(&self) -> &W {
        &self.output
    }

    pub fn map<B>(self, function: impl FnOnce(A) -> B) -> Writer<W, B> {
        Writer::new(function(self.result), self.output)
    }
}

impl<W: Semigroup, A> Writer<W, A> {
    /// Runs `function` on the result and appends its output to this one.
    pub fn flat_map<B>(self, function: impl FnOnce(A) -> Writer<W, B>) -> Writer<W, B> {
        let next = function(self.result);
        Writer::new(next.result, self.output.combine(next.output))
    }
}

/// Witness for `Writer<W, _>`.
#[derive(Debug)]
pub struct WriterK<W>(Infallible, PhantomData<fn() -> W>);

impl<W: Value> Witness for WriterK<W> {
    type Of<A: Value> = Writer<W, A>;
}

// =============================================================================
// Type Class Instances
// =============================================================================

crate::invariant_from_functor!(impl[W: Value] WriterK<W>);

impl<W: Value> Functor for WriterK<W> {
    fn map<A: Value, B: Value>(fa: Writer<W, A>, function: impl Fn(A) -> B + 'static) -> Writer<W, B> {
        fa.map(function)
    }
}

impl<W: Value + Monoid> Applicative for WriterK<W> {
    fn pure<A: Value>(value: A) -> Writer<W, A> {
        Writer::new(value, W::empty())
    }

    fn ap<A: Value, B: Value>(ff: Writer<W, Func<A, B>>, fa: Writer<W, A>) -> Writer<W, B> {
        Writer::new((ff.result)(fa.result), ff.output.combine(fa.output))
    }
}

crate::selective_from_monad!(impl[W: Value + Monoid] WriterK<W>);

impl<W: Value + Monoid> Monad for WriterK<W> {
    fn flat_map<A: Value, B: Value>(
        fa: Writer<W, A>,
        function: impl Fn(A) -> Writer<W, B> + 'static,
    ) -> Writer<W, B> {
        fa.flat_map(function)
    }

    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> Writer<W, Either<A, B>> + 'static,
    ) -> Writer<W, B> {
        let mut current = initial;
        let mut output = W::empty();
        loop {
            let Writer { result, output: produced } = step(current);
            output = output.combine(produced);
            match result {
                Either::Left(next) => current = next,
                Either::Right(done) => return Writer::new(done, output),
            }
        }
    }
}

impl<W: Value + Monoid> MonadWriter<W> for WriterK<W> {
    fn writer<A: Value>((result, output): (A, W)) -> Writer<W, A> {
        Writer::new(result, output)
    }

    fn listen<A: Value>(computation: Writer<W, A>) -> Writer<W, (A, W)> {
        let output = computation.output.clone();
        Writer::new((computation.result, output), computation.output)
    }

    fn pass<A: Value>(computation: Writer<W, (A, Func<W, W>)>) -> Writer<W, A> {
        let (result, modifier) = computation.result;
        Writer::new(result, modifier(computation.output))
    }
}

/// Reads the traced comonad at the offset the writer produced.
impl<W: Value + Monoid> Pairing<TracedK<W>> for WriterK<W> {
    fn zap<A: Value, B: Value, C>(fa: Writer<W, A>, gb: Traced<W, B>, function: impl FnOnce(A, B) -> C) -> C {
        let (a, output) = fa.run();
        function(a, gb.run(output))
    }
}
