//! Reader monad - computations that read a shared environment.
//!
//! A `Reader<R, A>` is a function `R -> A`. Sequencing readers passes the
//! same environment to each of them, which is how configuration and
//! dependencies get threaded without being passed by hand.
//!
//! # Laws
//!
//! - Ask Local Law: `local(f, ask()) == asks(f)`
//! - Local Identity Law: `local(|r| r, m) == m`
//! - Local Composition Law: `local(f, local(g, m)) == local(|r| g(f(r)), m)`
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::ReaderK;
//! use kindred::typeclass::{Monad, MonadReader};
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! type WithConfig = ReaderK<Config>;
//!
//! let address = WithConfig::flat_map(WithConfig::asks(|c: Config| c.host), |host: String| {
//!     WithConfig::asks(move |c: Config| format!("{host}:{}", c.port))
//! });
//! let config = Config { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::env::{Env, EnvK};
use crate::control::Either;
use crate::kind::{Value, Witness};
use crate::typeclass::{Applicative, Func, Functor, Monad, MonadReader, Pairing};

/// A computation that needs an environment `R` to produce an `A`.
pub struct Reader<R, A> {
    /// Uses Rc so the reader can be cloned into `flat_map` continuations.
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// ```rust
    /// use kindred::data::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// assert_eq!(reader.run(41), 42);
    /// assert_eq!(reader.run(0), 1);
    /// ```
    pub fn new(function: impl Fn(R) -> A + 'static) -> Self {
        Self {
            run_function: Rc::new(function),
        }
    }

    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    #[must_use]
    pub fn map<B: 'static>(self, function: impl Fn(A) -> B + 'static) -> Reader<R, B> {
        Reader::new(move |environment| function(self.run(environment)))
    }

    /// Adapts the environment this reader expects.
    #[must_use]
    pub fn contramap<Q: 'static>(self, function: impl Fn(Q) -> R + 'static) -> Reader<Q, A> {
        Reader::new(move |environment| self.run(function(environment)))
    }
}

impl<R: Clone + 'static, A: 'static> Reader<R, A> {
    #[must_use]
    pub fn flat_map<B: 'static>(self, function: impl Fn(A) -> Reader<R, B> + 'static) -> Reader<R, B> {
        Reader::new(move |environment: R| function(self.run(environment.clone())).run(environment))
    }
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Reader(<function>)")
    }
}

/// Witness for `Reader<R, _>`.
#[derive(Debug)]
pub struct ReaderK<R>(Infallible, PhantomData<fn() -> R>);

impl<R: Value> Witness for ReaderK<R> {
    type Of<A: Value> = Reader<R, A>;
}

// =============================================================================
// Type Class Instances
// =============================================================================

crate::invariant_from_functor!(impl[R: Value] ReaderK<R>);

impl<R: Value> Functor for ReaderK<R> {
    fn map<A: Value, B: Value>(fa: Reader<R, A>, function: impl Fn(A) -> B + 'static) -> Reader<R, B> {
        fa.map(function)
    }
}

impl<R: Value> Applicative for ReaderK<R> {
    fn pure<A: Value>(value: A) -> Reader<R, A> {
        Reader::new(move |_| value.clone())
    }

    fn ap<A: Value, B: Value>(ff: Reader<R, Func<A, B>>, fa: Reader<R, A>) -> Reader<R, B> {
        Reader::new(move |environment: R| ff.run(environment.clone())(fa.run(environment)))
    }
}

crate::selective_from_monad!(impl[R: Value] ReaderK<R>);

impl<R: Value> Monad for ReaderK<R> {
    fn flat_map<A: Value, B: Value>(
        fa: Reader<R, A>,
        function: impl Fn(A) -> Reader<R, B> + 'static,
    ) -> Reader<R, B> {
        fa.flat_map(function)
    }

    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> Reader<R, Either<A, B>> + 'static,
    ) -> Reader<R, B> {
        Reader::new(move |environment: R| {
            let mut current = initial.clone();
            loop {
                match step(current).run(environment.clone()) {
                    Either::Left(next) => current = next,
                    Either::Right(done) => return done,
                }
            }
        })
    }
}

impl<R: Value> MonadReader<R> for ReaderK<R> {
    fn ask() -> Reader<R, R> {
        Reader::new(|environment| environment)
    }

    fn local<A: Value>(modifier: impl Fn(R) -> R + 'static, computation: Reader<R, A>) -> Reader<R, A> {
        computation.contramap(modifier)
    }
}

/// Runs the reader in the environment the env carries.
impl<R: Value> Pairing<EnvK<R>> for ReaderK<R> {
    fn zap<A: Value, B: Value, C>(fa: Reader<R, A>, gb: Env<R, B>, function: impl FnOnce(A, B) -> C) -> C {
        let (environment, b) = gb.into_parts();
        function(fa.run(environment), b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Scaled = ReaderK<i32>;

    #[rstest]
    fn ask_and_local() {
        assert_eq!(Scaled::ask().run(7), 7);
        assert_eq!(Scaled::local(|n| n * 10, Scaled::ask()).run(7), 70);
        assert_eq!(Scaled::reader(|n| n + 1).run(1), 2);
    }

    #[rstest]
    fn ap_reads_the_same_environment_twice() {
        let ff: Reader<i32, Func<i32, i32>> = Reader::new(|n| crate::typeclass::func(move |a| a * n));
        assert_eq!(Scaled::ap(ff, Scaled::ask()).run(6), 36);
    }

    #[rstest]
    fn tail_rec_m_runs_in_constant_stack() {
        let counted = Scaled::tail_rec_m(0, |n| {
            Reader::new(move |limit: i32| if n < limit { Either::Left(n + 1) } else { Either::Right(n) })
        });
        assert_eq!(counted.run(100_000), 100_000);
    }

    #[rstest]
    fn zap_with_env_uses_its_environment() {
        let doubled: Reader<i32, i32> = Reader::new(|n| n * 2);
        let zapped = <Scaled as Pairing<EnvK<i32>>>::zap(doubled, Env::new(21, "x"), |a, b| format!("{b}{a}"));
        assert_eq!(zapped, "x42");
    }
}
