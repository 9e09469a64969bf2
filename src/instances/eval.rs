//! Instances for [`Eval<A>`](crate::control::Eval).
//!
//! Every operation only builds a description; nothing runs until
//! [`Eval::value`]. `tail_rec_m` goes through `Eval::flat_map`, which is
//! stack-safe by construction.

use std::rc::Rc;

use crate::control::{Either, Eval};
use crate::kind::{Kind, Upcast, Value, Witness};
use crate::typeclass::{Applicative, Bimonad, Comonad, Func, Functor, Monad};

/// Witness for `Eval<_>`.
#[derive(Debug)]
pub enum EvalK {}

impl Witness for EvalK {
    type Of<A: Value> = Eval<A>;
}

impl<A: Value> Upcast for Eval<A> {
    type Witness = EvalK;
    type Argument = A;

    fn upcast(self) -> Kind<EvalK, A> {
        Kind::new(self)
    }
}

crate::invariant_from_functor!(EvalK);

impl Functor for EvalK {
    #[inline]
    fn map<A: Value, B: Value>(fa: Eval<A>, function: impl Fn(A) -> B + 'static) -> Eval<B> {
        fa.map(function)
    }
}

impl Applicative for EvalK {
    #[inline]
    fn pure<A: Value>(value: A) -> Eval<A> {
        Eval::now(value)
    }

    fn ap<A: Value, B: Value>(ff: Eval<Func<A, B>>, fa: Eval<A>) -> Eval<B> {
        ff.flat_map(move |function| fa.clone().map(move |a| function(a)))
    }
}

crate::selective_from_monad!(EvalK);

type Step<A, B> = Rc<dyn Fn(A) -> Eval<Either<A, B>>>;

fn loop_from<A: Value, B: Value>(current: A, step: Step<A, B>) -> Eval<B> {
    let next = Rc::clone(&step);
    step(current).flat_map(move |outcome| match outcome {
        Either::Left(again) => loop_from(again, Rc::clone(&next)),
        Either::Right(done) => Eval::now(done),
    })
}

impl Monad for EvalK {
    #[inline]
    fn flat_map<A: Value, B: Value>(fa: Eval<A>, function: impl Fn(A) -> Eval<B> + 'static) -> Eval<B> {
        fa.flat_map(function)
    }

    fn tail_rec_m<A: Value, B: Value>(
        initial: A,
        step: impl Fn(A) -> Eval<Either<A, B>> + 'static,
    ) -> Eval<B> {
        let step: Step<A, B> = Rc::new(step);
        Eval::defer(move || loop_from(initial.clone(), Rc::clone(&step)))
    }
}

impl Comonad for EvalK {
    #[inline]
    fn extract<A: Value>(wa: Eval<A>) -> A {
        wa.value()
    }

    fn coflat_map<A: Value, B: Value>(
        wa: Eval<A>,
        function: impl Fn(Eval<A>) -> B + 'static,
    ) -> Eval<B> {
        Eval::later(move || function(wa.clone()))
    }
}

impl Bimonad for EvalK {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn operations_are_lazy_until_value() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let source = Eval::always(move || {
            counter.set(counter.get() + 1);
            2
        });
        let chained = EvalK::flat_map(EvalK::map(source, |n| n + 1), |n| Eval::now(n * 10));
        assert_eq!(calls.get(), 0);
        assert_eq!(chained.value(), 30);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn tail_rec_m_runs_a_long_loop() {
        let result = EvalK::tail_rec_m(0_u64, |n| {
            Eval::now(if n < 100_000 { Either::Left(n + 1) } else { Either::Right(n) })
        });
        assert_eq!(result.value(), 100_000);
    }

    #[rstest]
    fn extract_after_duplicate_is_identity() {
        let wa = Eval::later(|| "kept".to_string());
        assert_eq!(EvalK::extract(EvalK::duplicate(wa.clone())).value(), wa.value());
    }

    #[rstest]
    fn coflat_map_sees_the_whole_computation() {
        let doubled = EvalK::coflat_map(Eval::now(21), |w: Eval<i32>| w.value() * 2);
        assert_eq!(EvalK::extract(doubled), 42);
    }
}
