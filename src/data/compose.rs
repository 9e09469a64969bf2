//! Composition of two type constructors.
//!
//! `ComposeK<F, G>` is the witness of `F<G<_>>`. Functors, applicatives,
//! foldables and traversables are closed under composition, so the nested
//! structure can be worked on as a single layer.
//!
//! ```rust
//! use kindred::data::ComposeK;
//! use kindred::instances::{OptionK, VecK};
//! use kindred::typeclass::{Foldable, Functor};
//!
//! type VecOfOptions = ComposeK<VecK, OptionK>;
//!
//! let nested = vec![Some(1), None, Some(3)];
//! let incremented = VecOfOptions::map(nested, |n: i32| n + 1);
//! assert_eq!(incremented, vec![Some(2), None, Some(4)]);
//! assert_eq!(VecOfOptions::fold_left(incremented, 0, |sum, n| sum + n), 6);
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::control::Eval;
use crate::kind::{Value, Witness};
use crate::typeclass::{Applicative, Foldable, Func, Functor, Traverse, func};

/// Witness for `F<G<_>>`.
#[derive(Debug)]
pub struct ComposeK<F, G>(Infallible, PhantomData<fn() -> (F, G)>);

impl<F: Witness, G: Witness> Witness for ComposeK<F, G> {
    type Of<A: Value> = F::Of<G::Of<A>>;
}

crate::invariant_from_functor!(impl[F: Functor, G: Functor] ComposeK<F, G>);

impl<F: Functor, G: Functor> Functor for ComposeK<F, G> {
    fn map<A: Value, B: Value>(
        fa: F::Of<G::Of<A>>,
        function: impl Fn(A) -> B + 'static,
    ) -> F::Of<G::Of<B>> {
        let function = Rc::new(function);
        F::map::<G::Of<A>, G::Of<B>>(fa, move |ga| {
            let function = Rc::clone(&function);
            G::map::<A, B>(ga, move |a| function(a))
        })
    }
}

impl<F: Applicative, G: Applicative> Applicative for ComposeK<F, G> {
    fn pure<A: Value>(value: A) -> F::Of<G::Of<A>> {
        F::pure::<G::Of<A>>(G::pure::<A>(value))
    }

    fn ap<A: Value, B: Value>(
        ff: F::Of<G::Of<Func<A, B>>>,
        fa: F::Of<G::Of<A>>,
    ) -> F::Of<G::Of<B>> {
        let inner: F::Of<Func<G::Of<A>, G::Of<B>>> =
            F::map::<G::Of<Func<A, B>>, Func<G::Of<A>, G::Of<B>>>(ff, |gf| {
                func(move |ga| G::ap::<A, B>(gf.clone(), ga))
            });
        F::ap::<G::Of<A>, G::Of<B>>(inner, fa)
    }
}

impl<F: Foldable, G: Foldable> Foldable for ComposeK<F, G> {
    fn fold_left<A: Value, B>(fa: F::Of<G::Of<A>>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        F::fold_left::<G::Of<A>, B>(fa, initial, |accumulated, ga| {
            G::fold_left::<A, B>(ga, accumulated, &mut function)
        })
    }

    fn fold_right<A: Value, B: Value>(
        fa: F::Of<G::Of<A>>,
        initial: Eval<B>,
        function: impl Fn(A, Eval<B>) -> Eval<B> + 'static,
    ) -> Eval<B> {
        let function = Rc::new(function);
        F::fold_right::<G::Of<A>, B>(fa, initial, move |ga, rest| {
            let function = Rc::clone(&function);
            G::fold_right::<A, B>(ga, rest, move |a, inner| function(a, inner))
        })
    }
}

impl<F: Traverse, G: Traverse> Traverse for ComposeK<F, G> {
    fn traverse<H: Applicative, A: Value, B: Value>(
        fa: F::Of<G::Of<A>>,
        function: impl Fn(A) -> H::Of<B> + 'static,
    ) -> H::Of<F::Of<G::Of<B>>> {
        let function = Rc::new(function);
        F::traverse::<H, G::Of<A>, G::Of<B>>(fa, move |ga| {
            let function = Rc::clone(&function);
            G::traverse::<H, A, B>(ga, move |a| function(a))
        })
    }
}
