//! `binding!` macro for do-notation over a witness.
//!
//! `binding!` flattens a chain of `flat_map` calls into a sequence of
//! statements. The first item names the witness; the rest are:
//!
//! - `name <= expression;` binds the value inside a computation
//! - `(a, b) <= expression;` binds a tuple
//! - `_ <= expression;` runs a computation for its effect
//! - `let name = expression;` / `let (a, b) = expression;` binds a plain value
//! - `yield expression` ends the block with `Applicative::pure`
//! - a final `expression` that is already a computation ends the block as is
//!
//! `<=` stands in for `<-`, which `macro_rules!` cannot match.
//!
//! Every continuation handed to `flat_map` is an `Fn` closure, so it may be
//! run many times (once per element for `VecK`). Names bound earlier are
//! cloned at the top of every later continuation; they are all [`Value`]s
//! and therefore `Clone`.
//!
//! [`Value`]: crate::kind::Value
//!
//! # Examples
//!
//! ```rust
//! use kindred::binding;
//! use kindred::instances::{OptionK, VecK};
//!
//! let total = binding! { OptionK;
//!     x <= Some(5);
//!     y <= Some(10);
//!     let z = x + y;
//!     yield z * 2
//! };
//! assert_eq!(total, Some(30));
//!
//! let pairs = binding! { VecK;
//!     word <= vec!["a".to_string(), "b".to_string()];
//!     n <= vec![1, 2];
//!     yield format!("{word}{n}")
//! };
//! assert_eq!(pairs, vec!["a1", "a2", "b1", "b2"]);
//! ```
//!
//! ```rust
//! use kindred::binding;
//! use kindred::data::{State, StateK};
//! use kindred::typeclass::MonadState;
//!
//! type Counter = StateK<i32>;
//!
//! let tick: State<i32, i32> = binding! { Counter;
//!     current <= Counter::get();
//!     _ <= Counter::put(current + 1);
//!     next <= Counter::get();
//!     yield current * 100 + next
//! };
//! assert_eq!(tick.run(4), (405, 5));
//! ```

/// Do-notation over a `Monad` witness. See the [module documentation](self).
#[macro_export]
macro_rules! binding {
    (@step $witness:ty; [$($bound:ident)*]; yield $result:expr) => {
        <$witness as $crate::typeclass::Applicative>::pure($result)
    };

    (@step $witness:ty; [$($bound:ident)*]; let ($($name:ident),+ $(,)?) = $value:expr; $($rest:tt)+) => {{
        let ($($name),+) = $value;
        $crate::binding!(@step $witness; [$($bound)* $($name)+]; $($rest)+)
    }};

    (@step $witness:ty; [$($bound:ident)*]; let $name:ident = $value:expr; $($rest:tt)+) => {{
        let $name = $value;
        $crate::binding!(@step $witness; [$($bound)* $name]; $($rest)+)
    }};

    (@step $witness:ty; [$($bound:ident)*]; ($($name:ident),+ $(,)?) <= $computation:expr; $($rest:tt)+) => {
        <$witness as $crate::typeclass::Monad>::flat_map($computation, move |($($name),+)| {
            $(#[allow(unused_variables)] let $bound = ::core::clone::Clone::clone(&$bound);)*
            $crate::binding!(@step $witness; [$($bound)* $($name)+]; $($rest)+)
        })
    };

    (@step $witness:ty; [$($bound:ident)*]; _ <= $computation:expr; $($rest:tt)+) => {
        <$witness as $crate::typeclass::Monad>::flat_map($computation, move |_| {
            $(#[allow(unused_variables)] let $bound = ::core::clone::Clone::clone(&$bound);)*
            $crate::binding!(@step $witness; [$($bound)*]; $($rest)+)
        })
    };

    (@step $witness:ty; [$($bound:ident)*]; $name:ident <= $computation:expr; $($rest:tt)+) => {
        <$witness as $crate::typeclass::Monad>::flat_map($computation, move |$name| {
            $(#[allow(unused_variables)] let $bound = ::core::clone::Clone::clone(&$bound);)*
            $crate::binding!(@step $witness; [$($bound)* $name]; $($rest)+)
        })
    };

    (@step $witness:ty; [$($bound:ident)*]; $result:expr) => {
        $result
    };

    ($witness:ty; $($body:tt)+) => {
        $crate::binding!(@step $witness; []; $($body)+)
    };
}
