//! Stack-safe lazy evaluation.
//!
//! `Eval<A>` describes how to obtain a value of type `A`:
//!
//! - [`Eval::now`]: already computed
//! - [`Eval::later`]: computed on first demand, then memoized
//! - [`Eval::always`]: recomputed on every demand
//! - [`Eval::defer`]: an `Eval` produced on demand
//!
//! `map` and `flat_map` only build a description. [`Eval::value`] runs it in
//! a loop over an explicit continuation stack, so arbitrarily long chains of
//! `defer` and `flat_map` never grow the call stack. `Foldable::fold_right`
//! and `Selective::while_s` rely on this.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Eval;
//!
//! fn count_down(n: u64) -> Eval<u64> {
//!     if n == 0 {
//!         Eval::now(0)
//!     } else {
//!         Eval::defer(move || count_down(n - 1).map(|steps| steps + 1))
//!     }
//! }
//!
//! assert_eq!(count_down(100_000).value(), 100_000);
//! ```

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::kind::Value;

type Erased = Rc<dyn Any>;
type Thunk = Rc<dyn Fn() -> Erased>;
type Continuation = Rc<dyn Fn(Erased) -> Node>;
type MemoCell = Rc<RefCell<MemoState>>;

#[derive(Clone)]
enum Node {
    Now(Erased),
    Always(Thunk),
    Defer(Rc<dyn Fn() -> Node>),
    FlatMap(Link, Continuation),
    Memo(MemoCell),
}

enum MemoState {
    Pending(Node),
    Done(Erased),
}

/// The source of a `FlatMap` node.
///
/// Left-nested `map` chains form long linked lists of links; dropping them
/// recursively would overflow the stack, so `Drop` walks them in a loop.
#[derive(Clone)]
struct Link(Option<Rc<Node>>);

impl Link {
    fn new(node: Node) -> Self {
        Self(Some(Rc::new(node)))
    }

    fn node(&self) -> Node {
        match &self.0 {
            Some(node) => Node::clone(node),
            None => unreachable!("eval link emptied outside of drop"),
        }
    }
}

impl Drop for Link {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(Node::FlatMap(mut link, _)) => link.0.take(),
                _ => None,
            };
        }
    }
}

enum Frame {
    Bind(Continuation),
    Store(MemoCell),
}

fn run(root: &Node) -> Erased {
    let mut current = root.clone();
    let mut frames: Vec<Frame> = Vec::new();
    let mut steps: usize = 0;

    loop {
        steps += 1;
        let value = match current {
            Node::Now(value) => value,
            Node::Always(thunk) => thunk(),
            Node::Defer(thunk) => {
                current = thunk();
                continue;
            }
            Node::FlatMap(link, continuation) => {
                frames.push(Frame::Bind(continuation));
                current = link.node();
                continue;
            }
            Node::Memo(cell) => {
                let state = match &*cell.borrow() {
                    MemoState::Done(value) => Ok(Rc::clone(value)),
                    MemoState::Pending(node) => Err(node.clone()),
                };
                match state {
                    Ok(value) => value,
                    Err(node) => {
                        frames.push(Frame::Store(cell));
                        current = node;
                        continue;
                    }
                }
            }
        };

        loop {
            match frames.pop() {
                None => {
                    tracing::trace!(steps, "eval finished");
                    return value;
                }
                Some(Frame::Store(cell)) => {
                    *cell.borrow_mut() = MemoState::Done(Rc::clone(&value));
                }
                Some(Frame::Bind(continuation)) => {
                    current = continuation(value);
                    break;
                }
            }
        }
    }
}

fn erase<A: Value>(thunk: impl Fn() -> A + 'static) -> Thunk {
    Rc::new(move || Rc::new(thunk()) as Erased)
}

fn unerase<A: Value>(erased: Erased) -> A {
    match erased.downcast::<A>() {
        Ok(value) => Rc::unwrap_or_clone(value),
        Err(_) => unreachable!("eval produced a value of an unexpected type"),
    }
}

/// A lazily described computation of an `A`.
///
/// Cloning an `Eval` shares its description; memoized parts are computed
/// at most once across all clones.
pub struct Eval<A> {
    node: Node,
    marker: PhantomData<fn() -> A>,
}

impl<A> Clone for Eval<A> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            marker: PhantomData,
        }
    }
}

impl<A: Value> Eval<A> {
    const fn from_node(node: Node) -> Self {
        Self {
            node,
            marker: PhantomData,
        }
    }

    /// An already computed value.
    pub fn now(value: A) -> Self {
        Self::from_node(Node::Now(Rc::new(value)))
    }

    /// A value computed on first demand and memoized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use kindred::control::Eval;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let lazy = Eval::later(move || {
    ///     counter.set(counter.get() + 1);
    ///     42
    /// });
    ///
    /// assert_eq!(calls.get(), 0);
    /// assert_eq!(lazy.value(), 42);
    /// assert_eq!(lazy.value(), 42);
    /// assert_eq!(calls.get(), 1);
    /// ```
    pub fn later(thunk: impl Fn() -> A + 'static) -> Self {
        Self::from_node(Node::Always(erase(thunk))).memoize()
    }

    /// A value recomputed on every demand.
    pub fn always(thunk: impl Fn() -> A + 'static) -> Self {
        Self::from_node(Node::Always(erase(thunk)))
    }

    /// An `Eval` built on demand; the building step itself is stack-safe.
    pub fn defer(thunk: impl Fn() -> Self + 'static) -> Self {
        Self::from_node(Node::Defer(Rc::new(move || thunk().node)))
    }

    /// Forces the computation.
    pub fn value(&self) -> A {
        unerase(run(&self.node))
    }

    /// Transforms the eventual value.
    #[must_use]
    pub fn map<B: Value>(self, function: impl Fn(A) -> B + 'static) -> Eval<B> {
        self.flat_map(move |value| Eval::now(function(value)))
    }

    /// Chains another lazy computation on the eventual value.
    #[must_use]
    pub fn flat_map<B: Value>(self, function: impl Fn(A) -> Eval<B> + 'static) -> Eval<B> {
        let continuation: Continuation = Rc::new(move |erased: Erased| function(unerase(erased)).node);
        Eval::from_node(Node::FlatMap(Link::new(self.node), continuation))
    }

    /// Caches the result of this computation after its first evaluation.
    #[must_use]
    pub fn memoize(self) -> Self {
        if matches!(self.node, Node::Now(_) | Node::Memo(_)) {
            self
        } else {
            Self::from_node(Node::Memo(Rc::new(RefCell::new(MemoState::Pending(
                self.node,
            )))))
        }
    }

    /// Returns the value if it is already known without running anything.
    pub fn try_now(&self) -> Option<A> {
        let erased = match &self.node {
            Node::Now(value) => Rc::clone(value),
            Node::Memo(cell) => match &*cell.borrow() {
                MemoState::Done(value) => Rc::clone(value),
                MemoState::Pending(_) => return None,
            },
            _ => return None,
        };
        Some(unerase(erased))
    }
}

impl Eval<()> {
    /// The unit value, already computed.
    pub fn unit() -> Self {
        Self::now(())
    }
}

impl<A: Value + fmt::Debug> fmt::Debug for Eval<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_now() {
            Some(value) => formatter.debug_tuple("Eval").field(&value).finish(),
            None => formatter.write_str("Eval(<pending>)"),
        }
    }
}

static_assertions::assert_not_impl_any!(Eval<i32>: Send, Sync);
