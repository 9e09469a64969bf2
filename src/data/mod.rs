//! Concrete data types with type class instances.
//!
//! | type | witness | highlights |
//! |---|---|---|
//! | [`Id`] | [`IdK`] | the trivial monad and comonad |
//! | [`Validated`] | [`ValidatedK`], [`ValidatedK2`] | error-accumulating applicative, no monad |
//! | [`NonEmptyVec`] | [`NonEmptyVecK`] | monad and comonad |
//! | [`Const`] | [`ConstK`] | phantom functor, monoidal applicative |
//! | `F<G<A>>` | [`ComposeK`] | functor composition |
//! | [`IndexedState`], [`State`] | [`IndexedStateK`], [`StateK`] | `MonadState`, pairs with `Store` |
//! | [`StateT`] | [`StateTK`] | state over any base monad |
//! | [`Reader`] | [`ReaderK`] | `MonadReader`, pairs with `Env` |
//! | [`Writer`] | [`WriterK`] | `MonadWriter`, pairs with `Traced` |
//! | [`Store`] | [`StoreK`] | `ComonadStore` |
//! | [`Env`] | [`EnvK`] | `ComonadEnv` |
//! | [`Traced`] | [`TracedK`] | `ComonadTraced` |
//! | [`Co`] | [`CoK`] | the monad of a comonad |
//! | [`Op`] | [`OpK`] | `Decidable` consumers |
//! | [`Function1`] | [`Function1K2`] | `Profunctor` |
//! | `(A, B)` | [`TupleK2`] | `Bifunctor` |

mod co;
mod compose;
mod constant;
mod env;
mod function;
mod id;
mod non_empty;
mod op;
mod reader;
mod state;
mod state_t;
mod store;
mod traced;
mod tuple;
mod validated;
mod writer;

pub use co::{Co, CoK};
pub use compose::ComposeK;
pub use constant::{Const, ConstK};
pub use env::{Env, EnvK};
pub use function::{Function1, Function1K2};
pub use id::{Id, IdK};
pub use non_empty::{NonEmptyVec, NonEmptyVecK};
pub use op::{Op, OpK};
pub use reader::{Reader, ReaderK};
pub use state::{IndexedState, IndexedStateK, State, StateK, map_accumulate, zip_with_index};
pub use state_t::{StateT, StateTK};
pub use store::{Store, StoreK};
pub use traced::{Traced, TracedK};
pub use tuple::TupleK2;
pub use validated::{Validated, ValidatedK, ValidatedK2};
pub use writer::{Writer, WriterK};

static_assertions::assert_impl_all!(IdK: Send, Sync);
static_assertions::assert_impl_all!(NonEmptyVecK: Send, Sync);
static_assertions::assert_impl_all!(StateK<i32>: Send, Sync);
static_assertions::assert_impl_all!(Function1K2: Send, Sync);
static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);
