//! Deferred - a lazy, re-runnable asynchronous computation.
//!
//! A [`Deferred<E, A>`] describes a computation that eventually either
//! rejects with an `E` or resolves with an `A`. Nothing happens until it is
//! run; every run invokes the computation again.
//!
//! The computation receives a [`Reject`] and a [`Resolve`] callback and
//! returns a driver future. Synchronous computations settle immediately and
//! return a completed driver; asynchronous ones settle from inside the
//! driver, or from anywhere else the callbacks are moved to.
//!
//! # Examples
//!
//! ```rust
//! use futures::executor::block_on;
//! use fp_kit::effect::Deferred;
//!
//! let answer: Deferred<String, i32> = Deferred::of(41).map(|x| x + 1);
//! assert_eq!(block_on(answer.run()), Ok(42));
//!
//! let failure: Deferred<String, i32> = Deferred::reject("bad".to_string());
//! assert_eq!(block_on(failure.map(|x| x + 1).run()), Err("bad".to_string()));
//! ```
//!
//! # Never settling
//!
//! [`Deferred::empty`] calls neither callback. Running it yields a future that
//! stays pending forever without blocking the thread:
//!
//! ```rust
//! use futures::FutureExt;
//! use fp_kit::effect::Deferred;
//!
//! let never: Deferred<(), i32> = Deferred::empty();
//! assert!(never.run().now_or_never().is_none());
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::channel::oneshot;
use futures::future::{self, BoxFuture, FutureExt};

use super::callback::{Reject, Resolve, callbacks, settle};
use crate::control::{Property, PropertyNotFound};

type Computation<E, A> = dyn Fn(Reject<E>, Resolve<A>) -> BoxFuture<'static, ()> + Send + Sync;

/// A lazy asynchronous computation that rejects with `E` or resolves
/// with `A`.
///
/// Cloning is cheap and shares the computation.
pub struct Deferred<E, A> {
    computation: Arc<Computation<E, A>>,
}

static_assertions::assert_impl_all!(Deferred<String, i32>: Send, Sync, Clone);

impl<E, A> Clone for Deferred<E, A> {
    fn clone(&self) -> Self {
        Self {
            computation: Arc::clone(&self.computation),
        }
    }
}

impl<E, A> fmt::Debug for Deferred<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Deferred").finish_non_exhaustive()
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<E, A> Deferred<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Creates a deferred from a computation that settles synchronously or
    /// hands its callbacks elsewhere.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use fp_kit::effect::Deferred;
    ///
    /// let even = |n: i32| {
    ///     Deferred::new(move |reject, resolve| {
    ///         if n % 2 == 0 { resolve.call(n) } else { reject.call(format!("{n} is odd")) }
    ///     })
    /// };
    /// assert_eq!(block_on(even(4).run()), Ok(4));
    /// assert_eq!(block_on(even(3).run()), Err("3 is odd".to_string()));
    /// ```
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn(Reject<E>, Resolve<A>) + Send + Sync + 'static,
    {
        Self::new_async(move |reject, resolve| {
            computation(reject, resolve);
            future::ready(())
        })
    }

    /// Creates a deferred from a computation that settles from inside the
    /// future it returns.
    pub fn new_async<F, Fut>(computation: F) -> Self
    where
        F: Fn(Reject<E>, Resolve<A>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            computation: Arc::new(move |reject: Reject<E>, resolve: Resolve<A>| {
                computation(reject, resolve).boxed()
            }),
        }
    }

    /// A deferred that always resolves with `value`.
    pub fn of(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move |_reject, resolve| resolve.call(value.clone()))
    }

    /// A deferred that always rejects with `error`.
    pub fn reject(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move |reject, _resolve| reject.call(error.clone()))
    }

    /// Adapts a future producing a `Result`.
    ///
    /// The future is shared: it is polled at most once to completion, and
    /// every run observes the same outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use fp_kit::effect::Deferred;
    ///
    /// let fetched = Deferred::from_future(async { Ok::<_, String>(7) });
    /// assert_eq!(block_on(fetched.run()), Ok(7));
    /// assert_eq!(block_on(fetched.run()), Ok(7));
    /// ```
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<A, E>> + Send + 'static,
        A: Clone + Sync,
        E: Clone + Sync,
    {
        let shared = future.shared();
        Self::new_async(move |reject, resolve| {
            let shared = shared.clone();
            async move { settle(reject, resolve, shared.await) }
        })
    }

    /// Adapts a function producing a fresh future on every run.
    pub fn from_fn<F, Fut>(function: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        Self::new_async(move |reject, resolve| {
            let future = function();
            async move { settle(reject, resolve, future.await) }
        })
    }

    /// A deferred that never settles.
    pub fn empty() -> Self {
        Self::new(|_reject, _resolve| {})
    }

    // =========================================================================
    // Running
    // =========================================================================

    pub(crate) fn drive(&self, reject: Reject<E>, resolve: Resolve<A>) -> BoxFuture<'static, ()> {
        (self.computation)(reject, resolve)
    }

    /// Invokes the computation with plain handlers and returns its driver.
    ///
    /// At most one of the handlers runs. The driver must be polled for
    /// asynchronous computations to make progress.
    pub fn fork<R, S>(&self, on_reject: R, on_resolve: S) -> BoxFuture<'static, ()>
    where
        R: FnOnce(E) + Send + 'static,
        S: FnOnce(A) + Send + 'static,
    {
        let (reject, resolve) = callbacks(move |outcome| match outcome {
            Ok(value) => on_resolve(value),
            Err(error) => on_reject(error),
        });
        self.drive(reject, resolve)
    }

    /// Runs the computation.
    ///
    /// The computation is invoked when `run` is called, not when the returned
    /// future is first polled, so dropping the future unpolled still performs
    /// any synchronous side effects. The future settles with `Ok` on resolve
    /// and `Err` on reject, and completes only once the computation's driver
    /// has finished as well. If the computation drops both callbacks without
    /// calling either, the future stays pending forever.
    pub fn run(&self) -> impl Future<Output = Result<A, E>> + Send + use<E, A> {
        let (sender, receiver) = oneshot::channel();
        let (reject, resolve) = callbacks(move |outcome| {
            // the run future may have been dropped
            let _ = sender.send(outcome);
        });
        let driver = self.drive(reject, resolve);
        async move {
            let received = match future::select(driver, receiver).await {
                future::Either::Left(((), receiver)) => receiver.await,
                future::Either::Right((received, driver)) => {
                    // work after settling still runs to completion
                    driver.await;
                    received
                }
            };
            match received {
                Ok(outcome) => outcome,
                Err(oneshot::Canceled) => future::pending().await,
            }
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms the resolved value.
    pub fn map<B, F>(&self, function: F) -> Deferred<E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let source = Arc::clone(&self.computation);
        let function = Arc::new(function);
        Deferred::new_async(move |reject, resolve: Resolve<B>| {
            let function = Arc::clone(&function);
            source(reject, Resolve::from_fn(move |value| resolve.call(function(value))))
        })
    }

    /// Continues with another deferred once this one resolves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use fp_kit::effect::Deferred;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Deferred::of(n / 2) } else { Deferred::reject("odd") };
    /// assert_eq!(block_on(Deferred::of(8).chain(half).chain(half).run()), Ok(2));
    /// assert_eq!(block_on(Deferred::of(6).chain(half).chain(half).run()), Err("odd"));
    /// ```
    pub fn chain<B, F>(&self, function: F) -> Deferred<E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> Deferred<E, B> + Send + Sync + 'static,
    {
        let source = self.clone();
        let function = Arc::new(function);
        Deferred::new_async(move |reject, resolve| {
            let settled = source.run();
            let function = Arc::clone(&function);
            async move {
                match settled.await {
                    Ok(value) => function(value).drive(reject, resolve).await,
                    Err(error) => reject.call(error),
                }
            }
        })
    }

    /// Applies the function this deferred resolves with to the value `other`
    /// resolves with.
    ///
    /// The function side runs first, then the value side. The first
    /// rejection wins.
    pub fn ap<V, B>(&self, other: &Deferred<E, V>) -> Deferred<E, B>
    where
        A: FnOnce(V) -> B,
        V: Send + 'static,
        B: Send + 'static,
    {
        let functions = self.clone();
        let values = other.clone();
        Deferred::new_async(move |reject, resolve| {
            let function = functions.run();
            let values = values.clone();
            async move {
                match function.await {
                    Ok(function) => settle(reject, resolve, values.run().await.map(function)),
                    Err(error) => reject.call(error),
                }
            }
        })
    }

    /// Recovers from a rejection with another deferred.
    pub fn or_else<E2, F>(&self, function: F) -> Deferred<E2, A>
    where
        E2: Send + 'static,
        F: Fn(E) -> Deferred<E2, A> + Send + Sync + 'static,
    {
        let source = self.clone();
        let function = Arc::new(function);
        Deferred::new_async(move |reject, resolve| {
            let settled = source.run();
            let function = Arc::clone(&function);
            async move {
                match settled.await {
                    Ok(value) => resolve.call(value),
                    Err(error) => function(error).drive(reject, resolve).await,
                }
            }
        })
    }

    /// Runs the computation and folds both outcomes into one value.
    ///
    /// The returned future always completes with a `B` once the computation
    /// settles.
    pub fn fold<B, G, H>(
        &self,
        on_error: G,
        on_success: H,
    ) -> impl Future<Output = B> + Send + use<E, A, B, G, H>
    where
        G: FnOnce(E) -> B + Send + 'static,
        H: FnOnce(A) -> B + Send + 'static,
    {
        let settled = self.run();
        async move {
            match settled.await {
                Ok(value) => on_success(value),
                Err(error) => on_error(error),
            }
        }
    }

    /// Looks up `key` in the resolved value.
    ///
    /// A missing key rejects with `E::from(PropertyNotFound)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use futures::executor::block_on;
    /// use fp_kit::effect::Deferred;
    ///
    /// let user: Deferred<String, _> = Deferred::of(HashMap::from([("name", "ada")]));
    /// assert_eq!(block_on(user.pluck("name").run()), Ok("ada"));
    /// assert_eq!(block_on(user.pluck("age").run()), Err("'age' not found".to_string()));
    /// ```
    pub fn pluck<K>(&self, key: K) -> Deferred<E, A::Value>
    where
        K: fmt::Display + Send + Sync + 'static,
        A: Property<K>,
        A::Value: Send + 'static,
        E: From<PropertyNotFound>,
    {
        let source = self.clone();
        let key = Arc::new(key);
        Deferred::new_async(move |reject, resolve| {
            let settled = source.run();
            let key = Arc::clone(&key);
            async move {
                let outcome = settled.await.and_then(|object| {
                    object
                        .property(&*key)
                        .ok_or_else(|| E::from(PropertyNotFound::new(&*key)))
                });
                settle(reject, resolve, outcome);
            }
        })
    }
}

// =============================================================================
// Point-free Functions
// =============================================================================

/// Point-free [`Deferred::map`].
pub fn map<E, A, B, F>(function: F) -> impl FnOnce(Deferred<E, A>) -> Deferred<E, B>
where
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    move |deferred| deferred.map(function)
}

/// Point-free [`Deferred::chain`].
pub fn chain<E, A, B, F>(function: F) -> impl FnOnce(Deferred<E, A>) -> Deferred<E, B>
where
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    F: Fn(A) -> Deferred<E, B> + Send + Sync + 'static,
{
    move |deferred| deferred.chain(function)
}

/// Point-free [`Deferred::ap`]: the function side is fixed first.
pub fn ap<E, F, V, B>(function: Deferred<E, F>) -> impl FnOnce(Deferred<E, V>) -> Deferred<E, B>
where
    E: Send + 'static,
    F: FnOnce(V) -> B + Send + 'static,
    V: Send + 'static,
    B: Send + 'static,
{
    move |value| function.ap(&value)
}

/// Point-free [`Deferred::or_else`].
pub fn or_else<E, E2, A, F>(function: F) -> impl FnOnce(Deferred<E, A>) -> Deferred<E2, A>
where
    E: Send + 'static,
    E2: Send + 'static,
    A: Send + 'static,
    F: Fn(E) -> Deferred<E2, A> + Send + Sync + 'static,
{
    move |deferred| deferred.or_else(function)
}

/// Point-free [`Deferred::fold`].
pub fn fold<E, A, B, G, H>(on_error: G, on_success: H) -> impl FnOnce(Deferred<E, A>) -> BoxFuture<'static, B>
where
    E: Send + 'static,
    A: Send + 'static,
    B: 'static,
    G: FnOnce(E) -> B + Send + 'static,
    H: FnOnce(A) -> B + Send + 'static,
{
    move |deferred| deferred.fold(on_error, on_success).boxed()
}

/// Point-free [`Deferred::pluck`].
pub fn pluck<E, A, K>(key: K) -> impl FnOnce(Deferred<E, A>) -> Deferred<E, A::Value>
where
    E: From<PropertyNotFound> + Send + 'static,
    A: Property<K> + Send + 'static,
    A::Value: Send + 'static,
    K: fmt::Display + Send + Sync + 'static,
{
    move |deferred| deferred.pluck(key)
}

/// [`Deferred::run`] as a free function.
pub fn run<E, A>(deferred: &Deferred<E, A>) -> impl Future<Output = Result<A, E>> + Send + use<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    deferred.run()
}
