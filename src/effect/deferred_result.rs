//! `DeferredResult` - a deferred computation that always settles with an
//! [`Either`].
//!
//! Failures travel as `Left` inside the resolved value instead of through a
//! rejection channel, so running a `DeferredResult` can never fail: its
//! future always completes with an `Either<L, R>`.
//!
//! # Examples
//!
//! ```rust
//! use futures::executor::block_on;
//! use fp_kit::control::Either;
//! use fp_kit::effect::DeferredResult;
//!
//! let parsed = DeferredResult::try_catch(
//!     || async { "42".parse::<i32>() },
//!     |error| error.to_string(),
//! );
//! assert_eq!(block_on(parsed.map(|n| n + 1).run()), Either::of(43));
//!
//! let rejected = DeferredResult::<String, i32>::from_future(async { Err("x".to_string()) });
//! assert_eq!(block_on(rejected.run()), Either::left("x".to_string()));
//! ```

use std::any::Any;
use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use super::callback::{Reject, Resolve, settle};
use super::deferred::Deferred;
use crate::control::{ApplyError, BoxedFn, Either, PanicError, Property, PropertyNotFound};

/// A lazy asynchronous computation resolving with `Either<L, R>`.
pub struct DeferredResult<L, R> {
    inner: Deferred<Infallible, Either<L, R>>,
}

static_assertions::assert_impl_all!(DeferredResult<String, i32>: Send, Sync, Clone);

/// The outcome of [`DeferredResult::run_if_valid`].
pub enum RunIfValid<L, R> {
    /// The value was a `DeferredResult<L, R>`; this is what its run produced.
    Ran(Either<L, R>),
    /// The value was something else and is handed back untouched.
    Passed(Box<dyn Any + Send>),
}

impl<L, R> RunIfValid<L, R> {
    /// Returns the run result, if the value was run.
    pub fn into_ran(self) -> Option<Either<L, R>> {
        match self {
            Self::Ran(either) => Some(either),
            Self::Passed(_) => None,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for RunIfValid<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ran(either) => formatter.debug_tuple("Ran").field(either).finish(),
            Self::Passed(_) => formatter.debug_tuple("Passed").finish_non_exhaustive(),
        }
    }
}

impl<L, R> Clone for DeferredResult<L, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<L, R> fmt::Debug for DeferredResult<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("DeferredResult").finish_non_exhaustive()
    }
}

impl<L, R> From<DeferredResult<L, R>> for Deferred<Infallible, Either<L, R>> {
    fn from(deferred: DeferredResult<L, R>) -> Self {
        deferred.inner
    }
}

impl<L, R> DeferredResult<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a computation that settles through `resolve`.
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn(Resolve<Either<L, R>>) + Send + Sync + 'static,
    {
        Self {
            inner: Deferred::new(move |_reject: Reject<Infallible>, resolve| computation(resolve)),
        }
    }

    /// Creates a computation that settles from inside the future it returns.
    pub fn new_async<F, Fut>(computation: F) -> Self
    where
        F: Fn(Resolve<Either<L, R>>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            inner: Deferred::new_async(move |_reject: Reject<Infallible>, resolve| {
                computation(resolve)
            }),
        }
    }

    /// Always resolves with `Right(value)`.
    pub fn of(value: R) -> Self
    where
        R: Clone + Sync,
    {
        Self::new(move |resolve| resolve.call(Either::Right(value.clone())))
    }

    /// Always resolves with `Left(error)`.
    pub fn reject(error: L) -> Self
    where
        L: Clone + Sync,
    {
        Self::new(move |resolve| resolve.call(Either::Left(error.clone())))
    }

    /// Always resolves with `either`.
    pub fn from_either(either: Either<L, R>) -> Self
    where
        L: Clone + Sync,
        R: Clone + Sync,
    {
        Self::new(move |resolve| resolve.call(either.clone()))
    }

    /// Runs a fallible async function on every run, mapping its error into
    /// a `Left`.
    pub fn try_catch<E, F, Fut, M>(function: F, mapper: M) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, E>> + Send + 'static,
        M: Fn(E) -> L + Send + Sync + 'static,
    {
        let mapper = Arc::new(mapper);
        Self::new_async(move |resolve| {
            let future = function();
            let mapper = Arc::clone(&mapper);
            async move { resolve.call(Either::from(future.await).map_left(|error| mapper(error))) }
        })
    }

    /// Runs an async function on every run, catching a panic in the future
    /// and turning it into a `Left` via `mapper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use fp_kit::control::Either;
    /// use fp_kit::effect::DeferredResult;
    ///
    /// async fn explode() -> i32 {
    ///     panic!("boom")
    /// }
    ///
    /// let exploding: DeferredResult<String, i32> =
    ///     DeferredResult::try_catch_unwind(explode, |error| error.message);
    /// assert_eq!(block_on(exploding.run()), Either::left("boom".to_string()));
    /// ```
    pub fn try_catch_unwind<F, Fut, M>(function: F, mapper: M) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        M: Fn(PanicError) -> L + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        let mapper = Arc::new(mapper);
        Self::new_async(move |resolve| {
            let function = Arc::clone(&function);
            let mapper = Arc::clone(&mapper);
            async move {
                let outcome = AssertUnwindSafe(async move { function().await })
                    .catch_unwind()
                    .await;
                match outcome {
                    Ok(value) => resolve.call(Either::Right(value)),
                    Err(payload) => {
                        let error = PanicError::from_payload(payload.as_ref());
                        tracing::debug!(message = %error.message, "caught panic in deferred result");
                        resolve.call(Either::Left(mapper(error)));
                    }
                }
            }
        })
    }

    /// Adapts a future producing a `Result`: `Ok` becomes `Right`, `Err`
    /// becomes `Left` unchanged.
    ///
    /// The future is shared, so every run observes the same outcome.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<R, L>> + Send + 'static,
        L: Clone + Sync,
        R: Clone + Sync,
    {
        let shared = future.shared();
        Self::new_async(move |resolve| {
            let shared = shared.clone();
            async move { resolve.call(Either::from(shared.await)) }
        })
    }

    /// Adapts a [`Deferred`]: its rejection becomes a `Left`.
    pub fn from_deferred(deferred: Deferred<L, R>) -> Self {
        Self::new_async(move |resolve| {
            let settled = deferred.run();
            async move { resolve.call(Either::from(settled.await)) }
        })
    }

    /// Converts into a [`Deferred`] that rejects on `Left`.
    pub fn into_deferred(self) -> Deferred<L, R> {
        Deferred::new_async(move |reject, resolve| {
            let settled = self.run();
            async move { settle(reject, resolve, settled.await.into()) }
        })
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Runs the computation. The future always completes with an `Either`.
    pub fn run(&self) -> impl Future<Output = Either<L, R>> + Send + use<L, R> {
        let settled = self.inner.run();
        async move {
            match settled.await {
                Ok(either) => either,
                Err(never) => match never {},
            }
        }
    }

    /// Runs `value` if it is a `DeferredResult<L, R>`; otherwise hands it
    /// back untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use futures::executor::block_on;
    /// use fp_kit::control::Either;
    /// use fp_kit::effect::{DeferredResult, RunIfValid};
    ///
    /// let runnable: Box<dyn Any + Send> = Box::new(DeferredResult::<String, i32>::of(1));
    /// let ran = block_on(DeferredResult::<String, i32>::run_if_valid(runnable));
    /// assert_eq!(ran.into_ran(), Some(Either::of(1)));
    ///
    /// let plain: Box<dyn Any + Send> = Box::new(42_u8);
    /// let passed = block_on(DeferredResult::<String, i32>::run_if_valid(plain));
    /// assert!(matches!(passed, RunIfValid::Passed(value) if value.downcast_ref::<u8>() == Some(&42)));
    /// ```
    pub fn run_if_valid(value: Box<dyn Any + Send>) -> BoxFuture<'static, RunIfValid<L, R>> {
        match value.downcast::<Self>() {
            Ok(deferred) => deferred.run().map(RunIfValid::Ran).boxed(),
            Err(value) => futures::future::ready(RunIfValid::Passed(value)).boxed(),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms a `Right` value; a `Left` passes through.
    pub fn map<R2, F>(&self, function: F) -> DeferredResult<L, R2>
    where
        R2: Send + 'static,
        F: Fn(R) -> R2 + Send + Sync + 'static,
    {
        DeferredResult {
            inner: self.inner.map(move |either| either.map(&function)),
        }
    }

    /// Continues with another `DeferredResult` after a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use fp_kit::control::Either;
    /// use fp_kit::effect::DeferredResult;
    ///
    /// let checked = |n: i32| {
    ///     if n > 0 { DeferredResult::of(n) } else { DeferredResult::reject("not positive".to_string()) }
    /// };
    /// assert_eq!(block_on(DeferredResult::of(3).chain(checked).run()), Either::of(3));
    /// assert_eq!(
    ///     block_on(DeferredResult::of(0).chain(checked).run()),
    ///     Either::left("not positive".to_string())
    /// );
    /// ```
    pub fn chain<R2, F>(&self, function: F) -> DeferredResult<L, R2>
    where
        R2: Send + 'static,
        F: Fn(R) -> DeferredResult<L, R2> + Send + Sync + 'static,
    {
        let source = self.clone();
        let function = Arc::new(function);
        DeferredResult::new_async(move |resolve| {
            let settled = source.run();
            let function = Arc::clone(&function);
            async move {
                match settled.await {
                    Either::Left(error) => resolve.call(Either::Left(error)),
                    Either::Right(value) => resolve.call(function(value).run().await),
                }
            }
        })
    }

    /// Applies the function this computation produces to the value `other`
    /// produces. The function side runs first; the first `Left` wins.
    pub fn ap<A, B>(&self, other: &DeferredResult<L, A>) -> DeferredResult<L, B>
    where
        R: FnOnce(A) -> B,
        A: Send + 'static,
        B: Send + 'static,
    {
        let functions = self.clone();
        let values = other.clone();
        DeferredResult::new_async(move |resolve| {
            let function = functions.run();
            let values = values.clone();
            async move {
                match function.await {
                    Either::Left(error) => resolve.call(Either::Left(error)),
                    Either::Right(function) => resolve.call(values.run().await.map(function)),
                }
            }
        })
    }

    /// Looks up `key` in a `Right` value; a missing key becomes a `Left`
    /// converted from [`PropertyNotFound`].
    pub fn pluck<K>(&self, key: K) -> DeferredResult<L, R::Value>
    where
        K: fmt::Display + Send + Sync + 'static,
        R: Property<K>,
        R::Value: Send + 'static,
        L: From<PropertyNotFound>,
    {
        DeferredResult {
            inner: self.inner.map(move |either| either.pluck(&key)),
        }
    }
}

impl<L> DeferredResult<L, Box<dyn Any + Send>>
where
    L: From<ApplyError> + Send + 'static,
{
    /// Applies a type-erased function payload.
    ///
    /// A payload that is not a [`BoxedFn<A, B>`] resolves with
    /// `Left(ApplyError::NotAFunction)` converted into `L`.
    pub fn ap_dyn<A, B>(&self, other: &DeferredResult<L, A>) -> DeferredResult<L, B>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        let functions = self.clone();
        let values = other.clone();
        DeferredResult::new_async(move |resolve| {
            let function = functions.run();
            let values = values.clone();
            async move {
                match function.await {
                    Either::Left(error) => resolve.call(Either::Left(error)),
                    Either::Right(payload) => match payload.downcast::<BoxedFn<A, B>>() {
                        Ok(function) => resolve.call(values.run().await.map(*function)),
                        Err(_) => resolve.call(Either::Left(L::from(ApplyError::NotAFunction))),
                    },
                }
            }
        })
    }
}

// =============================================================================
// Point-free Functions
// =============================================================================

/// Point-free [`DeferredResult::map`].
pub fn map<L, R, R2, F>(function: F) -> impl FnOnce(DeferredResult<L, R>) -> DeferredResult<L, R2>
where
    L: Send + 'static,
    R: Send + 'static,
    R2: Send + 'static,
    F: Fn(R) -> R2 + Send + Sync + 'static,
{
    move |deferred| deferred.map(function)
}

/// Point-free [`DeferredResult::chain`].
pub fn chain<L, R, R2, F>(function: F) -> impl FnOnce(DeferredResult<L, R>) -> DeferredResult<L, R2>
where
    L: Send + 'static,
    R: Send + 'static,
    R2: Send + 'static,
    F: Fn(R) -> DeferredResult<L, R2> + Send + Sync + 'static,
{
    move |deferred| deferred.chain(function)
}

/// Point-free [`DeferredResult::ap`]: the function side is fixed first.
pub fn ap<L, F, A, B>(
    function: DeferredResult<L, F>,
) -> impl FnOnce(DeferredResult<L, A>) -> DeferredResult<L, B>
where
    L: Send + 'static,
    F: FnOnce(A) -> B + Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
{
    move |value| function.ap(&value)
}

/// Point-free [`DeferredResult::pluck`].
pub fn pluck<L, R, K>(key: K) -> impl FnOnce(DeferredResult<L, R>) -> DeferredResult<L, R::Value>
where
    L: From<PropertyNotFound> + Send + 'static,
    R: Property<K> + Send + 'static,
    R::Value: Send + 'static,
    K: fmt::Display + Send + Sync + 'static,
{
    move |deferred| deferred.pluck(key)
}

/// [`DeferredResult::run`] as a free function.
pub fn run<L, R>(deferred: &DeferredResult<L, R>) -> impl Future<Output = Either<L, R>> + Send + use<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    deferred.run()
}
