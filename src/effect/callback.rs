//! Single-shot settle callbacks handed to a `Deferred` computation.
//!
//! A computation receives a [`Reject`] and a [`Resolve`]. Calling one
//! consumes it, and a pair created by [`callbacks`] shares one settle slot:
//! whichever is called first wins and the other becomes a no-op.

use std::sync::Arc;

use parking_lot::Mutex;

type Settle<E, A> = Box<dyn FnOnce(Result<A, E>) + Send>;

/// The failure callback of a deferred computation.
pub struct Reject<E> {
    settle: Box<dyn FnOnce(E) + Send>,
}

/// The success callback of a deferred computation.
pub struct Resolve<A> {
    settle: Box<dyn FnOnce(A) + Send>,
}

impl<E> Reject<E> {
    /// Wraps a standalone failure handler.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: FnOnce(E) + Send + 'static,
    {
        Self {
            settle: Box::new(function),
        }
    }

    /// Settles the computation with `error`.
    pub fn call(self, error: E) {
        (self.settle)(error);
    }
}

impl<A> Resolve<A> {
    /// Wraps a standalone success handler.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: FnOnce(A) + Send + 'static,
    {
        Self {
            settle: Box::new(function),
        }
    }

    /// Settles the computation with `value`.
    pub fn call(self, value: A) {
        (self.settle)(value);
    }
}

/// Creates a reject/resolve pair feeding one outcome handler.
///
/// `settle` runs at most once, with the outcome of whichever callback is
/// called first. Dropping both callbacks without calling either drops
/// `settle` unrun.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use fp_kit::effect::callbacks;
///
/// let outcomes = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&outcomes);
/// let (reject, resolve) = callbacks(move |outcome: Result<i32, &str>| sink.lock().unwrap().push(outcome));
///
/// resolve.call(1);
/// reject.call("too late");
/// assert_eq!(*outcomes.lock().unwrap(), vec![Ok(1)]);
/// ```
pub fn callbacks<E, A, F>(settle: F) -> (Reject<E>, Resolve<A>)
where
    E: 'static,
    A: 'static,
    F: FnOnce(Result<A, E>) + Send + 'static,
{
    let slot: Arc<Mutex<Option<Settle<E, A>>>> = Arc::new(Mutex::new(Some(Box::new(settle))));
    let reject_slot = Arc::clone(&slot);
    let reject = Reject::from_fn(move |error| {
        let settle = reject_slot.lock().take();
        if let Some(settle) = settle {
            settle(Err(error));
        }
    });
    let resolve = Resolve::from_fn(move |value| {
        let settle = slot.lock().take();
        if let Some(settle) = settle {
            settle(Ok(value));
        }
    });
    (reject, resolve)
}

/// Settles with an outcome: `Err` goes to `reject`, `Ok` to `resolve`.
pub fn settle<E, A>(reject: Reject<E>, resolve: Resolve<A>, outcome: Result<A, E>) {
    match outcome {
        Ok(value) => resolve.call(value),
        Err(error) => reject.call(error),
    }
}
