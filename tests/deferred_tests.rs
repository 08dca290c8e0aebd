#![cfg(feature = "async")]
//! Integration tests for `Deferred`.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use fp_kit::effect::{Deferred, deferred};
use fp_kit::pipe;
use futures::FutureExt;
use rstest::rstest;

// =============================================================================
// Construction and Running
// =============================================================================

#[rstest]
#[tokio::test]
async fn of_resolves_with_value() {
    let deferred: Deferred<String, i32> = Deferred::of(5);
    assert_eq!(deferred.run().await, Ok(5));
}

#[rstest]
#[tokio::test]
async fn reject_settles_with_error() {
    let deferred: Deferred<String, i32> = Deferred::reject("bad".to_string());
    assert_eq!(deferred.run().await, Err("bad".to_string()));
}

#[rstest]
#[tokio::test]
async fn computation_runs_again_on_every_run() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let deferred: Deferred<(), usize> = Deferred::new(move |_reject, resolve| {
        resolve.call(counter.fetch_add(1, Ordering::SeqCst) + 1);
    });

    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert_eq!(deferred.run().await, Ok(1));
    assert_eq!(deferred.run().await, Ok(2));
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test]
async fn only_first_settlement_counts() {
    let deferred: Deferred<&str, i32> = Deferred::new(|reject, resolve| {
        resolve.call(1);
        reject.call("late");
    });
    assert_eq!(deferred.run().await, Ok(1));
}

#[rstest]
#[tokio::test]
async fn settles_from_spawned_task() {
    let deferred: Deferred<String, &str> = Deferred::new(|_reject, resolve| {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            resolve.call("later");
        });
    });
    assert_eq!(deferred.run().await, Ok("later"));
}

#[rstest]
#[tokio::test]
async fn new_async_settles_inside_driver() {
    let deferred: Deferred<String, u32> = Deferred::new_async(|_reject, resolve| async move {
        tokio::task::yield_now().await;
        resolve.call(9);
    });
    assert_eq!(deferred.run().await, Ok(9));
}

#[rstest]
#[tokio::test]
async fn work_after_resolve_runs_to_completion() {
    let finished = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&finished);
    let deferred: Deferred<String, u32> = Deferred::new_async(move |_reject, resolve| {
        let flag = Arc::clone(&flag);
        async move {
            resolve.call(1);
            tokio::task::yield_now().await;
            flag.store(true, Ordering::SeqCst);
        }
    });

    assert_eq!(deferred.run().await, Ok(1));
    assert!(finished.load(Ordering::SeqCst));

    finished.store(false, Ordering::SeqCst);
    let chained = deferred.chain(|value| Deferred::of(value + 1));
    assert_eq!(chained.run().await, Ok(2));
    assert!(finished.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn work_after_reject_runs_to_completion() {
    let cleaned_up = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cleaned_up);
    let deferred: Deferred<&str, u32> = Deferred::new_async(move |reject, _resolve| {
        let flag = Arc::clone(&flag);
        async move {
            reject.call("failed");
            tokio::task::yield_now().await;
            flag.store(true, Ordering::SeqCst);
        }
    });

    let rendered = deferred.fold(|error| error.to_string(), |value| value.to_string()).await;
    assert_eq!(rendered, "failed");
    assert!(cleaned_up.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn run_invokes_computation_before_first_poll() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let deferred: Deferred<String, usize> = Deferred::new(move |_reject, resolve| {
        resolve.call(counter.fetch_add(1, Ordering::SeqCst));
    });

    let pending = deferred.run();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(pending.await, Ok(0));
}

#[rstest]
fn empty_never_settles() {
    let never: Deferred<String, i32> = Deferred::empty();
    assert!(never.run().now_or_never().is_none());
    assert!(never.map(|x| x + 1).run().now_or_never().is_none());
}

#[rstest]
#[tokio::test]
async fn from_fn_builds_fresh_future_each_run() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let deferred: Deferred<String, usize> = Deferred::from_fn(move || {
        let counter = Arc::clone(&counter);
        async move { Ok(counter.fetch_add(1, Ordering::SeqCst)) }
    });
    assert_eq!(deferred.run().await, Ok(0));
    assert_eq!(deferred.run().await, Ok(1));
}

#[rstest]
#[tokio::test]
async fn from_future_polls_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let deferred: Deferred<String, i32> = Deferred::from_future(async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Err("x".to_string())
    });
    assert_eq!(deferred.run().await, Err("x".to_string()));
    assert_eq!(deferred.run().await, Err("x".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
#[tokio::test]
async fn map_and_chain_compose() {
    let parsed: Deferred<String, i32> = Deferred::of("21")
        .chain(|text: &str| match text.parse::<i32>() {
            Ok(value) => Deferred::of(value),
            Err(error) => Deferred::reject(error.to_string()),
        })
        .map(|value| value * 2);
    assert_eq!(parsed.run().await, Ok(42));
}

#[rstest]
#[tokio::test]
async fn chain_does_not_run_after_rejection() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let deferred: Deferred<&str, i32> = Deferred::reject("stop").chain(move |value: i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        Deferred::of(value)
    });
    assert_eq!(deferred.run().await, Err("stop"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn ap_applies_resolved_function() {
    let function: Deferred<String, fn(i32) -> i32> = Deferred::of(|x| x + 100);
    let value: Deferred<String, i32> = Deferred::of(1);
    assert_eq!(function.ap(&value).run().await, Ok(101));
}

#[rstest]
#[tokio::test]
async fn ap_reports_function_rejection_first() {
    let function: Deferred<&str, fn(i32) -> i32> = Deferred::reject("no function");
    let value: Deferred<&str, i32> = Deferred::reject("no value");
    assert_eq!(function.ap(&value).run().await, Err("no function"));
}

#[rstest]
#[tokio::test]
async fn or_else_recovers() {
    let recovered: Deferred<String, i32> = Deferred::<&str, i32>::reject("missing")
        .or_else(|error| Deferred::of(i32::try_from(error.len()).unwrap_or_default()));
    assert_eq!(recovered.run().await, Ok(7));
}

#[rstest]
#[tokio::test]
async fn fold_collapses_outcomes() {
    let failure: Deferred<String, i32> = Deferred::reject("e".to_string());
    let rendered = failure.fold(|e| format!("failed: {e}"), |v| v.to_string()).await;
    assert_eq!(rendered, "failed: e");
}

#[rstest]
#[tokio::test]
async fn pluck_missing_key_rejects() {
    let record: Deferred<String, HashMap<String, i32>> =
        Deferred::of(HashMap::from([("guff".to_string(), 1)]));
    assert_eq!(record.pluck("guff".to_string()).run().await, Ok(1));
    assert_eq!(
        record.pluck("nope".to_string()).run().await,
        Err("'nope' not found".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn fork_calls_exactly_one_handler() {
    let resolved = Arc::new(AtomicUsize::new(0));
    let rejected = Arc::new(AtomicUsize::new(0));
    let (on_resolve, on_reject) = (Arc::clone(&resolved), Arc::clone(&rejected));

    Deferred::<String, i32>::of(1)
        .fork(
            move |_| {
                on_reject.fetch_add(1, Ordering::SeqCst);
            },
            move |_| {
                on_resolve.fetch_add(1, Ordering::SeqCst);
            },
        )
        .await;

    assert_eq!(resolved.load(Ordering::SeqCst), 1);
    assert_eq!(rejected.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Point-free Style
// =============================================================================

#[rstest]
#[tokio::test]
async fn pipeline_of_free_functions() {
    let doubled = pipe!(
        Deferred::<String, i32>::of(4),
        deferred::map(|x: i32| x * 2),
        deferred::chain(|x: i32| Deferred::of(x + 1))
    );
    assert_eq!(deferred::run(&doubled).await, Ok(9));

    let folded = pipe!(doubled, deferred::fold(|_: String| 0, |x: i32| x)).await;
    assert_eq!(folded, 9);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn runs_on_multi_threaded_runtime() {
    let deferred: Deferred<String, i32> = Deferred::of(20).map(|x| x + 1);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let deferred = deferred.clone();
            tokio::spawn(async move { deferred.run().await })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap(), Ok(21));
    }
}
