#![cfg(feature = "async")]
//! Integration tests for `DeferredResult`.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fp_kit::control::{Either, erase_fn};
use fp_kit::effect::{Deferred, DeferredResult, RunIfValid, deferred_result};
use fp_kit::pipe;
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[tokio::test]
async fn of_and_reject_resolve_with_either() {
    assert_eq!(DeferredResult::<String, i32>::of(1).run().await, Either::of(1));
    assert_eq!(
        DeferredResult::<String, i32>::reject("no".to_string()).run().await,
        Either::left("no".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn from_future_turns_error_into_left() {
    let result = DeferredResult::<String, i32>::from_future(async { Err("x".to_string()) });
    assert_eq!(result.run().await, Either::left("x".to_string()));
}

#[rstest]
#[tokio::test]
async fn try_catch_maps_error_and_reruns() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let flaky = DeferredResult::try_catch(
        move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(std::io::Error::other("first attempt fails"))
                } else {
                    Ok(attempt)
                }
            }
        },
        |error| error.to_string(),
    );

    assert_eq!(flaky.run().await, Either::left("first attempt fails".to_string()));
    assert_eq!(flaky.run().await, Either::of(1));
}

async fn explode() -> i32 {
    panic!("boom")
}

#[rstest]
#[tokio::test]
async fn try_catch_unwind_turns_panic_into_left() {
    let exploding: DeferredResult<String, i32> =
        DeferredResult::try_catch_unwind(explode, |error| error.message);
    let joined = tokio::spawn(async move { exploding.run().await }).await;
    assert_eq!(joined.unwrap(), Either::left("boom".to_string()));
}

#[rstest]
#[tokio::test]
async fn try_catch_unwind_keeps_success_and_reruns() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let counted: DeferredResult<String, usize> = DeferredResult::try_catch_unwind(
        move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move { attempt * 10 }
        },
        |error| error.message,
    );

    assert_eq!(counted.run().await, Either::of(0));
    assert_eq!(counted.map(|x| x + 1).run().await, Either::of(11));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test]
async fn from_either_replays_value() {
    let stored: DeferredResult<String, &str> = DeferredResult::from_either(Either::of("kept"));
    assert_eq!(stored.run().await, Either::of("kept"));
    assert_eq!(stored.run().await, Either::of("kept"));
}

#[rstest]
#[tokio::test]
async fn converts_to_and_from_deferred() {
    let rejected: Deferred<String, i32> = Deferred::reject("down".to_string());
    let lifted = DeferredResult::from_deferred(rejected);
    assert_eq!(lifted.run().await, Either::left("down".to_string()));

    let lowered = lifted.into_deferred();
    assert_eq!(lowered.run().await, Err("down".to_string()));
}

#[rstest]
#[tokio::test]
async fn settles_from_spawned_task() {
    let later: DeferredResult<String, u8> = DeferredResult::new(|resolve| {
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            resolve.call(Either::of(7));
        });
    });
    assert_eq!(later.run().await, Either::of(7));
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
#[tokio::test]
async fn map_skips_left() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let failure = DeferredResult::<&str, i32>::reject("err").map(move |x| {
        counter.fetch_add(1, Ordering::SeqCst);
        x + 1
    });
    assert_eq!(failure.run().await, Either::left("err"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn chain_sequences_dependent_steps() {
    let lookup = |id: u32| {
        if id == 1 {
            DeferredResult::of("ada".to_string())
        } else {
            DeferredResult::reject(format!("user {id} not found"))
        }
    };

    assert_eq!(DeferredResult::of(1).chain(lookup).run().await, Either::of("ada".to_string()));
    assert_eq!(
        DeferredResult::of(2).chain(lookup).run().await,
        Either::left("user 2 not found".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn ap_combines_independent_results() {
    let function: DeferredResult<String, fn(i32) -> i32> = DeferredResult::of(|x| x * 3);
    let value: DeferredResult<String, i32> = DeferredResult::of(5);
    assert_eq!(function.ap(&value).run().await, Either::of(15));

    let missing: DeferredResult<String, i32> = DeferredResult::reject("no value".to_string());
    assert_eq!(function.ap(&missing).run().await, Either::left("no value".to_string()));
}

#[rstest]
#[tokio::test]
async fn ap_dyn_rejects_non_function_payload() {
    let payload: DeferredResult<String, Box<dyn Any + Send>> =
        DeferredResult::new(|resolve| resolve.call(Either::of(Box::new(3_i32) as Box<dyn Any + Send>)));
    let value: DeferredResult<String, i32> = DeferredResult::of(1);
    assert_eq!(
        payload.ap_dyn::<i32, i32>(&value).run().await,
        Either::left("value is not a function".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn ap_dyn_applies_erased_function() {
    let payload: DeferredResult<String, Box<dyn Any + Send>> =
        DeferredResult::new(|resolve| resolve.call(Either::of(erase_fn(|x: i32| x - 1))));
    let value: DeferredResult<String, i32> = DeferredResult::of(10);
    assert_eq!(payload.ap_dyn::<i32, i32>(&value).run().await, Either::of(9));
}

#[rstest]
#[tokio::test]
async fn pluck_missing_key_is_left() {
    let record: DeferredResult<String, HashMap<String, i32>> =
        DeferredResult::of(HashMap::from([("name".to_string(), 1)]));
    assert_eq!(
        record.pluck("guff".to_string()).run().await,
        Either::left("'guff' not found".to_string())
    );
}

// =============================================================================
// Type-erased Runs
// =============================================================================

#[rstest]
#[tokio::test]
async fn run_if_valid_runs_matching_type() {
    let boxed: Box<dyn Any + Send> = Box::new(DeferredResult::<String, i32>::of(5));
    let outcome = DeferredResult::<String, i32>::run_if_valid(boxed).await;
    assert_eq!(outcome.into_ran(), Some(Either::of(5)));
}

#[rstest]
#[tokio::test]
async fn run_if_valid_passes_other_values_through() {
    let boxed: Box<dyn Any + Send> = Box::new("plain text");
    let outcome = DeferredResult::<String, i32>::run_if_valid(boxed).await;
    match outcome {
        RunIfValid::Passed(value) => assert_eq!(value.downcast_ref::<&str>(), Some(&"plain text")),
        RunIfValid::Ran(either) => panic!("unexpected run: {either:?}"),
    }
}

// =============================================================================
// Point-free Style
// =============================================================================

#[rstest]
#[tokio::test]
async fn pipeline_of_free_functions() {
    let total = pipe!(
        DeferredResult::<String, i32>::of(2),
        deferred_result::map(|x: i32| x + 3),
        deferred_result::chain(|x: i32| DeferredResult::of(x * 10))
    );
    assert_eq!(deferred_result::run(&total).await, Either::of(50));
}
