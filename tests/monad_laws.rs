//! Property-based tests for the Monad laws.
//!
//! 1. **Left Identity**: `of(a).chain(f) == f(a)`
//! 2. **Right Identity**: `m.chain(of) == m`
//! 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//!
//! The asynchronous containers are checked by running both sides.

use fp_kit::control::{Either, Maybe};
use fp_kit::typeclass::Monad;
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::of)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Either::left),
        any::<i32>().prop_map(Either::of),
    ]
}

fn halve_maybe(value: i32) -> Maybe<i32> {
    if value % 2 == 0 { Maybe::just(value / 2) } else { Maybe::nothing() }
}

fn decrement_maybe(value: i32) -> Maybe<i32> {
    value.checked_sub(1).map_or(Maybe::nothing(), Maybe::just)
}

fn halve_either(value: i32) -> Either<String, i32> {
    if value % 2 == 0 { Either::of(value / 2) } else { Either::left(format!("{value} is odd")) }
}

fn negate_either(value: i32) -> Either<String, i32> {
    value.checked_neg().map_or_else(|| Either::left("overflow".to_string()), Either::of)
}

// =============================================================================
// Maybe
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::just(value).chain(halve_maybe), halve_maybe(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in maybe_strategy()) {
        prop_assert_eq!(value.chain(Maybe::just), value);
    }

    #[test]
    fn prop_maybe_associativity(value in maybe_strategy()) {
        let left = value.chain(halve_maybe).chain(decrement_maybe);
        let right = value.chain(|x| halve_maybe(x).chain(decrement_maybe));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_flat_map_agrees_with_chain(value in maybe_strategy()) {
        prop_assert_eq!(Monad::flat_map(value, halve_maybe), value.chain(halve_maybe));
    }
}

// =============================================================================
// Either
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Either::of(value).chain(halve_either), halve_either(value));
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().chain(Either::of), value);
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let left = value.clone().chain(halve_either).chain(negate_either);
        let right = value.chain(|x| halve_either(x).chain(negate_either));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_left_short_circuits(error in "[a-z]{1,8}") {
        let failure: Either<String, i32> = Either::left(error.clone());
        prop_assert_eq!(failure.chain(halve_either), Either::left(error));
    }
}

// =============================================================================
// Deferred and DeferredResult
// =============================================================================

#[cfg(feature = "async")]
mod asynchronous {
    use super::*;
    use fp_kit::effect::{Deferred, DeferredResult};
    use futures::executor::block_on;

    fn halve_deferred(value: i32) -> Deferred<String, i32> {
        if value % 2 == 0 {
            Deferred::of(value / 2)
        } else {
            Deferred::reject(format!("{value} is odd"))
        }
    }

    fn halve_result(value: i32) -> DeferredResult<String, i32> {
        if value % 2 == 0 {
            DeferredResult::of(value / 2)
        } else {
            DeferredResult::reject(format!("{value} is odd"))
        }
    }

    proptest! {
        #[test]
        fn prop_deferred_left_identity(value in any::<i32>()) {
            let chained = Deferred::of(value).chain(halve_deferred);
            prop_assert_eq!(block_on(chained.run()), block_on(halve_deferred(value).run()));
        }

        #[test]
        fn prop_deferred_right_identity(value in any::<i32>(), rejected in any::<bool>()) {
            let source: Deferred<String, i32> = if rejected {
                Deferred::reject(value.to_string())
            } else {
                Deferred::of(value)
            };
            let chained = source.chain(Deferred::of);
            prop_assert_eq!(block_on(chained.run()), block_on(source.run()));
        }

        #[test]
        fn prop_deferred_associativity(value in any::<i32>()) {
            let source: Deferred<String, i32> = Deferred::of(value);
            let left = source.chain(halve_deferred).chain(halve_deferred);
            let right = source.chain(|x| halve_deferred(x).chain(halve_deferred));
            prop_assert_eq!(block_on(left.run()), block_on(right.run()));
        }

        #[test]
        fn prop_deferred_functor_composition(value in any::<i32>()) {
            let source: Deferred<String, i32> = Deferred::of(value);
            let stepwise = source.map(|x| x.wrapping_add(1)).map(|x| x.wrapping_mul(3));
            let fused = source.map(|x| x.wrapping_add(1).wrapping_mul(3));
            prop_assert_eq!(block_on(stepwise.run()), block_on(fused.run()));
        }

        #[test]
        fn prop_deferred_result_left_identity(value in any::<i32>()) {
            let chained = DeferredResult::of(value).chain(halve_result);
            prop_assert_eq!(block_on(chained.run()), block_on(halve_result(value).run()));
        }

        #[test]
        fn prop_deferred_result_associativity(value in any::<i32>()) {
            let source: DeferredResult<String, i32> = DeferredResult::of(value);
            let left = source.chain(halve_result).chain(halve_result);
            let right = source.chain(|x| halve_result(x).chain(halve_result));
            prop_assert_eq!(block_on(left.run()), block_on(right.run()));
        }
    }
}
