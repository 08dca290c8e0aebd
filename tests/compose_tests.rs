//! Integration tests for the composition macros and combinators.

use fp_kit::compose::{__, constant, flip, identity};
use fp_kit::control::{Either, Maybe, either, maybe, prop_or};
use fp_kit::{compose, curry2, curry3, curry4, partial, pipe};
use proptest::prelude::*;
use rstest::rstest;
use std::collections::HashMap;

fn add(first: i32, second: i32) -> i32 {
    first + second
}

fn join3(first: &str, second: &str, third: &str) -> String {
    format!("{first}-{second}-{third}")
}

// =============================================================================
// pipe! and compose!
// =============================================================================

#[rstest]
fn pipe_threads_value_left_to_right() {
    let result = pipe!(3, |x| x + 1, |x| x * 10, |x: i32| x.to_string());
    assert_eq!(result, "40");
}

#[rstest]
fn pipe_with_single_value_returns_it() {
    assert_eq!(pipe!(7), 7);
}

#[rstest]
fn compose_applies_right_to_left() {
    let shout = compose!(|s: String| s + "!", |s: &str| s.to_uppercase());
    assert_eq!(shout("hi"), "HI!");
}

#[rstest]
fn pipe_mixes_maybe_and_either_free_functions() {
    let parsed = pipe!(
        Maybe::just("8"),
        maybe::map(|text: &str| text.parse::<i32>()),
        maybe::map(|result: Result<i32, std::num::ParseIntError>| {
            Either::<String, i32>::from(result.map_err(|error| error.to_string()))
        }),
        maybe::get_or_else(|| Either::left("missing".to_string())),
        either::map(|n: i32| n * 2)
    );
    assert_eq!(parsed, Either::of(16));
}

// =============================================================================
// curry and partial
// =============================================================================

#[rstest]
fn curry2_matches_direct_call() {
    assert_eq!(curry2!(add)(2)(3), add(2, 3));
}

#[rstest]
fn curried_stage_maps_over_containers() {
    let add_five = curry2!(add)(5);
    assert_eq!(Maybe::just(1).map(&add_five), Maybe::just(6));
    assert_eq!(Either::<String, i32>::of(2).map(&add_five), Either::of(7));
}

#[rstest]
fn curry3_and_curry4() {
    assert_eq!(curry3!(join3)("a")("b")("c"), "a-b-c");
    let sum = curry4!(|a: i32, b: i32, c: i32, d: i32| a * 1000 + b * 100 + c * 10 + d);
    assert_eq!(sum(1)(2)(3)(4), 1234);
}

#[rstest]
#[case(partial!(join3, "x", __, __)("y", "z"), "x-y-z")]
#[case(partial!(join3, __, "y", __)("x", "z"), "x-y-z")]
#[case(partial!(join3, __, __, "z")("x", "y"), "x-y-z")]
#[case(partial!(join3, "x", "y", __)("z"), "x-y-z")]
#[case(partial!(join3, __, "y", "z")("x"), "x-y-z")]
fn partial_fixes_any_argument(#[case] result: String, #[case] expected: &str) {
    assert_eq!(result, expected);
}

#[rstest]
fn partial_over_prop_or() {
    let ports = HashMap::from([("http", 80)]);
    let port_or_zero = partial!(prop_or, __, 0, &ports);
    assert_eq!(port_or_zero("http"), 80);
    assert_eq!(port_or_zero("ftp"), 0);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn identity_and_constant() {
    assert_eq!(Maybe::just(1).map(identity), Maybe::just(1));
    assert_eq!(Maybe::just(1).map(constant('k')), Maybe::just('k'));
}

#[rstest]
fn flip_swaps_arguments() {
    let divide = |a: i32, b: i32| a / b;
    assert_eq!(flip(divide)(2, 10), 5);
}

#[rstest]
fn generic_point_free_functions() {
    let increment = fp_kit::compose::map(|x: i32| x + 1);
    assert_eq!(increment(Maybe::just(1)), Maybe::just(2));

    let lifted = fp_kit::compose::chain(|x: i32| Either::<String, i32>::of(x * 3));
    assert_eq!(lifted(Either::<String, i32>::of(3)), Either::of(9));
}

proptest! {
    #[test]
    fn prop_compose_associative(x in -1000i32..1000) {
        let f = |v: i32| v + 7;
        let g = |v: i32| v * 3;
        let h = |v: i32| v - 2;
        prop_assert_eq!(compose!(f, compose!(g, h))(x), compose!(compose!(f, g), h)(x));
    }

    #[test]
    fn prop_pipe_is_reversed_compose(x in -1000i32..1000) {
        let f = |v: i32| v + 1;
        let g = |v: i32| v * 2;
        prop_assert_eq!(pipe!(x, f, g), compose!(g, f)(x));
    }

    #[test]
    fn prop_flip_is_involution(a in -100i32..100, b in -100i32..100) {
        let subtract = |x: i32, y: i32| x - y;
        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
    }
}
