//! The `partial!` macro for partial application.

/// Fixes some arguments of a function of two or three arguments.
///
/// Write `__` for each argument that stays open; the result is a closure
/// over the open arguments, in order. Fixed arguments are cloned on every
/// call, so the closure is `Fn`. With no `__` the result is a thunk.
///
/// `__` is matched as a literal token; it does not need to be imported.
///
/// # Examples
///
/// ```
/// use fp_kit::control::{prop_or, Maybe};
/// use fp_kit::partial;
/// use std::collections::HashMap;
///
/// let limits = HashMap::from([("retries", 3)]);
/// let limit_or_one = partial!(prop_or, __, 1, &limits);
/// assert_eq!(limit_or_one("retries"), 3);
/// assert_eq!(limit_or_one("timeout"), 1);
///
/// fn scale(factor: i32, value: i32) -> i32 { factor * value }
/// assert_eq!(Maybe::just(7).map(partial!(scale, 3, __)), Maybe::just(21));
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 3-argument functions (placeholder patterns first)
    // =========================================================================

    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};

    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(::std::clone::Clone::clone(&first), second, third)
    }};

    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, ::std::clone::Clone::clone(&second), third)
    }};

    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, ::std::clone::Clone::clone(&third))
    }};

    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
                third,
            )
        }
    }};

    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| {
            function(
                ::std::clone::Clone::clone(&first),
                second,
                ::std::clone::Clone::clone(&third),
            )
        }
    }};

    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| {
            function(
                first,
                ::std::clone::Clone::clone(&second),
                ::std::clone::Clone::clone(&third),
            )
        }
    }};

    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move || {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
                ::std::clone::Clone::clone(&third),
            )
        }
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================

    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};

    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(::std::clone::Clone::clone(&first), second)
    }};

    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, ::std::clone::Clone::clone(&second))
    }};

    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move || function(::std::clone::Clone::clone(&first), ::std::clone::Clone::clone(&second))
    }};
}
