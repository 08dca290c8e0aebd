//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. The result is a closure that can
/// be stored, passed to `map`, or composed again.
///
/// # Examples
///
/// ```
/// use fp_kit::compose;
/// use fp_kit::control::Maybe;
///
/// let trimmed_length = compose!(|s: &str| s.len(), str::trim);
/// assert_eq!(Maybe::just("  abc ").map(trimmed_length), Maybe::just(3));
/// ```
///
/// Composition is associative and [`identity`](crate::compose::identity)
/// is its unit:
///
/// ```
/// use fp_kit::compose;
/// use fp_kit::compose::identity;
///
/// let double = |x: i32| x * 2;
/// let add_one = |x: i32| x + 1;
///
/// assert_eq!(compose!(identity, double)(4), double(4));
/// assert_eq!(compose!(add_one, compose!(double, add_one))(1), compose!(compose!(add_one, double), add_one)(1));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
