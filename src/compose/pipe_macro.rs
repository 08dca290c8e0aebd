//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`. Each function is called exactly once,
/// so anything implementing [`FnOnce`] works, including the point-free
/// combinators of [`control::maybe`](crate::control::maybe) and
/// [`control::either`](crate::control::either).
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(h, g, f)(x)`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use fp_kit::control::{maybe, Maybe};
/// use fp_kit::pipe;
///
/// let parse = |text: &str| Maybe::of(text.parse::<i32>().ok());
///
/// let total = pipe!(
///     Maybe::just("20"),
///     maybe::chain(parse),
///     maybe::map(|n| n * 2),
///     maybe::get_or(0)
/// );
/// assert_eq!(total, 40);
///
/// let fallback = pipe!(Maybe::just("x"), maybe::chain(parse), maybe::get_or(0));
/// assert_eq!(fallback, 0);
/// ```
///
/// Mixing containers:
///
/// ```
/// use fp_kit::control::{either, Either, Maybe};
/// use fp_kit::pipe;
///
/// let to_either = |maybe: Maybe<i32>| maybe.fold(|| Either::left("missing"), Either::of);
/// let described = pipe!(
///     Maybe::just(3),
///     to_either,
///     either::map(|n| n + 1),
///     either::fold(|error: &str| error.to_string(), |n| format!("got {n}"))
/// );
/// assert_eq!(described, "got 4");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
