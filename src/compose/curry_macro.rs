//! The curry macro family.
//!
//! `curry2!` to `curry4!` turn a function of two to four arguments into a
//! chain of single-argument closures. The function is shared through an
//! `Arc` and fixed arguments are cloned on each call, so every stage is
//! `Fn`, reusable, and `Send + Sync` whenever the function and arguments
//! are. That makes curried functions usable with `Deferred::map`.

/// Curries a 2-argument function.
///
/// Arguments other than the last must implement [`Clone`].
///
/// # Examples
///
/// ```
/// use fp_kit::control::Maybe;
/// use fp_kit::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry2!(add);
/// assert_eq!(curried(5)(3), 8);
///
/// let add_ten = curried(10);
/// assert_eq!(Maybe::just(1).map(&add_ten), Maybe::just(11));
/// assert_eq!(Maybe::just(2).map(add_ten), Maybe::just(12));
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        move |first| {
            let function = ::std::sync::Arc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a 3-argument function.
///
/// # Examples
///
/// ```
/// use fp_kit::curry3;
///
/// let clamp = curry3!(|low: i32, high: i32, value: i32| value.max(low).min(high));
/// let percentage = clamp(0)(100);
/// assert_eq!(percentage(140), 100);
/// assert_eq!(percentage(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        move |first| {
            let function = ::std::sync::Arc::clone(&function);
            move |second| {
                let function = ::std::sync::Arc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Curries a 4-argument function.
///
/// # Examples
///
/// ```
/// use fp_kit::curry4;
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 { a + b + c + d }
///
/// assert_eq!(curry4!(sum_four)(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        move |first| {
            let function = ::std::sync::Arc::clone(&function);
            move |second| {
                let function = ::std::sync::Arc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::sync::Arc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_curry2_reuses_partial_application() {
        let concat = curry2!(|prefix: String, name: &str| format!("{prefix}{name}"));
        let greet = concat("hello, ".to_string());
        assert_eq!(greet("ada"), "hello, ada");
        assert_eq!(greet("alan"), "hello, alan");
    }

    #[test]
    fn test_curry3_stages_are_independent() {
        let volume = curry3!(|w: i32, h: i32, d: i32| w * h * d);
        let base = volume(2);
        let first = base(3);
        let second = base(5);
        assert_eq!(first(4), 24);
        assert_eq!(second(4), 40);
    }
}
