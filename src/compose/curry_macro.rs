//! Currying for binary functions.
//!
//! The curried form shares the function and the first argument through
//! `std::rc::Rc`, so the outer closure can be called repeatedly and each
//! partial application can be reused. Both levels implement `Fn`.

/// Converts a 2-argument function into a curried form.
///
/// Given `f(a, b) -> c`, returns a closure taking `a` that returns a closure
/// taking `b`. The first argument must implement [`Clone`] so a partial
/// application can be called more than once.
///
/// # Examples
///
/// ```
/// use seqkit::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
///
/// Curried functions slot into the sequence adapters:
///
/// ```
/// use seqkit::curry2;
/// use seqkit::eager;
///
/// let add = curry2!(|first: i32, second: i32| first + second);
/// assert_eq!(eager::map(add(10), vec![1, 2, 3]), [11, 12, 13]);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                )
            }
        }
    }};
}
