//! Helper functions (combinators) for building functions out of functions.
//!
//! - [`identity`]: returns its argument (I combinator)
//! - [`constant`]: ignores its argument (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`then`]: forward composition, `then(f, g)(x) == g(f(x))`
//! - [`apply_to`]: applies a function to a value, reading left to right
//! - [`uncurry2`]: the inverse of [`curry2!`](crate::curry2)
//! - [`not`] / [`not2`]: negate a predicate
//! - [`if_else`], [`case`] and [`switch`]: conditionals as expressions

/// Returns the value unchanged.
///
/// `then(identity, f)` and `then(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use seqkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use seqkit::compose::constant;
///
/// let always_zero = constant(0);
/// assert_eq!(always_zero("anything"), 0);
/// assert_eq!(always_zero("else"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
///
/// Flipping twice gives back a function equivalent to the original.
///
/// # Examples
///
/// ```
/// use seqkit::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// assert_eq!(flip(flipped)(10, 3), subtract(10, 3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Composes two functions left to right: the result applies `first`, then
/// feeds its output to `second`.
///
/// # Examples
///
/// ```
/// use seqkit::compose::then;
///
/// let add_one = |value: i32| value + 1;
/// let double = |value: i32| value * 2;
///
/// let add_then_double = then(add_one, double);
/// assert_eq!(add_then_double(4), 10);
/// ```
#[inline]
pub fn then<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Applies `function` to `input`.
///
/// Equivalent to `function(input)`, but lets a pipeline read in data order.
///
/// ```
/// use seqkit::compose::{apply_to, is_even};
///
/// assert!(apply_to(&4, is_even));
/// ```
#[inline]
pub fn apply_to<A, B, F>(input: A, function: F) -> B
where
    F: FnOnce(A) -> B,
{
    function(input)
}

/// Turns a curried function back into a binary one.
///
/// `uncurry2(curry2!(f))` behaves like `f`.
///
/// # Examples
///
/// ```
/// use seqkit::compose::uncurry2;
///
/// let curried = |base: i32| move |offset: i32| base + offset;
/// let add = uncurry2(curried);
/// assert_eq!(add(2, 3), 5);
/// ```
#[inline]
pub fn uncurry2<A, B, C, F, G>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |first, second| function(first)(second)
}

/// Negates a predicate of the shape `filter` and `partition` accept.
///
/// ```
/// use seqkit::compose::{is_even, not};
///
/// let is_not_even = not(is_even::<i32>);
/// assert!(is_not_even(&3));
/// assert!(!is_not_even(&4));
/// ```
#[inline]
pub fn not<A: ?Sized, P>(predicate: P) -> impl Fn(&A) -> bool
where
    P: Fn(&A) -> bool,
{
    move |input| !predicate(input)
}

/// Negates a binary predicate.
#[inline]
pub fn not2<A, B, P>(predicate: P) -> impl Fn(A, B) -> bool
where
    P: Fn(A, B) -> bool,
{
    move |first, second| !predicate(first, second)
}

/// Evaluates `then_clause` or `else_clause` on `input` depending on `predicate`.
///
/// ```
/// use seqkit::compose::if_else;
///
/// let label = if_else(7, |value: &i32| *value > 5, |_| "big", |_| "small");
/// assert_eq!(label, "big");
/// ```
#[inline]
pub fn if_else<A, B, P, T, E>(input: A, predicate: P, then_clause: T, else_clause: E) -> B
where
    P: FnOnce(&A) -> bool,
    T: FnOnce(A) -> B,
    E: FnOnce(A) -> B,
{
    if predicate(&input) {
        then_clause(input)
    } else {
        else_clause(input)
    }
}

// =============================================================================
// Case / Switch
// =============================================================================

/// One arm of a [`switch`]: a guard and the function producing the result
/// when the guard holds.
///
/// Built with [`case`]. Arms are boxed so arms built from different closures
/// can share one slice.
pub struct Case<'a, A, B> {
    predicate: Box<dyn Fn(&A) -> bool + 'a>,
    result: Box<dyn Fn(A) -> B + 'a>,
}

impl<A, B> Case<'_, A, B> {
    /// Returns `true` if this arm accepts `input`.
    #[inline]
    pub fn matches(&self, input: &A) -> bool {
        (self.predicate)(input)
    }

    /// Produces this arm's result for `input`, without checking the guard.
    #[inline]
    pub fn evaluate(&self, input: A) -> B {
        (self.result)(input)
    }
}

impl<A, B> std::fmt::Debug for Case<'_, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Case(<fn>)")
    }
}

/// Builds a [`Case`] arm for [`switch`].
pub fn case<'a, A, B, P, R>(predicate: P, result: R) -> Case<'a, A, B>
where
    P: Fn(&A) -> bool + 'a,
    R: Fn(A) -> B + 'a,
{
    Case {
        predicate: Box::new(predicate),
        result: Box::new(result),
    }
}

/// Evaluates the first arm whose guard accepts `input`, or `default` when
/// none does.
///
/// Guards are tested in order and testing stops at the first match.
///
/// # Examples
///
/// ```
/// use seqkit::compose::{case, switch};
///
/// let cases = [
///     case(|value: &i32| *value < 0, |_| "negative"),
///     case(|value: &i32| *value == 0, |_| "zero"),
/// ];
///
/// assert_eq!(switch(-4, &cases, |_| "positive"), "negative");
/// assert_eq!(switch(0, &cases, |_| "positive"), "zero");
/// assert_eq!(switch(9, &cases, |_| "positive"), "positive");
/// ```
pub fn switch<A, B, D>(input: A, cases: &[Case<'_, A, B>], default: D) -> B
where
    D: FnOnce(A) -> B,
{
    match cases.iter().find(|arm| arm.matches(&input)) {
        Some(arm) => arm.evaluate(input),
        None => default(input),
    }
}
