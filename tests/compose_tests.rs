//! Integration tests for the composition helpers and predicates, used the
//! way they are meant to be: as arguments to the sequence combinators.

#![cfg(all(feature = "compose", feature = "eager"))]

use rstest::rstest;
use seqkit::compose::{
    apply_to, between, case, constant, count, flip, greater_than, greater_than_or_equal, identity,
    if_else, is_even, is_odd, less_than, less_than_or_equal, not, not2, sum, switch, then, uncurry2,
};
use seqkit::curry2;
use seqkit::eager;
use seqkit::seq::{self, Sequence};

// =============================================================================
// Predicates with the combinators
// =============================================================================

#[rstest]
fn test_partition_by_is_odd() {
    let tripled = eager::init(|index| index * 3, 5).unwrap();
    let (odd, even) = eager::partition(is_odd, tripled);

    assert_eq!(odd, [3, 9, 15]);
    assert_eq!(even, [6, 12]);
}

#[rstest]
fn test_filter_by_is_even_lazily() {
    let evens = seq::init_unbounded(identity).filter(is_even).take(4);

    assert_eq!(evens.to_vec(), vec![2, 4, 6, 8]);
}

#[rstest]
fn test_fold_with_sum_and_count() {
    let values = vec![5, 10, 15, 20];

    assert_eq!(eager::fold(sum, 0, values.clone()), 50);
    assert_eq!(eager::fold(count, 0, values.clone()), 4);
    assert_eq!(eager::fold(count, 0, eager::filter(greater_than(10), values)), 2);
}

#[rstest]
fn test_comparison_builders() {
    let values = vec![1, 2, 3, 4, 5];

    assert_eq!(eager::filter(greater_than_or_equal(4), values.clone()), [4, 5]);
    assert_eq!(eager::filter(less_than(3), values.clone()), [1, 2]);
    assert_eq!(eager::filter(less_than_or_equal(1), values.clone()), [1]);
    assert_eq!(eager::filter(|value: &i32| between(1, 5, *value), values), [2, 3, 4]);
}

#[rstest]
fn test_not_inverts_a_predicate() {
    assert_eq!(eager::filter(not(is_even::<i32>), vec![1, 2, 3, 4, 5]), [1, 3, 5]);
}

#[rstest]
fn test_not2_with_for_all2() {
    let differs = not2(|a: i32, b: i32| a == b);

    assert_eq!(eager::for_all2(differs, [1, 2], [2, 1]), Ok(true));
}

// =============================================================================
// Function builders
// =============================================================================

#[rstest]
fn test_then_chains_in_reading_order() {
    let describe = then(|value: i32| value * value, |square| format!("square={square}"));

    assert_eq!(eager::map(describe, [3, 4]), ["square=9", "square=16"]);
}

#[rstest]
fn test_constant_as_generator() {
    let sevens = eager::init(constant(7), 3).unwrap();

    assert_eq!(sevens, [7, 7, 7]);
}

#[rstest]
fn test_flip_swaps_arguments() {
    let prepend = flip(|mut list: Vec<i32>, value: i32| {
        list.insert(0, value);
        list
    });

    assert_eq!(prepend(1, vec![2, 3]), vec![1, 2, 3]);
}

#[rstest]
fn test_curry_and_uncurry() {
    let scale = curry2!(|factor: i32, value: i32| factor * value);

    assert_eq!(eager::map(scale(3), [1, 2, 3]), [3, 6, 9]);
    assert_eq!(uncurry2(scale)(4, 5), 20);
}

#[rstest]
fn test_apply_to() {
    assert_eq!(apply_to(21, |value: i32| value * 2), 42);
}

#[rstest]
#[case(3, "fizz")]
#[case(5, "buzz")]
#[case(15, "fizzbuzz")]
#[case(7, "7")]
fn test_switch_fizzbuzz(#[case] value: i32, #[case] expected: &str) {
    let cases = [
        case(|value: &i32| value % 15 == 0, |_| String::from("fizzbuzz")),
        case(|value: &i32| value % 3 == 0, |_| String::from("fizz")),
        case(|value: &i32| value % 5 == 0, |_| String::from("buzz")),
    ];

    assert_eq!(switch(value, &cases, |value| value.to_string()), expected);
}

#[rstest]
fn test_if_else_inside_map() {
    let labels = eager::map(
        |value: i32| if_else(value, |value: &i32| is_even(value), |_| "even", |_| "odd"),
        [1, 2],
    );

    assert_eq!(labels, ["odd", "even"]);
}
