//! Integration tests for the `Option` helpers.

#![cfg(feature = "control")]

use rstest::rstest;
use seqkit::control::OptionExt;
use seqkit::control::option::{bind, lift, none, some, to_option};
use seqkit::error::FunctionalError;
use seqkit::typeclass::{Applicative, Functor, Monad};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_to_option_of_present_value() {
    assert_eq!(to_option::<&str>(Some("value")), Some("value"));
    assert_eq!(to_option::<i32>(7), Some(7));
}

#[rstest]
fn test_to_option_of_absent_value() {
    assert_eq!(to_option::<i32>(None), None);
}

#[rstest]
fn test_some_and_none() {
    assert!(some(1).is_some());
    assert!(none::<i32>().is_none());
}

// =============================================================================
// Access
// =============================================================================

#[rstest]
fn test_try_some_reads_the_payload() {
    assert_eq!(Some(5).try_some(), Ok(5));
    assert_eq!(Some(String::from("text")).try_some_ref().map(String::len), Ok(4));
}

#[rstest]
fn test_try_some_of_none_raises_no_value_access() {
    let error = none::<u8>().try_some().unwrap_err();

    assert_eq!(error, FunctionalError::NoValueAccess);
    assert_eq!(error.operation(), None);
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
#[case(Some(2), Some(3), Some(6))]
#[case(None, Some(3), None)]
#[case(Some(2), None, None)]
#[case(None, None, None)]
fn test_lift(#[case] first: Option<i32>, #[case] second: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(lift(|a, b| a * b, first, second), expected);
    assert_eq!(first.map2(second, |a, b| a * b), expected);
}

#[rstest]
fn test_bind_short_circuits() {
    let halve = |value: i32| if value % 2 == 0 { Some(value / 2) } else { None };

    assert_eq!(bind(halve, Some(8)), Some(4));
    assert_eq!(bind(halve, Some(7)), None);
    assert_eq!(bind(halve, None), None);
}

#[rstest]
fn test_bind_chain_through_type_classes() {
    let parsed = Some("21")
        .flat_map(|text| text.parse::<i32>().ok())
        .fmap(|value| value * 2);

    assert_eq!(parsed, Some(42));
    assert_eq!(<Option<()>>::pure(1), Some(1));
}

// =============================================================================
// Many options
// =============================================================================

#[cfg(all(feature = "eager", feature = "seq"))]
#[rstest]
fn test_option_queries_agree_between_eager_and_lazy() {
    use seqkit::control::option::{all_none, all_some, are_none, are_some, somes};
    use seqkit::seq::{self, Sequence};

    let readings = vec![Some(3), None, Some(5), None, None];

    assert!(!all_some(readings.clone()));
    assert!(!all_none(readings.clone()));
    assert_eq!(are_some(readings.clone()), seq::are_some(seq::of(readings.clone())).to_vec());
    assert_eq!(are_none(readings.clone()).len(), 3);
    assert_eq!(somes(are_some(readings.clone())).map(|values| values.to_vec()), Ok(vec![3, 5]));
    assert_eq!(somes(readings), Err(FunctionalError::NoValueAccess));
}
