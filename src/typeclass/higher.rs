//! Abstracting over "a container of one element type".
//!
//! `Option<_>` and `ExceptionResult<_>` are type constructors: they only
//! become types once given an element type. Rust has no syntax for
//! quantifying over them, so [`TypeConstructor`] records the element type
//! (`Inner`) and a generic associated type (`WithType<B>`) naming the same
//! container holding a `B` instead.
//!
//! ```rust
//! use seqkit::typeclass::TypeConstructor;
//!
//! fn empty_like<C: TypeConstructor>(_container: &C) -> C::WithType<String>
//! where
//!     C::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! assert_eq!(empty_like(&Some(3)), None::<String>);
//! ```

/// A container type that can be re-applied to a different element type.
///
/// `<C as TypeConstructor>::WithType<C::Inner>` is expected to be `C`.
pub trait TypeConstructor {
    /// The element type currently held.
    type Inner;

    /// The same container holding `B` values.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

#[cfg(test)]
mod tests {
    use super::TypeConstructor;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<Option<u8> as TypeConstructor>::Inner, u8);
    assert_type_eq_all!(<Option<u8> as TypeConstructor>::WithType<char>, Option<char>);
    assert_type_eq_all!(
        <<Option<u8> as TypeConstructor>::WithType<char> as TypeConstructor>::WithType<u8>,
        Option<u8>
    );

    #[test]
    fn with_type_round_trips_to_the_original_type() {
        fn rewrap<C>(value: C::Inner) -> C::WithType<C::Inner>
        where
            C: TypeConstructor,
            C::WithType<C::Inner>: From<C::Inner>,
        {
            From::from(value)
        }

        let rewrapped: Option<&str> = rewrap::<Option<&str>>("kept");
        assert_eq!(rewrapped, Some("kept"));
    }
}
