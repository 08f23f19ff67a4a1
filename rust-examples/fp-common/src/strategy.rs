//! Proptest strategies for [`ImmutableList`].
//!
//! Available to this crate's tests and, with the `proptest` feature, to
//! downstream test suites.

use std::ops::Range;

use proptest::collection::vec;
use proptest::strategy::{BoxedStrategy, Strategy};

use crate::list::ImmutableList;

/// A strategy for lists whose length falls in `size`.
///
/// # Example
///
/// ```rust,ignore
/// proptest! {
///     #[test]
///     fn bounded(xs in immutable_list(any::<i32>(), 0..50)) {
///         prop_assert!(xs.len() < 50);
///     }
/// }
/// ```
pub fn immutable_list<S>(element: S, size: Range<usize>) -> BoxedStrategy<ImmutableList<S::Value>>
where
    S: Strategy + 'static,
    S::Value: 'static,
{
    vec(element, size).prop_map(ImmutableList::from).boxed()
}
