//! # Immutable Singly-Linked List
//!
//! A persistent cons list: every list is either [`ImmutableList::Empty`] or a
//! [`ImmutableList::Node`] holding one element and the rest of the list.
//!
//! ## Philosophy
//!
//! Lists never change after construction. Operations that "modify" a list
//! build a new one and share whatever suffix they can with the original:
//!
//! - The node payload lives behind an [`Arc`], so cloning a list is O(1) and
//!   never clones elements
//! - Tails are shared between lists, which is safe because nothing mutates them
//! - `Arc` keeps lists `Send + Sync` whenever their elements are
//!
//! ## Example
//!
//! ```
//! use fp_common::list;
//! use fp_common::list::ImmutableList;
//!
//! let xs = list![1, 2, 3];
//! assert_eq!(xs.head(), Some(&1));
//! assert_eq!(xs.len(), 3);
//!
//! // Prepending shares the whole of `xs`
//! let ys = xs.prepend(0);
//! assert_eq!(ys, list![0, 1, 2, 3]);
//! assert_eq!(xs, list![1, 2, 3]);
//!
//! match &ys {
//!     ImmutableList::Node(node) => assert!(node.rest.ptr_eq(&xs)),
//!     ImmutableList::Empty => unreachable!(),
//! }
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::mem;
use std::sync::Arc;

/// Builds an [`ImmutableList`] from its elements, in order.
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_common::list::ImmutableList;
///
/// assert_eq!(list![1, 2, 3], ImmutableList::of([1, 2, 3]));
///
/// let empty: ImmutableList<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::list::ImmutableList::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::list::ImmutableList::of([$($element),+])
    };
}

/// An immutable, singly-linked list.
///
/// ## Structural Sharing
///
/// ```text
/// xs            = 1 -> 2 -> 3 -> Empty
/// xs.prepend(0) = 0 -> [1 -> 2 -> 3 -> Empty]   // shares every node of xs
/// ```
pub enum ImmutableList<T> {
    /// The list with no elements.
    Empty,
    /// A first element followed by the (possibly empty) rest of the list.
    Node(Arc<Cons<T>>),
}

/// The payload of a non-empty list.
///
/// Only ever reached through an `Arc`, so the fields are read-only once the
/// node is built.
pub struct Cons<T> {
    /// First element of the list.
    pub value: T,
    /// Everything after `value`.
    pub rest: ImmutableList<T>,
}

impl<T> ImmutableList<T> {
    /// Creates the empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        ImmutableList::Empty
    }

    /// Creates a list containing exactly `elements`, in iteration order.
    ///
    /// # Example
    /// ```
    /// use fp_common::list::ImmutableList;
    ///
    /// let xs = ImmutableList::of(vec!['a', 'b']);
    /// assert_eq!(xs.iter().collect::<String>(), "ab");
    /// assert!(ImmutableList::<char>::of([]).is_empty());
    /// ```
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(ImmutableList::Empty, |rest, value| ImmutableList::cons(value, rest))
    }

    /// Creates a node with `value` in front of `rest` (cons).
    ///
    /// `rest` is moved into the new node, not copied.
    #[inline]
    #[must_use]
    pub fn cons(value: T, rest: ImmutableList<T>) -> Self {
        ImmutableList::Node(Arc::new(Cons { value, rest }))
    }

    /// Returns a new list with `value` in front of this one.
    ///
    /// The original list is shared, not copied.
    #[inline]
    #[must_use]
    pub fn prepend(&self, value: T) -> Self {
        ImmutableList::cons(value, self.clone())
    }

    /// Returns true if the list has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, ImmutableList::Empty)
    }

    /// Returns the first element, if any.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.uncons().map(|(value, _)| value)
    }

    /// Splits the list into its first element and the rest.
    ///
    /// # Example
    /// ```
    /// use fp_common::list;
    ///
    /// let xs = list![1, 2];
    /// let (head, rest) = xs.uncons().unwrap();
    /// assert_eq!(*head, 1);
    /// assert_eq!(rest, &list![2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, &ImmutableList<T>)> {
        match self {
            ImmutableList::Empty => None,
            ImmutableList::Node(node) => Some((&node.value, &node.rest)),
        }
    }

    /// Counts the elements in a single pass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if both lists are the same allocation.
    ///
    /// Two empty lists are always pointer-equal.
    #[must_use]
    pub fn ptr_eq(&self, other: &ImmutableList<T>) -> bool {
        match (self, other) {
            (ImmutableList::Empty, ImmutableList::Empty) => true,
            (ImmutableList::Node(a), ImmutableList::Node(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Iterates over the elements front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { cursor: self }
    }
}

// Manual implementations so that cloning a list never requires T: Clone.
impl<T> Clone for ImmutableList<T> {
    fn clone(&self) -> Self {
        match self {
            ImmutableList::Empty => ImmutableList::Empty,
            ImmutableList::Node(node) => ImmutableList::Node(Arc::clone(node)),
        }
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Cons<T> {
    // Releases the chain in a loop instead of one stack frame per node.
    // Stops at the first node another list still holds.
    fn drop(&mut self) {
        let mut rest = mem::take(&mut self.rest);
        while let ImmutableList::Node(node) = rest {
            match Arc::try_unwrap(node) {
                Ok(mut cons) => rest = mem::take(&mut cons.rest),
                Err(_) => break,
            }
        }
    }
}

// Element-wise only: a list holding NaN is not equal to itself or its clone.
impl<T: PartialEq> PartialEq for ImmutableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ImmutableList<T> {}

impl<T: Hash> Hash for ImmutableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ImmutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ImmutableList::of(iter)
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(elements: Vec<T>) -> Self {
        ImmutableList::of(elements)
    }
}

/// Borrowing iterator over an [`ImmutableList`].
pub struct Iter<'a, T> {
    cursor: &'a ImmutableList<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, rest) = self.cursor.uncons()?;
        self.cursor = rest;
        Some(value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            cursor: self.cursor,
        }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
