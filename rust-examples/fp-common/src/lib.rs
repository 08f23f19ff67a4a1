//! # FP Common
//!
//! Shared data structures for the functional programming exercises.
//!
//! ## Modules
//!
//! - [`list`]: `ImmutableList<T>`, a persistent singly-linked list with structural sharing
//! - [`error`]: `ListError`, reported only by the checked list operations
//! - `strategy`: proptest strategies (tests and the `proptest` feature)
//!
//! ## Design Principles
//!
//! 1. **Pure Functional**: Operations return new values instead of mutating
//! 2. **Structural Sharing**: Derived lists reuse the tails of their inputs
//! 3. **Total by Default**: Removing from an empty list yields an empty list
//! 4. **Thread-safe Reads**: Lists of `Send + Sync` elements are `Send + Sync`

pub mod error;
pub mod list;

#[cfg(any(test, feature = "proptest"))]
pub mod strategy;

// Re-export main types for convenience
pub use error::ListError;
pub use list::{Cons, ImmutableList};
