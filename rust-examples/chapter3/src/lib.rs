//! Chapter 3: Functional Data Structures
//!
//! This chapter builds everything on one immutable list type:
//! - Singly linked lists and pattern matching (sum, product)
//! - Data sharing (tail, set_head, drop, drop_while, init)
//! - Recursion over lists and higher-order functions (folds, append, map)
//!
//! The list type itself lives in `fp_common::list`.

// Modules
pub mod section_3_2; // Singly Linked Lists
pub mod section_3_3; // Data Sharing in Functional Data Structures
pub mod section_3_4; // Recursion over Lists and Generalizing to Higher-Order Functions
