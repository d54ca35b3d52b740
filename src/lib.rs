//! Singly linked list with a one-pass k-th-from-the-end lookup.
//!
//! A [`SinglyLinkedList`] is built once from any finite sequence and never
//! mutated afterward. Each node exclusively owns its successor, so the chain
//! is acyclic by construction and "no successor" is an explicit `None`, never
//! a sentinel.
//!
//! The list deliberately caches neither its tail nor its length. That is the
//! point of [`find_kth_last`]: locate the node `k` positions from the end
//! without counting the list first, in a single forward sweep with O(1)
//! auxiliary space, using two cursors held a fixed distance apart.
//!
//! # Quick Start
//!
//! ```
//! use tailseek::{find_kth_last, SinglyLinkedList};
//!
//! let list: SinglyLinkedList<u64> = [5, 4, 6, 8].into_iter().collect();
//!
//! // k = 1 is the last node, k = 2 the second-to-last, etc.
//! assert_eq!(find_kth_last(&list, 1).map(|n| *n.value()), Some(8));
//! assert_eq!(find_kth_last(&list, 2).map(|n| *n.value()), Some(6));
//! assert_eq!(find_kth_last(&list, 4).map(|n| *n.value()), Some(5));
//!
//! // Out-of-range k is a defined empty result, not an error.
//! assert_eq!(find_kth_last(&list, 5).map(|n| *n.value()), None);
//! ```
//!
//! # Outcomes
//!
//! | Call | Result |
//! |------|--------|
//! | `1 <= k <= len` | `Some(&Node)` at distance `k` from the end |
//! | `k == 0` or `k > len` | `None` |
//! | non-integer `k`, non-list argument | rejected at compile time |

#![warn(missing_docs)]

pub mod list;
pub mod seek;

pub use list::{IntoIter, Iter, Node, SinglyLinkedList};
pub use seek::find_kth_last;
