//! One-pass k-th-from-the-end lookup.
//!
//! The classic approach counts the list and walks again; that is two passes
//! and needs the length up front. Here a lead cursor is advanced k − 1 steps,
//! then a trail cursor walks in lockstep with it from the head. When the lead
//! cursor reaches the last node, the trail cursor is exactly k positions from
//! the end. One forward sweep, O(1) auxiliary space, no mutation.

use crate::list::{Node, SinglyLinkedList};

/// Finds the node `k` positions from the end of `list`.
///
/// `k = 1` is the last node, `k = 2` the second-to-last, and so on. The list
/// is traversed once; its length is never computed.
///
/// Returns `None` when there is no such position: `k` is zero or exceeds the
/// number of elements, including the empty list. This is a defined empty
/// result, not an error, and the list is left untouched, so the call is
/// freely repeatable.
///
/// # Example
///
/// ```
/// use tailseek::{find_kth_last, SinglyLinkedList};
///
/// let list: SinglyLinkedList<u64> = [5, 4, 6, 8].into_iter().collect();
///
/// assert_eq!(find_kth_last(&list, 1).map(|n| *n.value()), Some(8));
/// assert_eq!(find_kth_last(&list, 3).map(|n| *n.value()), Some(4));
/// assert!(find_kth_last(&list, 5).is_none());
/// assert!(find_kth_last(&list, 0).is_none());
/// ```
///
/// # Contract
///
/// Passing anything but an unsigned integer for `k`, or anything but a
/// [`SinglyLinkedList`] for the list, is rejected at compile time:
///
/// ```compile_fail
/// use tailseek::{find_kth_last, SinglyLinkedList};
///
/// let list: SinglyLinkedList<u64> = [1, 2, 3].into_iter().collect();
/// find_kth_last(&list, 1.5);
/// ```
///
/// ```compile_fail
/// use tailseek::find_kth_last;
///
/// find_kth_last(&vec![1, 2, 3], 1);
/// ```
pub fn find_kth_last<T>(list: &SinglyLinkedList<T>, k: usize) -> Option<&Node<T>> {
    if k == 0 {
        return None;
    }

    // Place the lead cursor k - 1 steps past the head. Running out of nodes
    // here means k exceeds the list length.
    let mut lead = list.head();
    for _ in 1..k {
        lead = lead?.next();
    }
    // Covers k == len + 1: the steps succeeded but landed past the end.
    let mut lead = lead?;

    // Lockstep walk. The trail cursor stays k - 1 nodes behind the lead, so
    // when the lead has no successor the trail is k from the end.
    let mut trail = list.head();
    while let Some(next) = lead.next() {
        lead = next;
        trail = trail.and_then(Node::next);
    }

    trail
}
