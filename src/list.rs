//! Singly linked list built once from a sequence.
//!
//! Construction makes a single forward pass over the input iterator; nothing
//! assumes random access or a known length. The list stores only the head
//! node. Tail and length are derived by traversal, which keeps the structure
//! honest for the one-pass lookup in [`crate::seek`].
//!
//! # Example
//!
//! ```
//! use tailseek::SinglyLinkedList;
//!
//! let list: SinglyLinkedList<&str> = ["a", "b", "c"].into_iter().collect();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.front(), Some(&"a"));
//! assert_eq!(list.back(), Some(&"c"));
//!
//! let values: Vec<_> = list.iter().collect();
//! assert_eq!(values, vec![&"a", &"b", &"c"]);
//! ```

use std::fmt;

/// A node in the chain.
///
/// Holds a value and exclusively owns its successor. Nodes are created only
/// while the list is being assembled and never change afterward.
pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    #[inline]
    fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Returns a reference to this node's value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the successor node, or `None` if this is the last node.
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Just the value; printing the successor chain here would make
        // Debug output O(n) per node.
        f.debug_tuple("Node").field(&self.value).finish()
    }
}

/// A singly linked list referenced via its first node.
///
/// Built once from an ordered sequence with [`FromIterator`]; read-only
/// afterward. The empty sequence produces a list with no head and no
/// allocation.
///
/// # Example
///
/// ```
/// use tailseek::SinglyLinkedList;
///
/// let list: SinglyLinkedList<u64> = (1..=4).collect();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
///
/// let empty: SinglyLinkedList<u64> = SinglyLinkedList::new();
/// assert!(empty.is_empty());
/// assert!(empty.head().is_none());
/// ```
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns the first node, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the list.
    ///
    /// The list stores no length field, so this walks the chain: O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns a reference to the first value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(Node::value)
    }

    /// Returns a reference to the last value.
    ///
    /// The list stores no tail pointer, so this walks the chain: O(n).
    pub fn back(&self) -> Option<&T> {
        let mut node = self.head.as_deref()?;
        while let Some(next) = node.next() {
            node = next;
        }
        Some(node.value())
    }

    /// Returns an iterator over references to values, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    /// Builds the chain in input order, consuming the iterator exactly once.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node::new(value))).next;
        }
        list
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink front to back. The default drop would recurse one stack
        // frame per node and overflow on long chains.
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over references to values, front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator that dismantles the chain, front to back.
pub struct IntoIter<T> {
    next: Option<Box<Node<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.next.take().map(|mut node| {
            self.next = node.next.take();
            node.value
        })
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            next: self.head.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let list: SinglyLinkedList<u64> = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.head().is_none());
    }

    #[test]
    fn from_empty_iterator() {
        let list: SinglyLinkedList<u64> = std::iter::empty().collect();
        assert!(list.is_empty());
        assert!(list.front().is_none());
        assert!(list.back().is_none());
    }

    #[test]
    fn preserves_input_order() {
        let list: SinglyLinkedList<u64> = [5, 4, 6, 8].into_iter().collect();
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![5, 4, 6, 8]);
    }

    #[test]
    fn consumes_iterator_once() {
        // A non-cloneable, length-blind iterator is enough to build a list.
        let mut calls = 0;
        let list: SinglyLinkedList<u64> = std::iter::from_fn(|| {
            calls += 1;
            (calls <= 3).then_some(calls)
        })
        .collect();
        assert_eq!(list.len(), 3);
        assert_eq!(calls, 4);
    }

    #[test]
    fn len_and_accessors() {
        let list: SinglyLinkedList<u64> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn single_element() {
        let list: SinglyLinkedList<u64> = [7].into_iter().collect();
        assert_eq!(list.front(), Some(&7));
        assert_eq!(list.back(), Some(&7));
        assert!(list.head().unwrap().next().is_none());
    }

    #[test]
    fn node_chain_is_walkable() {
        let list: SinglyLinkedList<u64> = [1, 2].into_iter().collect();
        let first = list.head().unwrap();
        assert_eq!(*first.value(), 1);
        let second = first.next().unwrap();
        assert_eq!(*second.value(), 2);
        assert!(second.next().is_none());
    }

    #[test]
    fn into_iter_yields_owned_values() {
        let list: SinglyLinkedList<String> =
            ["a", "b"].into_iter().map(String::from).collect();
        let values: Vec<String> = list.into_iter().collect();
        assert_eq!(values, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn debug_renders_sequence() {
        let list: SinglyLinkedList<u64> = [1, 2, 3].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn drop_handles_long_chain() {
        // Would overflow the stack with a recursive drop.
        let list: SinglyLinkedList<u64> = (0..1_000_000).collect();
        drop(list);
    }
}
