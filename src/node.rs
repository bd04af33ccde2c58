use std::ptr::NonNull;

/// One queued element: the payload plus the link to its successor in
/// the cycle.
///
/// Values of this type only pass through [`NodeAlloc`] implementations,
/// which move them in and out of storage without looking inside.
///
/// [`NodeAlloc`]: trait.NodeAlloc.html
pub struct Node<T> {
    // Successor in the cycle. Dangling only between allocation and
    // splice; every node in a live queue has this set.
    next: NonNull<Node<T>>,
    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Node<T> {
        Node {
            next: NonNull::dangling(),
            value,
        }
    }

    pub(crate) fn next(&self) -> NonNull<Node<T>> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: NonNull<Node<T>>) {
        self.next = next;
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}
