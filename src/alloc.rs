use crate::node::Node;
use std::ptr::NonNull;

/// The allocation capability a [`Queue`] uses for all of its node
/// storage. The pair is supplied once, at construction, and never
/// replaced.
///
/// Implementations decide where node memory comes from (the heap, a
/// pool, an arena); the queue only requires that `release` can reclaim
/// anything `allocate` handed out.
///
/// [`Queue`]: struct.Queue.html
pub trait NodeAlloc<T> {
    /// Move `node` into freshly allocated storage and return its
    /// address. Returning `None` signals that no memory is available;
    /// the queue surfaces this as [`Error::AllocationFailed`] and is
    /// left unchanged.
    ///
    /// [`Error::AllocationFailed`]: enum.Error.html#variant.AllocationFailed
    fn allocate(&mut self, node: Node<T>) -> Option<NonNull<Node<T>>>;

    /// Reclaim storage previously handed out by `allocate`, returning
    /// the node that occupied it.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate` on this same
    /// allocator and must not have been released before.
    unsafe fn release(&mut self, ptr: NonNull<Node<T>>) -> Node<T>;
}

/// The default allocator: every node is an ordinary heap box. This is
/// the analog of handing the queue `malloc` and `free`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Heap;

impl<T> NodeAlloc<T> for Heap {
    fn allocate(&mut self, node: Node<T>) -> Option<NonNull<Node<T>>> {
        Some(NonNull::from(Box::leak(Box::new(node))))
    }

    unsafe fn release(&mut self, ptr: NonNull<Node<T>>) -> Node<T> {
        *Box::from_raw(ptr.as_ptr())
    }
}
