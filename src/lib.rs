//! A queue built on a circular singly-linked list that is referenced
//! only by its tail node.
//!
//! The header holds a single pointer to the tail; the head is always
//! reachable as `tail.next`. This shape gives O(1) insertion at both
//! ends and O(1) removal from the head while storing only one link per
//! node and no separate head pointer.
//!
//! Node storage is pluggable: every node is obtained from and returned
//! to a [`NodeAlloc`] capability supplied when the queue is created.
//! The default [`Heap`] allocator uses ordinary boxes.
//!
//! [`NodeAlloc`]: trait.NodeAlloc.html
//! [`Heap`]: struct.Heap.html

mod alloc;
mod error;
mod iterators;
mod node;
mod queue;

pub use crate::alloc::{Heap, NodeAlloc};
pub use crate::error::Error;
pub use crate::iterators::Iter;
pub use crate::node::Node;
pub use crate::queue::{Disposal, Queue};
