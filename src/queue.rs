use crate::alloc::{Heap, NodeAlloc};
use crate::error::Error;
use crate::iterators::Iter;
use crate::node::Node;
use std::fmt;
use std::iter::FromIterator;
use std::ptr::NonNull;

/// The outcome of [`destroy`]. Destroying an already-empty queue is a
/// valid terminal state, not a failure, so it gets its own variant
/// rather than an error.
///
/// [`destroy`]: struct.Queue.html#method.destroy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposal {
    /// At least one node remained and was released.
    Drained,
    /// The queue held no nodes; only the queue itself was dropped.
    WasEmpty,
}

/// A queue over a circular singly-linked list referenced only by its
/// tail node.
///
/// `tail.next` is always the head, so pushing at either end and
/// popping the head are all O(1) pointer splices with no traversal.
/// Node storage comes from the injected [`NodeAlloc`] capability; the
/// queue never inspects or copies the values it holds.
///
/// [`NodeAlloc`]: trait.NodeAlloc.html
pub struct Queue<T, A: NodeAlloc<T> = Heap> {
    // Tail of the cycle. None iff the queue is empty.
    tail: Option<NonNull<Node<T>>>,
    alloc: A,
}

impl<T> Queue<T, Heap> {
    /// Creates an empty `Queue` using heap-backed node storage. No
    /// allocations are performed until values are pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::Queue;
    ///
    /// let queue: Queue<u32> = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub fn new() -> Queue<T, Heap> {
        Queue::with_alloc(Heap)
    }
}

impl<T> Default for Queue<T, Heap> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T, A: NodeAlloc<T>> Queue<T, A> {
    /// Creates an empty `Queue` whose nodes are managed by `alloc`.
    /// The capability is stored here and used for every node for the
    /// life of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::{Heap, Queue};
    ///
    /// let queue: Queue<u32, Heap> = Queue::with_alloc(Heap);
    /// assert!(queue.is_empty());
    /// ```
    pub fn with_alloc(alloc: A) -> Queue<T, A> {
        Queue { tail: None, alloc }
    }

    /// True when the queue holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// assert!(q.is_empty());
    ///
    /// q.push_back(1).unwrap();
    /// assert!(!q.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// The number of values in the queue. No count is stored, so this
    /// walks the cycle once: O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.push_back(1).unwrap();
    /// q.push_front(2).unwrap();
    /// assert_eq!(2, q.len());
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Push `value` onto the back of the queue. The new node becomes
    /// the tail; the old tail links to it and it links to the head.
    /// O(1), no traversal. On allocation failure the queue is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.push_back(1).unwrap();
    /// q.push_back(2).unwrap();
    ///
    /// assert_eq!(Ok(1), q.pop_front());
    /// assert_eq!(Ok(2), q.pop_front());
    /// ```
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        let new = self
            .alloc
            .allocate(Node::new(value))
            .ok_or(Error::AllocationFailed)?;

        unsafe {
            match self.tail {
                Some(tail) => {
                    let head = tail.as_ref().next();
                    (*new.as_ptr()).set_next(head);
                    (*tail.as_ptr()).set_next(new);
                }
                None => {
                    // First node forms a one-element cycle.
                    (*new.as_ptr()).set_next(new);
                }
            }
        }
        self.tail = Some(new);

        Ok(())
    }

    /// Push `value` onto the front of the queue. The new node is
    /// spliced in just after the tail, making it the head; the tail
    /// reference does not move. O(1), no traversal. On allocation
    /// failure the queue is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.push_front(1).unwrap();
    /// q.push_front(2).unwrap();
    ///
    /// assert_eq!(Ok(2), q.pop_front());
    /// assert_eq!(Ok(1), q.pop_front());
    /// ```
    pub fn push_front(&mut self, value: T) -> Result<(), Error> {
        let new = self
            .alloc
            .allocate(Node::new(value))
            .ok_or(Error::AllocationFailed)?;

        unsafe {
            match self.tail {
                Some(tail) => {
                    let head = tail.as_ref().next();
                    (*new.as_ptr()).set_next(head);
                    (*tail.as_ptr()).set_next(new);
                }
                None => {
                    (*new.as_ptr()).set_next(new);
                    self.tail = Some(new);
                }
            }
        }

        Ok(())
    }

    /// Remove the head of the queue and return its value. Returns
    /// [`Error::Empty`] and leaves the queue untouched if there is
    /// nothing to remove. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::{Error, Queue};
    ///
    /// let mut q = Queue::new();
    /// q.push_back(10).unwrap();
    ///
    /// assert_eq!(Ok(10), q.pop_front());
    /// assert_eq!(Err(Error::Empty), q.pop_front());
    /// ```
    ///
    /// [`Error::Empty`]: enum.Error.html#variant.Empty
    pub fn pop_front(&mut self) -> Result<T, Error> {
        let tail = self.tail.ok_or(Error::Empty)?;

        unsafe {
            let head = tail.as_ref().next();
            if head == tail {
                // Removing the only node empties the queue.
                self.tail = None;
            } else {
                (*tail.as_ptr()).set_next(head.as_ref().next());
            }
            Ok(self.alloc.release(head).into_value())
        }
    }

    /// A reference to the value at the head of the queue, or `None`
    /// when empty. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.push_back(1).unwrap();
    /// q.push_back(2).unwrap();
    ///
    /// assert_eq!(Some(&1), q.front());
    /// ```
    pub fn front(&self) -> Option<&T> {
        match self.tail {
            Some(tail) => unsafe {
                let head = tail.as_ref().next();
                Some((*head.as_ptr()).value())
            },
            None => None,
        }
    }

    /// A reference to the value at the tail of the queue, or `None`
    /// when empty. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.push_back(1).unwrap();
    /// q.push_back(2).unwrap();
    ///
    /// assert_eq!(Some(&2), q.back());
    /// ```
    pub fn back(&self) -> Option<&T> {
        match self.tail {
            Some(tail) => Some(unsafe { (*tail.as_ptr()).value() }),
            None => None,
        }
    }

    /// Create an iterator over the queue in head-to-tail (FIFO)
    /// order. The iterator makes exactly one lap around the cycle and
    /// does not disturb the queue; the borrow it holds keeps the queue
    /// from being mutated while it is alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.push_back(1).unwrap();
    /// q.push_back(2).unwrap();
    /// q.push_back(3).unwrap();
    ///
    /// let v: Vec<&u8> = q.iter().collect();
    /// assert_eq!(vec![&1, &2, &3], v);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.tail.map(|tail| unsafe { tail.as_ref().next() }))
    }

    /// Release every remaining node in one pass and drop the queue,
    /// reporting whether there was anything to drain. A queue that
    /// merely goes out of scope is cleaned up the same way; `destroy`
    /// exists for callers that care about the distinction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tail_queue::{Disposal, Queue};
    ///
    /// let q: Queue<u8> = Queue::new();
    /// assert_eq!(Disposal::WasEmpty, q.destroy());
    ///
    /// let mut q = Queue::new();
    /// q.push_back(1).unwrap();
    /// assert_eq!(Disposal::Drained, q.destroy());
    /// ```
    pub fn destroy(self) -> Disposal {
        let disposal = if self.is_empty() {
            Disposal::WasEmpty
        } else {
            Disposal::Drained
        };
        drop(self);
        disposal
    }
}

impl<T, A: NodeAlloc<T>> Drop for Queue<T, A> {
    fn drop(&mut self) {
        if let Some(tail) = self.tail.take() {
            unsafe {
                let mut cur = tail.as_ref().next();
                while cur != tail {
                    let next = cur.as_ref().next();
                    drop(self.alloc.release(cur));
                    cur = next;
                }
                drop(self.alloc.release(tail));
            }
        }
    }
}

impl<T, A> fmt::Debug for Queue<T, A>
where
    T: fmt::Debug,
    A: NodeAlloc<T>,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Queue<T, Heap> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        for v in iter {
            q.push_back(v).expect("heap allocation failed");
        }
        q
    }
}

impl<'q, T, A: NodeAlloc<T>> IntoIterator for &'q Queue<T, A> {
    type Item = &'q T;
    type IntoIter = Iter<'q, T>;

    fn into_iter(self) -> Iter<'q, T> {
        self.iter()
    }
}
