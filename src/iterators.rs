use crate::node::Node;
use std::marker::PhantomData;
use std::ptr::NonNull;

// Where a traversal stands: not yet begun, resting on a node, or
// finished its single lap around the cycle.
enum Stage<T> {
    NotStarted,
    At(NonNull<Node<T>>),
    Done,
}

/// An iterator over the queue in head-to-tail (FIFO) order. It is
/// constructed from the [`iter`] method on `Queue` and makes exactly
/// one lap around the cycle.
///
/// [`iter`]: struct.Queue.html#method.iter
pub struct Iter<'q, T> {
    head: Option<NonNull<Node<T>>>,
    stage: Stage<T>,
    _queue: PhantomData<&'q Node<T>>,
}

impl<'q, T> Iter<'q, T> {
    pub(crate) fn new(head: Option<NonNull<Node<T>>>) -> Self {
        Iter {
            head,
            stage: Stage::NotStarted,
            _queue: PhantomData,
        }
    }
}

impl<'q, T> Iterator for Iter<'q, T> {
    type Item = &'q T;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = match self.stage {
            Stage::NotStarted => match self.head {
                Some(head) => head,
                None => {
                    self.stage = Stage::Done;
                    return None;
                }
            },
            Stage::At(node) => node,
            Stage::Done => return None,
        };

        let node: &'q Node<T> = unsafe { &*cur.as_ptr() };

        // Back at the head means the lap is complete.
        self.stage = if Some(node.next()) == self.head {
            Stage::Done
        } else {
            Stage::At(node.next())
        };

        Some(node.value())
    }
}

#[cfg(test)]
mod test {
    use crate::queue::Queue;

    #[test]
    fn iteration_visits_everything_in_fifo_order() {
        let mut q = Queue::new();
        q.push_back(10u8).unwrap();
        q.push_back(11u8).unwrap();
        q.push_back(12u8).unwrap();

        assert_eq!(vec![&10, &11, &12], q.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn iteration_sees_front_pushes_first() {
        let mut q = Queue::new();
        q.push_back(2u8).unwrap();
        q.push_front(1u8).unwrap();
        q.push_back(3u8).unwrap();
        q.push_front(0u8).unwrap();

        assert_eq!(vec![&0, &1, &2, &3], q.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn iterator_on_empty_queue_is_immediately_done() {
        let q: Queue<u8> = Queue::new();
        let mut it = q.iter();

        assert_eq!(None, it.next());
        assert_eq!(None, it.next());
    }

    #[test]
    fn iterator_stops_after_one_lap() {
        let mut q = Queue::new();
        q.push_back(1u8).unwrap();
        q.push_back(2u8).unwrap();

        let mut it = q.iter();
        assert_eq!(Some(&1), it.next());
        assert_eq!(Some(&2), it.next());
        assert_eq!(None, it.next());
        assert_eq!(None, it.next());
    }

    #[test]
    fn single_element_yields_once() {
        let mut q = Queue::new();
        q.push_front(9u8).unwrap();

        let mut it = q.iter();
        assert_eq!(Some(&9), it.next());
        assert_eq!(None, it.next());
    }

    #[test]
    fn iteration_does_not_disturb_the_queue() {
        let mut q = Queue::new();
        for i in 0..5u8 {
            q.push_back(i).unwrap();
        }

        assert_eq!(5, q.iter().count());
        assert_eq!(5, q.iter().count());

        for i in 0..5u8 {
            assert_eq!(Ok(i), q.pop_front());
        }
        assert!(q.is_empty());
    }

    #[test]
    fn filter_can_find_items() {
        let mut q = Queue::new();
        q.push_back(10u8).unwrap();
        q.push_back(11u8).unwrap();
        q.push_back(12u8).unwrap();

        assert_eq!(Some(&10), q.iter().filter(|i| **i == 10).next());
        assert_eq!(Some(&11), q.iter().filter(|i| **i == 11).next());
        assert_eq!(Some(&12), q.iter().filter(|i| **i == 12).next());
        assert_eq!(None, q.iter().filter(|i| **i == 13).next());
    }
}
