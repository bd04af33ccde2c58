use thiserror::Error;

/// Errors reported by queue operations. Every error is returned
/// synchronously to the caller with the queue left exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The injected allocator could not supply storage for a node.
    #[error("node allocation failed")]
    AllocationFailed,

    /// A pop was requested on an empty queue.
    #[error("queue is empty")]
    Empty,

    /// The cycle invariant was found broken. Reserved: no operation
    /// currently detects or reports this.
    #[error("queue linkage is corrupt")]
    Corrupt,
}
