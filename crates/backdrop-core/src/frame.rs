//! Frame scheduling: "run this once before the next repaint" and its
//! cancellation.

use std::collections::BTreeSet;

/// Identifies one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(u64);

/// Host primitive for requesting and cancelling frame callbacks.
pub trait FrameScheduler {
    /// Request a callback before the next repaint.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested callback. Unknown or already fired
    /// handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Pending frame requests for a single-threaded host loop.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: BTreeSet<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no callback is waiting for the next repaint.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of callbacks waiting for the next repaint.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Take every handle due at this repaint, in request order.
    pub fn drain(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_and_drain() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.drain(), vec![a, b]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        queue.cancel_frame(a);
        assert!(!queue.is_pending(a));
        assert!(queue.is_empty());

        // Cancelling twice is harmless.
        queue.cancel_frame(a);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        queue.drain();
        let b = queue.request_frame();
        assert_ne!(a, b);
    }
}
