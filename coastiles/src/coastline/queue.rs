use anyhow::{Result, anyhow};
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::{
	sync::atomic::{AtomicU64, Ordering},
	time::Duration,
};

/// A FIFO queue with a pending counter.
///
/// The counter is raised by [`enqueue`](WorkQueue::enqueue) and lowered by
/// [`finish`](WorkQueue::finish), which the consumer calls only once a dequeued item is
/// fully processed, including every item that processing enqueued. The queue is drained
/// when the counter reaches zero.
pub struct WorkQueue<T> {
	sender: Sender<T>,
	receiver: Receiver<T>,
	pending: AtomicU64,
}

impl<T> WorkQueue<T> {
	pub fn new() -> WorkQueue<T> {
		let (sender, receiver) = unbounded();
		WorkQueue {
			sender,
			receiver,
			pending: AtomicU64::new(0),
		}
	}

	pub fn enqueue(&self, item: T) -> Result<()> {
		self.pending.fetch_add(1, Ordering::SeqCst);
		self.sender.send(item).map_err(|_| {
			self.pending.fetch_sub(1, Ordering::SeqCst);
			anyhow!("work queue is disconnected")
		})
	}

	/// Waits up to `timeout` for the next item.
	pub fn dequeue(&self, timeout: Duration) -> Option<T> {
		self.receiver.recv_timeout(timeout).ok()
	}

	pub fn finish(&self) {
		let previous = self.pending.fetch_sub(1, Ordering::SeqCst);
		debug_assert!(previous > 0, "finish called more often than enqueue");
	}

	pub fn is_finished(&self) -> bool {
		self.pending.load(Ordering::SeqCst) == 0
	}

	pub fn pending(&self) -> u64 {
		self.pending.load(Ordering::SeqCst)
	}

	/// Items waiting in the channel.
	pub fn residual(&self) -> usize {
		self.receiver.len()
	}
}

impl<T> Default for WorkQueue<T> {
	fn default() -> Self {
		WorkQueue::new()
	}
}
