//! Notification channel for cart notices.

use rocket_commerce::cart::Notice;
use tokio::sync::mpsc;

/// Fire-and-forget delivery of notices to the shopper.
pub trait Notifier: Send + Sync {
    /// Deliver a notice. Must not block.
    fn notify(&self, notice: Notice);
}

impl<F> Notifier for F
where
    F: Fn(Notice) + Send + Sync,
{
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}

/// Writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        tracing::warn!(%notice, "cart notice");
    }
}

/// Forwards notices over an unbounded channel, e.g. to a UI task.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        // receiver gone means nobody is listening any more
        let _ = self.tx.send(notice);
    }
}
