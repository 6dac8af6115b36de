//! Deferred reply task.
//!
//! The reply is released after a fixed delay. The delay runs as a tokio task
//! that can be cancelled; dropping the scheduler cancels it as well, so a
//! torn-down view never receives a late reply. The answer itself is computed
//! by the receiving [`ChatSession`](super::ChatSession) once the delay is over.

use std::time::Duration;

use tokio::task::JoinHandle;

use super::session::PendingReply;

/// Default delay before the answer shows up.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// A pending question whose delay has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyReady {
    pub ticket: u64,
    pub question: String,
}

/// Owns at most one in-flight reply task.
pub struct ReplyScheduler {
    delay: Duration,
    task: Option<(u64, JoinHandle<()>)>,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay, task: None }
    }

    /// Whether a reply task is scheduled and has not completed yet.
    pub fn is_scheduled(&self) -> bool {
        self.task
            .as_ref()
            .is_some_and(|(_, handle)| !handle.is_finished())
    }

    /// Spawn the reply task. `deliver` is called with the ticket and question
    /// once the delay has elapsed, unless the task is cancelled first. Any previously
    /// scheduled task is cancelled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, pending: PendingReply, deliver: F)
    where
        F: FnOnce(ReplyReady) + Send + 'static,
    {
        self.cancel();

        let PendingReply { ticket, question } = pending;
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            deliver(ReplyReady { ticket, question });
        });

        tracing::debug!(ticket, delay_ms = delay.as_millis() as u64, "Reply scheduled");
        self.task = Some((ticket, handle));
    }

    /// Abort the in-flight task. Returns `true` if one was still running.
    pub fn cancel(&mut self) -> bool {
        let Some((ticket, handle)) = self.task.take() else {
            return false;
        };
        if handle.is_finished() {
            return false;
        }
        handle.abort();
        tracing::debug!(ticket, "Pending reply cancelled");
        true
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    fn pending(ticket: u64, question: &str) -> PendingReply {
        PendingReply {
            ticket,
            question: question.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(DEFAULT_REPLY_DELAY);

        let start = Instant::now();
        scheduler.schedule(pending(7, "Can I be fired without cause?"), move |reply| {
            let _ = tx.send(reply);
        });
        assert!(scheduler.is_scheduled());

        let reply = rx.recv().await.expect("reply delivered");
        assert!(start.elapsed() >= DEFAULT_REPLY_DELAY);
        assert_eq!(reply.ticket, 7);
        assert_eq!(reply.question, "Can I be fired without cause?");
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_before_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(1500));
        scheduler.schedule(pending(1, "q"), move |reply| {
            let _ = tx.send(reply);
        });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(100));
        scheduler.schedule(pending(1, "q"), move |reply| {
            let _ = tx.send(reply);
        });

        assert!(scheduler.cancel());
        assert!(!scheduler.is_scheduled());
        assert!(!scheduler.cancel());

        // Sender is dropped with the aborted task
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel::<ReplyReady>();
        {
            let mut scheduler = ReplyScheduler::new(Duration::from_millis(100));
            scheduler.schedule(pending(1, "q"), move |reply| {
                let _ = tx.send(reply);
            });
        }
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let tx2 = tx.clone();
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(100));
        scheduler.schedule(pending(1, "contract"), move |reply| {
            let _ = tx.send(reply);
        });
        scheduler.schedule(pending(2, "custody"), move |reply| {
            let _ = tx2.send(reply);
        });

        let reply = rx.recv().await.unwrap();
        assert_eq!(reply.ticket, 2);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_completion_reports_false() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(10));
        scheduler.schedule(pending(3, "q"), move |reply| {
            let _ = tx.send(reply);
        });
        rx.recv().await.unwrap();
        tokio::task::yield_now().await;
        assert!(!scheduler.cancel());
    }
}
