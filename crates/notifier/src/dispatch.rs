//! Channel plumbing between the frame path and the announcement worker

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{Announcer, Notification};

/// Default queue depth; far more than a frame loop can produce per second
const QUEUE_CAPACITY: usize = 64;

/// Cloneable sender held by the frame path.
///
/// Dispatch never blocks: a full queue drops the notification with a
/// warning, and a stopped worker turns dispatch into a no-op.
#[derive(Debug, Clone)]
pub struct NotifierHandle {
    tx: mpsc::Sender<Notification>,
}

impl NotifierHandle {
    /// Hand a notification to the worker, fire-and-forget
    pub fn dispatch(&self, notification: Notification) {
        match self.tx.try_send(notification) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(dropped)) => {
                warn!(?dropped, "notification queue full, dropping");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                debug!("notification worker stopped");
            }
        }
    }
}

/// Worker draining the queue and forwarding announcements
pub struct NotificationWorker {
    receiver: mpsc::Receiver<Notification>,
    announcer: Arc<dyn Announcer>,
}

impl NotificationWorker {
    /// Create a handle/worker pair with the given queue depth
    pub fn channel(announcer: Arc<dyn Announcer>, capacity: usize) -> (NotifierHandle, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (
            NotifierHandle { tx },
            Self {
                receiver: rx,
                announcer,
            },
        )
    }

    /// Spawn the worker onto the runtime and return the dispatch handle.
    ///
    /// The task runs until every handle is dropped; notifications already in
    /// the queue are delivered even after the frame loop stops.
    pub fn spawn(announcer: Arc<dyn Announcer>) -> NotifierHandle {
        let (handle, mut worker) = Self::channel(announcer, QUEUE_CAPACITY);
        tokio::spawn(async move { worker.run().await });
        handle
    }

    /// Drain notifications until the channel closes
    pub async fn run(&mut self) {
        while let Some(notification) = self.receiver.recv().await {
            debug!(?notification, "dispatching notification");
            if let Some(message) = notification.spoken_message() {
                self.announcer.announce(&message);
            }
        }
        debug!("notification channel closed");
    }
}
