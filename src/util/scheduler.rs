use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Identifies one scheduled deferred task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a deferred task stands in for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Shutter flash plus settle delay on the camera screen
    CaptureFlash,
    /// Fake upload progress plus settle delay on the upload overlay
    UploadProgress,
}

/// Message delivered to the event loop when a deferred task elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerFired {
    pub id: TimerId,
    pub kind: TimerKind,
}

/// Creates a scheduler and the receiver the event loop selects on.
pub fn channel() -> (Scheduler, UnboundedReceiver<TimerFired>) {
    let (tx, rx) = unbounded_channel();
    (Scheduler::new(tx), rx)
}

/// Spawns fire-once timers that report back through an mpsc channel.
///
/// Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct Scheduler {
    tx: UnboundedSender<TimerFired>,
    next_id: u64,
}

impl Scheduler {
    pub fn new(tx: UnboundedSender<TimerFired>) -> Self {
        Self { tx, next_id: 0 }
    }

    /// Schedules `kind` to fire once after `delay`.
    ///
    /// The returned task is cancelled when dropped, so the caller decides how
    /// long the timer lives by where it keeps the handle.
    pub fn schedule_once(&mut self, delay: Duration, kind: TimerKind) -> DeferredTask {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let tx = self.tx.clone();

        log::debug!("Scheduling {:?} ({:?}) in {:?}", kind, id, delay);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(TimerFired { id, kind }).is_err() {
                log::warn!("{:?} fired after the event loop closed", kind);
            }
        });

        DeferredTask { id, kind, handle }
    }
}

/// Handle to a pending timer. Dropping it aborts the timer.
#[derive(Debug)]
pub struct DeferredTask {
    id: TimerId,
    kind: TimerKind,
    handle: JoinHandle<()>,
}

impl DeferredTask {
    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        log::debug!("Cancelling {:?} ({:?})", self.kind, self.id);
    }
}

impl Drop for DeferredTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Holds at most one deferred task for a screen.
///
/// A fired message only counts when it belongs to the task currently held;
/// anything else is left over from a task that was replaced or cancelled.
#[derive(Debug, Default)]
pub struct TaskSlot {
    task: Option<DeferredTask>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `task`, cancelling whatever was held before.
    pub fn arm(&mut self, task: DeferredTask) {
        if let Some(previous) = self.task.replace(task) {
            previous.cancel();
        }
    }

    /// Returns true if a task was pending.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    pub fn pending_id(&self) -> Option<TimerId> {
        self.task.as_ref().map(DeferredTask::id)
    }

    /// Releases the held task if `fired` belongs to it.
    pub fn take_if_fired(&mut self, fired: &TimerFired) -> bool {
        if self.pending_id() == Some(fired.id) {
            self.task = None;
            true
        } else {
            log::debug!("Dropping stale {:?} ({:?})", fired.kind, fired.id);
            false
        }
    }
}
