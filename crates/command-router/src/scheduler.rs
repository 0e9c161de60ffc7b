//! Delayed one-shot notifications for reminders and timers.
//!
//! Scheduling returns as soon as the task is spawned. Tasks cannot be
//! cancelled or inspected afterwards, they do not survive a restart, and
//! overlapping tasks are not detected. A failing notification is never
//! seen by the command that scheduled it.

use crate::error::{RouterError, RouterResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info};

/// What kind of command scheduled the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Reminder,
    Timer,
}

/// Payload delivered when a scheduled task fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub kind: TaskKind,
    /// Text handed to the notifier, e.g. `"Reminder: call mom"`.
    pub message: String,
}

impl ScheduledTask {
    pub fn reminder(task: &str) -> Self {
        Self {
            kind: TaskKind::Reminder,
            message: format!("Reminder: {}", task),
        }
    }

    pub fn timer(amount: u64, unit: &str) -> Self {
        Self {
            kind: TaskKind::Timer,
            message: format!("Timer for {} {} is up!", amount, unit),
        }
    }
}

/// Runs a task once after a delay, without a handle back to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> RouterResult<()>;
}

/// Receives fired tasks.
pub trait Notifier: Send + Sync {
    fn notify(&self, task: &ScheduledTask);
}

/// Prints fired tasks to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, task: &ScheduledTask) {
        info!(kind = ?task.kind, message = %task.message, "Scheduled task fired");
        println!("{}", task.message);
    }
}

/// Scheduler that spawns a sleeping task on the current tokio runtime.
pub struct TokioScheduler {
    notifier: Arc<dyn Notifier>,
}

impl TokioScheduler {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> RouterResult<()> {
        let handle = Handle::try_current().map_err(|e| RouterError::Schedule(e.to_string()))?;
        let notifier = self.notifier.clone();

        debug!(kind = ?task.kind, delay_secs = delay.as_secs(), "Scheduling task");
        // Detached: the join handle is dropped.
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            notifier.notify(&task);
        });

        Ok(())
    }
}
