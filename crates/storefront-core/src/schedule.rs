//! Delayed, cancellable tasks
//!
//! The browser host backs this with `gloo_timers` timeouts; tests and the CLI
//! use [`ManualScheduler`], a virtual clock that only moves when told to.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// A task that has not run yet
pub type Task = Box<dyn FnOnce()>;

/// Handle to a scheduled task
pub trait TaskHandle {
    /// Stop the task from running. No effect if it already ran.
    fn cancel(self);
}

/// Runs a task once after a delay
pub trait Scheduler {
    type Handle: TaskHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

struct Entry {
    id: u64,
    due_ms: u64,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_id: u64,
    queue: Vec<Entry>,
}

/// Virtual-time scheduler. Tasks run only from [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Handle returned by [`ManualScheduler`]
pub struct ManualHandle {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the virtual clock
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Tasks scheduled but not yet run or cancelled
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Move the clock forward, running every task that falls due, in due order.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now_ms + ms;
        loop {
            // Pop before running so a task may schedule more work
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due_ms <= target)
                    .min_by_key(|(_, e)| (e.due_ms, e.id))
                    .map(|(i, _)| i);
                match due {
                    Some(index) => {
                        let entry = clock.queue.remove(index);
                        clock.now_ms = entry.due_ms;
                        Some(entry.task)
                    }
                    None => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now_ms = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Task) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due_ms = clock.now_ms + delay.as_millis() as u64;
        clock.queue.push(Entry { id, due_ms, task });
        ManualHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl TaskHandle for ManualHandle {
    fn cancel(self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().queue.retain(|e| e.id != self.id);
        }
    }
}
