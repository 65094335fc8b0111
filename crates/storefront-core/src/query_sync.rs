//! Two-way sync between a local string and one address query parameter
//!
//! Inbound reads are immediate and last-write-wins. Outbound writes are
//! debounced: each change restarts the delay, so only a quiet period lets the
//! write through. Writes replace the address in place, never pushing history.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::address::{AddressBar, query_param, with_query_param};
use crate::schedule::{Scheduler, TaskHandle};

/// Debounce delay before a search edit reaches the address
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Write `value` (trimmed) to the parameter, removing it when blank.
/// `seen` tracks what the address now holds.
fn write_param<A: AddressBar + ?Sized>(address: &A, param: &str, value: &str, seen: &RefCell<String>) {
    let trimmed = value.trim();
    *seen.borrow_mut() = trimmed.to_string();
    let current = address.query();
    let next = if trimmed.is_empty() {
        with_query_param(&current, param, None)
    } else {
        with_query_param(&current, param, Some(trimmed))
    };
    if next != current {
        tracing::debug!(param, value = trimmed, "replacing address query");
        address.replace_query(&next);
    }
}

/// Keeps one query parameter in step with a local value
pub struct QuerySync<A: AddressBar + 'static, S: Scheduler> {
    param: String,
    address: Rc<A>,
    scheduler: S,
    delay: Duration,
    pending: Option<S::Handle>,
    // Cleared by the task itself once it has run
    armed: Rc<Cell<bool>>,
    // Parameter value as of the last inbound read or outbound write
    seen: Rc<RefCell<String>>,
}

impl<A: AddressBar + 'static, S: Scheduler> QuerySync<A, S> {
    pub fn new(param: impl Into<String>, address: Rc<A>, scheduler: S, delay: Duration) -> Self {
        let param = param.into();
        let seen = query_param(&address.query(), &param).unwrap_or_default();
        Self {
            param,
            address,
            scheduler,
            delay,
            pending: None,
            armed: Rc::new(Cell::new(false)),
            seen: Rc::new(RefCell::new(seen)),
        }
    }

    /// Current parameter value, empty when absent
    pub fn read_inbound(&self) -> String {
        query_param(&self.address.query(), &self.param).unwrap_or_default()
    }

    /// The parameter value if the address changed it since it was last seen.
    ///
    /// Navigation that leaves the parameter alone (a hash change, say)
    /// yields `None`, so a local edit still waiting to be written survives.
    pub fn take_inbound_change(&mut self) -> Option<String> {
        let current = self.read_inbound();
        if current == *self.seen.borrow() {
            return None;
        }
        *self.seen.borrow_mut() = current.clone();
        Some(current)
    }

    /// Whether a debounced write is waiting to run
    pub fn has_pending(&self) -> bool {
        self.armed.get()
    }

    /// React to a local change: schedule a write if the address disagrees.
    ///
    /// Any earlier pending write is cancelled first. When the address already
    /// holds the trimmed value nothing new is scheduled.
    pub fn schedule_outbound(&mut self, value: &str) {
        self.cancel();

        let trimmed = value.trim().to_string();
        if trimmed == self.read_inbound() {
            return;
        }

        let address = Rc::clone(&self.address);
        let param = self.param.clone();
        let armed = Rc::clone(&self.armed);
        let seen = Rc::clone(&self.seen);
        armed.set(true);

        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                armed.set(false);
                write_param(&*address, &param, &trimmed, &seen);
            }),
        );
        self.pending = Some(handle);
    }

    /// Cancel anything pending and write `value` right away
    pub fn flush(&mut self, value: &str) {
        self.cancel();
        write_param(&*self.address, &self.param, value, &self.seen);
    }

    /// Drop any pending write without performing it
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
        self.armed.set(false);
    }
}

impl<A: AddressBar + 'static, S: Scheduler> Drop for QuerySync<A, S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
