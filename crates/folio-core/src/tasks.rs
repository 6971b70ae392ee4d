//! Timer ownership for mounted views.
//!
//! A view registers one canceller per task it spawns. The set lives as long
//! as the view; dropping it cancels everything, so no timer outlives the
//! view that started it.

use std::cell::RefCell;
use std::fmt;

use tracing::debug;

type Canceller = Box<dyn FnOnce()>;

/// Cancellers for the tasks a view owns.
#[derive(Default)]
pub struct ViewTasks {
    cancellers: RefCell<Vec<Canceller>>,
}

impl ViewTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `cancel`, run once when the set is cancelled or dropped.
    pub fn push(&self, cancel: impl FnOnce() + 'static) {
        self.cancellers.borrow_mut().push(Box::new(cancel));
    }

    /// Number of tasks still registered.
    pub fn len(&self) -> usize {
        self.cancellers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cancellers.borrow().is_empty()
    }

    /// Cancels every registered task. Later calls are no-ops until new
    /// tasks are pushed.
    pub fn cancel_all(&self) {
        let cancellers = std::mem::take(&mut *self.cancellers.borrow_mut());
        if cancellers.is_empty() {
            return;
        }
        debug!(count = cancellers.len(), "Cancelling view tasks");
        for cancel in cancellers {
            cancel();
        }
    }
}

impl Drop for ViewTasks {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl fmt::Debug for ViewTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewTasks").field("len", &self.len()).finish()
    }
}
