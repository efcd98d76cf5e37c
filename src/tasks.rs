//! Delayed work that can be torn down together with the page.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Handle to one spawned task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    abort: AbortHandle,
    finished: Rc<Cell<bool>>,
}

impl TaskHandle {
    /// Stops the task at its next suspension point. A pending timer is
    /// cleared when its future is dropped.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }
}

#[derive(Debug, Default)]
struct ScopeState {
    cancelled: bool,
    tasks: Vec<TaskHandle>,
}

/// Cancellation token shared by every component of a page.
///
/// Once cancelled, running tasks are aborted and later spawns never run.
#[derive(Debug, Clone, Default)]
pub struct TaskScope {
    state: Rc<RefCell<ScopeState>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&self, task: F) -> TaskHandle
    where
        F: Future<Output = ()> + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let finished = Rc::new(Cell::new(false));
        let handle = TaskHandle {
            abort,
            finished: finished.clone(),
        };

        {
            let mut state = self.state.borrow_mut();
            if state.cancelled {
                handle.cancel();
                finished.set(true);
                return handle;
            }
            state.tasks.retain(|task| !task.is_finished());
            state.tasks.push(handle.clone());
        }

        spawn_local(async move {
            if Abortable::new(task, registration).await.is_err() {
                log::debug!("Task aborted before completion");
            }
            finished.set(true);
        });

        handle
    }

    /// Runs `callback` once after `millis` unless the scope is cancelled first.
    pub fn spawn_after<F>(&self, millis: u32, callback: F) -> TaskHandle
    where
        F: FnOnce() + 'static,
    {
        self.spawn(async move {
            TimeoutFuture::new(millis).await;
            callback();
        })
    }

    pub fn cancel(&self) {
        let tasks = {
            let mut state = self.state.borrow_mut();
            state.cancelled = true;
            std::mem::take(&mut state.tasks)
        };
        for task in tasks {
            task.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.borrow().cancelled
    }

    /// Number of tasks spawned on this scope that have not finished yet.
    pub fn pending(&self) -> usize {
        self.state
            .borrow()
            .tasks
            .iter()
            .filter(|task| !task.is_finished())
            .count()
    }
}

/// Wraps `callback` so that a burst of calls collapses into one call with
/// the last argument, `wait_ms` after the burst ends.
pub fn debounce<A, F>(wait_ms: u32, callback: F) -> impl Fn(A)
where
    A: 'static,
    F: Fn(A) + 'static,
{
    let callback = Rc::new(callback);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move |arg: A| {
        let callback = callback.clone();
        let timeout = Timeout::new(wait_ms, move || callback(arg));
        // Dropping the previous timeout clears it.
        *pending.borrow_mut() = Some(timeout);
    }
}
