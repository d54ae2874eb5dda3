use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Runs one-shot continuations after a delay. Once armed a task cannot be
/// cancelled; callers that need to drop stale work guard inside the task.
pub trait Scheduler: Clone + 'static {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// Coalesces bursts of calls: the action runs once no further call has
/// arrived for `wait_ms`.
#[derive(Clone)]
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    generation: Rc<Cell<u64>>,
    action: Rc<dyn Fn()>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, wait_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            wait_ms,
            generation: Rc::new(Cell::new(0)),
            action: Rc::new(action),
        }
    }

    pub fn call(&self) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        let latest = Rc::clone(&self.generation);
        let action = Rc::clone(&self.action);
        self.scheduler.defer(
            self.wait_ms,
            Box::new(move || {
                // A newer call re-armed the wait
                if latest.get() == generation {
                    action();
                }
            }),
        );
    }
}
