//! Timer scheduling contracts with a deterministic virtual implementation.
//!
//! Every page timer (fact rotation, loading phase-out, reveal-attach delay, LED
//! cyclers) goes through [`Scheduler`], so tests fast-forward a virtual clock
//! instead of waiting on wall-clock delays.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Cancellation handle for a scheduled timer.
///
/// Dropping a handle does not cancel the timer; cancellation is always explicit.
pub trait TimerHandle {
    /// Cancels the timer. Pending and future fires are dropped.
    fn cancel(&self);
}

/// Host timer scheduler.
pub trait Scheduler {
    /// Runs `callback` once after `delay`.
    fn delay(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Box<dyn TimerHandle>;

    /// Runs `callback` every `period` until the returned handle is cancelled.
    fn repeat(&self, period: Duration, callback: Box<dyn FnMut()>) -> Box<dyn TimerHandle>;
}

enum VirtualCallback {
    Once(Box<dyn FnOnce()>),
    Repeating(Rc<RefCell<Box<dyn FnMut()>>>),
}

struct VirtualEntry {
    id: u64,
    due: Duration,
    period: Option<Duration>,
    cancelled: Rc<Cell<bool>>,
    callback: VirtualCallback,
}

#[derive(Default)]
struct VirtualQueue {
    now: Duration,
    next_id: u64,
    entries: Vec<VirtualEntry>,
}

impl VirtualQueue {
    /// Index of the next entry to fire at or before `target`: earliest due
    /// time, scheduling order breaking ties (matching the browser event loop).
    fn next_due(&self, target: Duration) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= target)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(index, _)| index)
    }
}

/// Deterministic scheduler driven by [`VirtualScheduler::advance`].
///
/// Timers fire in due order as the virtual clock passes them; a callback may
/// schedule or cancel other timers mid-advance and the queue stays consistent.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    queue: Rc<RefCell<VirtualQueue>>,
}

struct VirtualTimerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle for VirtualTimerHandle {
    fn cancel(&self) {
        self.cancelled.set(true);
    }
}

impl VirtualScheduler {
    /// Creates a scheduler with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Returns the number of live (uncancelled) scheduled timers.
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .entries
            .iter()
            .filter(|entry| !entry.cancelled.get())
            .count()
    }

    /// Advances the virtual clock by `delta`, firing every timer due on the way.
    pub fn advance(&self, delta: Duration) {
        let target = self.queue.borrow().now + delta;

        loop {
            let entry = {
                let mut queue = self.queue.borrow_mut();
                match queue.next_due(target) {
                    Some(index) => queue.entries.swap_remove(index),
                    None => break,
                }
            };

            if entry.cancelled.get() {
                continue;
            }

            // Move the clock to the fire time before running the callback so
            // nested scheduling is relative to the fire instant.
            self.queue.borrow_mut().now = entry.due;

            match entry.callback {
                VirtualCallback::Once(callback) => callback(),
                VirtualCallback::Repeating(callback) => {
                    (callback.borrow_mut())();
                    if !entry.cancelled.get() {
                        let period = entry.period.unwrap_or_default();
                        let mut queue = self.queue.borrow_mut();
                        queue.entries.push(VirtualEntry {
                            id: entry.id,
                            due: entry.due + period,
                            period: entry.period,
                            cancelled: entry.cancelled,
                            callback: VirtualCallback::Repeating(callback),
                        });
                    }
                }
            }
        }

        self.queue.borrow_mut().now = target;
    }

    fn schedule(
        &self,
        due: Duration,
        period: Option<Duration>,
        callback: VirtualCallback,
    ) -> Box<dyn TimerHandle> {
        let cancelled = Rc::new(Cell::new(false));
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        queue.entries.push(VirtualEntry {
            id,
            due,
            period,
            cancelled: cancelled.clone(),
            callback,
        });
        Box::new(VirtualTimerHandle { cancelled })
    }
}

impl Scheduler for VirtualScheduler {
    fn delay(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Box<dyn TimerHandle> {
        let due = self.now() + delay;
        self.schedule(due, None, VirtualCallback::Once(callback))
    }

    fn repeat(&self, period: Duration, callback: Box<dyn FnMut()>) -> Box<dyn TimerHandle> {
        let due = self.now() + period;
        self.schedule(
            due,
            Some(period),
            VirtualCallback::Repeating(Rc::new(RefCell::new(callback))),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn delay_fires_once_at_its_due_time() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let observed = fired.clone();
        let _ = scheduler.delay(
            Duration::from_secs(2),
            Box::new(move || observed.set(observed.get() + 1)),
        );

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(fired.get(), 0);

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(fired.get(), 1);

        scheduler.advance(Duration::from_secs(10));
        assert_eq!(fired.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn repeat_fires_every_period_until_cancelled() {
        let scheduler = VirtualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let observed = ticks.clone();
        let handle = scheduler.repeat(
            Duration::from_secs(3),
            Box::new(move || observed.set(observed.get() + 1)),
        );

        scheduler.advance(Duration::from_secs(10));
        assert_eq!(ticks.get(), 3);

        handle.cancel();
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(ticks.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn timers_fire_in_due_order_with_scheduling_order_breaking_ties() {
        let scheduler = VirtualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = order.clone();
        let _ = scheduler.delay(
            Duration::from_secs(5),
            Box::new(move || first.borrow_mut().push("first")),
        );
        let second = order.clone();
        let _ = scheduler.delay(
            Duration::from_secs(5),
            Box::new(move || second.borrow_mut().push("second")),
        );
        let early = order.clone();
        let _ = scheduler.delay(
            Duration::from_secs(1),
            Box::new(move || early.borrow_mut().push("early")),
        );

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(*order.borrow(), vec!["early", "first", "second"]);
    }

    #[test]
    fn cancelling_inside_a_callback_suppresses_a_same_instant_fire() {
        let scheduler = VirtualScheduler::new();
        let ticks = Rc::new(Cell::new(0));

        // One-shot scheduled first wins the tie at t=3s and cancels the
        // repeating timer before its first fire.
        let handle_slot: Rc<RefCell<Option<Box<dyn TimerHandle>>>> =
            Rc::new(RefCell::new(None));
        let slot = handle_slot.clone();
        let _ = scheduler.delay(
            Duration::from_secs(3),
            Box::new(move || {
                if let Some(handle) = slot.borrow_mut().take() {
                    handle.cancel();
                }
            }),
        );

        let observed = ticks.clone();
        *handle_slot.borrow_mut() = Some(scheduler.repeat(
            Duration::from_secs(3),
            Box::new(move || observed.set(observed.get() + 1)),
        ));

        scheduler.advance(Duration::from_secs(9));
        assert_eq!(ticks.get(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn callbacks_can_schedule_new_timers_mid_advance() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(Cell::new(0));

        let nested_scheduler = scheduler.clone();
        let nested_fired = fired.clone();
        let _ = scheduler.delay(
            Duration::from_secs(1),
            Box::new(move || {
                let inner = nested_fired.clone();
                let _ = nested_scheduler.delay(
                    Duration::from_secs(1),
                    Box::new(move || inner.set(inner.get() + 1)),
                );
            }),
        );

        scheduler.advance(Duration::from_secs(3));
        assert_eq!(fired.get(), 1);
    }
}
