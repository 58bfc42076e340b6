//! Browser timer scheduler backed by `setTimeout`/`setInterval`.

use std::time::Duration;

use platform_host::{Scheduler, TimerHandle};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, Copy, Default)]
/// Scheduler delegating to the browser event loop.
///
/// Recurring closures are leaked on purpose: the page's recurring timers are
/// either page-lifetime by contract (LED cyclers) or cancelled by id, and the
/// browser keeps firing by id regardless of Rust-side ownership.
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
enum BrowserTimerKind {
    Timeout,
    Interval,
}

#[cfg(target_arch = "wasm32")]
struct BrowserTimerHandle {
    id: i32,
    kind: BrowserTimerKind,
}

#[cfg(target_arch = "wasm32")]
impl TimerHandle for BrowserTimerHandle {
    fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            match self.kind {
                BrowserTimerKind::Timeout => window.clear_timeout_with_handle(self.id),
                BrowserTimerKind::Interval => window.clear_interval_with_handle(self.id),
            }
        }
    }
}

/// Handle for timers that could not be scheduled; cancelling is a no-op.
struct InertTimerHandle;

impl TimerHandle for InertTimerHandle {
    fn cancel(&self) {}
}

impl Scheduler for BrowserScheduler {
    fn delay(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Box<dyn TimerHandle> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return Box::new(InertTimerHandle);
            };
            let closure = Closure::once_into_js(callback);
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.unchecked_ref(),
                delay.as_millis() as i32,
            ) {
                Ok(id) => Box::new(BrowserTimerHandle {
                    id,
                    kind: BrowserTimerKind::Timeout,
                }),
                Err(_) => Box::new(InertTimerHandle),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (delay, callback);
            Box::new(InertTimerHandle)
        }
    }

    fn repeat(&self, period: Duration, callback: Box<dyn FnMut()>) -> Box<dyn TimerHandle> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return Box::new(InertTimerHandle);
            };
            let closure = Closure::wrap(callback);
            let scheduled = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period.as_millis() as i32,
            );
            closure.forget();
            match scheduled {
                Ok(id) => Box::new(BrowserTimerHandle {
                    id,
                    kind: BrowserTimerKind::Interval,
                }),
                Err(_) => Box::new(InertTimerHandle),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (period, callback);
            Box::new(InertTimerHandle)
        }
    }
}
