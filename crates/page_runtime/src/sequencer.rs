//! Loading-phase sequencing: rotating facts, timed phase-out, and reveal.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use platform_host::{Scheduler, TimerHandle};

/// Facts shown on the loading surface while the page prepares.
pub const LOADING_FACTS: &[&str] = &[
    "Illinois uses over 13 billion gallons of water daily from Lake Michigan and groundwater sources.",
    "The Chicago River was reversed in 1900 to prevent water contamination, a major engineering feat.",
    "Illinois has over 87,000 miles of rivers and streams, but many face pollution challenges.",
    "Agricultural irrigation in Illinois consumes about 40% of the state's freshwater resources.",
    "Lake Michigan provides drinking water to over 7 million Illinois residents.",
    "Illinois groundwater levels have dropped significantly due to over-pumping in agricultural areas.",
    "The Illinois River has lost 90% of its original wetlands, affecting water quality and wildlife.",
    "Climate change is causing more frequent droughts and floods in Illinois, stressing water systems.",
];

/// Wall-clock parameters for the loading phase.
///
/// The phase-out delay and the fact rotation interval are independent knobs;
/// nothing couples them, and the default pairing happens to show exactly three
/// facts (the immediate one plus two rotations).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTiming {
    /// Time the loading surface stays up before phase-out begins.
    pub reveal_after: Duration,
    /// Interval between fact rotations.
    pub fact_interval: Duration,
}

impl Default for LoadingTiming {
    fn default() -> Self {
        Self {
            reveal_after: Duration::from_secs(9),
            fact_interval: Duration::from_secs(3),
        }
    }
}

/// Starts the loading sequence on `scheduler`.
///
/// `on_advance_fact` fires on every rotation tick; the first fact is already on
/// screen when the sequence starts. At `reveal_after` the rotation timer is
/// cancelled exactly once and `on_phase_out` runs to load the configuration and
/// reveal the page.
pub fn install_loading_sequence(
    scheduler: &Rc<dyn Scheduler>,
    timing: LoadingTiming,
    on_advance_fact: impl FnMut() + 'static,
    on_phase_out: impl FnOnce() + 'static,
) {
    let fact_timer: Rc<RefCell<Option<Box<dyn TimerHandle>>>> = Rc::new(RefCell::new(None));

    // The phase-out is scheduled before the rotation timer so that when both
    // land on the same instant, the rotation tick is dropped rather than shown.
    let timer_slot = fact_timer.clone();
    let _ = scheduler.delay(
        timing.reveal_after,
        Box::new(move || {
            if let Some(handle) = timer_slot.borrow_mut().take() {
                handle.cancel();
            }
            on_phase_out();
        }),
    );

    *fact_timer.borrow_mut() =
        Some(scheduler.repeat(timing.fact_interval, Box::new(on_advance_fact)));
}
