//! Scroll-reveal and smooth-anchor host-service contracts.

/// Host service wiring intersection-based reveal animations and smooth
/// in-page anchor scrolling onto the committed document.
pub trait RevealService {
    /// Observes every element matching `selector`, hiding each until its first
    /// viewport intersection reveals it.
    fn observe_reveals(&self, selector: &str) -> Result<(), String>;

    /// Intercepts clicks on in-page anchor links and smooth-scrolls to the
    /// target instead of jumping.
    fn bind_smooth_anchors(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op reveal service for non-browser targets.
pub struct NoopRevealService;

impl RevealService for NoopRevealService {
    fn observe_reveals(&self, _selector: &str) -> Result<(), String> {
        Ok(())
    }

    fn bind_smooth_anchors(&self) -> Result<(), String> {
        Ok(())
    }
}
