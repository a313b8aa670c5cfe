//! Touch swipe detection

/// Direction of a recognised swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved towards the left edge; shows the next slide
    Left,
    /// Finger moved towards the right edge; shows the previous slide
    Right,
}

/// Pairs touch start and touch end positions into swipes
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    /// Swipes must travel strictly more than `threshold_px` horizontally
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    /// Record where a touch started
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Consume the recorded start and classify the gesture ending at `x`
    ///
    /// Returns `None` when no start was recorded or the travel is within the
    /// threshold.
    pub fn finish(&mut self, x: f64) -> Option<SwipeDirection> {
        let diff = self.start_x.take()? - x;
        if diff.abs() <= self.threshold_px || diff.is_nan() {
            return None;
        }
        Some(if diff > 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    }
}
