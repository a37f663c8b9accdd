use std::collections::HashSet;

/// Depth percentages reported once per page session.
pub const SCROLL_MILESTONES: [u8; 4] = [25, 50, 75, 100];

/// Tracks how far down the page a visitor has scrolled. Constructed once per
/// session; owns the running maximum and the reached-milestone set.
#[derive(Debug, Default)]
pub struct ScrollDepthTracker {
    max_scroll: f64,
    reached: HashSet<u8>,
}

impl ScrollDepthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current scroll position as a percentage of page height.
    /// Returns the milestones newly crossed by this update, each reported at
    /// most once. Positions at or below the running maximum are ignored.
    pub fn on_scroll(&mut self, percent: f64) -> Vec<u8> {
        if percent <= self.max_scroll {
            return Vec::new();
        }
        self.max_scroll = percent;

        let mut crossed = Vec::new();
        for milestone in SCROLL_MILESTONES {
            if percent >= f64::from(milestone) && self.reached.insert(milestone) {
                tracing::info!(percent = milestone, "scroll_depth");
                crossed.push(milestone);
            }
        }
        crossed
    }

    /// Deepest position seen so far, as a percentage.
    pub fn max_depth(&self) -> f64 {
        self.max_scroll
    }
}
