use std::hash::Hash;

use crate::anim::timeline::Timeline;

/// Maps the pinned scroll range onto timeline time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMap {
    pub distance: f64,
    pub duration: f64,
}

impl ScrollMap {
    pub fn new(distance: f64, duration: f64) -> Self {
        Self { distance, duration }
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        if self.distance <= 0.0 {
            return 1.0;
        }
        (scroll_y / self.distance).clamp(0.0, 1.0)
    }

    pub fn time_at(&self, scroll_y: f64) -> f64 {
        self.progress(scroll_y) * self.duration
    }

    /// Scroll offset at which the playhead reaches `time`.
    pub fn scroll_for(&self, time: f64) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (time / self.duration).clamp(0.0, 1.0) * self.distance
    }

    /// Scroll offset at which `timeline` reaches the named label.
    pub fn label_scroll<T: Copy + Eq + Hash>(&self, timeline: &Timeline<T>, label: &str) -> Option<f64> {
        timeline.label_time(label).map(|time| self.scroll_for(time))
    }
}

/// Smooths the playhead so it trails the scrollbar instead of snapping to it.
#[derive(Debug, Clone)]
pub struct Scrubber {
    lag: f64,
    playhead: Option<f64>,
}

impl Scrubber {
    const SNAP: f64 = 1e-4;

    pub fn new(lag_seconds: f64) -> Self {
        Self { lag: lag_seconds, playhead: None }
    }

    /// Moves the playhead toward `target` for a frame of `dt` seconds.
    pub fn advance(&mut self, target: f64, dt: f64) -> f64 {
        let next = match self.playhead {
            Some(current) if self.lag > 0.0 => {
                // ~99% of the gap closes within `lag` seconds at any frame rate
                let blend = 1.0 - (-5.0 * dt.max(0.0) / self.lag).exp();
                let moved = current + (target - current) * blend;
                if (target - moved).abs() < Self::SNAP {
                    target
                } else {
                    moved
                }
            }
            _ => target,
        };
        self.playhead = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_pinned_range() {
        let map = ScrollMap::new(8000.0, 40.0);
        assert_eq!(map.progress(-50.0), 0.0);
        assert_eq!(map.progress(4000.0), 0.5);
        assert_eq!(map.progress(9000.0), 1.0);
        assert_eq!(map.time_at(2000.0), 10.0);
    }

    #[test]
    fn scroll_for_inverts_time_at() {
        let map = ScrollMap::new(8000.0, 73.1);
        let y = map.scroll_for(19.5);
        assert!((map.time_at(y) - 19.5).abs() < 1e-9);
        assert_eq!(map.scroll_for(500.0), 8000.0);
    }

    #[test]
    fn label_scroll_follows_label_time() {
        let mut tl: Timeline<u8> = Timeline::new(Box::new(|| 0.0));
        tl.pause(2.0);
        tl.add_label("middle");
        tl.pause(2.0);
        let map = ScrollMap::new(1000.0, tl.duration());
        assert_eq!(map.label_scroll(&tl, "middle"), Some(500.0));
        assert_eq!(map.label_scroll(&tl, "missing"), None);
    }

    #[test]
    fn first_sample_lands_on_target() {
        let mut scrub = Scrubber::new(1.0);
        assert_eq!(scrub.advance(12.0, 0.016), 12.0);
    }

    #[test]
    fn playhead_trails_then_catches_up() {
        let mut scrub = Scrubber::new(1.0);
        scrub.advance(0.0, 0.016);
        let first = scrub.advance(10.0, 0.1);
        assert!(first > 0.0 && first < 10.0);

        let mut head = first;
        for _ in 0..20 {
            head = scrub.advance(10.0, 0.1);
        }
        assert!((head - 10.0).abs() < 0.01);
    }

    #[test]
    fn frame_rate_does_not_change_catch_up() {
        let mut coarse = Scrubber::new(1.0);
        let mut fine = Scrubber::new(1.0);
        coarse.advance(0.0, 0.0);
        fine.advance(0.0, 0.0);
        let a = coarse.advance(10.0, 0.5);
        let mut b = 0.0;
        for _ in 0..5 {
            b = fine.advance(10.0, 0.1);
        }
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn zero_lag_follows_directly() {
        let mut scrub = Scrubber::new(0.0);
        scrub.advance(1.0, 0.016);
        assert_eq!(scrub.advance(5.0, 0.016), 5.0);
    }
}
