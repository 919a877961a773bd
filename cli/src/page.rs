//! # Landing Page Signals
//!
//! File: cli/src/page.rs
//! Author: Christi Mahu
//!
//! The page glue (navbar, back-to-top button, preloader) takes a handful of
//! decisions that do not depend on the DOM. They live here so every front end
//! applies the same thresholds.
//!
use std::time::Duration;

/// Vertical offset (px) beyond which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
/// Vertical offset (px) beyond which the back-to-top control is shown.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Visibility flags derived from the scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSignals {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollSignals {
    /// Both thresholds are strict: exactly 50 px is not "scrolled".
    pub fn at(offset_y: f64) -> Self {
        Self {
            navbar_scrolled: offset_y > NAVBAR_SCROLL_THRESHOLD,
            back_to_top_visible: offset_y > BACK_TO_TOP_THRESHOLD,
        }
    }
}

/// # Preloader Progress (`PreloaderProgress`)
///
/// Yields the rounded percentage shown at each tick of the loading bar. The
/// bar fills linearly over `duration` in `tick` steps and the last value is
/// always exactly 100.
#[derive(Debug, Clone)]
pub struct PreloaderProgress {
    progress: f64,
    increment: f64,
    done: bool,
}

impl PreloaderProgress {
    pub fn new(duration: Duration, tick: Duration) -> Self {
        let ticks = duration.as_secs_f64() / tick.as_secs_f64();
        let increment = if ticks.is_finite() && ticks > 0.0 {
            100.0 / ticks
        } else {
            100.0
        };
        Self {
            progress: 0.0,
            increment,
            done: false,
        }
    }

    /// The landing page's bar: 1.5 s at 20 ms ticks.
    pub fn landing() -> Self {
        Self::new(Duration::from_millis(1500), Duration::from_millis(20))
    }
}

impl Iterator for PreloaderProgress {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }
        self.progress += self.increment;
        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.done = true;
        }
        Some(self.progress.round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_thresholds_are_strict() {
        assert_eq!(
            ScrollSignals::at(0.0),
            ScrollSignals {
                navbar_scrolled: false,
                back_to_top_visible: false
            }
        );
        assert!(!ScrollSignals::at(50.0).navbar_scrolled);
        assert!(ScrollSignals::at(50.5).navbar_scrolled);
        assert!(!ScrollSignals::at(500.0).back_to_top_visible);
        let deep = ScrollSignals::at(501.0);
        assert!(deep.navbar_scrolled && deep.back_to_top_visible);
    }

    #[test]
    fn test_landing_preloader_fills_to_100() {
        let steps: Vec<u8> = PreloaderProgress::landing().collect();
        // 1500 / 20 = 75 ticks; float accumulation may need one extra.
        assert!(steps.len() == 75 || steps.len() == 76, "{} steps", steps.len());
        assert_eq!(steps.last(), Some(&100));
        assert!(steps.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(steps[0], 1);
    }

    #[test]
    fn test_degenerate_preloader_finishes_at_once() {
        let steps: Vec<u8> =
            PreloaderProgress::new(Duration::ZERO, Duration::from_millis(20)).collect();
        assert_eq!(steps, vec![100]);
    }
}
