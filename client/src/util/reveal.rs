//! Staggered entrance timing for the landing page.
//!
//! Elements carry the `reveal` class (a CSS keyframe fade/slide) and an
//! inline delay. Timings are cosmetic.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Entrance step: delay before the animation starts and its duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Reveal {
    #[must_use]
    pub const fn new(delay_ms: u32, duration_ms: u32) -> Self {
        Self { delay_ms, duration_ms }
    }

    /// Inline `style` value.
    #[must_use]
    pub fn style(self) -> String {
        format!("animation-delay: {}ms; animation-duration: {}ms;", self.delay_ms, self.duration_ms)
    }
}

pub const HEADER: Reveal = Reveal::new(0, 800);
pub const TITLE: Reveal = Reveal::new(200, 600);
pub const SUBTITLE: Reveal = Reveal::new(500, 500);
pub const SIGNUP: Reveal = Reveal::new(800, 800);
pub const SOCIAL: Reveal = Reveal::new(1200, 800);
pub const QUICK_TOGGLE: Reveal = Reveal::new(1500, 800);
pub const SWITCHER: Reveal = Reveal::new(0, 500);
