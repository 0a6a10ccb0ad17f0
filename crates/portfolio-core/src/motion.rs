//! Entry animation math.
//!
//! The animation engine itself is CSS; this module only decides *when* an
//! element is allowed to reach its resting state and how long it waits.

use std::time::Duration;

/// How entry animations are driven for a mounted page
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MotionMode {
    /// Cards wait for the viewport observer before revealing
    #[default]
    Animated,
    /// Every latch starts tripped; nothing waits for the observer.
    /// Used for reduced-motion runs and server-side rendering.
    Static,
}

impl MotionMode {
    pub fn starts_revealed(&self) -> bool {
        matches!(self, MotionMode::Static)
    }
}

/// One-shot "has animated" flag for a single rendered element.
///
/// The first intersecting observation trips it; it never resets for the
/// lifetime of the element, so scrolling out and back in does not replay.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new(mode: MotionMode) -> Self {
        Self {
            revealed: mode.starts_revealed(),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observer reading. Returns `true` only for the reading that
    /// trips the latch; every later call returns `false`.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Start-time offset proportional to position in an ordered list
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stagger {
    base_ms: u64,
    step_ms: u64,
}

impl Stagger {
    pub const HERO_BADGES: Stagger = Stagger::new(200, 100);
    pub const SKILL_CARDS: Stagger = Stagger::new(0, 50);
    pub const TECH_TAGS: Stagger = Stagger::new(200, 50);
    pub const TIMELINE_CARDS: Stagger = Stagger::new(0, 100);
    pub const PROJECT_CARDS: Stagger = Stagger::new(0, 50);
    pub const QUOTE_CARDS: Stagger = Stagger::new(0, 100);

    pub const fn new(base_ms: u64, step_ms: u64) -> Self {
        Self { base_ms, step_ms }
    }

    pub fn delay_ms(&self, index: usize) -> u64 {
        let index = u64::try_from(index).unwrap_or(u64::MAX);
        self.base_ms
            .saturating_add(self.step_ms.saturating_mul(index))
    }
}

/// Duration of the skill bar fill transition
pub const BAR_FILL: Duration = Duration::from_millis(900);

/// Width (percent) a skill bar should render at.
///
/// Zero until the card has been revealed, then exactly `level` (clamped to
/// 100 so a malformed entry cannot overflow its track).
pub fn bar_fill_percent(level: u8, revealed: bool) -> u8 {
    if revealed {
        level.min(100)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_trips_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
    }

    #[test]
    fn static_mode_starts_revealed() {
        let mut latch = RevealLatch::new(MotionMode::Static);
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
        assert!(!RevealLatch::new(MotionMode::Animated).is_revealed());
    }

    #[test]
    fn stagger_delays() {
        assert_eq!(Stagger::HERO_BADGES.delay_ms(0), 200);
        assert_eq!(Stagger::HERO_BADGES.delay_ms(3), 500);
        assert_eq!(Stagger::SKILL_CARDS.delay_ms(5), 250);
        assert_eq!(Stagger::TECH_TAGS.delay_ms(6), 500);
        assert_eq!(Stagger::TIMELINE_CARDS.delay_ms(1), 100);
        assert_eq!(Stagger::PROJECT_CARDS.delay_ms(0), 0);
    }

    #[test]
    fn stagger_saturates() {
        let s = Stagger::new(u64::MAX - 1, 10);
        assert_eq!(s.delay_ms(1), u64::MAX);
    }

    #[test]
    fn bar_fill_follows_reveal() {
        assert_eq!(bar_fill_percent(92, false), 0);
        assert_eq!(bar_fill_percent(92, true), 92);
        assert_eq!(bar_fill_percent(0, true), 0);
        assert_eq!(bar_fill_percent(180, true), 100);
    }
}
