//! Calendar year source for the footer.

use chrono::Datelike;

/// Anything that can tell the current calendar year
pub trait Clock {
    fn year(&self) -> i32;
}

/// Local wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Clock pinned to a single year
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn year(&self) -> i32 {
        self.0
    }
}

/// Footer text for `owner`, stamped with the clock's current year
pub fn copyright_line(clock: &dyn Clock, owner: &str) -> String {
    format!(
        "\u{00A9} {} {}. Crafted with motion and love.",
        clock.year(),
        owner
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_uses_clock_year() {
        assert_eq!(
            copyright_line(&FixedClock(2024), "Your Name"),
            "\u{00A9} 2024 Your Name. Crafted with motion and love."
        );
        assert!(copyright_line(&FixedClock(2031), "Ada").starts_with("\u{00A9} 2031 Ada."));
    }

    #[test]
    fn system_clock_matches_chrono() {
        let year = SystemClock.year();
        assert!(year >= 2024);
        assert_eq!(year, chrono::Local::now().year());
    }
}
