//! Navigation bar state machine.
//!
//! The bar has two independent bits of state: whether the page has scrolled
//! past [`SCROLL_THRESHOLD_PX`] and whether the mobile menu is expanded. Both
//! start false on mount. Scroll events recompute the first bit from the
//! current offset, so applying the same offset twice is a no-op.

/// Offset (CSS pixels) the page must scroll *past* before the bar turns solid
pub const SCROLL_THRESHOLD_PX: f64 = 12.0;

/// Whether a vertical scroll offset counts as "scrolled".
///
/// Strictly greater-than: an offset of exactly the threshold is unscrolled.
/// NaN never counts as scrolled.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Mobile menu visibility
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Expanded)
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        }
    }

    /// Accessible label for the toggle control
    pub fn toggle_label(&self) -> &'static str {
        match self {
            MenuState::Collapsed => "Open menu",
            MenuState::Expanded => "Close menu",
        }
    }
}

/// Visual treatment of the fixed header
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeaderStyle {
    /// Page at the top: no background, no border
    #[default]
    Transparent,
    /// Page scrolled: translucent blurred panel with a bottom border
    Solid,
}

impl HeaderStyle {
    pub fn for_offset(offset: f64) -> Self {
        if is_scrolled(offset) {
            HeaderStyle::Solid
        } else {
            HeaderStyle::Transparent
        }
    }

    /// Returns the CSS class for this treatment
    pub fn class(&self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "site-header",
            HeaderStyle::Solid => "site-header scrolled",
        }
    }
}

/// Inputs that move the navigation bar between states
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavEvent {
    /// Window reported a new vertical scroll offset
    Scrolled(f64),
    /// The mobile menu toggle was clicked
    ToggleMenu,
    /// A link inside the mobile menu was clicked
    LinkChosen,
}

/// Combined navigation bar state: {collapsed, expanded} x {transparent, solid}
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NavState {
    pub style: HeaderStyle,
    pub menu: MenuState,
}

impl NavState {
    /// Returns the state after `event`. Pure; the caller decides whether
    /// the new state differs enough to re-render.
    pub fn after(self, event: NavEvent) -> Self {
        match event {
            NavEvent::Scrolled(offset) => NavState {
                style: HeaderStyle::for_offset(offset),
                ..self
            },
            NavEvent::ToggleMenu => NavState {
                menu: self.menu.toggled(),
                ..self
            },
            NavEvent::LinkChosen => NavState {
                menu: MenuState::Collapsed,
                ..self
            },
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.style == HeaderStyle::Solid
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_collapsed_and_transparent() {
        let state = NavState::default();
        assert_eq!(state.style, HeaderStyle::Transparent);
        assert_eq!(state.menu, MenuState::Collapsed);
        assert!(!state.is_scrolled());
        assert!(!state.menu_open());
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(12.0));
        assert!(is_scrolled(12.5));
        assert!(is_scrolled(13.0));
        assert!(!is_scrolled(f64::NAN));
    }

    #[test]
    fn header_style_classes() {
        assert_eq!(HeaderStyle::Transparent.class(), "site-header");
        assert_eq!(HeaderStyle::Solid.class(), "site-header scrolled");
    }

    #[test]
    fn scrolling_back_up_restores_transparent() {
        let state = NavState::default()
            .after(NavEvent::Scrolled(400.0))
            .after(NavEvent::Scrolled(3.0));
        assert_eq!(state.style, HeaderStyle::Transparent);
    }

    #[test]
    fn scroll_does_not_touch_menu() {
        let open = NavState::default().after(NavEvent::ToggleMenu);
        let scrolled = open.after(NavEvent::Scrolled(90.0));
        assert!(scrolled.menu_open());
        assert!(scrolled.is_scrolled());
    }

    #[test]
    fn link_closes_open_menu() {
        let state = NavState::default()
            .after(NavEvent::ToggleMenu)
            .after(NavEvent::LinkChosen);
        assert_eq!(state.menu, MenuState::Collapsed);
    }

    #[test]
    fn toggle_labels() {
        assert_eq!(MenuState::Collapsed.toggle_label(), "Open menu");
        assert_eq!(MenuState::Expanded.toggle_label(), "Close menu");
    }
}
