use crate::content::Anchor;

/// Scroll offset, in pixels, past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset >= SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = is_scrolled(offset);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A navigation link was followed: the mobile menu closes.
    pub fn activate(&mut self, anchor: Anchor) -> Anchor {
        self.menu_open = false;
        anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(is_scrolled(50.0));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn test_scrolled_recomputed_without_hysteresis() {
        let mut nav = NavState::default();
        assert!(!nav.scrolled());
        nav.on_scroll(80.0);
        assert!(nav.scrolled());
        nav.on_scroll(49.0);
        assert!(!nav.scrolled());
        nav.on_scroll(50.0);
        assert!(nav.scrolled());
    }

    #[test]
    fn test_mobile_menu() {
        let mut nav = NavState::default();
        assert!(!nav.menu_open());

        nav.toggle_menu();
        assert!(nav.menu_open());
        assert_eq!(nav.activate(Anchor::Projects), Anchor::Projects);
        assert!(!nav.menu_open());

        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_menu_and_scroll_independent() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.on_scroll(300.0);
        assert!(nav.menu_open());
        nav.activate(Anchor::Contact);
        assert!(nav.scrolled());
    }
}
