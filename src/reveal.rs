/// Observer threshold for a full-width section.
pub const SECTION_THRESHOLD: f64 = 0.2;
/// Observer threshold for the tall card grids (projects, certificates).
pub const GRID_THRESHOLD: f64 = 0.1;

/// One-shot visibility latch for a scroll-revealed section.
///
/// Starts hidden and becomes visible the first time the observer reports the
/// section as intersecting. The threshold is left to the observer: a section
/// taller than the viewport may never reach it, but it still reports on entry.
/// It never goes back to hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealFlag {
    visible: bool,
}

impl RevealFlag {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection observation. Returns `true` only for the
    /// observation that flips the flag.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Direction a revealed element travels in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    FadeUp,
    FromLeft,
    FromRight,
}

impl Reveal {
    pub const fn classes(self, visible: bool) -> &'static str {
        match (self, visible) {
            (Reveal::FadeUp, true) => "opacity-100 translate-y-0",
            (Reveal::FadeUp, false) => "opacity-0 translate-y-10",
            (Reveal::FromLeft, true) | (Reveal::FromRight, true) => "opacity-100 translate-x-0",
            (Reveal::FromLeft, false) => "opacity-0 -translate-x-10",
            (Reveal::FromRight, false) => "opacity-0 translate-x-10",
        }
    }
}

pub fn stagger_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

/// `transition-delay` style for the `index`th item of a staggered list.
pub fn stagger(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", stagger_ms(index, step_ms))
}

/// Inline style for a skill bar: width plus its place in the stagger.
pub fn bar_style(width: &str, category: usize, skill: usize) -> String {
    let delay = stagger_ms(category, 150) + stagger_ms(skill, 100);
    format!("width: {width}; transition-delay: {delay}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let flag = RevealFlag::default();
        assert!(!flag.is_visible());
    }

    #[test]
    fn test_reveals_once_on_first_intersection() {
        let mut flag = RevealFlag::default();
        assert!(!flag.observe(false));
        assert!(!flag.is_visible());

        assert!(flag.observe(true));
        assert!(flag.is_visible());

        // further crossings do not re-trigger
        assert!(!flag.observe(true));
    }

    #[test]
    fn test_stays_visible_after_leaving_viewport() {
        let mut flag = RevealFlag::default();
        flag.observe(true);
        for _ in 0..3 {
            flag.observe(false);
            assert!(flag.is_visible());
        }
    }

    #[test]
    fn test_tall_section_reveals_on_entry() {
        // 2200px section scrolled through a 400px viewport
        let (section, viewport) = (2200.0_f64, 400.0_f64);
        let mut flag = RevealFlag::default();
        let mut best_ratio = 0.0_f64;
        let mut top = viewport;
        while top > -section {
            let shown = (top + section).min(viewport) - top.max(0.0);
            let shown = shown.max(0.0);
            best_ratio = best_ratio.max(shown / section);
            flag.observe(shown > 0.0);
            top -= 10.0;
        }
        assert!(best_ratio < SECTION_THRESHOLD);
        assert!(flag.is_visible());
    }

    #[test]
    fn test_reveal_classes() {
        for kind in [Reveal::FadeUp, Reveal::FromLeft, Reveal::FromRight] {
            assert!(kind.classes(false).starts_with("opacity-0"));
            assert!(kind.classes(true).starts_with("opacity-100"));
        }
        assert_eq!(Reveal::FromLeft.classes(false), "opacity-0 -translate-x-10");
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, 150), "transition-delay: 0ms");
        assert_eq!(stagger(3, 150), "transition-delay: 450ms");
    }

    #[test]
    fn test_bar_style() {
        assert_eq!(bar_style("0%", 0, 0), "width: 0%; transition-delay: 0ms");
        assert_eq!(
            bar_style("100%", 2, 3),
            "width: 100%; transition-delay: 600ms"
        );
    }
}
