/// One-shot visibility latch for a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unseen,
    Seen,
}

impl RevealState {
    /// Feeds one intersection report. `Seen` is absorbing.
    pub fn observe(self, intersecting: bool) -> Self {
        match (self, intersecting) {
            (Self::Unseen, false) => Self::Unseen,
            _ => Self::Seen,
        }
    }

    /// Starting point once mounted. Without an observer nothing would ever
    /// report an intersection, so the section starts out seen.
    pub fn on_mount(self, observer_supported: bool) -> Self {
        if observer_supported {
            self
        } else {
            Self::Seen
        }
    }

    pub fn is_seen(self) -> bool {
        self == Self::Seen
    }
}

/// Class list for an element that animates in once its section is seen.
///
/// `from` is the hidden variant (`fade-up`, `fade-left`, ...) used before reveal.
pub fn reveal_class(from: &str, revealed: bool) -> String {
    if revealed {
        format!("reveal {from} is-visible")
    } else {
        format!("reveal {from}")
    }
}

/// Inline style carrying the transition timing for a staggered child.
pub fn stagger_style(duration: f32, base_delay: f32, step: f32, index: usize) -> String {
    let delay = base_delay + step * index as f32;
    format!("transition-duration: {duration:.2}s; transition-delay: {delay:.2}s;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_never_reverts() {
        let s = RevealState::default();
        assert!(!s.is_seen());

        let s = s.observe(false);
        assert!(!s.is_seen());

        let s = s.observe(true);
        assert!(s.is_seen());

        // scrolled back out of view
        let s = s.observe(false);
        assert!(s.is_seen());
        assert!(s.observe(false).observe(true).observe(false).is_seen());
    }

    #[test]
    fn test_no_observer_shows_section() {
        assert!(RevealState::Unseen.on_mount(false).is_seen());
        assert!(!RevealState::Unseen.on_mount(true).is_seen());
        assert!(RevealState::Seen.on_mount(true).is_seen());
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class("fade-up", false), "reveal fade-up");
        assert_eq!(reveal_class("fade-up", true), "reveal fade-up is-visible");
    }

    #[test]
    fn test_stagger_style() {
        // about stats: 0.4s + 0.1s per card
        assert_eq!(
            stagger_style(0.4, 0.4, 0.1, 2),
            "transition-duration: 0.40s; transition-delay: 0.60s;"
        );
        assert_eq!(
            stagger_style(0.3, 0.3, 0.05, 0),
            "transition-duration: 0.30s; transition-delay: 0.30s;"
        );
    }
}
