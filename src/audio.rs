/// Playback state of the background track.
///
/// `Blocked` means the browser refused `play()` (usually an autoplay policy),
/// so the button can say so instead of pretending the track is audible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Paused,
    Playing,
    Blocked,
}

impl Playback {
    /// Next state after a click on the toggle.
    pub fn toggle(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            // a click is a fresh user gesture, so a blocked track gets another try
            Self::Paused | Self::Blocked => Self::Playing,
        }
    }

    /// The browser rejected the play request.
    pub fn rejected(self) -> Self {
        match self {
            Self::Playing => Self::Blocked,
            other => other,
        }
    }

    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Playing => "Mute audio",
            Self::Paused => "Play audio",
            Self::Blocked => "Audio blocked by browser, click to retry",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Playing => "🔊",
            Self::Paused => "🔇",
            Self::Blocked => "⚠",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Playing => "audio-toggle playing",
            Self::Paused => "audio-toggle",
            Self::Blocked => "audio-toggle blocked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        for start in [Playback::Paused, Playback::Playing, Playback::Blocked] {
            assert_eq!(
                start.toggle().toggle().is_playing(),
                start.is_playing(),
                "from {start:?}"
            );
        }
    }

    #[test]
    fn test_blocked_playback() {
        let s = Playback::Paused.toggle();
        assert!(s.is_playing());

        let s = s.rejected();
        assert_eq!(s, Playback::Blocked);
        assert!(!s.is_playing());

        // retry
        assert_eq!(s.toggle(), Playback::Playing);
    }

    #[test]
    fn test_late_rejection_after_pause() {
        // user paused before the play promise settled
        assert_eq!(Playback::Paused.rejected(), Playback::Paused);
    }

    #[test]
    fn test_labels_differ() {
        assert_ne!(Playback::Blocked.label(), Playback::Paused.label());
        assert_eq!(Playback::Playing.class(), "audio-toggle playing");
    }
}
