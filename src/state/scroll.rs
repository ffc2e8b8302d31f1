//! Page scroll tracking and section navigation.

use crate::content::SectionId;

/// Scroll offset beyond which the navigation bar condenses.
pub const CONDENSE_THRESHOLD: f32 = 50.0;

/// Scroll distance over which the hero section fades out.
pub const HERO_FADE_DISTANCE: f32 = 300.0;

/// Vertical scroll position of the page plus any pending section jump.
#[derive(Default)]
pub struct ScrollState {
    /// Current offset of the page scroll area, in points.
    pub offset: f32,
    /// Section to bring into view on the next frame.
    jump_to: Option<SectionId>,
}

impl ScrollState {
    /// Whether the navigation bar should render in its condensed form.
    pub fn condensed(&self) -> bool {
        self.offset > CONDENSE_THRESHOLD
    }

    /// Hero opacity factor: 1.0 at the top of the page, fading to 0.0
    /// once the page has scrolled [`HERO_FADE_DISTANCE`] points.
    pub fn hero_fade(&self) -> f32 {
        1.0 - (self.offset / HERO_FADE_DISTANCE).clamp(0.0, 1.0)
    }

    pub fn request_jump(&mut self, section: SectionId) {
        self.jump_to = Some(section);
    }

    /// Consumes the pending jump if it targets `section`.
    pub fn take_jump(&mut self, section: SectionId) -> bool {
        if self.jump_to == Some(section) {
            self.jump_to = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_condenses_past_threshold() {
        let mut scroll = ScrollState::default();
        assert!(!scroll.condensed());

        scroll.offset = CONDENSE_THRESHOLD;
        assert!(!scroll.condensed());

        scroll.offset = CONDENSE_THRESHOLD + 0.5;
        assert!(scroll.condensed());
    }

    #[test]
    fn test_hero_fade_is_linear_and_clamped() {
        let mut scroll = ScrollState::default();
        assert_eq!(scroll.hero_fade(), 1.0);

        scroll.offset = HERO_FADE_DISTANCE / 2.0;
        assert_eq!(scroll.hero_fade(), 0.5);

        scroll.offset = HERO_FADE_DISTANCE;
        assert_eq!(scroll.hero_fade(), 0.0);

        scroll.offset = HERO_FADE_DISTANCE * 3.0;
        assert_eq!(scroll.hero_fade(), 0.0);
    }

    #[test]
    fn test_jump_consumed_only_by_target_section() {
        let mut scroll = ScrollState::default();
        scroll.request_jump(SectionId::Projects);

        assert!(!scroll.take_jump(SectionId::About));
        assert!(scroll.take_jump(SectionId::Projects));
        assert!(!scroll.take_jump(SectionId::Projects));
    }
}
