//! Impact section state: tab selection and count-up animations.

use web_time::Instant;

use crate::content;
use crate::countup::CountUp;

/// Tabs of the impact section.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum ImpactTab {
    #[default]
    Numbers,
    Capacity,
    Theory,
}

impl ImpactTab {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactTab::Numbers => "Impact in Numbers",
            ImpactTab::Capacity => "Capacity Building",
            ImpactTab::Theory => "Theory of Change",
        }
    }

    pub fn all() -> &'static [ImpactTab] {
        &[ImpactTab::Numbers, ImpactTab::Capacity, ImpactTab::Theory]
    }
}

/// Animation state for the impact figures.
pub struct ImpactState {
    /// Active tab.
    pub tab: ImpactTab,
    /// Animated pipeline headline figure.
    pub pipeline: CountUp,
    /// One count-up per statistic card, in card order.
    pub cards: Vec<CountUp>,
}

impl Default for ImpactState {
    fn default() -> Self {
        Self {
            tab: ImpactTab::default(),
            pipeline: CountUp::with_default_duration(content::PIPELINE_VALUE),
            cards: content::IMPACT_STATS
                .iter()
                .map(|stat| CountUp::with_default_duration(stat.value))
                .collect(),
        }
    }
}

impl ImpactState {
    /// Starts every figure that has not animated yet. Called the first time
    /// the section scrolls into view; repeat calls are no-ops.
    pub fn trigger_all(&mut self, now: Instant) {
        self.pipeline.trigger(now);
        for card in &mut self.cards {
            card.trigger(now);
        }
    }

    /// Whether any figure is mid-animation and needs further repaints.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.pipeline.is_animating(now) || self.cards.iter().any(|card| card.is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_time::Duration;

    #[test]
    fn test_cards_mirror_statistic_targets() {
        let state = ImpactState::default();
        assert_eq!(state.cards.len(), content::IMPACT_STATS.len());
        for (card, stat) in state.cards.iter().zip(content::IMPACT_STATS.iter()) {
            assert_eq!(card.target(), stat.value);
        }
        assert_eq!(state.pipeline.target(), content::PIPELINE_VALUE);
    }

    #[test]
    fn test_trigger_all_starts_every_figure_once() {
        let mut state = ImpactState::default();
        let start = Instant::now();
        assert!(!state.is_animating(start));

        state.trigger_all(start);
        assert!(state.pipeline.has_started());
        assert!(state.cards.iter().all(CountUp::has_started));
        assert!(state.is_animating(start));

        // Re-triggering later must not restart the sweep.
        let later = start + Duration::from_secs(10);
        state.trigger_all(later);
        assert!(!state.is_animating(later));
        assert_eq!(state.pipeline.value_at(later), content::PIPELINE_VALUE);
    }
}
