//! Entrance animation presets.
//!
//! A section reveals its lines progressively once it has something to show:
//! nothing for `delay` ticks, then one more line every `stagger` ticks.

use crate::sections::SectionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationPreset {
    pub delay: u32,
    pub stagger: u32,
}

impl AnimationPreset {
    pub const fn new(delay: u32, stagger: u32) -> Self {
        Self { delay, stagger }
    }

    pub fn for_section(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Hero => Self::new(0, 1),
            SectionKind::About => Self::new(2, 2),
            SectionKind::Skills => Self::new(2, 1),
            SectionKind::Projects => Self::new(1, 1),
            SectionKind::Testimonials => Self::new(2, 2),
            SectionKind::Contact => Self::new(2, 2),
            SectionKind::Footer => Self::new(0, 0),
        }
    }

    /// Number of lines visible `elapsed` ticks after the section became ready.
    pub fn revealed(&self, elapsed: u32, total: usize, reduced_motion: bool) -> usize {
        if reduced_motion || self.stagger == 0 {
            return total;
        }
        if elapsed < self.delay {
            return 0;
        }
        let shown = 1 + ((elapsed - self.delay) / self.stagger) as usize;
        shown.min(total)
    }

    /// Ticks until all `total` lines are visible.
    pub fn duration(&self, total: usize) -> u32 {
        if self.stagger == 0 || total == 0 {
            return 0;
        }
        self.delay + (total as u32 - 1) * self.stagger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_after_delay_then_staggers() {
        let preset = AnimationPreset::new(2, 3);
        assert_eq!(preset.revealed(0, 5, false), 0);
        assert_eq!(preset.revealed(2, 5, false), 1);
        assert_eq!(preset.revealed(5, 5, false), 2);
        assert_eq!(preset.revealed(100, 5, false), 5);
        assert_eq!(preset.duration(5), 14);
    }

    #[test]
    fn reduced_motion_shows_everything() {
        let preset = AnimationPreset::for_section(SectionKind::About);
        assert_eq!(preset.revealed(0, 7, true), 7);
    }
}
