//! One-shot entrance animations: the staggered hero lines on mount and a
//! fire-once reveal per content section.

use crate::config::EntranceConfig;
use crate::timeline::{PlayState, Position, Property, Timeline, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntranceTarget {
    HeroLine(usize),
    Section(usize),
}

#[derive(Clone, Debug)]
struct SectionReveal {
    fired: bool,
    timeline: Timeline<EntranceTarget>,
}

pub struct EntranceController {
    hero: Timeline<EntranceTarget>,
    sections: Vec<SectionReveal>,
    start_fraction: f64,
    reverted: bool,
}

impl EntranceController {
    /// Builds and starts the hero timeline. Sections wait for
    /// [`section_visible`](Self::section_visible).
    pub fn new(config: EntranceConfig, hero_lines: usize, sections: usize) -> Self {
        let mut hero = (0..hero_lines).fold(Timeline::new(), |tl, i| {
            let at = Position::At(config.hero_delay + i as f64 * config.hero_stagger);
            let line = EntranceTarget::HeroLine(i);
            tl.then(
                Tween::new(line, Property::TranslateY, config.hero_offset_y, 0.0)
                    .duration(config.hero_duration)
                    .ease(config.hero_ease),
                at,
            )
            .then(
                Tween::new(line, Property::Opacity, 0.0, 1.0)
                    .duration(config.hero_duration)
                    .ease(config.hero_ease),
                at,
            )
        });
        hero.play();

        let sections = (0..sections)
            .map(|i| {
                let section = EntranceTarget::Section(i);
                let timeline = Timeline::new()
                    .then(
                        Tween::new(section, Property::Opacity, 0.0, 1.0)
                            .duration(config.section_duration)
                            .ease(config.section_ease),
                        Position::At(0.0),
                    )
                    .then(
                        Tween::new(section, Property::TranslateY, config.section_offset_y, 0.0)
                            .duration(config.section_duration)
                            .ease(config.section_ease),
                        Position::At(0.0),
                    );
                SectionReveal {
                    fired: false,
                    timeline,
                }
            })
            .collect();

        log::debug!("entrance armed for {hero_lines} hero lines");

        Self {
            hero,
            sections,
            start_fraction: config.section_start,
            reverted: false,
        }
    }

    /// Whether a section whose top edge sits at `top` (viewport coordinates)
    /// has crossed the trigger line.
    pub fn crosses_start(&self, top: f64, viewport_height: f64) -> bool {
        top <= viewport_height * self.start_fraction
    }

    /// Report that section `index` came into view. Returns `true` only the
    /// first time, when the reveal actually starts.
    pub fn section_visible(&mut self, index: usize) -> bool {
        if self.reverted {
            return false;
        }
        match self.sections.get_mut(index) {
            Some(reveal) if !reveal.fired => {
                reveal.fired = true;
                reveal.timeline.play();
                log::debug!("section {index} revealed");
                true
            }
            _ => false,
        }
    }

    pub fn section_fired(&self, index: usize) -> bool {
        self.sections.get(index).is_some_and(|s| s.fired)
    }

    pub fn advance(&mut self, dt: f64) {
        if self.reverted {
            return;
        }
        self.hero.advance(dt);
        for reveal in self.sections.iter_mut().filter(|s| s.fired) {
            reveal.timeline.advance(dt);
        }
    }

    /// Something is still moving.
    pub fn is_animating(&self) -> bool {
        !self.reverted
            && (self.hero.state() == PlayState::Running
                || self
                    .sections
                    .iter()
                    .any(|s| s.timeline.state() == PlayState::Running))
    }

    pub fn hero_state(&self) -> PlayState {
        self.hero.state()
    }

    /// Current style of every animated target. Unfired sections report their
    /// hidden starting values.
    pub fn values(&self) -> Vec<(EntranceTarget, Property, f64)> {
        let mut out = self.hero.values();
        for reveal in &self.sections {
            out.extend(reveal.timeline.values());
        }
        out
    }

    /// Every target this controller animates, for restoring their styles.
    pub fn targets(&self) -> Vec<EntranceTarget> {
        let hero = self.hero.tweens().len() / 2;
        (0..hero)
            .map(EntranceTarget::HeroLine)
            .chain((0..self.sections.len()).map(EntranceTarget::Section))
            .collect()
    }

    /// Stop everything. Later triggers and frames are ignored.
    pub fn revert(&mut self) {
        self.reverted = true;
    }

    pub fn is_reverted(&self) -> bool {
        self.reverted
    }
}
