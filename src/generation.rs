//! The showcase page's before/after "AI render" demo.
//!
//! Nothing is computed: pressing the button plays a fixed scanline sweep and
//! crossfade, then the demo stays finished for good.

use crate::config::GenerationConfig;
use crate::easing::Ease;
use crate::timeline::{PlayState, Position, Property, Timeline, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Processing,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DemoLayer {
    Scanline,
    RawImage,
    GeneratedImage,
}

pub struct GenerationDemo {
    state: GenerationState,
    timeline: Timeline<DemoLayer>,
    render_time_label: &'static str,
}

impl GenerationDemo {
    pub fn new(config: GenerationConfig) -> Self {
        let timeline = Timeline::new()
            .then(
                Tween::new(DemoLayer::Scanline, Property::Height, 0.0, 100.0)
                    .duration(config.sweep_duration)
                    .ease(Ease::Power2InOut),
                Position::End,
            )
            .then(
                Tween::new(DemoLayer::RawImage, Property::Opacity, 1.0, 0.0)
                    .duration(config.crossfade_duration),
                Position::FromEnd(-config.crossfade_lead),
            )
            .then(
                Tween::new(DemoLayer::GeneratedImage, Property::Opacity, 0.0, 1.0)
                    .duration(config.crossfade_duration),
                Position::FromEnd(-config.crossfade_lead),
            )
            .then(
                Tween::new(DemoLayer::Scanline, Property::Opacity, 1.0, 0.0)
                    .duration(config.scanline_fade),
                Position::End,
            );

        Self {
            state: GenerationState::Idle,
            timeline,
            render_time_label: config.render_time_label,
        }
    }

    /// Start processing. Only the first call from `Idle` does anything;
    /// returns whether it did.
    pub fn start(&mut self) -> bool {
        if self.state != GenerationState::Idle {
            return false;
        }
        self.state = GenerationState::Processing;
        self.timeline.play();
        log::debug!("generation demo processing");
        self.settle();
        true
    }

    /// Advance the sweep by `dt` seconds; moves to `Done` once it finishes.
    pub fn advance(&mut self, dt: f64) -> GenerationState {
        if self.state == GenerationState::Processing {
            self.timeline.advance(dt);
            self.settle();
        }
        self.state
    }

    fn settle(&mut self) {
        if self.timeline.state() == PlayState::Complete {
            self.state = GenerationState::Done;
            log::debug!("generation demo done");
        }
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn total_duration(&self) -> f64 {
        self.timeline.duration()
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            GenerationState::Idle => "GENERATE",
            GenerationState::Processing => "PROCESSING...",
            GenerationState::Done => "DONE",
        }
    }

    pub fn trigger_enabled(&self) -> bool {
        self.state == GenerationState::Idle
    }

    /// Readout shown under the button once finished.
    pub fn render_time(&self) -> Option<&'static str> {
        (self.state == GenerationState::Done).then_some(self.render_time_label)
    }

    pub fn values(&self) -> Vec<(DemoLayer, Property, f64)> {
        self.timeline.values()
    }

    pub fn value(&self, layer: DemoLayer, property: Property) -> Option<f64> {
        self.timeline.value(layer, property)
    }
}

impl Default for GenerationDemo {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}
