//! Compile-time tunables for the animated layers.
//!
//! Every component takes its config by value at construction, so tests can
//! shrink durations or swap palettes without touching the defaults below.

use crate::easing::Ease;

/// One entry per key project theme; also fixes the draw order.
pub const BACKGROUND_PALETTE: [&str; 4] = ["#FFA500", "#A71C1C", "#3498DB", "#E85D9A"];

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub palette: Vec<String>,
    /// Blur applied to the whole surface, in CSS pixels.
    pub blur_px: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Velocity components are drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
}

impl BackgroundConfig {
    pub fn filter(&self) -> String {
        format!("blur({}px)", self.blur_px)
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            palette: BACKGROUND_PALETTE.iter().map(|c| c.to_string()).collect(),
            blur_px: 100.0,
            radius_min: 150.0,
            radius_max: 250.0,
            max_speed: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub radius_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { radius_px: 300.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceConfig {
    pub hero_delay: f64,
    pub hero_stagger: f64,
    pub hero_duration: f64,
    pub hero_offset_y: f64,
    pub hero_ease: Ease,
    pub section_duration: f64,
    pub section_offset_y: f64,
    pub section_ease: Ease,
    /// Fraction of the viewport height the section top has to cross.
    pub section_start: f64,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            hero_delay: 0.2,
            hero_stagger: 0.15,
            hero_duration: 1.0,
            hero_offset_y: 70.0,
            hero_ease: Ease::Power3Out,
            section_duration: 1.0,
            section_offset_y: 50.0,
            section_ease: Ease::default(),
            section_start: 0.8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    pub sweep_duration: f64,
    /// How far before the end of the sweep the crossfade begins.
    pub crossfade_lead: f64,
    pub crossfade_duration: f64,
    pub scanline_fade: f64,
    pub render_time_label: &'static str,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            sweep_duration: 1.5,
            crossfade_lead: 1.2,
            crossfade_duration: 1.0,
            scanline_fade: 0.3,
            render_time_label: "Render time: 0.8s",
        }
    }
}
