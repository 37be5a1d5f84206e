//! Tweens and the timelines that sequence them.
//!
//! A [`Timeline`] is advanced explicitly by the host's frame deltas; nothing in
//! here reads a clock. Tween values are sampled from the timeline's current
//! time.

use crate::easing::Ease;

/// Animatable style channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    /// Vertical offset in CSS pixels.
    TranslateY,
    /// Height as a percentage of the parent.
    Height,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Pending,
    Running,
    Complete,
}

/// Where a tween lands when appended to a timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    End,
    /// Relative to the current end; `FromEnd(-1.2)` overlaps the last 1.2s.
    FromEnd(f64),
    /// At an absolute time.
    At(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    pub target: T,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl<T> Tween<T> {
    /// A one-second tween with the default ease, starting at zero.
    pub fn new(target: T, property: Property, from: f64, to: f64) -> Self {
        Self {
            target,
            property,
            from,
            to,
            start: 0.0,
            duration: 1.0,
            ease: Ease::default(),
        }
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    pub fn state_at(&self, time: f64) -> PlayState {
        if time < self.start {
            PlayState::Pending
        } else if time >= self.end() {
            PlayState::Complete
        } else {
            PlayState::Running
        }
    }

    /// `from` before the start, `to` after the end, eased in between.
    pub fn value_at(&self, time: f64) -> f64 {
        if time < self.start {
            return self.from;
        }
        if self.duration <= 0.0 {
            return self.to;
        }
        let progress = (time - self.start) / self.duration;
        self.from + (self.to - self.from) * self.ease.apply(progress)
    }
}

#[derive(Clone, Debug)]
pub struct Timeline<T> {
    tweens: Vec<Tween<T>>,
    time: f64,
    playing: bool,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            tweens: Vec::new(),
            time: 0.0,
            playing: false,
        }
    }
}

impl<T: Copy + PartialEq> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tween`, overriding its start with `position`.
    pub fn then(mut self, mut tween: Tween<T>, position: Position) -> Self {
        let end = self.duration();
        tween.start = match position {
            Position::End => end,
            Position::FromEnd(offset) => (end + offset).max(0.0),
            Position::At(at) => at.max(0.0),
        };
        self.tweens.push(tween);
        self
    }

    /// End of the latest tween.
    pub fn duration(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Move the playhead forward by `dt` seconds. Does nothing until played.
    pub fn advance(&mut self, dt: f64) -> PlayState {
        if self.playing {
            self.time = (self.time + dt.max(0.0)).min(self.duration());
        }
        self.state()
    }

    pub fn state(&self) -> PlayState {
        if !self.playing {
            PlayState::Pending
        } else if self.time >= self.duration() {
            PlayState::Complete
        } else {
            PlayState::Running
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.time
    }

    pub fn tweens(&self) -> &[Tween<T>] {
        &self.tweens
    }

    /// One value per (target, property): the latest tween on that key that has
    /// started wins, otherwise the first tween's `from` holds the channel.
    pub fn values(&self) -> Vec<(T, Property, f64)> {
        let mut out: Vec<(T, Property, f64)> = Vec::new();
        for tween in &self.tweens {
            let value = tween.value_at(self.time);
            let started = tween.state_at(self.time) != PlayState::Pending;
            match out
                .iter_mut()
                .find(|(t, p, _)| *t == tween.target && *p == tween.property)
            {
                Some(slot) if started => slot.2 = value,
                Some(_) => {}
                None => out.push((tween.target, tween.property, value)),
            }
        }
        out
    }

    pub fn value(&self, target: T, property: Property) -> Option<f64> {
        self.values()
            .into_iter()
            .find(|(t, p, _)| *t == target && *p == property)
            .map(|(_, _, v)| v)
    }
}
