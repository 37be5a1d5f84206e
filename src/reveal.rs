use crate::config::RevealConfig;
use crate::point::Point;

/// Last known pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    position: Point,
}

impl PointerState {
    /// Centered in the viewport until the pointer first moves.
    pub fn centered(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            position: Point::new(viewport_width / 2.0, viewport_height / 2.0),
        }
    }

    /// Snap to the new coordinates. No easing.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// Circular soft-edged mask that only lets the background through around the
/// pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMask {
    config: RevealConfig,
}

impl RevealMask {
    pub fn new(config: RevealConfig) -> Self {
        Self { config }
    }

    /// CSS `mask-image` value centered on the pointer.
    pub fn css(&self, pointer: &PointerState) -> String {
        let center = pointer.position();
        format!(
            "radial-gradient(circle {}px at {}px {}px, black 0%, transparent 100%)",
            self.config.radius_px, center.x, center.y
        )
    }

    /// Mask opacity at `point`: 1 at the center, fading linearly to 0 at the
    /// radius.
    pub fn alpha_at(&self, pointer: &PointerState, point: Point) -> f64 {
        if self.config.radius_px <= 0.0 {
            return 0.0;
        }
        let d = pointer.position().distance(point);
        (1.0 - d / self.config.radius_px).clamp(0.0, 1.0)
    }
}

impl Default for RevealMask {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}
