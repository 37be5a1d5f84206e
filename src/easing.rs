//! Easing curves, named after the tween library the page was first styled
//! with. `PowerN` is a polynomial of degree `N + 1`.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    #[default]
    Power1Out,
    Power2InOut,
    Power3Out,
}

impl Ease {
    /// Maps progress in `[0, 1]` to eased progress. Input outside the range is
    /// clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(3) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}
