use crate::config::BackgroundConfig;
use crate::point::Point;
use crate::random::RandomSource;
use crate::surface::Surface;

/// A soft colored blob drifting inside the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub radius: f64,
    pub color: String,
    pub bounds_width: f64,
    pub bounds_height: f64,
}

impl Particle {
    /// Random position inside the bounds, random velocity and radius.
    pub fn spawn<R: RandomSource + ?Sized>(
        color: &str,
        bounds_width: f64,
        bounds_height: f64,
        config: &BackgroundConfig,
        rng: &mut R,
    ) -> Self {
        let position = Point::new(
            rng.next_f64() * bounds_width,
            rng.next_f64() * bounds_height,
        );
        let velocity = Point::new(
            rng.range(-config.max_speed, config.max_speed),
            rng.range(-config.max_speed, config.max_speed),
        );
        let radius = rng.range(config.radius_min, config.radius_max);

        Self {
            position,
            velocity,
            radius,
            color: color.to_string(),
            bounds_width,
            bounds_height,
        }
    }

    /// Advance one frame. Reflects without clamping, so a blob may sit up to
    /// one step outside the bounds before it turns around.
    pub fn update(&mut self) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > self.bounds_width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > self.bounds_height {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.position, self.radius, &self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            position: Point::new(x, y),
            velocity: Point::new(vx, vy),
            radius: 200.0,
            color: "#FFA500".into(),
            bounds_width: 100.0,
            bounds_height: 50.0,
        }
    }

    #[test]
    fn moves_by_velocity_inside_bounds() {
        let mut p = blob(10.0, 10.0, 1.5, -0.5);
        p.update();
        assert_eq!(p.position, Point::new(11.5, 9.5));
        assert_eq!(p.velocity, Point::new(1.5, -0.5));
    }

    #[test]
    fn reflects_each_axis_independently() {
        let mut p = blob(99.5, 25.0, 1.0, 0.5);
        p.update();
        assert!(p.position.x > 100.0, "one frame of overshoot is allowed");
        assert_eq!(p.velocity, Point::new(-1.0, 0.5));

        p.update();
        assert_eq!(p.position.x, 99.5);

        let mut p = blob(50.0, 0.2, 0.0, -1.0);
        p.update();
        assert_eq!(p.velocity, Point::new(0.0, 1.0));
    }

    #[test]
    fn sitting_on_the_edge_is_inside() {
        let mut p = blob(99.0, 49.0, 1.0, 1.0);
        p.update();
        assert_eq!(p.position, Point::new(100.0, 50.0));
        assert_eq!(p.velocity, Point::new(1.0, 1.0));
    }
}
