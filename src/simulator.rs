use crate::config::BackgroundConfig;
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::surface::Surface;

/// The blurred blob field behind the landing page.
///
/// Frame scheduling lives with the host; this type only knows how to seed the
/// field and how to step and paint one frame of it.
pub struct BackgroundSimulator<R> {
    config: BackgroundConfig,
    rng: R,
    filter: String,
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    frames: u64,
}

impl<R: RandomSource> BackgroundSimulator<R> {
    pub fn new(config: BackgroundConfig, rng: R) -> Self {
        let filter = config.filter();
        Self {
            config,
            rng,
            filter,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            frames: 0,
        }
    }

    /// Reseed the field for a `width` x `height` surface: one fresh blob per
    /// palette color. Nothing survives from the previous seeding, including
    /// after a resize.
    pub fn setup(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;

        let config = &self.config;
        let rng = &mut self.rng;
        self.particles.clear();
        self.particles.extend(
            config
                .palette
                .iter()
                .map(|color| Particle::spawn(color, width, height, config, rng)),
        );

        log::debug!(
            "background seeded with {} blobs at {}x{}",
            self.particles.len(),
            width,
            height
        );
    }

    /// Clear, blur, then update and draw every blob in palette order.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);
        surface.set_filter(&self.filter);

        for particle in &mut self.particles {
            particle.update();
            particle.draw(surface);
        }
        self.frames += 1;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
