#![cfg(not(target_arch = "wasm32"))]

use portfolio_motion::config::{BackgroundConfig, BACKGROUND_PALETTE};
use portfolio_motion::point::Point;
use portfolio_motion::random::RandomSource;
use portfolio_motion::simulator::BackgroundSimulator;
use portfolio_motion::surface::Surface;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded stand-in for `Math.random`.
struct Seeded(ChaCha8Rng);

impl Seeded {
    fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for Seeded {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

#[derive(Debug, PartialEq)]
enum Op {
    Clear(f64, f64),
    Filter(String),
    Circle(Point, f64, String),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Surface for Recorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Clear(width, height));
    }

    fn set_filter(&mut self, filter: &str) {
        self.ops.push(Op::Filter(filter.to_string()));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ops.push(Op::Circle(center, radius, color.to_string()));
    }
}

fn simulator(seed: u64) -> BackgroundSimulator<Seeded> {
    BackgroundSimulator::new(BackgroundConfig::default(), Seeded::new(seed))
}

fn assert_seeded(sim: &BackgroundSimulator<Seeded>, w: f64, h: f64) {
    assert_eq!(sim.particles().len(), BACKGROUND_PALETTE.len());
    for (p, color) in sim.particles().iter().zip(BACKGROUND_PALETTE) {
        assert_eq!(p.color, color);
        assert!((0.0..=w).contains(&p.position.x), "x={}", p.position.x);
        assert!((0.0..=h).contains(&p.position.y), "y={}", p.position.y);
        assert!((150.0..=250.0).contains(&p.radius), "r={}", p.radius);
        assert!(p.velocity.x.abs() <= 1.0 && p.velocity.y.abs() <= 1.0);
        assert_eq!((p.bounds_width, p.bounds_height), (w, h));
    }
}

#[test]
fn mount_at_800_by_600() {
    let mut sim = simulator(1);
    assert!(sim.particles().is_empty());
    sim.setup(800.0, 600.0);
    assert_eq!(sim.bounds(), (800.0, 600.0));
    assert_seeded(&sim, 800.0, 600.0);
}

#[test]
fn setup_replaces_rather_than_appends() {
    let mut sim = simulator(7);
    sim.setup(800.0, 600.0);
    let before = sim.particles().to_vec();

    sim.setup(1024.0, 768.0);
    assert_seeded(&sim, 1024.0, 768.0);
    for (old, new) in before.iter().zip(sim.particles()) {
        assert_ne!(old.position, new.position);
        assert_ne!(old.velocity, new.velocity);
    }
}

#[test]
fn frame_clears_blurs_then_paints_in_palette_order() {
    let mut sim = simulator(3);
    sim.setup(800.0, 600.0);
    let mut surface = Recorder::default();
    sim.render_frame(&mut surface);

    assert_eq!(surface.ops[0], Op::Clear(800.0, 600.0));
    assert_eq!(surface.ops[1], Op::Filter("blur(100px)".into()));
    assert_eq!(surface.ops.len(), 2 + BACKGROUND_PALETTE.len());
    for (op, p) in surface.ops[2..].iter().zip(sim.particles()) {
        assert_eq!(op, &Op::Circle(p.position, p.radius, p.color.clone()));
    }
    assert_eq!(sim.frame_count(), 1);
}

#[test]
fn velocity_flips_when_a_step_leaves_the_bounds() {
    let (w, h) = (300.0, 200.0);
    let mut sim = simulator(11);
    sim.setup(w, h);
    let mut surface = Recorder::default();
    let mut bounces = 0;

    for _ in 0..5_000 {
        let before = sim.particles().to_vec();
        sim.render_frame(&mut surface);
        surface.ops.clear();

        for (pre, post) in before.iter().zip(sim.particles()) {
            let next = Point::new(
                pre.position.x + pre.velocity.x,
                pre.position.y + pre.velocity.y,
            );
            let inside_x = (0.0..=w).contains(&pre.position.x);
            let inside_y = (0.0..=h).contains(&pre.position.y);
            if inside_x && !(0.0..=w).contains(&next.x) {
                assert_eq!(post.velocity.x, -pre.velocity.x);
                bounces += 1;
            }
            if inside_y && !(0.0..=h).contains(&next.y) {
                assert_eq!(post.velocity.y, -pre.velocity.y);
                bounces += 1;
            }
        }
    }
    assert!(bounces > 0, "5000 frames in a 300x200 box should bounce");

    // Never further out than one step.
    for p in sim.particles() {
        assert!(p.position.x >= -1.0 && p.position.x <= w + 1.0);
        assert!(p.position.y >= -1.0 && p.position.y <= h + 1.0);
    }
}

#[test]
fn resize_while_running_reseeds_into_new_bounds() {
    let mut sim = simulator(42);
    sim.setup(800.0, 600.0);
    let mut surface = Recorder::default();
    for _ in 0..30 {
        sim.render_frame(&mut surface);
    }
    let before: Vec<Point> = sim.particles().iter().map(|p| p.position).collect();

    sim.setup(400.0, 300.0);
    assert_seeded(&sim, 400.0, 300.0);
    for (old, new) in before.iter().zip(sim.particles()) {
        assert_ne!(*old, new.position);
    }
}

#[test]
fn custom_palette_sets_the_count() {
    let config = BackgroundConfig {
        palette: vec!["#000".into(), "#fff".into()],
        ..BackgroundConfig::default()
    };
    let mut sim = BackgroundSimulator::new(config, Seeded::new(5));
    sim.setup(10.0, 10.0);
    assert_eq!(sim.particles().len(), 2);
}
