//! Particle network: drifting points joined by fading proximity links.

use backdrop_core::{
    CYAN, FrameHandle, FrameScheduler, PRIMARY_BLUE, Point, Size, Stroke, Surface,
};
use log::{debug, trace};
use rand::Rng;

use crate::task::FrameTask;

/// Surface area covered by each particle.
pub const AREA_PER_PARTICLE: f64 = 15_000.0;

/// Pairs closer than this are linked.
pub const LINK_DISTANCE: f64 = 120.0;

/// Link opacity for two coincident particles.
pub const MAX_LINK_OPACITY: f64 = 0.2;

/// Largest absolute velocity component, in units per tick.
pub const MAX_SPEED: f64 = 0.25;

const MIN_RADIUS: f64 = 1.0;
const MAX_RADIUS: f64 = 2.5;
const LINK_WIDTH: f64 = 0.5;
const PARTICLE_OPACITY: f64 = 0.5;

/// Number of particles for a surface of the given size.
pub fn particle_count(size: Size) -> usize {
    (size.area() / AREA_PER_PARTICLE).floor() as usize
}

/// Opacity of the link between two particles `distance` apart, or `None`
/// when they are too far apart to be linked.
pub fn link_opacity(distance: f64) -> Option<f64> {
    (distance < LINK_DISTANCE)
        .then(|| MAX_LINK_OPACITY - MAX_LINK_OPACITY * distance / LINK_DISTANCE)
}

/// A single point mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Horizontal velocity per tick.
    pub vx: f64,
    /// Vertical velocity per tick.
    pub vy: f64,
    /// Radius of the drawn circle.
    pub radius: f64,
}

impl Particle {
    /// Create a particle at a uniformly random spot on the surface.
    pub fn random<R: Rng + ?Sized>(size: Size, rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..=size.width.max(0.0)),
            y: rng.random_range(0.0..=size.height.max(0.0)),
            vx: rng.random_range(-MAX_SPEED..=MAX_SPEED),
            vy: rng.random_range(-MAX_SPEED..=MAX_SPEED),
            radius: rng.random_range(MIN_RADIUS..=MAX_RADIUS),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move by one velocity step, bouncing off the surface edges.
    ///
    /// The position is not clamped: after crossing an edge the particle stays
    /// outside for one step while its velocity carries it back.
    pub fn step(&mut self, size: Size) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > size.width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > size.height {
            self.vy = -self.vy;
        }
    }
}

/// Animated network of particles.
///
/// Owns its random source so that a resize can reseed the whole set.
#[derive(Debug)]
pub struct ParticleField<R> {
    size: Size,
    particles: Vec<Particle>,
    rng: R,
    task: FrameTask,
}

impl<R: Rng> ParticleField<R> {
    /// Attach to a surface of `size` and request the first frame.
    pub fn attach(size: Size, mut rng: R, frames: &mut impl FrameScheduler) -> Self {
        let particles = spawn(size, &mut rng);
        debug!(
            "particle field attached at {}x{} with {} particles",
            size.width,
            size.height,
            particles.len()
        );
        Self {
            size,
            particles,
            rng,
            task: FrameTask::start(frames),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Pending frame request.
    pub fn frame(&self) -> Option<FrameHandle> {
        self.task.pending()
    }

    /// Whether [`ParticleField::teardown`] has not been called yet.
    pub fn is_running(&self) -> bool {
        self.task.is_running()
    }

    /// Whether this field's frame is among the fired handles.
    pub fn is_due(&self, fired: &[FrameHandle]) -> bool {
        self.task.is_due(fired)
    }

    /// Advance every particle, redraw the network and request the next frame.
    pub fn tick<S: Surface>(&mut self, surface: &mut S, frames: &mut impl FrameScheduler) {
        if !self.task.is_running() {
            return;
        }

        for particle in &mut self.particles {
            particle.step(self.size);
        }

        surface.clear();
        self.draw(surface);
        trace!("particle field tick with {} particles", self.particles.len());

        self.task.reschedule(frames);
    }

    /// Draw links between every close pair, then the particles on top.
    fn draw<S: Surface>(&self, surface: &mut S) {
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position().distance(b.position());
                if let Some(opacity) = link_opacity(distance) {
                    let stroke = Stroke {
                        color: CYAN.with_alpha(opacity),
                        width: LINK_WIDTH,
                    };
                    surface.stroke_line(a.position(), b.position(), stroke);
                }
            }
        }

        let fill = PRIMARY_BLUE.with_alpha(PARTICLE_OPACITY);
        for particle in &self.particles {
            surface.fill_circle(particle.position(), particle.radius, fill);
        }
    }

    /// Replace the whole particle set for a surface of the new size.
    pub fn resize(&mut self, size: Size) {
        if !self.task.is_running() {
            debug!("ignoring resize of torn down particle field");
            return;
        }
        self.size = size;
        self.particles = spawn(size, &mut self.rng);
        debug!(
            "particle field resized to {}x{}, {} particles",
            size.width,
            size.height,
            self.particles.len()
        );
    }

    /// Cancel the frame schedule and release the particles.
    pub fn teardown(&mut self, frames: &mut impl FrameScheduler) {
        if self.task.stop(frames) {
            self.particles = Vec::new();
            debug!("particle field torn down");
        }
    }
}

fn spawn<R: Rng + ?Sized>(size: Size, rng: &mut R) -> Vec<Particle> {
    (0..particle_count(size))
        .map(|_| Particle::random(size, rng))
        .collect()
}
