//! Animated backgrounds for backdrop.
//!
//! Two independent animations render onto any [`backdrop_core::Surface`]:
//! a particle network whose nearby points are joined by fading links, and a
//! field of layered sine waves with drifting dots. Each owns a
//! [`FrameTask`] that keeps exactly one frame request pending until the
//! animation is torn down. [`CountUp`] provides the eased statistic
//! counters shown over the background, and [`BackdropState`] ties a field
//! to a ratatui frame.

mod canvas;
mod color;
mod countup;
mod particles;
mod state;
mod task;
mod waves;

pub use canvas::FieldCanvas;
pub use color::{blend_to_terminal, to_terminal};
pub use countup::{CountUp, DEFAULT_DURATION_MS, VISIBILITY_THRESHOLD, ease_out_quart};
pub use particles::{
    AREA_PER_PARTICLE, LINK_DISTANCE, MAX_LINK_OPACITY, MAX_SPEED, Particle, ParticleField,
    link_opacity, particle_count,
};
pub use state::BackdropState;
pub use task::FrameTask;
pub use waves::{DOT_COUNT, DriftDot, SAMPLE_STEP, TIME_STEP, Wave, WaveField, wave_presets};
