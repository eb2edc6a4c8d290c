//! Layered sine waves with a handful of drifting dots.

use backdrop_core::{
    CYAN, FrameHandle, FrameScheduler, PRIMARY_BLUE, Point, Rgba, Size, Stroke, Surface, Theme,
};
use log::{debug, trace};
use rand::Rng;

use crate::task::FrameTask;

/// Number of drifting dots.
pub const DOT_COUNT: usize = 15;

/// Time added on every tick.
pub const TIME_STEP: f64 = 0.01;

/// Horizontal distance between sampled wave points.
pub const SAMPLE_STEP: f64 = 5.0;

const MAX_DOT_SPEED: f64 = 0.1;

/// One animated sine curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    /// Vertical offset from the surface midline.
    pub offset: f64,
    /// Peak displacement of the primary term.
    pub amplitude: f64,
    /// Spatial frequency of the primary term.
    pub frequency: f64,
    /// Phase speed of the primary term.
    pub speed: f64,
    pub stroke: Stroke,
}

impl Wave {
    /// Vertical coordinate of the curve at `x`.
    ///
    /// The curve is a primary sine plus a secondary one at half amplitude,
    /// half frequency and half speed.
    pub fn y_at(&self, x: f64, time: f64, height: f64) -> f64 {
        let primary = (x * self.frequency + time * self.speed).sin() * self.amplitude;
        let secondary =
            (x * self.frequency * 0.5 + time * self.speed * 0.5).sin() * (self.amplitude * 0.5);
        height / 2.0 + self.offset + primary + secondary
    }

    /// Sampled points across `size.width`, every [`SAMPLE_STEP`] units.
    pub fn points(&self, time: f64, size: Size) -> Vec<Point> {
        if size.width < 0.0 {
            return Vec::new();
        }
        let samples = (size.width / SAMPLE_STEP).floor() as usize;
        (0..=samples)
            .map(|i| {
                let x = i as f64 * SAMPLE_STEP;
                Point::new(x, self.y_at(x, time, size.height))
            })
            .collect()
    }
}

/// The four wave presets, with opacities chosen for `theme`.
pub fn wave_presets(theme: Theme) -> [Wave; 4] {
    let (strong, faint) = if theme.is_dark() {
        (0.3, 0.2)
    } else {
        (0.15, 0.1)
    };
    let wave = |offset, amplitude, frequency, speed, color: Rgba, alpha, width| Wave {
        offset,
        amplitude,
        frequency,
        speed,
        stroke: Stroke {
            color: color.with_alpha(alpha),
            width,
        },
    };
    [
        wave(0.0, 50.0, 0.002, 0.01, PRIMARY_BLUE, strong, 2.0),
        wave(20.0, 70.0, 0.0015, 0.015, CYAN, strong, 2.0),
        wave(-20.0, 30.0, 0.003, 0.008, PRIMARY_BLUE, faint, 1.0),
        wave(40.0, 40.0, 0.0025, 0.02, CYAN, faint, 1.0),
    ]
}

/// A small dot that drifts across the surface and wraps at the edges.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftDot {
    pub x: f64,
    pub y: f64,
    /// Horizontal speed per tick.
    pub vx: f64,
    /// Vertical speed per tick.
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl DriftDot {
    pub fn random<R: Rng + ?Sized>(size: Size, rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..=size.width.max(0.0)),
            y: rng.random_range(0.0..=size.height.max(0.0)),
            vx: rng.random_range(-MAX_DOT_SPEED..=MAX_DOT_SPEED),
            vy: rng.random_range(-MAX_DOT_SPEED..=MAX_DOT_SPEED),
            radius: rng.random_range(0.5..=2.5),
            opacity: rng.random_range(0.1..=0.5),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move by one step and wrap around the surface.
    pub fn step(&mut self, size: Size) {
        self.x = wrap(self.x + self.vx, size.width);
        self.y = wrap(self.y + self.vy, size.height);
    }
}

/// Wrap `value` into `[0, max]` when it has left that range.
fn wrap(value: f64, max: f64) -> f64 {
    if (0.0..=max).contains(&value) {
        value
    } else if max > 0.0 {
        value.rem_euclid(max)
    } else {
        0.0
    }
}

/// Animated wave background.
///
/// The theme is fixed at attach time; to change it, tear the field down and
/// attach a new one.
#[derive(Debug)]
pub struct WaveField {
    size: Size,
    theme: Theme,
    waves: [Wave; 4],
    dots: Vec<DriftDot>,
    time: f64,
    task: FrameTask,
}

impl WaveField {
    /// Attach to a surface of `size` and request the first frame.
    pub fn attach<R: Rng + ?Sized>(
        size: Size,
        theme: Theme,
        rng: &mut R,
        frames: &mut impl FrameScheduler,
    ) -> Self {
        let dots = (0..DOT_COUNT).map(|_| DriftDot::random(size, rng)).collect();
        debug!(
            "wave field attached at {}x{} ({:?} theme)",
            size.width, size.height, theme
        );
        Self {
            size,
            theme,
            waves: wave_presets(theme),
            dots,
            time: 0.0,
            task: FrameTask::start(frames),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn dots(&self) -> &[DriftDot] {
        &self.dots
    }

    /// Accumulated animation time.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn frame(&self) -> Option<FrameHandle> {
        self.task.pending()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_running()
    }

    pub fn is_due(&self, fired: &[FrameHandle]) -> bool {
        self.task.is_due(fired)
    }

    /// Advance time, redraw waves and dots, and request the next frame.
    pub fn tick<S: Surface>(&mut self, surface: &mut S, frames: &mut impl FrameScheduler) {
        if !self.task.is_running() {
            return;
        }

        self.time += TIME_STEP;
        surface.clear();

        // A zero-height surface still has a midline to draw along.
        let drawable = self.size.width > 0.0;
        if drawable {
            for wave in &self.waves {
                let points = wave.points(self.time, self.size);
                if points.len() > 1 {
                    surface.stroke_polyline(&points, wave.stroke);
                }
            }
        }

        for dot in &mut self.dots {
            dot.step(self.size);
            if drawable {
                surface.fill_circle(
                    dot.position(),
                    dot.radius,
                    PRIMARY_BLUE.with_alpha(dot.opacity),
                );
            }
        }
        trace!("wave field tick at t={:.2}", self.time);

        self.task.reschedule(frames);
    }

    /// Track the new surface size. Waves and dots keep their parameters.
    pub fn resize(&mut self, size: Size) {
        if !self.task.is_running() {
            debug!("ignoring resize of torn down wave field");
            return;
        }
        self.size = size;
        debug!("wave field resized to {}x{}", size.width, size.height);
    }

    /// Cancel the frame schedule.
    pub fn teardown(&mut self, frames: &mut impl FrameScheduler) {
        if self.task.stop(frames) {
            debug!("wave field torn down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::{DrawList, FrameQueue};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field(width: f64, height: f64, theme: Theme, frames: &mut FrameQueue) -> WaveField {
        let mut rng = StdRng::seed_from_u64(42);
        WaveField::attach(Size::new(width, height), theme, &mut rng, frames)
    }

    fn dot(x: f64, y: f64, vx: f64, vy: f64) -> DriftDot {
        DriftDot {
            x,
            y,
            vx,
            vy,
            radius: 1.0,
            opacity: 0.3,
        }
    }

    #[test]
    fn test_attach_initial_state() {
        let mut frames = FrameQueue::new();
        let field = field(800.0, 600.0, Theme::Dark, &mut frames);

        assert_eq!(field.waves().len(), 4);
        assert_eq!(field.dots().len(), DOT_COUNT);
        for d in field.dots() {
            assert!(field.size().contains(d.position()));
            assert!(d.vx.abs() <= 0.1 && d.vy.abs() <= 0.1);
            assert!((0.5..=2.5).contains(&d.radius));
            assert!((0.1..=0.5).contains(&d.opacity));
        }
        assert_eq!(field.time(), 0.0);
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_presets_follow_theme() {
        let dark = wave_presets(Theme::Dark);
        let light = wave_presets(Theme::Light);
        let alphas = |w: &[Wave; 4]| w.iter().map(|w| w.stroke.color.alpha).collect::<Vec<_>>();

        assert_eq!(alphas(&dark), vec![0.3, 0.3, 0.2, 0.2]);
        assert_eq!(alphas(&light), vec![0.15, 0.15, 0.1, 0.1]);
        assert_eq!(dark[1].amplitude, 70.0);
        assert_eq!(dark[2].offset, -20.0);
        assert_eq!(dark[3].stroke.width, 1.0);
    }

    #[test]
    fn test_y_at_superposes_two_terms() {
        let wave = &wave_presets(Theme::Dark)[0];
        // Both sine terms vanish at the origin.
        assert_eq!(wave.y_at(0.0, 0.0, 400.0), 200.0);

        let x: f64 = 300.0;
        let t: f64 = 1.5;
        let expected = 200.0
            + (x * 0.002 + t * 0.01).sin() * 50.0
            + (x * 0.001 + t * 0.005).sin() * 25.0;
        assert!((wave.y_at(x, t, 400.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_points_step_across_width() {
        let wave = &wave_presets(Theme::Light)[1];
        let points = wave.points(0.0, Size::new(100.0, 50.0));
        assert_eq!(points.len(), 21);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[20].x, 100.0);

        assert_eq!(wave.points(0.0, Size::new(12.0, 50.0)).len(), 3);
    }

    #[test]
    fn test_tick_draws_waves_then_dots() {
        let mut frames = FrameQueue::new();
        let mut field = field(400.0, 300.0, Theme::Dark, &mut frames);
        let mut surface = DrawList::new(field.size());

        field.tick(&mut surface, &mut frames);

        assert!((field.time() - 0.01).abs() < 1e-12);
        assert_eq!(surface.polylines().count(), 4);
        assert_eq!(surface.circles().count(), DOT_COUNT);
        for (points, _) in surface.polylines() {
            assert_eq!(points.len(), 81);
        }
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_time_accumulates() {
        let mut frames = FrameQueue::new();
        let mut field = field(400.0, 300.0, Theme::Dark, &mut frames);
        let mut surface = DrawList::new(field.size());
        for _ in 0..100 {
            field.tick(&mut surface, &mut frames);
        }
        assert!((field.time() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dots_wrap_instead_of_bouncing() {
        let size = Size::new(100.0, 50.0);

        let mut d = dot(0.05, 49.95, -0.1, 0.1);
        d.step(size);
        assert!((d.x - 99.95).abs() < 1e-9);
        assert!((d.y - 0.05).abs() < 1e-9);
        // Speed is untouched by the wrap.
        assert_eq!((d.vx, d.vy), (-0.1, 0.1));

        let mut inside = dot(50.0, 25.0, 0.1, -0.1);
        inside.step(size);
        assert!((inside.x - 50.1).abs() < 1e-9);
        assert!((inside.y - 24.9).abs() < 1e-9);
    }

    #[test]
    fn test_dots_stay_in_bounds() {
        let mut frames = FrameQueue::new();
        let mut field = field(60.0, 40.0, Theme::Light, &mut frames);
        let mut surface = DrawList::new(field.size());
        for _ in 0..2000 {
            field.tick(&mut surface, &mut frames);
            for d in field.dots() {
                assert!(field.size().contains(d.position()));
            }
        }
    }

    #[test]
    fn test_zero_area_draws_nothing() {
        let mut frames = FrameQueue::new();
        let mut field = field(0.0, 0.0, Theme::Dark, &mut frames);
        let mut surface = DrawList::new(field.size());

        field.tick(&mut surface, &mut frames);
        assert!(surface.is_empty());
        assert!(field.dots().iter().all(|d| d.x == 0.0 && d.y == 0.0));
    }

    #[test]
    fn test_zero_height_still_draws_along_midline() {
        let mut frames = FrameQueue::new();
        let mut field = field(400.0, 0.0, Theme::Dark, &mut frames);
        let mut surface = DrawList::new(field.size());

        field.tick(&mut surface, &mut frames);
        assert_eq!(surface.polylines().count(), 4);
        assert_eq!(surface.circles().count(), DOT_COUNT);
        for d in field.dots() {
            assert_eq!(d.y, 0.0);
        }
    }

    #[test]
    fn test_resize_keeps_waves_and_dots() {
        let mut frames = FrameQueue::new();
        let mut field = field(400.0, 400.0, Theme::Dark, &mut frames);
        let waves = field.waves().to_vec();
        let dots = field.dots().to_vec();

        field.resize(Size::new(800.0, 200.0));
        assert_eq!(field.size(), Size::new(800.0, 200.0));
        assert_eq!(field.waves(), waves.as_slice());
        assert_eq!(field.dots(), dots.as_slice());
    }

    #[test]
    fn test_teardown_before_first_tick() {
        let mut frames = FrameQueue::new();
        let mut field = field(400.0, 400.0, Theme::Dark, &mut frames);
        let mut surface = DrawList::new(field.size());

        field.teardown(&mut frames);
        field.teardown(&mut frames);
        assert!(frames.is_empty());

        field.tick(&mut surface, &mut frames);
        assert!(surface.is_empty());
        assert_eq!(field.time(), 0.0);
        assert!(frames.is_empty());
    }
}
