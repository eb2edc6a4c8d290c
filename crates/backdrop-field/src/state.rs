//! Background animation state management.

use backdrop_core::{DrawList, FrameHandle, FrameScheduler, Scene, Size, Surface, Theme};
use log::debug;
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Frame, layout::Rect};

use crate::canvas::FieldCanvas;
use crate::particles::ParticleField;
use crate::waves::WaveField;

/// The animation currently attached to the surface.
#[derive(Debug)]
enum ActiveField {
    Network(ParticleField<StdRng>),
    Waves(WaveField),
}

/// Background animation state.
///
/// Owns the recording surface and whichever field is attached to it, and
/// routes host events (frames, resizes, scene and theme changes) to that
/// field.
#[derive(Debug)]
pub struct BackdropState {
    /// Selected scene.
    scene: Scene,
    /// Page theme the animation is composited over.
    theme: Theme,
    /// Seed for reproducible runs; fresh entropy when `None`.
    seed: Option<u64>,
    /// Attached animation.
    field: ActiveField,
    /// Draw calls from the most recent tick.
    surface: DrawList,
}

impl BackdropState {
    /// Attach `scene` to a surface of `size` and schedule its first frame.
    pub fn attach(
        scene: Scene,
        theme: Theme,
        size: Size,
        seed: Option<u64>,
        frames: &mut impl FrameScheduler,
    ) -> Self {
        Self {
            scene,
            theme,
            seed,
            field: attach_field(scene, theme, size, seed, frames),
            surface: DrawList::new(size),
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn surface(&self) -> &DrawList {
        &self.surface
    }

    /// Pending frame request of the attached field.
    pub fn frame(&self) -> Option<FrameHandle> {
        match &self.field {
            ActiveField::Network(field) => field.frame(),
            ActiveField::Waves(field) => field.frame(),
        }
    }

    pub fn is_running(&self) -> bool {
        match &self.field {
            ActiveField::Network(field) => field.is_running(),
            ActiveField::Waves(field) => field.is_running(),
        }
    }

    /// Tick the attached field if its frame is among `fired`.
    ///
    /// Returns whether a tick happened.
    pub fn on_frames(
        &mut self,
        fired: &[FrameHandle],
        frames: &mut impl FrameScheduler,
    ) -> bool {
        match &mut self.field {
            ActiveField::Network(field) if field.is_due(fired) => {
                field.tick(&mut self.surface, frames);
                true
            }
            ActiveField::Waves(field) if field.is_due(fired) => {
                field.tick(&mut self.surface, frames);
                true
            }
            _ => false,
        }
    }

    /// Forward a host resize to the surface and the attached field.
    pub fn resize(&mut self, size: Size) {
        if !self.is_running() {
            return;
        }
        self.surface.set_size(size);
        match &mut self.field {
            ActiveField::Network(field) => field.resize(size),
            ActiveField::Waves(field) => field.resize(size),
        }
    }

    /// Tear down the current field and attach one for `scene`.
    pub fn set_scene(&mut self, scene: Scene, frames: &mut impl FrameScheduler) {
        self.teardown(frames);
        self.scene = scene;
        self.field = attach_field(scene, self.theme, self.surface.size(), self.seed, frames);
        debug!("switched to {} scene", scene.name());
    }

    /// Change the page theme.
    ///
    /// The wave field only reads its theme when attached, so it is torn down
    /// and attached again.
    pub fn set_theme(&mut self, theme: Theme, frames: &mut impl FrameScheduler) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        if let ActiveField::Waves(_) = self.field {
            debug!("recreating wave field for {:?} theme", theme);
            self.set_scene(Scene::Waves, frames);
        }
    }

    /// Cancel the attached field's schedule.
    pub fn teardown(&mut self, frames: &mut impl FrameScheduler) {
        match &mut self.field {
            ActiveField::Network(field) => field.teardown(frames),
            ActiveField::Waves(field) => field.teardown(frames),
        }
    }

    /// Render the most recent tick into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(FieldCanvas::new(&self.surface, self.theme.background()), area);
    }
}

fn attach_field(
    scene: Scene,
    theme: Theme,
    size: Size,
    seed: Option<u64>,
    frames: &mut impl FrameScheduler,
) -> ActiveField {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    match scene {
        Scene::Network => ActiveField::Network(ParticleField::attach(size, rng, frames)),
        Scene::Waves => ActiveField::Waves(WaveField::attach(size, theme, &mut rng, frames)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::FrameQueue;
    use ratatui::{Terminal, backend::TestBackend};

    fn state(scene: Scene, frames: &mut FrameQueue) -> BackdropState {
        BackdropState::attach(scene, Theme::Dark, Size::new(480.0, 320.0), Some(3), frames)
    }

    #[test]
    fn test_ticks_only_when_due() {
        let mut frames = FrameQueue::new();
        let mut state = state(Scene::Network, &mut frames);

        assert!(!state.on_frames(&[], &mut frames));
        assert!(state.surface().is_empty());

        let fired = frames.drain();
        assert!(state.on_frames(&fired, &mut frames));
        assert_eq!(state.surface().circles().count(), 10);
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_scene_switch_replaces_schedule() {
        let mut frames = FrameQueue::new();
        let mut state = state(Scene::Network, &mut frames);
        let old = state.frame().unwrap();

        state.set_scene(Scene::Waves, &mut frames);
        assert_eq!(state.scene(), Scene::Waves);
        assert!(!frames.is_pending(old));
        assert_eq!(frames.len(), 1);

        let fired = frames.drain();
        state.on_frames(&fired, &mut frames);
        assert_eq!(state.surface().polylines().count(), 4);
    }

    #[test]
    fn test_theme_change_recreates_waves() {
        let mut frames = FrameQueue::new();
        let mut state = state(Scene::Waves, &mut frames);
        let old = state.frame().unwrap();

        state.set_theme(Theme::Light, &mut frames);
        assert_eq!(state.theme(), Theme::Light);
        assert_ne!(state.frame().unwrap(), old);
        assert_eq!(frames.len(), 1);

        let fired = frames.drain();
        state.on_frames(&fired, &mut frames);
        let (_, stroke) = state.surface().polylines().next().unwrap();
        assert_eq!(stroke.color.alpha, 0.15);
    }

    #[test]
    fn test_theme_change_keeps_network() {
        let mut frames = FrameQueue::new();
        let mut state = state(Scene::Network, &mut frames);
        let handle = state.frame();

        state.set_theme(Theme::Light, &mut frames);
        assert_eq!(state.frame(), handle);
    }

    #[test]
    fn test_resize_reaches_surface() {
        let mut frames = FrameQueue::new();
        let mut state = state(Scene::Network, &mut frames);
        state.resize(Size::new(800.0, 800.0));
        assert_eq!(state.surface().size(), Size::new(800.0, 800.0));

        let fired = frames.drain();
        state.on_frames(&fired, &mut frames);
        assert_eq!(state.surface().circles().count(), 42);
    }

    #[test]
    fn test_teardown_empties_schedule() {
        let mut frames = FrameQueue::new();
        let mut state = state(Scene::Waves, &mut frames);
        state.teardown(&mut frames);
        state.teardown(&mut frames);

        assert!(frames.is_empty());
        assert!(!state.is_running());
        assert!(!state.on_frames(&frames.drain(), &mut frames));
    }

    #[test]
    fn test_render_draws_into_frame() {
        let mut frames = FrameQueue::new();
        let mut state = state(Scene::Waves, &mut frames);
        let fired = frames.drain();
        state.on_frames(&fired, &mut frames);

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| state.render(f, f.area())).unwrap();
        let painted = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|c| c.symbol() != " ")
            .count();
        assert!(painted > 0);
    }
}
