//! Terminal application: event loop, frame dispatch and key handling.

use std::time::{Duration, Instant};

use backdrop_config::Config;
use backdrop_core::FrameQueue;
use backdrop_field::{BackdropState, to_terminal};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
};

use crate::stats::{OverlayLayout, Stats};

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Settings, updated with runtime changes and handed back on exit.
    config: Config,
    /// Frame requests waiting for the next repaint.
    frames: FrameQueue,
    /// Animated background.
    backdrop: BackdropState,
    /// Headline and counters.
    stats: Stats,
    /// Last known terminal area.
    area: Rect,
    /// Start of the run, for frame timestamps.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of `width`×`height`
    /// cells, attaching the configured background.
    pub fn new(config: Config, width: u16, height: u16) -> Self {
        let mut frames = FrameQueue::new();
        let backdrop = BackdropState::attach(
            config.scene,
            config.theme,
            config.surface_size(width, height),
            config.seed,
            &mut frames,
        );
        Self {
            running: false,
            stats: Stats::new(config.show_stats),
            config,
            frames,
            backdrop,
            area: Rect::new(0, 0, width, height),
            started: Instant::now(),
        }
    }

    /// Run the application's main loop. Returns the config with any
    /// runtime changes applied.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<Config> {
        self.running = true;
        while self.running {
            self.on_repaint();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        self.backdrop.teardown(&mut self.frames);
        self.stats.teardown(&mut self.frames);
        info!("stopped with {} frames pending", self.frames.len());
        Ok(self.config)
    }

    /// Fire every due frame callback.
    fn on_repaint(&mut self) {
        let layout = OverlayLayout::new(self.main_area());
        self.stats.observe(&layout, &mut self.frames);

        let fired = self.frames.drain();
        let timestamp_ms = self.started.elapsed().as_millis() as u64;
        self.backdrop.on_frames(&fired, &mut self.frames);
        self.stats.on_frames(&fired, timestamp_ms, &mut self.frames);
    }

    /// Area above the help line.
    fn main_area(&self) -> Rect {
        let [main, _] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(self.area);
        main
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [main, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        self.backdrop.render(frame, area);
        self.stats
            .render(frame, &OverlayLayout::new(main), self.backdrop.theme());

        let color = to_terminal(self.backdrop.theme().accent());
        let dim = to_terminal(self.backdrop.theme().muted());
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".fg(dim),
            "s".bold().fg(color),
            Span::styled(
                format!(" scene ({})  ", self.backdrop.scene().name()),
                Style::new().fg(dim),
            ),
            "d".bold().fg(color),
            " toggle theme  ".fg(dim),
            "h".bold().fg(color),
            " toggle stats".fg(dim),
        ])
        .centered();
        frame.render_widget(help, help_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval as timeout so animation keeps running.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = Duration::from_millis(self.config.frame_interval_ms);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => self.resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('s')) => self.cycle_scene(),
            (_, KeyCode::Char('d')) => self.toggle_theme(),
            (_, KeyCode::Char('h')) => self.toggle_stats(),
            _ => {}
        }
    }

    /// Re-read the terminal size and pass it to the background.
    fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        let size = self.config.surface_size(width, height);
        debug!("terminal resized to {width}x{height} cells");
        self.backdrop.resize(size);
    }

    /// Switch to the next background scene.
    fn cycle_scene(&mut self) {
        let scene = self.backdrop.scene().next();
        self.backdrop.set_scene(scene, &mut self.frames);
        self.config.scene = scene;
    }

    /// Toggle between the dark and light theme.
    fn toggle_theme(&mut self) {
        let theme = self.backdrop.theme().toggle();
        self.backdrop.set_theme(theme, &mut self.frames);
        self.config.theme = theme;
    }

    /// Show or hide the headline and counters.
    fn toggle_stats(&mut self) {
        self.stats.toggle();
        self.config.show_stats = self.stats.is_shown();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
