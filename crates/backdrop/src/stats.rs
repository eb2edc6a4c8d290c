//! Headline and count-up statistics drawn over the background.

use backdrop_core::{FrameHandle, FrameScheduler, Theme};
use backdrop_field::{CountUp, to_terminal};
use backdrop_fonts::{GLYPH_HEIGHT, art_width, build_counter_art};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

pub const HEADLINE: &str = "Shaping Tomorrow Through Intelligence.";
pub const TAGLINE: &str = "Robotics, AI & Software Innovation Lab";

/// Rows taken by the counter art plus its caption.
pub const STATS_HEIGHT: u16 = GLYPH_HEIGHT as u16 + 2;

/// Areas of the overlay inside the main area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub headline: Rect,
    pub tagline: Rect,
    pub stats: Rect,
}

impl OverlayLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::vertical([
            Constraint::Fill(1),              // Top padding
            Constraint::Length(1),            // Headline
            Constraint::Length(1),            // Tagline
            Constraint::Length(2),            // Spacing
            Constraint::Length(STATS_HEIGHT), // Counters
            Constraint::Fill(1),              // Bottom padding
        ])
        .split(area);
        Self {
            headline: chunks[1],
            tagline: chunks[2],
            stats: chunks[4],
        }
    }

    /// Share of the counter rows that fits on screen.
    pub fn stats_visible_fraction(&self) -> f64 {
        (f64::from(self.stats.height) / f64::from(STATS_HEIGHT)).min(1.0)
    }
}

/// A counter with its caption.
#[derive(Debug)]
struct Stat {
    counter: CountUp,
    caption: &'static str,
}

/// Overlay state: the three statistic counters and whether they are shown.
#[derive(Debug)]
pub struct Stats {
    stats: Vec<Stat>,
    shown: bool,
}

impl Stats {
    pub fn new(shown: bool) -> Self {
        let stat = |end, suffix, caption| Stat {
            counter: CountUp::new(end, suffix),
            caption,
        };
        Self {
            stats: vec![
                stat(2, "+", "Years R&D"),
                stat(15, "+", "Projects"),
                stat(100, "%", "Commitment"),
            ],
            shown,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }

    /// Current counter labels, e.g. `["2+", "15+", "100%"]` once finished.
    pub fn labels(&self) -> Vec<String> {
        self.stats.iter().map(|s| s.counter.label()).collect()
    }

    /// Report how much of the counter row is on screen.
    pub fn observe(&mut self, layout: &OverlayLayout, frames: &mut impl FrameScheduler) {
        let fraction = if self.shown {
            layout.stats_visible_fraction()
        } else {
            0.0
        };
        for stat in &mut self.stats {
            stat.counter.observe(fraction, frames);
        }
    }

    /// Advance every counter whose frame fired.
    pub fn on_frames(
        &mut self,
        fired: &[FrameHandle],
        timestamp_ms: u64,
        frames: &mut impl FrameScheduler,
    ) {
        for stat in &mut self.stats {
            if stat.counter.is_due(fired) {
                stat.counter.advance(timestamp_ms, frames);
                if stat.counter.is_finished() {
                    log::debug!("{} counter settled at {}", stat.caption, stat.counter.label());
                }
            }
        }
    }

    pub fn teardown(&mut self, frames: &mut impl FrameScheduler) {
        for stat in &mut self.stats {
            stat.counter.teardown(frames);
        }
    }

    /// Render the headline, tagline and counters.
    pub fn render(&self, frame: &mut Frame, layout: &OverlayLayout, theme: Theme) {
        if !self.shown {
            return;
        }
        let accent = to_terminal(theme.accent());
        let muted = to_terminal(theme.muted());

        let headline = Paragraph::new(HEADLINE.bold().fg(accent)).alignment(Alignment::Center);
        frame.render_widget(headline, layout.headline);
        let tagline = Paragraph::new(TAGLINE.fg(muted)).alignment(Alignment::Center);
        frame.render_widget(tagline, layout.tagline);

        let columns = Layout::horizontal([Constraint::Fill(1); 3]).split(layout.stats);
        for (stat, area) in self.stats.iter().zip(columns.iter()) {
            let label = stat.counter.label();
            // Narrow columns fall back to the plain number.
            let mut lines: Vec<Line> = if art_width(&label) <= area.width as usize {
                build_counter_art(&label)
                    .into_iter()
                    .map(|s| Line::from(s).style(Style::new().fg(accent)))
                    .collect()
            } else {
                vec![Line::from(label.bold().fg(accent))]
            };
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                stat.caption.to_uppercase(),
                Style::new().fg(muted),
            )));
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *area);
        }
    }
}
