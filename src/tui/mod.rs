// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal viewer.
//!
//! Paints the dependency view onto a braille canvas (ratatui + crossterm). Opening the viewer,
//! resizing the terminal and reloading the backlog each trigger a full repaint.

use std::{io, path::PathBuf, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{canvas::Canvas, Paragraph},
};

use crate::config::EngineConfig;
use crate::model::{fixtures, Backlog, BacklogError};
use crate::render::FrameReport;
use crate::viewport::{RepaintTrigger, Viewport};

mod surface;

use surface::{term_color, TerminalSurface, CELL_HEIGHT_PX, CELL_WIDTH_PX};

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_ERROR_COLOR: Color = Color::LightRed;

/// Where the viewer gets its items from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BacklogSource {
    File(PathBuf),
    Demo,
}

impl BacklogSource {
    pub fn load(&self) -> Result<Backlog, BacklogError> {
        match self {
            Self::File(path) => Backlog::from_path(path),
            Self::Demo => Ok(fixtures::demo_backlog()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Backlog(#[from] BacklogError),
}

/// Runs the interactive viewer until the user quits.
pub fn run(source: BacklogSource, config: EngineConfig) -> Result<(), TuiError> {
    let backlog = source.load()?;
    let mut app = App::new(source, backlog, config);
    let mut terminal = TerminalSession::new()?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(_, _) => app.request_repaint(RepaintTrigger::Resized),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());
    let canvas_area = layout[0];
    let status_area = layout[1];

    app.ensure_painted(canvas_area);

    let surface = &app.surface;
    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .background_color(term_color(app.config.theme.background))
        .x_bounds(surface.x_bounds())
        .y_bounds(surface.y_bounds())
        .paint(|ctx| surface.paint(ctx));
    frame.render_widget(canvas, canvas_area);
    frame.render_widget(Paragraph::new(footer_line(app)), status_area);
}

struct App {
    source: BacklogSource,
    backlog: Backlog,
    config: EngineConfig,
    viewport: Viewport,
    surface: TerminalSurface,
    pending: Option<RepaintTrigger>,
    painted_area: Option<Rect>,
    report: FrameReport,
    error: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(source: BacklogSource, backlog: Backlog, config: EngineConfig) -> Self {
        let viewport = Viewport::from_config(&config.viewport);
        Self {
            source,
            backlog,
            config,
            viewport,
            surface: TerminalSurface::new(),
            pending: Some(RepaintTrigger::Opened),
            painted_area: None,
            report: FrameReport::default(),
            error: None,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
    }

    fn request_repaint(&mut self, trigger: RepaintTrigger) {
        // An earlier trigger still owns the next frame.
        if self.pending.is_none() {
            self.pending = Some(trigger);
        }
    }

    /// Re-reads the source; on failure the previous items stay on screen.
    fn reload(&mut self) {
        match self.source.load() {
            Ok(backlog) => {
                self.backlog = backlog;
                self.error = None;
                self.request_repaint(RepaintTrigger::Refreshed);
            }
            Err(err) => {
                tracing::warn!(error = %err, "reload failed; keeping previous items");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Repaints when a trigger is pending or the canvas area changed since the last frame.
    fn ensure_painted(&mut self, area: Rect) {
        let trigger = match self.pending.take() {
            Some(trigger) => trigger,
            None if self.painted_area != Some(area) => RepaintTrigger::Resized,
            None => return,
        };
        self.repaint(trigger, area);
    }

    fn repaint(&mut self, trigger: RepaintTrigger, area: Rect) {
        self.viewport.set_container_width(f64::from(area.width) * CELL_WIDTH_PX);
        self.config.layout.surface_height = f64::from(area.height) * CELL_HEIGHT_PX;
        self.report =
            self.viewport.repaint(trigger, &mut self.surface, self.backlog.items(), &self.config);
        self.painted_area = Some(area);
    }
}

fn footer_line(app: &App) -> Line<'static> {
    let label = Style::default().fg(FOOTER_LABEL_COLOR);
    let key = Style::default().fg(FOOTER_KEY_COLOR);

    let mut spans = vec![Span::styled(format!(" {} items", app.backlog.len()), label)];
    match app.report.layering() {
        Some(layering) => {
            let summary = format!(
                " · {} in graph · {} layers",
                layering.node_count(),
                layering.layers().len()
            );
            spans.push(Span::styled(summary, label));
            if layering.has_forced_layers() {
                spans.push(Span::styled(" · cycles", Style::default().fg(FOOTER_ERROR_COLOR)));
            }
        }
        None => spans.push(Span::styled(" · no dependencies", label)),
    }
    let size = app.surface.size();
    spans.push(Span::styled(
        format!(" · {}×{}px", size.logical_width, size.logical_height),
        label,
    ));
    if let Some(error) = &app.error {
        spans.push(Span::styled(format!(" · {error}"), Style::default().fg(FOOTER_ERROR_COLOR)));
    }

    spans.extend([
        Span::styled("  r", key),
        Span::styled(" reload", label),
        Span::styled("  q", key),
        Span::styled(" quit", label),
    ]);
    Line::from(spans)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
