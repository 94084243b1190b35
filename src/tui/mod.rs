//! Terminal host for the keyboard.
//!
//! This module plays the renderer: it draws the host screen, the keys and the
//! alternatives overlay with Ratatui, turns crossterm mouse and key events into
//! [`InputEvent`]s and feeds them to the [`InputController`].

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod geometry;
pub mod gesture;
pub mod keyboard;
pub mod overlay;
pub mod status_bar;
pub mod text_field;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout as RatatuiLayout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::input::{InputController, InputEvent, TextBuffer};
use crate::models::{AlternativesSet, KeyAction, KeyId, Layout};

pub use geometry::{KeyboardGeometry, OverlayGeometry};
pub use gesture::{GestureTracker, PointerTarget, PressPhase};
pub use keyboard::KeyboardWidget;
pub use overlay::OverlayPresenter;
pub use status_bar::StatusBar;
pub use text_field::TextFieldWidget;
pub use theme::Theme;

/// How often the loop wakes up to check the long-press timer.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Greeting and text field
    pub host: Rect,
    /// Keyboard tray
    pub keyboard: Rect,
    /// Status and help
    pub status: Rect,
}

impl ScreenAreas {
    /// Splits `screen` for `layout`.
    #[must_use]
    pub fn compute(screen: Rect, layout: &Layout, show_help: bool) -> Self {
        let status_height = if show_help { 3 } else { 2 };
        let chunks = RatatuiLayout::vertical([
            Constraint::Min(5),
            Constraint::Length(KeyboardGeometry::height_for(layout)),
            Constraint::Length(status_height),
        ])
        .split(screen);

        Self {
            host: chunks[0],
            keyboard: chunks[1],
            status: chunks[2],
        }
    }
}

/// Host application state.
#[derive(Debug)]
pub struct App {
    /// Loaded configuration
    pub config: Config,
    /// Static key layout
    pub layout: Layout,
    /// Gesture state machine
    pub controller: InputController,
    /// Text the keyboard edits
    pub buffer: TextBuffer,
    /// Overlay renderer
    pub presenter: OverlayPresenter,
    /// Press tracking
    pub gesture: GestureTracker,
    /// Active color theme
    pub theme: Theme,
    /// Last action, shown in the status bar
    pub status_message: String,
    /// Where everything was last laid out
    pub areas: ScreenAreas,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl App {
    /// Creates the host with the fixed layout and alternatives table.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let gesture = GestureTracker::new(Duration::from_millis(config.input.long_press_ms));

        Self {
            config,
            layout: Layout::arabic(),
            controller: InputController::new(AlternativesSet::arabic()),
            buffer: TextBuffer::new(),
            presenter: OverlayPresenter::new(),
            gesture,
            theme,
            status_message: "Ready".to_string(),
            areas: ScreenAreas::default(),
            should_quit: false,
        }
    }

    /// Lays the screen out and records the key frames for hit testing.
    pub fn update_layout(&mut self, screen: Rect) {
        let areas = ScreenAreas::compute(screen, &self.layout, self.config.ui.show_help);
        if areas != self.areas {
            let keyboard = KeyboardGeometry::compute(&self.layout, areas.keyboard);
            self.presenter.set_keyboard(keyboard, screen);
            self.areas = areas;
        }
    }

    /// Resolves what lies under a screen cell.
    #[must_use]
    pub fn pointer_target(&self, column: u16, row: u16) -> PointerTarget {
        PointerTarget {
            key: self.presenter.keyboard().key_at(column, row),
            alternative: self.presenter.hit_test(column, row),
        }
    }

    /// Sends one event through the controller.
    pub fn dispatch(&mut self, event: InputEvent) {
        let before = self.buffer.text().len();
        self.controller
            .handle(event, &mut self.buffer, &mut self.presenter);
        self.status_message = self.describe(event, before);
    }

    fn describe(&self, event: InputEvent, len_before: usize) -> String {
        match event {
            // A tap never opens an overlay; one still open means the tap was ignored
            InputEvent::Tap(_) if self.controller.overlay().is_some() => {
                "Finish choosing an alternative first".to_string()
            }
            InputEvent::Tap(key) => match key.action() {
                KeyAction::Insert(_) => format!("Typed {}", key.label()),
                KeyAction::DeleteBackward => "Deleted".to_string(),
                KeyAction::Reserved => format!("{} is not available yet", key.label()),
            },
            InputEvent::LongPressBegin(_) | InputEvent::LongPressMove(_) => {
                match self.controller.overlay() {
                    Some(session) => match session.highlighted_text() {
                        Some(text) => format!("Release to insert {text}"),
                        None => format!("Alternatives: {}", session.alternatives().join(" ")),
                    },
                    None => self.status_message.clone(),
                }
            }
            InputEvent::LongPressEnd(_) => {
                if self.buffer.text().len() == len_before {
                    "No alternative chosen".to_string()
                } else {
                    "Inserted alternative".to_string()
                }
            }
            InputEvent::LongPressCancel => "Cancelled".to_string(),
        }
    }

    /// Handles a mouse event from the terminal.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let target = self.pointer_target(mouse.column, mouse.row);
        let event = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.gesture.pointer_down(target, now),
            MouseEventKind::Drag(MouseButton::Left) => self.gesture.pointer_drag(target),
            MouseEventKind::Up(MouseButton::Left) => self.gesture.pointer_up(target),
            _ => None,
        };

        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    /// Advances the long-press timer.
    pub fn tick(&mut self, now: Instant) {
        let controller = &self.controller;
        if let Some(event) = self
            .gesture
            .tick(now, |key| controller.has_alternatives(key))
        {
            self.dispatch(event);
        }
    }

    /// Abandons any press in progress.
    pub fn cancel_gesture(&mut self) {
        if let Some(event) = self.gesture.cancel() {
            self.dispatch(event);
        }
    }

    /// Routes one terminal event.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            Event::Key(key) => self.handle_key(key),
            // Key frames are stale until the next draw
            Event::Resize(_, _) => self.cancel_gesture(),
            // The release may never arrive
            Event::FocusLost => self.cancel_gesture(),
            _ => {}
        }
    }

    /// Handles a key press from the physical keyboard.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.gesture.phase() == Some(PressPhase::LongPress) {
                    self.cancel_gesture();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Left => self.buffer.move_left(),
            KeyCode::Right => self.buffer.move_right(),
            KeyCode::Backspace => self.dispatch(InputEvent::Tap(KeyId::Delete)),
            KeyCode::Enter => self.dispatch(InputEvent::Tap(KeyId::Newline)),
            KeyCode::Char(' ') => self.dispatch(InputEvent::Tap(KeyId::Space)),
            KeyCode::Char(c) => {
                let id = KeyId::Literal(c);
                if self.layout.position_of(id).is_some() {
                    self.dispatch(InputEvent::Tap(id));
                } else {
                    debug!(char = %c, "Key not on this keyboard");
                    self.status_message = format!("{c} is not on this keyboard");
                }
            }
            _ => {}
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(app: &mut App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    info!(
        long_press_ms = app.config.input.long_press_ms,
        "Keyboard host started"
    );

    loop {
        terminal.draw(|f| {
            app.update_layout(f.area());
            render(f, app);
        })?;

        // Poll for events with a short timeout so the long-press timer keeps running
        if event::poll(TICK_INTERVAL)? {
            app.handle_event(event::read()?, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    if app.controller.overlay().is_some() {
        warn!("Quitting with alternatives overlay open");
    }
    info!(chars = app.buffer.text().chars().count(), "Keyboard host stopped");
    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    TextFieldWidget::render(f, app.areas.host, &app.buffer, theme);
    KeyboardWidget::render(
        f,
        app.areas.keyboard,
        app.presenter.keyboard(),
        app.gesture.pressed_key(),
        theme,
    );
    StatusBar::render(f, app.areas.status, app, theme);

    // Overlay goes on top of everything
    if let Some(session) = app.controller.overlay() {
        app.presenter.render(f, session, theme);
    }
}
