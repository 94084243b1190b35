//! End-to-end gesture flows through the terminal host: mouse events are hit
//! tested against the drawn keys and overlay, tracked into gestures and
//! applied to the text buffer.

use std::time::{Duration, Instant};

use azturk_keyboard::config::{Config, ThemeMode};
use azturk_keyboard::models::KeyId;
use azturk_keyboard::tui::App;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

const YEH: KeyId = KeyId::Literal('ی');
const ALEF: KeyId = KeyId::Literal('ا');
const BEH: KeyId = KeyId::Literal('ب');

fn app() -> App {
    let mut config = Config::new();
    config.ui.theme_mode = ThemeMode::Dark;
    let mut app = App::new(config);
    app.update_layout(Rect::new(0, 0, 110, 30));
    app
}

fn mouse(kind: MouseEventKind, (column, row): (u16, u16)) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn centre_of(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

fn key_centre(app: &App, key: KeyId) -> (u16, u16) {
    centre_of(app.presenter.keyboard().frame_of(key).unwrap())
}

fn down(app: &mut App, at: (u16, u16), now: Instant) {
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), at), now);
}

fn drag(app: &mut App, at: (u16, u16), now: Instant) {
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), at), now);
}

fn up(app: &mut App, at: (u16, u16), now: Instant) {
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), at), now);
}

fn hold(app: &mut App, start: Instant) -> Instant {
    let later = start + app.gesture.threshold() + Duration::from_millis(10);
    app.tick(later);
    later
}

#[test]
fn test_quick_click_types_key() {
    let mut app = app();
    let start = Instant::now();
    let at = key_centre(&app, YEH);

    down(&mut app, at, start);
    app.tick(start + Duration::from_millis(50));
    up(&mut app, at, start + Duration::from_millis(80));

    assert_eq!(app.buffer.text(), "ی");
    assert!(app.controller.overlay().is_none());
}

#[test]
fn test_long_press_then_release_on_alternative() {
    let mut app = app();
    let start = Instant::now();
    let at = key_centre(&app, ALEF);

    down(&mut app, at, start);
    let now = hold(&mut app, start);
    assert!(app.presenter.is_visible());
    assert_eq!(app.controller.overlay().unwrap().alternatives().len(), 4);

    let cell = centre_of(app.presenter.geometry().unwrap().cells()[3]);
    drag(&mut app, cell, now);
    assert_eq!(
        app.controller.overlay().unwrap().highlighted_text(),
        Some("إ")
    );

    up(&mut app, cell, now);
    assert_eq!(app.buffer.text(), "إ");
    assert!(!app.presenter.is_visible());
    assert!(app.gesture.pressed_key().is_none());
}

#[test]
fn test_long_press_released_outside_inserts_nothing() {
    let mut app = app();
    let start = Instant::now();

    let at = key_centre(&app, ALEF);
    down(&mut app, at, start);
    let now = hold(&mut app, start);
    let cell = centre_of(app.presenter.geometry().unwrap().cells()[2]);
    drag(&mut app, cell, now);

    up(&mut app, (0, 0), now);
    assert!(app.buffer.is_empty());
    assert!(app.controller.overlay().is_none());
    assert!(!app.presenter.is_visible());
}

#[test]
fn test_long_press_released_on_source_key_inserts_nothing() {
    let mut app = app();
    let start = Instant::now();
    let at = key_centre(&app, YEH);

    down(&mut app, at, start);
    let now = hold(&mut app, start);
    let overlay = app.presenter.geometry().unwrap().area();
    let source = app.presenter.keyboard().frame_of(YEH).unwrap();
    assert!(overlay.bottom() <= source.y);

    up(&mut app, at, now);
    assert!(app.buffer.is_empty());
}

#[test]
fn test_holding_plain_key_still_taps_once() {
    let mut app = app();
    let start = Instant::now();
    let at = key_centre(&app, BEH);

    down(&mut app, at, start);
    let now = hold(&mut app, start);
    assert!(app.controller.overlay().is_none());

    up(&mut app, at, now + Duration::from_secs(1));
    assert_eq!(app.buffer.text(), "ب");
}

#[test]
fn test_release_on_other_key_types_nothing() {
    let mut app = app();
    let start = Instant::now();

    let beh = key_centre(&app, BEH);
    let yeh = key_centre(&app, YEH);
    down(&mut app, beh, start);
    drag(&mut app, yeh, start);
    up(&mut app, yeh, start);

    assert!(app.buffer.is_empty());
}

#[test]
fn test_space_delete_and_newline_keys() {
    let mut app = app();
    let start = Instant::now();

    for key in [BEH, KeyId::Space, KeyId::Newline, YEH, KeyId::Delete] {
        let at = key_centre(&app, key);
        down(&mut app, at, start);
        up(&mut app, at, start);
    }

    assert_eq!(app.buffer.text(), "ب \n");
}

#[test]
fn test_space_bar_is_widest_key() {
    let app = app();
    let space = app.presenter.keyboard().frame_of(KeyId::Space).unwrap();
    for frame in app.presenter.keyboard().frames() {
        if frame.key != KeyId::Space {
            assert!(frame.rect.width < space.width, "{}", frame.key);
        }
    }
}

#[test]
fn test_cancel_gesture_closes_overlay() {
    let mut app = app();
    let start = Instant::now();

    let at = key_centre(&app, YEH);
    down(&mut app, at, start);
    hold(&mut app, start);
    assert!(app.presenter.is_visible());

    app.cancel_gesture();
    assert!(!app.presenter.is_visible());
    assert!(app.controller.overlay().is_none());
    assert!(app.buffer.is_empty());
}
