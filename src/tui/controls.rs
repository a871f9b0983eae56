//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;
use crate::page::Page;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::F(1) => app.page = Page::Calculator,
        KeyCode::F(2) => app.page = Page::EnergyTips,
        KeyCode::F(3) => app.page = Page::About,
        KeyCode::PageDown => app.next_page(),
        KeyCode::PageUp => app.prev_page(),
        _ if app.page == Page::Calculator => handle_form_key(app, key.code),
        KeyCode::Char('q') => app.quit = true,
        _ => {}
    }
}

fn handle_form_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.cycle_option(false),
        KeyCode::Right => app.cycle_option(true),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(' ') if !app.focus.is_text() => app.activate(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}
