// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Thomas Junier
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{
    InputMode::{Editing, Help},
    UI,
};

const HELP_PAGE: i32 = 10;

/// Returns true IFF the user quits.
pub fn handle_key_press(ui: &mut UI, key_event: KeyEvent) -> bool {
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        ui.request_quit();
        return true;
    }
    match ui.input_mode() {
        Editing => handle_editing_key(ui, key_event),
        Help => handle_help_key(ui, key_event),
    }
    ui.quit_requested()
}

/// Bracketed paste: the whole string is one edit.
pub fn handle_paste(ui: &mut UI, text: &str) {
    if ui.input_mode() == Editing {
        ui.app_mut().insert_str(text);
    }
}

fn handle_editing_key(ui: &mut UI, key_event: KeyEvent) {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Esc => ui.request_quit(),
        KeyCode::F(1) => ui.toggle_help(),
        KeyCode::Enter => {
            ui.app_mut().submit();
        }
        KeyCode::Char('u') if ctrl => ui.app_mut().clear_input(),
        KeyCode::Char('a') if ctrl => ui.app_mut().move_home(),
        KeyCode::Char('e') if ctrl => ui.app_mut().move_end(),
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => ui.app_mut().insert_char(c),
        KeyCode::Backspace => ui.app_mut().backspace(),
        KeyCode::Delete => ui.app_mut().delete(),
        KeyCode::Left => ui.app_mut().move_left(),
        KeyCode::Right => ui.app_mut().move_right(),
        KeyCode::Home => ui.app_mut().move_home(),
        KeyCode::End => ui.app_mut().move_end(),
        _ => {}
    }
}

fn handle_help_key(ui: &mut UI, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Esc | KeyCode::F(1) => ui.toggle_help(),
        KeyCode::Up | KeyCode::Char('k') => ui.help_scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => ui.help_scroll_by(1),
        KeyCode::PageUp => ui.help_scroll_by(-HELP_PAGE),
        KeyCode::PageDown | KeyCode::Char(' ') => ui.help_scroll_by(HELP_PAGE),
        _ => {}
    }
}
