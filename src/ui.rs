// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
pub mod key_handling;
pub mod line_editor;
mod msg_theme;
pub mod render;

use ratatui::style::Style;

use crate::{
    predict::{Delivery, Submission},
    App,
};

pub const USER_GUIDE: &str = include_str!("ui/bindings.md");

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputMode {
    Editing,
    Help,
}

pub struct UI<'a> {
    app: &'a mut App,
    input_mode: InputMode,
    monochrome: bool,
    help_scroll: u16,
    // Set by anything that changes what is on screen, so the main loop only redraws when needed.
    dirty: bool,
    quit: bool,
}

impl<'a> UI<'a> {
    pub fn new(app: &'a mut App) -> Self {
        UI {
            app,
            input_mode: InputMode::Editing,
            monochrome: false,
            help_scroll: 0,
            dirty: true,
            quit: false,
        }
    }

    pub fn app(&self) -> &App {
        &*self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        self.mark_dirty();
        &mut *self.app
    }

    pub fn take_submission(&mut self) -> Option<Submission> {
        self.app.take_submission()
    }

    /// Applies an outcome to the form; only a non-stale one needs a redraw.
    pub fn apply(&mut self, delivery: Delivery) -> bool {
        let applied = self.app.apply(delivery);
        if applied {
            self.mark_dirty();
        }
        applied
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn toggle_help(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Editing => {
                self.help_scroll = 0;
                InputMode::Help
            }
            InputMode::Help => InputMode::Editing,
        };
        self.mark_dirty();
    }

    pub fn help_scroll(&self) -> u16 {
        self.help_scroll
    }

    pub fn help_scroll_by(&mut self, delta: i32) {
        let max = USER_GUIDE.lines().count().saturating_sub(1) as i32;
        self.help_scroll = (self.help_scroll as i32 + delta).clamp(0, max) as u16;
        self.mark_dirty();
    }

    // Colors

    pub fn set_monochrome(&mut self) {
        self.monochrome = true;
    }

    pub fn error_style(&self) -> Style {
        msg_theme::error_style(self.monochrome, self.app.colors.error)
    }

    pub fn result_style(&self) -> Style {
        msg_theme::result_style(self.monochrome, self.app.colors.result)
    }

    pub fn waiting_style(&self) -> Style {
        msg_theme::waiting_style(self.monochrome)
    }

    pub fn hint_style(&self) -> Style {
        msg_theme::hint_style(self.monochrome)
    }

    // Redraw bookkeeping

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
