// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use ratatui::style::{Color, Modifier, Style};

pub const ERROR_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);

pub const RESULT_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

pub const WAITING_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

pub const HINT_STYLE: Style = Style::new().fg(Color::White).bg(Color::Blue);

const MONO_EMPHASIS: Style = Style::new().add_modifier(Modifier::BOLD);

const MONO_ALERT: Style = Style::new().add_modifier(Modifier::BOLD.union(Modifier::REVERSED));

pub fn error_style(monochrome: bool, custom_bg: Option<(u8, u8, u8)>) -> Style {
    match (monochrome, custom_bg) {
        (true, _) => MONO_ALERT,
        (false, Some((r, g, b))) => ERROR_STYLE.bg(Color::Rgb(r, g, b)),
        (false, None) => ERROR_STYLE,
    }
}

pub fn result_style(monochrome: bool, custom_fg: Option<(u8, u8, u8)>) -> Style {
    match (monochrome, custom_fg) {
        (true, _) => MONO_EMPHASIS,
        (false, Some((r, g, b))) => RESULT_STYLE.fg(Color::Rgb(r, g, b)),
        (false, None) => RESULT_STYLE,
    }
}

pub fn waiting_style(monochrome: bool) -> Style {
    if monochrome {
        MONO_EMPHASIS
    } else {
        WAITING_STYLE
    }
}

pub fn hint_style(monochrome: bool) -> Style {
    if monochrome {
        Style::new().add_modifier(Modifier::REVERSED)
    } else {
        HINT_STYLE
    }
}
