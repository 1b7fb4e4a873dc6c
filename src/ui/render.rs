// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::seq::sanitize::MIN_SEQUENCE_LEN;

use super::{InputMode, UI, USER_GUIDE};

pub const TITLE: &str = "DNA Coding / Non-Coding Predictor";
pub const PLACEHOLDER: &str = "Paste DNA sequence (A,T,C,G only)...";
pub const WAITING_MSG: &str = "Predicting...";
const HINTS: &str = " Enter: predict | Ctrl-U: clear | F1: help | Esc: quit ";
const RESULT_PANE_HEIGHT: u16 = 6;

pub fn render_ui(f: &mut Frame, ui: &mut UI) {
    let [title_area, input_area, msg_area, result_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(RESULT_PANE_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_title(f, ui, title_area);
    render_input(f, ui, input_area);
    render_message(f, ui, msg_area);
    render_result(f, ui, result_area);
    render_hints(f, ui, hint_area);

    if ui.input_mode() == InputMode::Help {
        render_help(f, ui);
    }
}

fn render_title(f: &mut Frame, ui: &UI, area: Rect) {
    let mut spans = vec![Span::styled(
        TITLE,
        Style::new().add_modifier(Modifier::BOLD),
    )];
    if let Some(label) = &ui.app().source_label {
        spans.push(Span::raw(format!("  [{}]", label)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

// Splits the sequence into rows of exactly `width` characters, so that the cursor position can
// be computed without second-guessing the wrapping algorithm.
fn sequence_rows(sequence: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = sequence.chars().collect();
    chars
        .chunks(width)
        .map(|row| row.iter().collect())
        .collect()
}

fn render_input(f: &mut Frame, ui: &UI, area: Rect) {
    let app = ui.app();
    let len = app.sequence_len();
    let counter = format!(" {} nt (min {}) ", len, MIN_SEQUENCE_LEN);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sequence ")
        .title_bottom(Line::from(counter).right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let cursor = app.cursor();
    let cursor_row = (cursor / width) as u16;
    // Keep the cursor row visible.
    let scroll = cursor_row.saturating_sub(inner.height - 1);

    let paragraph = if len == 0 {
        Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::new().add_modifier(Modifier::DIM),
        ))
    } else {
        let lines: Vec<Line> = sequence_rows(&app.sequence(), width)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(lines).scroll((scroll, 0))
    };
    f.render_widget(paragraph, inner);

    if ui.input_mode() == InputMode::Editing {
        let x = inner.x + (cursor % width) as u16;
        let y = inner.y + cursor_row - scroll;
        debug!("cursor at {} -> ({}, {})", cursor, x, y);
        f.set_cursor_position(Position::new(x, y));
    }
}

fn render_message(f: &mut Frame, ui: &UI, area: Rect) {
    let app = ui.app();
    let line = if let Some(msg) = app.error_message() {
        Line::from(Span::styled(msg.to_string(), ui.error_style()))
    } else if app.is_waiting() {
        Line::from(Span::styled(WAITING_MSG, ui.waiting_style()))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_result(f: &mut Frame, ui: &UI, area: Rect) {
    let Some(result) = ui.app().result() else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Prediction Result ");
    let lines = vec![
        Line::from(vec![
            Span::styled("Prediction: ", Style::new().add_modifier(Modifier::BOLD)),
            Span::styled(result.label(), ui.result_style()),
        ]),
        Line::from(vec![
            Span::styled(
                "Input DNA (cleaned): ",
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::raw(result.dna_sequence.clone()),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_hints(f: &mut Frame, ui: &UI, area: Rect) {
    let line = Line::from(vec![
        Span::styled(HINTS, ui.hint_style()),
        Span::raw(format!(" {}", ui.app().endpoint)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_help(f: &mut Frame, ui: &UI) {
    let frame = f.area();
    let width = frame.width.saturating_sub(4).min(80);
    let height = frame.height.saturating_sub(2);
    let area = Rect::new(
        frame.x + (frame.width - width) / 2,
        frame.y + (frame.height - height) / 2,
        width,
        height,
    );
    let help = Paragraph::new(USER_GUIDE)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .scroll((ui.help_scroll(), 0));
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
