// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::sanitize::is_nucleotide;

#[derive(Clone, Debug, PartialEq)]
pub struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
        }
    }

    pub fn with_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Applies the sanitizer in place: uppercases and drops non-nucleotides. The cursor stays
    /// behind the same kept characters. The result always equals `sanitize(&self.text())`.
    pub fn sanitize(&mut self) {
        let mut kept: Vec<char> = Vec::with_capacity(self.chars.len());
        let mut cursor = 0;
        for (i, c) in self.chars.iter().enumerate() {
            let before_cursor = i < self.cursor;
            for u in c.to_uppercase().filter(|u| is_nucleotide(*u)) {
                kept.push(u);
                if before_cursor {
                    cursor += 1;
                }
            }
        }
        self.chars = kept;
        self.cursor = cursor;
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}
