// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fs, path::Path};

use hex_color::HexColor;
use log::{debug, info};
use serde_json::Value;

use crate::{
    errors::DnaFormError,
    predict::{Delivery, PredictionOutcome, PredictionResult, Submission, TRANSPORT_FAILURE_MSG},
    seq::sanitize::validate_length,
    ui::line_editor::LineEditor,
};


#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorConfig {
    pub error: Option<(u8, u8, u8)>,
    pub result: Option<(u8, u8, u8)>,
}

impl ColorConfig {
    pub fn from_value(value: &Value) -> Self {
        ColorConfig {
            error: parse_hex(value.get("error_color")),
            result: parse_hex(value.get("result_color")),
        }
    }
}

fn parse_hex(value: Option<&Value>) -> Option<(u8, u8, u8)> {
    let s = value?.as_str()?;
    match HexColor::parse(s) {
        Ok(c) => Some((c.r, c.g, c.b)),
        Err(e) => {
            debug!("Ignoring color {}: {}", s, e);
            None
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormConfig {
    pub endpoint: Option<String>,
    pub colors: ColorConfig,
}

impl FormConfig {
    pub fn from_value(value: &Value) -> Self {
        FormConfig {
            endpoint: value
                .get("endpoint")
                .and_then(Value::as_str)
                .map(String::from),
            colors: ColorConfig::from_value(value),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, DnaFormError> {
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        if !value.is_object() {
            return Err(DnaFormError::Config(String::from(
                "top level must be a JSON object",
            )));
        }
        Ok(FormConfig::from_value(&value))
    }
}

/// State of the form. At most one of `error_message` and `result` is set at any time.
pub struct App {
    editor: LineEditor,
    error_message: Option<String>,
    result: Option<PredictionResult>,
    // Bumped by every submission and every edit; outcomes for any other generation than
    // `in_flight` are stale.
    generation: u64,
    in_flight: Option<u64>,
    outgoing: Option<Submission>,
    pub source_label: Option<String>,
    pub endpoint: String,
    pub colors: ColorConfig,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        App {
            editor: LineEditor::new(),
            error_message: None,
            result: None,
            generation: 0,
            in_flight: None,
            outgoing: None,
            source_label: None,
            endpoint: endpoint.into(),
            colors: ColorConfig::default(),
        }
    }

    /// Prefills the input, e.g. from a FastA record. Goes through the sanitizer like any edit.
    pub fn prefill(&mut self, raw: &str, label: Option<String>) {
        self.edit(|ed| {
            ed.clear();
            ed.insert_str(raw);
        });
        self.source_label = label;
    }

    // Input

    pub fn sequence(&self) -> String {
        self.editor.text()
    }

    pub fn sequence_len(&self) -> usize {
        self.editor.len()
    }

    pub fn cursor(&self) -> usize {
        self.editor.cursor()
    }

    // Any change to the input invalidates whatever the form currently shows, as well as any
    // request still in flight.
    fn edit<F: FnOnce(&mut LineEditor)>(&mut self, f: F) {
        f(&mut self.editor);
        self.editor.sanitize();
        self.error_message = None;
        self.result = None;
        self.generation += 1;
        if let Some(stale) = self.in_flight.take() {
            debug!("Input edited; request #{} is now stale", stale);
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.edit(|ed| ed.insert_char(c));
    }

    pub fn insert_str(&mut self, s: &str) {
        self.edit(|ed| ed.insert_str(s));
    }

    pub fn backspace(&mut self) {
        self.edit(LineEditor::backspace);
    }

    pub fn delete(&mut self) {
        self.edit(LineEditor::delete);
    }

    pub fn clear_input(&mut self) {
        self.edit(LineEditor::clear);
    }

    pub fn move_left(&mut self) {
        self.editor.move_left();
    }

    pub fn move_right(&mut self) {
        self.editor.move_right();
    }

    pub fn move_home(&mut self) {
        self.editor.move_home();
    }

    pub fn move_end(&mut self) {
        self.editor.move_end();
    }

    // Validation and submission

    pub fn validate(&mut self) -> bool {
        match validate_length(&self.editor.text()) {
            Ok(()) => true,
            Err(msg) => {
                self.set_error(msg);
                false
            }
        }
    }

    /// Handles the user's request to predict. If the sequence is valid, queues a submission
    /// (see `take_submission()`) and returns true.
    pub fn submit(&mut self) -> bool {
        self.error_message = None;
        if !self.validate() {
            return false;
        }
        self.generation += 1;
        if let Some(stale) = self.in_flight.replace(self.generation) {
            debug!("Request #{} superseded by #{}", stale, self.generation);
        }
        info!(
            "Submitting request #{} ({} nt)",
            self.generation,
            self.sequence_len()
        );
        self.outgoing = Some(Submission {
            generation: self.generation,
            sequence: self.editor.text(),
        });
        true
    }

    pub fn take_submission(&mut self) -> Option<Submission> {
        self.outgoing.take()
    }

    pub fn is_waiting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Applies an outcome if it belongs to the outstanding request; returns false (and changes
    /// nothing) for stale ones.
    pub fn apply(&mut self, delivery: Delivery) -> bool {
        if self.in_flight != Some(delivery.generation) {
            debug!("Discarding stale outcome of request #{}", delivery.generation);
            return false;
        }
        self.in_flight = None;
        match delivery.outcome {
            PredictionOutcome::Predicted(result) => {
                self.error_message = None;
                self.result = Some(result);
            }
            PredictionOutcome::Rejected(msg) => self.set_error(msg),
            PredictionOutcome::TransportFailed(_) => self.set_error(TRANSPORT_FAILURE_MSG),
        }
        true
    }

    // Displayed state

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
        self.result = None;
    }
}
