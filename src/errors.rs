// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io};

#[derive(Debug)]
pub enum DnaFormError {
    Io(io::Error),
    Config(String),
    Transport(String),
    Format(String),
}

// These allow conversion to DnaFormError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for DnaFormError {
    fn from(e: io::Error) -> Self {
        DnaFormError::Io(e)
    }
}

impl From<String> for DnaFormError {
    fn from(s: String) -> Self {
        DnaFormError::Format(s)
    }
}

impl From<reqwest::Error> for DnaFormError {
    fn from(e: reqwest::Error) -> Self {
        DnaFormError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for DnaFormError {
    fn from(e: serde_json::Error) -> Self {
        DnaFormError::Config(e.to_string())
    }
}

impl fmt::Display for DnaFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnaFormError::Io(e) => write!(f, "I/O error: {}", e),
            DnaFormError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DnaFormError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DnaFormError::Format(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl std::error::Error for DnaFormError {}
