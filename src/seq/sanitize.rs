// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Sequences shorter than this are not worth sending: the classifier works on 3-mers and needs a
// reasonable number of them.
pub const MIN_SEQUENCE_LEN: usize = 60;

pub const TOO_SHORT_MSG: &str = "Please enter at least 60 nucleotides for accurate prediction.";

pub fn is_nucleotide(c: char) -> bool {
    matches!(c, 'A' | 'T' | 'C' | 'G')
}

/// Uppercases `raw` and drops everything outside the nucleotide alphabet {A,T,C,G}.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| is_nucleotide(*c))
        .collect()
}

/// Ok(()) iff the (already sanitized) sequence is long enough to be submitted; the Err carries
/// the advisory shown to the user.
pub fn validate_length(sequence: &str) -> Result<(), &'static str> {
    if sequence.len() < MIN_SEQUENCE_LEN {
        Err(TOO_SHORT_MSG)
    } else {
        Ok(())
    }
}
