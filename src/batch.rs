// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Non-interactive mode: every record of a FastA file goes through the same sanitize / validate /
// predict path as the form, one after the other.

use crate::{
    predict::{run_submission, PredictionOutcome, Predictor, Submission, TRANSPORT_FAILURE_MSG},
    seq::{
        record::SeqRecord,
        sanitize::{sanitize, validate_length},
    },
};

pub fn predict_record(predictor: &dyn Predictor, rank: u64, record: &SeqRecord) -> String {
    let sequence = sanitize(&record.sequence);
    if let Err(msg) = validate_length(&sequence) {
        return format!("{}\tERROR: {}", record.header, msg);
    }
    let submission = Submission {
        generation: rank,
        sequence,
    };
    match run_submission(predictor, &submission).outcome {
        PredictionOutcome::Predicted(result) => format!("{}\t{}", record.header, result.label()),
        PredictionOutcome::Rejected(msg) => format!("{}\tERROR: {}", record.header, msg),
        PredictionOutcome::TransportFailed(_) => {
            format!("{}\tERROR: {}", record.header, TRANSPORT_FAILURE_MSG)
        }
    }
}

pub fn predict_records(predictor: &dyn Predictor, records: &[SeqRecord]) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(i, rec)| predict_record(predictor, i as u64 + 1, rec))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::DnaFormError,
        predict::{PredictResponse, PredictionResult},
        seq::sanitize::TOO_SHORT_MSG,
    };
    use std::sync::Mutex;

    // Classifies by first base, and remembers what it was sent.
    struct FirstBase {
        seen: Mutex<Vec<String>>,
    }

    impl Predictor for FirstBase {
        fn predict(&self, sequence: &str) -> Result<PredictResponse, DnaFormError> {
            self.seen.lock().unwrap().push(sequence.to_string());
            match sequence.chars().next() {
                Some('A') => Ok(PredictResponse::Success(PredictionResult {
                    dna_sequence: sequence.to_string(),
                    prediction: 1,
                    meaning: None,
                })),
                Some('C') => Ok(PredictResponse::Success(PredictionResult {
                    dna_sequence: sequence.to_string(),
                    prediction: 0,
                    meaning: None,
                })),
                Some('G') => Ok(PredictResponse::Failure {
                    error: String::from("model unavailable"),
                }),
                _ => Err(DnaFormError::Transport(String::from("connection reset"))),
            }
        }
    }

    fn rec(header: &str, sequence: String) -> SeqRecord {
        SeqRecord {
            header: String::from(header),
            sequence,
        }
    }

    #[test]
    fn test_predict_records() {
        let predictor = FirstBase {
            seen: Mutex::new(Vec::new()),
        };
        let records = vec![
            rec("coding", "a".repeat(60)),
            rec("noncoding", "C-".repeat(60)),
            rec("rejected", "G".repeat(60)),
            rec("down", "T".repeat(60)),
            rec("short", "ACGT".to_string()),
        ];
        let lines = predict_records(&predictor, &records);
        assert_eq!(
            lines,
            vec![
                String::from("coding\tCoding"),
                String::from("noncoding\tNon-Coding"),
                String::from("rejected\tERROR: model unavailable"),
                format!("down\tERROR: {}", TRANSPORT_FAILURE_MSG),
                format!("short\tERROR: {}", TOO_SHORT_MSG),
            ]
        );
        let seen = predictor.seen.lock().unwrap();
        // The short record never reached the service, and what did was sanitized.
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], "A".repeat(60));
        assert_eq!(seen[1], "C".repeat(60));
    }
}
