// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Client side of the prediction service.
//!
//! The service takes `{"DNA_sequence": "..."}` on `POST /predict` and answers either
//! `{"DNA_sequence": "...", "prediction": 0|1, "meaning": "..."}` or `{"error": "..."}`. The
//! latter comes with a 4xx status, so the body is decoded whatever the status.

use std::{
    sync::{mpsc::Sender, Arc},
    thread,
};

use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::errors::DnaFormError;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

pub const TRANSPORT_FAILURE_MSG: &str =
    "API request failed. Make sure the prediction service is running.";

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    #[serde(rename = "DNA_sequence")]
    pub dna_sequence: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "DNA_sequence")]
    pub dna_sequence: String,
    pub prediction: i64,
    #[serde(default)]
    pub meaning: Option<String>,
}

impl PredictionResult {
    pub fn is_coding(&self) -> bool {
        self.prediction == 1
    }

    pub fn label(&self) -> &'static str {
        if self.is_coding() {
            "Coding"
        } else {
            "Non-Coding"
        }
    }
}

// Failure is tried first: a body carrying an `error` field is an error, whatever else it holds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Failure { error: String },
    Success(PredictionResult),
}

/// What a submission ended with, as far as the form is concerned.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Predicted(PredictionResult),
    Rejected(String),
    TransportFailed(String),
}

impl From<Result<PredictResponse, DnaFormError>> for PredictionOutcome {
    fn from(res: Result<PredictResponse, DnaFormError>) -> Self {
        match res {
            Ok(PredictResponse::Success(result)) => PredictionOutcome::Predicted(result),
            Ok(PredictResponse::Failure { error }) => PredictionOutcome::Rejected(error),
            Err(e) => PredictionOutcome::TransportFailed(e.to_string()),
        }
    }
}

/// A sequence that passed validation, tagged with the generation it was submitted under.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub generation: u64,
    pub sequence: String,
}

/// An outcome on its way back to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub generation: u64,
    pub outcome: PredictionOutcome,
}

pub trait Predictor: Send + Sync {
    fn predict(&self, sequence: &str) -> Result<PredictResponse, DnaFormError>;
}

pub struct HttpPredictor {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpPredictor {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, DnaFormError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(HttpPredictor {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GETs the root of the service and returns its banner.
    pub fn check_service(&self) -> Result<String, DnaFormError> {
        let url = reqwest::Url::parse(&self.endpoint)
            .and_then(|u| u.join("/"))
            .map_err(|e| DnaFormError::Config(format!("bad endpoint {}: {}", self.endpoint, e)))?;
        debug!("Checking service at {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?.trim().to_string())
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, sequence: &str) -> Result<PredictResponse, DnaFormError> {
        info!("POST {} ({} nt)", self.endpoint, sequence.len());
        // .json() also sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest {
                dna_sequence: sequence,
            })
            .send()?;
        debug!("Response status: {}", response.status());
        let body: PredictResponse = response.json()?;
        Ok(body)
    }
}

/// Runs one submission to completion, logging transport failures.
pub fn run_submission(predictor: &dyn Predictor, submission: &Submission) -> Delivery {
    let outcome = PredictionOutcome::from(predictor.predict(&submission.sequence));
    if let PredictionOutcome::TransportFailed(ref e) = outcome {
        error!("Prediction request #{} failed: {}", submission.generation, e);
    }
    Delivery {
        generation: submission.generation,
        outcome,
    }
}

/// Runs the submission on its own thread and sends the outcome down `tx`. The caller keeps
/// handling events meanwhile.
pub fn spawn_submission(
    predictor: Arc<dyn Predictor>,
    submission: Submission,
    tx: Sender<Delivery>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let delivery = run_submission(predictor.as_ref(), &submission);
        if tx.send(delivery).is_err() {
            // Receiver gone: the user quit while the request was in flight.
            debug!("Dropping outcome of request #{}", submission.generation);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::mpsc;

    struct Canned(Result<PredictResponse, String>);

    impl Predictor for Canned {
        fn predict(&self, _sequence: &str) -> Result<PredictResponse, DnaFormError> {
            self.0.clone().map_err(DnaFormError::Transport)
        }
    }

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(PredictRequest {
            dna_sequence: "ACGT",
        })
        .unwrap();
        assert_eq!(body, json!({"DNA_sequence": "ACGT"}));
    }

    #[test]
    fn test_decode_success() {
        let resp: PredictResponse = serde_json::from_value(json!({
            "DNA_sequence": "ATCG",
            "prediction": 1,
            "meaning": "Coding"
        }))
        .unwrap();
        match resp {
            PredictResponse::Success(r) => {
                assert_eq!(r.dna_sequence, "ATCG");
                assert_eq!(r.label(), "Coding");
                assert_eq!(r.meaning.as_deref(), Some("Coding"));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_success_without_meaning() {
        let resp: PredictResponse =
            serde_json::from_value(json!({"DNA_sequence": "ATCG", "prediction": 0})).unwrap();
        match resp {
            PredictResponse::Success(r) => {
                assert_eq!(r.label(), "Non-Coding");
                assert_eq!(r.meaning, None);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_failure_wins() {
        let resp: PredictResponse = serde_json::from_value(json!({
            "error": "too short",
            "DNA_sequence": "ATCG",
            "prediction": 1
        }))
        .unwrap();
        assert_eq!(
            resp,
            PredictResponse::Failure {
                error: String::from("too short")
            }
        );
    }

    #[test]
    fn test_decode_unrecognised() {
        let resp = serde_json::from_value::<PredictResponse>(json!({"status": "ok"}));
        assert!(resp.is_err());
    }

    #[test]
    fn test_label_only_one_is_coding() {
        let mut r = PredictionResult {
            dna_sequence: String::from("A"),
            prediction: 2,
            meaning: None,
        };
        assert_eq!(r.label(), "Non-Coding");
        r.prediction = 1;
        assert_eq!(r.label(), "Coding");
    }

    #[test]
    fn test_run_submission_transport_failure() {
        let predictor = Canned(Err(String::from("connection refused")));
        let sub = Submission {
            generation: 7,
            sequence: String::from("ACGT"),
        };
        let delivery = run_submission(&predictor, &sub);
        assert_eq!(delivery.generation, 7);
        assert!(matches!(
            delivery.outcome,
            PredictionOutcome::TransportFailed(ref e) if e.contains("connection refused")
        ));
    }

    #[test]
    fn test_spawn_submission_delivers() {
        let predictor: Arc<dyn Predictor> = Arc::new(Canned(Ok(PredictResponse::Failure {
            error: String::from("No sequence provided"),
        })));
        let (tx, rx) = mpsc::channel();
        let handle = spawn_submission(
            predictor,
            Submission {
                generation: 3,
                sequence: String::new(),
            },
            tx,
        );
        handle.join().unwrap();
        let delivery = rx.recv().unwrap();
        assert_eq!(
            delivery,
            Delivery {
                generation: 3,
                outcome: PredictionOutcome::Rejected(String::from("No sequence provided")),
            }
        );
    }
}
