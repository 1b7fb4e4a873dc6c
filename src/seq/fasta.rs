// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::DnaFormError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, DnaFormError> {
    let file = File::open(path)?;
    read_fasta(BufReader::new(file))
}

pub fn read_fasta<R: BufRead>(reader: R) -> Result<SeqFile, DnaFormError> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let l = line.trim_end_matches('\r');
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(record) = current_record.take() {
                result.push(record);
            }
            current_record = Some(SeqRecord {
                header: hdr.trim().to_string(),
                sequence: String::new(),
            });
        } else if l.trim().is_empty() {
            continue;
        } else {
            // append line to current record's sequence
            match current_record.as_mut() {
                Some(record) => record.sequence.push_str(l.trim()),
                None => {
                    return Err(DnaFormError::Format(format!(
                        "line {}: sequence data before first FastA header",
                        lineno + 1
                    )))
                }
            }
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fasta_file_1() {
        let path = "tests/data/test1.fas";
        let fasta: SeqFile = read_fasta_file(path).expect("Test file not found");
        assert_eq!(fasta.len(), 1);
        assert_eq!(fasta[0].header, "seq1");
        assert_eq!(fasta[0].sequence, "GAATTC");
    }

    #[test]
    fn test_read_fasta_file_2() {
        let path = "tests/data/test2.fas";
        let fasta: SeqFile = read_fasta_file(path).expect("Test file not found");
        assert_eq!(fasta[0].header, "seq1");
        assert_eq!(fasta[0].sequence, "ttgccg-cga");
        assert_eq!(fasta[1].header, "seq2 some description");
        assert_eq!(fasta[1].sequence, "TTCCCGGCGATTACCG");
        assert_eq!(fasta[2].header, "seq3");
        assert_eq!(fasta[2].sequence, "TTACCGNCAA");
    }

    #[test]
    fn test_read_fasta_no_header() {
        match read_fasta_file("tests/data/no_header.fas") {
            Err(DnaFormError::Format(msg)) => assert!(msg.contains("line 1")),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_fasta_empty() {
        let fasta = read_fasta("".as_bytes()).unwrap();
        assert!(fasta.is_empty());
    }

    #[test]
    fn test_read_fasta_missing_file() {
        assert!(matches!(
            read_fasta_file("tests/data/does-not-exist.fas"),
            Err(DnaFormError::Io(_))
        ));
    }
}
