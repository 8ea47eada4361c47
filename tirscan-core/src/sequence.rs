use std::fs::File;

use bio::io::fasta;

use crate::types::TirError;

/// Leader record read from a FASTA file: (id, description, sequence)
pub type LeaderRecord = (String, Option<String>, String);

/// Normalize a nucleotide sequence for table lookups and slicing.
///
/// Uppercases the sequence and replaces RNA `U` with DNA `T`. Any other
/// characters are left untouched; they simply never match the table.
#[must_use]
pub fn normalize_sequence(sequence: &str) -> String {
    sequence.to_ascii_uppercase().replace('U', "T")
}

/// Read leader sequences using rust-bio for FASTA files
pub fn read_leader_sequences(filename: &str) -> Result<Vec<LeaderRecord>, TirError> {
    let file = File::open(filename)?;
    let reader = fasta::Reader::new(file);
    let mut leaders = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| TirError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let sequence = String::from_utf8(record.seq().to_vec())
            .map_err(|e| TirError::ParseError(e.to_string()))?;
        leaders.push((id, description, sequence));
    }

    Ok(leaders)
}
