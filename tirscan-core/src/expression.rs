use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use crate::constants::CORE_LENGTH;
use crate::sequence::normalize_sequence;
use crate::types::TirError;

/// Empirical expression table keyed by 6-base core motif.
///
/// Maps each known Shine-Dalgarno core motif to a log-scale expression
/// value measured for that motif. The table is immutable after
/// construction and is injected into the predictor rather than held as
/// process-global state, so it can be shared freely across callers.
///
/// Motifs absent from the table are a normal, expected case: most 6-mers
/// in a genome are not canonical ribosome binding sites.
#[derive(Debug, Clone, Default)]
pub struct ExpressionTable {
    scores: HashMap<String, f64>,
}

impl ExpressionTable {
    /// Load the table from a JSON object of motif → log expression value.
    ///
    /// # Errors
    ///
    /// Returns [`TirError`] if the file cannot be read, is not a JSON
    /// object of numbers, or contains malformed or duplicate motifs.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, TirError> {
        let file = File::open(path.as_ref())?;
        let raw: HashMap<String, f64> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| TirError::ParseError(e.to_string()))?;
        let table = Self::from_entries(raw)?;
        info!("loaded expression table with {} motifs", table.len());
        Ok(table)
    }

    /// Build the table from in-memory entries.
    ///
    /// Keys are normalized (uppercase, `U` → `T`) before insertion. Keys
    /// that are not 6 bases over `{A, C, G, T}` after normalization, or
    /// that collide with an already-normalized key, are rejected.
    pub fn from_entries<I>(entries: I) -> Result<Self, TirError>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut scores = HashMap::new();

        for (key, value) in entries {
            let motif = normalize_sequence(&key);
            if motif.len() != CORE_LENGTH {
                return Err(TirError::InvalidTable(format!(
                    "motif {:?} is {} bases, expected {}",
                    key,
                    motif.len(),
                    CORE_LENGTH
                )));
            }
            if !motif.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')) {
                return Err(TirError::InvalidTable(format!(
                    "motif {:?} contains characters outside ACGT",
                    key
                )));
            }
            if scores.insert(motif, value).is_some() {
                return Err(TirError::InvalidTable(format!("duplicate motif {:?}", key)));
            }
        }

        Ok(Self { scores })
    }

    /// Look up the log-scale expression value for a core motif.
    ///
    /// Matching is done after uppercasing and replacing `U` with `T`.
    /// Absent motifs resolve to `0.0` rather than an error.
    #[must_use]
    pub fn lookup(&self, motif: &str) -> f64 {
        self.get(motif).unwrap_or(0.0)
    }

    /// Look up a core motif, distinguishing absent keys from stored zeros.
    ///
    /// The predictor needs this distinction: a stored value of zero still
    /// enters the penalized score, while an absent window scores nothing.
    #[must_use]
    pub fn get(&self, motif: &str) -> Option<f64> {
        self.scores.get(&normalize_sequence(motif)).copied()
    }

    /// Number of motifs in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table holds no motifs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
