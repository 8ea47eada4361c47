use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Decomposition of a leader sequence into its ribosome binding site parts.
///
/// Produced by the spacing predictor: the winning 6-base core motif, the
/// sequence upstream of it, the spacer downstream of it, and the predicted
/// expression value for that decomposition.
///
/// Invariant: `upstream + core + spacer` reconstructs the normalized
/// (uppercased, U replaced by T) leader exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderDecomposition {
    /// Sequence before the core motif (may be empty)
    pub upstream: String,
    /// The winning 6-base core motif
    pub core: String,
    /// Spacer sequence between the core and the coding region, including
    /// the buffer bases before the start codon
    pub spacer: String,
    /// Predicted expression value, rounded to four decimal places
    pub expression: f64,
}

impl LeaderDecomposition {
    /// Spacer offset that produced this decomposition (spacer length minus
    /// the buffer base before the coding sequence)
    #[must_use]
    pub fn offset(&self) -> usize {
        self.spacer.len().saturating_sub(1)
    }
}

impl fmt::Display for LeaderDecomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "upstream={};core={};spacer={};expr={:.4}",
            self.upstream, self.core, self.spacer, self.expression
        )
    }
}

/// Error types that can occur during expression prediction
#[derive(Error, Debug)]
pub enum TirError {
    /// Input sequence cannot be analyzed (e.g. non-ASCII content)
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),
    /// Leader is too short for even a single core window
    #[error("Leader too short: {length} bases (need at least {required})")]
    LeaderTooShort { length: usize, required: usize },
    /// The predictor was asked to scan zero spacer offsets
    #[error("Invalid max spacing: must be at least 1")]
    InvalidMaxSpacing,
    /// Problem with the expression table contents
    #[error("Invalid expression table: {0}")]
    InvalidTable(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposition_reconstructs_leader() {
        let decomposition = LeaderDecomposition {
            upstream: "TTTTTT".to_string(),
            core: "AAGGAG".to_string(),
            spacer: "TT".to_string(),
            expression: 1.5,
        };
        let rebuilt = format!(
            "{}{}{}",
            decomposition.upstream, decomposition.core, decomposition.spacer
        );
        assert_eq!(rebuilt, "TTTTTTAAGGAGTT");
        assert_eq!(decomposition.offset(), 1);
    }

    #[test]
    fn test_decomposition_display() {
        let decomposition = LeaderDecomposition {
            upstream: "AC".to_string(),
            core: "AGGAGG".to_string(),
            spacer: "TATG".to_string(),
            expression: 0.25,
        };
        assert_eq!(
            decomposition.to_string(),
            "upstream=AC;core=AGGAGG;spacer=TATG;expr=0.2500"
        );
    }
}
