//! # Tirscan - Ribosome Binding Site Expression Prediction
//!
//! A library for predicting the translation initiation strength of
//! bacterial leader sequences from an empirical expression table.
//!
//! ## Overview
//!
//! Given a nucleotide leader sequence, tirscan locates the ribosome
//! binding site core motif and spacer, scores the predicted expression
//! strength through a measured table of 6-base Shine-Dalgarno motifs
//! combined with an empirical spacing-penalty curve, and cross-references
//! the winning core against a precomputed clustering of known sequences.
//! The inverse direction takes a target expression value and returns the
//! clusters whose statistical range covers it, ranked by normalized
//! distance.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tirscan_core::TirAnalyzer;
//! use tirscan_core::config::PredictorConfig;
//! use tirscan_core::expression::ExpressionTable;
//!
//! let table = ExpressionTable::from_json_file("emopec_data.json")?;
//! let analyzer = TirAnalyzer::new(table, PredictorConfig::default());
//!
//! let decomposition = analyzer.predict_spacing("TTTTTTAAGGAGTT")?;
//! println!(
//!     "core {} at spacer offset {} -> expression {:.4}",
//!     decomposition.core,
//!     decomposition.offset(),
//!     decomposition.expression
//! );
//! # Ok::<(), tirscan_core::types::TirError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Predictor configuration and output format selection
//! - [`types`]: Core data types and the error enum
//! - [`expression`]: The motif expression table
//! - [`spacing`]: The spacing penalty and the offset scan
//! - [`clusters`]: Precomputed cluster statistics and range queries
//! - [`engine`]: The [`TirAnalyzer`] tying everything together
//! - [`results`]: Analysis report types
//! - [`sequence`]: Normalization and FASTA reading
//! - [`output`]: Text, TSV, and JSON writers
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, TirError>`](types::TirError).
//! Missing motifs are not errors: they resolve to the zero-expression
//! sentinel, since most 6-mers are not ribosome binding sites.

pub mod clusters;
pub mod config;
pub mod constants;
pub mod engine;
pub mod expression;
pub mod output;
pub mod results;
pub mod sequence;
pub mod spacing;
pub mod types;

pub use engine::TirAnalyzer;
