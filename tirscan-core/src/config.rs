use crate::constants::{
    DEFAULT_MAX_SPACING, DEFAULT_PENALTY_WEIGHT, OPTIMAL_SPACING, PULL_COEFFICIENTS,
    PUSH_COEFFICIENTS,
};

/// Output format options for prediction results.
///
/// # Formats
///
/// - **Text**: Human-readable blocks, one per result
/// - **Tsv**: Tab-delimited rows with a header line
/// - **Json**: Machine-readable JSON of the result types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text blocks.
    ///
    /// One block per leader or cluster, suitable for terminal use.
    Text,

    /// Tab-delimited output.
    ///
    /// One row per result with a header line. Lightweight and easy to
    /// parse in downstream scripts.
    Tsv,

    /// JSON output.
    ///
    /// Serializes the full result structures, including cluster motif
    /// lists.
    Json,
}

/// Constants of the empirical spacing-penalty curve.
///
/// The penalty is zero at the optimal spacing, follows a steep logistic
/// ("push") below it and a smooth quadratic ("pull") above it: spacers
/// shorter than optimal clash with the ribosome footprint, while longer
/// spacers degrade gradually.
///
/// # Examples
///
/// ```rust
/// use tirscan_core::config::SpacingParameters;
///
/// let parameters = SpacingParameters::default();
/// assert_eq!(parameters.optimal_spacing, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpacingParameters {
    /// Optimal spacer distance in the RBS-Calculator convention.
    ///
    /// The penalty is exactly zero at this distance.
    ///
    /// **Default**: `5`
    pub optimal_spacing: i32,

    /// Logistic coefficients for spacers shorter than optimal:
    /// amplitude, steepness, midpoint shift, denominator exponent.
    ///
    /// **Default**: `[12.2, 2.5, 2.0, 3.0]`
    pub push: [f64; 4],

    /// Quadratic coefficients for spacers longer than optimal:
    /// quadratic, linear, constant term.
    ///
    /// **Default**: `[0.048, 0.24, 0.0]`
    pub pull: [f64; 3],

    /// Multiplicative weight applied to the penalty before it enters the
    /// base-10 exponent of the expression score.
    ///
    /// **Default**: `0.235`
    pub penalty_weight: f64,
}

impl Default for SpacingParameters {
    fn default() -> Self {
        Self {
            optimal_spacing: OPTIMAL_SPACING,
            push: PUSH_COEFFICIENTS,
            pull: PULL_COEFFICIENTS,
            penalty_weight: DEFAULT_PENALTY_WEIGHT,
        }
    }
}

/// Configuration settings for the spacing predictor.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use tirscan_core::config::PredictorConfig;
///
/// let config = PredictorConfig::default();
/// assert_eq!(config.max_spacing, 12);
/// ```
///
/// ## Narrower scan window
///
/// ```rust
/// use tirscan_core::config::PredictorConfig;
///
/// let config = PredictorConfig {
///     max_spacing: 8,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PredictorConfig {
    /// Number of spacer offsets to scan.
    ///
    /// The predictor evaluates offsets `0..max_spacing`; offsets whose
    /// core window would run past the start of the leader are skipped.
    /// Must be at least 1.
    ///
    /// **Default**: `12`
    pub max_spacing: usize,

    /// Spacing-penalty curve constants.
    ///
    /// See [`SpacingParameters`].
    pub spacing: SpacingParameters,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            max_spacing: DEFAULT_MAX_SPACING,
            spacing: SpacingParameters::default(),
        }
    }
}
