/// Length of the core Shine-Dalgarno motif in bases
pub const CORE_LENGTH: usize = 6;

/// Distance from the end of the leader to the end of the core window at
/// spacer offset zero (the spacer always keeps at least one base plus the
/// buffer before the coding sequence)
pub const CORE_END_OFFSET: usize = 1;

/// Minimum leader length required for the windowed scan (one full core
/// window at offset zero)
pub const MIN_LEADER_LENGTH: usize = CORE_LENGTH + CORE_END_OFFSET;

/// Default number of spacer offsets scanned by the predictor
pub const DEFAULT_MAX_SPACING: usize = 12;

/// Optimal spacer distance in the RBS-Calculator spacing convention
pub const OPTIMAL_SPACING: i32 = 5;

/// Logistic coefficients applied when the spacer is shorter than optimal:
/// amplitude, steepness, midpoint shift, denominator exponent
pub const PUSH_COEFFICIENTS: [f64; 4] = [12.2, 2.5, 2.0, 3.0];

/// Quadratic coefficients applied when the spacer is longer than optimal:
/// quadratic, linear, constant term
pub const PULL_COEFFICIENTS: [f64; 3] = [0.048, 0.24, 0.0];

/// Default multiplicative weight applied to the spacing penalty before
/// exponentiation
pub const DEFAULT_PENALTY_WEIGHT: f64 = 0.235;

/// Factor used to round predicted expression values to four decimal places
pub const EXPRESSION_ROUNDING_FACTOR: f64 = 10_000.0;
